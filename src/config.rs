//! Mechanism for loading and sharing the particle gun configuration

use crate::{
    numeric::{reals::consts::PI, Float, MAX_ETA},
    properties::ParticleId,
    Result,
};
use eyre::{ensure, eyre, Report, WrapErr};
use std::{fs, str::FromStr};

/// Closed interval of values which a generated quantity is drawn from
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    /// Lower bound
    pub min: Float,

    /// Upper bound
    pub max: Float,
}
//
impl Interval {
    /// Build an interval from its bounds
    pub fn new(min: Float, max: Float) -> Self {
        Self { min, max }
    }

    /// Truth that the interval contains a single value
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

/// Particle gun configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Configuration {
    /// Number of events to be generated
    pub num_events: usize,

    /// Seed of the random number generator
    pub seed: u64,

    /// Type of the generated particles (None for untyped particles)
    pub particle_id: Option<ParticleId>,

    /// Range of transverse momenta (MeV)
    pub pt: Interval,

    /// Range of pseudo-rapidities
    pub eta: Interval,

    /// Range of azimuthal angles (radians)
    pub phi: Interval,

    /// Space-time vertex of the generated particles (t, x, y, z)
    pub vertex: [Float; 4],
}
//
impl Configuration {
    /// Load the configuration from a file, check it, and print it out
    pub fn load(file_name: &str) -> Result<Self> {
        // Read out the configuration file or die trying
        let config_str = fs::read_to_string(file_name)
            .wrap_err_with(|| format!("Could not read configuration file {}", file_name))?;
        let config = config_str.parse::<Self>()?;

        // Display it so that runs can be told apart in logs
        config.print();
        Ok(config)
    }

    /// Display the configuration
    pub fn print(&self) {
        println!("NUM_EVENTS     : {}", self.num_events);
        println!("SEED           : {}", self.seed);
        println!("PARTICLE_ID    : {}", self.particle_id.map_or(0, ParticleId::code));
        println!("PT             : [{}, {}]", self.pt.min, self.pt.max);
        println!("ETA            : [{}, {}]", self.eta.min, self.eta.max);
        println!("PHI            : [{}, {}]", self.phi.min, self.phi.max);
        let [t, x, y, z] = self.vertex;
        println!("VERTEX         : ({}, {}, {}, {})", t, x, y, z);
    }

    /// Check that the configuration makes sense
    fn validate(&self) -> Result<()> {
        // A sensible run must generate at least one event
        ensure!(self.num_events > 0, "Please generate at least one event");

        // Intervals must be well-formed
        for (name, interval) in [("pt", self.pt), ("eta", self.eta), ("phi", self.phi)] {
            ensure!(
                interval.min <= interval.max,
                "Empty {} range: [{}, {}]",
                name,
                interval.min,
                interval.max
            );
        }
        ensure!(self.pt.min >= 0., "Transverse momenta cannot be negative");
        ensure!(
            self.eta.min >= -MAX_ETA && self.eta.max <= MAX_ETA,
            "Pseudo-rapidities must lie within [-{}, {}]",
            MAX_ETA,
            MAX_ETA
        );
        let max_abs_eta = self.eta.min.abs().max(self.eta.max.abs());
        ensure!(
            (self.pt.max * max_abs_eta.cosh()).is_finite(),
            "Generated momenta would not fit in a floating-point number"
        );
        ensure!(
            self.phi.min >= -PI && self.phi.max <= PI,
            "Azimuthal angles must lie within [-π, π]"
        );
        ensure!(
            self.vertex.iter().all(|coord| coord.is_finite()),
            "Vertex coordinates must be finite"
        );
        Ok(())
    }
}

impl FromStr for Configuration {
    type Err = Report;

    /// Decode and check a configuration
    ///
    /// We use a simple positional format: the first non-whitespace chunk of
    /// text on each line is a configuration item, and the rest of the line is
    /// free-form commentary. Blank lines are ignored.
    ///
    fn from_str(config_str: &str) -> Result<Self> {
        let mut config_iter = config_str
            .lines()
            .filter_map(|line| line.split_whitespace().next());

        // This closure fetches the next configuration item, tagging it with
        // the name of the configuration field which it is supposed to fill to
        // ease error reporting, and handling unexpected end-of-file too.
        let mut next_item = |name: &'static str| -> Result<ConfigItem> {
            config_iter
                .next()
                .map(|data| ConfigItem::new(name, data))
                .ok_or_else(|| eyre!("Missing configuration of {}", name))
        };

        // Decode the configuration items into concrete values
        let config = Configuration {
            num_events: next_item("num_events")?.parse::<usize>()?,
            seed: next_item("seed")?.parse::<u64>()?,
            particle_id: ParticleId::new(next_item("particle_id")?.parse::<i32>()?),
            pt: Interval::new(
                next_item("pt_min")?.parse::<Float>()?,
                next_item("pt_max")?.parse::<Float>()?,
            ),
            eta: Interval::new(
                next_item("eta_min")?.parse::<Float>()?,
                next_item("eta_max")?.parse::<Float>()?,
            ),
            phi: Interval::new(
                next_item("phi_min")?.parse::<Float>()?,
                next_item("phi_max")?.parse::<Float>()?,
            ),
            vertex: [
                next_item("vertex_t")?.parse::<Float>()?,
                next_item("vertex_x")?.parse::<Float>()?,
                next_item("vertex_y")?.parse::<Float>()?,
                next_item("vertex_z")?.parse::<Float>()?,
            ],
        };

        // Trailing items are most likely a mistake in the configuration file
        ensure!(
            config_iter.next().is_none(),
            "Unexpected trailing items in the configuration"
        );

        config.validate()?;
        Ok(config)
    }
}

/// A value from the configuration file, tagged with the struct field which it
/// is supposed to map for error reporting purposes.
struct ConfigItem<'data> {
    name: &'static str,
    data: &'data str,
}
//
impl<'data> ConfigItem<'data> {
    /// Build a config item from a struct field tag and raw iterator data
    fn new(name: &'static str, data: &'data str) -> Self {
        Self { name, data }
    }

    /// Parse this data using Rust's standard parsing logic
    fn parse<T: FromStr>(self) -> Result<T>
    where
        <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        self.data
            .parse::<T>()
            .wrap_err_with(|| format!("Could not parse configuration of {}", self.name))
    }
}
