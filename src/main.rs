//! Primary gun: generate single-particle events within configurable ranges of
//! transverse momentum, pseudo-rapidity and azimuthal angle.
//!
//! Usage: `primary_gun [CONFIG_FILE]`, where the configuration file defaults
//! to `gun.cfg` in the working directory.

#![warn(missing_docs)]

use eyre::WrapErr;
use primary_gun::{
    config::Configuration, evgen::RangeGenerator, output, properties::PdgTable,
    random::RandomGenerator, scheduling, Result,
};
use std::{env, ops::Range, time::Instant};

/// Configuration file which is used when none is specified
const DEFAULT_CONFIG: &str = "gun.cfg";

/// This will act as our main function, with suitable error handling
fn main() -> Result<()> {
    // ### CONFIGURATION READOUT ###

    let config_file = env::args().nth(1);
    let config_file = config_file.as_deref().unwrap_or(DEFAULT_CONFIG);
    let cfg = Configuration::load(config_file).wrap_err("Failed to load the configuration")?;

    // ### GENERATOR INITIALIZATION ###

    // NOTE: The clock is started after configuration I/O, to avoid IO-induced
    //       timing fluctuations
    let saved_time = Instant::now();

    let table = PdgTable;
    let generator =
        RangeGenerator::new(&cfg, &table).wrap_err("Failed to set up the particle gun")?;

    // ### EVENT GENERATION ###

    // This kernel generates a range of event numbers, given an initial random
    // number generator state
    let generate_events = |numbers: Range<usize>, rng: &mut RandomGenerator| {
        numbers
            .map(|number| generator.generate(number, rng))
            .collect::<Vec<_>>()
    };

    let events = scheduling::run_generation(cfg.num_events, cfg.seed, generate_events);

    // ### RESULTS DISPLAY AND STORAGE ###

    let elapsed_time = saved_time.elapsed();
    output::dump_results(&cfg, &events, &table, elapsed_time)
        .wrap_err("Failed to output the results")?;

    // ...and we're done
    Ok(())
}
