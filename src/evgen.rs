//! This module provides event generation facilities

use crate::{
    config::{Configuration, Interval},
    event::Event,
    numeric::Float,
    particle::Particle,
    properties::ParticleTable,
    random::RandomGenerator,
    Result,
};
use eyre::WrapErr;

/// Particle gun which shoots one particle per event, with a transverse
/// momentum, pseudo-rapidity and azimuthal angle that are uniformly
/// distributed within configurable ranges.
#[derive(Clone, Debug)]
pub struct RangeGenerator {
    /// Particle that every generated particle starts from
    ///
    /// Has the configured type and vertex, a unit transverse momentum, and
    /// lies at the lower bound of the eta and phi ranges.
    ///
    template: Particle,

    /// Range of transverse momenta
    pt: Interval,

    /// Range of pseudo-rapidities
    eta: Interval,

    /// Range of azimuthal angles
    phi: Interval,
}
//
impl RangeGenerator {
    // ### CONSTRUCTION ###

    /// Set up the particle gun
    ///
    /// Fails if the configured particle type is unknown to the particle table,
    /// since every generated event would be unusable otherwise.
    ///
    pub fn new(cfg: &Configuration, table: &dyn ParticleTable) -> Result<Self> {
        let mut template = Particle::new(cfg.particle_id);
        template
            .name(table)
            .wrap_err("Unsupported particle type in configuration")?;
        template.set_triplet_components(1., cfg.eta.min, cfg.phi.min);
        let [t, x, y, z] = cfg.vertex;
        template.set_timed_vertex(t, x, y, z);
        Ok(Self {
            template,
            pt: cfg.pt,
            eta: cfg.eta,
            phi: cfg.phi,
        })
    }

    // ### EVENT GENERATION ###

    /// Generate one event
    ///
    /// Each momentum coordinate is drawn and set separately, in the order eta,
    /// phi, pT. Setting one coordinate does not affect the others, so they
    /// are independent and uniformly distributed. Coordinates with degenerate
    /// ranges do not consume random numbers.
    ///
    /// The direction is chosen first because a particle without transverse
    /// momentum has no well-defined eta and phi to rotate.
    ///
    pub fn generate(&self, number: usize, rng: &mut RandomGenerator) -> Event {
        let mut particle = self.template;
        if let Some(eta) = Self::draw(&self.eta, rng) {
            particle.set_eta(eta);
        }
        if let Some(phi) = Self::draw(&self.phi, rng) {
            particle.set_phi(phi);
        }
        particle.set_pt(Self::draw(&self.pt, rng).unwrap_or(self.pt.min));

        // Hand the particle over to the event
        let mut event = Event::new(number);
        event.add_particle(particle);
        event
    }

    /// Draw a value uniformly within a range, unless it contains one value
    fn draw(interval: &Interval, rng: &mut RandomGenerator) -> Option<Float> {
        if interval.is_degenerate() {
            None
        } else {
            Some(interval.min + (interval.max - interval.min) * rng.random())
        }
    }
}
