//! Static properties of particle types (mass, charge, name)
//!
//! Particle types are identified by their PDG Monte Carlo numbering scheme
//! code. Property lookup goes through the ParticleTable trait, so that the
//! kinematics code does not need to know where the data comes from.

use crate::{numeric::Float, Result};
use eyre::eyre;
use std::{fmt, num::NonZeroI32};

/// PDG code of a particle type
///
/// Zero is not a valid PDG code. Particles with no defined type are modeled
/// as an `Option<ParticleId>` which is `None`.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(NonZeroI32);
//
impl ParticleId {
    /// Interpret a raw PDG code, mapping 0 to "no particle type"
    pub fn new(code: i32) -> Option<Self> {
        NonZeroI32::new(code).map(Self)
    }

    /// Raw PDG code
    pub fn code(self) -> i32 {
        self.0.get()
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Source of particle type properties
///
/// Implementations decide what an unknown particle type means, the result is
/// passed on to the caller unchanged.
///
pub trait ParticleTable {
    /// Rest mass (MeV)
    fn mass(&self, id: ParticleId) -> Result<Float>;

    /// Electric charge (in units of the elementary charge)
    fn charge(&self, id: ParticleId) -> Result<Float>;

    /// Human-readable name
    fn name(&self, id: ParticleId) -> Result<String>;
}

/// Built-in table of common Standard Model particles
#[derive(Clone, Copy, Debug, Default)]
pub struct PdgTable;
//
impl PdgTable {
    /// Look up the table entry of a particle type
    fn entry(id: ParticleId) -> Result<&'static Entry> {
        // Antiparticles share the mass of their particle, we only store the
        // charge and name of both.
        let code = id.code();
        PARTICLES
            .iter()
            .find(|entry| entry.code == code.wrapping_abs())
            .filter(|entry| code > 0 || entry.anti_name.is_some())
            .ok_or_else(|| eyre!("Unknown particle id {}", code))
    }
}

impl ParticleTable for PdgTable {
    fn mass(&self, id: ParticleId) -> Result<Float> {
        Self::entry(id).map(|entry| entry.mass)
    }

    fn charge(&self, id: ParticleId) -> Result<Float> {
        let entry = Self::entry(id)?;
        Ok(if id.code() < 0 {
            -entry.charge
        } else {
            entry.charge
        })
    }

    fn name(&self, id: ParticleId) -> Result<String> {
        let entry = Self::entry(id)?;
        match (id.code() < 0, entry.anti_name) {
            (true, Some(anti_name)) => Ok(anti_name.to_owned()),
            _ => Ok(entry.name.to_owned()),
        }
    }
}

/// Properties of a particle type and of its antiparticle (if distinct)
struct Entry {
    code: i32,
    name: &'static str,
    anti_name: Option<&'static str>,
    mass: Float,
    charge: Float,
}

// Masses are PDG 2022 values, names follow Geant4 conventions
#[rustfmt::skip]
const PARTICLES: &[Entry] = &[
    Entry { code: 11, name: "e-", anti_name: Some("e+"), mass: 0.51099895, charge: -1. },
    Entry { code: 12, name: "nu_e", anti_name: Some("anti_nu_e"), mass: 0., charge: 0. },
    Entry { code: 13, name: "mu-", anti_name: Some("mu+"), mass: 105.6583755, charge: -1. },
    Entry { code: 14, name: "nu_mu", anti_name: Some("anti_nu_mu"), mass: 0., charge: 0. },
    Entry { code: 15, name: "tau-", anti_name: Some("tau+"), mass: 1776.86, charge: -1. },
    Entry { code: 16, name: "nu_tau", anti_name: Some("anti_nu_tau"), mass: 0., charge: 0. },
    Entry { code: 22, name: "gamma", anti_name: None, mass: 0., charge: 0. },
    Entry { code: 111, name: "pi0", anti_name: None, mass: 134.9768, charge: 0. },
    Entry { code: 130, name: "kaon0L", anti_name: None, mass: 497.611, charge: 0. },
    Entry { code: 211, name: "pi+", anti_name: Some("pi-"), mass: 139.57039, charge: 1. },
    Entry { code: 310, name: "kaon0S", anti_name: None, mass: 497.611, charge: 0. },
    Entry { code: 321, name: "kaon+", anti_name: Some("kaon-"), mass: 493.677, charge: 1. },
    Entry { code: 2112, name: "neutron", anti_name: Some("anti_neutron"), mass: 939.56542052, charge: 0. },
    Entry { code: 2212, name: "proton", anti_name: Some("anti_proton"), mass: 938.27208816, charge: 1. },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn id(code: i32) -> ParticleId {
        ParticleId::new(code).expect("Test codes should be nonzero")
    }

    #[test]
    fn zero_is_not_a_particle_id() {
        assert_eq!(ParticleId::new(0), None);
        assert_eq!(ParticleId::new(-13).map(ParticleId::code), Some(-13));
    }

    #[test]
    fn particle_and_antiparticle() {
        let table = PdgTable;
        assert_eq!(table.name(id(13)).unwrap(), "mu-");
        assert_eq!(table.name(id(-13)).unwrap(), "mu+");
        assert_eq!(table.charge(id(13)).unwrap(), -1.);
        assert_eq!(table.charge(id(-13)).unwrap(), 1.);
        assert_eq!(table.mass(id(-13)).unwrap(), table.mass(id(13)).unwrap());
        assert_eq!(table.charge(id(-2212)).unwrap(), -1.);
        assert_eq!(table.name(id(-2112)).unwrap(), "anti_neutron");
    }

    #[test]
    fn self_conjugate_particles_have_no_antiparticle_code() {
        let table = PdgTable;
        assert_eq!(table.mass(id(22)).unwrap(), 0.);
        assert_eq!(table.name(id(111)).unwrap(), "pi0");
        assert!(table.mass(id(-22)).is_err());
        assert!(table.name(id(-111)).is_err());
    }

    #[test]
    fn unknown_particles_are_reported() {
        let err = PdgTable.mass(id(999_999)).unwrap_err();
        assert_eq!(err.to_string(), "Unknown particle id 999999");
        assert!(PdgTable.charge(id(-999_999)).is_err());
    }
}
