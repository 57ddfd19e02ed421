//! This module defines the properties and storage of generated events
//!
//! An event is a list of primary vertices, each of which carries the primary
//! particles that are created there. Particles are handed over to an event
//! by value: once added, the generator cannot modify them anymore.

use crate::{
    numeric::Float,
    particle::{BasicParticle, Particle},
    properties::ParticleId,
};
use std::fmt::{self, Display};

/// Primary particle record: particle type and initial momentum
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrimaryParticle {
    /// Raw PDG code, 0 if the particle has no defined type
    pub type_code: i32,

    /// Momentum X coordinate (MeV)
    pub px: Float,

    /// Momentum Y coordinate (MeV)
    pub py: Float,

    /// Momentum Z coordinate (MeV)
    pub pz: Float,
}

impl From<&PrimaryParticle> for BasicParticle {
    fn from(primary: &PrimaryParticle) -> Self {
        Self {
            id: ParticleId::new(primary.type_code),
            px: primary.px,
            py: primary.py,
            pz: primary.pz,
        }
    }
}

/// Primary vertex record: space-time creation point of primary particles
#[derive(Clone, Debug, PartialEq)]
pub struct PrimaryVertex {
    /// Creation time
    pub t: Float,

    /// Position X coordinate
    pub x: Float,

    /// Position Y coordinate
    pub y: Float,

    /// Position Z coordinate
    pub z: Float,

    /// Particles created at this vertex
    pub primaries: Vec<PrimaryParticle>,
}

/// Storage for generated event data
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    /// Event number within the run
    number: usize,

    /// Primary vertices, in insertion order
    vertices: Vec<PrimaryVertex>,
}
//
impl Event {
    /// Start building an empty event
    pub fn new(number: usize) -> Self {
        Self {
            number,
            vertices: Vec::new(),
        }
    }

    /// Event number within the run
    pub fn number(&self) -> usize {
        self.number
    }

    /// Add a particle to the event, with its own primary vertex
    pub fn add_particle(&mut self, particle: Particle) {
        self.vertices.push(PrimaryVertex {
            t: particle.t,
            x: particle.x,
            y: particle.y,
            z: particle.z,
            primaries: vec![PrimaryParticle {
                type_code: particle.type_code(),
                px: particle.px,
                py: particle.py,
                pz: particle.pz,
            }],
        });
    }

    /// Access the primary vertices
    pub fn vertices(&self) -> &[PrimaryVertex] {
        &self.vertices[..]
    }

    /// Iterate over all primary particles of the event
    pub fn primaries(&self) -> impl Iterator<Item = &PrimaryParticle> + '_ {
        self.vertices
            .iter()
            .flat_map(|vertex| vertex.primaries.iter())
    }
}

impl Display for Event {
    /// Dump vertices and primary particles, one per line
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(fmt, "EVENT\t{}\t{}", self.number, self.vertices.len())?;
        for vertex in &self.vertices {
            writeln!(
                fmt,
                "VERTEX\t{}\t{}\t{}\t{}",
                vertex.t, vertex.x, vertex.y, vertex.z
            )?;
            for primary in &vertex.primaries {
                let triplet = BasicParticle::from(primary).pseudo_lorentz_triplet();
                writeln!(
                    fmt,
                    "PRIMARY\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    primary.type_code,
                    primary.px,
                    primary.py,
                    primary.pz,
                    triplet.pt,
                    triplet.eta,
                    triplet.phi
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_get_their_own_vertex() {
        let mut event = Event::new(42);
        let mut muon = Particle::new(ParticleId::new(13));
        muon.set_momentum_xyz(1., 2., 3.);
        muon.set_timed_vertex(0.5, -1., -2., -3.);
        event.add_particle(muon);
        event.add_particle(Particle::new(None));

        assert_eq!(event.number(), 42);
        assert_eq!(event.vertices().len(), 2);
        let vertex = &event.vertices()[0];
        assert_eq!((vertex.t, vertex.x, vertex.y, vertex.z), (0.5, -1., -2., -3.));
        let types = event.primaries().map(|p| p.type_code).collect::<Vec<_>>();
        assert_eq!(types, vec![13, 0]);
        assert_eq!(
            event.primaries().next(),
            Some(&PrimaryParticle {
                type_code: 13,
                px: 1.,
                py: 2.,
                pz: 3.
            })
        );
    }

    #[test]
    fn primaries_convert_back_to_particles() {
        let primary = PrimaryParticle {
            type_code: 0,
            px: 0.,
            py: 3.,
            pz: -4.,
        };
        let particle = BasicParticle::from(&primary);
        assert_eq!(particle.id, None);
        assert_eq!(particle.momentum_magnitude(), 5.);
    }

    #[test]
    fn display_lists_vertices_and_primaries() {
        let mut event = Event::new(7);
        let mut particle = Particle::new(ParticleId::new(22));
        particle.set_momentum_xyz(0., 0., -2.);
        event.add_particle(particle);
        let text = event.to_string();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "EVENT\t7\t1");
        assert_eq!(lines[1], "VERTEX\t0\t0\t0\t0");
        assert_eq!(lines[2], "PRIMARY\t22\t0\t0\t-2\t2\t0\t0");
    }
}
