//! Primary gun: particle kinematics and a simple primary particle generator
//!
//!
//! # Introduction (for the physicist)
//!
//! This crate describes primary particles in the way detector simulations
//! expect them: a type identified by its PDG code, a momentum, and a
//! space-time creation vertex. On top of the Cartesian momentum, it exposes
//! the collider-style coordinates which are most natural for specifying
//! particle guns, namely transverse momentum (pT), pseudo-rapidity (eta) and
//! azimuthal angle (phi).
//!
//! Beware that the longitudinal axis is x, not z. Transverse quantities are
//! thus computed in the (y, z) plane, and phi is measured from the -z axis
//! towards the +y axis.
//!
//!
//! # Introduction (for the computer guy)
//!
//! The crate is organized as a pipeline:
//!
//! * read in the gun configuration and check it
//! * loop over events, in batches with independent random number streams,
//!     * set up a particle from a template
//!     * draw its pT, eta and phi within the configured ranges
//!     * hand it over to the event, along with its vertex
//! * then display / store the generated events.
//!
//! Particle properties (mass, charge, name) are not stored in the particles
//! themselves, but looked up from a particle table when needed.

#![warn(missing_docs)]

pub mod config;
pub mod event;
pub mod evgen;
pub mod linalg;
pub mod momentum;
pub mod numeric;
pub mod output;
pub mod particle;
pub mod properties;
pub mod random;
pub mod scheduling;
pub mod triplet;

/// We'll use eyre's type-erased result type throughout the crate
pub type Result<T> = eyre::Result<T>;
