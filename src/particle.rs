//! Kinematic state of the primary particles produced by the generator
//!
//! A BasicParticle is a particle type and a 3-momentum. Every other kinematic
//! quantity (pT, eta, phi, energies...) is recomputed from the momentum on
//! demand, so there is no derived state to keep in sync.
//!
//! Mutators which change a single coordinate of the pseudo-Lorentz triplet
//! (eta or phi) are implemented as planar rotations of the momentum, rather
//! than as a full round trip through the triplet representation.

use crate::{
    linalg::{self, rotate_2d, unit_or_zero, Vector3},
    momentum::{Momentum, X, Y, Z},
    numeric::{saturate, wrap_angle, Float, MAX_ETA},
    properties::{ParticleId, ParticleTable},
    triplet::{
        self, azimuth, eta_from_components, eta_to_theta, transverse_momentum,
        PseudoLorentzTriplet,
    },
    Result,
};
use eyre::ensure;
use prefix_num_ops::real::*;
use std::ops::{Deref, DerefMut};

/// Particle type and momentum
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BasicParticle {
    /// Particle type, or None if the particle has no defined type
    pub id: Option<ParticleId>,

    /// Momentum X coordinate (MeV), along the pseudo-rapidity axis
    pub px: Float,

    /// Momentum Y coordinate (MeV)
    pub py: Float,

    /// Momentum Z coordinate (MeV)
    pub pz: Float,
}
//
impl BasicParticle {
    // ### CONSTRUCTION ###

    /// Create a particle of a certain type, at rest
    pub fn new(id: Option<ParticleId>) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Create a particle of a certain type with a certain momentum
    pub fn with_momentum(id: Option<ParticleId>, momentum: &Momentum) -> Self {
        let mut particle = Self::new(id);
        particle.set_momentum(momentum);
        particle
    }

    /// Raw PDG code of the particle type, where 0 means "no defined type"
    pub fn type_code(&self) -> i32 {
        self.id.map_or(0, ParticleId::code)
    }

    // ### MOMENTUM COORDINATES ###

    /// Momentum vector
    pub fn momentum(&self) -> Momentum {
        Momentum::new(self.px, self.py, self.pz)
    }

    /// Norm of the momentum vector
    pub fn momentum_magnitude(&self) -> Float {
        linalg::norm(&self.momentum())
    }

    /// Direction of the momentum vector, or zero if the particle is at rest
    pub fn momentum_unit(&self) -> Momentum {
        unit_or_zero(&self.momentum())
    }

    /// Transverse momentum
    ///
    /// This is the norm of (py, pz), which is the same as |p| / cosh(eta)
    /// without the loss of precision close to the X axis. Every mutator below
    /// uses this same definition.
    ///
    pub fn pt(&self) -> Float {
        transverse_momentum(self.py, self.pz)
    }

    /// Pseudo-rapidity, saturated at ±MAX_ETA
    pub fn eta(&self) -> Float {
        eta_from_components(self.px, self.pt())
    }

    /// Azimuthal angle
    pub fn phi(&self) -> Float {
        azimuth(self.py, self.pz)
    }

    /// Momentum as a (pT, eta, phi) triplet
    pub fn pseudo_lorentz_triplet(&self) -> PseudoLorentzTriplet {
        triplet::to_triplet(&self.momentum())
    }

    // ### PARTICLE TYPE PROPERTIES ###

    /// Rest mass (MeV), zero if the particle has no defined type
    pub fn mass(&self, table: &dyn ParticleTable) -> Result<Float> {
        self.id.map_or(Ok(0.), |id| table.mass(id))
    }

    /// Electric charge, zero if the particle has no defined type
    pub fn charge(&self, table: &dyn ParticleTable) -> Result<Float> {
        self.id.map_or(Ok(0.), |id| table.charge(id))
    }

    /// Particle name, empty if the particle has no defined type
    pub fn name(&self, table: &dyn ParticleTable) -> Result<String> {
        self.id.map_or_else(|| Ok(String::new()), |id| table.name(id))
    }

    // ### ENERGY ###

    /// Total energy (MeV)
    pub fn total_energy(&self, table: &dyn ParticleTable) -> Result<Float> {
        Ok(self.momentum_magnitude().hypot(self.mass(table)?))
    }

    /// Kinetic energy (MeV)
    pub fn kinetic_energy(&self, table: &dyn ParticleTable) -> Result<Float> {
        Ok(self.total_energy(table)? - self.mass(table)?)
    }

    // ### MOMENTUM MUTATORS ###

    /// Replace the momentum
    pub fn set_momentum(&mut self, momentum: &Momentum) {
        self.set_momentum_xyz(momentum[X], momentum[Y], momentum[Z]);
    }

    /// Replace the momentum, coordinate by coordinate
    pub fn set_momentum_xyz(&mut self, px: Float, py: Float, pz: Float) {
        self.px = px;
        self.py = py;
        self.pz = pz;
    }

    /// Rescale the momentum, keeping its direction
    ///
    /// A particle at rest has no direction, so it stays at rest. Set the
    /// direction first with `set_momentum_unit()`.
    ///
    pub fn set_momentum_magnitude(&mut self, magnitude: Float) {
        self.set_momentum(&(magnitude * self.momentum_unit()));
    }

    /// Change the direction of the momentum, keeping its norm
    ///
    /// The direction does not need to be normalized. A particle at rest gets
    /// a unit momentum.
    ///
    pub fn set_momentum_unit(&mut self, direction: &Momentum) {
        let magnitude = self.momentum_magnitude();
        let magnitude = if magnitude == 0. { 1. } else { magnitude };
        self.set_momentum(&(magnitude * unit_or_zero(direction)));
    }

    /// Change the direction of the momentum, coordinate by coordinate
    pub fn set_momentum_unit_xyz(&mut self, ux: Float, uy: Float, uz: Float) {
        self.set_momentum_unit(&Momentum::new(ux, uy, uz));
    }

    /// Replace the momentum with one given as a (pT, eta, phi) triplet
    pub fn set_triplet(&mut self, triplet: &PseudoLorentzTriplet) {
        self.set_momentum(&triplet::to_momentum(triplet));
    }

    /// Replace the momentum with one given as separate pT, eta and phi
    pub fn set_triplet_components(&mut self, pt: Float, eta: Float, phi: Float) {
        self.set_triplet(&PseudoLorentzTriplet::new(pt, eta, phi));
    }

    /// Change the transverse momentum, keeping eta and phi
    ///
    /// The transverse momentum is rescaled, and px follows so that px / pT,
    /// i.e. sinh(eta), is kept. If that would overflow, px saturates at
    /// ±Float::MAX. Setting a zero pT brings the particle to rest.
    ///
    /// A particle without transverse momentum has an infinite eta (reported
    /// as ±MAX_ETA) and no azimuth, neither of which can be kept. In that
    /// case, px is kept and the new transverse momentum points towards -Z
    /// (phi = 0). A particle at rest thus ends up with eta = 0.
    ///
    pub fn set_pt(&mut self, pt: Float) {
        let old_pt = self.pt();
        if old_pt == 0. {
            self.py = 0.;
            self.pz = -pt;
            return;
        }
        let sinh_eta = saturate(self.px / old_pt);
        self.px = saturate(sinh_eta * pt);
        self.py = pt * (self.py / old_pt);
        self.pz = pt * (self.pz / old_pt);
    }

    /// Change the pseudo-rapidity, keeping pT and phi
    ///
    /// Only px is modified, it becomes pT·sinh(eta). The new pseudo-rapidity
    /// is clamped to ±MAX_ETA, and px saturates at ±Float::MAX if the product
    /// overflows, in which case eta() reads back slightly lower.
    ///
    /// A particle without transverse momentum has no azimuth. It is rotated
    /// towards -Z (phi = 0) instead, keeping its momentum norm.
    ///
    pub fn set_eta(&mut self, eta: Float) {
        let eta = eta.clamp(-MAX_ETA, MAX_ETA);
        let pt = self.pt();
        if pt == 0. {
            let angle = eta_to_theta(eta) - eta_to_theta(self.eta());
            let (px, minus_pz) = rotate_2d(self.px, -self.pz, angle);
            self.px = px;
            self.pz = -minus_pz;
            return;
        }
        self.px = saturate(pt * eta.sinh());
    }

    /// Change the azimuthal angle, keeping pT and eta
    ///
    /// Rotates the transverse momentum, so px is left untouched. A particle
    /// without transverse momentum has no azimuth to change.
    ///
    pub fn set_phi(&mut self, phi: Float) {
        let angle = wrap_angle(phi - self.phi());
        let (minus_pz, py) = rotate_2d(-self.pz, self.py, angle);
        self.pz = -minus_pz;
        self.py = py;
    }

    /// Change the kinetic energy, keeping the direction of the momentum
    ///
    /// Negative kinetic energies are rejected and leave the particle as is.
    /// As with `set_momentum_magnitude()`, a particle at rest stays at rest.
    ///
    pub fn set_kinetic_energy(
        &mut self,
        kinetic_energy: Float,
        table: &dyn ParticleTable,
    ) -> Result<()> {
        ensure!(
            kinetic_energy >= 0.,
            "Kinetic energy must be positive or zero, got {}",
            kinetic_energy
        );
        let mass = self.mass(table)?;
        self.set_momentum_magnitude(sqrt(kinetic_energy * (kinetic_energy + 2. * mass)));
        Ok(())
    }
}

/// Particle with a space-time creation vertex
///
/// Kinematic properties are those of the underlying BasicParticle, which this
/// type dereferences to.
///
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Particle {
    /// Type and momentum
    pub basic: BasicParticle,

    /// Vertex time
    pub t: Float,

    /// Vertex X coordinate
    pub x: Float,

    /// Vertex Y coordinate
    pub y: Float,

    /// Vertex Z coordinate
    pub z: Float,
}
//
impl Particle {
    /// Create a particle of a certain type, at rest at the origin
    pub fn new(id: Option<ParticleId>) -> Self {
        Self {
            basic: BasicParticle::new(id),
            ..Self::default()
        }
    }

    /// Spatial part of the vertex
    pub fn vertex(&self) -> Vector3<Float> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Move the vertex in space, keeping its time
    pub fn set_vertex(&mut self, x: Float, y: Float, z: Float) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Move the vertex in space and time
    pub fn set_timed_vertex(&mut self, t: Float, x: Float, y: Float, z: Float) {
        self.t = t;
        self.set_vertex(x, y, z);
    }

    /// Move the vertex in space, keeping its time
    pub fn set_vertex_from(&mut self, vertex: &Vector3<Float>) {
        self.set_vertex(vertex[X], vertex[Y], vertex[Z]);
    }

    /// Move the vertex in space and time
    pub fn set_timed_vertex_from(&mut self, t: Float, vertex: &Vector3<Float>) {
        self.set_timed_vertex(t, vertex[X], vertex[Y], vertex[Z]);
    }
}

impl Deref for Particle {
    type Target = BasicParticle;

    fn deref(&self) -> &BasicParticle {
        &self.basic
    }
}

impl DerefMut for Particle {
    fn deref_mut(&mut self) -> &mut BasicParticle {
        &mut self.basic
    }
}
