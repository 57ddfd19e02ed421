//! This module implements some domain-specific 3-momentum handling logic.

use crate::{linalg::Vector3, numeric::Float};

/// Particle 3-momentum (MeV)
pub type Momentum = Vector3<Float>;

/// Convenience const for accessing the X (longitudinal) coordinate
pub const X: usize = 0;

/// Convenience const for accessing the Y coordinate
pub const Y: usize = 1;

/// Convenience const for accessing the Z coordinate
pub const Z: usize = 2;
