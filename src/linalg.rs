//! Some shared linear algebra concepts

use crate::numeric::Float;
use num_traits::Zero;
use prefix_num_ops::real::*;

/// Re-export of some nalgebra types
pub use nalgebra::Vector3;

/// Rotate the 2D vector (x, y) counterclockwise by some angle (in radians)
///
/// This is the only rotation primitive of the crate. Single-coordinate
/// updates of particle momenta all go through it, so that they share the same
/// numerical behaviour.
///
pub fn rotate_2d(x: Float, y: Float, angle: Float) -> (Float, Float) {
    let (cosine, sine) = (cos(angle), sin(angle));
    (x * cosine - y * sine, x * sine + y * cosine)
}

/// Euclidean norm of a 2D vector, without intermediate overflow
pub fn norm_2d(x: Float, y: Float) -> Float {
    x.hypot(y)
}

/// Euclidean norm of a 3-vector
///
/// Unlike nalgebra's `norm()`, this does not square the components, so it
/// stays finite for vectors with components close to Float::MAX.
///
pub fn norm(v: &Vector3<Float>) -> Float {
    v.x.hypot(norm_2d(v.y, v.z))
}

/// Normalize a 3-vector, mapping the zero vector to itself
pub fn unit_or_zero(v: &Vector3<Float>) -> Vector3<Float> {
    let norm = norm(v);
    if norm == 0. {
        Vector3::zero()
    } else {
        v / norm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::reals::consts::{FRAC_PI_2, PI};
    use approx::assert_relative_eq;

    #[test]
    fn quarter_turn_maps_x_to_y() {
        let (x, y) = rotate_2d(1., 0., FRAC_PI_2);
        assert_relative_eq!(x, 0., epsilon = 1e-15);
        assert_relative_eq!(y, 1.);
    }

    #[test]
    fn rotation_preserves_norm() {
        let (x, y) = rotate_2d(3., -4., 2.1);
        assert_relative_eq!(x.hypot(y), 5., epsilon = 1e-14);
        let (x, y) = rotate_2d(x, y, -2.1);
        assert_relative_eq!(x, 3., epsilon = 1e-14);
        assert_relative_eq!(y, -4., epsilon = 1e-14);
    }

    #[test]
    fn half_turn_flips_sign() {
        let (x, y) = rotate_2d(2., 1., PI);
        assert_relative_eq!(x, -2., epsilon = 1e-14);
        assert_relative_eq!(y, -1., epsilon = 1e-14);
    }

    #[test]
    fn norm_does_not_overflow() {
        assert_eq!(norm(&Vector3::new(0., 3., -4.)), 5.);
        let huge = Vector3::new(Float::MAX, 1., 0.);
        assert_eq!(huge.norm(), Float::INFINITY);
        assert_eq!(norm(&huge), Float::MAX);
        assert_relative_eq!(unit_or_zero(&huge), Vector3::new(1., 0., 0.));
    }

    #[test]
    fn unit_of_zero_is_zero() {
        assert_eq!(unit_or_zero(&Vector3::zero()), Vector3::zero());
        let u = unit_or_zero(&Vector3::new(0., 3., -4.));
        assert_relative_eq!(u, Vector3::new(0., 0.6, -0.8), epsilon = 1e-15);
    }
}
