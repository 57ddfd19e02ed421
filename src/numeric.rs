//! Basic numerical concepts used throughout the crate

#![allow(missing_docs)]

// Floating-point precision is configured here
pub type Float = f64;
pub use std::f64 as reals;

/// Largest pseudo-rapidity magnitude that we are willing to report
///
/// Momenta which are (numerically) parallel to the longitudinal axis have an
/// infinite pseudo-rapidity. We saturate it at this value instead, which is
/// the largest round number whose hyperbolic sine and cosine are still finite
/// in double precision.
///
pub const MAX_ETA: Float = 700.;

/// Clamp a value to the finite Float range, leaving NaN alone
///
/// Used where a momentum coordinate is computed from a product which may
/// overflow, e.g. pT·sinh(eta) close to ±MAX_ETA.
///
pub fn saturate(value: Float) -> Float {
    value.clamp(-Float::MAX, Float::MAX)
}

/// Fold an angle into the (-π, π] range
pub fn wrap_angle(angle: Float) -> Float {
    use reals::consts::PI;
    let wrapped = (angle + PI).rem_euclid(2. * PI) - PI;
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}
