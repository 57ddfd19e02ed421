//! Conversion between Cartesian momenta and pseudo-Lorentz triplets
//!
//! The detector geometry we are generating particles for uses a non-standard
//! axis convention, which must be preserved exactly:
//!
//! * The longitudinal axis (for pseudo-rapidity purposes) is the X axis
//! * The azimuthal angle is measured in the (Y, -Z) plane, starting from -Z
//!
//! Degenerate directions are handled by policy rather than by errors: the
//! zero momentum maps to the zero triplet, an undefined azimuth is reported
//! as 0, and pseudo-rapidities are saturated at ±MAX_ETA. A momentum along the
//! X axis has no transverse momentum, so its triplet is (0, ±MAX_ETA, 0) and
//! does not map back onto the original momentum.

use crate::{
    linalg,
    momentum::{Momentum, X, Y, Z},
    numeric::{reals::consts::PI, saturate, Float, MAX_ETA},
};
use prefix_num_ops::real::*;

/// Momentum expressed as (transverse momentum, pseudo-rapidity, azimuth)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PseudoLorentzTriplet {
    /// Transverse momentum (MeV), always positive or zero
    pub pt: Float,

    /// Pseudo-rapidity with respect to the X axis
    pub eta: Float,

    /// Azimuthal angle in the (Y, -Z) plane, in (-π, π]
    pub phi: Float,
}
//
impl PseudoLorentzTriplet {
    /// Build a triplet from its components
    pub fn new(pt: Float, eta: Float, phi: Float) -> Self {
        Self { pt, eta, phi }
    }
}

/// Convert a momentum into a pseudo-Lorentz triplet
pub fn to_triplet(momentum: &Momentum) -> PseudoLorentzTriplet {
    let pt = transverse_momentum(momentum[Y], momentum[Z]);
    PseudoLorentzTriplet {
        pt,
        eta: eta_from_components(momentum[X], pt),
        phi: azimuth(momentum[Y], momentum[Z]),
    }
}

/// Convert a pseudo-Lorentz triplet into a momentum
///
/// Pseudo-rapidities beyond ±MAX_ETA are clamped, and a longitudinal momentum
/// which does not fit in a Float saturates at ±Float::MAX.
///
pub fn to_momentum(triplet: &PseudoLorentzTriplet) -> Momentum {
    let PseudoLorentzTriplet { pt, eta, phi } = *triplet;
    let eta = eta.clamp(-MAX_ETA, MAX_ETA);
    Momentum::new(saturate(pt * eta.sinh()), pt * sin(phi), -pt * cos(phi))
}

/// Transverse momentum, i.e. norm of the (Y, Z) momentum components
pub(crate) fn transverse_momentum(py: Float, pz: Float) -> Float {
    linalg::norm_2d(py, pz)
}

/// Pseudo-rapidity of a momentum, given its longitudinal and transverse parts
///
/// Computed as asinh(px / pT), which is equal to atanh(px / |p|) but keeps its
/// precision close to the X axis. The result saturates at ±MAX_ETA, which is
/// also what momenta without transverse momentum get. The zero momentum has
/// a pseudo-rapidity of 0, and NaN inputs give a NaN result.
///
pub(crate) fn eta_from_components(px: Float, pt: Float) -> Float {
    if pt == 0. {
        if px == 0. {
            0.
        } else {
            MAX_ETA.copysign(px)
        }
    } else {
        (px / pt).asinh().clamp(-MAX_ETA, MAX_ETA)
    }
}

/// Azimuthal angle of a momentum's transverse components
///
/// Returns 0 when the azimuth is undefined, and never returns -π.
///
pub(crate) fn azimuth(py: Float, pz: Float) -> Float {
    if py == 0. && pz == 0. {
        return 0.;
    }
    let phi = py.atan2(-pz);
    if phi == -PI {
        PI
    } else {
        phi
    }
}

/// Polar angle with respect to the X axis corresponding to a pseudo-rapidity
///
/// This is a monotonic bijection from ℝ to [0, π], written so that the
/// exponential never overflows.
///
pub(crate) fn eta_to_theta(eta: Float) -> Float {
    let forward_angle = 2. * exp(-eta.abs()).atan();
    if eta < 0. {
        PI - forward_angle
    } else {
        forward_angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::reals::consts::FRAC_PI_2;
    use approx::assert_relative_eq;

    #[test]
    fn zero_momentum_gives_zero_triplet() {
        let triplet = to_triplet(&Momentum::new(0., 0., 0.));
        assert_eq!(triplet, PseudoLorentzTriplet::new(0., 0., 0.));
    }

    #[test]
    fn transverse_momentum_triplet() {
        let triplet = to_triplet(&Momentum::new(0., 3., -4.));
        assert_relative_eq!(triplet.pt, 5., epsilon = 1e-12);
        assert_eq!(triplet.eta, 0.);
        assert_relative_eq!(triplet.phi, 3f64.atan2(4.), epsilon = 1e-15);
    }

    #[test]
    fn axis_convention_is_x_longitudinal() {
        // Along -Z is phi = 0, along +Y is phi = π/2
        let triplet = to_triplet(&Momentum::new(0., 0., -2.));
        assert_eq!(triplet.phi, 0.);
        let triplet = to_triplet(&Momentum::new(0., 2., 0.));
        assert_relative_eq!(triplet.phi, FRAC_PI_2);

        // Forward along X is positive pseudo-rapidity
        let triplet = to_triplet(&Momentum::new(1., 0., -1.));
        assert!(triplet.eta > 0.);
        assert_relative_eq!(triplet.pt, 1., epsilon = 1e-12);
        assert_relative_eq!(triplet.eta, (1. / 2f64.sqrt()).atanh(), epsilon = 1e-12);
    }

    #[test]
    fn phi_never_reaches_minus_pi() {
        let triplet = to_triplet(&Momentum::new(0., -0., 5.));
        assert_eq!(triplet.phi, PI);
    }

    #[test]
    fn longitudinal_momentum_saturates_eta() {
        let forward = to_triplet(&Momentum::new(7., 0., 0.));
        assert_eq!(forward, PseudoLorentzTriplet::new(0., MAX_ETA, 0.));

        let backward = to_triplet(&Momentum::new(-7., 0., 0.));
        assert_eq!(backward, PseudoLorentzTriplet::new(0., -MAX_ETA, 0.));

        // Without transverse momentum, there is nothing left to map back
        assert_eq!(to_momentum(&forward), Momentum::new(0., 0., 0.));
    }

    #[test]
    fn near_axis_momentum_keeps_precision() {
        let triplet = to_triplet(&Momentum::new(1., 1e-9, 0.));
        assert_eq!(triplet.pt, 1e-9);
        assert_relative_eq!(triplet.eta, 1e9f64.asinh(), max_relative = 1e-14);
        let momentum = to_momentum(&triplet);
        assert_relative_eq!(momentum[X], 1., max_relative = 1e-12);
    }

    #[test]
    fn huge_pseudo_rapidities_saturate() {
        let momentum = to_momentum(&PseudoLorentzTriplet::new(1., 800., 0.));
        assert_eq!(momentum[X], MAX_ETA.sinh());
        let momentum = to_momentum(&PseudoLorentzTriplet::new(1e6, -800., 0.));
        assert_eq!(momentum[X], -Float::MAX);
        assert!(to_triplet(&momentum).eta.is_finite());
    }

    #[test]
    fn nan_is_not_mistaken_for_saturation() {
        assert!(eta_from_components(Float::NAN, 1.).is_nan());
        assert!(to_triplet(&Momentum::new(Float::NAN, 0., -1.)).eta.is_nan());
    }

    #[test]
    fn triplet_to_momentum() {
        let momentum = to_momentum(&PseudoLorentzTriplet::new(2., 0., FRAC_PI_2));
        assert_relative_eq!(momentum, Momentum::new(0., 2., 0.), epsilon = 1e-15);
        let momentum = to_momentum(&PseudoLorentzTriplet::new(1., 1., 0.));
        assert_relative_eq!(momentum, Momentum::new(1f64.sinh(), 0., -1.), epsilon = 1e-15);
    }

    #[test]
    fn eta_to_theta_is_monotonic_bijection() {
        assert_relative_eq!(eta_to_theta(0.), FRAC_PI_2, epsilon = 1e-15);
        assert_relative_eq!(eta_to_theta(-0.5) + eta_to_theta(0.5), PI, epsilon = 1e-15);
        assert!(eta_to_theta(1e4) >= 0.);
        assert!(eta_to_theta(-1e4) <= PI);
        let thetas = [-3., -1., -0.1, 0.1, 1., 3.].map(eta_to_theta);
        assert!(thetas.windows(2).all(|pair| pair[0] > pair[1]));
        for eta in [-2.5, -0.3, 0.7, 4.] {
            // The polar angle is the angle to the X axis: cos θ = tanh η
            assert_relative_eq!(cos(eta_to_theta(eta)), eta.tanh(), epsilon = 1e-14);
        }
    }
}
