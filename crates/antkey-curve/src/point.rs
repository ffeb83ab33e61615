//! Curve point representations

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::params::CurveParams;

/// A point on a curve in affine coordinates, or the point at infinity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffinePoint {
    Infinity,
    Point { x: BigInt, y: BigInt },
}

impl AffinePoint {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        AffinePoint::Point { x, y }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, AffinePoint::Infinity)
    }

    /// Coordinates of a finite point, `None` for infinity
    pub fn coordinates(&self) -> Option<(&BigInt, &BigInt)> {
        match self {
            AffinePoint::Infinity => None,
            AffinePoint::Point { x, y } => Some((x, y)),
        }
    }

    /// Checks `y^2 ≡ x^3 + a*x + b (mod p)`; infinity is on every curve
    pub fn is_on_curve(&self, curve: &CurveParams) -> bool {
        match self {
            AffinePoint::Infinity => true,
            AffinePoint::Point { x, y } => {
                let lhs = (y * y) % &curve.p;
                let rhs = (x * x * x + &curve.a * x + &curve.b) % &curve.p;
                (lhs - rhs) % &curve.p == BigInt::zero()
            }
        }
    }
}

/// A point in Jacobian projective coordinates, representing the affine
/// point `(x/z^2, y/z^3)`.
///
/// This is a computational intermediate for the arithmetic in this crate;
/// higher layers exchange [`AffinePoint`]s via
/// [`CurveParams::fast_multiply`](crate::params::CurveParams).
/// `y == 0` marks the point at infinity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JacobianPoint {
    pub x: BigInt,
    pub y: BigInt,
    pub z: BigInt,
}

impl JacobianPoint {
    pub fn new(x: BigInt, y: BigInt, z: BigInt) -> Self {
        Self { x, y, z }
    }

    pub fn infinity() -> Self {
        Self {
            x: BigInt::zero(),
            y: BigInt::zero(),
            z: BigInt::one(),
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.y.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SECP256R1;

    #[test]
    fn test_infinity_point() {
        let inf = JacobianPoint::infinity();
        assert!(inf.is_infinity());
        assert!(AffinePoint::Infinity.is_infinity());
        assert!(AffinePoint::Infinity.is_on_curve(&SECP256R1));
    }

    #[test]
    fn test_off_curve_detection() {
        let bogus = AffinePoint::new(BigInt::from(2u32), BigInt::from(3u32));
        assert!(!bogus.is_on_curve(&SECP256R1));
    }
}
