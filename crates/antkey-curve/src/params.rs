//! Named curve parameter sets

use num_bigint::BigInt;
use num_traits::Num;
use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::point::AffinePoint;

#[derive(Error, Debug)]
pub enum CurveError {
    #[error("unknown curve '{0}'")]
    UnknownCurve(String),
    #[error("point at infinity has no affine representation")]
    InfinityNotRepresentable,
}

/// Identifier for a supported curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveId {
    /// NIST P-256, used for Neo-style script-hash addresses
    Secp256r1,
    /// Bitcoin's Koblitz curve
    Secp256k1,
}

impl CurveId {
    pub fn params(&self) -> &'static CurveParams {
        match self {
            CurveId::Secp256r1 => &SECP256R1,
            CurveId::Secp256k1 => &SECP256K1,
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveId::Secp256r1 => write!(f, "secp256r1"),
            CurveId::Secp256k1 => write!(f, "secp256k1"),
        }
    }
}

impl FromStr for CurveId {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "secp256r1" | "p256" | "p-256" => Ok(CurveId::Secp256r1),
            "secp256k1" | "k256" => Ok(CurveId::Secp256k1),
            other => Err(CurveError::UnknownCurve(other.to_string())),
        }
    }
}

/// Domain parameters of a short Weierstrass curve `y^2 = x^3 + a*x + b (mod p)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParams {
    pub id: CurveId,
    /// Prime field modulus
    pub p: BigInt,
    /// Coefficient a
    pub a: BigInt,
    /// Coefficient b
    pub b: BigInt,
    /// Order of the generator
    pub n: BigInt,
    /// Generator x coordinate
    pub gx: BigInt,
    /// Generator y coordinate
    pub gy: BigInt,
}

impl CurveParams {
    pub fn new(id: CurveId) -> Self {
        match id {
            CurveId::Secp256r1 => Self {
                id,
                p: hexint("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF"),
                a: hexint("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC"),
                b: hexint("5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B"),
                n: hexint("FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551"),
                gx: hexint("6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296"),
                gy: hexint("4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5"),
            },
            CurveId::Secp256k1 => Self {
                id,
                p: hexint("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"),
                a: BigInt::from(0u32),
                b: BigInt::from(7u32),
                n: hexint("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"),
                gx: hexint("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"),
                gy: hexint("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"),
            },
        }
    }

    /// The generator point G
    pub fn generator(&self) -> AffinePoint {
        AffinePoint::Point {
            x: self.gx.clone(),
            y: self.gy.clone(),
        }
    }
}

/// secp256r1 (NIST P-256) parameters
pub static SECP256R1: Lazy<CurveParams> = Lazy::new(|| CurveParams::new(CurveId::Secp256r1));

/// secp256k1 parameters
pub static SECP256K1: Lazy<CurveParams> = Lazy::new(|| CurveParams::new(CurveId::Secp256k1));

fn hexint(s: &str) -> BigInt {
    BigInt::from_str_radix(s, 16).expect("curve constant is valid hex")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generators_satisfy_curve_equation() {
        for id in [CurveId::Secp256r1, CurveId::Secp256k1] {
            let curve = id.params();
            assert!(
                curve.generator().is_on_curve(curve),
                "generator of {id} is off-curve"
            );
        }
    }

    #[test]
    fn test_curve_id_parsing() {
        assert_eq!("secp256r1".parse::<CurveId>().unwrap(), CurveId::Secp256r1);
        assert_eq!("SECP256K1".parse::<CurveId>().unwrap(), CurveId::Secp256k1);
        assert!(matches!(
            "secp521r1".parse::<CurveId>(),
            Err(CurveError::UnknownCurve(_))
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        for id in [CurveId::Secp256r1, CurveId::Secp256k1] {
            assert_eq!(id.to_string().parse::<CurveId>().unwrap(), id);
        }
    }
}
