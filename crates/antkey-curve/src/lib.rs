//! AntKey Curve Arithmetic
//!
//! Short Weierstrass elliptic curve operations over the two fixed parameter
//! sets (secp256r1, secp256k1), in Jacobian projective coordinates.

pub mod arithmetic;
pub mod params;
pub mod point;

pub use self::params::{CurveError, CurveId, CurveParams, SECP256K1, SECP256R1};
pub use self::point::{AffinePoint, JacobianPoint};

// Re-export dependencies for use by other crates
pub use num_bigint;
