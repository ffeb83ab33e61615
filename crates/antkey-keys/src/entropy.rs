//! Entropy-to-scalar derivation
//!
//! The entropy itself always comes from the caller; nothing in this crate
//! opens an OS randomness source on its own.

use antkey_codec::hash::sha256;
use antkey_curve::CurveParams;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::RngCore;

use crate::KeyError;

/// Hashes caller-supplied entropy into a private scalar for the curve.
///
/// The SHA-256 digest is read as a big-endian integer. A digest outside
/// `(0, N)` is rejected rather than reduced — the caller retries with
/// fresh entropy (for a 256-bit order this is a ~2^-128 event).
pub fn private_key_from_entropy(entropy: &[u8], curve: &CurveParams) -> Result<BigUint, KeyError> {
    let digest = sha256(entropy);
    let scalar = BigUint::from_bytes_be(&digest);
    if scalar.is_zero() || &scalar >= curve.n.magnitude() {
        return Err(KeyError::ScalarOutOfRange);
    }
    Ok(scalar)
}

/// Samples a fresh private scalar from an external randomness source
pub fn generate_private_key<R: RngCore>(rng: &mut R, curve: &CurveParams) -> BigUint {
    loop {
        let mut entropy = [0u8; 32];
        rng.fill_bytes(&mut entropy);
        if let Ok(scalar) = private_key_from_entropy(&entropy, curve) {
            return scalar;
        }
    }
}
