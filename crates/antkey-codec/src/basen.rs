//! Generic positional codec
//!
//! Values are non-negative big integers; digit strings are byte slices so
//! that base 256 (raw bytes) and the textual bases share one code path.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    #[error("base {0} is not supported")]
    InvalidBase(u32),
    #[error("byte {digit:#04x} is not a digit in base {base}")]
    InvalidDigit { digit: u8, base: u32 },
    #[error("checksum mismatch")]
    ChecksumMismatch,
    #[error("input too short for a checksummed encoding")]
    InvalidLength,
}

const BASE2: &[u8] = b"01";
const BASE10: &[u8] = b"0123456789";
const BASE16: &[u8] = b"0123456789abcdef";
const BASE32: &[u8] = b"abcdefghijklmnopqrstuvwxyz234567";
const BASE58: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Digit alphabet for a supported base. `None` means base 256, where each
/// byte is its own digit value.
fn alphabet(base: u32) -> Result<Option<&'static [u8]>, CodecError> {
    match base {
        2 => Ok(Some(BASE2)),
        10 => Ok(Some(BASE10)),
        16 => Ok(Some(BASE16)),
        32 => Ok(Some(BASE32)),
        58 => Ok(Some(BASE58)),
        256 => Ok(None),
        other => Err(CodecError::InvalidBase(other)),
    }
}

/// Big-endian positional decode.
///
/// Base-16 digits are case-normalized before lookup.
pub fn decode(digits: &[u8], base: u32) -> Result<BigUint, CodecError> {
    let alpha = alphabet(base)?;
    let big_base = BigUint::from(base);
    let mut value = BigUint::zero();
    for &raw in digits {
        let digit = match alpha {
            None => u64::from(raw),
            Some(symbols) => {
                let b = if base == 16 { raw.to_ascii_lowercase() } else { raw };
                symbols
                    .iter()
                    .position(|&s| s == b)
                    .ok_or(CodecError::InvalidDigit { digit: raw, base })?
                    as u64
            }
        };
        value = value * &big_base + digit;
    }
    Ok(value)
}

/// Big-endian positional encode, left-padded with the alphabet's zero
/// symbol to `min_len` digits.
pub fn encode(value: &BigUint, base: u32, min_len: usize) -> Result<Vec<u8>, CodecError> {
    let alpha = alphabet(base)?;
    let big_base = BigUint::from(base);
    let mut digits = Vec::new();
    let mut v = value.clone();
    while !v.is_zero() {
        let rem = (&v % &big_base).to_u64().unwrap_or(0) as usize;
        digits.push(match alpha {
            None => rem as u8,
            Some(symbols) => symbols[rem],
        });
        v /= &big_base;
    }
    let zero_symbol = match alpha {
        None => 0u8,
        Some(symbols) => symbols[0],
    };
    while digits.len() < min_len {
        digits.push(zero_symbol);
    }
    digits.reverse();
    Ok(digits)
}

/// Decode under `from`, re-encode under `to`.
///
/// An identity conversion (`from == to`) skips the arithmetic but still
/// left-pads to `min_len`.
pub fn change_base(
    digits: &[u8],
    from: u32,
    to: u32,
    min_len: usize,
) -> Result<Vec<u8>, CodecError> {
    if from == to {
        let alpha = alphabet(from)?;
        let zero_symbol = match alpha {
            None => 0u8,
            Some(symbols) => symbols[0],
        };
        let pad = min_len.saturating_sub(digits.len());
        let mut out = Vec::with_capacity(pad + digits.len());
        out.resize(pad, zero_symbol);
        out.extend_from_slice(digits);
        return Ok(out);
    }
    encode(&decode(digits, from)?, to, min_len)
}
