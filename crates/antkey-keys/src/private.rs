//! Private key representations
//!
//! A private key is a scalar; everything else is presentation. The seven
//! formats cover raw integers, 32/33-byte buffers, 64/66-character hex,
//! and checksummed WIF with or without the trailing compression marker.

use antkey_codec::base58check::{base58check_decode, base58check_encode};
use antkey_codec::basen;
use num_bigint::BigUint;

use crate::KeyError;

/// Marker byte appended to a 32-byte scalar to request a compressed
/// public key downstream. A serialization hint, not key material.
pub const COMPRESSION_MARKER: u8 = 0x01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivateKeyFormat {
    Decimal,
    Bin,
    BinCompressed,
    Hex,
    HexCompressed,
    Wif,
    WifCompressed,
}

/// A private key value as supplied by a caller, tagged by its carrier type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivateKeyValue {
    Scalar(BigUint),
    Bytes(Vec<u8>),
    Text(String),
}

impl From<BigUint> for PrivateKeyValue {
    fn from(k: BigUint) -> Self {
        PrivateKeyValue::Scalar(k)
    }
}

impl From<Vec<u8>> for PrivateKeyValue {
    fn from(bytes: Vec<u8>) -> Self {
        PrivateKeyValue::Bytes(bytes)
    }
}

impl From<&str> for PrivateKeyValue {
    fn from(text: &str) -> Self {
        PrivateKeyValue::Text(text.to_string())
    }
}

/// Determines the format of a private key value from its shape.
///
/// Classification is total and branch-visible: scalars are `Decimal`,
/// byte buffers classify by length, text classifies by length or, failing
/// that, by a trial base58check decode.
pub fn classify_private_key(value: &PrivateKeyValue) -> Result<PrivateKeyFormat, KeyError> {
    match value {
        PrivateKeyValue::Scalar(_) => Ok(PrivateKeyFormat::Decimal),
        PrivateKeyValue::Bytes(b) => match b.len() {
            32 => Ok(PrivateKeyFormat::Bin),
            33 => Ok(PrivateKeyFormat::BinCompressed),
            _ => Err(KeyError::InvalidFormat),
        },
        PrivateKeyValue::Text(t) => match t.len() {
            64 => Ok(PrivateKeyFormat::Hex),
            66 => Ok(PrivateKeyFormat::HexCompressed),
            _ => match base58check_decode(t) {
                Ok((_, payload)) if payload.len() == 32 => Ok(PrivateKeyFormat::Wif),
                Ok((_, payload)) if payload.len() == 33 => Ok(PrivateKeyFormat::WifCompressed),
                _ => Err(KeyError::InvalidFormat),
            },
        },
    }
}

/// Decodes a private key value to its scalar.
///
/// With no explicit format the value is classified first. Compressed
/// variants read only the leading 32 raw bytes; the marker byte is
/// discarded. WIF variants strip the version byte via base58check.
pub fn decode_private_key(
    value: &PrivateKeyValue,
    format: Option<PrivateKeyFormat>,
) -> Result<BigUint, KeyError> {
    let format = match format {
        Some(f) => f,
        None => classify_private_key(value)?,
    };
    match (format, value) {
        (PrivateKeyFormat::Decimal, PrivateKeyValue::Scalar(k)) => Ok(k.clone()),
        (PrivateKeyFormat::Bin, PrivateKeyValue::Bytes(b)) => Ok(basen::decode(b, 256)?),
        (PrivateKeyFormat::BinCompressed, PrivateKeyValue::Bytes(b)) if b.len() >= 32 => {
            Ok(basen::decode(&b[..32], 256)?)
        }
        (PrivateKeyFormat::Hex, PrivateKeyValue::Text(t)) => Ok(basen::decode(t.as_bytes(), 16)?),
        (PrivateKeyFormat::HexCompressed, PrivateKeyValue::Text(t)) if t.len() >= 64 => {
            Ok(basen::decode(&t.as_bytes()[..64], 16)?)
        }
        (PrivateKeyFormat::Wif, PrivateKeyValue::Text(t)) => {
            let (_, payload) = base58check_decode(t)?;
            Ok(basen::decode(&payload, 256)?)
        }
        (PrivateKeyFormat::WifCompressed, PrivateKeyValue::Text(t)) => {
            let (_, payload) = base58check_decode(t)?;
            if payload.len() < 32 {
                return Err(KeyError::InvalidFormat);
            }
            Ok(basen::decode(&payload[..32], 256)?)
        }
        _ => Err(KeyError::InvalidFormat),
    }
}

/// Encodes a scalar into the requested format.
///
/// WIF variants live in the `0x80` version space: the encoded version byte
/// is `0x80 + version_byte`.
pub fn encode_private_key(
    scalar: &BigUint,
    format: PrivateKeyFormat,
    version_byte: u8,
) -> Result<PrivateKeyValue, KeyError> {
    Ok(match format {
        PrivateKeyFormat::Decimal => PrivateKeyValue::Scalar(scalar.clone()),
        PrivateKeyFormat::Bin => PrivateKeyValue::Bytes(basen::encode(scalar, 256, 32)?),
        PrivateKeyFormat::BinCompressed => {
            let mut bytes = basen::encode(scalar, 256, 32)?;
            bytes.push(COMPRESSION_MARKER);
            PrivateKeyValue::Bytes(bytes)
        }
        PrivateKeyFormat::Hex => PrivateKeyValue::Text(ascii(basen::encode(scalar, 16, 64)?)),
        PrivateKeyFormat::HexCompressed => {
            let mut text = ascii(basen::encode(scalar, 16, 64)?);
            text.push_str("01");
            PrivateKeyValue::Text(text)
        }
        PrivateKeyFormat::Wif => {
            let bytes = basen::encode(scalar, 256, 32)?;
            PrivateKeyValue::Text(base58check_encode(0x80u8.wrapping_add(version_byte), &bytes))
        }
        PrivateKeyFormat::WifCompressed => {
            let mut bytes = basen::encode(scalar, 256, 32)?;
            bytes.push(COMPRESSION_MARKER);
            PrivateKeyValue::Text(base58check_encode(0x80u8.wrapping_add(version_byte), &bytes))
        }
    })
}

pub(crate) fn ascii(digits: Vec<u8>) -> String {
    String::from_utf8(digits).expect("codec alphabets are ASCII")
}
