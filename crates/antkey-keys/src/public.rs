//! Public key representations and derivation
//!
//! A public key is an affine curve point; the compression flag is a
//! property of its serialization (prefix `0x02` for even Y, `0x03` for
//! odd), never stored separately.

use antkey_codec::basen;
use antkey_curve::{AffinePoint, CurveParams};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::private::{ascii, classify_private_key, decode_private_key, PrivateKeyValue};
use crate::KeyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicKeyFormat {
    Decimal,
    Bin,
    BinCompressed,
    Hex,
    HexCompressed,
    BinElectrum,
    HexElectrum,
}

/// A public key value, tagged by its carrier type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKeyValue {
    Point(AffinePoint),
    Bytes(Vec<u8>),
    Text(String),
}

/// Encodes an affine point in the requested format.
///
/// The point at infinity has no serialization in any format.
pub fn encode_public_key(
    point: &AffinePoint,
    format: PublicKeyFormat,
) -> Result<PublicKeyValue, KeyError> {
    let (x, y) = point.coordinates().ok_or(KeyError::InvalidFormat)?;
    let (x, y) = (x.magnitude(), y.magnitude());
    Ok(match format {
        PublicKeyFormat::Decimal => PublicKeyValue::Point(point.clone()),
        PublicKeyFormat::Bin => {
            let mut bytes = vec![0x04];
            bytes.extend(basen::encode(x, 256, 32)?);
            bytes.extend(basen::encode(y, 256, 32)?);
            PublicKeyValue::Bytes(bytes)
        }
        PublicKeyFormat::BinCompressed => {
            let mut bytes = vec![compression_prefix(y)];
            bytes.extend(basen::encode(x, 256, 32)?);
            PublicKeyValue::Bytes(bytes)
        }
        PublicKeyFormat::Hex => PublicKeyValue::Text(format!(
            "04{}{}",
            ascii(basen::encode(x, 16, 64)?),
            ascii(basen::encode(y, 16, 64)?)
        )),
        PublicKeyFormat::HexCompressed => PublicKeyValue::Text(format!(
            "{:02x}{}",
            compression_prefix(y),
            ascii(basen::encode(x, 16, 64)?)
        )),
        PublicKeyFormat::BinElectrum => {
            let mut bytes = basen::encode(x, 256, 32)?;
            bytes.extend(basen::encode(y, 256, 32)?);
            PublicKeyValue::Bytes(bytes)
        }
        PublicKeyFormat::HexElectrum => PublicKeyValue::Text(format!(
            "{}{}",
            ascii(basen::encode(x, 16, 64)?),
            ascii(basen::encode(y, 16, 64)?)
        )),
    })
}

/// Decodes a public key value back to its affine point.
///
/// Accepts every shape [`encode_public_key`] produces; compressed inputs
/// recover Y by modular square root under the given curve.
pub fn decode_public_key(
    value: &PublicKeyValue,
    curve: &CurveParams,
) -> Result<AffinePoint, KeyError> {
    match value {
        PublicKeyValue::Point(p) => Ok(p.clone()),
        PublicKeyValue::Bytes(bytes) => decode_public_key_bytes(bytes, curve),
        PublicKeyValue::Text(text) => {
            let bytes = hex::decode(text).map_err(|_| KeyError::InvalidFormat)?;
            decode_public_key_bytes(&bytes, curve)
        }
    }
}

fn decode_public_key_bytes(bytes: &[u8], curve: &CurveParams) -> Result<AffinePoint, KeyError> {
    match bytes {
        [0x04, rest @ ..] if rest.len() == 64 => Ok(AffinePoint::new(
            BigInt::from(basen::decode(&rest[..32], 256)?),
            BigInt::from(basen::decode(&rest[32..], 256)?),
        )),
        [prefix @ (0x02 | 0x03), rest @ ..] if rest.len() == 32 => {
            let x = BigInt::from(basen::decode(rest, 256)?);
            let y = recover_y(&x, *prefix == 0x03, curve)?;
            Ok(AffinePoint::new(x, y))
        }
        rest if rest.len() == 64 => Ok(AffinePoint::new(
            BigInt::from(basen::decode(&rest[..32], 256)?),
            BigInt::from(basen::decode(&rest[32..], 256)?),
        )),
        _ => Err(KeyError::InvalidFormat),
    }
}

/// Derives the compressed hex public key from a private key in any format.
///
/// The scalar must lie in `(0, N)`; out-of-range scalars are rejected, not
/// reduced, because a reduced key would no longer match the input the
/// caller holds.
pub fn private_to_public(value: &PrivateKeyValue, curve: &CurveParams) -> Result<String, KeyError> {
    let format = classify_private_key(value)?;
    let scalar = decode_private_key(value, Some(format))?;
    if scalar.is_zero() || &scalar >= curve.n.magnitude() {
        return Err(KeyError::ScalarOutOfRange);
    }
    let point = curve.fast_multiply(&curve.generator(), &BigInt::from(scalar))?;
    match encode_public_key(&point, PublicKeyFormat::HexCompressed)? {
        PublicKeyValue::Text(hex) => Ok(hex),
        _ => Err(KeyError::InvalidFormat),
    }
}

fn compression_prefix(y: &BigUint) -> u8 {
    if (y % 2u32).is_zero() {
        0x02
    } else {
        0x03
    }
}

/// Square root of `x^3 + a*x + b` modulo p, with the parity selected by
/// the compression prefix. Both supported primes are ≡ 3 (mod 4), so the
/// root is a single exponentiation by (p + 1) / 4.
fn recover_y(x: &BigInt, odd: bool, curve: &CurveParams) -> Result<BigInt, KeyError> {
    let rhs = (x * x * x + &curve.a * x + &curve.b) % &curve.p;
    let exp = (&curve.p + BigInt::one()) >> 2u32;
    let y = rhs.modpow(&exp, &curve.p);
    if (&y * &y) % &curve.p != rhs {
        // x is not the abscissa of any point on this curve
        return Err(KeyError::InvalidFormat);
    }
    let y_is_odd = !(&y % 2u32).is_zero();
    Ok(if y_is_odd == odd { y } else { &curve.p - y })
}

#[cfg(test)]
mod tests {
    use super::*;
    use antkey_curve::{CurveId, SECP256K1, SECP256R1};
    use num_traits::Num;

    const PRIV_HEX: &str = "1dd37fba80fec4e6a6f13fd708d8dcb3b29def768017052457c73ea8c57f54ba";
    const PUB_X: &str = "618a6ab03467f8f026e23958998f2ef0b7e3cf93445fb11105415fa21c1f3d22";
    const PUB_Y: &str = "346d7bce6b5aa8a11337315582a8e9e549057bced828d3143444148e708540e7";

    fn fixed_point() -> AffinePoint {
        AffinePoint::new(
            BigInt::from_str_radix(PUB_X, 16).unwrap(),
            BigInt::from_str_radix(PUB_Y, 16).unwrap(),
        )
    }

    #[test]
    fn test_private_to_public_known_vector() {
        let pubkey = private_to_public(&PrivateKeyValue::from(PRIV_HEX), &SECP256R1).unwrap();
        assert_eq!(pubkey, format!("03{PUB_X}"));
    }

    #[test]
    fn test_scalar_one_yields_generator() {
        // the secp256r1 generator has an odd Y, hence the 03 prefix
        let pubkey = private_to_public(&PrivateKeyValue::Scalar(BigUint::one()), &SECP256R1).unwrap();
        assert_eq!(
            pubkey,
            "036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
        );
        let pubkey = private_to_public(&PrivateKeyValue::Scalar(BigUint::one()), &SECP256K1).unwrap();
        assert_eq!(
            pubkey,
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
    }

    #[test]
    fn test_scalar_range_enforced() {
        for scalar in [BigUint::zero(), SECP256R1.n.magnitude().clone()] {
            assert!(matches!(
                private_to_public(&PrivateKeyValue::Scalar(scalar), &SECP256R1),
                Err(KeyError::ScalarOutOfRange)
            ));
        }
    }

    #[test]
    fn test_encode_formats() {
        let point = fixed_point();
        assert_eq!(
            encode_public_key(&point, PublicKeyFormat::Hex).unwrap(),
            PublicKeyValue::Text(format!("04{PUB_X}{PUB_Y}"))
        );
        assert_eq!(
            encode_public_key(&point, PublicKeyFormat::HexCompressed).unwrap(),
            PublicKeyValue::Text(format!("03{PUB_X}"))
        );
        assert_eq!(
            encode_public_key(&point, PublicKeyFormat::HexElectrum).unwrap(),
            PublicKeyValue::Text(format!("{PUB_X}{PUB_Y}"))
        );
        match encode_public_key(&point, PublicKeyFormat::Bin).unwrap() {
            PublicKeyValue::Bytes(b) => {
                assert_eq!(b.len(), 65);
                assert_eq!(b[0], 0x04);
            }
            other => panic!("expected bytes, got {other:?}"),
        }
        match encode_public_key(&point, PublicKeyFormat::BinCompressed).unwrap() {
            PublicKeyValue::Bytes(b) => {
                assert_eq!(b.len(), 33);
                assert_eq!(b[0], 0x03);
            }
            other => panic!("expected bytes, got {other:?}"),
        }
        match encode_public_key(&point, PublicKeyFormat::BinElectrum).unwrap() {
            PublicKeyValue::Bytes(b) => assert_eq!(b.len(), 64),
            other => panic!("expected bytes, got {other:?}"),
        }
    }

    #[test]
    fn test_infinity_has_no_encoding() {
        assert!(matches!(
            encode_public_key(&AffinePoint::Infinity, PublicKeyFormat::Hex),
            Err(KeyError::InvalidFormat)
        ));
    }

    #[test]
    fn test_compression_prefix_parity_law() {
        // prefix is 02 iff Y is even, for a spread of scalars on both curves
        for id in [CurveId::Secp256r1, CurveId::Secp256k1] {
            let curve = id.params();
            for k in 1u32..=20 {
                let point = curve
                    .fast_multiply(&curve.generator(), &BigInt::from(k))
                    .unwrap();
                let (_, y) = point.coordinates().unwrap();
                let expected = if (y.magnitude() % 2u32).is_zero() { 0x02 } else { 0x03 };
                match encode_public_key(&point, PublicKeyFormat::BinCompressed).unwrap() {
                    PublicKeyValue::Bytes(b) => assert_eq!(b[0], expected, "k = {k} on {id}"),
                    other => panic!("expected bytes, got {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_decode_roundtrip_every_format() {
        let curve = &*SECP256R1;
        let point = fixed_point();
        for format in [
            PublicKeyFormat::Decimal,
            PublicKeyFormat::Bin,
            PublicKeyFormat::BinCompressed,
            PublicKeyFormat::Hex,
            PublicKeyFormat::HexCompressed,
            PublicKeyFormat::BinElectrum,
            PublicKeyFormat::HexElectrum,
        ] {
            let encoded = encode_public_key(&point, format).unwrap();
            assert_eq!(
                decode_public_key(&encoded, curve).unwrap(),
                point,
                "{format:?}"
            );
        }
    }

    #[test]
    fn test_decode_compressed_even_parity() {
        // 3G on secp256r1 has an even Y, exercising the 02 branch
        let curve = &*SECP256R1;
        let three_g = curve
            .fast_multiply(&curve.generator(), &BigInt::from(3u32))
            .unwrap();
        let compressed = encode_public_key(&three_g, PublicKeyFormat::HexCompressed).unwrap();
        assert_eq!(
            compressed,
            PublicKeyValue::Text(
                "025ecbe4d1a6330a44c8f7ef951d4bf165e6c6b721efada985fb41661bc6e7fd6c".to_string()
            )
        );
        assert_eq!(decode_public_key(&compressed, curve).unwrap(), three_g);
    }

    #[test]
    fn test_decode_rejects_malformed_input() {
        let curve = &*SECP256R1;
        for bytes in [vec![0x04; 10], vec![0x05; 65], vec![]] {
            assert!(matches!(
                decode_public_key(&PublicKeyValue::Bytes(bytes), curve),
                Err(KeyError::InvalidFormat)
            ));
        }
        assert!(matches!(
            decode_public_key(&PublicKeyValue::Text("zz".into()), curve),
            Err(KeyError::InvalidFormat)
        ));
    }
}
