//! Checksummed base-58 encoding of versioned payloads

use crate::basen::{change_base, CodecError};
use crate::hash::double_sha256;

/// Base58check encode: version byte, payload, then the first 4 bytes of
/// the double-SHA-256 of version‖payload, the whole buffer re-based from
/// 256 to 58.
pub fn base58check_encode(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + 4);
    data.push(version);
    data.extend_from_slice(payload);

    let checksum = double_sha256(&data);
    data.extend_from_slice(&checksum[..4]);

    let digits = change_base(&data, 256, 58, 0).expect("bases 256 and 58 are supported");
    String::from_utf8(digits).expect("base-58 alphabet is ASCII")
}

/// Base58check decode, returns (version, payload).
///
/// The checksum is always recomputed over version‖payload and compared
/// against the embedded trailer, never trusted.
pub fn base58check_decode(input: &str) -> Result<(u8, Vec<u8>), CodecError> {
    let data = change_base(input.as_bytes(), 58, 256, 0)?;

    if data.len() < 5 {
        return Err(CodecError::InvalidLength);
    }

    let (payload_with_version, checksum) = data.split_at(data.len() - 4);
    let computed_checksum = &double_sha256(payload_with_version)[..4];

    if checksum != computed_checksum {
        return Err(CodecError::ChecksumMismatch);
    }

    let version = payload_with_version[0];
    let payload = payload_with_version[1..].to_vec();

    Ok((version, payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE58_ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

    #[test]
    fn test_known_vector() {
        let encoded = base58check_encode(0x17, &[1u8; 20]);
        assert_eq!(encoded, "AFsBXShNPGXJCSpxmFnTWEm3UHqyohhEgP");
    }

    #[test]
    fn test_roundtrip() {
        let payload = [1u8; 20];
        let encoded = base58check_encode(0x17, &payload);
        let (version, decoded) = base58check_decode(&encoded).unwrap();
        assert_eq!(version, 0x17);
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_single_character_corruption_detected() {
        let encoded = base58check_encode(0x17, &[1u8; 20]);
        let bytes = encoded.as_bytes();
        for i in 0..bytes.len() {
            let mut corrupted = bytes.to_vec();
            // swap the digit for a different symbol from the same alphabet
            let pos = BASE58_ALPHABET.iter().position(|&c| c == bytes[i]).unwrap();
            corrupted[i] = BASE58_ALPHABET[(pos + 1) % BASE58_ALPHABET.len()];
            let corrupted = String::from_utf8(corrupted).unwrap();
            assert_eq!(
                base58check_decode(&corrupted).unwrap_err(),
                CodecError::ChecksumMismatch,
                "corruption at index {i} went undetected"
            );
        }
    }

    #[test]
    fn test_decode_rejects_short_input() {
        assert_eq!(
            base58check_decode("11").unwrap_err(),
            CodecError::InvalidLength
        );
    }

    #[test]
    fn test_decode_rejects_foreign_characters() {
        assert!(matches!(
            base58check_decode("0OIl").unwrap_err(),
            CodecError::InvalidDigit { .. }
        ));
    }

    #[test]
    fn test_matches_reference_base58() {
        // cross-check the hand-rolled digit mapping against the bs58 crate;
        // payloads start with a nonzero version so the positional encoding
        // and the leading-zero-preserving reference agree byte for byte
        for payload in [&[0xFFu8; 7][..], &[0x01u8, 0x02, 0x03][..], &[0x80u8; 33][..]] {
            let mut data = vec![0x42u8];
            data.extend_from_slice(payload);
            let checksum = crate::hash::double_sha256(&data);
            data.extend_from_slice(&checksum[..4]);
            assert_eq!(
                String::from_utf8(change_base(&data, 256, 58, 0).unwrap()).unwrap(),
                bs58::encode(&data).into_string()
            );
        }
    }
}
