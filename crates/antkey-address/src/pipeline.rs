//! The derivation pipeline
//!
//! Each stage is a pure function; a failure at any stage aborts the whole
//! derivation and names the stage, and no partial result is ever returned.

use antkey_codec::base58check::base58check_encode;
use antkey_codec::hash::hash160;
use antkey_keys::{
    decode_private_key, encode_private_key, generate_private_key, private_to_public, KeyError,
    PrivateKeyFormat, PrivateKeyValue,
};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::scheme::AddressScheme;

/// OP_PUSHBYTES_33: push the 33-byte compressed key onto the stack
const OP_PUSH_COMPRESSED_KEY: u8 = 0x21;
/// OP_CHECKSIG: verify a signature against the pushed key
const OP_CHECKSIG: u8 = 0xAC;

#[derive(Error, Debug)]
pub enum AddressError {
    #[error("public key derivation failed: {0}")]
    PublicKeyDerivation(#[source] KeyError),
    #[error("redeem script construction failed: expected a 66-character compressed public key")]
    InvalidPublicKey,
    #[error("address encoding failed: script hash is not a hex byte string")]
    InvalidScriptHash,
    #[error("private key export failed: {0}")]
    PrivateKeyExport(#[source] KeyError),
}

/// A fully derived wallet record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    /// base58check address
    pub address: String,
    /// Hex-encoded HASH160 of the redeem script
    pub script_hash: String,
    /// Compressed public key, hex
    pub public_key: String,
    /// Private key, hex
    pub private_key_hex: String,
    /// Private key, compressed WIF
    pub private_key_wif: String,
    /// Curve the key pair lives on
    pub curve: String,
}

/// Wraps a compressed public key into the one-signature redeem script:
/// `0x21 ‖ key ‖ 0xAC`.
pub fn public_key_to_redeem_script(pubkey_hex: &str) -> Result<Vec<u8>, AddressError> {
    let key = hex::decode(pubkey_hex).map_err(|_| AddressError::InvalidPublicKey)?;
    if key.len() != 33 || !matches!(key[0], 0x02 | 0x03) {
        return Err(AddressError::InvalidPublicKey);
    }
    let mut script = Vec::with_capacity(key.len() + 2);
    script.push(OP_PUSH_COMPRESSED_KEY);
    script.extend_from_slice(&key);
    script.push(OP_CHECKSIG);
    Ok(script)
}

/// HASH160 of the redeem script, hex-encoded
pub fn redeem_script_to_script_hash(redeem: &[u8]) -> String {
    hex::encode(hash160(redeem))
}

/// base58check address for a hex script hash under the given version byte
pub fn script_hash_to_address(script_hash_hex: &str, version: u8) -> Result<String, AddressError> {
    let script_hash = hex::decode(script_hash_hex).map_err(|_| AddressError::InvalidScriptHash)?;
    Ok(base58check_encode(version, &script_hash))
}

/// Runs the full pipeline for a private key in any supported format.
pub fn derive_wallet(
    private: &PrivateKeyValue,
    scheme: &AddressScheme,
) -> Result<Wallet, AddressError> {
    let curve = scheme.curve.params();

    let public_key =
        private_to_public(private, curve).map_err(AddressError::PublicKeyDerivation)?;
    debug!(curve = %scheme.curve, "derived public key");

    let redeem_script = public_key_to_redeem_script(&public_key)?;
    let script_hash = redeem_script_to_script_hash(&redeem_script);
    let address = script_hash_to_address(&script_hash, scheme.address_version)?;
    debug!(%address, "derived address");

    let scalar = decode_private_key(private, None).map_err(AddressError::PrivateKeyExport)?;
    let private_key_hex = export_text(&scalar, PrivateKeyFormat::Hex, scheme.wif_version)?;
    let private_key_wif = export_text(&scalar, PrivateKeyFormat::WifCompressed, scheme.wif_version)?;

    Ok(Wallet {
        address,
        script_hash,
        public_key,
        private_key_hex,
        private_key_wif,
        curve: scheme.curve.to_string(),
    })
}

/// Derives a wallet from a freshly sampled private key.
pub fn generate_wallet(scheme: &AddressScheme) -> Result<Wallet, AddressError> {
    let scalar = generate_private_key(&mut OsRng, scheme.curve.params());
    derive_wallet(&PrivateKeyValue::Scalar(scalar), scheme)
}

fn export_text(
    scalar: &num_bigint::BigUint,
    format: PrivateKeyFormat,
    wif_version: u8,
) -> Result<String, AddressError> {
    match encode_private_key(scalar, format, wif_version) {
        Ok(PrivateKeyValue::Text(text)) => Ok(text),
        Ok(_) => Err(AddressError::PrivateKeyExport(KeyError::InvalidFormat)),
        Err(e) => Err(AddressError::PrivateKeyExport(e)),
    }
}
