//! AntKey Address Pipeline
//!
//! The five-stage derivation from a private key to a script-hash address:
//! scalar → compressed public key → redeem script → HASH160 script hash →
//! base58check address.

pub mod pipeline;
pub mod scheme;

pub use self::pipeline::{
    derive_wallet, generate_wallet, public_key_to_redeem_script, redeem_script_to_script_hash,
    script_hash_to_address, AddressError, Wallet,
};
pub use self::scheme::AddressScheme;
