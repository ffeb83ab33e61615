//! AntKey Key Formats
//!
//! Conversion of private and public keys between their textual and binary
//! representations: raw scalars, raw bytes, hex, WIF, and the compressed /
//! uncompressed / electrum public-key shapes.

pub mod entropy;
pub mod private;
pub mod public;

pub use self::entropy::{generate_private_key, private_key_from_entropy};
pub use self::private::{
    classify_private_key, decode_private_key, encode_private_key, PrivateKeyFormat,
    PrivateKeyValue,
};
pub use self::public::{
    decode_public_key, encode_public_key, private_to_public, PublicKeyFormat, PublicKeyValue,
};

use antkey_codec::CodecError;
use antkey_curve::CurveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyError {
    #[error("unrecognized key format")]
    InvalidFormat,
    #[error("private scalar out of range, must satisfy 0 < k < N")]
    ScalarOutOfRange,
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Curve(#[from] CurveError),
}
