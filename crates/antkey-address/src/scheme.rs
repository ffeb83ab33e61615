//! Address scheme configuration

use antkey_curve::CurveId;

/// The deployment-specific constants of an address scheme.
///
/// Every pipeline stage takes the scheme as an argument; nothing is read
/// from process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressScheme {
    /// Curve the key pair lives on
    pub curve: CurveId,
    /// base58check version byte of addresses
    pub address_version: u8,
    /// Offset into the `0x80` WIF version space for private key export
    pub wif_version: u8,
}

impl Default for AddressScheme {
    fn default() -> Self {
        Self {
            curve: CurveId::Secp256r1,
            address_version: 0x17,
            wif_version: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scheme() {
        let scheme = AddressScheme::default();
        assert_eq!(scheme.curve, CurveId::Secp256r1);
        assert_eq!(scheme.address_version, 0x17);
        assert_eq!(scheme.wif_version, 0);
    }
}
