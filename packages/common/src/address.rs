//! Remote address checks
//!
//! A ledger cannot run another chain's `addr_validate`, so outbound
//! recipients are checked against the bech32 shape every destination
//! ledger accepts: a valid checksum, lowercase only, and a 20-byte (wallet)
//! or 32-byte (contract) payload. Anything else could never be paid out.

use bech32::{FromBase32, Variant};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AddressError {
    #[error("Invalid bech32 address: {reason}")]
    Bech32 { reason: String },

    #[error("Address must be lowercase")]
    NotLowercase,

    #[error("Unsupported bech32 variant")]
    UnsupportedVariant,

    #[error("Invalid address length: expected 20 or 32 bytes, got {len}")]
    InvalidLength { len: usize },
}

/// Decode a bech32 address into its prefix and raw bytes.
pub fn decode_bech32_address(addr: &str) -> Result<(String, Vec<u8>), AddressError> {
    // bech32 also accepts all-uppercase input; CosmWasm addresses never are
    if addr.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(AddressError::NotLowercase);
    }

    let (hrp, data, variant) = bech32::decode(addr).map_err(|e| AddressError::Bech32 {
        reason: e.to_string(),
    })?;
    if variant != Variant::Bech32 {
        return Err(AddressError::UnsupportedVariant);
    }

    let bytes = Vec::<u8>::from_base32(&data).map_err(|e| AddressError::Bech32 {
        reason: e.to_string(),
    })?;
    if bytes.len() != 20 && bytes.len() != 32 {
        return Err(AddressError::InvalidLength { len: bytes.len() });
    }

    Ok((hrp, bytes))
}

/// Check that `addr` can be a recipient on a remote CosmWasm chain.
pub fn validate_remote_address(addr: &str) -> Result<(), AddressError> {
    decode_bech32_address(addr).map(|_| ())
}
