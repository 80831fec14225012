//! Client-side account address checks.
//!
//! The node owns the authoritative address codec; this module only rejects
//! strings that cannot possibly be a DTC bech32 account address, so malformed
//! messages fail before they are encoded and broadcast.

use crate::constants::ADDRESS_PREFIX;
use std::borrow::Cow;

// Bech32 data charset. Excludes the visually ambiguous characters
// ('1', 'b', 'i', 'o') by construction.
pub const BECH32_ALPHABET: &[char; 32] = &[
    'q', 'p', 'z', 'r', 'y', '9', 'x', '8', 'g', 'f', '2', 't', 'v', 'd', 'w', '0', 's', '3', 'j',
    'n', '5', '4', 'k', 'h', 'c', 'e', '6', 'm', 'u', 'a', '7', 'l',
];

const MIN_DATA_LEN: usize = 6;
const MAX_ADDRESS_LEN: usize = 90;

/// Ways an account address string can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,
    #[error("address {address:?} does not start with the '{ADDRESS_PREFIX}1' prefix")]
    WrongPrefix { address: Cow<'static, str> },
    #[error("address {address:?} has invalid length {len}")]
    InvalidLength { address: Cow<'static, str>, len: usize },
    #[error("address {address:?} contains {found:?}, not a bech32 character")]
    InvalidCharacter { address: Cow<'static, str>, found: char },
}

/// Verifies that `address` is shaped like a DTC bech32 account address.
///
/// Checks the human-readable prefix, overall length, and the bech32 data
/// charset. Checksum verification stays with the node's address codec.
///
/// # Errors
/// Returns the first [`AddressError`] violation found.
pub fn verify_address(address: &str) -> Result<(), AddressError> {
    if address.is_empty() {
        return Err(AddressError::Empty);
    }

    let owned = || Cow::Owned(address.to_owned());

    let Some(data) = address.strip_prefix(ADDRESS_PREFIX).and_then(|s| s.strip_prefix('1')) else {
        return Err(AddressError::WrongPrefix { address: owned() });
    };

    if data.len() < MIN_DATA_LEN || address.len() > MAX_ADDRESS_LEN {
        return Err(AddressError::InvalidLength { address: owned(), len: address.len() });
    }

    if let Some(found) = data.chars().find(|c| !BECH32_ALPHABET.contains(c)) {
        return Err(AddressError::InvalidCharacter { address: owned(), found });
    }

    Ok(())
}
