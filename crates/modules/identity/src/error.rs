use crate::{COMPRESSED_PUBKEY_LEN, SIGNATURE_LEN};
use dtc_domain::address::AddressError;

/// Client-side validation failures for identity module messages.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IdentityError {
    #[error("invalid signer address: {0}")]
    Address(#[from] AddressError),

    #[error("did must not be empty")]
    EmptyDid,

    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("admin pubkey must be {COMPRESSED_PUBKEY_LEN} bytes, got {len}")]
    PubkeyLength { len: usize },

    #[error("signature must be {SIGNATURE_LEN} raw bytes, got {len}")]
    SignatureLength { len: usize },
}
