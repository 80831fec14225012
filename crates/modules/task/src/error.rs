use crate::{CLAIM_HASH_LEN, COMPRESSED_PUBKEY_LEN, SIGNATURE_LEN};
use dtc_domain::address::AddressError;
use dtc_domain::coin::CoinError;

/// Client-side validation failures for task module messages.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TaskError {
    #[error("invalid signer address: {0}")]
    Address(#[from] AddressError),

    #[error("invalid reward amount: {0}")]
    Amount(#[from] CoinError),

    #[error("claim hash must be {CLAIM_HASH_LEN} hex characters, got {hash:?}")]
    ClaimHash { hash: String },

    #[error("task id must not be empty")]
    EmptyTaskId,

    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("admin pubkey must be {COMPRESSED_PUBKEY_LEN} bytes, got {len}")]
    PubkeyLength { len: usize },

    #[error("signature must decode to {SIGNATURE_LEN} bytes, got {len}")]
    SignatureLength { len: usize },
}
