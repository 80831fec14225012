//! Task module: claim records and oracle-signed reward payouts.

mod error;
mod msgs;

pub use crate::error::TaskError;
pub use crate::msgs::{
    MsgClaimReward, MsgCreateClaimRecord, MsgDeleteClaimRecord, MsgUpdateClaimRecord,
    MsgUpdateParams,
};

use dtc_kernel::registry::MsgDescriptor;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Module name as registered on chain.
pub const MODULE_NAME: &str = "task";

/// Proto package the module's messages live under.
pub const PACKAGE: &str = "dtc.task.v1";

/// Length of a compressed secp256k1 public key.
pub const COMPRESSED_PUBKEY_LEN: usize = 33;

/// Length of a raw (r || s) secp256k1 signature.
pub const SIGNATURE_LEN: usize = 64;

/// Length of a hex-encoded SHA-256 claim hash.
pub const CLAIM_HASH_LEN: usize = 64;

/// The task module's message table, in generation order.
#[must_use]
pub fn msg_types() -> Vec<MsgDescriptor> {
    vec![
        MsgDescriptor::of::<MsgUpdateParams>(),
        MsgDescriptor::of::<MsgCreateClaimRecord>(),
        MsgDescriptor::of::<MsgUpdateClaimRecord>(),
        MsgDescriptor::of::<MsgDeleteClaimRecord>(),
        MsgDescriptor::of::<MsgClaimReward>(),
    ]
}

/// Task module parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Params {
    /// Hex-encoded compressed secp256k1 key of the reward oracle.
    /// Empty means the node falls back to its built-in default.
    pub admin_pubkey: String,
}

impl Params {
    /// Validates the parameter set.
    ///
    /// # Errors
    /// When set, `admin_pubkey` must decode to exactly
    /// [`COMPRESSED_PUBKEY_LEN`] bytes of hex.
    pub fn validate(&self) -> Result<(), TaskError> {
        if self.admin_pubkey.is_empty() {
            return Ok(());
        }
        let bytes = hex::decode(&self.admin_pubkey)?;
        if bytes.len() != COMPRESSED_PUBKEY_LEN {
            return Err(TaskError::PubkeyLength { len: bytes.len() });
        }
        Ok(())
    }
}

/// An on-chain proof that a task reward was claimed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub creator: String,
    pub claim_hash: String,
    pub task_id: String,
    pub user_id: String,
    pub signature: String,
}

/// The deduplication key a reward claim is stored under:
/// hex SHA-256 of `task_id || recipient`.
#[must_use]
pub fn claim_hash(task_id: &str, recipient: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(task_id.as_bytes());
    hasher.update(recipient.as_bytes());
    hex::encode(hasher.finalize())
}

/// The SHA-256 payload the oracle signs to authorize a payout:
/// `task_id || recipient || amount`.
#[must_use]
pub fn reward_sign_bytes(task_id: &str, recipient: &str, amount: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(task_id.as_bytes());
    hasher.update(recipient.as_bytes());
    hasher.update(amount.as_bytes());
    hasher.finalize().into()
}
