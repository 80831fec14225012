//! Transaction messages of the task module.

use crate::error::TaskError;
use crate::{CLAIM_HASH_LEN, Params, SIGNATURE_LEN};
use dtc_domain::address::verify_address;
use dtc_domain::coin::parse_coins;
use dtc_domain::constants::INTEGRATION_TEST_SIGNATURE;

/// Updates the module parameters; governance authority only.
#[dtc_derive::msg(package = "dtc.task.v1")]
pub struct MsgUpdateParams {
    pub authority: String,
    pub params: Params,
}

impl MsgUpdateParams {
    /// # Errors
    /// Rejects a malformed authority address or invalid parameters.
    pub fn validate_basic(&self) -> Result<(), TaskError> {
        verify_address(&self.authority)?;
        self.params.validate()
    }
}

/// Creates a claim record under its claim hash.
#[dtc_derive::msg(package = "dtc.task.v1")]
pub struct MsgCreateClaimRecord {
    pub creator: String,
    pub claim_hash: String,
    pub task_id: String,
    pub user_id: String,
    pub signature: String,
}

impl MsgCreateClaimRecord {
    /// # Errors
    /// Rejects a malformed creator address, a non-SHA-256-shaped claim hash,
    /// or an empty task id.
    pub fn validate_basic(&self) -> Result<(), TaskError> {
        verify_address(&self.creator)?;
        validate_claim_hash(&self.claim_hash)?;
        if self.task_id.is_empty() {
            return Err(TaskError::EmptyTaskId);
        }
        Ok(())
    }
}

/// Replaces a claim record; only its creator may update.
#[dtc_derive::msg(package = "dtc.task.v1")]
pub struct MsgUpdateClaimRecord {
    pub creator: String,
    pub claim_hash: String,
    pub task_id: String,
    pub user_id: String,
    pub signature: String,
}

impl MsgUpdateClaimRecord {
    /// # Errors
    /// Same checks as [`MsgCreateClaimRecord::validate_basic`].
    pub fn validate_basic(&self) -> Result<(), TaskError> {
        verify_address(&self.creator)?;
        validate_claim_hash(&self.claim_hash)?;
        if self.task_id.is_empty() {
            return Err(TaskError::EmptyTaskId);
        }
        Ok(())
    }
}

/// Removes a claim record; only its creator may delete.
#[dtc_derive::msg(package = "dtc.task.v1")]
pub struct MsgDeleteClaimRecord {
    pub creator: String,
    pub claim_hash: String,
}

impl MsgDeleteClaimRecord {
    /// # Errors
    /// Rejects a malformed creator address or a malformed claim hash.
    pub fn validate_basic(&self) -> Result<(), TaskError> {
        verify_address(&self.creator)?;
        validate_claim_hash(&self.claim_hash)
    }
}

/// Pays a task reward to `recipient` (or the creator when empty), authorized
/// by an oracle signature over `task_id || recipient || amount`.
#[dtc_derive::msg(package = "dtc.task.v1")]
pub struct MsgClaimReward {
    pub creator: String,
    pub recipient: String,
    pub task_id: String,
    /// Normalized coin list, e.g. `"500000udtc"`.
    pub amount: String,
    /// Hex-encoded oracle signature.
    pub signature: String,
}

impl MsgClaimReward {
    /// The address the reward is paid to: the explicit recipient, or the
    /// creator when left empty.
    #[must_use]
    pub fn effective_recipient(&self) -> &str {
        if self.recipient.is_empty() { &self.creator } else { &self.recipient }
    }

    /// # Errors
    /// Rejects malformed creator/recipient addresses, an empty task id, an
    /// unparsable amount, or a signature of the wrong shape (the node's
    /// integration-test marker is exempt).
    pub fn validate_basic(&self) -> Result<(), TaskError> {
        verify_address(&self.creator)?;
        if !self.recipient.is_empty() {
            verify_address(&self.recipient)?;
        }
        if self.task_id.is_empty() {
            return Err(TaskError::EmptyTaskId);
        }
        parse_coins(&self.amount)?;

        if self.signature != INTEGRATION_TEST_SIGNATURE {
            let bytes = hex::decode(&self.signature)?;
            if bytes.len() != SIGNATURE_LEN {
                return Err(TaskError::SignatureLength { len: bytes.len() });
            }
        }
        Ok(())
    }
}

fn validate_claim_hash(hash: &str) -> Result<(), TaskError> {
    if hash.len() != CLAIM_HASH_LEN || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TaskError::ClaimHash { hash: hash.to_owned() });
    }
    Ok(())
}
