//! Transaction messages of the identity module.

use crate::error::IdentityError;
use crate::{Params, SIGNATURE_LEN};
use dtc_domain::address::verify_address;
use dtc_domain::constants::INTEGRATION_TEST_SIGNATURE;

/// Updates the module parameters; governance authority only.
#[dtc_derive::msg(package = "dtc.identity.v1")]
pub struct MsgUpdateParams {
    pub authority: String,
    pub params: Params,
}

impl MsgUpdateParams {
    /// # Errors
    /// Rejects a malformed authority address or invalid parameters.
    pub fn validate_basic(&self) -> Result<(), IdentityError> {
        verify_address(&self.authority)?;
        self.params.validate()
    }
}

/// Registers a DID document, attested by an admin signature over
/// `did || controller || face_hash`.
#[dtc_derive::msg(package = "dtc.identity.v1")]
pub struct MsgCreateDidDocument {
    pub creator: String,
    pub did: String,
    pub controller: String,
    pub face_hash: String,
    pub pubkeys: Vec<String>,
    pub signature: Vec<u8>,
}

impl MsgCreateDidDocument {
    /// The controller the node will record: the explicit one, or the creator
    /// when left empty.
    #[must_use]
    pub fn effective_controller(&self) -> &str {
        if self.controller.is_empty() { &self.creator } else { &self.controller }
    }

    /// # Errors
    /// Rejects a malformed creator address, an empty DID, or a signature of
    /// the wrong shape (the node's integration-test marker is exempt).
    pub fn validate_basic(&self) -> Result<(), IdentityError> {
        verify_address(&self.creator)?;
        if self.did.is_empty() {
            return Err(IdentityError::EmptyDid);
        }
        if self.signature != INTEGRATION_TEST_SIGNATURE.as_bytes()
            && self.signature.len() != SIGNATURE_LEN
        {
            return Err(IdentityError::SignatureLength { len: self.signature.len() });
        }
        Ok(())
    }
}

/// Replaces a DID document; only the current controller may update.
#[dtc_derive::msg(package = "dtc.identity.v1")]
pub struct MsgUpdateDidDocument {
    pub creator: String,
    pub did: String,
    pub controller: String,
    pub pubkeys: Vec<String>,
}

impl MsgUpdateDidDocument {
    /// # Errors
    /// Rejects a malformed creator address or an empty DID.
    pub fn validate_basic(&self) -> Result<(), IdentityError> {
        verify_address(&self.creator)?;
        if self.did.is_empty() {
            return Err(IdentityError::EmptyDid);
        }
        Ok(())
    }
}

/// Removes a DID document; only the current controller may delete.
#[dtc_derive::msg(package = "dtc.identity.v1")]
pub struct MsgDeleteDidDocument {
    pub creator: String,
    pub did: String,
}

impl MsgDeleteDidDocument {
    /// # Errors
    /// Rejects a malformed creator address or an empty DID.
    pub fn validate_basic(&self) -> Result<(), IdentityError> {
        verify_address(&self.creator)?;
        if self.did.is_empty() {
            return Err(IdentityError::EmptyDid);
        }
        Ok(())
    }
}
