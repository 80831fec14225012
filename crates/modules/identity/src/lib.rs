//! Identity module: admin-attested DID documents with face-hash uniqueness.

mod error;
mod msgs;

pub use crate::error::IdentityError;
pub use crate::msgs::{
    MsgCreateDidDocument, MsgDeleteDidDocument, MsgUpdateDidDocument, MsgUpdateParams,
};

use dtc_kernel::registry::MsgDescriptor;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Module name as registered on chain.
pub const MODULE_NAME: &str = "identity";

/// Proto package the module's messages live under.
pub const PACKAGE: &str = "dtc.identity.v1";

/// Length of a compressed secp256k1 public key.
pub const COMPRESSED_PUBKEY_LEN: usize = 33;

/// Length of a raw (r || s) secp256k1 signature.
pub const SIGNATURE_LEN: usize = 64;

/// The identity module's message table, in generation order.
#[must_use]
pub fn msg_types() -> Vec<MsgDescriptor> {
    vec![
        MsgDescriptor::of::<MsgUpdateParams>(),
        MsgDescriptor::of::<MsgCreateDidDocument>(),
        MsgDescriptor::of::<MsgUpdateDidDocument>(),
        MsgDescriptor::of::<MsgDeleteDidDocument>(),
    ]
}

/// Identity module parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Params {
    /// Hex-encoded compressed secp256k1 key that attests DID registrations.
    /// Empty means the node falls back to its built-in default.
    pub admin_pubkey: String,
}

impl Params {
    /// Validates the parameter set.
    ///
    /// # Errors
    /// When set, `admin_pubkey` must decode to exactly
    /// [`COMPRESSED_PUBKEY_LEN`] bytes of hex.
    pub fn validate(&self) -> Result<(), IdentityError> {
        if self.admin_pubkey.is_empty() {
            return Ok(());
        }
        let bytes = hex::decode(&self.admin_pubkey)?;
        if bytes.len() != COMPRESSED_PUBKEY_LEN {
            return Err(IdentityError::PubkeyLength { len: bytes.len() });
        }
        Ok(())
    }
}

/// An on-chain DID document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidDocument {
    pub did: String,
    pub controller: String,
    pub face_hash: String,
    pub pubkeys: Vec<String>,
}

/// The SHA-256 payload the admin key signs to attest a DID registration:
/// `did || controller || face_hash`, with the controller already resolved
/// (an empty controller defaults to the creator).
#[must_use]
pub fn did_sign_bytes(did: &str, controller: &str, face_hash: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(did.as_bytes());
    hasher.update(controller.as_bytes());
    hasher.update(face_hash.as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtc_domain::constants::DEFAULT_ADMIN_PUBKEY_HEX;

    #[test]
    fn params_accept_empty_or_valid_pubkey() {
        assert!(Params::default().validate().is_ok());
        assert!(Params { admin_pubkey: DEFAULT_ADMIN_PUBKEY_HEX.to_owned() }.validate().is_ok());
        assert!(Params { admin_pubkey: "zz".to_owned() }.validate().is_err());
        assert!(Params { admin_pubkey: "0011".to_owned() }.validate().is_err());
    }

    #[test]
    fn sign_bytes_depend_on_every_field() {
        let base = did_sign_bytes("did:dtc:1", "dtc1abc", "fh");
        assert_ne!(base, did_sign_bytes("did:dtc:2", "dtc1abc", "fh"));
        assert_ne!(base, did_sign_bytes("did:dtc:1", "dtc1abd", "fh"));
        assert_ne!(base, did_sign_bytes("did:dtc:1", "dtc1abc", "fh2"));
    }
}
