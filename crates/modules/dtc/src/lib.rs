//! The chain's namesake module: global parameters under governance control.

use dtc_domain::address::{AddressError, verify_address};
use dtc_kernel::registry::MsgDescriptor;
use serde::{Deserialize, Serialize};

/// Module name as registered on chain.
pub const MODULE_NAME: &str = "dtc";

/// Proto package the module's messages live under.
pub const PACKAGE: &str = "dtc.dtc.v1";

/// The dtc module's message table.
#[must_use]
pub fn msg_types() -> Vec<MsgDescriptor> {
    vec![MsgDescriptor::of::<MsgUpdateParams>()]
}

/// Chain-level parameters. Currently empty; the struct exists so the
/// governance path stays wire-compatible when parameters are added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Params {}

/// Client-side validation failures for dtc module messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DtcError {
    #[error("invalid signer address: {0}")]
    Address(#[from] AddressError),
}

/// Updates the chain-level parameters; governance authority only.
#[dtc_derive::msg(package = "dtc.dtc.v1")]
pub struct MsgUpdateParams {
    pub authority: String,
    pub params: Params,
}

impl MsgUpdateParams {
    /// # Errors
    /// Rejects a malformed authority address.
    pub fn validate_basic(&self) -> Result<(), DtcError> {
        verify_address(&self.authority)?;
        Ok(())
    }
}
