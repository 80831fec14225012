//! Transaction messages of the credit module.
//!
//! `validate_basic` mirrors the stateless checks the node applies before
//! touching state, so a client can reject a message without broadcasting it.

use crate::error::CreditError;
use crate::Params;
use dtc_domain::address::verify_address;

/// Updates the module parameters; governance authority only.
#[dtc_derive::msg(package = "dtc.credit.v1")]
pub struct MsgUpdateParams {
    pub authority: String,
    pub params: Params,
}

impl MsgUpdateParams {
    /// # Errors
    /// Rejects a malformed authority address or invalid parameters.
    pub fn validate_basic(&self) -> Result<(), CreditError> {
        verify_address(&self.authority)?;
        self.params.validate()
    }
}

/// Mints the fixed credit amount to the creator, recording the liability.
#[dtc_derive::msg(package = "dtc.credit.v1")]
pub struct MsgMintCredit {
    pub creator: String,
}

impl MsgMintCredit {
    /// # Errors
    /// Rejects a malformed creator address.
    pub fn validate_basic(&self) -> Result<(), CreditError> {
        verify_address(&self.creator)?;
        Ok(())
    }
}

/// Submits a death certificate for the creator's credit account.
#[dtc_derive::msg(package = "dtc.credit.v1")]
pub struct MsgSubmitDeathCertificate {
    pub creator: String,
}

impl MsgSubmitDeathCertificate {
    /// # Errors
    /// Rejects a malformed creator address.
    pub fn validate_basic(&self) -> Result<(), CreditError> {
        verify_address(&self.creator)?;
        Ok(())
    }
}
