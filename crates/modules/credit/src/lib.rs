//! Credit module: periodic minting against a credit account, with a fixed
//! split into the GBDP funding pool, plus death-certificate submission.

mod error;
mod msgs;

pub use crate::error::CreditError;
pub use crate::msgs::{MsgMintCredit, MsgSubmitDeathCertificate, MsgUpdateParams};

use dtc_kernel::registry::MsgDescriptor;
use serde::{Deserialize, Serialize};

/// Module name as registered on chain.
pub const MODULE_NAME: &str = "credit";

/// Proto package the module's messages live under.
pub const PACKAGE: &str = "dtc.credit.v1";

/// Amount minted by every `MsgMintCredit`, in `udtc` (100 DTC).
pub const MINT_AMOUNT: u64 = 100_000_000;

/// Base for the GBDP split rate: a `gbdp_rate` of 100 means 1%.
pub const RATE_BASE: u64 = 10_000;

/// Minimum blocks between two mints by the same account
/// (30 days at 5 seconds per block).
pub const BLOCKS_PER_MONTH: u64 = 518_400;

/// The credit module's message table, in generation order.
#[must_use]
pub fn msg_types() -> Vec<MsgDescriptor> {
    vec![
        MsgDescriptor::of::<MsgUpdateParams>(),
        MsgDescriptor::of::<MsgMintCredit>(),
        MsgDescriptor::of::<MsgSubmitDeathCertificate>(),
    ]
}

/// Credit module parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Params {
    /// Fraction of each mint routed to the GBDP pool, in units of
    /// 1/[`RATE_BASE`].
    pub gbdp_rate: u64,
}

impl Params {
    /// Validates the parameter set.
    ///
    /// # Errors
    /// Rejects a `gbdp_rate` above [`RATE_BASE`] (more than 100%).
    pub fn validate(&self) -> Result<(), CreditError> {
        if self.gbdp_rate > RATE_BASE {
            return Err(CreditError::RateOutOfRange { rate: self.gbdp_rate });
        }
        Ok(())
    }
}

/// Splits [`MINT_AMOUNT`] between the creator and the GBDP pool for a given
/// rate. Rates above [`RATE_BASE`] are clamped, as the node does.
#[must_use]
pub const fn mint_split(gbdp_rate: u64) -> (u64, u64) {
    let rate = if gbdp_rate > RATE_BASE { RATE_BASE } else { gbdp_rate };
    let gbdp = MINT_AMOUNT * rate / RATE_BASE;
    (MINT_AMOUNT - gbdp, gbdp)
}

/// A credit account: outstanding liability and the height of the last mint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditAccount {
    /// Outstanding debt, in the same unit as minted coins (`udtc`).
    pub liability: u64,
    /// Block height of the most recent mint.
    pub last_mint_height: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_bound_by_rate_base() {
        assert!(Params { gbdp_rate: 100 }.validate().is_ok());
        assert!(Params { gbdp_rate: RATE_BASE }.validate().is_ok());
        assert!(Params { gbdp_rate: RATE_BASE + 1 }.validate().is_err());
    }

    #[test]
    fn mint_split_follows_rate() {
        // 1% to the pool
        assert_eq!(mint_split(100), (99_000_000, 1_000_000));
        assert_eq!(mint_split(0), (MINT_AMOUNT, 0));
        // Clamped at 100%
        assert_eq!(mint_split(RATE_BASE * 2), (0, MINT_AMOUNT));
    }
}
