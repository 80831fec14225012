use crate::RATE_BASE;
use dtc_domain::address::AddressError;

/// Client-side validation failures for credit module messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreditError {
    #[error("invalid signer address: {0}")]
    Address(#[from] AddressError),

    #[error("gbdp_rate {rate} exceeds the rate base {RATE_BASE}")]
    RateOutOfRange { rate: u64 },
}
