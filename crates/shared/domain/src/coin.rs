//! Coin amount strings as they appear in transaction messages.
//!
//! Reward amounts travel as normalized strings (`"500000udtc"` or a
//! comma-separated list). Parsing here mirrors the normalization rules the
//! node applies, so clients can reject bad amounts before broadcast.

use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_DENOM_LEN: usize = 3;
const MAX_DENOM_LEN: usize = 128;

/// A single token amount.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub amount: u128,
    pub denom: String,
}

/// Ways a coin string can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoinError {
    #[error("coin string is empty")]
    Empty,
    #[error("coin {raw:?} has no amount digits")]
    MissingAmount { raw: String },
    #[error("coin {raw:?} has an unparsable amount")]
    InvalidAmount { raw: String },
    #[error("coin {raw:?} has an invalid denom {denom:?}")]
    InvalidDenom { raw: String, denom: String },
}

impl Coin {
    /// Parses a single `<amount><denom>` string.
    ///
    /// # Errors
    /// Returns a [`CoinError`] when the digits or the denom are malformed.
    pub fn parse(raw: &str) -> Result<Self, CoinError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(CoinError::Empty);
        }

        let split = raw.find(|c: char| !c.is_ascii_digit()).unwrap_or(raw.len());
        let (digits, denom) = raw.split_at(split);
        if digits.is_empty() {
            return Err(CoinError::MissingAmount { raw: raw.to_owned() });
        }
        let amount: u128 =
            digits.parse().map_err(|_| CoinError::InvalidAmount { raw: raw.to_owned() })?;

        if !valid_denom(denom) {
            return Err(CoinError::InvalidDenom { raw: raw.to_owned(), denom: denom.to_owned() });
        }

        Ok(Self { amount, denom: denom.to_owned() })
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Parses a comma-separated coin list, e.g. `"1000udtc,5gbdp"`.
///
/// # Errors
/// Fails on the first malformed entry; an empty input is [`CoinError::Empty`].
pub fn parse_coins(raw: &str) -> Result<Vec<Coin>, CoinError> {
    if raw.trim().is_empty() {
        return Err(CoinError::Empty);
    }
    raw.split(',').map(Coin::parse).collect()
}

fn valid_denom(denom: &str) -> bool {
    if denom.len() < MIN_DENOM_LEN || denom.len() > MAX_DENOM_LEN {
        return false;
    }
    let mut chars = denom.chars();
    let Some(first) = chars.next() else { return false };
    if !first.is_ascii_alphabetic() {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-'))
}
