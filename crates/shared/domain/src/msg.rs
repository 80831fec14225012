//! The contract every registrable transaction message fulfils.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A transaction message with a static type URL.
///
/// Implementations are generated by `#[dtc_derive::msg]`; the trait itself
/// only pins the identity and the serde bounds the codec layer relies on.
pub trait Msg: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Dispatch key, e.g. `/dtc.credit.v1.MsgMintCredit`.
    const TYPE_URL: &'static str;

    /// Instance-level accessor for type-erased call sites.
    #[must_use]
    fn type_url(&self) -> &'static str {
        Self::TYPE_URL
    }
}
