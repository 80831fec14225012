//! Binary envelope and encode/decode helpers.
//!
//! Message bodies travel as postcard bytes paired with the type URL that
//! names their schema, so a consumer can dispatch on the URL without knowing
//! the concrete type up front.

use dtc_domain::msg::Msg;
use serde::{Deserialize, Serialize};

/// A type-erased encoded message: the wire form the registry dispatches on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMsg {
    pub type_url: String,
    pub value: Vec<u8>,
}

/// Encode/decode failures.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("failed to encode `{type_url}`: {source}")]
    Encode { type_url: &'static str, source: postcard::Error },

    #[error("failed to decode `{type_url}`: {source}")]
    Decode { type_url: String, source: postcard::Error },

    #[error("type url mismatch: expected `{expected}`, got `{actual}`")]
    TypeUrlMismatch { expected: &'static str, actual: String },
}

/// Encodes `msg` into a [`RawMsg`] envelope.
///
/// # Errors
/// Returns [`CodecError::Encode`] if serialization fails.
pub fn encode<M: Msg>(msg: &M) -> Result<RawMsg, CodecError> {
    let value = postcard::to_stdvec(msg)
        .map_err(|source| CodecError::Encode { type_url: M::TYPE_URL, source })?;
    Ok(RawMsg { type_url: M::TYPE_URL.to_owned(), value })
}

/// Decodes a [`RawMsg`] into the concrete message type `M`.
///
/// # Errors
/// Returns [`CodecError::TypeUrlMismatch`] when the envelope names a
/// different schema, or [`CodecError::Decode`] when the bytes are corrupt.
pub fn decode<M: Msg>(raw: &RawMsg) -> Result<M, CodecError> {
    if raw.type_url != M::TYPE_URL {
        return Err(CodecError::TypeUrlMismatch {
            expected: M::TYPE_URL,
            actual: raw.type_url.clone(),
        });
    }
    postcard::from_bytes(&raw.value)
        .map_err(|source| CodecError::Decode { type_url: raw.type_url.clone(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[dtc_derive::msg(package = "dtc.test.v1")]
    struct MsgEcho {
        creator: String,
    }

    #[test]
    fn envelope_round_trip() {
        let msg = MsgEcho { creator: "dtc1qqqqqqqq".to_owned() };
        let raw = encode(&msg).unwrap();
        assert_eq!(raw.type_url, "/dtc.test.v1.MsgEcho");
        let back: MsgEcho = decode(&raw).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn mismatched_url_is_rejected() {
        let msg = MsgEcho { creator: "dtc1qqqqqqqq".to_owned() };
        let mut raw = encode(&msg).unwrap();
        raw.type_url = "/dtc.test.v1.MsgOther".to_owned();
        let err = decode::<MsgEcho>(&raw).unwrap_err();
        assert!(matches!(err, CodecError::TypeUrlMismatch { .. }));
    }
}
