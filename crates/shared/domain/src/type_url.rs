//! Parsing and validation of message type URLs.
//!
//! A type URL is the dispatch key of the registry:
//! `/<package>.<version>.<MessageName>`, e.g. `/dtc.credit.v1.MsgMintCredit`.

use serde::Serialize;
use std::fmt;

/// Reasons a string fails to parse as a type URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeUrlError {
    #[error("type url is empty")]
    Empty,
    #[error("type url must start with '/'")]
    MissingLeadingSlash,
    #[error("type url needs a package path and a message name")]
    MissingName,
    #[error("type url contains an empty segment")]
    EmptySegment,
    #[error("invalid character {found:?} in segment {segment:?}")]
    InvalidCharacter { segment: String, found: char },
}

/// Borrowed, validated view of a type URL.
///
/// Parsing splits the string once; accessors are cheap slices into the
/// original buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TypeUrl<'a> {
    full: &'a str,
}

impl<'a> TypeUrl<'a> {
    /// Validates `raw` against the `/<package-path>.<MessageName>` shape.
    ///
    /// Every dot-separated segment must be a non-empty ASCII identifier
    /// (letters, digits, `_`, not starting with a digit), and there must be
    /// at least one package segment before the message name.
    ///
    /// # Errors
    /// Returns a [`TypeUrlError`] describing the first violation found.
    pub fn parse(raw: &'a str) -> Result<Self, TypeUrlError> {
        if raw.is_empty() {
            return Err(TypeUrlError::Empty);
        }
        let Some(path) = raw.strip_prefix('/') else {
            return Err(TypeUrlError::MissingLeadingSlash);
        };
        if path.is_empty() {
            return Err(TypeUrlError::MissingName);
        }

        let mut segments = 0usize;
        for segment in path.split('.') {
            validate_segment(segment)?;
            segments += 1;
        }
        if segments < 2 {
            return Err(TypeUrlError::MissingName);
        }

        Ok(Self { full: raw })
    }

    /// The full URL, leading slash included.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.full
    }

    /// Dot-separated package path, e.g. `dtc.credit.v1`.
    #[must_use]
    pub fn package(&self) -> &'a str {
        let path = &self.full[1..];
        match path.rfind('.') {
            Some(dot) => &path[..dot],
            None => path,
        }
    }

    /// Message name, e.g. `MsgMintCredit`.
    #[must_use]
    pub fn name(&self) -> &'a str {
        let path = &self.full[1..];
        match path.rfind('.') {
            Some(dot) => &path[dot + 1..],
            None => path,
        }
    }

    /// Module segment of a `<namespace>.<module>.<version>` package, when
    /// the package has that conventional three-part shape.
    #[must_use]
    pub fn module(&self) -> Option<&'a str> {
        let mut parts = self.package().split('.');
        let _namespace = parts.next()?;
        parts.next()
    }

    /// Version segment (`v1`, `v1beta1`, ...) of the package, when present.
    #[must_use]
    pub fn version(&self) -> Option<&'a str> {
        self.package().split('.').nth(2)
    }
}

impl fmt::Display for TypeUrl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full)
    }
}

impl<'a> TryFrom<&'a str> for TypeUrl<'a> {
    type Error = TypeUrlError;

    fn try_from(raw: &'a str) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

fn validate_segment(segment: &str) -> Result<(), TypeUrlError> {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return Err(TypeUrlError::EmptySegment);
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(TypeUrlError::InvalidCharacter { segment: segment.to_owned(), found: first });
    }
    for c in chars {
        if !(c.is_ascii_alphanumeric() || c == '_') {
            return Err(TypeUrlError::InvalidCharacter { segment: segment.to_owned(), found: c });
        }
    }
    Ok(())
}

/// Builds the canonical type URL for a message, used by generated tables.
#[must_use]
pub fn compose(package: &str, name: &str) -> String {
    format!("/{package}.{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_url() {
        let url = TypeUrl::parse("/dtc.credit.v1.MsgMintCredit").unwrap();
        assert_eq!(url.package(), "dtc.credit.v1");
        assert_eq!(url.name(), "MsgMintCredit");
        assert_eq!(url.module(), Some("credit"));
        assert_eq!(url.version(), Some("v1"));
    }

    #[test]
    fn rejects_malformed_urls() {
        assert_eq!(TypeUrl::parse(""), Err(TypeUrlError::Empty));
        assert_eq!(TypeUrl::parse("dtc.credit.v1.Msg"), Err(TypeUrlError::MissingLeadingSlash));
        assert_eq!(TypeUrl::parse("/"), Err(TypeUrlError::MissingName));
        assert_eq!(TypeUrl::parse("/MsgAlone"), Err(TypeUrlError::MissingName));
        assert_eq!(TypeUrl::parse("/dtc..v1.Msg"), Err(TypeUrlError::EmptySegment));
        assert!(matches!(
            TypeUrl::parse("/dtc.credit.v1.Msg-Mint"),
            Err(TypeUrlError::InvalidCharacter { .. })
        ));
        assert!(matches!(
            TypeUrl::parse("/dtc.1credit.v1.Msg"),
            Err(TypeUrlError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn compose_round_trips() {
        let raw = compose("dtc.task.v1", "MsgClaimReward");
        let url = TypeUrl::parse(&raw).unwrap();
        assert_eq!(url.as_str(), "/dtc.task.v1.MsgClaimReward");
    }
}
