//! Error types for URN parsing and the storage/JSON boundaries

use thiserror::Error;

/// The input is not an RFC 2141 URN.
///
/// Raised both for grammar mismatches and for the reserved `urn` namespace
/// identifier. The two causes are deliberately not told apart.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("invalid URN")]
pub struct InvalidUrn;

/// Errors raised while reading a URN out of a storage column
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    /// The column held text that is not a valid URN
    #[error("failed to scan URN: {0}")]
    Invalid(#[from] InvalidUrn),

    /// The column held something other than text (or NULL where a value was required)
    #[error("unexpected column value of kind {0}")]
    UnexpectedKind(&'static str),
}

impl ScanError {
    /// Whether the underlying cause is [`InvalidUrn`]
    pub fn is_invalid_urn(&self) -> bool {
        matches!(self, ScanError::Invalid(_))
    }
}

/// Errors raised while decoding a URN from JSON
#[derive(Error, Debug)]
pub enum JsonError {
    /// Malformed JSON, or a JSON value that is not a string
    #[error("failed to decode URN from JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// A JSON string that fails the URN grammar
    #[error("failed to decode URN from JSON: {0}")]
    Invalid(#[from] InvalidUrn),
}

impl JsonError {
    /// Whether the underlying cause is [`InvalidUrn`]
    pub fn is_invalid_urn(&self) -> bool {
        matches!(self, JsonError::Invalid(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_urn_display() {
        assert_eq!(InvalidUrn.to_string(), "invalid URN");
    }

    #[test]
    fn test_scan_error_keeps_cause() {
        let err = ScanError::from(InvalidUrn);
        assert_eq!(err.to_string(), "failed to scan URN: invalid URN");
        assert!(err.is_invalid_urn());

        let source = err.source().expect("scan error should carry a source");
        assert_eq!(source.downcast_ref::<InvalidUrn>(), Some(&InvalidUrn));
    }

    #[test]
    fn test_unexpected_kind_has_no_urn_cause() {
        let err = ScanError::UnexpectedKind("integer");
        assert_eq!(err.to_string(), "unexpected column value of kind integer");
        assert!(!err.is_invalid_urn());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_json_error_distinguishes_causes() {
        let decode = serde_json::from_str::<String>("{").unwrap_err();
        let err = JsonError::from(decode);
        assert!(!err.is_invalid_urn());
        assert!(err.source().is_some_and(|s| s.is::<serde_json::Error>()));

        let err = JsonError::from(InvalidUrn);
        assert!(err.is_invalid_urn());
        assert!(err.source().is_some_and(|s| s.is::<InvalidUrn>()));
    }
}
