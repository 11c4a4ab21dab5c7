//! Error types for symbol descriptor parsing.

use thiserror::Error;

/// Errors that can occur while converting a matched descriptor into a record.
///
/// A descriptor that simply does not match a grammar is not an error; the
/// parsers report that case as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// A captured numeric field could not be converted.
    #[error("invalid numeric literal `{literal}` in descriptor `{descriptor}`")]
    InvalidNumericLiteral {
        /// The offending substring.
        literal: String,
        /// The full descriptor it was captured from.
        descriptor: String,
    },

    /// A required capture group did not participate in the match.
    #[error("missing field {index} in descriptor `{descriptor}`")]
    MissingField {
        /// Capture group index.
        index: usize,
        /// The full descriptor.
        descriptor: String,
    },

    /// A hole plating token is not one of the known values.
    #[error("unknown hole plating `{0}`")]
    UnknownPlating(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ut_err_001_invalid_literal_message_names_literal_and_descriptor() {
        let err = SymbolError::InvalidNumericLiteral {
            literal: "1.2.3".to_string(),
            descriptor: "r1.2.3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid numeric literal `1.2.3` in descriptor `r1.2.3`"
        );
    }

    #[test]
    fn ut_err_002_unknown_plating_message() {
        let err = SymbolError::UnknownPlating("GOLD".to_string());
        assert_eq!(err.to_string(), "unknown hole plating `GOLD`");
    }
}
