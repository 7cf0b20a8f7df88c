//! Error types for NBN URN parsing and validation.
//!
//! These errors are framework-agnostic and represent validation-level failures.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrnError {
    /// Input is not a well-formed NBN URN
    Syntax(String),
    /// Well-formed NBN URN, but the country code is not "de"
    Namespace(String),
    /// Trailing check digit does not match the computed value
    CheckDigit { expected: char, actual: char },
    /// Check digit computation hit a character outside the supported alphabet
    Internal(String),
}

impl fmt::Display for UrnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrnError::Syntax(msg) => write!(f, "URN syntax error: {}", msg),
            UrnError::Namespace(code) => {
                write!(f, "Invalid country code '{}' in URN; expected 'de'", code)
            }
            UrnError::CheckDigit { expected, actual } => {
                write!(
                    f,
                    "Check digit is invalid. Expected '{}' but got '{}'",
                    expected, actual
                )
            }
            UrnError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for UrnError {}
