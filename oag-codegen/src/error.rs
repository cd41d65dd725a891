use miette::Diagnostic;
use thiserror::Error;

use crate::options::OptionKind;

/// Result type for configuration resolution and validation.
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors surfaced to the user.
///
/// Both variants are fatal to the run: either a complete, valid artifact
/// plan is produced or none is.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// A supplied option value cannot be coerced to its declared kind.
    #[error("invalid value for option '{option}': expected a {expected} value, got {found}")]
    #[diagnostic(
        code(oag::option_type),
        help("booleans accept true/false, strings accept quoted text")
    )]
    OptionType {
        option: String,
        expected: OptionKind,
        found: String,
    },

    /// A cross-option invariant is violated.
    #[error("{message}")]
    #[diagnostic(code(oag::option_constraint), help("{hint}"))]
    OptionConstraint { message: String, hint: String },
}

impl Error {
    /// Create a type error for an option that received an ill-typed value.
    pub fn option_type(
        option: impl Into<String>,
        expected: OptionKind,
        found: impl Into<String>,
    ) -> Self {
        Error::OptionType {
            option: option.into(),
            expected,
            found: found.into(),
        }
    }

    /// Create a constraint error with a remediation hint.
    pub fn constraint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Error::OptionConstraint {
            message: message.into(),
            hint: hint.into(),
        }
    }
}
