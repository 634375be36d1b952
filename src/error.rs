//! Error types for the shotwright CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Prompt composition itself never fails; errors only arise at the encoder
//! boundary and at the CLI surface (bad files, unknown lookup names).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for shotwright operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum ShotwrightError {
    /// The conditioning-model handle required for encoding was absent.
    ///
    /// Retrying without fixing the caller's wiring cannot succeed, so this
    /// is surfaced immediately, before any prompt is composed.
    #[error("encoder handle is invalid (none); connect a valid conditioning model")]
    MissingEncoder,

    /// User provided invalid arguments, an unreadable shot file, or an
    /// unknown name to a lookup command.
    #[error("{0}")]
    UserError(String),
}

impl ShotwrightError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShotwrightError::MissingEncoder => exit_codes::ENCODER_FAILURE,
            ShotwrightError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for shotwright operations.
pub type Result<T> = std::result::Result<T, ShotwrightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_encoder_has_encoder_exit_code() {
        let err = ShotwrightError::MissingEncoder;
        assert_eq!(err.exit_code(), exit_codes::ENCODER_FAILURE);
    }

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = ShotwrightError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = ShotwrightError::MissingEncoder;
        assert!(err.to_string().contains("encoder handle is invalid"));

        let err = ShotwrightError::UserError("unknown category 'mood'".to_string());
        assert_eq!(err.to_string(), "unknown category 'mood'");
    }
}
