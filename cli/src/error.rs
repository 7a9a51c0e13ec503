//! CLI error types

use thiserror::Error;

/// CLI-specific error types
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Check failed: {0}")]
    CheckFailed(#[from] altair_core::CoreError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CliError {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            CliError::InvalidArgument(_) => "CLI001",
            CliError::InputError(_) => "CLI002",
            CliError::CheckFailed(_) => "CLI003",
            CliError::IoError(_) => "CLI004",
        }
    }
}

/// CLI-specific result type
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(CliError::InvalidArgument("x".to_string()).code(), "CLI001");
        assert_eq!(CliError::InputError("x".to_string()).code(), "CLI002");
    }

    #[test]
    fn core_errors_wrap_into_check_failed() {
        let err: CliError = altair_core::CoreError::ProbeFault("gone".to_string()).into();
        assert!(err.to_string().contains("Probe fault: gone"));
    }
}
