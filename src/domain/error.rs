use std::io;

use thiserror::Error;

use super::validation::ValidationFailure;

/// Library-wide error type for tfverify operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Explicitly requested settings file does not exist.
    #[error("Settings file not found: {0}")]
    SettingsFileMissing(String),

    /// An external tool could not be executed or exited unsuccessfully.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },

    /// The caller's cloud account could not be determined.
    #[error("Account discovery failed: {0}")]
    AccountDiscovery(String),

    /// `terraform init`/`apply` did not complete.
    #[error("Apply failed: {0}")]
    ApplyFailed(String),

    /// `terraform destroy` did not complete.
    #[error("Destroy failed: {0}")]
    DestroyFailed(String),

    /// Module outputs did not meet expectations.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationFailure),

    /// Teardown failed after an earlier phase had already failed.
    #[error("{primary} (teardown also failed: {teardown})")]
    TeardownAfterFailure { primary: Box<AppError>, teardown: Box<AppError> },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Report could not be serialized.
    #[error("Internal error: {0}")]
    InternalError(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Combine a failure from an earlier phase with a teardown result.
    ///
    /// The earlier failure stays the primary cause.
    pub fn with_teardown(self, teardown: Result<(), AppError>) -> Self {
        match teardown {
            Ok(()) => self,
            Err(teardown) => {
                AppError::TeardownAfterFailure { primary: Box::new(self), teardown: Box::new(teardown) }
            }
        }
    }
}
