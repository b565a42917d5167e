//! Application-wide error types.

use thiserror::Error;

/// Application error types.
///
/// Crate-specific errors (ledger, client) convert into this type at the
/// binary edge so that every failure maps onto one error code and exit code.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend rejected the credentials.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input is incomplete or malformed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backend or network failure.
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Local I/O or encoding failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the error code for log lines and machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the process exit code for this error.
    ///
    /// Values follow the BSD `sysexits.h` convention.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 65,
            Self::NotFound(_) => 66,
            Self::ExternalService(_) => 69,
            Self::Internal(_) => 70,
            Self::Unauthorized(_) => 77,
            Self::Config(_) => 78,
        }
    }

    /// Returns true if the user can recover by editing input and retrying.
    #[must_use]
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotFound(_))
    }
}
