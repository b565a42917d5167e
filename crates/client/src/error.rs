//! Client error types.

use brokerbook_shared::AppError;

/// Errors from backend calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        /// Method and path of the call.
        endpoint: String,
        /// Underlying transport error.
        source: reqwest::Error,
    },
    /// Backend returned a non-2xx status.
    #[error("{endpoint} returned {status}: {body}")]
    Api {
        /// Method and path of the call.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body, for the user-facing message.
        body: String,
    },
    /// Response body is not the expected JSON.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        /// Method and path of the call.
        endpoint: String,
        /// JSON error.
        source: serde_json::Error,
    },
    /// Response parsed but violates the schema.
    #[error("invalid payload from {endpoint}: {source}")]
    InvalidPayload {
        /// Method and path of the call.
        endpoint: String,
        /// Schema violation.
        source: crate::wire::WireError,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status returned by the backend, if the call got that far.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err.status() {
            Some(401 | 403) => Self::Unauthorized(err.to_string()),
            Some(404) => Self::NotFound(err.to_string()),
            Some(400 | 422) => Self::Validation(err.to_string()),
            _ => match err {
                ClientError::Config(msg) => Self::Internal(msg),
                other => Self::ExternalService(other.to_string()),
            },
        }
    }
}
