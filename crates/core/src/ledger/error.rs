//! Ledger error types.

use thiserror::Error;
use brokerbook_shared::AppError;

use super::submission::SubmissionError;

/// Errors that can occur while preparing a transaction for the ledger service.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Required fields are blank.
    #[error(transparent)]
    Incomplete(#[from] SubmissionError),

    /// An update was requested for a draft that was never saved.
    #[error("Transaction has no number; create it before updating")]
    MissingTransactionNumber,
}

impl LedgerError {
    /// Returns the error code for log lines and machine-readable output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Incomplete(_) => "INCOMPLETE_TRANSACTION",
            Self::MissingTransactionNumber => "MISSING_TRANSACTION_NUMBER",
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        Self::Validation(err.to_string())
    }
}
