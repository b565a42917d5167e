//! Broker transaction ledger.
//!
//! This module implements the seller transaction entry logic:
//! - Ledger records (one buyer line item each)
//! - The transaction form and its pure reducers
//! - Brokerage aggregation (bags, buyer side, seller side, grand total)
//! - Submission validation and the ledger service payload

pub mod aggregator;
pub mod error;
pub mod form;
pub mod numeric;
pub mod record;
pub mod submission;
pub mod types;

#[cfg(test)]
mod aggregator_props;
#[cfg(test)]
mod form_props;

pub use aggregator::LedgerAggregator;
pub use error::LedgerError;
pub use form::{FormAction, TransactionForm};
pub use numeric::{parse_decimal, to_number};
pub use record::{LedgerRecord, RecordField};
pub use submission::{MissingItem, SubmissionError, TransactionDraft, TransactionPayload};
pub use types::LedgerTotals;
