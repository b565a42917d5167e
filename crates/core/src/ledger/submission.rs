//! Submission rules for a transaction draft.
//!
//! Validation runs once, at save time, over the whole draft. Every missing item
//! is collected into one error so the user sees a single combined message and
//! nothing is submitted partially.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use brokerbook_shared::types::{MerchantId, TransactionNumber};

use super::form::TransactionForm;
use super::record::{LedgerRecord, RecordField};

/// A required item that is still blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingItem {
    /// No seller selected.
    Seller,
    /// No transaction date.
    Date,
    /// A required row field is blank.
    Field {
        /// 1-based row number as displayed.
        row: usize,
        /// The blank field.
        field: RecordField,
    },
}

impl std::fmt::Display for MissingItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Seller => f.write_str("seller"),
            Self::Date => f.write_str("date"),
            Self::Field { row, field } => write!(f, "row {row} {field}"),
        }
    }
}

/// The draft is incomplete and cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all required fields: {}", join(.missing))]
pub struct SubmissionError {
    /// Every blank required item, in form order.
    pub missing: Vec<MissingItem>,
}

fn join(items: &[MissingItem]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Header fields plus the rows being entered for one seller transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    /// Set when editing an existing transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_number: Option<TransactionNumber>,
    /// Trade date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Selected seller.
    #[serde(default)]
    pub seller_id: Option<MerchantId>,
    /// Seller rate and buyer rows.
    #[serde(flatten)]
    pub form: TransactionForm,
}

/// Body sent to the ledger service on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayload {
    /// Trade date.
    pub date: NaiveDate,
    /// Seller key.
    pub from_seller: MerchantId,
    /// Total brokerage, seller plus buyer side.
    pub brokerage: Decimal,
    /// Rows, passed through as entered.
    pub records: Vec<LedgerRecord>,
}

impl TransactionDraft {
    /// Creates a blank draft for a new transaction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that the draft can be submitted.
    ///
    /// # Errors
    ///
    /// Returns every blank required item: seller, date, and the buyer name,
    /// product, quantity and rate of each row.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        self.checked_header().map(|_| ())
    }

    fn checked_header(&self) -> Result<(NaiveDate, &MerchantId), SubmissionError> {
        let mut missing = Vec::new();

        if self.seller_id.is_none() {
            missing.push(MissingItem::Seller);
        }
        if self.date.is_none() {
            missing.push(MissingItem::Date);
        }
        for (index, record) in self.form.records().iter().enumerate() {
            missing.extend(
                record
                    .missing_required()
                    .map(|field| MissingItem::Field { row: index + 1, field }),
            );
        }

        match (self.date, &self.seller_id) {
            (Some(date), Some(seller)) if missing.is_empty() => Ok((date, seller)),
            _ => Err(SubmissionError { missing }),
        }
    }

    /// Validates the draft and builds the body for the ledger service.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError`] if any required item is blank.
    pub fn to_payload(&self) -> Result<TransactionPayload, SubmissionError> {
        let (date, seller) = self.checked_header()?;

        Ok(TransactionPayload {
            date,
            from_seller: seller.clone(),
            brokerage: self.form.total_brokerage(),
            records: self.form.records().to_vec(),
        })
    }
}
