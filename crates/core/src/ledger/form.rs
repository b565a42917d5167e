//! Transaction form aggregate and its reducers.
//!
//! The form is a plain value. Every edit goes through a reducer that consumes
//! the current form and returns the next one, so the caller owns exactly one
//! state container.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregator::LedgerAggregator;
use super::record::{LedgerRecord, RecordField};
use super::types::LedgerTotals;
use crate::directory::MerchantEntry;

/// An edit applied to a [`TransactionForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Append a blank row.
    AddRow,
    /// Remove the row at the index, unless it is the last remaining row.
    RemoveRow(usize),
    /// Replace one field of one row.
    UpdateRow {
        /// Row index.
        index: usize,
        /// Field to replace.
        field: RecordField,
        /// New raw text.
        value: String,
    },
    /// Replace the seller's per-bag brokerage text.
    SetSellerBrokerage(String),
    /// Fill a row's buyer from a directory entry.
    SelectBuyer {
        /// Row index.
        index: usize,
        /// Selected buyer.
        entry: MerchantEntry,
    },
    /// Apply a selected seller's brokerage hint.
    SelectSeller(MerchantEntry),
}

/// The rows being entered for one seller transaction.
///
/// Always holds at least one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawForm")]
pub struct TransactionForm {
    seller_brokerage_per_bag: String,
    records: Vec<LedgerRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawForm {
    #[serde(default)]
    seller_brokerage_per_bag: String,
    #[serde(default)]
    records: Vec<LedgerRecord>,
}

impl From<RawForm> for TransactionForm {
    fn from(raw: RawForm) -> Self {
        Self::from_records(raw.seller_brokerage_per_bag, raw.records)
    }
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionForm {
    /// Creates a form for a new transaction: one blank row, no seller rate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seller_brokerage_per_bag: String::new(),
            records: vec![LedgerRecord::default()],
        }
    }

    /// Creates a form from existing rows, e.g. a transaction being edited.
    ///
    /// An empty row list gets one blank row.
    #[must_use]
    pub fn from_records(seller_brokerage_per_bag: impl Into<String>, records: Vec<LedgerRecord>) -> Self {
        let mut records = records;
        if records.is_empty() {
            records.push(LedgerRecord::default());
        }
        Self {
            seller_brokerage_per_bag: seller_brokerage_per_bag.into(),
            records,
        }
    }

    /// Seller's per-bag brokerage, as typed.
    #[must_use]
    pub fn seller_brokerage_per_bag(&self) -> &str {
        &self.seller_brokerage_per_bag
    }

    /// Rows in display order.
    #[must_use]
    pub fn records(&self) -> &[LedgerRecord] {
        &self.records
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; a form keeps at least one row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Applies one edit and returns the resulting form.
    #[must_use]
    pub fn apply(self, action: FormAction) -> Self {
        match action {
            FormAction::AddRow => self.add_row(),
            FormAction::RemoveRow(index) => self.remove_row(index),
            FormAction::UpdateRow { index, field, value } => self.update_row(index, field, value),
            FormAction::SetSellerBrokerage(value) => self.set_seller_brokerage(value),
            FormAction::SelectBuyer { index, entry } => self.select_buyer(index, &entry),
            FormAction::SelectSeller(entry) => self.select_seller(&entry),
        }
    }

    /// Appends a blank row.
    #[must_use]
    pub fn add_row(mut self) -> Self {
        self.records.push(LedgerRecord::default());
        self
    }

    /// Removes the row at `index`.
    ///
    /// A transaction keeps at least one row: removing the only row, or an
    /// index past the end, returns the form unchanged.
    #[must_use]
    pub fn remove_row(mut self, index: usize) -> Self {
        if self.records.len() > 1 && index < self.records.len() {
            self.records.remove(index);
        }
        self
    }

    /// Replaces one field of the row at `index`. Out-of-range indexes are ignored.
    ///
    /// The value is stored as typed; numeric fields are not checked here.
    #[must_use]
    pub fn update_row(mut self, index: usize, field: RecordField, value: impl Into<String>) -> Self {
        if let Some(record) = self.records.get_mut(index) {
            record.set(field, value);
        }
        self
    }

    /// Replaces the seller's per-bag brokerage.
    #[must_use]
    pub fn set_seller_brokerage(mut self, value: impl Into<String>) -> Self {
        self.seller_brokerage_per_bag = value.into();
        self
    }

    /// Fills the row's buyer name and city from a directory entry.
    ///
    /// The entry's brokerage hint is copied only into a blank brokerage field.
    #[must_use]
    pub fn select_buyer(mut self, index: usize, entry: &MerchantEntry) -> Self {
        if let Some(record) = self.records.get_mut(index) {
            record.buyer_name.clone_from(&entry.firm_name);
            record.buyer_city = entry.city.clone().unwrap_or_default();
            if let Some(rate) = entry.brokerage_rate
                && record.is_blank(RecordField::Brokerage)
            {
                record.brokerage = rate.to_string();
            }
        }
        self
    }

    /// Applies a selected seller's brokerage hint to a blank seller rate.
    #[must_use]
    pub fn select_seller(mut self, entry: &MerchantEntry) -> Self {
        if let Some(rate) = entry.brokerage_rate
            && self.seller_brokerage_per_bag.trim().is_empty()
        {
            self.seller_brokerage_per_bag = rate.to_string();
        }
        self
    }

    /// Buyer brokerage of the row at `index`, or `None` past the end.
    #[must_use]
    pub fn row_total(&self, index: usize) -> Option<Decimal> {
        self.records.get(index).map(LedgerAggregator::row_total)
    }

    /// Sum of bag quantities.
    #[must_use]
    pub fn total_bags(&self) -> Decimal {
        LedgerAggregator::total_bags(&self.records)
    }

    /// Sum of per-row buyer brokerage.
    #[must_use]
    pub fn total_buyer_brokerage(&self) -> Decimal {
        LedgerAggregator::total_buyer_brokerage(&self.records)
    }

    /// Seller rate times total bags.
    #[must_use]
    pub fn total_seller_brokerage(&self) -> Decimal {
        LedgerAggregator::total_seller_brokerage(&self.seller_brokerage_per_bag, &self.records)
    }

    /// Seller plus buyer brokerage.
    #[must_use]
    pub fn total_brokerage(&self) -> Decimal {
        LedgerAggregator::total_brokerage(&self.seller_brokerage_per_bag, &self.records)
    }

    /// Every total at once.
    #[must_use]
    pub fn totals(&self) -> LedgerTotals {
        LedgerAggregator::totals(&self.seller_brokerage_per_bag, &self.records)
    }
}
