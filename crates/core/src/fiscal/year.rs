//! Financial year types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use brokerbook_shared::types::FinancialYearId;

/// Financial year definition.
///
/// Ledgers and transaction numbering are partitioned by financial year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialYear {
    /// Unique identifier.
    pub id: FinancialYearId,
    /// Year label (e.g., "2025-26").
    pub name: String,
    /// First day of the year.
    pub start_date: NaiveDate,
    /// Last day of the year (inclusive).
    pub end_date: NaiveDate,
    /// Whether the backend marks this as the current year.
    pub is_active: bool,
}

impl FinancialYear {
    /// Returns true if the given date falls within this year.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Picks the financial year a new or fetched transaction should use.
///
/// Resolution order:
/// 1. the year the backend flags as active,
/// 2. the year containing `today`,
/// 3. the most recent year by start date.
///
/// Returns `None` only for an empty list.
#[must_use]
pub fn resolve_default(years: &[FinancialYear], today: NaiveDate) -> Option<&FinancialYear> {
    years
        .iter()
        .find(|year| year.is_active)
        .or_else(|| years.iter().find(|year| year.contains_date(today)))
        .or_else(|| years.iter().max_by_key(|year| year.start_date))
}
