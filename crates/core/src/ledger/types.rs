//! Derived ledger figures.

use rust_decimal::Decimal;
use serde::Serialize;

/// Snapshot of every total shown under the transaction form.
///
/// Never stored. Rebuild it from the form whenever the form changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerTotals {
    /// Sum of bag quantities over all rows.
    pub total_bags: Decimal,
    /// Sum of per-row buyer brokerage.
    pub total_buyer_brokerage: Decimal,
    /// Seller rate times total bags.
    pub total_seller_brokerage: Decimal,
    /// Seller plus buyer brokerage.
    pub total_brokerage: Decimal,
    /// Sum of quantity times rate over all rows.
    pub total_value: Decimal,
}

impl LedgerTotals {
    /// Creates totals from the independent figures, deriving the grand total.
    #[must_use]
    pub fn new(
        total_bags: Decimal,
        total_buyer_brokerage: Decimal,
        total_seller_brokerage: Decimal,
        total_value: Decimal,
    ) -> Self {
        Self {
            total_bags,
            total_buyer_brokerage,
            total_seller_brokerage,
            total_brokerage: total_seller_brokerage.saturating_add(total_buyer_brokerage),
            total_value,
        }
    }

    /// Totals for a form with nothing filled in.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    }
}
