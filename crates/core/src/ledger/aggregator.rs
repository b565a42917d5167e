//! Brokerage aggregation over ledger records.
//!
//! Every figure is recomputed from the current rows on each call. Inputs are
//! bounded by the number of rows a user can type, so nothing is cached.

use rust_decimal::Decimal;

use super::numeric::to_number;
use super::record::LedgerRecord;
use super::types::LedgerTotals;

/// Aggregation rules for a seller transaction.
///
/// Pure functions over a slice of records and the seller's per-bag rate.
/// Arithmetic saturates instead of overflowing, so no input can panic.
pub struct LedgerAggregator;

impl LedgerAggregator {
    /// Buyer brokerage for one row: quantity times per-bag brokerage.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use brokerbook_core::ledger::{LedgerAggregator, LedgerRecord};
    ///
    /// let row = LedgerRecord {
    ///     quantity: "20".into(),
    ///     brokerage: "2.5".into(),
    ///     ..LedgerRecord::default()
    /// };
    /// assert_eq!(LedgerAggregator::row_total(&row), dec!(50));
    /// ```
    #[must_use]
    pub fn row_total(record: &LedgerRecord) -> Decimal {
        to_number(&record.quantity).saturating_mul(to_number(&record.brokerage))
    }

    /// Trade value for one row: quantity times rate per bag.
    #[must_use]
    pub fn row_value(record: &LedgerRecord) -> Decimal {
        to_number(&record.quantity).saturating_mul(to_number(&record.product_cost))
    }

    /// Sum of bag quantities.
    #[must_use]
    pub fn total_bags(records: &[LedgerRecord]) -> Decimal {
        sum(records.iter().map(|record| to_number(&record.quantity)))
    }

    /// Sum of per-row buyer brokerage.
    #[must_use]
    pub fn total_buyer_brokerage(records: &[LedgerRecord]) -> Decimal {
        sum(records.iter().map(Self::row_total))
    }

    /// Seller brokerage: per-bag seller rate times total bags.
    #[must_use]
    pub fn total_seller_brokerage(seller_rate: &str, records: &[LedgerRecord]) -> Decimal {
        to_number(seller_rate).saturating_mul(Self::total_bags(records))
    }

    /// Seller brokerage plus buyer brokerage.
    #[must_use]
    pub fn total_brokerage(seller_rate: &str, records: &[LedgerRecord]) -> Decimal {
        Self::total_seller_brokerage(seller_rate, records)
            .saturating_add(Self::total_buyer_brokerage(records))
    }

    /// Sum of per-row trade value.
    #[must_use]
    pub fn total_value(records: &[LedgerRecord]) -> Decimal {
        sum(records.iter().map(Self::row_value))
    }

    /// All figures at once.
    #[must_use]
    pub fn totals(seller_rate: &str, records: &[LedgerRecord]) -> LedgerTotals {
        LedgerTotals::new(
            Self::total_bags(records),
            Self::total_buyer_brokerage(records),
            Self::total_seller_brokerage(seller_rate, records),
            Self::total_value(records),
        )
    }
}

fn sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}
