//! Property-based tests for brokerage aggregation.
//!
//! - Row totals follow parse-or-zero coercion
//! - Bag count is independent of row order
//! - Grand total is seller plus buyer brokerage

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::aggregator::LedgerAggregator;
use super::numeric::to_number;
use super::record::LedgerRecord;

/// Strategy to generate a well-formed amount as text (0.00 to 10,000.00).
fn amount_text() -> impl Strategy<Value = String> {
    (0i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2).to_string())
}

/// Strategy to generate text that is blank or not a number.
fn junk_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        Just("abc".to_string()),
        "[a-z]{1,6}",
    ]
}

/// Strategy to generate any field text a user might leave behind.
fn field_text() -> impl Strategy<Value = String> {
    prop_oneof![3 => amount_text(), 1 => junk_text()]
}

fn record_strategy() -> impl Strategy<Value = LedgerRecord> {
    (field_text(), field_text(), field_text()).prop_map(|(quantity, brokerage, product_cost)| {
        LedgerRecord {
            quantity,
            brokerage,
            product_cost,
            ..LedgerRecord::default()
        }
    })
}

fn records_strategy() -> impl Strategy<Value = Vec<LedgerRecord>> {
    prop::collection::vec(record_strategy(), 1..12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* record, the row total is quantity times brokerage after coercion.
    #[test]
    fn prop_row_total_is_coerced_product(record in record_strategy()) {
        prop_assert_eq!(
            LedgerAggregator::row_total(&record),
            to_number(&record.quantity) * to_number(&record.brokerage)
        );
    }

    /// *For any* blank or non-numeric quantity, the row contributes zero.
    #[test]
    fn prop_junk_quantity_zeroes_row(quantity in junk_text(), brokerage in amount_text()) {
        let record = LedgerRecord { quantity, brokerage, ..LedgerRecord::default() };
        prop_assert_eq!(LedgerAggregator::row_total(&record), Decimal::ZERO);
        prop_assert_eq!(LedgerAggregator::total_bags(&[record]), Decimal::ZERO);
    }

    /// *For any* blank or non-numeric brokerage, the row total is zero.
    #[test]
    fn prop_junk_brokerage_zeroes_row(quantity in amount_text(), brokerage in junk_text()) {
        let record = LedgerRecord { quantity, brokerage, ..LedgerRecord::default() };
        prop_assert_eq!(LedgerAggregator::row_total(&record), Decimal::ZERO);
    }

    /// *For any* rows, total bags is the plain sum of coerced quantities.
    #[test]
    fn prop_total_bags_is_sum(records in records_strategy()) {
        let expected: Decimal = records.iter().map(|r| to_number(&r.quantity)).sum();
        prop_assert_eq!(LedgerAggregator::total_bags(&records), expected);
    }

    /// *For any* permutation of the rows, every total is unchanged.
    #[test]
    fn prop_totals_ignore_row_order(
        (records, shuffled) in records_strategy()
            .prop_flat_map(|records| (Just(records.clone()), Just(records).prop_shuffle())),
        seller_rate in field_text(),
    ) {
        prop_assert_eq!(
            LedgerAggregator::totals(&seller_rate, &records),
            LedgerAggregator::totals(&seller_rate, &shuffled)
        );
    }

    /// *For any* rows and seller rate, grand total = seller side + buyer side.
    #[test]
    fn prop_grand_total_is_sum_of_sides(
        records in records_strategy(),
        seller_rate in field_text(),
    ) {
        let seller = LedgerAggregator::total_seller_brokerage(&seller_rate, &records);
        let buyer = LedgerAggregator::total_buyer_brokerage(&records);
        prop_assert_eq!(
            LedgerAggregator::total_brokerage(&seller_rate, &records),
            seller + buyer
        );
        prop_assert_eq!(seller, to_number(&seller_rate) * LedgerAggregator::total_bags(&records));
    }
}
