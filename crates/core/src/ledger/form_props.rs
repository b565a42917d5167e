//! Property-based tests for the transaction form reducers.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::form::TransactionForm;
use super::numeric::to_number;
use super::record::RecordField;

fn quantity_text() -> impl Strategy<Value = String> {
    (0i64..100_000i64).prop_map(|cents| Decimal::new(cents, 2).to_string())
}

/// Strategy to generate a form with 1 to 8 rows of quantities.
fn form_strategy() -> impl Strategy<Value = TransactionForm> {
    prop::collection::vec(quantity_text(), 1..8).prop_map(|quantities| {
        quantities
            .into_iter()
            .enumerate()
            .fold(TransactionForm::new(), |form, (index, quantity)| {
                let form = if index == 0 { form } else { form.add_row() };
                form.update_row(index, RecordField::Quantity, quantity)
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* single-row form and any index, removal leaves the form unchanged.
    #[test]
    fn prop_single_row_never_removed(quantity in quantity_text(), index in 0usize..4) {
        let form = TransactionForm::new().update_row(0, RecordField::Quantity, quantity);
        prop_assert_eq!(form.clone().remove_row(index), form);
    }

    /// *For any* form, adding a row and removing the last row restores it.
    #[test]
    fn prop_add_then_remove_last_restores(form in form_strategy()) {
        let grown = form.clone().add_row();
        let last = grown.len() - 1;
        prop_assert_eq!(grown.remove_row(last), form);
    }

    /// *For any* row and new quantity, total bags moves by exactly the change.
    #[test]
    fn prop_update_changes_bags_by_delta(
        (form, index) in form_strategy().prop_flat_map(|form| {
            let len = form.len();
            (Just(form), 0..len)
        }),
        new_quantity in quantity_text(),
    ) {
        let old_quantity = to_number(&form.records()[index].quantity);
        let before = form.total_bags();
        let after = form
            .update_row(index, RecordField::Quantity, new_quantity.clone())
            .total_bags();
        prop_assert_eq!(after - before, to_number(&new_quantity) - old_quantity);
    }

    /// *For any* form, removing a row never drops below one row.
    #[test]
    fn prop_remove_keeps_at_least_one_row(form in form_strategy(), index in 0usize..10) {
        let len = form.len();
        let after = form.remove_row(index);
        prop_assert!(!after.is_empty());
        if len > 1 && index < len {
            prop_assert_eq!(after.len(), len - 1);
        } else {
            prop_assert_eq!(after.len(), len);
        }
    }
}
