//! Plain-text rendering of forms, totals, financial years and directory entries.

use std::fmt::{Display, Write as _};

use brokerbook_core::directory::DirectoryEntry;
use brokerbook_core::fiscal::FinancialYear;
use brokerbook_core::ledger::{LedgerTotals, TransactionDraft};

/// Renders each row with its total, then the form totals.
pub fn draft(draft: &TransactionDraft) -> String {
    let mut out = String::new();
    if let Some(number) = &draft.transaction_number {
        let _ = writeln!(out, "Transaction {number}");
    }
    if let Some(date) = draft.date {
        let _ = writeln!(out, "Date        {date}");
    }
    if let Some(seller) = &draft.seller_id {
        let _ = writeln!(out, "Seller      {seller}");
    }

    let form = &draft.form;
    let _ = writeln!(
        out,
        "{:>3}  {:<24} {:<12} {:>8} {:>10} {:>10} {:>12}",
        "#", "Buyer", "Product", "Bags", "Brokerage", "Rate", "Row total"
    );
    for (index, record) in form.records().iter().enumerate() {
        let row_total = form.row_total(index).unwrap_or_default();
        let _ = writeln!(
            out,
            "{:>3}  {:<24} {:<12} {:>8} {:>10} {:>10} {:>12}",
            index + 1,
            record.buyer_name,
            record.product_id,
            record.quantity,
            record.brokerage,
            record.product_cost,
            row_total
        );
    }
    let _ = writeln!(out, "Seller brokerage per bag: {}", form.seller_brokerage_per_bag());
    out.push_str(&totals(&form.totals()));
    out
}

/// Renders the five totals, one per line.
pub fn totals(totals: &LedgerTotals) -> String {
    format!(
        "Total bags:             {}\n\
         Buyer brokerage:        {}\n\
         Seller brokerage:       {}\n\
         Total brokerage:        {}\n\
         Total value:            {}\n",
        totals.total_bags,
        totals.total_buyer_brokerage,
        totals.total_seller_brokerage,
        totals.total_brokerage,
        totals.total_value,
    )
}

/// Renders the year list, marking `default` with `*`.
pub fn years(years: &[FinancialYear], default: Option<&FinancialYear>) -> String {
    let mut out = String::new();
    for year in years {
        let marker = if default.is_some_and(|d| d.id == year.id) { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {:<12} {:<10} {} .. {}{}",
            year.id,
            year.name,
            year.start_date,
            year.end_date,
            if year.is_active { "  (active)" } else { "" }
        );
    }
    out
}

/// Renders directory entries: key, name, city and brokerage hint.
pub fn directory<I: Display>(entries: &[&DirectoryEntry<I>]) -> String {
    let mut out = String::new();
    for entry in entries {
        let rate = entry.brokerage_rate.map(|rate| rate.to_string()).unwrap_or_default();
        let _ = writeln!(
            out,
            "{:<12} {:<28} {:<16} {:>8}",
            entry.id,
            entry.firm_name,
            entry.city.as_deref().unwrap_or_default(),
            rate
        );
    }
    out
}
