//! Financial year management.

pub mod year;

pub use year::{FinancialYear, resolve_default};
