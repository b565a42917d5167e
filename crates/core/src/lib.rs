//! Core business logic for Brokerbook.
//!
//! This crate contains pure business logic with ZERO web or I/O dependencies.
//! Domain types, reducers, totals and submission rules live here.
//!
//! # Modules
//!
//! - `ledger` - Transaction form, row reducers and brokerage aggregation
//! - `directory` - Merchant and product directory entries
//! - `fiscal` - Financial years and default-year resolution

pub mod directory;
pub mod fiscal;
pub mod ledger;
