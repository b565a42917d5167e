//! Merchant and product directory entries.
//!
//! The directory service supplies the choices behind the seller, buyer and
//! product pickers. Entries are opaque keys plus display data and an optional
//! default brokerage hint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use brokerbook_shared::types::{MerchantId, ProductId};

/// One selectable directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry<I> {
    /// Backend key.
    pub id: I,
    /// Firm (display) name.
    pub firm_name: String,
    /// City, if the directory records one.
    pub city: Option<String>,
    /// Default brokerage per bag for this party, if any.
    pub brokerage_rate: Option<Decimal>,
}

/// A seller or buyer.
pub type MerchantEntry = DirectoryEntry<MerchantId>;

/// A product in the catalog.
pub type ProductEntry = DirectoryEntry<ProductId>;

impl<I> DirectoryEntry<I> {
    /// Returns true if `query` matches the firm name or city, ignoring case.
    ///
    /// An empty query matches everything.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.firm_name.to_lowercase().contains(&query)
            || self
                .city
                .as_deref()
                .is_some_and(|city| city.to_lowercase().contains(&query))
    }
}

/// Filters entries by a search query, preserving directory order.
#[must_use]
pub fn search<'a, I>(entries: &'a [DirectoryEntry<I>], query: &str) -> Vec<&'a DirectoryEntry<I>> {
    entries.iter().filter(|entry| entry.matches(query)).collect()
}
