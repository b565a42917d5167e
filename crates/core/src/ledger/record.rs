//! Ledger record: one buyer line item within a seller transaction.

use serde::{Deserialize, Serialize};

/// A single buyer line item.
///
/// Fields hold the raw text entered by the user. Nothing is parsed on edit;
/// numeric fields are coerced with [`to_number`](super::to_number) when totals
/// are computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LedgerRecord {
    /// Buyer firm name.
    pub buyer_name: String,
    /// Buyer city. Informational only.
    pub buyer_city: String,
    /// Opaque product catalog key.
    pub product_id: String,
    /// Number of bags.
    pub quantity: String,
    /// Brokerage per bag charged to this buyer.
    pub brokerage: String,
    /// Rate per bag.
    pub product_cost: String,
}

/// Editable field of a [`LedgerRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordField {
    /// Buyer firm name.
    BuyerName,
    /// Buyer city.
    BuyerCity,
    /// Product catalog key.
    ProductId,
    /// Number of bags.
    Quantity,
    /// Brokerage per bag.
    Brokerage,
    /// Rate per bag.
    ProductCost,
}

impl RecordField {
    /// Fields that must be non-blank before a transaction is submitted.
    pub const REQUIRED: [Self; 4] = [
        Self::BuyerName,
        Self::ProductId,
        Self::Quantity,
        Self::ProductCost,
    ];

    /// Human-readable label used in validation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BuyerName => "buyer name",
            Self::BuyerCity => "buyer city",
            Self::ProductId => "product",
            Self::Quantity => "quantity",
            Self::Brokerage => "brokerage",
            Self::ProductCost => "rate",
        }
    }
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl LedgerRecord {
    /// Returns the raw text of a field.
    #[must_use]
    pub fn get(&self, field: RecordField) -> &str {
        match field {
            RecordField::BuyerName => &self.buyer_name,
            RecordField::BuyerCity => &self.buyer_city,
            RecordField::ProductId => &self.product_id,
            RecordField::Quantity => &self.quantity,
            RecordField::Brokerage => &self.brokerage,
            RecordField::ProductCost => &self.product_cost,
        }
    }

    /// Replaces the raw text of a field.
    pub fn set(&mut self, field: RecordField, value: impl Into<String>) {
        let slot = match field {
            RecordField::BuyerName => &mut self.buyer_name,
            RecordField::BuyerCity => &mut self.buyer_city,
            RecordField::ProductId => &mut self.product_id,
            RecordField::Quantity => &mut self.quantity,
            RecordField::Brokerage => &mut self.brokerage,
            RecordField::ProductCost => &mut self.product_cost,
        };
        *slot = value.into();
    }

    /// Returns true if the field is empty after trimming.
    #[must_use]
    pub fn is_blank(&self, field: RecordField) -> bool {
        self.get(field).trim().is_empty()
    }

    /// Required fields that are still blank, in display order.
    pub fn missing_required(&self) -> impl Iterator<Item = RecordField> + '_ {
        RecordField::REQUIRED
            .into_iter()
            .filter(|field| self.is_blank(*field))
    }
}
