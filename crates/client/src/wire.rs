//! Wire schemas for backend payloads.
//!
//! The backend is loose about shapes: lists may come bare or wrapped in
//! `{"data": ...}`, numbers may arrive as JSON numbers or strings, and most
//! fields are optional. Each schema here spells out which fields may be absent,
//! is checked with `validator`, and then maps into a domain type.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use brokerbook_core::directory::DirectoryEntry;
use brokerbook_core::fiscal::FinancialYear;
use brokerbook_core::ledger::{LedgerRecord, TransactionDraft, TransactionForm, parse_decimal};
use brokerbook_shared::types::{BlankIdError, FinancialYearId, MerchantId, TransactionNumber};

/// A backend payload that does not fit its schema.
#[derive(Debug, Error)]
pub enum WireError {
    /// Field-level validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// An identifier field was blank.
    #[error("{0} must not be blank")]
    BlankId(&'static str),
    /// A date field is not `YYYY-MM-DD` (optionally followed by a time).
    #[error("{field} is not a date: {value:?}")]
    BadDate {
        /// Field name.
        field: &'static str,
        /// Raw value.
        value: String,
    },
    /// A financial year ends before it starts.
    #[error("financial year {0} ends before it starts")]
    InvertedRange(String),
}

/// A value the backend sends either as a JSON number or as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    /// JSON number.
    Number(serde_json::Number),
    /// JSON string.
    Text(String),
}

impl NumberOrText {
    /// Returns the value as text, exactly as the backend wrote it.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text,
        }
    }

    /// Parses the value as a decimal. Blank or invalid text yields `None`.
    #[must_use]
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(number) => parse_decimal(&number.to_string()),
            Self::Text(text) => parse_decimal(text),
        }
    }
}

/// A list response, bare or wrapped in `{"data": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    /// `[...]`
    Bare(Vec<T>),
    /// `{"data": [...]}`
    Wrapped {
        /// The items.
        data: Vec<T>,
    },
}

impl<T> ListEnvelope<T> {
    /// Unwraps the items.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Wrapped { data: items } => items,
        }
    }
}

/// A single-object response, bare or wrapped in `{"data": {...}}`.
///
/// The wrapped form is tried first: a bare schema with all-optional fields
/// would otherwise accept the envelope itself.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ItemEnvelope<T> {
    /// `{"data": {...}}`
    Wrapped {
        /// The item.
        data: T,
    },
    /// `{...}`
    Bare(T),
}

impl<T> ItemEnvelope<T> {
    /// Unwraps the item.
    pub fn into_item(self) -> T {
        match self {
            Self::Wrapped { data: item } | Self::Bare(item) => item,
        }
    }
}

/// Directory entry as served by the seller, buyer and product endpoints.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntryWire {
    /// Backend key.
    #[serde(default)]
    pub id: Option<NumberOrText>,
    /// Document key, used when `id` is absent.
    #[serde(default, rename = "_id")]
    pub document_id: Option<NumberOrText>,
    /// Display name.
    #[serde(default, alias = "name")]
    #[validate(required, length(min = 1))]
    pub firm_name: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// Default brokerage per bag.
    #[serde(default)]
    pub brokerage_rate: Option<NumberOrText>,
}

impl DirectoryEntryWire {
    /// Validates and converts into a directory entry keyed by `I`.
    pub fn into_entry<I>(self) -> Result<DirectoryEntry<I>, WireError>
    where
        I: FromStr<Err = BlankIdError>,
    {
        self.validate()?;
        let brokerage_rate = self.brokerage_rate.as_ref().and_then(NumberOrText::to_decimal);
        Ok(DirectoryEntry {
            id: typed_id("id", self.id.or(self.document_id))?,
            firm_name: self.firm_name.unwrap_or_default(),
            city: self.city.filter(|city| !city.trim().is_empty()),
            brokerage_rate,
        })
    }
}

/// Financial year as served by the financial-year endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FinancialYearWire {
    /// Backend key.
    #[serde(default)]
    pub id: Option<NumberOrText>,
    /// Document key, used when `id` is absent.
    #[serde(default, rename = "_id")]
    pub document_id: Option<NumberOrText>,
    /// Label.
    #[serde(default, alias = "yearName")]
    pub name: Option<String>,
    /// First day.
    #[serde(default)]
    #[validate(required)]
    pub start_date: Option<String>,
    /// Last day.
    #[serde(default)]
    #[validate(required)]
    pub end_date: Option<String>,
    /// Current-year flag.
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl FinancialYearWire {
    /// Validates and converts into a financial year.
    pub fn into_year(self) -> Result<FinancialYear, WireError> {
        self.validate()?;
        let start_date = parse_date("startDate", self.start_date.as_deref().unwrap_or_default())?;
        let end_date = parse_date("endDate", self.end_date.as_deref().unwrap_or_default())?;
        let id: FinancialYearId = typed_id("id", self.id.or(self.document_id))?;
        if end_date < start_date {
            return Err(WireError::InvertedRange(id.into_inner()));
        }
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("{}-{}", start_date.year(), end_date.year()));

        Ok(FinancialYear {
            id,
            name,
            start_date,
            end_date,
            is_active: self.is_active.unwrap_or(false),
        })
    }
}

/// One buyer row of a stored transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordWire {
    /// Buyer firm name.
    pub buyer_name: Option<String>,
    /// Buyer city.
    pub buyer_city: Option<String>,
    /// Product key.
    #[serde(alias = "product")]
    pub product_id: Option<NumberOrText>,
    /// Bags.
    pub quantity: Option<NumberOrText>,
    /// Brokerage per bag.
    pub brokerage: Option<NumberOrText>,
    /// Rate per bag.
    pub product_cost: Option<NumberOrText>,
}

impl From<RecordWire> for LedgerRecord {
    fn from(wire: RecordWire) -> Self {
        let text = |value: Option<NumberOrText>| value.map(NumberOrText::into_text).unwrap_or_default();
        Self {
            buyer_name: wire.buyer_name.unwrap_or_default(),
            buyer_city: wire.buyer_city.unwrap_or_default(),
            product_id: text(wire.product_id),
            quantity: text(wire.quantity),
            brokerage: text(wire.brokerage),
            product_cost: text(wire.product_cost),
        }
    }
}

/// A stored transaction as served by the ledger endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransactionWire {
    /// Transaction number.
    #[serde(default)]
    pub transaction_number: Option<NumberOrText>,
    /// Trade date.
    #[serde(default)]
    #[validate(required)]
    pub date: Option<String>,
    /// Seller key.
    #[serde(default, alias = "sellerId")]
    #[validate(required)]
    pub from_seller: Option<NumberOrText>,
    /// Seller brokerage per bag.
    #[serde(default, alias = "sellerBrokeragePerBag")]
    pub seller_brokerage: Option<NumberOrText>,
    /// Buyer rows.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub records: Vec<RecordWire>,
}

impl TransactionWire {
    /// Validates and converts into an editable draft.
    ///
    /// Rows map 1:1 onto ledger records. `requested` fills in the number when
    /// the backend omits it.
    pub fn into_draft(self, requested: &TransactionNumber) -> Result<TransactionDraft, WireError> {
        self.validate()?;
        let date = parse_date("date", self.date.as_deref().unwrap_or_default())?;
        let seller: MerchantId = typed_id("fromSeller", self.from_seller)?;
        let transaction_number = match self.transaction_number {
            Some(number) => typed_id("transactionNumber", Some(number))?,
            None => requested.clone(),
        };
        let seller_rate = self
            .seller_brokerage
            .map(NumberOrText::into_text)
            .unwrap_or_default();
        let records = self.records.into_iter().map(LedgerRecord::from).collect();

        Ok(TransactionDraft {
            transaction_number: Some(transaction_number),
            date: Some(date),
            seller_id: Some(seller),
            form: TransactionForm::from_records(seller_rate, records),
        })
    }
}

/// Response to a create or update call. Either field may be missing and an
/// empty body is accepted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveResponseWire {
    /// Number assigned or confirmed by the backend.
    pub transaction_number: Option<NumberOrText>,
    /// Backend message.
    pub message: Option<String>,
}

fn typed_id<I>(field: &'static str, raw: Option<NumberOrText>) -> Result<I, WireError>
where
    I: FromStr<Err = BlankIdError>,
{
    raw.map(NumberOrText::into_text)
        .unwrap_or_default()
        .parse()
        .map_err(|_| WireError::BlankId(field))
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, WireError> {
    let trimmed = value.trim();
    let day = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| WireError::BadDate {
        field,
        value: value.to_string(),
    })
}
