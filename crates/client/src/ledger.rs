//! Client for seller transactions.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/api/transactions/{number}?brokerId=..&financialYearId=..` | Load for editing |
//! | POST   | `/api/transactions` | Create |
//! | PUT    | `/api/transactions/{number}` | Update |

use brokerbook_core::ledger::{TransactionDraft, TransactionPayload};
use brokerbook_shared::types::{BrokerId, FinancialYearId, TransactionNumber};
use tracing::info;

use crate::error::ClientError;
use crate::http::{Http, decode};
use crate::wire::{ItemEnvelope, NumberOrText, SaveResponseWire, TransactionWire};

/// Backend acknowledgement of a create or update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedTransaction {
    /// Number assigned or confirmed by the backend, when it sends one.
    pub transaction_number: Option<TransactionNumber>,
    /// Backend message, when it sends one.
    pub message: Option<String>,
}

impl From<SaveResponseWire> for SavedTransaction {
    fn from(wire: SaveResponseWire) -> Self {
        Self {
            transaction_number: wire
                .transaction_number
                .map(NumberOrText::into_text)
                .and_then(|raw| TransactionNumber::new(raw).ok()),
            message: wire.message.filter(|m| !m.trim().is_empty()),
        }
    }
}

/// Client for the transaction endpoints.
#[derive(Debug, Clone)]
pub struct LedgerClient {
    http: Http,
}

impl LedgerClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Loads an existing transaction as an editable draft.
    ///
    /// # Errors
    ///
    /// Transport, status, decoding, or schema errors.
    pub async fn get_transaction(
        &self,
        number: &TransactionNumber,
        broker: &BrokerId,
        financial_year: &FinancialYearId,
    ) -> Result<TransactionDraft, ClientError> {
        let endpoint = format!("GET /api/transactions/{number}");
        let url = self.http.url(&["api", "transactions", number.as_str()])?;
        let request = self.http.client().get(url).query(&[
            ("brokerId", broker.as_str()),
            ("financialYearId", financial_year.as_str()),
        ]);

        let envelope: ItemEnvelope<TransactionWire> = self.http.send_json(&endpoint, request).await?;
        envelope
            .into_item()
            .into_draft(number)
            .map_err(|source| ClientError::InvalidPayload { endpoint, source })
    }

    /// Creates a transaction.
    ///
    /// # Errors
    ///
    /// Transport, status, or decoding errors.
    pub async fn create(&self, payload: &TransactionPayload) -> Result<SavedTransaction, ClientError> {
        let endpoint = "POST /api/transactions";
        let url = self.http.url(&["api", "transactions"])?;
        let saved = self.save(endpoint, self.http.client().post(url).json(payload)).await?;
        info!(
            brokerage = %payload.brokerage,
            rows = payload.records.len(),
            transaction_number = saved.transaction_number.as_ref().map(TransactionNumber::as_str),
            "transaction created"
        );
        Ok(saved)
    }

    /// Replaces an existing transaction.
    ///
    /// # Errors
    ///
    /// Transport, status, or decoding errors.
    pub async fn update(
        &self,
        number: &TransactionNumber,
        payload: &TransactionPayload,
    ) -> Result<SavedTransaction, ClientError> {
        let endpoint = format!("PUT /api/transactions/{number}");
        let url = self.http.url(&["api", "transactions", number.as_str()])?;
        let saved = self.save(&endpoint, self.http.client().put(url).json(payload)).await?;
        info!(
            brokerage = %payload.brokerage,
            rows = payload.records.len(),
            transaction_number = number.as_str(),
            "transaction updated"
        );
        Ok(saved)
    }

    async fn save(
        &self,
        endpoint: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<SavedTransaction, ClientError> {
        let body = self.http.execute(endpoint, request).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(SavedTransaction::default());
        }
        let wire: SaveResponseWire = decode(endpoint, &body)?;
        Ok(wire.into())
    }
}
