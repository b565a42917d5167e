//! Client for financial years.

use brokerbook_core::fiscal::{FinancialYear, resolve_default};
use chrono::NaiveDate;
use tracing::debug;

use crate::error::ClientError;
use crate::http::Http;
use crate::wire::{FinancialYearWire, ListEnvelope};

const LIST: &str = "GET /api/financial-years";

/// Client for `GET /api/financial-years`.
#[derive(Debug, Clone)]
pub struct FinancialYearClient {
    http: Http,
}

impl FinancialYearClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Lists every financial year the backend knows about.
    ///
    /// # Errors
    ///
    /// Transport, status, decoding, or schema errors.
    pub async fn list(&self) -> Result<Vec<FinancialYear>, ClientError> {
        let url = self.http.url(&["api", "financial-years"])?;
        let envelope: ListEnvelope<FinancialYearWire> =
            self.http.send_json(LIST, self.http.client().get(url)).await?;

        envelope
            .into_items()
            .into_iter()
            .map(FinancialYearWire::into_year)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| ClientError::InvalidPayload {
                endpoint: LIST.into(),
                source,
            })
    }

    /// Fetches the years and picks the default for `today`.
    ///
    /// Returns `None` when the backend has no years at all.
    ///
    /// # Errors
    ///
    /// Same as [`Self::list`].
    pub async fn default_year(&self, today: NaiveDate) -> Result<Option<FinancialYear>, ClientError> {
        let years = self.list().await?;
        let chosen = resolve_default(&years, today).cloned();
        debug!(
            available = years.len(),
            chosen = chosen.as_ref().map(|y| y.name.as_str()),
            "resolved default financial year"
        );
        Ok(chosen)
    }
}
