//! Brokerbook Client - typed access to the bookkeeping backend.
//!
//! One [`BrokerbookClient`] per configured backend hands out sub-clients
//! sharing a connection pool:
//!
//! - [`DirectoryClient`]: sellers, buyers, products.
//! - [`FinancialYearClient`]: financial years and the default-year pick.
//! - [`LedgerClient`]: load, create, and update seller transactions.
//!
//! Calls are single-shot. A failure is returned to the caller as
//! [`ClientError`] and nothing is retried.

pub mod directory;
pub mod error;
pub mod fiscal;
mod http;
pub mod ledger;
pub mod wire;

use std::time::Duration;

use brokerbook_shared::config::ApiConfig;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

pub use directory::DirectoryClient;
pub use error::ClientError;
pub use fiscal::FinancialYearClient;
pub use ledger::{LedgerClient, SavedTransaction};

use http::Http;

/// Entry point for backend calls.
#[derive(Debug, Clone)]
pub struct BrokerbookClient {
    http: Http,
}

impl BrokerbookClient {
    /// Builds a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// [`ClientError::Config`] when the base URL or token is unusable, or the
    /// HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let base_url = http::parse_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        if let Some(token) = config.token.as_deref().map(str::trim)
            && !token.is_empty()
        {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ClientError::Config(format!("invalid API token: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http: Http::new(client, base_url),
        })
    }

    /// Directory endpoints.
    #[must_use]
    pub fn directory(&self) -> DirectoryClient {
        DirectoryClient::new(self.http.clone())
    }

    /// Financial-year endpoints.
    #[must_use]
    pub fn financial_years(&self) -> FinancialYearClient {
        FinancialYearClient::new(self.http.clone())
    }

    /// Transaction endpoints.
    #[must_use]
    pub fn ledger(&self) -> LedgerClient {
        LedgerClient::new(self.http.clone())
    }
}
