//! Client for the merchant and product directory.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/api/sellers`  | Seller picker entries |
//! | GET    | `/api/buyers`   | Buyer picker entries |
//! | GET    | `/api/products` | Product picker entries |

use std::str::FromStr;

use brokerbook_core::directory::{DirectoryEntry, MerchantEntry, ProductEntry};
use brokerbook_shared::types::BlankIdError;

use crate::error::ClientError;
use crate::http::Http;
use crate::wire::{DirectoryEntryWire, ListEnvelope};

/// Client for the directory endpoints.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: Http,
}

impl DirectoryClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Lists sellers.
    pub async fn sellers(&self) -> Result<Vec<MerchantEntry>, ClientError> {
        self.list("GET /api/sellers", &["api", "sellers"]).await
    }

    /// Lists buyers.
    pub async fn buyers(&self) -> Result<Vec<MerchantEntry>, ClientError> {
        self.list("GET /api/buyers", &["api", "buyers"]).await
    }

    /// Lists products.
    pub async fn products(&self) -> Result<Vec<ProductEntry>, ClientError> {
        self.list("GET /api/products", &["api", "products"]).await
    }

    async fn list<I>(&self, endpoint: &str, segments: &[&str]) -> Result<Vec<DirectoryEntry<I>>, ClientError>
    where
        I: FromStr<Err = BlankIdError>,
    {
        let url = self.http.url(segments)?;
        let envelope: ListEnvelope<DirectoryEntryWire> =
            self.http.send_json(endpoint, self.http.client().get(url)).await?;

        envelope
            .into_items()
            .into_iter()
            .map(DirectoryEntryWire::into_entry::<I>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| ClientError::InvalidPayload {
                endpoint: endpoint.into(),
                source,
            })
    }
}
