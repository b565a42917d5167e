//! Request plumbing shared by the sub-clients.

use std::time::Instant;

use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ClientError;

/// HTTP client bound to the backend base URL.
#[derive(Debug, Clone)]
pub(crate) struct Http {
    client: reqwest::Client,
    base_url: Url,
}

impl Http {
    pub(crate) fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Builds `{base_url}/{segments...}`, percent-encoding each segment.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::Config(format!("base URL cannot have a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends the request and returns the body of a 2xx response.
    pub(crate) async fn execute(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<Vec<u8>, ClientError> {
        let started = Instant::now();
        let resp = request.send().await.map_err(|source| {
            warn!(endpoint, error = %source, "backend unreachable");
            ClientError::Http {
                endpoint: endpoint.into(),
                source,
            }
        })?;

        let status = resp.status();
        debug!(endpoint, status = status.as_u16(), elapsed = ?started.elapsed(), "backend responded");

        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read response body: {e}>"));
            warn!(endpoint, status = status.as_u16(), "backend rejected request");
            return Err(ClientError::Api {
                endpoint: endpoint.into(),
                status: status.as_u16(),
                body,
            });
        }

        resp.bytes()
            .await
            .map(|body| body.to_vec())
            .map_err(|source| ClientError::Http {
                endpoint: endpoint.into(),
                source,
            })
    }

    /// Sends the request and decodes a JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let body = self.execute(endpoint, request).await?;
        decode(endpoint, &body)
    }
}

pub(crate) fn decode<T: DeserializeOwned>(endpoint: &str, body: &[u8]) -> Result<T, ClientError> {
    serde_json::from_slice(body).map_err(|source| ClientError::Deserialization {
        endpoint: endpoint.into(),
        source,
    })
}

/// Parses the configured base URL. Only `http` and `https` are accepted and
/// the path always ends in `/`.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| ClientError::Config(format!("invalid base URL {raw:?}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::Config(format!(
            "base URL must be http or https, got {raw:?}"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
