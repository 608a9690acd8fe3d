//! Typed HTTP client for the pantry API.
//!
//! Works for both resources through the [`Record`] trait:
//!
//! ```no_run
//! # async fn demo() -> Result<(), pantry_api::error::ClientError> {
//! use pantry_api::client::PantryClient;
//! use pantry_api::store::{Item, ItemDraft};
//!
//! let client = PantryClient::new("http://127.0.0.1:3000");
//! let eggs: Item = client.create(&ItemDraft::new("Eggs")).await?;
//! client.delete::<Item>(eggs.id).await?;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use reqwest::{Response, StatusCode};
use tracing::debug;

use crate::error::ClientError;
use crate::store::{Record, RecordId, Replacement};

/// Client for a running pantry API server.
#[derive(Debug, Clone)]
pub struct PantryClient {
    http: reqwest::Client,
    base_url: String,
}

impl PantryClient {
    /// Client for the server at `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self::with_http(http, base_url)
    }

    /// Client reusing an existing reqwest client.
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Server base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /health` succeeded.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let response = self.http.get(self.url("/health")).send().await?;
        Ok(response.status().is_success())
    }

    /// Every record of `R`'s collection.
    pub async fn list<R: Record>(&self) -> Result<Vec<R>, ClientError> {
        let url = self.url(&R::RESOURCE.path());
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        Ok(expect(response, StatusCode::OK).await?.json().await?)
    }

    /// One record by id.
    pub async fn get<R: Record>(&self, id: RecordId) -> Result<R, ClientError> {
        let url = self.url(&R::RESOURCE.record_path(id));
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        Ok(expect(response, StatusCode::OK).await?.json().await?)
    }

    /// Create a record from its draft.
    pub async fn create<R: Record>(&self, draft: &R::Draft) -> Result<R, ClientError> {
        let url = self.url(&R::RESOURCE.path());
        debug!("POST {}", url);
        let response = self.http.post(url).json(draft).send().await?;
        Ok(expect(response, StatusCode::CREATED).await?.json().await?)
    }

    /// Replace a record with `record`'s fields, addressed by its own id.
    pub async fn update<R: Record>(&self, record: &R) -> Result<R, ClientError> {
        let url = self.url(&R::RESOURCE.record_path(record.id()));
        debug!("PUT {}", url);
        let response = self.http.put(url).json(record).send().await?;
        Ok(expect(response, StatusCode::OK).await?.json().await?)
    }

    /// Replace the record at `id` with an explicit replacement body.
    pub async fn replace<R: Record>(
        &self,
        id: RecordId,
        body: &Replacement<R::Draft>,
    ) -> Result<R, ClientError> {
        let url = self.url(&R::RESOURCE.record_path(id));
        debug!("PUT {}", url);
        let response = self.http.put(url).json(body).send().await?;
        Ok(expect(response, StatusCode::OK).await?.json().await?)
    }

    /// Delete a record.
    pub async fn delete<R: Record>(&self, id: RecordId) -> Result<(), ClientError> {
        let url = self.url(&R::RESOURCE.record_path(id));
        debug!("DELETE {}", url);
        let response = self.http.delete(url).send().await?;
        expect(response, StatusCode::NO_CONTENT).await?;
        Ok(())
    }
}

async fn expect(response: Response, expected: StatusCode) -> Result<Response, ClientError> {
    if response.status() == expected {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::UnexpectedStatus { status, body })
}
