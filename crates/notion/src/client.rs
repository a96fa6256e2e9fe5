//! HTTP client for the hosted database service.

use std::fmt;

use async_trait::async_trait;

use stockbot_core::InventoryRecord;

use crate::filter::QueryRequest;
use crate::page::QueryResponse;
use crate::source::{InventorySource, SourceError};

const API_BASE: &str = "https://api.notion.com/v1";

/// Versioned API contract; sent on every request.
const NOTION_VERSION: &str = "2022-06-28";

/// Identifier of the inventory database inside the service.
///
/// Kept as the service's own string form (dashed or compact) rather than a
/// parsed UUID, because it is only ever echoed back into request paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseId(String);

impl DatabaseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatabaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Client for the database service's query API.
///
/// Cheap to clone; the underlying HTTP client pools connections.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    token: String,
    database_id: DatabaseId,
    base_url: String,
}

impl NotionClient {
    pub fn new(token: impl Into<String>, database_id: DatabaseId) -> Self {
        Self::with_base_url(token, database_id, API_BASE)
    }

    /// Point the client at a non-default API host (proxies, local stubs).
    pub fn with_base_url(
        token: impl Into<String>,
        database_id: DatabaseId,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.into(),
            database_id,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl InventorySource for NotionClient {
    async fn search(&self, term: &str) -> Result<Vec<InventoryRecord>, SourceError> {
        let url = format!("{}/databases/{}/query", self.base_url, self.database_id);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&QueryRequest::matching(term))
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SourceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        if body.has_more {
            tracing::debug!(
                database = %self.database_id,
                "result set is paginated; returning the first page only"
            );
        }

        Ok(body.results.iter().map(|page| page.to_record()).collect())
    }
}
