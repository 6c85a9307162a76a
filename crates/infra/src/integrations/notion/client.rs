//! Notion API client for pages and database queries
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use timesync_domain::{NotionConfig, TimeSyncError};
use tracing::debug;
use url::Url;

use super::types::{
    CreatePageRequest, ErrorBody, NotionError, Page, Parent, Properties, QueryRequest,
    QueryResponse, TitleFilter, UpdatePageRequest,
};
use crate::http::HttpClient;

const NOTION_VERSION_HEADER: &str = "Notion-Version";

/// Client for the three Notion operations the bridge depends on:
/// create a page in a database, query a database, update a page.
pub struct NotionClient {
    http_client: HttpClient,
    api_key: String,
    api_version: String,
    base_url: String,
}

impl NotionClient {
    /// Create a new Notion client
    ///
    /// # Errors
    /// Returns `TimeSyncError::Config` if the configured API URL is not a
    /// valid absolute URL.
    pub fn new(config: &NotionConfig, http_client: HttpClient) -> Result<Self, TimeSyncError> {
        let base = Url::parse(&config.api_url).map_err(|err| {
            TimeSyncError::Config(format!("Invalid Notion API URL '{}': {err}", config.api_url))
        })?;

        Ok(Self {
            http_client,
            api_key: config.api_key.clone(),
            api_version: config.api_version.clone(),
            base_url: base.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Create a page in `database_id` with the given properties
    pub async fn create_page(
        &self,
        database_id: &str,
        properties: &Properties,
    ) -> Result<Page, NotionError> {
        let body = CreatePageRequest { parent: Parent { database_id }, properties };
        self.call(Method::POST, format!("{}/v1/pages", self.base_url), &body).await
    }

    /// Query `database_id` with an exact-match title filter
    pub async fn query_database(
        &self,
        database_id: &str,
        filter: &TitleFilter,
    ) -> Result<QueryResponse, NotionError> {
        let url = format!("{}/v1/databases/{}/query", self.base_url, database_id);
        self.call(Method::POST, url, &QueryRequest { filter }).await
    }

    /// Overwrite the given properties on `page_id`
    pub async fn update_page(
        &self,
        page_id: &str,
        properties: &Properties,
    ) -> Result<Page, NotionError> {
        let url = format!("{}/v1/pages/{}", self.base_url, page_id);
        self.call(Method::PATCH, url, &UpdatePageRequest { properties }).await
    }

    async fn call<B, T>(&self, method: Method, url: String, body: &B) -> Result<T, NotionError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .http_client
            .request(method.clone(), &url)
            .bearer_auth(&self.api_key)
            .header(NOTION_VERSION_HEADER, &self.api_version)
            .json(body);

        let response = self.http_client.send(request).await.map_err(|err| match err {
            TimeSyncError::Network(msg) | TimeSyncError::Internal(msg) => NotionError::Network(msg),
            other => NotionError::Network(format!("HTTP error: {other}")),
        })?;

        let status = response.status();
        debug!(%method, %url, status = status.as_u16(), "received Notion API response");

        if !status.is_success() {
            return Err(Self::error_from_response(status.as_u16(), response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| NotionError::InvalidResponse(format!("Failed to parse response: {e}")))
    }

    async fn error_from_response(status: u16, response: Response) -> NotionError {
        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str::<ErrorBody>(&text).unwrap_or(ErrorBody {
            code: "unknown".to_string(),
            message: text,
        });

        match status {
            401 | 403 => NotionError::Authentication(format!("{} ({status})", body.message)),
            429 => NotionError::RateLimited,
            _ => NotionError::Api { status, code: body.code, message: body.message },
        }
    }
}
