//! Notion API wire types for pages and database queries
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use timesync_domain::TimeSyncError;

/// Notion API error types
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    /// Network-level error (connection failed, timeout, etc.)
    #[error("Network error: {0}")]
    Network(String),

    /// Notion returned an error object
    #[error("API error (status {status}, code {code}): {message}")]
    Api { status: u16, code: String, message: String },

    /// Integration token rejected or lacks access
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Response body doesn't match expected schema
    #[error("Invalid response schema: {0}")]
    InvalidResponse(String),
}

impl From<NotionError> for TimeSyncError {
    fn from(err: NotionError) -> Self {
        match err {
            NotionError::Network(msg) => TimeSyncError::Network(msg),
            NotionError::Authentication(msg) => TimeSyncError::Auth(msg),
            NotionError::RateLimited => TimeSyncError::Network("Notion rate limit exceeded".into()),
            NotionError::Api { status: 404, code, message } => {
                TimeSyncError::NotFound(format!("{code}: {message}"))
            }
            err @ NotionError::Api { .. } => TimeSyncError::Upstream(err.to_string()),
            NotionError::InvalidResponse(msg) => TimeSyncError::Upstream(msg),
        }
    }
}

/// Error object returned by the Notion API
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// Text fragment inside title and rich_text properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    pub text: TextContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

impl RichText {
    pub fn plain(content: impl Into<String>) -> Vec<Self> {
        vec![Self { text: TextContent { content: content.into() } }]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: String,
}

/// A typed property value as written to a page
///
/// Serializes to Notion's `{"<type>": <value>}` shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValue {
    Title(Vec<RichText>),
    RichText(Vec<RichText>),
    Number(f64),
    Date(DateValue),
}

impl PropertyValue {
    pub fn title(content: impl Into<String>) -> Self {
        Self::Title(RichText::plain(content))
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::RichText(RichText::plain(content))
    }

    pub fn date(start: impl Into<String>) -> Self {
        Self::Date(DateValue { start: start.into() })
    }
}

/// Property map keyed by property name
pub type Properties = BTreeMap<String, PropertyValue>;

#[derive(Debug, Serialize)]
pub(crate) struct Parent<'a> {
    pub database_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreatePageRequest<'a> {
    pub parent: Parent<'a>,
    pub properties: &'a Properties,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdatePageRequest<'a> {
    pub properties: &'a Properties,
}

/// Exact-match filter on a title property
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleFilter {
    pub property: String,
    pub title: TitleCondition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleCondition {
    pub equals: String,
}

impl TitleFilter {
    pub fn equals(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self { property: property.into(), title: TitleCondition { equals: value.into() } }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct QueryRequest<'a> {
    pub filter: &'a TitleFilter,
}

/// A page object as returned by create, update and query calls
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
}

impl Page {
    /// Value of a number property; `None` when missing or empty.
    pub fn number(&self, property: &str) -> Option<f64> {
        self.properties.get(property)?.get("number")?.as_f64()
    }
}

/// Result of a database query
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Page>,
}
