//! Application context - dependency injection container

use std::sync::Arc;

use timesync_core::EntryService;
use timesync_domain::{Config, Result};
use timesync_infra::{HttpClient, NotionActivityLog, NotionClient, NotionSummaryStore};
use tracing::info;

/// Application context - holds the configuration and the entry service
pub struct AppContext {
    pub config: Config,
    pub entry_service: Arc<EntryService>,
}

impl AppContext {
    /// Wire the Notion adapters into a new entry service.
    ///
    /// # Errors
    /// Returns `TimeSyncError::Config` if the HTTP client cannot be built or
    /// the Notion API URL is invalid.
    pub fn new(config: Config) -> Result<Self> {
        let http_client = HttpClient::from_config(&config.http)?;
        let notion = Arc::new(NotionClient::new(&config.notion, http_client)?);

        let logs = Arc::new(NotionActivityLog::new(
            Arc::clone(&notion),
            config.notion.logs_database_id.as_str(),
        ));
        let summaries =
            Arc::new(NotionSummaryStore::new(notion, config.notion.summary_database_id.as_str()));

        if config.document_store.uri.is_some() {
            info!("MONGO_URI is set but no document store is used; ignoring it");
        }

        info!(
            api_url = %config.notion.api_url,
            timeout_secs = config.http.timeout_seconds,
            max_attempts = config.http.max_attempts,
            "AppContext initialized"
        );

        Ok(Self::with_entry_service(config, Arc::new(EntryService::new(logs, summaries))))
    }

    /// Build a context around an already-wired entry service.
    pub fn with_entry_service(config: Config, entry_service: Arc<EntryService>) -> Self {
        Self { config, entry_service }
    }

    /// Release resources held by the context.
    ///
    /// Outbound clients close their connections when dropped, so this only
    /// records that the server has stopped taking requests.
    pub fn shutdown(&self) {
        info!(bind_address = %self.config.server.bind_address(), "shutdown called on AppContext");
    }
}
