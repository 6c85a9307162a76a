//! Notion-backed implementations of the entry ports
//!
//! Maps log and summary records onto the property names of the two
//! databases.

use std::sync::Arc;

use async_trait::async_trait;
use timesync_core::{ActivityLogPort, SummaryPort};
use timesync_domain::constants::{
    ACTIVITY_TIME_PROPERTY, LOG_DATE_PROPERTY, LOG_DURATION_PROPERTY, LOG_TITLE_PROPERTY,
    SUMMARY_DATE_PROPERTY, SUMMARY_TARGET_PROPERTY, SUMMARY_TITLE_PROPERTY,
    SUMMARY_TOTAL_PROPERTY, WEEKDAY_PROPERTY,
};
use timesync_domain::{
    LogRecord, NewSummary, Result, SummaryFields, SummaryPage, SummaryUpdate,
};
use tracing::debug;

use super::client::NotionClient;
use super::types::{Properties, PropertyValue, TitleFilter};

/// Activity log stored as one page per entry in the logs database
pub struct NotionActivityLog {
    client: Arc<NotionClient>,
    database_id: String,
}

impl NotionActivityLog {
    pub fn new(client: Arc<NotionClient>, database_id: impl Into<String>) -> Self {
        Self { client, database_id: database_id.into() }
    }
}

#[async_trait]
impl ActivityLogPort for NotionActivityLog {
    async fn create_log(&self, record: &LogRecord) -> Result<()> {
        let page = self.client.create_page(&self.database_id, &log_properties(record)).await?;
        debug!(page_id = %page.id, "log page created");
        Ok(())
    }
}

/// Per-category summaries stored in the summary database
pub struct NotionSummaryStore {
    client: Arc<NotionClient>,
    database_id: String,
}

impl NotionSummaryStore {
    pub fn new(client: Arc<NotionClient>, database_id: impl Into<String>) -> Self {
        Self { client, database_id: database_id.into() }
    }
}

#[async_trait]
impl SummaryPort for NotionSummaryStore {
    async fn find_by_category(&self, category: &str) -> Result<Option<SummaryPage>> {
        let filter = TitleFilter::equals(SUMMARY_TITLE_PROPERTY, category);
        let response = self.client.query_database(&self.database_id, &filter).await?;

        debug!(category, matches = response.results.len(), "summary lookup");

        Ok(response.results.into_iter().next().map(|page| SummaryPage {
            total_hours: page.number(SUMMARY_TOTAL_PROPERTY),
            page_id: page.id,
        }))
    }

    async fn create(&self, summary: &NewSummary) -> Result<()> {
        let mut properties = summary_properties(summary.total_hours, &summary.fields);
        properties.insert(
            SUMMARY_TITLE_PROPERTY.to_string(),
            PropertyValue::title(summary.category.as_str()),
        );

        let page = self.client.create_page(&self.database_id, &properties).await?;
        debug!(page_id = %page.id, "summary page created");
        Ok(())
    }

    async fn update(&self, update: &SummaryUpdate) -> Result<()> {
        let properties = summary_properties(update.total_hours, &update.fields);
        self.client.update_page(&update.page_id, &properties).await?;
        Ok(())
    }
}

fn log_properties(record: &LogRecord) -> Properties {
    Properties::from([
        (LOG_TITLE_PROPERTY.to_string(), PropertyValue::title(record.activity.as_str())),
        (LOG_DURATION_PROPERTY.to_string(), PropertyValue::Number(record.duration_minutes)),
        (LOG_DATE_PROPERTY.to_string(), PropertyValue::date(record.date.as_str())),
        (WEEKDAY_PROPERTY.to_string(), PropertyValue::text(record.weekday.as_str())),
        (ACTIVITY_TIME_PROPERTY.to_string(), PropertyValue::text(record.activity_time.as_str())),
    ])
}

/// Properties shared by summary create and update; the title is never
/// rewritten on update.
fn summary_properties(total_hours: f64, fields: &SummaryFields) -> Properties {
    Properties::from([
        (SUMMARY_TOTAL_PROPERTY.to_string(), PropertyValue::Number(total_hours)),
        (SUMMARY_TARGET_PROPERTY.to_string(), PropertyValue::Number(fields.target_hours)),
        (SUMMARY_DATE_PROPERTY.to_string(), PropertyValue::date(fields.last_activity_date.as_str())),
        (WEEKDAY_PROPERTY.to_string(), PropertyValue::text(fields.weekday.as_str())),
        (ACTIVITY_TIME_PROPERTY.to_string(), PropertyValue::text(fields.activity_time.as_str())),
    ])
}
