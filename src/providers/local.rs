//! In-memory provider implementations for tests and local development.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};

use crate::error::{EngineError, EngineResult};
use crate::models::{Attachment, EventCount, SiteSummary, VisitRecord};

use super::{AnalyticsProvider, CatalogueProvider};

/// In-memory analytics fixture store.
///
/// Seed it with rows, then hand it to the orchestrator wherever a real
/// analytics backend would go.
pub struct LocalAnalytics {
    outlinks: RwLock<Vec<VisitRecord>>,
    events: RwLock<Vec<EventCount>>,
    sites: RwLock<Vec<SiteSummary>>,
    visits: RwLock<HashMap<Option<String>, u64>>,
    range_start: RwLock<DateTime<Utc>>,
}

impl LocalAnalytics {
    pub fn new(range_start: DateTime<Utc>) -> Self {
        Self {
            outlinks: RwLock::new(Vec::new()),
            events: RwLock::new(Vec::new()),
            sites: RwLock::new(Vec::new()),
            visits: RwLock::new(HashMap::new()),
            range_start: RwLock::new(range_start),
        }
    }

    pub fn seed_outlinks(&self, records: Vec<VisitRecord>) {
        *self.outlinks.write() = records;
    }

    pub fn seed_events(&self, events: Vec<EventCount>) {
        *self.events.write() = events;
    }

    pub fn seed_sites(&self, sites: Vec<SiteSummary>) {
        *self.sites.write() = sites;
    }

    /// Seed the visit count for a segment; `None` seeds the site-wide total.
    pub fn seed_visits(&self, segment: Option<&str>, count: u64) {
        self.visits
            .write()
            .insert(segment.map(|s| s.to_string()), count);
    }
}

#[async_trait]
impl AnalyticsProvider for LocalAnalytics {
    async fn outlinks(&self, _segment: &str) -> EngineResult<Vec<VisitRecord>> {
        Ok(self.outlinks.read().clone())
    }

    async fn event_downloads(&self) -> EngineResult<Vec<EventCount>> {
        Ok(self.events.read().clone())
    }

    async fn multi_sites(&self) -> EngineResult<Vec<SiteSummary>> {
        Ok(self.sites.read().clone())
    }

    async fn visits(&self, segment: Option<&str>) -> EngineResult<u64> {
        Ok(self
            .visits
            .read()
            .get(&segment.map(|s| s.to_string()))
            .copied()
            .unwrap_or(0))
    }

    async fn range_start(&self) -> EngineResult<DateTime<Utc>> {
        Ok(*self.range_start.read())
    }
}

/// In-memory catalogue fixture store.
pub struct LocalCatalogue {
    attachments: RwLock<HashMap<String, Vec<Attachment>>>,
    hosted_paths: RwLock<HashSet<String>>,
    book_count: RwLock<u64>,
}

impl LocalCatalogue {
    pub fn new() -> Self {
        Self {
            attachments: RwLock::new(HashMap::new()),
            hosted_paths: RwLock::new(HashSet::new()),
            book_count: RwLock::new(0),
        }
    }

    pub fn seed_book(&self, book_id: &str, attachments: Vec<Attachment>) {
        self.attachments
            .write()
            .insert(book_id.to_string(), attachments);
    }

    pub fn seed_hosted_paths(&self, paths: impl IntoIterator<Item = String>) {
        *self.hosted_paths.write() = paths.into_iter().collect();
    }

    pub fn seed_book_count(&self, count: u64) {
        *self.book_count.write() = count;
    }
}

impl Default for LocalCatalogue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogueProvider for LocalCatalogue {
    async fn attachments(&self, book_id: &str) -> EngineResult<Vec<Attachment>> {
        self.attachments
            .read()
            .get(book_id)
            .cloned()
            .ok_or_else(|| EngineError::not_found(format!("no book with id `{book_id}`")))
    }

    async fn hosted_book_paths(&self) -> EngineResult<HashSet<String>> {
        Ok(self.hosted_paths.read().clone())
    }

    async fn book_count(&self) -> EngineResult<u64> {
        Ok(*self.book_count.read())
    }
}

#[cfg(test)]
mod tests {
    use super::{LocalAnalytics, LocalCatalogue};
    use crate::models::Attachment;
    use crate::providers::{AnalyticsProvider, CatalogueProvider};
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn test_local_analytics_defaults_to_empty() {
        let analytics = LocalAnalytics::new(Utc.with_ymd_and_hms(2015, 10, 1, 0, 0, 0).unwrap());
        assert!(analytics.outlinks("any").await.unwrap().is_empty());
        assert!(analytics.event_downloads().await.unwrap().is_empty());
        assert_eq!(analytics.visits(None).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_local_catalogue_unknown_book_is_not_found() {
        let catalogue = LocalCatalogue::new();
        let err = catalogue.attachments("missing").await.unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[tokio::test]
    async fn test_local_catalogue_seeded_book() {
        let catalogue = LocalCatalogue::new();
        catalogue.seed_book("bk1", vec![Attachment::new("abc", "PDF")]);
        let attachments = catalogue.attachments("bk1").await.unwrap();
        assert_eq!(attachments.len(), 1);
    }
}
