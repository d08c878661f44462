//! Analytics collaborator trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::EngineResult;
use crate::models::{EventCount, SiteSummary, VisitRecord};

/// A Piwik-style analytics backend.
///
/// Implementations own all network concerns (endpoints, auth tokens, URL
/// encoding of segments); the engine only consumes the materialized rows.
/// A missing or empty response must surface as an empty collection, not an
/// error.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait AnalyticsProvider: Send + Sync {
    /// Outlink rows for the given segment expression
    /// (e.g. `outlinkUrl=@solr.bccampus.ca:8001`).
    async fn outlinks(&self, segment: &str) -> EngineResult<Vec<VisitRecord>>;

    /// Pre-aggregated download event rows for the configured site.
    async fn event_downloads(&self) -> EngineResult<Vec<EventCount>>;

    /// Traffic overview rows for every site the backend tracks.
    async fn multi_sites(&self) -> EngineResult<Vec<SiteSummary>>;

    /// Visit count for the configured date range, optionally restricted to a
    /// segment.
    async fn visits(&self, segment: Option<&str>) -> EngineResult<u64>;

    /// Start of the reporting date range.
    async fn range_start(&self) -> EngineResult<DateTime<Utc>>;
}
