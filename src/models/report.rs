//! Report value objects handed to the rendering collaborator.
//!
//! Everything here is a plain immutable bundle of computed figures: the engine
//! never formats text or markup, and a report has no lifecycle beyond being
//! built once and read by the renderer.

use serde::{Deserialize, Serialize};

use super::resource::ResourceVisitMap;
use super::visit::SiteSummary;
use super::window::ObservationWindow;

/// Low/high likely-adoption counts derived from a download total.
///
/// `low` assumes one adoption per 50 downloads, `high` one per 10. The ratios
/// are fixed domain constants, not tunables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdoptionBand {
    pub low: f64,
    pub high: f64,
}

/// Low/high estimated days between future adoptions.
///
/// Note the inversion: the liberal adoption assumption produces the *shorter*
/// interval, so `high <= low` whenever the frequency is positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FutureIntervalBand {
    pub low: f64,
    pub high: f64,
}

/// Time-normalized access frequency for a resource collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyFigure {
    /// Elapsed pseudo-days in the observation window.
    pub elapsed_days: f64,
    /// Downloads per pseudo-day, rounded to two decimals; zero for a
    /// degenerate window.
    pub downloads_per_day: f64,
}

/// Adoption projection produced by the predictor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub adoption: AdoptionBand,
    pub future_interval: FutureIntervalBand,
}

/// One renderable breakdown row: an attachment description or event label
/// with its download count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadRow {
    pub label: String,
    pub count: u64,
}

impl DownloadRow {
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// All computed figures for one download-statistics report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportModel {
    pub window: ObservationWindow,
    pub total_downloads: u64,
    pub frequency: FrequencyFigure,
    pub prediction: Prediction,
    /// Per-attachment or per-event rows, zero-defaulted, in input order.
    pub breakdown: Vec<DownloadRow>,
    /// Raw per-resource visit counts when outlink correlation was involved.
    /// Only matched resources appear; absent keys mean zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_resource: Option<ResourceVisitMap>,
}

/// Multi-site collection overview: how much of the catalogue lives on the
/// hosted-book platform, plus per-site traffic rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub total_books: u64,
    pub hosted_books: u64,
    /// Integer percentage of catalogue books present on the platform.
    pub hosted_share_pct: u64,
    pub sites: Vec<SiteSummary>,
}

/// Share of site-wide visits landing on one page of interest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisitShare {
    pub page_visits: u64,
    pub total_visits: u64,
    /// Integer percentage; zero when there are no visits at all.
    pub share_pct: u64,
}

/// A fully assembled report, tagged by kind.
///
/// The kind is decided once at the orchestration boundary; nothing below it
/// branches on presentation concerns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    /// Download statistics for one catalogue book's attachments.
    SingleBook { book_id: String, model: ReportModel },
    /// Download statistics for one hosted site's download events.
    SingleSite { site_id: i64, model: ReportModel },
    /// Collection-wide multi-site overview.
    Collection { summary: CollectionSummary },
    /// Site-wide visit share for the catalogue landing page.
    VisitShare { share: VisitShare },
}

/// Request for one report, consumed by the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportRequest {
    SingleBook { book_id: String },
    SingleSite { site_id: i64 },
    Collection,
    VisitShare { page_segment: String },
}
