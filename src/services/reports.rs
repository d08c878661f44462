//! Report assembly: pure constructors per report kind, plus the async
//! orchestrator that feeds them from the provider collaborators.
//!
//! The pure constructors are the whole pipeline — correlate, aggregate,
//! analyze, predict — glued together over already-materialized inputs. The
//! orchestrator is the only place that branches on the report kind.

use crate::error::EngineResult;
use crate::models::{
    Attachment, CollectionSummary, EventCount, ObservationWindow, Report, ReportModel,
    ReportRequest, SiteSummary, VisitRecord, VisitShare,
};
use crate::providers::{AnalyticsProvider, CatalogueProvider};
use std::collections::HashSet;

use super::aggregate::{sum_events, sum_resource_visits};
use super::frequency::relative_frequency;
use super::matcher::correlate_outlinks;
use super::predictor::predict;

/// Build a download-statistics report for one book's attachments.
///
/// Correlates the outlink rows against the book's resources (using the book
/// identifier as the collection token), aggregates the matched visits, and
/// projects adoptions over the window.
pub fn book_report(
    records: &[VisitRecord],
    site_label: &str,
    collection_token: &str,
    attachments: &[Attachment],
    window: &ObservationWindow,
) -> ReportModel {
    let visits = correlate_outlinks(records, site_label, collection_token);
    let (total, breakdown) = sum_resource_visits(attachments, &visits);
    let frequency = relative_frequency(total, window);
    let prediction = predict(total as f64, frequency.downloads_per_day);

    ReportModel {
        window: *window,
        total_downloads: total,
        frequency,
        prediction,
        breakdown,
        per_resource: Some(visits),
    }
}

/// Build a download-statistics report from pre-aggregated event rows
/// (per-site mode, no resource correlation).
pub fn site_report(events: &[EventCount], window: &ObservationWindow) -> ReportModel {
    let (total, breakdown) = sum_events(events);
    let frequency = relative_frequency(total, window);
    let prediction = predict(total as f64, frequency.downloads_per_day);

    ReportModel {
        window: *window,
        total_downloads: total,
        frequency,
        prediction,
        breakdown,
        per_resource: None,
    }
}

/// Summarize how much of the catalogue lives on the hosted-book platform.
///
/// Keeps only the site rows whose path belongs to a catalogue book and
/// reports their share as an integer percentage (zero when the catalogue is
/// empty).
pub fn collection_summary(
    sites: &[SiteSummary],
    hosted_paths: &HashSet<String>,
    total_books: u64,
) -> CollectionSummary {
    let sites: Vec<SiteSummary> = sites
        .iter()
        .filter(|s| hosted_paths.contains(&s.path))
        .cloned()
        .collect();
    let hosted_books = sites.len() as u64;
    let hosted_share_pct = percentage(hosted_books, total_books);

    CollectionSummary {
        total_books,
        hosted_books,
        hosted_share_pct,
        sites,
    }
}

/// Share of site-wide visits landing on one page of interest.
pub fn visit_share(page_visits: u64, total_visits: u64) -> VisitShare {
    VisitShare {
        page_visits,
        total_visits,
        share_pct: percentage(page_visits, total_visits),
    }
}

fn percentage(part: u64, whole: u64) -> u64 {
    if whole == 0 {
        return 0;
    }
    (100.0 * part as f64 / whole as f64).round() as u64
}

/// Fetch from the collaborators and assemble the requested report.
///
/// `outlink_site_label` identifies the analytics site/table holding resource
/// outlinks (see [`crate::config::EngineConfig::outlink_site_label`]).
pub async fn build_report(
    request: &ReportRequest,
    analytics: &dyn AnalyticsProvider,
    catalogue: &dyn CatalogueProvider,
    outlink_site_label: &str,
) -> EngineResult<Report> {
    match request {
        ReportRequest::SingleBook { book_id } => {
            let attachments = catalogue.attachments(book_id).await?;
            let segment = format!("outlinkUrl=@{outlink_site_label}");
            let records = analytics.outlinks(&segment).await?;
            let window = ObservationWindow::up_to_now(analytics.range_start().await?);
            log::debug!(
                "building single-book report: book={book_id}, {} outlink rows, {} attachments",
                records.len(),
                attachments.len()
            );
            let model = book_report(&records, outlink_site_label, book_id, &attachments, &window);
            Ok(Report::SingleBook {
                book_id: book_id.clone(),
                model,
            })
        }
        ReportRequest::SingleSite { site_id } => {
            let events = analytics.event_downloads().await?;
            let window = ObservationWindow::up_to_now(analytics.range_start().await?);
            log::debug!(
                "building single-site report: site={site_id}, {} event rows",
                events.len()
            );
            let model = site_report(&events, &window);
            Ok(Report::SingleSite {
                site_id: *site_id,
                model,
            })
        }
        ReportRequest::Collection => {
            let sites = analytics.multi_sites().await?;
            let hosted_paths = catalogue.hosted_book_paths().await?;
            let total_books = catalogue.book_count().await?;
            Ok(Report::Collection {
                summary: collection_summary(&sites, &hosted_paths, total_books),
            })
        }
        ReportRequest::VisitShare { page_segment } => {
            let page_visits = analytics.visits(Some(page_segment)).await?;
            let total_visits = analytics.visits(None).await?;
            Ok(Report::VisitShare {
                share: visit_share(page_visits, total_visits),
            })
        }
    }
}
