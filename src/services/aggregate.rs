//! Download aggregation: totals plus renderable breakdowns.

use crate::models::{Attachment, DownloadRow, EventCount, ResourceId, ResourceVisitMap};

/// Sum per-resource counts into a total, passing the breakdown through.
///
/// The map is returned unchanged alongside the total so callers can still
/// render per-resource rows.
pub fn aggregate(
    per_resource: impl IntoIterator<Item = (ResourceId, u64)>,
) -> (u64, ResourceVisitMap) {
    let breakdown: ResourceVisitMap = per_resource.into_iter().collect();
    let total = breakdown.values().sum();
    (total, breakdown)
}

/// Merge a book's attachments with the matched visit counts.
///
/// Produces one row per attachment in input order, labelled with the
/// attachment description and zero-defaulted when the resource never matched
/// an outlink, plus the download total across all attachments.
pub fn sum_resource_visits(
    attachments: &[Attachment],
    visits: &ResourceVisitMap,
) -> (u64, Vec<DownloadRow>) {
    let mut total = 0u64;
    let rows = attachments
        .iter()
        .map(|att| {
            let count = visits.get(&att.uuid).copied().unwrap_or(0);
            total += count;
            DownloadRow::new(att.description.clone(), count)
        })
        .collect();
    (total, rows)
}

/// Flat mode: sum pre-aggregated download events directly, without resource
/// correlation.
pub fn sum_events(events: &[EventCount]) -> (u64, Vec<DownloadRow>) {
    let mut total = 0u64;
    let rows = events
        .iter()
        .map(|e| {
            total += e.events;
            DownloadRow::new(e.label.clone(), e.events)
        })
        .collect();
    (total, rows)
}
