//! Correlation of raw outlink rows against known resource identifiers.
//!
//! The analytics collaborator reports outbound clicks grouped by target site;
//! each site row carries a subtable of individual outlink entries whose URLs
//! embed a resource identifier as a suffix. This module turns those rows into
//! a per-resource visit count map.

use crate::models::{ResourceId, ResourceVisitMap, VisitRecord};

/// How duplicate resource keys in the outlink rows are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Later occurrences overwrite earlier ones.
    ///
    /// This is the historical behavior and can under-count when several
    /// outlink rows reference the same resource; it is kept as the default
    /// because published figures were produced with it.
    #[default]
    LastWriteWins,
    /// Duplicate keys are summed. Deviates from the historical figures but
    /// never drops visits.
    Summed,
}

/// Correlate outlink rows with a resource collection.
///
/// Keeps the records whose `label` equals `site_label`, then walks their
/// first-level subtable entries. An entry matches when its `url` contains
/// `collection_token`; the derived key is the trailing substring of the URL
/// with the token's length (resource and collection identifiers share one
/// length in the source data). Entries shorter than the token are skipped.
///
/// Returns an empty map when nothing matches. Unmatched resources are simply
/// absent; the aggregation step defaults them to zero.
pub fn correlate_outlinks(
    records: &[VisitRecord],
    site_label: &str,
    collection_token: &str,
) -> ResourceVisitMap {
    correlate(records, site_label, collection_token, MatchMode::LastWriteWins)
}

/// Strict variant of [`correlate_outlinks`] that sums duplicate keys.
pub fn correlate_outlinks_summed(
    records: &[VisitRecord],
    site_label: &str,
    collection_token: &str,
) -> ResourceVisitMap {
    correlate(records, site_label, collection_token, MatchMode::Summed)
}

fn correlate(
    records: &[VisitRecord],
    site_label: &str,
    collection_token: &str,
    mode: MatchMode,
) -> ResourceVisitMap {
    let mut visits = ResourceVisitMap::new();
    if collection_token.is_empty() {
        return visits;
    }

    for record in records.iter().filter(|r| r.label == site_label) {
        if let Some(first) = record.subtable.first() {
            // Instrumentation only: the busiest outlink of the site row.
            log::debug!(
                "busiest outlink for `{}`: {} visits",
                record.label,
                first.visit_count
            );
        }

        for entry in &record.subtable {
            if !entry.url.contains(collection_token) {
                continue;
            }
            let Some(suffix) = trailing(&entry.url, collection_token.len()) else {
                continue;
            };
            let key = ResourceId::new(suffix);
            match mode {
                MatchMode::LastWriteWins => {
                    visits.insert(key, entry.visit_count);
                }
                MatchMode::Summed => {
                    *visits.entry(key).or_insert(0) += entry.visit_count;
                }
            }
        }
    }
    visits
}

/// Trailing `len` bytes of `s`, if `s` is long enough and the cut lands on a
/// character boundary.
fn trailing(s: &str, len: usize) -> Option<&str> {
    s.len().checked_sub(len).and_then(|start| s.get(start..))
}
