//! Raw analytics rows as supplied by the Piwik-style collaborator.
//!
//! The engine treats the collaborator's schema as read-only input: an outlink
//! report is a sequence of site rows, each optionally carrying a `subtable` of
//! first-level outlink entries. Missing or empty responses are tolerated and
//! mean "no records"; malformed rows fail fast with a validation error naming
//! the offending field.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EngineError, EngineResult};

/// One observed outbound click target inside a site row's subtable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlinkEntry {
    pub label: String,
    pub url: String,
    #[serde(rename = "nb_visits")]
    pub visit_count: u64,
}

/// One site/table row of an outlink report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub label: String,
    #[serde(rename = "nb_visits", default)]
    pub visit_count: u64,
    #[serde(default)]
    pub subtable: Vec<OutlinkEntry>,
}

/// One pre-aggregated download event row (per-site mode).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventCount {
    pub label: String,
    #[serde(rename = "nb_events")]
    pub events: u64,
}

impl EventCount {
    pub fn new(label: impl Into<String>, events: u64) -> Self {
        Self {
            label: label.into(),
            events,
        }
    }
}

/// One row of a multi-site traffic overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSummary {
    pub id: i64,
    pub label: String,
    pub path: String,
    pub visits: u64,
    pub actions: u64,
    pub pageviews: u64,
}

fn field_str(row: &Value, field: &str, row_idx: usize) -> EngineResult<String> {
    match row.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(EngineError::validation(
            field,
            format!("row {row_idx}: expected a string"),
        )),
        None => Err(EngineError::validation(
            field,
            format!("row {row_idx}: missing required field"),
        )),
    }
}

fn field_count(row: &Value, field: &str, row_idx: usize) -> EngineResult<u64> {
    match row.get(field) {
        Some(v) => v.as_u64().ok_or_else(|| {
            EngineError::validation(
                field,
                format!("row {row_idx}: expected a non-negative integer, got {v}"),
            )
        }),
        None => Err(EngineError::validation(
            field,
            format!("row {row_idx}: missing required field"),
        )),
    }
}

impl VisitRecord {
    pub fn new(label: impl Into<String>, subtable: Vec<OutlinkEntry>) -> Self {
        let visit_count = subtable.iter().map(|e| e.visit_count).sum();
        Self {
            label: label.into(),
            visit_count,
            subtable,
        }
    }

    /// Parse an outlink report from the collaborator's raw JSON.
    ///
    /// `null` or an absent body is treated as an empty report. Rows with a
    /// non-numeric `nb_visits` or a missing `label`/`url` are rejected rather
    /// than coerced to zero.
    pub fn rows_from_json(body: &Value) -> EngineResult<Vec<VisitRecord>> {
        let rows = match body {
            Value::Null => return Ok(Vec::new()),
            Value::Array(rows) => rows,
            other => {
                return Err(EngineError::validation(
                    "outlinks",
                    format!("expected an array of rows, got {other}"),
                ))
            }
        };

        let mut records = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let label = field_str(row, "label", i)?;
            let visit_count = match row.get("nb_visits") {
                Some(v) => v.as_u64().ok_or_else(|| {
                    EngineError::validation(
                        "nb_visits",
                        format!("row {i}: expected a non-negative integer, got {v}"),
                    )
                })?,
                None => 0,
            };

            let mut subtable = Vec::new();
            if let Some(sub) = row.get("subtable") {
                let entries = sub.as_array().ok_or_else(|| {
                    EngineError::validation("subtable", format!("row {i}: expected an array"))
                })?;
                for entry in entries {
                    subtable.push(OutlinkEntry {
                        label: field_str(entry, "label", i)?,
                        url: field_str(entry, "url", i)?,
                        visit_count: field_count(entry, "nb_visits", i)?,
                    });
                }
            }

            records.push(VisitRecord {
                label,
                visit_count,
                subtable,
            });
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::VisitRecord;
    use serde_json::json;

    #[test]
    fn test_rows_from_json_null_is_empty() {
        let records = VisitRecord::rows_from_json(&serde_json::Value::Null).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_rows_from_json_parses_subtable() {
        let body = json!([
            {
                "label": "solr.bccampus.ca:8001",
                "nb_visits": 12,
                "subtable": [
                    { "label": "/file/abc123", "url": "https://solr/file/abc123", "nb_visits": 7 },
                    { "label": "/file/def456", "url": "https://solr/file/def456", "nb_visits": 5 }
                ]
            }
        ]);
        let records = VisitRecord::rows_from_json(&body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label, "solr.bccampus.ca:8001");
        assert_eq!(records[0].visit_count, 12);
        assert_eq!(records[0].subtable.len(), 2);
        assert_eq!(records[0].subtable[1].visit_count, 5);
    }

    #[test]
    fn test_rows_from_json_rejects_non_numeric_count() {
        let body = json!([
            {
                "label": "solr.bccampus.ca:8001",
                "subtable": [
                    { "label": "/file/abc", "url": "https://solr/file/abc", "nb_visits": "seven" }
                ]
            }
        ]);
        let err = VisitRecord::rows_from_json(&body).unwrap_err();
        assert!(err.to_string().contains("nb_visits"));
    }

    #[test]
    fn test_rows_from_json_rejects_missing_url() {
        let body = json!([
            {
                "label": "solr.bccampus.ca:8001",
                "subtable": [ { "label": "/file/abc", "nb_visits": 3 } ]
            }
        ]);
        let err = VisitRecord::rows_from_json(&body).unwrap_err();
        assert!(err.to_string().contains("url"));
    }

    #[test]
    fn test_rows_from_json_rejects_non_array_body() {
        let body = json!({ "label": "not a list" });
        assert!(VisitRecord::rows_from_json(&body).is_err());
    }

    #[test]
    fn test_record_new_sums_subtable() {
        let record = VisitRecord::new(
            "site",
            vec![
                super::OutlinkEntry {
                    label: "a".into(),
                    url: "https://x/a".into(),
                    visit_count: 2,
                },
                super::OutlinkEntry {
                    label: "b".into(),
                    url: "https://x/b".into(),
                    visit_count: 3,
                },
            ],
        );
        assert_eq!(record.visit_count, 5);
    }
}
