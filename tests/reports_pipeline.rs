//! End-to-end pipeline tests over the public API, using only materialized
//! inputs (no providers involved).

use chrono::{Duration, TimeZone, Utc};
use otb_analytics::models::{
    Attachment, EventCount, ObservationWindow, OutlinkEntry, VisitRecord,
};
use otb_analytics::services::{
    aggregate, book_report, correlate_outlinks, predict, relative_frequency, site_report,
};

const SITE: &str = "solr.bccampus.ca:8001";

fn window_of_days(days: i64) -> ObservationWindow {
    let start = Utc.with_ymd_and_hms(2015, 10, 1, 0, 0, 0).unwrap();
    ObservationWindow::new(start, start + Duration::seconds(days * 84_600))
}

fn outlink(url: &str, visits: u64) -> OutlinkEntry {
    OutlinkEntry {
        label: url.to_string(),
        url: url.to_string(),
        visit_count: visits,
    }
}

#[test]
fn staged_pipeline_matches_assembled_report() {
    let records = vec![VisitRecord::new(
        SITE,
        vec![
            outlink("https://solr/bk9000/res001", 350),
            outlink("https://solr/bk9000/res002", 650),
        ],
    )];
    let attachments = vec![
        Attachment::new("res001", "PDF"),
        Attachment::new("res002", "EPUB"),
    ];
    let window = window_of_days(365);

    // Run the stages by hand.
    let visits = correlate_outlinks(&records, SITE, "bk9000");
    let (total, _) = aggregate(visits.clone());
    let frequency = relative_frequency(total, &window);
    let prediction = predict(total as f64, frequency.downloads_per_day);

    // And compare against the assembled report.
    let model = book_report(&records, SITE, "bk9000", &attachments, &window);
    assert_eq!(model.total_downloads, total);
    assert_eq!(model.frequency, frequency);
    assert_eq!(model.prediction, prediction);
    assert_eq!(model.per_resource.as_ref(), Some(&visits));
}

#[test]
fn worked_example_from_domain_description() {
    let events = vec![EventCount::new("textbook.pdf", 1000)];
    let model = site_report(&events, &window_of_days(365));

    assert_eq!(model.total_downloads, 1000);
    assert_eq!(model.frequency.elapsed_days, 365.0);
    assert_eq!(model.frequency.downloads_per_day, 2.74);
    assert_eq!(model.prediction.adoption.low, 20.0);
    assert_eq!(model.prediction.adoption.high, 100.0);
    assert_eq!(model.prediction.future_interval.low, 18.25);
    assert_eq!(model.prediction.future_interval.high, 3.65);
}

#[test]
fn zero_downloads_yield_all_zero_report() {
    let model = site_report(&[], &window_of_days(365));
    assert_eq!(model.total_downloads, 0);
    assert_eq!(model.frequency.downloads_per_day, 0.0);
    assert_eq!(model.prediction.adoption.low, 0.0);
    assert_eq!(model.prediction.adoption.high, 0.0);
    assert_eq!(model.prediction.future_interval.low, 0.0);
    assert_eq!(model.prediction.future_interval.high, 0.0);
}

#[test]
fn band_ordering_holds_for_positive_totals() {
    for total in [1u64, 10, 137, 1000, 25_000] {
        let events = vec![EventCount::new("file", total)];
        let model = site_report(&events, &window_of_days(200));
        let p = &model.prediction;
        assert!(p.adoption.low <= p.adoption.high, "total={total}");
        assert!(
            p.future_interval.high <= p.future_interval.low,
            "total={total}"
        );
    }
}

#[test]
fn report_serializes_with_kind_tag() {
    let model = site_report(&[], &window_of_days(1));
    let report = otb_analytics::models::Report::SingleSite { site_id: 7, model };
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["kind"], "single_site");
    assert_eq!(json["site_id"], 7);
}
