//! Service layer: the analytics pipeline stages and report assembly.
//!
//! Every stage is a pure function over immutable inputs; the only async code
//! is the orchestrator in [`reports`], which fetches from the provider
//! collaborators before running the pipeline.

pub mod aggregate;

pub mod frequency;

pub mod matcher;

pub mod predictor;

pub mod reports;

pub use aggregate::{aggregate, sum_events, sum_resource_visits};
pub use frequency::relative_frequency;
pub use matcher::{correlate_outlinks, correlate_outlinks_summed, MatchMode};
pub use predictor::predict;
pub use reports::{book_report, build_report, collection_summary, site_report, visit_share};
