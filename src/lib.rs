//! # otb-analytics
//!
//! Usage-analytics and adoption-prediction engine for an open-textbook
//! catalogue.
//!
//! Given raw visit/outlink rows for a resource collection, the engine
//! aggregates per-resource download counts, derives a time-normalized
//! relative frequency of access, and projects probability bands for how many
//! real-world adoptions those downloads represent and how often future
//! adoptions are likely to occur.
//!
//! ## Architecture
//!
//! The crate is organized into a few logical modules:
//!
//! - [`models`]: immutable value objects flowing through the pipeline
//! - [`services`]: the pipeline stages (matcher, aggregator, frequency,
//!   predictor) and report assembly
//! - [`providers`]: trait seams for the analytics and catalogue
//!   collaborators, plus in-memory implementations for tests
//! - [`config`]: endpoint configuration for whichever collaborator fetches
//! - [`error`]: crate-wide error type and result alias
//!
//! ## Data flow
//!
//! ```text
//! raw outlink rows + reference start date
//!     │
//!     ▼
//! matcher ── per-resource visit map
//!     │
//!     ▼
//! aggregator ── download total + breakdown rows
//!     │
//!     ▼
//! frequency ── downloads per pseudo-day
//!     │
//!     ▼
//! predictor ── adoption band + future-interval band
//!     │
//!     ▼
//! ReportModel (handed to the rendering collaborator)
//! ```
//!
//! Every stage is a pure function over immutable inputs: no I/O, no shared
//! mutable state, no cross-request retention. Concurrent callers may run
//! independent reports in parallel without coordination.
//!
//! The numbers are a deliberately rough heuristic (fixed download-to-adoption
//! ratios), not a calibrated statistical model.

pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod services;

pub use error::{EngineError, EngineResult};
