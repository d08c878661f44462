//! Collaborator seams for the data the engine consumes.
//!
//! The engine performs no I/O of its own: whichever application embeds it
//! supplies an analytics backend and a catalogue backend behind these traits,
//! following the same trait-plus-local-implementation pattern as a swappable
//! repository layer.

pub mod analytics;
pub mod catalogue;
pub mod local;

pub use analytics::AnalyticsProvider;
pub use catalogue::CatalogueProvider;
pub use local::{LocalAnalytics, LocalCatalogue};
