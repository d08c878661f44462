//! Collaborator endpoint configuration.
//!
//! The engine computations take no configuration at all; everything here is
//! plumbing for whichever collaborator performs the actual network fetches.
//! Endpoints that the original tool read from the environment at call time are
//! gathered into one explicit, constructable value instead.

use serde::Deserialize;
use std::env;

use crate::error::{EngineError, EngineResult};

/// Default label of the analytics site/table holding resource outlinks.
pub const DEFAULT_OUTLINK_SITE_LABEL: &str = "solr.bccampus.ca:8001";

/// Configuration for the analytics and catalogue collaborators.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Base URL of the Piwik-style analytics service.
    pub analytics_url: String,
    /// Numeric analytics site id to query.
    pub analytics_site_id: i64,
    /// API token for the analytics service.
    pub analytics_token: String,
    /// Base URL of the catalogue service supplying book attachments.
    pub catalogue_url: String,
    /// Label of the outlink site/table to correlate against.
    #[serde(default = "default_outlink_site_label")]
    pub outlink_site_label: String,
    /// Start of the reporting date range, `YYYY-MM-DD`.
    pub range_start: String,
}

fn default_outlink_site_label() -> String {
    DEFAULT_OUTLINK_SITE_LABEL.to_string()
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `ANALYTICS_URL` (required): analytics service base URL
    /// - `ANALYTICS_SITE_ID` (required): numeric site id
    /// - `ANALYTICS_TOKEN` (required): analytics API token
    /// - `CATALOGUE_URL` (required): catalogue service base URL
    /// - `OUTLINK_SITE_LABEL` (optional): outlink table label,
    ///   defaults to [`DEFAULT_OUTLINK_SITE_LABEL`]
    /// - `RANGE_START` (required): reporting range start, `YYYY-MM-DD`
    ///
    /// # Errors
    /// Returns a configuration error if a required variable is not set or
    /// the site id is not numeric.
    pub fn from_env() -> EngineResult<Self> {
        let analytics_url = env::var("ANALYTICS_URL")
            .map_err(|_| EngineError::configuration("ANALYTICS_URL environment variable not set"))?;
        let analytics_site_id = env::var("ANALYTICS_SITE_ID")
            .map_err(|_| {
                EngineError::configuration("ANALYTICS_SITE_ID environment variable not set")
            })?
            .parse()
            .map_err(|_| EngineError::configuration("ANALYTICS_SITE_ID must be numeric"))?;
        let analytics_token = env::var("ANALYTICS_TOKEN").map_err(|_| {
            EngineError::configuration("ANALYTICS_TOKEN environment variable not set")
        })?;
        let catalogue_url = env::var("CATALOGUE_URL")
            .map_err(|_| EngineError::configuration("CATALOGUE_URL environment variable not set"))?;
        let outlink_site_label =
            env::var("OUTLINK_SITE_LABEL").unwrap_or_else(|_| default_outlink_site_label());
        let range_start = env::var("RANGE_START")
            .map_err(|_| EngineError::configuration("RANGE_START environment variable not set"))?;

        Ok(Self {
            analytics_url,
            analytics_site_id,
            analytics_token,
            catalogue_url,
            outlink_site_label,
            range_start,
        })
    }

    /// Parse configuration from a TOML document.
    pub fn from_toml_str(doc: &str) -> EngineResult<Self> {
        toml::from_str(doc).map_err(|e| EngineError::configuration(e.to_string()))
    }
}
