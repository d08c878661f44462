//! Resource identifiers and catalogue attachments.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Opaque identifier of one downloadable attachment/resource.
///
/// In practice a UUID string, but the engine never inspects its structure
/// beyond using it as a match key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Per-resource visit counts keyed by [`ResourceId`].
///
/// Only matched resources appear as keys; an absent key means zero visits and
/// is defaulted by the aggregation step.
pub type ResourceVisitMap = HashMap<ResourceId, u64>;

/// One downloadable attachment of a catalogue book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub uuid: ResourceId,
    pub description: String,
}

impl Attachment {
    pub fn new(uuid: impl Into<ResourceId>, description: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            description: description.into(),
        }
    }
}
