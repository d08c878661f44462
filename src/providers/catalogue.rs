//! Catalogue collaborator trait.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::error::EngineResult;
use crate::models::Attachment;

/// The catalogue backend holding book metadata.
///
/// The engine does not validate what the catalogue supplies beyond using the
/// attachment identifiers as match keys.
#[async_trait]
pub trait CatalogueProvider: Send + Sync {
    /// Downloadable attachments of one book.
    ///
    /// Returns a not-found error when the book does not exist; an existing
    /// book with no attachments yields an empty vector.
    async fn attachments(&self, book_id: &str) -> EngineResult<Vec<Attachment>>;

    /// Site paths of catalogue books hosted on the book platform.
    async fn hosted_book_paths(&self) -> EngineResult<HashSet<String>>;

    /// Total number of books in the catalogue.
    async fn book_count(&self) -> EngineResult<u64>;
}
