//! The index backend seam.
//!
//! Spell checking needs four operations from an inverted-index service:
//! add documents, query them, delete by filter and commit. They are modelled
//! by the [`IndexBackend`] trait so a remote search server client can be
//! plugged in; [`memory::MemoryBackend`] is an in-process implementation
//! used by the CLI and the tests.
//!
//! Implementations must be safe to share between concurrent requests.
//! Mutations become visible to queries only after [`IndexBackend::commit`].

use std::fmt::Debug;
use std::sync::Arc;

use crate::document::{IndexableDocument, StoredDocument};
use crate::error::Result;

pub mod memory;
pub mod query;

pub use memory::MemoryBackend;
pub use query::{FieldFilter, QueryClause, RequestMethod, SearchQuery};

/// A trait for search backends that store and query documents.
pub trait IndexBackend: Send + Sync + Debug {
    /// Execute a query and return matching documents, best first.
    fn query(&self, query: &SearchQuery, method: RequestMethod) -> Result<Vec<StoredDocument>>;

    /// Add (or replace, by id) a batch of documents.
    fn add(&self, documents: Vec<IndexableDocument>) -> Result<()>;

    /// Delete every document matching all of the given filters.
    fn delete_by_query(&self, filters: &[FieldFilter]) -> Result<()>;

    /// Make pending mutations visible to queries.
    fn commit(&self) -> Result<()>;
}

// Allow sharing one backend between the indexer and the suggester
impl<T: IndexBackend + ?Sized> IndexBackend for Arc<T> {
    fn query(&self, query: &SearchQuery, method: RequestMethod) -> Result<Vec<StoredDocument>> {
        self.as_ref().query(query, method)
    }

    fn add(&self, documents: Vec<IndexableDocument>) -> Result<()> {
        self.as_ref().add(documents)
    }

    fn delete_by_query(&self, filters: &[FieldFilter]) -> Result<()> {
        self.as_ref().delete_by_query(filters)
    }

    fn commit(&self) -> Result<()> {
        self.as_ref().commit()
    }
}
