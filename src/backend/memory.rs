//! In-memory index backend.
//!
//! Documents live in a map keyed by id. Adds and deletes are queued and only
//! applied by [`IndexBackend::commit`], so readers keep seeing the last
//! committed state, like a real search server between commits.

use std::cmp::Ordering as CmpOrdering;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::{Mutex, RwLock};

use crate::backend::IndexBackend;
use crate::backend::query::{FieldFilter, QueryClause, RequestMethod, SearchQuery};
use crate::document::{IndexableDocument, StoredDocument};
use crate::error::Result;

#[derive(Debug)]
enum PendingOp {
    Add(Vec<StoredDocument>),
    Delete(Vec<FieldFilter>),
}

#[derive(Debug, Default)]
struct MemoryState {
    committed: BTreeMap<String, StoredDocument>,
    pending: Vec<PendingOp>,
}

/// An in-memory [`IndexBackend`].
///
/// Term clauses score their boost when the field holds the exact value,
/// phrase clauses score 1.0 when a field value contains the phrase
/// (case-insensitively). With at least one clause, documents scoring zero
/// are not returned. Results are ordered by score, then id.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    state: RwLock<MemoryState>,
    query_log: Mutex<Vec<(SearchQuery, RequestMethod)>>,
    add_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    commit_calls: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed (visible) documents.
    pub fn len(&self) -> usize {
        self.state.read().committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of queued, uncommitted operations.
    pub fn pending_operations(&self) -> usize {
        self.state.read().pending.len()
    }

    /// A committed document by id.
    pub fn document(&self, id: &str) -> Option<StoredDocument> {
        self.state.read().committed.get(id).cloned()
    }

    pub fn add_calls(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn commit_calls(&self) -> usize {
        self.commit_calls.load(Ordering::SeqCst)
    }

    /// Every query received so far, with the method it was sent with.
    pub fn query_log(&self) -> Vec<(SearchQuery, RequestMethod)> {
        self.query_log.lock().clone()
    }

    fn matches_filters(document: &StoredDocument, filters: &[FieldFilter]) -> bool {
        filters.iter().all(|filter| {
            document
                .values(&filter.field)
                .iter()
                .any(|value| value == &filter.value)
        })
    }

    fn score(document: &StoredDocument, clauses: &[QueryClause]) -> f32 {
        clauses
            .iter()
            .map(|clause| match clause {
                QueryClause::Term { field, value, boost } => {
                    if document.values(field).iter().any(|v| v == value) {
                        *boost
                    } else {
                        0.0
                    }
                }
                QueryClause::Phrase { field, text } => {
                    let phrase = text.to_lowercase();
                    if document
                        .values(field)
                        .iter()
                        .any(|v| v.to_lowercase().contains(&phrase))
                    {
                        1.0
                    } else {
                        0.0
                    }
                }
            })
            .sum()
    }
}

impl IndexBackend for MemoryBackend {
    fn query(&self, query: &SearchQuery, method: RequestMethod) -> Result<Vec<StoredDocument>> {
        self.query_log.lock().push((query.clone(), method));

        let state = self.state.read();
        let mut hits: Vec<(f32, &StoredDocument)> = state
            .committed
            .values()
            .filter(|document| Self::matches_filters(document, &query.filters))
            .map(|document| (Self::score(document, &query.clauses), document))
            .filter(|(score, _)| query.clauses.is_empty() || *score > 0.0)
            .collect();

        hits.sort_by(|(score_a, doc_a), (score_b, doc_b)| {
            score_b
                .partial_cmp(score_a)
                .unwrap_or(CmpOrdering::Equal)
                .then_with(|| doc_a.id.cmp(&doc_b.id))
        });

        Ok(hits
            .into_iter()
            .take(query.rows)
            .map(|(_, document)| document.clone())
            .collect())
    }

    fn add(&self, documents: Vec<IndexableDocument>) -> Result<()> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        let stored = documents.iter().map(StoredDocument::from).collect();
        self.state.write().pending.push(PendingOp::Add(stored));
        Ok(())
    }

    fn delete_by_query(&self, filters: &[FieldFilter]) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.state
            .write()
            .pending
            .push(PendingOp::Delete(filters.to_vec()));
        Ok(())
    }

    fn commit(&self) -> Result<()> {
        self.commit_calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.write();
        let pending = std::mem::take(&mut state.pending);

        for op in pending {
            match op {
                PendingOp::Add(documents) => {
                    for document in documents {
                        state.committed.insert(document.id.clone(), document);
                    }
                }
                PendingOp::Delete(filters) => {
                    state
                        .committed
                        .retain(|_, document| !Self::matches_filters(document, &filters));
                }
            }
        }

        Ok(())
    }
}
