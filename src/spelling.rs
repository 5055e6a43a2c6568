//! N-gram spell checking on top of an [`IndexBackend`](crate::backend::IndexBackend).
//!
//! Dictionaries are indexed as one document per word by
//! [`indexer::DictionaryIndexer`]. At query time each keyword is decomposed
//! into n-grams, candidate words are fetched from the backend and re-ranked
//! by [`suggest::QuerySuggester`] with a [`distance::StringDistance`]. The
//! best suggestion per token is assembled back into a phrase by a
//! [`collator::Collator`].

pub mod collator;
pub mod distance;
pub mod indexer;
pub mod query_builder;
pub mod suggest;

pub use collator::{Collator, PhraseCollator};
pub use distance::{DamerauLevenshteinDistance, DistanceKind, LevenshteinDistance, StringDistance};
pub use indexer::{DictionaryIndexer, FileOutcome, FileStats, IndexSummary};
pub use query_builder::NGramQueryBuilder;
pub use suggest::{Candidate, QuerySuggester, SuggestionMap};

/// Field marking a document as a spellcheck entry.
pub const SPELLCHECK_FIELD: &str = "spellcheck";
/// Field holding the dictionary word.
pub const WORD_FIELD: &str = "word";
/// Field holding the word weight.
pub const WEIGHT_FIELD: &str = "weight";
/// Field holding the locale of the entry.
pub const LOCALE_FIELD: &str = "locale";
/// Field holding indexed keyword queries.
pub const KEYWORD_SEARCH_FIELD: &str = "keywordSearch";
/// Field holding the owning company of a keyword query.
pub const COMPANY_ID_FIELD: &str = "companyId";

/// Document id of a dictionary entry.
pub fn spellcheck_document_id(term: &str, locale: &str) -> String {
    format!("spellcheck_{term}_{locale}")
}
