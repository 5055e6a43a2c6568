//! # Spellgram
//!
//! Spelling and keyword query suggestions on top of an inverted-index
//! search backend.
//!
//! ## Features
//!
//! - Positional character n-grams for dictionary words and query tokens
//! - Batched dictionary indexing with optional commits
//! - Candidate re-ranking by string similarity and word weight
//! - Phrase collation of per-token corrections
//! - Pluggable backends, with an in-memory one included
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use spellgram::analysis::AnalyzerTokenizer;
//! use spellgram::backend::{IndexBackend, MemoryBackend};
//! use spellgram::spelling::{DictionaryIndexer, QuerySuggester};
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("en_US.txt"), "the 5\ncat 3\n").unwrap();
//! std::fs::write(dir.path().join("custom_en_US.txt"), "").unwrap();
//!
//! let backend = Arc::new(MemoryBackend::new());
//! let summary = DictionaryIndexer::new(backend.clone(), dir.path())
//!     .index_dictionaries(&["en_US"])
//!     .unwrap();
//! assert_eq!(summary.entries_indexed(), 2);
//! backend.commit().unwrap();
//!
//! let suggester = QuerySuggester::new(backend, Arc::new(AnalyzerTokenizer::default()));
//!
//! assert_eq!(suggester.spell_check_keywords("teh cat", "en_US").unwrap(), "the cat");
//! ```

pub mod analysis;
pub mod backend;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod ngram;
pub mod spelling;

pub mod prelude {
    pub use crate::analysis::{AnalyzerTokenizer, TextTokenizer};
    pub use crate::backend::{IndexBackend, MemoryBackend};
    pub use crate::config::SpellCheckConfig;
    pub use crate::error::{Result, SpellgramError};
    pub use crate::spelling::{DictionaryIndexer, QuerySuggester};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
