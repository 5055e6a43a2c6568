//! Loads dictionary files into the backend as spellcheck documents.
//!
//! A dictionary is a text file with one `term [weight]` entry per line.
//! Each entry becomes a document with id `spellcheck_{term}_{locale}`, the
//! fields `spellcheck`, `word`, `weight` and `locale`, and the term's
//! n-grams. Documents are sent to the backend in batches of `batch_size`
//! entries.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ahash::AHashMap;

use crate::backend::{FieldFilter, IndexBackend};
use crate::document::IndexableDocument;
use crate::error::{Result, SpellgramError};
use crate::ngram::{NGramBuilder, NGramLengths};
use crate::spelling::{
    LOCALE_FIELD, SPELLCHECK_FIELD, WEIGHT_FIELD, WORD_FIELD, spellcheck_document_id,
};

/// Statistics for one successfully indexed dictionary file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileStats {
    /// Non-blank lines read.
    pub entries: usize,
    /// Number of `add` calls sent to the backend.
    pub batches: usize,
    /// Entries whose weight could not be parsed.
    pub malformed_weights: usize,
}

/// The result of indexing one dictionary file.
#[derive(Debug)]
pub struct FileOutcome {
    pub locale: String,
    pub path: PathBuf,
    pub result: Result<FileStats>,
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcome of a full [`DictionaryIndexer::index_dictionaries`] run.
#[derive(Debug, Default)]
pub struct IndexSummary {
    pub files: Vec<FileOutcome>,
}

impl IndexSummary {
    /// Total entries indexed across all successful files.
    pub fn entries_indexed(&self) -> usize {
        self.files
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok())
            .map(|stats| stats.entries)
            .sum()
    }

    /// Files that failed.
    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|outcome| !outcome.is_ok())
    }

    /// The first failure as an error, if any file failed.
    pub fn into_result(self) -> Result<usize> {
        let entries = self.entries_indexed();
        match self.files.into_iter().find_map(|outcome| outcome.result.err()) {
            Some(error) => Err(error),
            None => Ok(entries),
        }
    }
}

/// Writes dictionaries into an [`IndexBackend`].
#[derive(Debug)]
pub struct DictionaryIndexer {
    backend: Arc<dyn IndexBackend>,
    dictionary_dir: PathBuf,
    lengths: NGramLengths,
    batch_size: usize,
    commit: bool,
}

impl DictionaryIndexer {
    pub const DEFAULT_BATCH_SIZE: usize = 10000;

    pub fn new<P: Into<PathBuf>>(backend: Arc<dyn IndexBackend>, dictionary_dir: P) -> Self {
        DictionaryIndexer {
            backend,
            dictionary_dir: dictionary_dir.into(),
            lengths: NGramLengths::default(),
            batch_size: Self::DEFAULT_BATCH_SIZE,
            commit: false,
        }
    }

    /// Set the batch size. Zero is treated as one.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Commit after every flush and after deletes.
    pub fn with_commit(mut self, commit: bool) -> Self {
        self.commit = commit;
        self
    }

    pub fn with_ngram_lengths(mut self, lengths: NGramLengths) -> Self {
        self.lengths = lengths;
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Path of the main dictionary for a locale.
    pub fn dictionary_path(&self, locale: &str) -> PathBuf {
        self.dictionary_dir.join(format!("{locale}.txt"))
    }

    /// Path of the custom dictionary for a locale.
    pub fn custom_dictionary_path(&self, locale: &str) -> PathBuf {
        self.dictionary_dir.join(format!("custom_{locale}.txt"))
    }

    /// Remove every spellcheck document.
    pub fn delete_documents(&self) -> Result<()> {
        self.backend
            .delete_by_query(&[FieldFilter::new(SPELLCHECK_FIELD, "true")])
            .map_err(|e| SpellgramError::backend_with_source("Unable to delete documents", e))?;

        if self.commit {
            self.backend.commit().map_err(|e| {
                SpellgramError::backend_with_source("Unable to delete documents", e)
            })?;
        }

        Ok(())
    }

    /// Replace all spellcheck documents with the dictionaries of `locales`.
    ///
    /// Only a failing delete aborts; file failures are collected in the
    /// summary.
    pub fn index_dictionaries<S: AsRef<str>>(&self, locales: &[S]) -> Result<IndexSummary> {
        self.delete_documents()?;

        let mut summary = IndexSummary::default();
        for locale in locales {
            summary.files.extend(self.index_dictionary(locale.as_ref()));
        }

        log::info!(
            "Indexed {} dictionary entries from {} files ({} failed)",
            summary.entries_indexed(),
            summary.files.len(),
            summary.failures().count()
        );

        Ok(summary)
    }

    /// Index the main and the custom dictionary of one locale.
    pub fn index_dictionary(&self, locale: &str) -> Vec<FileOutcome> {
        [self.dictionary_path(locale), self.custom_dictionary_path(locale)]
            .into_iter()
            .map(|path| {
                let result = self.index_file(&path, locale);
                if let Err(e) = &result {
                    log::error!("{e}");
                }
                FileOutcome {
                    locale: locale.to_string(),
                    path,
                    result,
                }
            })
            .collect()
    }

    /// Index one dictionary file.
    pub fn index_file(&self, path: &Path, locale: &str) -> Result<FileStats> {
        self.read_file(path, locale).map_err(|e| {
            log::debug!("Unable to index dictionary {}: {e}", path.display());
            SpellgramError::dictionary_file(path, e)
        })
    }

    fn read_file(&self, path: &Path, locale: &str) -> Result<FileStats> {
        let reader = BufReader::new(File::open(path)?);
        let mut stats = FileStats::default();
        let mut batch = Batch::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (term, weight) = match parse_entry(line) {
                Ok(entry) => entry,
                Err(term) => {
                    log::warn!(
                        "Invalid weight for term: {term} ({}:{})",
                        path.display(),
                        index + 1
                    );
                    stats.malformed_weights += 1;
                    (term, 0)
                }
            };

            batch.push(self.build_document(term, weight, locale));
            stats.entries += 1;

            if batch.entries == self.batch_size {
                self.flush(&mut batch)?;
                stats.batches += 1;
            }
        }

        if batch.entries > 0 {
            self.flush(&mut batch)?;
            stats.batches += 1;
        }

        log::debug!(
            "Indexed {} entries for {locale} from {}",
            stats.entries,
            path.display()
        );

        Ok(stats)
    }

    fn build_document(&self, term: &str, weight: i32, locale: &str) -> IndexableDocument {
        let grams = NGramBuilder::build_with(term, &self.lengths);

        IndexableDocument::builder(spellcheck_document_id(term, locale))
            .add_boolean(SPELLCHECK_FIELD, true)
            .add_text(WORD_FIELD, term)
            .add_text(WEIGHT_FIELD, weight.to_string())
            .add_text(LOCALE_FIELD, locale)
            .add_ngrams(&grams)
            .build()
    }

    fn flush(&self, batch: &mut Batch) -> Result<()> {
        self.backend.add(batch.take())?;
        if self.commit {
            self.backend.commit()?;
        }
        Ok(())
    }
}

/// Documents waiting to be sent, unique by id.
#[derive(Default)]
struct Batch {
    documents: Vec<IndexableDocument>,
    positions: AHashMap<String, usize>,
    entries: usize,
}

impl Batch {
    fn push(&mut self, document: IndexableDocument) {
        self.entries += 1;
        match self.positions.get(document.id()) {
            Some(&position) => self.documents[position] = document,
            None => {
                self.positions
                    .insert(document.id().to_string(), self.documents.len());
                self.documents.push(document);
            }
        }
    }

    fn take(&mut self) -> Vec<IndexableDocument> {
        self.positions.clear();
        self.entries = 0;
        std::mem::take(&mut self.documents)
    }
}

/// Split a line into term and weight. A weight that is not a 32-bit signed
/// integer yields `Err(term)`.
fn parse_entry(line: &str) -> std::result::Result<(&str, i32), &str> {
    let mut parts = line.split_whitespace();
    // Non-blank lines always have a first part
    let term = parts.next().unwrap_or(line);
    match parts.next() {
        None => Ok((term, 0)),
        Some(weight) => weight.parse().map(|w| (term, w)).map_err(|_| term),
    }
}
