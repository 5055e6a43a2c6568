//! Spelling and keyword query suggestions.
//!
//! For each token the suggester sends an n-gram query restricted to the
//! spellcheck documents of one locale, then re-ranks the returned words:
//!
//! * a word equal to the token (ignoring case) ends the scan and becomes
//!   the only candidate, scored with its stored weight;
//! * any other word whose similarity to the token is above the threshold
//!   is a candidate scored `weight + similarity`;
//! * when nothing qualifies the token itself is returned with score 0.
//!
//! Candidates are ranked by score, highest first, ties broken by term.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::TextTokenizer;
use crate::backend::{FieldFilter, IndexBackend, RequestMethod, SearchQuery};
use crate::config::SpellCheckConfig;
use crate::document::StoredDocument;
use crate::error::{Result, SpellgramError};
use crate::spelling::collator::{Collator, PhraseCollator};
use crate::spelling::distance::{DamerauLevenshteinDistance, StringDistance};
use crate::spelling::query_builder::NGramQueryBuilder;
use crate::spelling::{
    COMPANY_ID_FIELD, KEYWORD_SEARCH_FIELD, LOCALE_FIELD, SPELLCHECK_FIELD, WEIGHT_FIELD,
    WORD_FIELD,
};

/// Ranked suggestions per original token.
pub type SuggestionMap = BTreeMap<String, Vec<String>>;

/// A suggested term and its score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub term: String,
    pub score: f32,
}

impl Candidate {
    pub fn new<S: Into<String>>(term: S, score: f32) -> Self {
        Candidate {
            term: term.into(),
            score,
        }
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher scores come first
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.term.cmp(&other.term))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Spelling corrections and keyword query suggestions over an
/// [`IndexBackend`].
pub struct QuerySuggester {
    backend: Arc<dyn IndexBackend>,
    tokenizer: Arc<dyn TextTokenizer>,
    query_builder: NGramQueryBuilder,
    distance: Box<dyn StringDistance>,
    collator: Box<dyn Collator>,
    threshold: f32,
    suggester_url: String,
}

impl QuerySuggester {
    pub const DEFAULT_THRESHOLD: f32 = 0.5;

    pub fn new(backend: Arc<dyn IndexBackend>, tokenizer: Arc<dyn TextTokenizer>) -> Self {
        QuerySuggester {
            backend,
            tokenizer,
            query_builder: NGramQueryBuilder::default(),
            distance: Box::new(DamerauLevenshteinDistance),
            collator: Box::new(PhraseCollator::default()),
            threshold: Self::DEFAULT_THRESHOLD,
            suggester_url: SearchQuery::DEFAULT_HANDLER.to_string(),
        }
    }

    /// Build a suggester with every knob taken from `config`.
    pub fn from_config(
        backend: Arc<dyn IndexBackend>,
        tokenizer: Arc<dyn TextTokenizer>,
        config: &SpellCheckConfig,
    ) -> Self {
        let query_builder = NGramQueryBuilder::new(config.ngram_lengths.clone())
            .with_boosts(config.start_boost, config.end_boost)
            .with_rows(config.candidate_rows);

        Self::new(backend, tokenizer)
            .with_query_builder(query_builder)
            .with_distance(config.distance.build())
            .with_collator(Box::new(PhraseCollator::new(config.separator.clone())))
            .with_threshold(config.threshold)
            .with_suggester_url(config.suggester_url.clone())
    }

    pub fn with_query_builder(mut self, query_builder: NGramQueryBuilder) -> Self {
        self.query_builder = query_builder;
        self
    }

    pub fn with_distance(mut self, distance: Box<dyn StringDistance>) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_collator(mut self, collator: Box<dyn Collator>) -> Self {
        self.collator = collator;
        self
    }

    /// Minimum similarity (exclusive) for an approximate candidate.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Request handler used for keyword query suggestions.
    pub fn with_suggester_url<S: Into<String>>(mut self, url: S) -> Self {
        self.suggester_url = url.into();
        self
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// The corrected phrase for `keywords`, one best suggestion per token.
    pub fn spell_check_keywords(&self, keywords: &str, locale: &str) -> Result<String> {
        let tokens = self.tokenize_keywords(keywords, locale)?;
        let suggestions = self.suggest_tokens(&tokens, locale, 1)?;
        Ok(self.collator.collate(&suggestions, &tokens))
    }

    /// Up to `max` ranked suggestions for every token of `keywords`.
    pub fn spell_check_keywords_map(
        &self,
        keywords: &str,
        locale: &str,
        max: usize,
    ) -> Result<SuggestionMap> {
        let tokens = self.tokenize_keywords(keywords, locale)?;
        self.suggest_tokens(&tokens, locale, max)
    }

    fn suggest_tokens(&self, tokens: &[String], locale: &str, max: usize) -> Result<SuggestionMap> {
        let mut suggestions = SuggestionMap::new();
        for token in tokens {
            if suggestions.contains_key(token) {
                continue;
            }
            let similars = self.suggest_token_similars(locale, max, token)?;
            suggestions.insert(token.clone(), similars);
        }
        Ok(suggestions)
    }

    /// Up to `max` terms similar to `token`, best first.
    pub fn suggest_token_similars(
        &self,
        locale: &str,
        max: usize,
        token: &str,
    ) -> Result<Vec<String>> {
        Ok(self
            .rank_token_similars(locale, token)?
            .into_iter()
            .take(max)
            .map(|candidate| candidate.term)
            .collect())
    }

    /// All candidates for `token`, sorted.
    pub fn rank_token_similars(&self, locale: &str, token: &str) -> Result<Vec<Candidate>> {
        let mut query = self.query_builder.build(token);
        query.add_filter(FieldFilter::new(SPELLCHECK_FIELD, "true"));
        query.add_filter(FieldFilter::new(LOCALE_FIELD, locale));

        let documents = self.execute(&query, RequestMethod::Post)?;
        let mut candidates = self.score_candidates(token, &documents)?;
        candidates.sort();

        log::trace!("Candidates for {token} ({locale}): {candidates:?}");

        Ok(candidates)
    }

    fn score_candidates(&self, token: &str, documents: &[StoredDocument]) -> Result<Vec<Candidate>> {
        let mut scored: AHashMap<String, f32> = AHashMap::new();

        for document in documents {
            let (word, weight) = read_word(document)?;

            if word.to_lowercase() == token.to_lowercase() {
                return Ok(vec![Candidate::new(token, weight)]);
            }

            let distance = self.distance.distance(token, word);
            if distance > self.threshold {
                scored.insert(word.to_string(), weight + distance);
            }
        }

        if scored.is_empty() {
            return Ok(vec![Candidate::new(token, 0.0)]);
        }

        Ok(scored
            .into_iter()
            .map(|(term, score)| Candidate::new(term, score))
            .collect())
    }

    /// Previously indexed keyword queries containing the phrase `keywords`.
    pub fn suggest_keyword_queries(
        &self,
        company_id: i64,
        keywords: &str,
        max: usize,
    ) -> Result<Vec<String>> {
        let mut query = SearchQuery::new()
            .with_request_handler(self.suggester_url.clone())
            .with_rows(max);
        query.add_phrase(KEYWORD_SEARCH_FIELD, keywords);
        query.add_filter(FieldFilter::new(COMPANY_ID_FIELD, company_id.to_string()));

        let documents = self.execute(&query, RequestMethod::Get)?;

        Ok(documents
            .iter()
            .filter_map(|document| document.first_value(KEYWORD_SEARCH_FIELD))
            .map(str::to_string)
            .collect())
    }

    /// Split `keywords` into tokens with the rules of `locale`.
    pub fn tokenize_keywords(&self, keywords: &str, locale: &str) -> Result<Vec<String>> {
        self.tokenizer.tokenize(keywords, locale)
    }

    fn execute(&self, query: &SearchQuery, method: RequestMethod) -> Result<Vec<StoredDocument>> {
        self.backend.query(query, method).map_err(|e| {
            log::debug!("Unable to execute query {query}: {e}");
            SpellgramError::backend_with_source("Unable to execute query", e)
        })
    }
}

impl fmt::Debug for QuerySuggester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuerySuggester")
            .field("backend", &self.backend)
            .field("query_builder", &self.query_builder)
            .field("threshold", &self.threshold)
            .field("suggester_url", &self.suggester_url)
            .finish_non_exhaustive()
    }
}

fn read_word(document: &StoredDocument) -> Result<(&str, f32)> {
    let word = document.first_value(WORD_FIELD).ok_or_else(|| {
        SpellgramError::invalid_document(format!("{} has no {WORD_FIELD}", document.id))
    })?;
    let weight = document.first_value(WEIGHT_FIELD).ok_or_else(|| {
        SpellgramError::invalid_document(format!("{} has no {WEIGHT_FIELD}", document.id))
    })?;
    let weight = weight.trim().parse::<f32>().map_err(|_| {
        SpellgramError::invalid_document(format!("{} has invalid weight {weight}", document.id))
    })?;
    Ok((word, weight))
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;
    use crate::analysis::AnalyzerTokenizer;
    use crate::document::IndexableDocument;

    /// Returns the same documents, in order, for every query.
    #[derive(Debug, Default)]
    struct CannedBackend {
        documents: Vec<StoredDocument>,
        fail: bool,
        queries: Mutex<Vec<(SearchQuery, RequestMethod)>>,
    }

    impl CannedBackend {
        fn with_words(words: &[(&str, &str)]) -> Self {
            CannedBackend {
                documents: words
                    .iter()
                    .map(|(word, weight)| {
                        StoredDocument::new(format!("spellcheck_{word}_en_US"))
                            .with_value("word", *word)
                            .with_value("weight", *weight)
                    })
                    .collect(),
                ..Default::default()
            }
        }
    }

    impl IndexBackend for CannedBackend {
        fn query(&self, query: &SearchQuery, method: RequestMethod) -> Result<Vec<StoredDocument>> {
            self.queries.lock().push((query.clone(), method));
            if self.fail {
                return Err(SpellgramError::backend("connection refused"));
            }
            Ok(self.documents.clone())
        }

        fn add(&self, _documents: Vec<IndexableDocument>) -> Result<()> {
            Ok(())
        }

        fn delete_by_query(&self, _filters: &[FieldFilter]) -> Result<()> {
            Ok(())
        }

        fn commit(&self) -> Result<()> {
            Ok(())
        }
    }

    /// Reports the same similarity for every pair.
    struct FixedDistance(f32);

    impl StringDistance for FixedDistance {
        fn distance(&self, _a: &str, _b: &str) -> f32 {
            self.0
        }
    }

    fn suggester(backend: CannedBackend) -> (Arc<CannedBackend>, QuerySuggester) {
        let backend = Arc::new(backend);
        let suggester = QuerySuggester::new(backend.clone(), Arc::new(AnalyzerTokenizer::default()));
        (backend, suggester)
    }

    #[test]
    fn test_candidate_order() {
        let mut candidates = vec![
            Candidate::new("b", 1.0),
            Candidate::new("a", 1.0),
            Candidate::new("c", 3.0),
        ];
        candidates.sort();
        let terms: Vec<&str> = candidates.iter().map(|c| c.term.as_str()).collect();
        assert_eq!(terms, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_score_is_weight_plus_distance() {
        let (_, suggester) = suggester(CannedBackend::with_words(&[("the", "5")]));
        let suggester = suggester.with_distance(Box::new(FixedDistance(2.0)));

        let candidates = suggester.rank_token_similars("en_US", "teh").unwrap();
        assert_eq!(candidates, vec![Candidate::new("the", 7.0)]);
    }

    #[test]
    fn test_exact_match_short_circuits() {
        let (_, suggester) = suggester(CannedBackend::with_words(&[
            ("then", "50"),
            ("Cat", "3"),
            ("cart", "100"),
        ]));
        let suggester = suggester.with_distance(Box::new(FixedDistance(0.9)));

        let candidates = suggester.rank_token_similars("en_US", "cat").unwrap();
        assert_eq!(candidates, vec![Candidate::new("cat", 3.0)]);
    }

    #[test]
    fn test_threshold_is_exclusive_and_fallback() {
        let (_, suggester) = suggester(CannedBackend::with_words(&[("dog", "4")]));
        let suggester = suggester
            .with_distance(Box::new(FixedDistance(0.5)))
            .with_threshold(0.5);

        assert_eq!(
            suggester.suggest_token_similars("en_US", 5, "xyz").unwrap(),
            vec!["xyz"]
        );
        assert_eq!(
            suggester.rank_token_similars("en_US", "xyz").unwrap(),
            vec![Candidate::new("xyz", 0.0)]
        );
    }

    #[test]
    fn test_max_suggestions_and_dedup() {
        let (_, suggester) = suggester(CannedBackend::with_words(&[
            ("alpha", "1"),
            ("beta", "3"),
            ("alpha", "9"),
            ("gamma", "2"),
        ]));
        let suggester = suggester.with_distance(Box::new(FixedDistance(0.75)));

        let all = suggester.suggest_token_similars("en_US", 10, "zeta").unwrap();
        assert_eq!(all, vec!["alpha", "beta", "gamma"]);

        let top = suggester.suggest_token_similars("en_US", 2, "zeta").unwrap();
        assert_eq!(top, vec!["alpha", "beta"]);

        assert!(suggester.suggest_token_similars("en_US", 0, "zeta").unwrap().is_empty());
    }

    #[test]
    fn test_query_filters_and_method() {
        let (backend, suggester) = suggester(CannedBackend::default());
        suggester.suggest_token_similars("fr_FR", 1, "chat").unwrap();

        let queries = backend.queries.lock();
        let (query, method) = &queries[0];
        assert_eq!(*method, RequestMethod::Post);
        assert_eq!(
            query.filters,
            vec![
                FieldFilter::new("spellcheck", "true"),
                FieldFilter::new("locale", "fr_FR"),
            ]
        );
        assert!(!query.clauses.is_empty());
    }

    #[test]
    fn test_invalid_weight_is_an_error() {
        let (_, suggester) = suggester(CannedBackend::with_words(&[("cat", "heavy")]));
        let error = suggester.rank_token_similars("en_US", "cta").unwrap_err();
        assert!(matches!(error, SpellgramError::InvalidDocument(_)));
    }

    #[test]
    fn test_backend_failure_surfaces() {
        let (_, suggester) = suggester(CannedBackend {
            fail: true,
            ..Default::default()
        });

        let error = suggester.spell_check_keywords("teh cat", "en_US").unwrap_err();
        assert!(error.is_backend());
    }

    #[test]
    fn test_spell_check_keywords_map_tokens() {
        let (backend, suggester) = suggester(CannedBackend::default());
        let map = suggester
            .spell_check_keywords_map("Teh CAT teh", "en_US", 3)
            .unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map["teh"], vec!["teh"]);
        assert_eq!(map["cat"], vec!["cat"]);
        assert_eq!(backend.queries.lock().len(), 2);
    }

    #[test]
    fn test_suggest_keyword_queries() {
        let backend = CannedBackend {
            documents: vec![
                StoredDocument::new("q1").with_value("keywordSearch", "red shoes"),
                StoredDocument::new("q2"),
                StoredDocument::new("q3").with_value("keywordSearch", "red shoes sale"),
            ],
            ..Default::default()
        };
        let (backend, suggester) = suggester(backend);
        let suggester = suggester.with_suggester_url("/suggest");

        let results = suggester.suggest_keyword_queries(10157, "red shoes", 5).unwrap();
        assert_eq!(results, vec!["red shoes", "red shoes sale"]);

        let queries = backend.queries.lock();
        let (query, _) = &queries[0];
        assert_eq!(query.request_handler, "/suggest");
        assert_eq!(query.rows, 5);
        assert_eq!(query.filters, vec![FieldFilter::new("companyId", "10157")]);
        assert_eq!(
            query.to_string(),
            "/suggest?q=keywordSearch:\"red shoes\"&fq=companyId:10157&rows=5"
        );
    }
}
