//! Tokenizer followed by an ordered chain of filters.

use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{Filter, LowercaseFilter};
use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
use crate::error::Result;

/// Runs `tokenizer`, then each filter in insertion order.
///
/// ```
/// use std::sync::Arc;
/// use spellgram::analysis::{Analyzer, PipelineAnalyzer};
/// use spellgram::analysis::tokenizer::UnicodeWordTokenizer;
///
/// let raw = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()));
/// let words: Vec<_> = raw.analyze("Teh CAT").unwrap().map(|t| t.text).collect();
/// assert_eq!(words, ["Teh", "CAT"]);
/// ```
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Word boundaries plus lowercasing. Stop words are kept because they
    /// must reappear in the collated phrase.
    pub fn keyword() -> Self {
        PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
    }

    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.filters
            .iter()
            .try_fold(self.tokenizer.tokenize(text)?, |tokens, filter| {
                filter.filter(tokens)
            })
    }

    fn name(&self) -> &str {
        self.tokenizer.name()
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filters: Vec<&str> = self.filters.iter().map(|filter| filter.name()).collect();
        f.debug_struct("PipelineAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field("filters", &filters)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(analyzer: &PipelineAnalyzer, text: &str) -> Vec<String> {
        analyzer.analyze(text).unwrap().map(|t| t.text).collect()
    }

    #[test]
    fn test_keyword_analyzer_keeps_stop_words() {
        let analyzer = PipelineAnalyzer::keyword();

        assert_eq!(words(&analyzer, "Teh, THE cat!"), vec!["teh", "the", "cat"]);
        assert_eq!(analyzer.name(), "unicode_word");
    }

    #[test]
    fn test_filters_are_optional() {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()));

        assert_eq!(words(&analyzer, "Hello World"), vec!["Hello", "World"]);
        assert_eq!(
            format!("{analyzer:?}"),
            r#"PipelineAnalyzer { tokenizer: "unicode_word", filters: [] }"#
        );
    }
}
