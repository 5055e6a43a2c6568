//! Locale-aware keyword tokenization used by the suggester.

use std::sync::Arc;

use crate::analysis::analyzer::PerLocaleAnalyzer;
use crate::error::{Result, SpellgramError};

/// Splits a raw keyword string into ordered, normalized tokens for a locale.
pub trait TextTokenizer: Send + Sync {
    /// Tokenize `text` with the rules of `locale`.
    fn tokenize(&self, text: &str, locale: &str) -> Result<Vec<String>>;
}

/// [`TextTokenizer`] backed by a [`PerLocaleAnalyzer`].
///
/// Any analyzer failure is reported as [`SpellgramError::Tokenization`]
/// with the analyzer error as its source. Empty tokens are dropped.
#[derive(Clone, Debug, Default)]
pub struct AnalyzerTokenizer {
    analyzer: Arc<PerLocaleAnalyzer>,
}

impl AnalyzerTokenizer {
    pub fn new(analyzer: PerLocaleAnalyzer) -> Self {
        AnalyzerTokenizer {
            analyzer: Arc::new(analyzer),
        }
    }

    pub fn analyzer(&self) -> &PerLocaleAnalyzer {
        &self.analyzer
    }
}

impl TextTokenizer for AnalyzerTokenizer {
    fn tokenize(&self, text: &str, locale: &str) -> Result<Vec<String>> {
        let stream = self
            .analyzer
            .analyze_locale(locale, text)
            .map_err(|e| SpellgramError::tokenization_with_source(format!("locale {locale}"), e))?;

        Ok(stream
            .filter(|token| !token.is_empty())
            .map(|token| token.text)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;
    use crate::analysis::analyzer::Analyzer;
    use crate::analysis::token::TokenStream;

    struct BrokenAnalyzer;

    impl Analyzer for BrokenAnalyzer {
        fn analyze(&self, _text: &str) -> Result<TokenStream> {
            Err(SpellgramError::other("reader closed"))
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    #[test]
    fn test_tokenize_keywords() {
        let tokenizer = AnalyzerTokenizer::default();
        let tokens = tokenizer.tokenize("Teh  cat", "en_US").unwrap();

        assert_eq!(tokens, vec!["teh".to_string(), "cat".to_string()]);
        assert!(tokenizer.tokenize("  ", "en_US").unwrap().is_empty());
    }

    #[test]
    fn test_analyzer_failure_is_tokenization_error() {
        let tokenizer = AnalyzerTokenizer::new(PerLocaleAnalyzer::new(Arc::new(BrokenAnalyzer)));

        match tokenizer.tokenize("teh cat", "en_US") {
            Err(error @ SpellgramError::Tokenization { .. }) => {
                assert_eq!(error.to_string(), "Tokenization error: locale en_US");
                let cause = error.source().unwrap();
                assert_eq!(cause.to_string(), "Error: reader closed");
                assert!(matches!(
                    cause.downcast_ref::<SpellgramError>(),
                    Some(SpellgramError::Other(_))
                ));
            }
            other => panic!("Expected tokenization error, got {other:?}"),
        }
    }
}
