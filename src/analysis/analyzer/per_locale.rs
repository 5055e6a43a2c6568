//! Per-locale analyzer.

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Applies a different analyzer per locale id (`en_US`, `ja_JP`, ...), with a
/// default analyzer for locales not explicitly configured.
///
/// Reuse one analyzer across several locales with `Arc::clone`.
///
/// # Example
///
/// ```
/// use spellgram::analysis::{Analyzer, PerLocaleAnalyzer, PipelineAnalyzer};
/// use spellgram::analysis::tokenizer::UnicodeWordTokenizer;
/// use std::sync::Arc;
///
/// let mut analyzer = PerLocaleAnalyzer::new(Arc::new(PipelineAnalyzer::keyword()));
/// analyzer.add_analyzer(
///     "tr_TR",
///     Arc::new(PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))),
/// );
///
/// let tokens: Vec<_> = analyzer.analyze_locale("en_US", "Hello World").unwrap().collect();
/// assert_eq!(tokens[0].text, "hello");
/// ```
#[derive(Clone)]
pub struct PerLocaleAnalyzer {
    /// Default analyzer for locales not in the map.
    default_analyzer: Arc<dyn Analyzer>,

    /// Map of locale ids to their specific analyzers.
    locale_analyzers: AHashMap<String, Arc<dyn Analyzer>>,
}

impl PerLocaleAnalyzer {
    /// Create a new per-locale analyzer with a default analyzer.
    pub fn new(default_analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            default_analyzer,
            locale_analyzers: AHashMap::new(),
        }
    }

    /// Add a locale-specific analyzer.
    pub fn add_analyzer(&mut self, locale: impl Into<String>, analyzer: Arc<dyn Analyzer>) {
        self.locale_analyzers.insert(locale.into(), analyzer);
    }

    /// Get the analyzer for a specific locale.
    pub fn get_analyzer(&self, locale: &str) -> &Arc<dyn Analyzer> {
        self.locale_analyzers
            .get(locale)
            .unwrap_or(&self.default_analyzer)
    }

    /// Analyze text with the analyzer for the given locale.
    pub fn analyze_locale(&self, locale: &str, text: &str) -> Result<TokenStream> {
        self.get_analyzer(locale).analyze(text)
    }
}

impl Default for PerLocaleAnalyzer {
    fn default() -> Self {
        PerLocaleAnalyzer::new(Arc::new(PipelineAnalyzer::keyword()))
    }
}

impl Analyzer for PerLocaleAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.default_analyzer.analyze(text)
    }

    fn name(&self) -> &str {
        "per_locale"
    }
}

impl std::fmt::Debug for PerLocaleAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut locales: Vec<&String> = self.locale_analyzers.keys().collect();
        locales.sort();
        f.debug_struct("PerLocaleAnalyzer")
            .field("default", &self.default_analyzer.name())
            .field("locales", &locales)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::UnicodeWordTokenizer;

    #[test]
    fn test_per_locale_analyzer() {
        let mut analyzer = PerLocaleAnalyzer::default();
        analyzer.add_analyzer(
            "xx_RAW",
            Arc::new(PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))),
        );

        let text = "Hello, World";

        let tokens: Vec<_> = analyzer.analyze_locale("en_US", text).unwrap().collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");

        // No lowercasing
        let tokens: Vec<_> = analyzer.analyze_locale("xx_RAW", text).unwrap().collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "Hello");
        assert_eq!(tokens[1].text, "World");
    }

    #[test]
    fn test_as_analyzer_trait_uses_default() {
        let analyzer = PerLocaleAnalyzer::default();
        let tokens: Vec<_> = analyzer.analyze("Hello World").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(analyzer.name(), "per_locale");
    }
}
