//! Reassembles per-token suggestions into one phrase.

use crate::spelling::suggest::SuggestionMap;

/// Builds a corrected phrase from suggestions and the original tokens.
pub trait Collator: Send + Sync {
    fn collate(&self, suggestions: &SuggestionMap, tokens: &[String]) -> String;
}

/// Joins, in token order, the top suggestion of each token (or the token
/// itself when it has none) with a separator.
#[derive(Clone, Debug)]
pub struct PhraseCollator {
    separator: String,
}

impl PhraseCollator {
    pub fn new<S: Into<String>>(separator: S) -> Self {
        PhraseCollator {
            separator: separator.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Default for PhraseCollator {
    fn default() -> Self {
        Self::new(" ")
    }
}

impl Collator for PhraseCollator {
    fn collate(&self, suggestions: &SuggestionMap, tokens: &[String]) -> String {
        tokens
            .iter()
            .map(|token| {
                suggestions
                    .get(token)
                    .and_then(|candidates| candidates.first())
                    .unwrap_or(token)
                    .as_str()
            })
            .collect::<Vec<_>>()
            .join(&self.separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_collate_uses_top_suggestion() {
        let mut suggestions = SuggestionMap::new();
        suggestions.insert("teh".into(), vec!["the".into(), "ten".into()]);
        suggestions.insert("cat".into(), vec!["cat".into()]);

        let collator = PhraseCollator::default();
        assert_eq!(
            collator.collate(&suggestions, &tokens(&["teh", "cat"])),
            "the cat"
        );
    }

    #[test]
    fn test_collate_keeps_unknown_tokens_and_order() {
        let mut suggestions = SuggestionMap::new();
        suggestions.insert("b".into(), Vec::new());
        suggestions.insert("c".into(), vec!["C".into()]);

        let collator = PhraseCollator::new("+");
        assert_eq!(collator.collate(&suggestions, &tokens(&["c", "a", "b", "c"])), "C+a+b+C");
        assert_eq!(collator.collate(&suggestions, &[]), "");
    }
}
