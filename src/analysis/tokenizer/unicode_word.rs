//! Word tokenizer based on UAX #29 word boundaries.

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Keeps every word-boundary segment holding at least one letter or digit.
/// Apostrophes inside words stay attached (`don't` is one token).
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

fn is_word(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let words: Vec<Token> = text
            .split_word_bounds()
            .filter(|segment| is_word(segment))
            .map(Token::new)
            .collect();
        Ok(Box::new(words.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        UnicodeWordTokenizer::new()
            .tokenize(text)
            .unwrap()
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn test_punctuation_and_spacing_dropped() {
        assert_eq!(words("hello,  world!"), vec!["hello", "world"]);
        assert!(words(" ?! ").is_empty());
    }

    #[test]
    fn test_repeated_words_kept_in_order() {
        assert_eq!(words("cat and cat"), vec!["cat", "and", "cat"]);
    }

    #[test]
    fn test_accents_apostrophes_and_digits() {
        assert_eq!(words("café résumé"), vec!["café", "résumé"]);
        assert_eq!(words("don't stop 2024"), vec!["don't", "stop", "2024"]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(UnicodeWordTokenizer::new().name(), "unicode_word");
    }
}
