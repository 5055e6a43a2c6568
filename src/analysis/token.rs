//! The unit of text passed between tokenizers and filters.
//!
//! Spell checking only looks at the normalized word, so a [`Token`] carries
//! nothing else.

/// One word produced by a tokenizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token { text: text.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the text, used by normalizing filters.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

/// Lazily evaluated sequence of tokens flowing through an analyzer.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;
