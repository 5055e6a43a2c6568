//! Lowercase filter implementation.
//!
//! # Examples
//!
//! ```
//! use spellgram::analysis::token_filter::Filter;
//! use spellgram::analysis::token_filter::lowercase::LowercaseFilter;
//! use spellgram::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello"), Token::new("WORLD")];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// ASCII text takes the `to_ascii_lowercase` path, anything else uses
/// Unicode lowercasing.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

fn lowercase(token: Token) -> Token {
    let lowered = if token.text.is_ascii() {
        token.text.to_ascii_lowercase()
    } else {
        token.text.to_lowercase()
    };
    token.with_text(lowered)
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(lowercase)))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
