//! Token filter implementations for token transformation.
//!
//! Filters receive the stream produced by a tokenizer and return a new one.
//! Spell checking only needs case folding, so the set is deliberately small:
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//!
//! ```text
//! Tokenizer → Lowercase → Spellcheck lookup
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;

pub use lowercase::LowercaseFilter;
