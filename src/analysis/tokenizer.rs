//! Tokenizers split raw keyword text into words.
//!
//! ```
//! use spellgram::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
//!
//! let words: Vec<_> = UnicodeWordTokenizer::new()
//!     .tokenize("teh cat, sat")
//!     .unwrap()
//!     .map(|token| token.text)
//!     .collect();
//! assert_eq!(words, ["teh", "cat", "sat"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Converts text into a stream of tokens. Shared across threads by the
/// suggester, hence `Send + Sync`.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Short identifier shown in `Debug` output of analyzers.
    fn name(&self) -> &'static str;
}

pub mod unicode_word;

pub use unicode_word::UnicodeWordTokenizer;
