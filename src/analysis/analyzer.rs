//! Analyzer implementations that combine tokenizers and filters.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Spellcheck lookup
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 .. N
//! ```
//!
//! - [`PipelineAnalyzer`] - Custom tokenizer + filter chains
//! - [`PerLocaleAnalyzer`] - Different analyzers per locale

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;
}

pub mod per_locale;
pub mod pipeline;

pub use per_locale::PerLocaleAnalyzer;
pub use pipeline::PipelineAnalyzer;
