//! Text analysis for keyword spell checking.
//!
//! Raw keyword strings are split into normalized tokens before each token is
//! looked up in the spellcheck dictionary. The building blocks mirror a
//! classic analysis chain: a [`tokenizer::Tokenizer`] splits text, a chain of
//! [`token_filter::Filter`]s normalizes the tokens, and an
//! [`analyzer::Analyzer`] combines both. [`text_tokenizer::TextTokenizer`] is
//! the locale-aware seam used by the suggester.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
pub mod text_tokenizer;

pub use analyzer::{Analyzer, PerLocaleAnalyzer, PipelineAnalyzer};
pub use text_tokenizer::{AnalyzerTokenizer, TextTokenizer};
pub use token::{Token, TokenStream};
