//! Builds the candidate lookup query for one token.

use crate::backend::SearchQuery;
use crate::ngram::{NGramBuilder, NGramKind, NGramLengths};

/// Turns a token into an n-gram [`SearchQuery`].
///
/// Every gram becomes an optional term clause on its positional field. Start
/// grams are weighted by `start_boost`, end grams by `end_boost`, interior
/// grams by 1.0.
#[derive(Clone, Debug)]
pub struct NGramQueryBuilder {
    lengths: NGramLengths,
    start_boost: f32,
    end_boost: f32,
    rows: usize,
    request_handler: String,
}

impl NGramQueryBuilder {
    pub const DEFAULT_START_BOOST: f32 = 2.0;
    pub const DEFAULT_END_BOOST: f32 = 1.0;
    pub const DEFAULT_ROWS: usize = 10;

    pub fn new(lengths: NGramLengths) -> Self {
        NGramQueryBuilder {
            lengths,
            start_boost: Self::DEFAULT_START_BOOST,
            end_boost: Self::DEFAULT_END_BOOST,
            rows: Self::DEFAULT_ROWS,
            request_handler: SearchQuery::DEFAULT_HANDLER.to_string(),
        }
    }

    pub fn with_boosts(mut self, start_boost: f32, end_boost: f32) -> Self {
        self.start_boost = start_boost;
        self.end_boost = end_boost;
        self
    }

    /// Number of candidate documents to fetch per token.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn lengths(&self) -> &NGramLengths {
        &self.lengths
    }

    pub fn build(&self, token: &str) -> SearchQuery {
        let grams = NGramBuilder::build_with(token, &self.lengths);
        let mut query = SearchQuery::new()
            .with_request_handler(self.request_handler.clone())
            .with_rows(self.rows);

        for group in grams.groups() {
            let boost = match group.kind {
                NGramKind::Start => self.start_boost,
                NGramKind::End => self.end_boost,
                NGramKind::Interior => 1.0,
            };
            let field = group.field_name();
            for value in &group.values {
                query.add_term(field.clone(), value.clone(), boost);
            }
        }

        query
    }
}

impl Default for NGramQueryBuilder {
    fn default() -> Self {
        Self::new(NGramLengths::default())
    }
}
