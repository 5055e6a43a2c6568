//! Structured backend queries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellgramError};

/// HTTP-style method a query is sent with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestMethod {
    #[default]
    Get,
    /// Used for n-gram queries, which get too long for a query string.
    Post,
}

/// A `field:value` restriction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldFilter {
    pub field: String,
    pub value: String,
}

impl FieldFilter {
    pub fn new<S: Into<String>, T: Into<String>>(field: S, value: T) -> Self {
        FieldFilter {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Parse `field:value`.
    pub fn parse(filter: &str) -> Result<Self> {
        match filter.split_once(':') {
            Some((field, value)) if !field.is_empty() && !value.is_empty() => {
                Ok(FieldFilter::new(field, value))
            }
            _ => Err(SpellgramError::backend(format!(
                "Invalid filter query: {filter}"
            ))),
        }
    }
}

impl fmt::Display for FieldFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.value)
    }
}

/// One optional (SHOULD) clause of a query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum QueryClause {
    /// Exact match of one field value.
    Term {
        field: String,
        value: String,
        boost: f32,
    },
    /// Phrase match inside a field.
    Phrase { field: String, text: String },
}

impl fmt::Display for QueryClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryClause::Term { field, value, boost } if (*boost - 1.0).abs() > f32::EPSILON => {
                write!(f, "{field}:{value}^{boost}")
            }
            QueryClause::Term { field, value, .. } => write!(f, "{field}:{value}"),
            QueryClause::Phrase { field, text } => write!(f, "{field}:\"{text}\""),
        }
    }
}

/// A query against a request handler of the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub request_handler: String,
    pub clauses: Vec<QueryClause>,
    pub filters: Vec<FieldFilter>,
    pub rows: usize,
}

impl SearchQuery {
    pub const DEFAULT_HANDLER: &'static str = "/select";
    pub const DEFAULT_ROWS: usize = 10;

    pub fn new() -> Self {
        SearchQuery {
            request_handler: Self::DEFAULT_HANDLER.to_string(),
            clauses: Vec::new(),
            filters: Vec::new(),
            rows: Self::DEFAULT_ROWS,
        }
    }

    pub fn with_request_handler<S: Into<String>>(mut self, handler: S) -> Self {
        self.request_handler = handler.into();
        self
    }

    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn add_term<S: Into<String>, T: Into<String>>(&mut self, field: S, value: T, boost: f32) {
        self.clauses.push(QueryClause::Term {
            field: field.into(),
            value: value.into(),
            boost,
        });
    }

    pub fn add_phrase<S: Into<String>, T: Into<String>>(&mut self, field: S, text: T) {
        self.clauses.push(QueryClause::Phrase {
            field: field.into(),
            text: text.into(),
        });
    }

    pub fn add_filter(&mut self, filter: FieldFilter) {
        self.filters.push(filter);
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let q: Vec<String> = self.clauses.iter().map(ToString::to_string).collect();
        write!(f, "{}?q={}", self.request_handler, q.join(" "))?;
        for filter in &self.filters {
            write!(f, "&fq={filter}")?;
        }
        write!(f, "&rows={}", self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parse_and_display() {
        let filter = FieldFilter::parse("spellcheck:true").unwrap();
        assert_eq!(filter, FieldFilter::new("spellcheck", "true"));
        assert_eq!(filter.to_string(), "spellcheck:true");

        // Only the first colon separates field and value
        let filter = FieldFilter::parse("url:http://x").unwrap();
        assert_eq!(filter.value, "http://x");

        assert!(FieldFilter::parse("novalue:").is_err());
        assert!(FieldFilter::parse("plain").is_err());
    }

    #[test]
    fn test_query_display() {
        let mut query = SearchQuery::new().with_rows(5);
        query.add_term("start2", "te", 2.0);
        query.add_term("gram2", "eh", 1.0);
        query.add_phrase("keywordSearch", "red shoes");
        query.add_filter(FieldFilter::new("locale", "en_US"));

        assert_eq!(
            query.to_string(),
            "/select?q=start2:te^2 gram2:eh keywordSearch:\"red shoes\"&fq=locale:en_US&rows=5"
        );
    }
}
