//! Document structures for the index backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::document::field_value::FieldValue;
use crate::ngram::{NGramKind, NGramSet};

/// A document to be added to the backend.
///
/// Fields keep their insertion order; the same name may appear several
/// times, which makes the field multi-valued.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexableDocument {
    id: String,
    fields: Vec<(String, FieldValue)>,
}

impl IndexableDocument {
    /// Create a new document with no fields.
    pub fn new<S: Into<String>>(id: S) -> Self {
        IndexableDocument {
            id: id.into(),
            fields: Vec::new(),
        }
    }

    /// Create a builder for constructing documents.
    pub fn builder<S: Into<String>>(id: S) -> DocumentBuilder {
        DocumentBuilder::new(id)
    }

    /// The unique document id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Append a field value.
    pub fn add_field<S: Into<String>>(&mut self, name: S, value: FieldValue) {
        self.fields.push((name.into(), value));
    }

    /// All fields in insertion order.
    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    /// Every value stored under `name`, in insertion order.
    pub fn values<'a, 'b>(&'a self, name: &'b str) -> impl Iterator<Item = &'a FieldValue> + use<'a, 'b> {
        self.fields
            .iter()
            .filter(move |(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// The first value stored under `name`.
    pub fn first_value(&self, name: &str) -> Option<&FieldValue> {
        self.values(name).next()
    }

    /// Check if the document has a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.first_value(name).is_some()
    }

    /// Get the number of field values.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A builder for constructing documents in a fluent manner.
#[derive(Debug)]
pub struct DocumentBuilder {
    document: IndexableDocument,
}

impl DocumentBuilder {
    /// Create a new document builder.
    pub fn new<S: Into<String>>(id: S) -> Self {
        DocumentBuilder {
            document: IndexableDocument::new(id),
        }
    }

    /// Add a text field to the document.
    pub fn add_text<S: Into<String>, T: Into<String>>(mut self, name: S, value: T) -> Self {
        self.document
            .add_field(name, FieldValue::Text(value.into()));
        self
    }

    /// Add an integer field to the document.
    pub fn add_integer<S: Into<String>>(mut self, name: S, value: i64) -> Self {
        self.document.add_field(name, FieldValue::Integer(value));
        self
    }

    /// Add a boolean field to the document.
    pub fn add_boolean<S: Into<String>>(mut self, name: S, value: bool) -> Self {
        self.document.add_field(name, FieldValue::Boolean(value));
        self
    }

    /// Add every gram of `grams`: end and start grams as single-valued
    /// fields, interior grams as multi-valued `gram{n}` fields.
    pub fn add_ngrams(mut self, grams: &NGramSet) -> Self {
        for kind in [NGramKind::End, NGramKind::Start, NGramKind::Interior] {
            for group in grams.groups_of(kind) {
                let name = group.field_name();
                for value in &group.values {
                    self.document
                        .add_field(name.clone(), FieldValue::Text(value.clone()));
                }
            }
        }
        self
    }

    /// Build the final document.
    pub fn build(self) -> IndexableDocument {
        self.document
    }
}

/// A document as returned by a backend query.
///
/// Values are kept as the text the backend stores, every field is
/// potentially multi-valued.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: String,
    pub fields: BTreeMap<String, Vec<String>>,
}

impl StoredDocument {
    pub fn new<S: Into<String>>(id: S) -> Self {
        StoredDocument {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Append a value to a field.
    pub fn with_value<S: Into<String>, T: Into<String>>(mut self, name: S, value: T) -> Self {
        self.fields.entry(name.into()).or_default().push(value.into());
        self
    }

    /// All values of a field.
    pub fn values(&self, name: &str) -> &[String] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first value of a field.
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.values(name).first().map(String::as_str)
    }
}

impl From<&IndexableDocument> for StoredDocument {
    fn from(document: &IndexableDocument) -> Self {
        document
            .fields()
            .iter()
            .fold(StoredDocument::new(document.id()), |stored, (name, value)| {
                stored.with_value(name.clone(), value.as_text())
            })
    }
}
