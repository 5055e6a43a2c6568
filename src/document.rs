//! Documents exchanged with the index backend.
//!
//! - [`document::IndexableDocument`] - What gets added: an id plus an ordered
//!   list of `(name, value)` fields. A repeated name is a multi-valued field.
//! - [`document::StoredDocument`] - What a query returns: field names mapped
//!   to their stored values, rendered as text.
//! - [`field_value::FieldValue`] - Typed field values.
//!
//! # Examples
//!
//! ```
//! use spellgram::document::IndexableDocument;
//!
//! let doc = IndexableDocument::builder("spellcheck_cat_en_US")
//!     .add_boolean("spellcheck", true)
//!     .add_text("word", "cat")
//!     .add_text("gram2", "ca")
//!     .add_text("gram2", "at")
//!     .build();
//!
//! assert_eq!(doc.id(), "spellcheck_cat_en_US");
//! assert_eq!(doc.values("gram2").count(), 2);
//! ```

#[allow(clippy::module_inception)]
pub mod document;
pub mod field_value;

pub use document::{DocumentBuilder, IndexableDocument, StoredDocument};
pub use field_value::FieldValue;
