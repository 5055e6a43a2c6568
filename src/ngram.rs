//! Positional character n-grams for spellcheck documents and queries.
//!
//! For every configured gram length `n` a word contributes three groups:
//! its leading gram (`start{n}`), its trailing gram (`end{n}`) and all its
//! interior grams left to right (`gram{n}`). The backend field names are
//! derived from [`NGramKind::field_name`] and nowhere else.
//!
//! Lengths are counted in characters, not bytes.
//!
//! # Examples
//!
//! ```
//! use spellgram::ngram::{NGramBuilder, NGramKind};
//!
//! let grams = NGramBuilder::build("hello", &[3]);
//!
//! assert_eq!(grams.values(3, NGramKind::Interior), &["hel", "ell", "llo"]);
//! assert_eq!(grams.values(3, NGramKind::Start), &["hel"]);
//! assert_eq!(grams.values(3, NGramKind::End), &["llo"]);
//! ```

use serde::{Deserialize, Serialize};

/// The position class of an n-gram group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NGramKind {
    /// Every gram of the word, in order.
    Interior,
    /// The leading gram only.
    Start,
    /// The trailing gram only.
    End,
}

impl NGramKind {
    /// Field prefix used in the backend schema.
    pub fn prefix(&self) -> &'static str {
        match self {
            NGramKind::Interior => "gram",
            NGramKind::Start => "start",
            NGramKind::End => "end",
        }
    }

    /// Backend field name for grams of this kind and length, e.g. `start3`.
    pub fn field_name(&self, length: usize) -> String {
        format!("{}{}", self.prefix(), length)
    }
}

/// All grams of one kind and one length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NGramGroup {
    pub length: usize,
    pub kind: NGramKind,
    pub values: Vec<String>,
}

impl NGramGroup {
    /// Backend field name of this group.
    pub fn field_name(&self) -> String {
        self.kind.field_name(self.length)
    }
}

/// The n-gram decomposition of one string.
///
/// Groups are stored in build order: for each length, `Start`, `End`,
/// then `Interior`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NGramSet {
    groups: Vec<NGramGroup>,
}

impl NGramSet {
    /// All groups in build order.
    pub fn groups(&self) -> &[NGramGroup] {
        &self.groups
    }

    /// Groups of one kind, in length order.
    pub fn groups_of(&self, kind: NGramKind) -> impl Iterator<Item = &NGramGroup> {
        self.groups.iter().filter(move |group| group.kind == kind)
    }

    /// Grams for a given length and kind; empty when the word was too short.
    pub fn values(&self, length: usize, kind: NGramKind) -> &[String] {
        self.groups
            .iter()
            .find(|group| group.length == length && group.kind == kind)
            .map(|group| group.values.as_slice())
            .unwrap_or(&[])
    }

    /// Gram lengths that produced at least one gram.
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.groups.iter().map(|group| group.length).collect();
        lengths.dedup();
        lengths
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate `(field name, gram)` pairs in build order.
    pub fn fields(&self) -> impl Iterator<Item = (String, &str)> {
        self.groups.iter().flat_map(|group| {
            let name = group.field_name();
            group
                .values
                .iter()
                .map(move |value| (name.clone(), value.as_str()))
        })
    }
}

/// Builds [`NGramSet`]s.
pub struct NGramBuilder;

impl NGramBuilder {
    /// Decompose `text` into grams of each length in `lengths`.
    ///
    /// A length of zero, or longer than the text, contributes nothing.
    /// Repeated lengths are only processed once.
    pub fn build(text: &str, lengths: &[usize]) -> NGramSet {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let mut groups = Vec::new();
        let mut seen = Vec::with_capacity(lengths.len());

        for &n in lengths {
            if n == 0 || n > len || seen.contains(&n) {
                continue;
            }
            seen.push(n);

            let interior: Vec<String> = chars
                .windows(n)
                .map(|window| window.iter().collect())
                .collect();

            groups.push(NGramGroup {
                length: n,
                kind: NGramKind::Start,
                values: vec![interior[0].clone()],
            });
            groups.push(NGramGroup {
                length: n,
                kind: NGramKind::End,
                values: vec![interior[interior.len() - 1].clone()],
            });
            groups.push(NGramGroup {
                length: n,
                kind: NGramKind::Interior,
                values: interior,
            });
        }

        NGramSet { groups }
    }

    /// Decompose `text` using the lengths `config` selects for it.
    pub fn build_with(text: &str, config: &NGramLengths) -> NGramSet {
        Self::build(text, &config.lengths_for(text))
    }
}

/// Which gram lengths to generate for a word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NGramLengths {
    /// The same lengths for every word.
    Fixed(Vec<usize>),
    /// Lengths chosen from the word length: longer than 5 chars uses 3 and 4,
    /// exactly 5 uses 2 and 3, shorter words use 1 and 2.
    ByWordLength,
}

impl Default for NGramLengths {
    fn default() -> Self {
        NGramLengths::ByWordLength
    }
}

impl NGramLengths {
    /// Gram lengths for `word`.
    pub fn lengths_for(&self, word: &str) -> Vec<usize> {
        match self {
            NGramLengths::Fixed(lengths) => lengths.clone(),
            NGramLengths::ByWordLength => {
                let len = word.chars().count();
                let (min, max) = match len {
                    l if l > 5 => (3, 4),
                    5 => (2, 3),
                    _ => (1, 2),
                };
                (min..=max).collect()
            }
        }
    }
}
