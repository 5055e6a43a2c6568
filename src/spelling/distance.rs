//! String similarity measures used to re-rank spelling candidates.
//!
//! Despite the trait name these return a *similarity*: 1.0 for identical
//! strings, falling towards 0.0 as the edit distance approaches the length
//! of the longer string.

use std::cmp::min;

use serde::{Deserialize, Serialize};

/// A normalized string similarity. Higher means more similar.
pub trait StringDistance: Send + Sync {
    fn distance(&self, a: &str, b: &str) -> f32;
}

fn normalize(edits: usize, len_a: usize, len_b: usize) -> f32 {
    let max_len = len_a.max(len_b);
    if max_len == 0 {
        return 1.0;
    }
    1.0 - edits as f32 / max_len as f32
}

/// Similarity from insertions, deletions and substitutions.
#[derive(Clone, Copy, Debug, Default)]
pub struct LevenshteinDistance;

impl LevenshteinDistance {
    /// Raw edit count between `a` and `b`, counted in characters.
    pub fn edits(a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        if a.is_empty() {
            return b.len();
        }
        if b.is_empty() {
            return a.len();
        }

        // Two rows are enough
        let mut prev_row: Vec<usize> = (0..=b.len()).collect();
        let mut curr_row = vec![0; b.len() + 1];

        for i in 1..=a.len() {
            curr_row[0] = i;
            for j in 1..=b.len() {
                let cost = usize::from(a[i - 1] != b[j - 1]);
                curr_row[j] = min(
                    min(prev_row[j] + 1, curr_row[j - 1] + 1),
                    prev_row[j - 1] + cost,
                );
            }
            std::mem::swap(&mut prev_row, &mut curr_row);
        }

        prev_row[b.len()]
    }
}

impl StringDistance for LevenshteinDistance {
    fn distance(&self, a: &str, b: &str) -> f32 {
        normalize(Self::edits(a, b), a.chars().count(), b.chars().count())
    }
}

/// Levenshtein similarity that also counts an adjacent transposition as a
/// single edit, which suits real-world typos like `teh`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DamerauLevenshteinDistance;

impl DamerauLevenshteinDistance {
    /// Raw edit count (optimal string alignment) between `a` and `b`.
    #[allow(clippy::needless_range_loop)]
    pub fn edits(a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        if a.is_empty() {
            return b.len();
        }
        if b.is_empty() {
            return a.len();
        }

        let mut matrix = vec![vec![0; b.len() + 1]; a.len() + 1];
        for i in 0..=a.len() {
            matrix[i][0] = i;
        }
        for j in 0..=b.len() {
            matrix[0][j] = j;
        }

        for i in 1..=a.len() {
            for j in 1..=b.len() {
                let cost = usize::from(a[i - 1] != b[j - 1]);
                matrix[i][j] = min(
                    min(matrix[i - 1][j] + 1, matrix[i][j - 1] + 1),
                    matrix[i - 1][j - 1] + cost,
                );

                if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                    matrix[i][j] = min(matrix[i][j], matrix[i - 2][j - 2] + 1);
                }
            }
        }

        matrix[a.len()][b.len()]
    }
}

impl StringDistance for DamerauLevenshteinDistance {
    fn distance(&self, a: &str, b: &str) -> f32 {
        normalize(Self::edits(a, b), a.chars().count(), b.chars().count())
    }
}

/// Selects a [`StringDistance`] from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceKind {
    Levenshtein,
    /// Transposed letters (`teh`) are the most common keyword typo.
    #[default]
    DamerauLevenshtein,
}

impl DistanceKind {
    pub fn build(&self) -> Box<dyn StringDistance> {
        match self {
            DistanceKind::Levenshtein => Box::new(LevenshteinDistance),
            DistanceKind::DamerauLevenshtein => Box::new(DamerauLevenshteinDistance),
        }
    }
}
