//! Spell checking configuration.
//!
//! Every field has a default, so a JSON file only needs the keys it wants
//! to change:
//!
//! ```
//! use spellgram::config::SpellCheckConfig;
//!
//! let config = SpellCheckConfig::from_json(r#"{ "batch_size": 500, "commit": true }"#).unwrap();
//!
//! assert_eq!(config.batch_size, 500);
//! assert!(config.commit);
//! assert_eq!(config.threshold, 0.5);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::backend::IndexBackend;
use crate::error::{Result, SpellgramError};
use crate::ngram::NGramLengths;
use crate::spelling::{DictionaryIndexer, DistanceKind};

/// Settings shared by the dictionary indexer and the suggester.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellCheckConfig {
    /// Directory holding `{locale}.txt` and `custom_{locale}.txt`.
    pub dictionary_dir: PathBuf,
    pub ngram_lengths: NGramLengths,
    /// Dictionary entries per backend `add` call.
    pub batch_size: usize,
    /// Commit after every batch and after deletes.
    pub commit: bool,
    /// Similarity a candidate must exceed.
    pub threshold: f32,
    pub distance: DistanceKind,
    /// Request handler for keyword query suggestions.
    pub suggester_url: String,
    pub supported_locales: Vec<String>,
    /// Candidate documents fetched per token.
    pub candidate_rows: usize,
    pub start_boost: f32,
    pub end_boost: f32,
    /// Joins collated tokens.
    pub separator: String,
}

impl Default for SpellCheckConfig {
    fn default() -> Self {
        SpellCheckConfig {
            dictionary_dir: PathBuf::from("dictionaries"),
            ngram_lengths: NGramLengths::ByWordLength,
            batch_size: 10000,
            commit: false,
            threshold: 0.5,
            distance: DistanceKind::DamerauLevenshtein,
            suggester_url: "/select".to_string(),
            supported_locales: vec!["en_US".to_string()],
            candidate_rows: 10,
            start_boost: 2.0,
            end_boost: 1.0,
            separator: " ".to_string(),
        }
    }
}

impl SpellCheckConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SpellCheckConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(SpellgramError::invalid_config("batch_size must be positive"));
        }
        if self.candidate_rows == 0 {
            return Err(SpellgramError::invalid_config(
                "candidate_rows must be positive",
            ));
        }
        if let NGramLengths::Fixed(lengths) = &self.ngram_lengths {
            if lengths.is_empty() || lengths.contains(&0) {
                return Err(SpellgramError::invalid_config(
                    "fixed ngram_lengths must be non-empty and non-zero",
                ));
            }
        }
        if !self.threshold.is_finite() {
            return Err(SpellgramError::invalid_config("threshold must be finite"));
        }
        for (name, boost) in [("start_boost", self.start_boost), ("end_boost", self.end_boost)] {
            if !boost.is_finite() || boost < 0.0 {
                return Err(SpellgramError::invalid_config(format!(
                    "{name} must be finite and non-negative"
                )));
            }
        }
        Ok(())
    }

    /// A dictionary indexer writing to `backend` with these settings.
    pub fn build_indexer(&self, backend: Arc<dyn IndexBackend>) -> DictionaryIndexer {
        DictionaryIndexer::new(backend, self.dictionary_dir.clone())
            .with_batch_size(self.batch_size)
            .with_commit(self.commit)
            .with_ngram_lengths(self.ngram_lengths.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = SpellCheckConfig::default();

        assert_eq!(config.dictionary_dir, PathBuf::from("dictionaries"));
        assert_eq!(config.batch_size, 10000);
        assert!(!config.commit);
        assert_eq!(config.suggester_url, "/select");
        assert_eq!(config.supported_locales, vec!["en_US"]);
        assert_eq!(config.distance, DistanceKind::DamerauLevenshtein);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = SpellCheckConfig::from_json(
            r#"{
                "ngram_lengths": { "fixed": [2, 3] },
                "distance": "levenshtein",
                "supported_locales": ["en_US", "es_ES"]
            }"#,
        )
        .unwrap();

        assert_eq!(config.ngram_lengths, NGramLengths::Fixed(vec![2, 3]));
        assert_eq!(config.distance, DistanceKind::Levenshtein);
        assert_eq!(config.supported_locales.len(), 2);
        assert_eq!(config.candidate_rows, 10);
    }

    #[test]
    fn test_json_round_trip() {
        let config = SpellCheckConfig {
            commit: true,
            threshold: 0.25,
            ..Default::default()
        };
        let parsed = SpellCheckConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validation() {
        let invalid = [
            r#"{ "batch_size": 0 }"#,
            r#"{ "candidate_rows": 0 }"#,
            r#"{ "ngram_lengths": { "fixed": [] } }"#,
            r#"{ "ngram_lengths": { "fixed": [0, 2] } }"#,
            r#"{ "start_boost": -1.0 }"#,
        ];
        for json in invalid {
            let error = SpellCheckConfig::from_json(json).unwrap_err();
            assert!(matches!(error, SpellgramError::InvalidConfig(_)), "{json}");
        }

        assert!(matches!(
            SpellCheckConfig::from_json("{ not json").unwrap_err(),
            SpellgramError::Json(_)
        ));
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "dictionary_dir": "/srv/dicts" }"#).unwrap();

        let config = SpellCheckConfig::load(file.path()).unwrap();
        assert_eq!(config.dictionary_dir, PathBuf::from("/srv/dicts"));
    }
}
