//! Output formatting for CLI commands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpellgramArgs};
use crate::error::Result;
use crate::ngram::NGramGroup;
use crate::spelling::{Candidate, IndexSummary, SuggestionMap};

/// Result of the `check` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub query: String,
    pub locale: String,
    pub corrected: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<SuggestionMap>,
}

/// Result of the `suggest` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResult {
    pub token: String,
    pub locale: String,
    pub candidates: Vec<Candidate>,
}

/// Per-file line of the `index` report.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileReport {
    pub locale: String,
    pub path: String,
    pub entries: usize,
    pub batches: usize,
    pub malformed_weights: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of the `index` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexReport {
    pub entries_indexed: usize,
    pub documents: usize,
    pub files: Vec<FileReport>,
}

impl IndexReport {
    pub fn new(summary: &IndexSummary, documents: usize) -> Self {
        let files = summary
            .files
            .iter()
            .map(|outcome| {
                let (stats, error) = match &outcome.result {
                    Ok(stats) => (stats.clone(), None),
                    Err(e) => (Default::default(), Some(e.to_string())),
                };
                FileReport {
                    locale: outcome.locale.clone(),
                    path: outcome.path.display().to_string(),
                    entries: stats.entries,
                    batches: stats.batches,
                    malformed_weights: stats.malformed_weights,
                    error,
                }
            })
            .collect();

        IndexReport {
            entries_indexed: summary.entries_indexed(),
            documents,
            files,
        }
    }
}

/// Result of the `grams` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct GramsResult {
    pub text: String,
    pub groups: Vec<NGramGroup>,
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.corrected == self.query {
            writeln!(f, "{}", self.corrected)?;
        } else {
            writeln!(f, "Did you mean: {}", self.corrected)?;
        }
        if let Some(suggestions) = &self.suggestions {
            for (token, similars) in suggestions {
                writeln!(f, "  {token}: {}", similars.join(", "))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for SuggestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Suggestions for \"{}\" ({}):", self.token, self.locale)?;
        for (i, candidate) in self.candidates.iter().enumerate() {
            writeln!(f, "{:>3}. {} (Score: {:.3})", i + 1, candidate.term, candidate.score)?;
        }
        Ok(())
    }
}

impl fmt::Display for IndexReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dictionary Index:")?;
        writeln!(f, "═════════════════")?;
        for file in &self.files {
            match &file.error {
                None => writeln!(
                    f,
                    "  [{}] {}: {} entries in {} batches ({} malformed weights)",
                    file.locale, file.path, file.entries, file.batches, file.malformed_weights
                )?,
                Some(error) => writeln!(f, "  [{}] {}: FAILED: {error}", file.locale, file.path)?,
            }
        }
        writeln!(f)?;
        writeln!(f, "Entries indexed: {}", self.entries_indexed)?;
        writeln!(f, "Documents:       {}", self.documents)
    }
}

impl fmt::Display for GramsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            writeln!(f, "{:<8} {}", group.field_name(), group.values.join(" "))?;
        }
        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + fmt::Display>(result: &T, args: &SpellgramArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                print!("{result}");
            }
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SpellgramArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::error::SpellgramError;
    use crate::ngram::NGramBuilder;
    use crate::spelling::{FileOutcome, FileStats};

    #[test]
    fn test_check_result_display() {
        let result = CheckResult {
            query: "teh cat".into(),
            locale: "en_US".into(),
            corrected: "the cat".into(),
            suggestions: None,
        };
        assert_eq!(result.to_string(), "Did you mean: the cat\n");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["corrected"], "the cat");
        assert!(json.get("suggestions").is_none());
    }

    #[test]
    fn test_index_report() {
        let summary = IndexSummary {
            files: vec![
                FileOutcome {
                    locale: "en_US".into(),
                    path: PathBuf::from("d/en_US.txt"),
                    result: Ok(FileStats {
                        entries: 4,
                        batches: 2,
                        malformed_weights: 1,
                    }),
                },
                FileOutcome {
                    locale: "en_US".into(),
                    path: PathBuf::from("d/custom_en_US.txt"),
                    result: Err(SpellgramError::other("missing")),
                },
            ],
        };

        let report = IndexReport::new(&summary, 4);
        assert_eq!(report.entries_indexed, 4);
        assert_eq!(report.files[0].batches, 2);
        assert_eq!(report.files[1].error.as_deref(), Some("Error: missing"));
        assert!(report.to_string().contains("FAILED"));
    }

    #[test]
    fn test_grams_display() {
        let result = GramsResult {
            text: "cat".into(),
            groups: NGramBuilder::build("cat", &[2]).groups().to_vec(),
        };
        assert_eq!(result.to_string(), "start2   ca\nend2     at\ngram2    ca at\n");
    }
}
