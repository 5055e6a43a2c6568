//! Command implementations for the spellgram CLI.
//!
//! Every command except `grams` first loads the configured dictionaries
//! into an in-memory backend and commits them.

use std::sync::Arc;

use anyhow::Context;

use crate::analysis::AnalyzerTokenizer;
use crate::backend::{IndexBackend, MemoryBackend};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SpellCheckConfig;
use crate::error::Result;
use crate::ngram::{NGramBuilder, NGramLengths};
use crate::spelling::{IndexSummary, QuerySuggester};

/// Execute a CLI command.
pub fn execute_command(args: SpellgramArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Check(check_args) => output_result(&run_check(check_args, &config)?, &args),
        Command::Suggest(suggest_args) => {
            output_result(&run_suggest(suggest_args, &config)?, &args)
        }
        Command::Index(index_args) => output_result(&run_index(index_args, &config)?, &args),
        Command::Grams(grams_args) => output_result(&run_grams(grams_args, &config), &args),
    }
}

/// Resolve the configuration from the file and command line overrides.
pub fn load_config(args: &SpellgramArgs) -> Result<SpellCheckConfig> {
    let mut config = match &args.config {
        Some(path) => SpellCheckConfig::load(path)
            .with_context(|| format!("Unable to load configuration {}", path.display()))?,
        None => SpellCheckConfig::default(),
    };

    if let Some(dir) = &args.dictionaries {
        config.dictionary_dir = dir.clone();
    }

    Ok(config)
}

/// Spell check a query.
pub fn run_check(args: &CheckArgs, config: &SpellCheckConfig) -> Result<CheckResult> {
    let locale = resolve_locale(args.locale.as_deref(), config);
    let suggester = load_suggester(config)?;

    let corrected = suggester.spell_check_keywords(&args.query, &locale)?;
    let suggestions = match args.max {
        Some(max) => Some(suggester.spell_check_keywords_map(&args.query, &locale, max)?),
        None => None,
    };

    Ok(CheckResult {
        query: args.query.clone(),
        locale,
        corrected,
        suggestions,
    })
}

/// Rank suggestions for one token.
pub fn run_suggest(args: &SuggestArgs, config: &SpellCheckConfig) -> Result<SuggestResult> {
    let locale = resolve_locale(args.locale.as_deref(), config);
    let suggester = load_suggester(config)?;

    let mut candidates = suggester.rank_token_similars(&locale, &args.token)?;
    candidates.truncate(args.max);

    Ok(SuggestResult {
        token: args.token.clone(),
        locale,
        candidates,
    })
}

/// Index the dictionaries and report what happened per file.
pub fn run_index(args: &IndexArgs, config: &SpellCheckConfig) -> Result<IndexReport> {
    let mut config = config.clone();
    if !args.locales.is_empty() {
        config.supported_locales = args.locales.clone();
    }
    if let Some(batch_size) = args.batch_size {
        config.batch_size = batch_size;
    }
    config.commit |= args.commit;
    config.validate()?;

    let (backend, summary) = load_backend(&config)?;
    Ok(IndexReport::new(&summary, backend.len()))
}

/// Decompose a text into n-grams.
pub fn run_grams(args: &GramsArgs, config: &SpellCheckConfig) -> GramsResult {
    let lengths = if args.lengths.is_empty() {
        config.ngram_lengths.clone()
    } else {
        NGramLengths::Fixed(args.lengths.clone())
    };
    let grams = NGramBuilder::build_with(&args.text, &lengths);

    GramsResult {
        text: args.text.clone(),
        groups: grams.groups().to_vec(),
    }
}

fn resolve_locale(locale: Option<&str>, config: &SpellCheckConfig) -> String {
    locale
        .map(str::to_string)
        .or_else(|| config.supported_locales.first().cloned())
        .unwrap_or_else(|| "en_US".to_string())
}

/// Index every supported locale into a fresh in-memory backend.
fn load_backend(config: &SpellCheckConfig) -> Result<(Arc<MemoryBackend>, IndexSummary)> {
    let backend = Arc::new(MemoryBackend::new());
    let summary = config
        .build_indexer(backend.clone())
        .index_dictionaries(&config.supported_locales)?;
    backend.commit()?;

    for failure in summary.failures() {
        if let Err(e) = &failure.result {
            log::warn!("Skipped dictionary for {}: {e}", failure.locale);
        }
    }

    Ok((backend, summary))
}

fn load_suggester(config: &SpellCheckConfig) -> Result<QuerySuggester> {
    let (backend, _) = load_backend(config)?;
    Ok(QuerySuggester::from_config(
        backend,
        Arc::new(AnalyzerTokenizer::default()),
        config,
    ))
}
