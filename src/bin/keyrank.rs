//! `keyrank` — extract ranked keywords from a plain-text document.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use keyrank::io::{messages, CorpusFile, DocumentSource, ResultSink};
use keyrank::types::MAX_RESULTS;
use keyrank::{
    extract_keywords, CorpusIndex, ExtractParams, KeyrankError, Language, OutputConfig,
};

#[derive(Parser)]
#[command(
    name = "keyrank",
    version,
    about = "Extract ranked keywords from a plain-text document"
)]
struct Cli {
    /// Document to analyze.
    document: PathBuf,

    /// Reference word-frequency corpus (one `rank word frequency` row per line).
    #[arg(short, long)]
    corpus: PathBuf,

    /// Print bare words instead of ranked lines with scores.
    #[arg(long)]
    terse: bool,

    /// Language of status messages.
    #[arg(long, value_enum, default_value = "cs")]
    language: LanguageArg,

    /// Maximum number of keywords to print (capped at 20).
    #[arg(long, default_value_t = MAX_RESULTS)]
    top: usize,

    /// How many of the most frequent corpus words to treat as stop words.
    #[arg(long, default_value_t = keyrank::types::STOP_WORD_COUNT)]
    stop_words: usize,

    /// Emit the ranked list as a JSON array instead of lines.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum LanguageArg {
    /// Czech
    Cs,
    /// English
    En,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Cs => Language::Czech,
            LanguageArg::En => Language::English,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let language = Language::from(cli.language);

    let text = DocumentSource::new(&cli.document).read_all()?;
    let entries = CorpusFile::new(&cli.corpus).load_entries()?;
    let corpus = CorpusIndex::new(entries);

    let params = ExtractParams {
        stop_word_count: cli.stop_words,
        max_results: cli.top.min(MAX_RESULTS),
    };

    let results = match extract_keywords(&text, &corpus, &params) {
        Ok(results) => results,
        Err(err @ KeyrankError::EmptyInput) => {
            // Fatal: report in the selected language, fail outward.
            eprintln!("{}", messages::empty_document(language));
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        // No candidate matched the corpus. Well-formed empty result.
        println!("{}", messages::no_keywords(language));
        return Ok(());
    }

    let config = OutputConfig {
        verbose: !cli.terse,
        language,
    };
    let stdout = io::stdout();
    let mut sink = ResultSink::new(stdout.lock());
    if config.verbose {
        sink.write_line(&messages::results_header(language, results.len()))
            .context("writing output")?;
    }
    sink.write_results(&results, &config)
        .context("writing output")?;
    sink.into_inner().flush().context("writing output")?;
    Ok(())
}
