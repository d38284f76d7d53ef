//! Count command: raw word, sentence, and syllable counts.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use text_metrics_core::readability::{SyllableMode, count_syllables};
use text_metrics_core::text::{count_sentences, count_words};

use super::read_input;

/// Arguments for the `count` subcommand.
#[derive(Args, Debug)]
pub struct CountArgs {
    /// File to analyze (`-` for standard input).
    pub file: Utf8PathBuf,

    /// How syllables are totalled.
    #[arg(long, value_enum)]
    pub mode: Option<SyllableMode>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct CountReport {
    words: usize,
    sentences: usize,
    syllables: usize,
    mode: SyllableMode,
}

impl CountReport {
    fn new(text: &str, mode: SyllableMode) -> Self {
        Self {
            words: count_words(text),
            sentences: count_sentences(text),
            syllables: count_syllables(text, mode),
            mode,
        }
    }
}

/// Print the three counts for a file. Never fails on degenerate text.
#[instrument(name = "cmd_count", skip_all, fields(file = %args.file))]
pub fn cmd_count(
    args: CountArgs,
    global_json: bool,
    config_mode: SyllableMode,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let mode = args.mode.unwrap_or(config_mode);
    debug!(mode = %mode, "executing count command");

    let content = read_input(&args.file, max_input_bytes)?;
    let report = CountReport::new(&content, mode);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}: {}", "words".dimmed(), report.words);
        println!("{}: {}", "sentences".dimmed(), report.sentences);
        println!("{}: {}", "syllables".dimmed(), report.syllables);
    }

    Ok(())
}
