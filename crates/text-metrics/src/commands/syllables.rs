//! Syllables command: per-word estimates.

use clap::Args;
use tracing::{debug, instrument};

use text_metrics_core::readability::syllable_breakdown;

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Words to estimate. Each argument is split on whitespace.
    #[arg(required = true)]
    pub words: Vec<String>,
}

/// Print the syllable estimate for each word.
#[instrument(name = "cmd_syllables", skip_all, fields(count = args.words.len()))]
pub fn cmd_syllables(args: SyllablesArgs, global_json: bool) -> anyhow::Result<()> {
    debug!("executing syllables command");

    let breakdown = syllable_breakdown(&args.words.join(" "));

    if global_json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        for entry in &breakdown {
            println!("{} {}", entry.word, entry.syllables);
        }
    }

    Ok(())
}
