//! Score command: Flesch reading ease and Flesch-Kincaid grade level.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use text_metrics_core::readability::{self, ReadabilityOptions, SyllableMode};

use super::read_input;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File to analyze (`-` for standard input).
    pub file: Utf8PathBuf,

    /// Maximum acceptable grade level.
    #[arg(long)]
    pub max_grade: Option<f64>,

    /// Minimum acceptable reading ease.
    #[arg(long)]
    pub min_ease: Option<f64>,

    /// How syllables are totalled.
    #[arg(long, value_enum)]
    pub mode: Option<SyllableMode>,
}

impl ScoreArgs {
    /// Flags override the configured defaults.
    fn options(&self, defaults: &ReadabilityOptions) -> ReadabilityOptions {
        ReadabilityOptions {
            mode: self.mode.unwrap_or(defaults.mode),
            max_grade: self.max_grade.or(defaults.max_grade),
            min_ease: self.min_ease.or(defaults.min_ease),
        }
    }
}

/// Score readability of a file.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    defaults: &ReadabilityOptions,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let options = args.options(defaults);
    debug!(
        max_grade = ?options.max_grade,
        min_ease = ?options.min_ease,
        mode = %options.mode,
        "executing score command"
    );

    let content = read_input(&args.file, max_input_bytes)?;

    let report = readability::check_readability(&content, &options)
        .with_context(|| format!("failed to score {}", args.file))?;
    let grade = report.metrics.grade_level;
    let ease = report.metrics.reading_ease;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.over_max {
        let max = report.max_grade.unwrap_or(0.0);
        bail!(
            "{} grades {:.1} (max: {:.1}). Shorten sentences or use shorter words.",
            args.file,
            grade,
            max,
        );
    } else if report.under_min {
        let min = report.min_ease.unwrap_or(0.0);
        bail!(
            "{} has reading ease {:.1} (min: {:.1}). Shorten sentences or use shorter words.",
            args.file,
            ease,
            min,
        );
    } else if report.max_grade.is_some() || report.min_ease.is_some() {
        println!(
            "{} {} grade {:.1}, ease {:.1}",
            "PASS:".green(),
            args.file,
            grade,
            ease,
        );
    } else {
        println!("grade: {grade:.1}");
        println!("ease: {ease:.1}");
    }

    // JSON callers still get a failing exit code.
    if global_json && !report.passes() {
        bail!("{} is outside the readability thresholds", args.file);
    }

    Ok(())
}
