//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Write `content` to a file in a fresh temp dir and return both.
fn text_file(content: &str) -> (TempDir, String) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("input.txt");
    fs::write(&path, content).unwrap();
    let path = path.to_str().unwrap().to_string();
    (tmp, path)
}

/// Run a command with `--json` and parse stdout.
fn json_output(args: &[&str], stdin: Option<&str>) -> Value {
    let mut command = cmd();
    command.args(args).arg("--json");
    if let Some(input) = stdin {
        command.write_stdin(input);
    }
    let output = command.output().expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("score"))
        .stdout(predicate::str::contains("syllables"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn unknown_subcommand_fails() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_is_valid() {
    let json = json_output(&["info"], None);
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["config"].is_object());
}

// =============================================================================
// Score Command
// =============================================================================

#[test]
fn score_prints_grade_and_ease() {
    let (_tmp, path) = text_file("The cat sat on the mat. The dog ran fast.");
    cmd()
        .args(["score", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("grade: -1.8"))
        .stdout(predicate::str::contains("ease: 117.2"));
}

#[test]
fn score_json_reports_counts_and_scores() {
    let (_tmp, path) = text_file("Hello world.");
    let json = json_output(&["score", &path], None);

    assert_eq!(json["words"], 2);
    assert_eq!(json["sentences"], 1);
    assert_eq!(json["syllables"], 3);
    assert_eq!(json["mode"], "whole-text");
    assert!((json["grade_level"].as_f64().unwrap() - 2.89).abs() < 1e-9);
    assert!((json["reading_ease"].as_f64().unwrap() - 77.905).abs() < 1e-9);
    assert_eq!(json["over_max"], false);
}

#[test]
fn score_reads_stdin() {
    let json = json_output(&["score", "-"], Some("Hello world."));
    assert_eq!(json["words"], 2);
    assert_eq!(json["syllables"], 3);
}

#[test]
fn score_passes_under_max_grade() {
    let (_tmp, path) = text_file("Hello world.");
    cmd()
        .args(["score", &path, "--max-grade", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS:"));
}

#[test]
fn score_fails_over_max_grade() {
    let (_tmp, path) = text_file("Hello world.");
    cmd()
        .args(["score", &path, "--max-grade", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("grades 2.9 (max: 1.0)"));
}

#[test]
fn score_fails_under_min_ease() {
    let (_tmp, path) = text_file("Hello world.");
    cmd()
        .args(["score", &path, "--min-ease", "90"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading ease 77.9 (min: 90.0)"));
}

#[test]
fn score_json_still_fails_on_threshold() {
    let (_tmp, path) = text_file("Hello world.");
    cmd()
        .args(["score", &path, "--max-grade", "1", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"over_max\": true"));
}

#[test]
fn score_rejects_text_without_sentences() {
    let (_tmp, path) = text_file("no punctuation at all");
    cmd()
        .args(["score", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no scorable text"));
}

#[test]
fn score_rejects_empty_input() {
    cmd()
        .args(["score", "-"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("0 words, 0 sentences"));
}

#[test]
fn score_missing_file_fails() {
    cmd()
        .args(["score", "/definitely/not/here.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Count Command
// =============================================================================

#[test]
fn count_prints_three_counts() {
    let (_tmp, path) = text_file("Hi. Bye!");
    cmd()
        .args(["count", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("words"))
        .stdout(predicate::str::contains("sentences"))
        .stdout(predicate::str::contains("syllables"));
}

#[test]
fn count_json_values() {
    let (_tmp, path) = text_file("Hi. Bye!");
    let json = json_output(&["count", &path], None);
    assert_eq!(json["words"], 2);
    assert_eq!(json["sentences"], 2);
    assert_eq!(json["syllables"], 3);
}

#[test]
fn count_succeeds_without_punctuation() {
    let json = json_output(&["count", "-"], Some("no punctuation at all"));
    assert_eq!(json["words"], 4);
    assert_eq!(json["sentences"], 0);
}

#[test]
fn count_mode_flag_changes_syllable_total() {
    let text = "The cafe is open. Come in.";
    let whole = json_output(&["count", "-"], Some(text));
    let per_word = json_output(&["count", "-", "--mode", "per-word"], Some(text));

    assert_eq!(whole["syllables"], 7);
    assert_eq!(per_word["syllables"], 8);
    assert_eq!(per_word["mode"], "per-word");
}

#[test]
fn count_rejects_invalid_mode() {
    cmd()
        .args(["count", "-", "--mode", "sideways"])
        .write_stdin("Hi.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// =============================================================================
// Syllables Command
// =============================================================================

#[test]
fn syllables_prints_each_word() {
    cmd()
        .args(["syllables", "hello", "beautiful", "psst"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello 2"))
        .stdout(predicate::str::contains("beautiful 3"))
        .stdout(predicate::str::contains("psst 1"));
}

#[test]
fn syllables_json_includes_normalized_form() {
    let json = json_output(&["syllables", "Hello,", "world"], None);
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["word"], "Hello,");
    assert_eq!(entries[0]["normalized"], "hello");
    assert_eq!(entries[0]["syllables"], 2);
}

#[test]
fn syllables_requires_a_word() {
    cmd().arg("syllables").assert().failure();
}

// =============================================================================
// Input Limit
// =============================================================================

#[test]
fn input_limit_from_config_rejects_large_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".text-metrics.toml"), "max_input_bytes = 4\n").unwrap();
    fs::write(tmp.path().join("input.txt"), "Far too long.").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "count", "input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn input_limit_applies_to_stdin() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".text-metrics.toml"), "max_input_bytes = 4\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "count", "-"])
        .write_stdin("Far too long.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn disabled_input_limit_accepts_large_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".text-metrics.toml"),
        "max_input_bytes = 4\ndisable_input_limit = true\n",
    )
    .unwrap();
    fs::write(tmp.path().join("input.txt"), "Far too long.").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "count", "input.txt"])
        .assert()
        .success();
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_and_color_flags_are_accepted() {
    let (_tmp, path) = text_file("Hello world.");
    cmd()
        .args(["--quiet", "--color", "never", "score", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("grade: 2.9"));
}

#[test]
fn chdir_to_missing_directory_fails() {
    cmd()
        .args(["-C", "/definitely/not/here", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to change directory"));
}
