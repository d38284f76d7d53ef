//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;
use text_metrics_core::readability::check_input_size;

pub mod count;
pub mod info;
pub mod score;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod syllables;

/// Read a file (or stdin for `-`) and validate its size against the
/// configured limit.
pub fn read_input(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == "-" {
        return read_stdin(max_bytes);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    check_input_size(size, max_bytes).with_context(|| format!("cannot read {path}"))?;

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut content = String::new();
    let stdin = std::io::stdin().lock();
    match max_bytes {
        // One byte past the limit is enough to know it was exceeded.
        Some(max) => {
            let limit = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            stdin
                .take(limit)
                .read_to_string(&mut content)
                .context("failed to read standard input")?;
            check_input_size(content.len(), max_bytes).context("cannot read standard input")?;
        }
        None => {
            let mut stdin = stdin;
            stdin
                .read_to_string(&mut content)
                .context("failed to read standard input")?;
        }
    }
    Ok(content)
}
