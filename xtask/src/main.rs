//! Development tasks: man pages and shell completions.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Build helpers for text-metrics")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Render man pages for the CLI and every subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shells to generate for (default: all)
        #[arg(long, value_enum)]
        shell: Vec<Shell>,
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out_dir: PathBuf,
    },
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => man(&out_dir),
        Task::Completions { shell, out_dir } => completions(&shell, &out_dir),
    }
}

fn man(out_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let cmd = text_metrics::command();
    clap_mangen::generate_to(cmd, out_dir)?;
    println!("man pages written to {}", out_dir.display());
    Ok(())
}

fn completions(shells: &[Shell], out_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let shells = if shells.is_empty() {
        &[Shell::Bash, Shell::Elvish, Shell::Fish, Shell::PowerShell, Shell::Zsh][..]
    } else {
        shells
    };

    let mut cmd = text_metrics::command();
    for &shell in shells {
        let path = clap_complete::generate_to(shell, &mut cmd, "text-metrics", out_dir)?;
        println!("{shell} completions written to {}", path.display());
    }
    Ok(())
}
