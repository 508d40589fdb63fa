//! `docgen` command-line entry point.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use docgen_cli::cli::Cli;
use docgen_cli::{DocgenConfig, Orchestrator, Result, logging};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().map_err(|e| docgen_fs::Error::io(".", e))?,
    };
    let root: PathBuf = dunce::canonicalize(&root).map_err(|e| docgen_fs::Error::io(&root, e))?;
    tracing::debug!(root = %root.display(), "generating documentation");

    let config = DocgenConfig::resolve(&root)?;
    let report = Orchestrator::new(config).run()?;

    for outcome in &report.outcomes {
        let status = if outcome.changed {
            "updated".green().bold()
        } else {
            "unchanged".dimmed()
        };
        let path = outcome.path.strip_prefix(&root).unwrap_or(&outcome.path);
        println!("{:>10} {} ({})", status, path.display(), outcome.step);
    }
    Ok(())
}
