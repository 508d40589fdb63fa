//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Regenerate the README sections and vim help file of a Neovim plugin
#[derive(Parser, Debug)]
#[command(name = "docgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Plugin root directory (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}
