//! Documentation generator for Neovim Lua plugins.
//!
//! Keeps the managed regions of a plugin README in sync with the plugin's
//! Lua sources and regenerates its vim help file. The [`Orchestrator`] runs
//! the four update steps; the `docgen` binary is a thin wrapper around it.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod orchestrator;

pub use config::{CONFIG_FILE_NAME, DocgenConfig};
pub use error::{CliError, Result};
pub use orchestrator::{Orchestrator, RunReport, Step, StepOutcome};
