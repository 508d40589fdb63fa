//! Error types for docgen-cli

use std::path::PathBuf;

use crate::orchestrator::Step;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while generating documentation
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from docgen-fs
    #[error(transparent)]
    Fs(#[from] docgen_fs::Error),

    /// Error from docgen-sections
    #[error(transparent)]
    Sections(#[from] docgen_sections::Error),

    /// Error from docgen-lua
    #[error(transparent)]
    Lua(#[from] docgen_lua::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The defaults block of the plugin's config file is missing or unterminated
    #[error("Malformed config block in {path}: {reason}")]
    MalformedConfigBlock { path: PathBuf, reason: String },

    /// The Lua module whose API is documented was not found
    #[error("Module {module} not found under {lua_dir}")]
    ModuleNotFound { module: String, lua_dir: PathBuf },

    /// Invalid generator configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Logging could not be initialized
    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },

    /// A generation step failed
    #[error("{step} failed: {source}")]
    Step {
        step: Step,
        #[source]
        source: Box<CliError>,
    },
}

impl CliError {
    /// Create a new configuration error with the given message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The underlying error, looking through any [`CliError::Step`] wrapper.
    pub fn root(&self) -> &CliError {
        match self {
            Self::Step { source, .. } => source.root(),
            other => other,
        }
    }
}
