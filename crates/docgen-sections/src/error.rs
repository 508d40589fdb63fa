//! Error types for docgen-sections

use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Which boundary of a managed region a marker pattern describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Start,
    End,
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] docgen_fs::Error),

    #[error("Invalid marker pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{kind} marker `{pattern}` not found in {path}")]
    MarkerNotFound {
        path: PathBuf,
        kind: MarkerKind,
        pattern: String,
    },

    #[error("Ambiguous region in {path}: start marker `{pattern}` matches lines {lines:?}")]
    AmbiguousRegion {
        path: PathBuf,
        pattern: String,
        /// 1-based line numbers of every matching line.
        lines: Vec<usize>,
    },
}
