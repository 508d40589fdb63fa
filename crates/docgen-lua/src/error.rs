//! Error types for docgen-lua

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] docgen_fs::Error),

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
