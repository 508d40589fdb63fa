//! Filesystem helpers for plugin-docgen
//!
//! Whole-file text reads, atomic whole-file writes and TOML config loading.
//! Every document the generator touches goes through this crate so that
//! errors always carry the offending path.

pub mod config;
pub mod error;
pub mod io;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use io::{read_text, write_atomic, write_if_changed, write_text};
