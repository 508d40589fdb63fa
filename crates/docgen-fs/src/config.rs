//! Configuration loading

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Error, Result, io};

/// Loads serde-deserializable configuration from disk.
///
/// The format is detected from the file extension. Only TOML is accepted;
/// anything else is reported as [`Error::UnsupportedFormat`].
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    /// Create a new ConfigStore.
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => {
                let content = io::read_text(path)?;
                toml::from_str(&content).map_err(|e| Error::ConfigParse {
                    path: path.to_path_buf(),
                    format: "TOML".into(),
                    message: e.to_string(),
                })
            }
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }

    /// Load configuration if the file exists, `None` otherwise.
    pub fn load_optional<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(None);
        }
        self.load(path).map(Some)
    }
}
