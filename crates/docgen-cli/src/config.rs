//! Generator configuration.
//!
//! Every path the generator reads or writes comes from a [`DocgenConfig`]
//! built for a plugin root. Defaults follow the usual Neovim plugin layout
//! and can be overridden by a `docgen.toml` next to the README:
//!
//! ```toml
//! plugin = "quicker"
//! vimdoc = "doc/quicker.txt"
//! toc_max_level = 2
//! ```

use std::path::{Path, PathBuf};

use docgen_fs::ConfigStore;
use serde::Deserialize;

use crate::error::{CliError, Result};

/// Name of the optional override file at the plugin root.
pub const CONFIG_FILE_NAME: &str = "docgen.toml";

/// Overrides read from `docgen.toml`. Relative paths are resolved against the
/// plugin root.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigOverrides {
    plugin: Option<String>,
    readme: Option<PathBuf>,
    lua_dir: Option<PathBuf>,
    module: Option<String>,
    config_file: Option<PathBuf>,
    vimdoc: Option<PathBuf>,
    toc_max_level: Option<usize>,
    api_heading_level: Option<usize>,
}

/// Where the documentation sources and outputs of one plugin live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocgenConfig {
    pub root: PathBuf,
    /// Lua module name, also used for help tags (`quicker`).
    pub plugin: String,
    pub readme: PathBuf,
    /// Directory scanned for annotations.
    pub lua_dir: PathBuf,
    /// Catalog key of the documented module, relative to `lua_dir`.
    pub module: String,
    /// Lua file holding the `local default_config = {` block.
    pub config_file: PathBuf,
    pub vimdoc: PathBuf,
    /// Deepest README heading level listed in the table of contents.
    pub toc_max_level: usize,
    /// Heading level of each function in the README API section.
    pub api_heading_level: usize,
}

impl DocgenConfig {
    /// Default layout for `plugin` rooted at `root`.
    pub fn for_plugin(root: impl Into<PathBuf>, plugin: &str) -> Self {
        let root = root.into();
        Self {
            readme: root.join("README.md"),
            lua_dir: root.join("lua"),
            module: format!("{plugin}/init.lua"),
            config_file: root.join("lua").join(plugin).join("config.lua"),
            vimdoc: root.join("doc").join(format!("{plugin}.txt")),
            toc_max_level: 2,
            api_heading_level: 3,
            plugin: plugin.to_string(),
            root,
        }
    }

    /// Configuration for the plugin checked out at `root`.
    ///
    /// The plugin name defaults to the root directory name without its
    /// `.nvim`-style decoration; `docgen.toml` may override any field.
    ///
    /// # Errors
    /// - `CliError::Config` if no plugin name can be derived.
    /// - `CliError::Fs` if `docgen.toml` exists but cannot be parsed.
    pub fn resolve(root: &Path) -> Result<Self> {
        let overrides: ConfigOverrides = ConfigStore::new()
            .load_optional(&root.join(CONFIG_FILE_NAME))?
            .unwrap_or_default();

        let plugin = match overrides.plugin {
            Some(plugin) => plugin,
            None => plugin_name_from_dir(root).ok_or_else(|| {
                CliError::config(format!(
                    "cannot derive a plugin name from {}; set `plugin` in {CONFIG_FILE_NAME}",
                    root.display()
                ))
            })?,
        };
        if plugin.trim().is_empty() {
            return Err(CliError::config("`plugin` must not be empty"));
        }

        let mut config = Self::for_plugin(root, &plugin);
        let at_root = |p: PathBuf| root.join(p);
        if let Some(readme) = overrides.readme {
            config.readme = at_root(readme);
        }
        if let Some(lua_dir) = overrides.lua_dir {
            config.lua_dir = at_root(lua_dir);
        }
        if let Some(module) = overrides.module {
            config.module = module;
        }
        if let Some(config_file) = overrides.config_file {
            config.config_file = at_root(config_file);
        }
        if let Some(vimdoc) = overrides.vimdoc {
            config.vimdoc = at_root(vimdoc);
        }
        if let Some(level) = overrides.toc_max_level {
            config.toc_max_level = level;
        }
        if let Some(level) = overrides.api_heading_level {
            if !(1..=6).contains(&level) {
                return Err(CliError::config(format!(
                    "`api_heading_level` must be between 1 and 6, got {level}"
                )));
            }
            config.api_heading_level = level;
        }

        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }

    /// File name of the help file (`quicker.txt`).
    pub fn vimdoc_filename(&self) -> String {
        self.vimdoc
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{}.txt", self.plugin))
    }
}

/// `quicker.nvim` -> `quicker`, `nvim-foo` -> `foo`, `bar-nvim` -> `bar`.
fn plugin_name_from_dir(root: &Path) -> Option<String> {
    let dir = root.file_name()?.to_string_lossy();
    let name = dir
        .strip_suffix(".nvim")
        .or_else(|| dir.strip_suffix("-nvim"))
        .or_else(|| dir.strip_suffix(".lua"))
        .unwrap_or(&*dir);
    let name = name.strip_prefix("nvim-").unwrap_or(name);
    (!name.is_empty()).then(|| name.to_string())
}
