//! [`TestPlugin`] builder for documentation generation scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// README with the title, the three managed regions and some prose around
/// them.
pub const README: &str = "# quicker.nvim

Improved UI and workflow for the Neovim quickfix

<!-- TOC -->
<!-- /TOC -->

## Requirements

- Neovim 0.10+

## Options

A complete list of all configuration options

<!-- OPTIONS -->
<!-- /OPTIONS -->

## API

<!-- API -->
<!-- /API -->

## Other plugins

Nothing to see here
";

pub const INIT_LUA: &str = "local M = {}

---@class quicker.OpenOpts
---@field loclist? boolean Toggle the loclist instead of the quickfix list
---@field height? integer Height of the window

---Toggle the quickfix or loclist window.
---@param opts? quicker.OpenOpts
function M.toggle(opts)
end

---Return true if the window is open.
---@param loclist? boolean
---@return boolean
function M.is_open(loclist)
end

---@private
function M._setup_autocmds()
end

return M
";

pub const CONFIG_LUA: &str = "local M = {}

local default_config = {
  -- Local options to set for quickfix
  opts = {
    buflisted = false,
  },
  edit = {
    enabled = true,
  },
}

return M
";

/// A temporary plugin checkout named `<name>.nvim`.
///
/// # Example
///
/// ```rust,no_run
/// use docgen_test_utils::TestPlugin;
///
/// let plugin = TestPlugin::standard("quicker");
/// plugin.assert_file_exists("README.md");
/// ```
pub struct TestPlugin {
    _temp_dir: TempDir,
    root: PathBuf,
    name: String,
}

impl TestPlugin {
    /// An empty plugin directory.
    pub fn new(name: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join(format!("{name}.nvim"));
        fs::create_dir_all(&root).unwrap();
        Self {
            _temp_dir: temp_dir,
            root,
            name: name.to_string(),
        }
    }

    /// A plugin with README, `lua/<name>/init.lua` and `lua/<name>/config.lua`.
    pub fn standard(name: &str) -> Self {
        let plugin = Self::new(name);
        plugin.write("README.md", README);
        plugin.write(&format!("lua/{name}/init.lua"), INIT_LUA);
        plugin.write(&format!("lua/{name}/config.lua"), CONFIG_LUA);
        plugin
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write a file relative to the plugin root, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Read a file relative to the plugin root.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root.join(relative))
            .unwrap_or_else(|e| panic!("failed to read {relative}: {e}"))
    }

    pub fn assert_file_exists(&self, relative: &str) {
        assert!(
            self.root.join(relative).is_file(),
            "expected {relative} to exist under {}",
            self.root.display()
        );
    }

    pub fn assert_file_contains(&self, relative: &str, needle: &str) {
        let content = self.read(relative);
        assert!(
            content.contains(needle),
            "expected {relative} to contain {needle:?}, got:\n{content}"
        );
    }
}
