//! Lua annotation extraction for plugin-docgen.
//!
//! Scans a directory of Lua sources for LuaLS-style `---` annotations and
//! builds a [`TypeCatalog`]: the documented public functions of each file plus
//! every `---@class` and `---@alias` found along the way.
//!
//! ```text
//! ---Toggle the quickfix window
//! ---@param opts? quicker.OpenOpts
//! function M.toggle(opts) end
//! ```

pub mod annotation;
pub mod error;
pub mod parser;
pub mod types;

pub use error::{Error, Result};
pub use parser::{parse_directory, parse_source};
pub use types::{LuaClass, LuaField, LuaFile, LuaFunction, LuaParam, LuaReturn, TypeCatalog};
