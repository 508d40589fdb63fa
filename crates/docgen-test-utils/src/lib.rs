//! Shared test utilities for the plugin-docgen workspace.
//!
//! Provides [`TestPlugin`], a throwaway Neovim plugin checkout with a README
//! carrying every managed region, a Lua module with annotations and a
//! `config.lua` defaults block. It is a dev-dependency only.

pub mod plugin;

pub use plugin::TestPlugin;
