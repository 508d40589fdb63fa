//! Catalog of annotated Lua types and functions.

use std::collections::BTreeMap;

/// Everything extracted from a directory of Lua sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeCatalog {
    /// Parsed files keyed by their path relative to the scanned directory,
    /// always with forward slashes (`quicker/init.lua`).
    pub files: BTreeMap<String, LuaFile>,
    /// `---@class` definitions from every file, keyed by class name.
    pub classes: BTreeMap<String, LuaClass>,
    /// `---@alias` definitions from every file.
    pub aliases: BTreeMap<String, String>,
}

impl TypeCatalog {
    /// Functions of one file, or `None` if the file was not scanned.
    pub fn functions(&self, file: &str) -> Option<&[LuaFunction]> {
        self.files.get(file).map(|f| f.functions.as_slice())
    }

    /// The class a type expression refers to, ignoring a `nil|` or `|nil`
    /// alternative and a trailing `?`. Aliases are followed.
    pub fn class_for(&self, ty: &str) -> Option<&LuaClass> {
        let mut ty = ty;
        // Bounded so alias cycles terminate.
        for _ in 0..=self.aliases.len() {
            let name = single_type(ty)?;
            if let Some(class) = self.classes.get(name) {
                return Some(class);
            }
            ty = self.aliases.get(name)?.as_str();
        }
        None
    }

    /// Fields of `class`, inherited ones from its `---@class A: B` parents
    /// first.
    pub fn fields_of<'a>(&'a self, class: &'a LuaClass) -> Vec<&'a LuaField> {
        let mut chain = vec![class];
        let mut parent = class.parent.as_deref();
        while let Some(name) = parent {
            let Some(next) = self.classes.get(name) else {
                break;
            };
            if chain.iter().any(|c| c.name == next.name) {
                break;
            }
            chain.push(next);
            parent = next.parent.as_deref();
        }
        chain.into_iter().rev().flat_map(|c| c.fields.iter()).collect()
    }

    pub(crate) fn merge(&mut self, key: String, parsed: ParsedFile) {
        self.classes
            .extend(parsed.classes.into_iter().map(|c| (c.name.clone(), c)));
        self.aliases.extend(parsed.aliases);
        self.files.insert(
            key,
            LuaFile {
                functions: parsed.functions,
            },
        );
    }
}

/// The one non-nil alternative of a type expression.
fn single_type(ty: &str) -> Option<&str> {
    let ty = ty.trim().trim_end_matches('?');
    let mut candidates = ty.split('|').map(str::trim).filter(|t| *t != "nil");
    let name = candidates.next()?;
    candidates.next().is_none().then_some(name)
}

/// Public functions of a single Lua file, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LuaFile {
    pub functions: Vec<LuaFunction>,
}

/// Output of parsing a single file, before it is merged into a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFile {
    pub functions: Vec<LuaFunction>,
    pub classes: Vec<LuaClass>,
    pub aliases: Vec<(String, String)>,
}

/// An annotated function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LuaFunction {
    /// Function name without its module table (`toggle` for `M.toggle`).
    pub name: String,
    /// The table the function is defined on (`M`), if any.
    pub module: Option<String>,
    /// Defined with `:` and therefore takes an implicit `self`.
    pub method: bool,
    pub params: Vec<LuaParam>,
    pub returns: Vec<LuaReturn>,
    /// Free-text description lines, without the `--- ` prefix.
    pub summary: Vec<String>,
    pub note: Option<String>,
    pub deprecated: Option<String>,
    /// 1-based line of the definition.
    pub line: usize,
}

impl LuaFunction {
    /// Stable identifier within a file: `M.toggle`, or `toggle` for globals.
    pub fn id(&self) -> String {
        match &self.module {
            Some(module) => format!("{module}.{}", self.name),
            None => self.name.clone(),
        }
    }

    /// `name(a, b)`
    pub fn signature(&self) -> String {
        let params: Vec<&str> = self.params.iter().map(|p| p.name.as_str()).collect();
        format!("{}({})", self.name, params.join(", "))
    }

    /// Return types joined with `, `, or `None` if nothing is returned.
    pub fn return_types(&self) -> Option<String> {
        if self.returns.is_empty() {
            return None;
        }
        let types: Vec<&str> = self.returns.iter().map(|r| r.ty.as_str()).collect();
        Some(types.join(", "))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LuaParam {
    pub name: String,
    pub ty: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LuaReturn {
    pub ty: String,
    pub name: Option<String>,
    pub description: String,
}

/// A `---@class` with its `---@field`s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LuaClass {
    pub name: String,
    pub parent: Option<String>,
    pub fields: Vec<LuaField>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LuaField {
    pub name: String,
    pub ty: String,
    pub description: String,
}
