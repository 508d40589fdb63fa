//! Extraction of annotated functions and classes from Lua sources.
//!
//! A documentation block is a run of consecutive `---` lines. The first
//! non-comment line after a block decides what the block documents: a
//! function definition turns it into a [`LuaFunction`], anything else only
//! contributes the `---@class`/`---@alias` definitions it contains.

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::annotation::{DocLine, parse_doc_line};
use crate::error::{Error, Result};
use crate::types::{LuaClass, LuaFunction, LuaParam, ParsedFile, TypeCatalog};

/// `function M.name(args)` / `function M:name(args)` / `function name(args)`
static FUNCTION_DEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^function\s+(?:([A-Za-z_][\w.]*)([.:]))?([A-Za-z_]\w*)\s*\(([^)]*)\)")
        .expect("Invalid function definition regex")
});

/// `M.name = function(args)`
static ASSIGNED_FUNCTION_DEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_][\w.]*)\.([A-Za-z_]\w*)\s*=\s*function\s*\(([^)]*)\)")
        .expect("Invalid assigned function regex")
});

/// `local function name(args)`
static LOCAL_FUNCTION_DEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^local\s+function\s+[A-Za-z_]\w*\s*\(").expect("Invalid local function regex")
});

/// Parse every `*.lua` file below `dir` into a catalog.
///
/// Files are visited in sorted order so the catalog is deterministic.
///
/// # Errors
/// - `Error::NotADirectory` if `dir` is not a directory.
/// - `Error::Fs` if a directory or file cannot be read.
///
/// # Example
/// ```no_run
/// use std::path::Path;
///
/// use docgen_lua::parse_directory;
///
/// let catalog = parse_directory(Path::new("lua")).unwrap();
/// for func in catalog.functions("quicker/init.lua").unwrap_or_default() {
///     println!("{}", func.signature());
/// }
/// ```
pub fn parse_directory(dir: &Path) -> Result<TypeCatalog> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    collect_lua_files(dir, &mut files)?;
    files.sort();

    let mut catalog = TypeCatalog::default();
    for path in files {
        let key = catalog_key(dir, &path);
        let text = docgen_fs::read_text(&path)?;
        let parsed = parse_source(&text);
        tracing::debug!(
            file = %key,
            functions = parsed.functions.len(),
            classes = parsed.classes.len(),
            "parsed lua file"
        );
        catalog.merge(key, parsed);
    }
    Ok(catalog)
}

fn collect_lua_files(dir: &Path, out: &mut Vec<std::path::PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| docgen_fs::Error::io(dir, e))?;
    for entry in entries {
        let path = entry.map_err(|e| docgen_fs::Error::io(dir, e))?.path();
        if path.is_dir() {
            collect_lua_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "lua") {
            out.push(path);
        }
    }
    Ok(())
}

/// Path of `file` relative to `root`, joined with forward slashes.
fn catalog_key(root: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Parse a single Lua source file.
pub fn parse_source(text: &str) -> ParsedFile {
    let mut parsed = ParsedFile::default();
    let mut block: Vec<DocLine> = Vec::new();

    let source: Vec<&str> = text.lines().collect();
    for (idx, raw) in source.iter().enumerate() {
        let line = raw.trim_start();
        if let Some(rest) = line.strip_prefix("---") {
            block.push(parse_doc_line(rest));
            continue;
        }
        if block.is_empty() {
            continue;
        }

        let lines = std::mem::take(&mut block);
        collect_types(&lines, &mut parsed);
        if let Some(mut func) = match_function(&definition_at(&source, idx)) {
            func.line = idx + 1;
            if apply_block(&mut func, lines) {
                parsed.functions.push(func);
            }
        }
    }
    collect_types(&block, &mut parsed);
    parsed
}

/// The definition starting at `source[idx]`, with a parameter list that
/// wraps over several lines joined onto one.
fn definition_at<'a>(source: &[&'a str], idx: usize) -> Cow<'a, str> {
    let first = source[idx].trim_start();
    if !first.contains('(') || first.contains(')') {
        return Cow::Borrowed(first);
    }
    let mut joined = first.to_string();
    for next in &source[idx + 1..] {
        joined.push(' ');
        joined.push_str(next.trim());
        if next.contains(')') {
            break;
        }
    }
    Cow::Owned(joined)
}

/// Record the classes and aliases a block defines.
fn collect_types(lines: &[DocLine], parsed: &mut ParsedFile) {
    let mut current: Option<LuaClass> = None;
    for line in lines {
        match line {
            DocLine::Class { name, parent } => {
                parsed.classes.extend(current.take());
                current = Some(LuaClass {
                    name: name.clone(),
                    parent: parent.clone(),
                    fields: Vec::new(),
                });
            }
            DocLine::Field(field) => {
                if let Some(class) = current.as_mut() {
                    class.fields.push(field.clone());
                }
            }
            DocLine::Alias { name, ty } => parsed.aliases.push((name.clone(), ty.clone())),
            _ => {}
        }
    }
    parsed.classes.extend(current);
}

/// A function skeleton for a definition line, without documentation.
///
/// Local functions are never part of a module's API and yield `None`.
fn match_function(line: &str) -> Option<LuaFunction> {
    if LOCAL_FUNCTION_DEF.is_match(line) {
        return None;
    }
    if let Some(caps) = FUNCTION_DEF.captures(line) {
        return Some(LuaFunction {
            name: caps[3].to_string(),
            module: caps.get(1).map(|m| m.as_str().to_string()),
            method: caps.get(2).is_some_and(|m| m.as_str() == ":"),
            params: signature_params(&caps[4]),
            ..LuaFunction::default()
        });
    }
    ASSIGNED_FUNCTION_DEF.captures(line).map(|caps| LuaFunction {
        name: caps[2].to_string(),
        module: Some(caps[1].to_string()),
        method: false,
        params: signature_params(&caps[3]),
        ..LuaFunction::default()
    })
}

fn signature_params(args: &str) -> Vec<LuaParam> {
    args.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| LuaParam {
            name: name.to_string(),
            ty: "any".to_string(),
            description: String::new(),
        })
        .collect()
}

/// Fill `func` from its documentation block.
///
/// Returns `false` if the block marks the function as private.
fn apply_block(func: &mut LuaFunction, lines: Vec<DocLine>) -> bool {
    let mut in_note = false;
    let mut in_class = false;

    for line in lines {
        match line {
            DocLine::Private => return false,
            DocLine::Class { .. } => in_class = true,
            DocLine::Text(text) if in_note => {
                if let Some(note) = func.note.as_mut() {
                    if !note.is_empty() {
                        note.push('\n');
                    }
                    note.push_str(text.trim());
                }
            }
            DocLine::Text(text) if !in_class => func.summary.push(text),
            DocLine::Param(param) => {
                in_note = false;
                if let Some(slot) = func.params.iter_mut().find(|p| p.name == param.name) {
                    *slot = param;
                }
            }
            DocLine::Return(ret) => {
                in_note = false;
                func.returns.push(ret);
            }
            DocLine::Note(text) => {
                in_note = true;
                func.note = Some(text);
            }
            DocLine::Deprecated(text) => {
                in_note = false;
                func.deprecated = Some(text);
            }
            _ => in_note = false,
        }
    }

    while func.summary.last().is_some_and(|l| l.trim().is_empty()) {
        func.summary.pop();
    }
    true
}
