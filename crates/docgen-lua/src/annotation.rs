//! Parsing of single `---` documentation lines.

use crate::types::{LuaField, LuaParam, LuaReturn};

/// One `---` line of a documentation block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocLine {
    /// Free text (may be empty for a bare `---`).
    Text(String),
    Param(LuaParam),
    Return(LuaReturn),
    Note(String),
    Private,
    Deprecated(String),
    Class { name: String, parent: Option<String> },
    Field(LuaField),
    Alias { name: String, ty: String },
    /// A recognised-but-ignored or unknown annotation (`@type`, `@generic`, ...).
    Other,
}

/// Parse the text following `---` on a documentation line.
pub fn parse_doc_line(rest: &str) -> DocLine {
    let trimmed = rest.trim();
    let Some(annotation) = trimmed.strip_prefix('@') else {
        let text = rest.strip_prefix(' ').unwrap_or(rest);
        return DocLine::Text(text.trim_end().to_string());
    };

    let (tag, body) = split_word(annotation);
    match tag {
        "param" => parse_param(body).map_or(DocLine::Other, DocLine::Param),
        "return" => parse_return(body).map_or(DocLine::Other, DocLine::Return),
        "note" => DocLine::Note(body.to_string()),
        "private" | "package" => DocLine::Private,
        "deprecated" => DocLine::Deprecated(body.to_string()),
        "class" => parse_class(body),
        "field" => parse_field(body).map_or(DocLine::Other, DocLine::Field),
        "alias" => {
            let (name, ty) = split_word(body);
            if name.is_empty() {
                DocLine::Other
            } else {
                DocLine::Alias {
                    name: name.to_string(),
                    ty: ty.to_string(),
                }
            }
        }
        _ => DocLine::Other,
    }
}

fn parse_param(body: &str) -> Option<LuaParam> {
    let (name, rest) = split_word(body);
    if name.is_empty() {
        return None;
    }
    let (ty, description) = split_type(rest);
    let (name, ty) = apply_optional(name, ty);
    Some(LuaParam {
        name,
        ty,
        description: description.to_string(),
    })
}

fn parse_return(body: &str) -> Option<LuaReturn> {
    let (ty, rest) = split_type(body);
    if ty.is_empty() {
        return None;
    }
    let (name, description) = if let Some(comment) = rest.strip_prefix('#') {
        (None, comment.trim())
    } else {
        let (word, after) = split_word(rest);
        if is_identifier(word) {
            (Some(word.to_string()), after.trim_start_matches('#').trim())
        } else {
            (None, rest)
        }
    };
    Some(LuaReturn {
        ty: ty.to_string(),
        name,
        description: description.to_string(),
    })
}

fn parse_class(body: &str) -> DocLine {
    let body = body.strip_prefix("(exact)").unwrap_or(body).trim();
    let (name, parent) = match body.split_once(':') {
        Some((name, parent)) => (name.trim(), Some(split_word(parent).0.to_string())),
        None => (split_word(body).0, None),
    };
    if name.is_empty() {
        return DocLine::Other;
    }
    DocLine::Class {
        name: name.to_string(),
        parent: parent.filter(|p| !p.is_empty()),
    }
}

fn parse_field(body: &str) -> Option<LuaField> {
    let (first, rest) = split_word(body);
    let (name, rest) = match first {
        "private" | "protected" => return None,
        "public" | "package" => split_word(rest),
        _ => (first, rest),
    };
    if name.is_empty() || name.starts_with('[') {
        return None;
    }
    let (ty, description) = split_type(rest);
    let (name, ty) = apply_optional(name, ty);
    Some(LuaField {
        name,
        ty,
        description: description.to_string(),
    })
}

/// `opts?` with type `T` becomes `opts` with type `nil|T`.
fn apply_optional(name: &str, ty: &str) -> (String, String) {
    match name.strip_suffix('?') {
        Some(bare) if !ty.starts_with("nil|") => (bare.to_string(), format!("nil|{ty}")),
        Some(bare) => (bare.to_string(), ty.to_string()),
        None => (name.to_string(), ty.to_string()),
    }
}

/// Split off the first whitespace-delimited word.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], s[idx..].trim_start()),
        None => (s, ""),
    }
}

fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Split a leading type expression from the rest of the line.
///
/// Whitespace ends the type only at bracket depth zero, and not when it sits
/// next to a `|` union bar or after a `:`/`,` inside a function type, so
/// `fun(a: string): boolean the callback` yields
/// `("fun(a: string): boolean", "the callback")`.
pub fn split_type(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut depth = 0usize;
    let mut idx = 0;

    while idx < bytes.len() {
        match bytes[idx] {
            b'(' | b'<' | b'[' | b'{' => depth += 1,
            b')' | b'>' | b']' | b'}' => depth = depth.saturating_sub(1),
            b if b.is_ascii_whitespace() && depth == 0 => {
                let prev = s[..idx].trim_end().bytes().last();
                let next_idx = idx + s[idx..].len() - s[idx..].trim_start().len();
                let next = bytes.get(next_idx).copied();
                let joins = matches!(prev, Some(b'|' | b':' | b','))
                    || matches!(next, Some(b'|'));
                if !joins {
                    return (&s[..idx], s[idx..].trim_start());
                }
                idx = next_idx;
                continue;
            }
            _ => {}
        }
        idx += 1;
    }
    (s, "")
}
