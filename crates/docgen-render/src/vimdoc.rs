//! Vim help file rendering.

use docgen_lua::{LuaFunction, TypeCatalog};

use crate::text::{pad, width};

/// Text width of a help file.
const WIDTH: usize = 80;

/// One titled, tagged section of a help file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VimdocSection {
    pub name: String,
    pub tag: String,
    pub body: Vec<String>,
}

impl VimdocSection {
    pub fn new(name: impl Into<String>, tag: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            body,
        }
    }
}

/// A complete help file: header, table of contents, sections and modeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vimdoc {
    pub filename: String,
    pub project: String,
    pub sections: Vec<VimdocSection>,
}

impl Vimdoc {
    pub fn new(filename: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            project: project.into(),
            sections: Vec::new(),
        }
    }

    /// Render the whole file as newline-terminated lines.
    pub fn render(&self) -> Vec<String> {
        let separator = format!("{}\n", "-".repeat(WIDTH));
        let mut lines = vec![
            format!("*{}*\n", self.filename),
            format!(
                "*{}* *{}* *{}.nvim*\n",
                capitalize(&self.project),
                self.project,
                self.project
            ),
            separator.clone(),
        ];

        lines.extend(right_align(
            "CONTENTS",
            &format!("*{}-contents*", self.project),
        ));
        lines.push("\n".to_string());
        for (idx, section) in self.sections.iter().enumerate() {
            lines.extend(right_align(
                &format!("  {}. {}", idx + 1, section.name),
                &format!("|{}|", section.tag),
            ));
        }
        lines.push("\n".to_string());

        for section in &self.sections {
            lines.push(separator.clone());
            lines.extend(right_align(
                &section.name.to_uppercase(),
                &format!("*{}*", section.tag),
            ));
            lines.extend(section.body.iter().cloned());
            lines.push("\n".to_string());
        }

        lines.push(format!("{}\n", "=".repeat(WIDTH)));
        lines.push("vim:tw=80:ts=2:ft=help:norl:syntax=help:\n".to_string());
        lines
    }
}

/// Render help-file entries for `funcs`, tagged `*{prefix}.{name}*`.
pub fn render_vimdoc_api(
    prefix: &str,
    funcs: &[LuaFunction],
    catalog: &TypeCatalog,
) -> Vec<String> {
    let mut lines = vec!["\n".to_string()];
    for func in funcs {
        render_function(&mut lines, prefix, func, catalog);
    }
    lines
}

fn render_function(
    lines: &mut Vec<String>,
    prefix: &str,
    func: &LuaFunction,
    catalog: &TypeCatalog,
) {
    let params: Vec<String> = func.params.iter().map(|p| format!("{{{}}}", p.name)).collect();
    let mut heading = format!("{}({})", func.name, params.join(", "));
    if let Some(ret) = func.return_types() {
        heading.push_str(&format!(": {ret}"));
    }
    lines.extend(right_align(&heading, &format!("*{prefix}.{}*", func.name)));

    for line in &func.summary {
        if line.is_empty() {
            lines.push("\n".to_string());
        } else {
            lines.push(format!("    {line}\n"));
        }
    }

    if let Some(deprecated) = &func.deprecated {
        lines.push("\n".to_string());
        if deprecated.is_empty() {
            lines.push("    Deprecated\n".to_string());
        } else {
            lines.push(format!("    Deprecated: {deprecated}\n"));
        }
    }

    if !func.params.is_empty() {
        lines.push("\n".to_string());
        lines.push("    Parameters:\n".to_string());
        let name_width = func
            .params
            .iter()
            .map(|p| width(&p.name) + 2)
            .max()
            .unwrap_or(0);
        for param in &func.params {
            let name = pad(&format!("{{{}}}", param.name), name_width);
            lines.push(entry(6, &name, &param.ty, &param.description));
            if let Some(class) = catalog.class_for(&param.ty) {
                let fields = catalog.fields_of(class);
                let field_width = fields
                    .iter()
                    .map(|f| width(&f.name) + 2)
                    .max()
                    .unwrap_or(0);
                for field in fields {
                    let name = pad(&format!("{{{}}}", field.name), field_width);
                    lines.push(entry(10, &name, &field.ty, &field.description));
                }
            }
        }
    }

    if !func.returns.is_empty() {
        lines.push("\n".to_string());
        lines.push("    Returns:\n".to_string());
        for ret in &func.returns {
            let mut parts = vec![format!("`{}`", ret.ty)];
            parts.extend(ret.name.clone());
            if !ret.description.is_empty() {
                parts.push(ret.description.clone());
            }
            lines.push(format!("      {}\n", parts.join(" ")));
        }
    }

    if let Some(note) = &func.note {
        lines.push("\n".to_string());
        lines.push("    Note:\n".to_string());
        for line in note.lines() {
            if line.trim().is_empty() {
                lines.push("\n".to_string());
            } else {
                lines.push(format!("      {line}\n"));
            }
        }
    }

    lines.push("\n".to_string());
}

/// `{name} `type` description` at `indent` spaces.
fn entry(indent: usize, name: &str, ty: &str, description: &str) -> String {
    let mut line = format!("{}{name} `{ty}`", " ".repeat(indent));
    if !description.is_empty() {
        line.push(' ');
        line.push_str(description);
    }
    line.push('\n');
    line
}

/// `left` and `right` on one line of [`WIDTH`] chars, or `right` on its own
/// right-aligned line when they do not fit together.
fn right_align(left: &str, right: &str) -> Vec<String> {
    let used = width(left) + width(right);
    if used < WIDTH {
        vec![format!("{left}{}{right}\n", " ".repeat(WIDTH - used))]
    } else {
        let fill = WIDTH.saturating_sub(width(right));
        vec![
            format!("{}{right}\n", " ".repeat(fill)),
            format!("{left}\n"),
        ]
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_right_align_fits() {
        let lines = right_align("CONTENTS", "*quicker-contents*");
        assert_eq!(lines.len(), 1);
        assert_eq!(width(lines[0].trim_end_matches('\n')), WIDTH);
        assert!(lines[0].starts_with("CONTENTS "));
        assert!(lines[0].ends_with("*quicker-contents*\n"));
    }

    #[test]
    fn test_right_align_overflow_puts_tag_first() {
        let left = "x".repeat(70);
        let lines = right_align(&left, "*quicker.some_long_name*");
        assert_eq!(lines.len(), 2);
        assert!(lines[0].trim_start().starts_with("*quicker."));
        assert_eq!(width(lines[0].trim_end_matches('\n')), WIDTH);
        assert_eq!(lines[1], format!("{left}\n"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("quicker"), "Quicker");
        assert_eq!(capitalize(""), "");
    }
}
