//! Markdown API reference rendering.

use docgen_lua::{LuaFunction, TypeCatalog};

use crate::text::{pad, width};

/// Render an API reference section for `funcs`.
///
/// Each function gets a heading at `level`, its signature, summary, a
/// parameter table (class-typed parameters list their fields as `>field`
/// rows), a returns table, and any note or deprecation notice. Every function
/// block ends with one blank line.
pub fn render_md_api(funcs: &[LuaFunction], catalog: &TypeCatalog, level: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for func in funcs {
        render_function(&mut lines, func, catalog, level);
    }
    lines
}

fn render_function(
    lines: &mut Vec<String>,
    func: &LuaFunction,
    catalog: &TypeCatalog,
    level: usize,
) {
    let signature = func.signature();
    lines.push(format!("{} {}\n", "#".repeat(level.max(1)), signature));
    lines.push("\n".to_string());

    let full_signature = match func.return_types() {
        Some(ret) => format!("`{signature}: {ret}`"),
        None => format!("`{signature}`"),
    };
    if func.summary.is_empty() {
        lines.push(format!("{full_signature}\n"));
    } else {
        lines.push(format!("{full_signature} \\\n"));
        lines.extend(func.summary.iter().map(|l| format!("{l}\n")));
    }

    if !func.params.is_empty() {
        let mut rows = Vec::new();
        for param in &func.params {
            rows.push(vec![
                param.name.clone(),
                code(&param.ty),
                escape(&param.description),
            ]);
            if let Some(class) = catalog.class_for(&param.ty) {
                rows.extend(catalog.fields_of(class).into_iter().map(|field| {
                    vec![
                        format!(">{}", field.name),
                        code(&field.ty),
                        escape(&field.description),
                    ]
                }));
            }
        }
        lines.push("\n".to_string());
        lines.extend(table(&["Param", "Type", "Desc"], &rows));
    }

    if !func.returns.is_empty() {
        let rows: Vec<Vec<String>> = func
            .returns
            .iter()
            .map(|ret| {
                let desc = match (&ret.name, ret.description.is_empty()) {
                    (Some(name), true) => name.clone(),
                    (Some(name), false) => format!("{name} {}", ret.description),
                    (None, _) => ret.description.clone(),
                };
                vec![code(&ret.ty), escape(&desc)]
            })
            .collect();
        lines.push("\n".to_string());
        lines.push("**Returns:**\n".to_string());
        lines.push("\n".to_string());
        lines.extend(table(&["Type", "Desc"], &rows));
    }

    if let Some(note) = &func.note {
        lines.push("\n".to_string());
        lines.push("**Note:**\n".to_string());
        lines.push("<pre>\n".to_string());
        lines.extend(note.lines().map(|l| format!("{l}\n")));
        lines.push("</pre>\n".to_string());
    }

    if let Some(deprecated) = &func.deprecated {
        lines.push("\n".to_string());
        if deprecated.is_empty() {
            lines.push("**Deprecated**\n".to_string());
        } else {
            lines.push(format!("**Deprecated:** {deprecated}\n"));
        }
    }

    lines.push("\n".to_string());
}

/// Inline code cell with table pipes escaped.
fn code(ty: &str) -> String {
    format!("`{}`", escape(ty))
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}

/// A column-aligned Markdown table.
fn table(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| width(h)).collect();
    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(width(cell));
        }
    }

    let render_row = |cells: Vec<String>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| pad(cell, *w))
            .collect();
        format!("| {} |\n", padded.join(" | "))
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(headers.iter().map(|h| h.to_string()).collect()));
    lines.push(render_row(widths.iter().map(|w| "-".repeat(*w)).collect()));
    lines.extend(rows.iter().map(|row| render_row(row.clone())));
    lines
}
