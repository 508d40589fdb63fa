//! Small line helpers shared by the renderers.

/// Prefix every non-blank line with `width` spaces.
///
/// Blank lines stay empty so indented blocks never carry trailing spaces.
pub fn indent(lines: &[String], width: usize) -> Vec<String> {
    let prefix = " ".repeat(width);
    lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                line.clone()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect()
}

/// Display width of `s`, counted in chars.
pub(crate) fn width(s: &str) -> usize {
    s.chars().count()
}

/// `s` padded with spaces to `target` chars.
pub(crate) fn pad(s: &str, target: usize) -> String {
    let fill = target.saturating_sub(width(s));
    format!("{s}{}", " ".repeat(fill))
}
