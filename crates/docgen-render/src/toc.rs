//! Table of contents generation from Markdown headings.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// ATX heading: up to three spaces, 1-6 `#`, then whitespace or end of line.
static ATX_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {0,3}(#{1,6})(?:[ \t]+(.*?))?[ \t]*$").expect("Invalid heading regex")
});

/// Optional closing sequence of an ATX heading (`## Title ##`).
static CLOSING_HASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[ \t]+)#+$").expect("Invalid closing hashes regex"));

/// A heading found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: usize,
    pub text: String,
    pub anchor: String,
}

/// Settings for [`generate_toc_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocOptions {
    /// Deepest heading level to include.
    pub max_level: usize,
    /// Leave out the first heading when it is the level-1 page title.
    pub skip_title: bool,
}

impl TocOptions {
    pub fn new(max_level: usize) -> Self {
        Self {
            max_level,
            skip_title: true,
        }
    }
}

/// Produces GitHub-style anchors, numbering repeats.
///
/// The first `Usage` heading becomes `usage`, the next `usage-1`, then
/// `usage-2`.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut candidate = base.clone();
        // seen[base] is the next suffix to try for that base.
        if let Some(mut next) = self.seen.get(&base).copied() {
            loop {
                candidate = format!("{base}-{next}");
                next += 1;
                if !self.seen.contains_key(&candidate) {
                    break;
                }
            }
            self.seen.insert(base, next);
        }
        self.seen.entry(candidate.clone()).or_insert(1);
        candidate
    }
}

/// Link-safe anchor for a heading.
///
/// Lower-cases, drops everything except letters, digits, `-`, `_` and
/// whitespace, then turns each whitespace run into a single `-`.
pub fn slugify(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Every ATX heading of a document in order, with de-duplicated anchors.
///
/// Lines inside fenced code blocks are ignored, as are headings with no text.
pub fn parse_headings(lines: &[String]) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut slugger = Slugger::new();
    let mut fence: Option<(char, usize)> = None;

    for line in lines {
        let line = line.trim_end_matches(['\n', '\r']);

        if let Some(marker) = fence_marker(line) {
            fence = match fence {
                None => Some(marker),
                Some((ch, len)) if marker.0 == ch && marker.1 >= len => None,
                open => open,
            };
            continue;
        }
        if fence.is_some() {
            continue;
        }

        let Some(caps) = ATX_HEADING.captures(line) else {
            continue;
        };
        let raw = caps.get(2).map_or("", |m| m.as_str());
        let text = CLOSING_HASHES.replace(raw, "").trim().to_string();
        if text.is_empty() {
            continue;
        }
        headings.push(Heading {
            level: caps[1].len(),
            anchor: slugger.slug(&text),
            text,
        });
    }
    headings
}

/// ```` ``` ```` or `~~~` fence opener/closer: the fence char and its run length.
fn fence_marker(line: &str) -> Option<(char, usize)> {
    let trimmed = line.trim_start_matches(' ');
    if line.len() - trimmed.len() > 3 {
        return None;
    }
    let ch = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let run = trimmed.chars().take_while(|c| *c == ch).count();
    (run >= 3).then_some((ch, run))
}

/// Table of contents for a document, skipping its title.
///
/// See [`generate_toc_with`].
pub fn generate_toc(lines: &[String], max_level: usize) -> Vec<String> {
    generate_toc_with(lines, &TocOptions::new(max_level))
}

/// Table of contents as Markdown list items.
///
/// Each entry is `- [text](#anchor)`, indented two spaces per level below the
/// shallowest listed level.
pub fn generate_toc_with(lines: &[String], options: &TocOptions) -> Vec<String> {
    let mut headings = parse_headings(lines);
    if options.skip_title && headings.first().is_some_and(|h| h.level == 1) {
        headings.remove(0);
    }
    headings.retain(|h| h.level <= options.max_level);

    let Some(base) = headings.iter().map(|h| h.level).min() else {
        return Vec::new();
    };
    headings
        .iter()
        .map(|h| {
            format!(
                "{}- [{}](#{})\n",
                "  ".repeat(h.level - base),
                h.text,
                h.anchor
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Options", "options")]
    #[case("API Reference", "api-reference")]
    #[case("toggle(opts)", "toggleopts")]
    #[case("Requirements & Setup", "requirements-setup")]
    #[case("  padded   words ", "padded-words")]
    #[case("snake_case-name", "snake_case-name")]
    #[case("Ünïcode Títle", "ünïcode-títle")]
    fn test_slugify(#[case] text: &str, #[case] slug: &str) {
        assert_eq!(slugify(text), slug);
    }

    #[test]
    fn test_slugger_numbers_duplicates() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Usage"), "usage");
        assert_eq!(slugger.slug("Usage"), "usage-1");
        assert_eq!(slugger.slug("usage"), "usage-2");
        assert_eq!(slugger.slug("Usage 1"), "usage-1-1");
    }

    #[test]
    fn test_fence_marker() {
        assert_eq!(fence_marker("```lua"), Some(('`', 3)));
        assert_eq!(fence_marker("~~~~"), Some(('~', 4)));
        assert_eq!(fence_marker("``"), None);
        assert_eq!(fence_marker("    ```"), None);
    }

    #[test]
    fn test_closing_hashes_are_dropped() {
        let lines = vec!["## Title ##\n".to_string(), "# C# #\n".to_string()];
        let headings = parse_headings(&lines);
        assert_eq!(headings[0].text, "Title");
        assert_eq!(headings[1].text, "C#");
    }
}
