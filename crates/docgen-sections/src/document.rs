//! In-memory documents and managed regions.
//!
//! A [`Document`] is the full text of a file split into lines that keep their
//! terminators. Managed regions are located with a two-phase scan: first the
//! start marker from the top of the document, then the end marker strictly
//! after it.

use std::path::{Path, PathBuf};

use crate::error::{Error, MarkerKind, Result};
use crate::pattern::MarkerPattern;

/// How to treat a document in which several lines match the start marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Multiplicity {
    /// More than one start marker is an error.
    #[default]
    Unique,
    /// Use the first start marker and ignore the rest.
    FirstMatch,
}

/// Position of a managed region inside a [`Document`].
///
/// Both indices are 0-based and point at the marker lines themselves; the
/// interior is `start + 1..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

impl Region {
    /// Line indices strictly between the two markers.
    pub fn interior(&self) -> std::ops::Range<usize> {
        self.start + 1..self.end
    }
}

/// Split text into lines, each keeping its terminator.
///
/// The final line has no terminator when the text does not end in `\n`.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

/// An ordered sequence of lines identified by a file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    lines: Vec<String>,
}

impl Document {
    /// Build a document from text that did not necessarily come from disk.
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: split_lines(text),
        }
    }

    /// Read a document from disk.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let text = docgen_fs::read_text(&path)?;
        Ok(Self::from_text(path, &text))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The document as a single string.
    pub fn text(&self) -> String {
        self.lines.concat()
    }

    /// Write the document back to its path atomically.
    ///
    /// Returns `false` without touching the file if its content is already
    /// identical.
    pub fn save(&self) -> Result<bool> {
        Ok(docgen_fs::write_if_changed(&self.path, &self.text())?)
    }

    /// Locate the managed region bounded by `start` and `end`.
    ///
    /// # Errors
    /// - `Error::MarkerNotFound` if no line matches `start`, or no line after
    ///   the start marker matches `end`.
    /// - `Error::AmbiguousRegion` if `multiplicity` is `Unique` and more than
    ///   one line matches `start`.
    pub fn locate(
        &self,
        start: &MarkerPattern,
        end: &MarkerPattern,
        multiplicity: Multiplicity,
    ) -> Result<Region> {
        let starts: Vec<usize> = self
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| start.matches(line))
            .map(|(idx, _)| idx)
            .collect();

        let Some(&first) = starts.first() else {
            return Err(self.not_found(MarkerKind::Start, start));
        };

        if starts.len() > 1 {
            match multiplicity {
                Multiplicity::Unique => {
                    return Err(Error::AmbiguousRegion {
                        path: self.path.clone(),
                        pattern: start.as_str().to_string(),
                        lines: starts.iter().map(|idx| idx + 1).collect(),
                    });
                }
                Multiplicity::FirstMatch => {
                    tracing::warn!(
                        path = %self.path.display(),
                        pattern = start.as_str(),
                        count = starts.len(),
                        "multiple start markers, using the first"
                    );
                }
            }
        }

        let end_idx = self.lines[first + 1..]
            .iter()
            .position(|line| end.matches(line))
            .map(|offset| first + 1 + offset)
            .ok_or_else(|| self.not_found(MarkerKind::End, end))?;

        tracing::debug!(
            path = %self.path.display(),
            start = first + 1,
            end = end_idx + 1,
            "located managed region"
        );

        Ok(Region {
            start: first,
            end: end_idx,
        })
    }

    /// Lines strictly between the first start marker and the following end
    /// marker.
    pub fn section(&self, start: &MarkerPattern, end: &MarkerPattern) -> Result<Vec<String>> {
        let region = self.locate(start, end, Multiplicity::FirstMatch)?;
        Ok(self.lines[region.interior()].to_vec())
    }

    /// Replace the interior of a managed region, keeping both marker lines.
    ///
    /// A replacement line that lacks a terminator gets `\n` appended so it
    /// can never merge with the end marker. An element holding several lines
    /// is split, so the returned region and a later read see one entry per
    /// line.
    pub fn replace_section(
        &mut self,
        start: &MarkerPattern,
        end: &MarkerPattern,
        new_lines: &[String],
        multiplicity: Multiplicity,
    ) -> Result<Region> {
        let region = self.locate(start, end, multiplicity)?;
        let replacement: Vec<String> = new_lines
            .iter()
            .flat_map(|line| match split_lines(line) {
                parts if parts.is_empty() => vec![String::new()],
                parts => parts,
            })
            .map(|line| {
                if line.ends_with('\n') {
                    line
                } else {
                    format!("{line}\n")
                }
            })
            .collect();
        let end = region.start + 1 + replacement.len();
        self.lines.splice(region.interior(), replacement);
        Ok(Region {
            start: region.start,
            end,
        })
    }

    fn not_found(&self, kind: MarkerKind, pattern: &MarkerPattern) -> Error {
        Error::MarkerNotFound {
            path: self.path.clone(),
            kind,
            pattern: pattern.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn markers() -> (MarkerPattern, MarkerPattern) {
        (
            MarkerPattern::new(r"^<!-- X -->$").unwrap(),
            MarkerPattern::new(r"^<!-- /X -->$").unwrap(),
        )
    }

    #[test]
    fn test_split_lines_keeps_terminators() {
        assert_eq!(split_lines("a\nb\r\nc"), vec!["a\n", "b\r\n", "c"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_locate_region() {
        let (start, end) = markers();
        let doc = Document::from_text("t.md", "intro\n<!-- X -->\nold\n<!-- /X -->\n");
        let region = doc.locate(&start, &end, Multiplicity::Unique).unwrap();
        assert_eq!(region, Region { start: 1, end: 3 });
        assert_eq!(region.interior(), 2..3);
    }

    #[test]
    fn test_end_marker_before_start_is_not_found() {
        let (start, end) = markers();
        let doc = Document::from_text("t.md", "<!-- /X -->\n<!-- X -->\n");
        let err = doc.locate(&start, &end, Multiplicity::Unique).unwrap_err();
        assert!(matches!(
            err,
            Error::MarkerNotFound {
                kind: MarkerKind::End,
                ..
            }
        ));
    }

    #[test]
    fn test_replace_returns_new_region() {
        let (start, end) = markers();
        let mut doc = Document::from_text("t.md", "<!-- X -->\n<!-- /X -->\n");
        let region = doc
            .replace_section(
                &start,
                &end,
                &["a\n".to_string(), "b\n".to_string()],
                Multiplicity::Unique,
            )
            .unwrap();
        assert_eq!(region, Region { start: 0, end: 3 });
        assert_eq!(doc.text(), "<!-- X -->\na\nb\n<!-- /X -->\n");
    }

    #[test]
    fn test_replace_splits_multiline_elements() {
        let (start, end) = markers();
        let mut doc = Document::from_text("t.md", "<!-- X -->\n<!-- /X -->\n");
        let region = doc
            .replace_section(
                &start,
                &end,
                &["a\nb\n".to_string(), String::new()],
                Multiplicity::Unique,
            )
            .unwrap();
        assert_eq!(region, Region { start: 0, end: 4 });
        assert_eq!(doc.text(), "<!-- X -->\na\nb\n\n<!-- /X -->\n");
        assert_eq!(doc.section(&start, &end).unwrap(), vec!["a\n", "b\n", "\n"]);
        assert!(end.matches(&doc.lines()[region.end]));
    }

    #[test]
    fn test_replace_terminates_bare_lines() {
        let (start, end) = markers();
        let mut doc = Document::from_text("t.md", "<!-- X -->\n<!-- /X -->");
        doc.replace_section(&start, &end, &["bare".to_string()], Multiplicity::Unique)
            .unwrap();
        assert_eq!(doc.text(), "<!-- X -->\nbare\n<!-- /X -->");
    }
}
