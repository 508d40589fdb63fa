//! Section replacement.

use std::path::Path;

use crate::document::{Document, Multiplicity};
use crate::error::Result;
use crate::pattern::MarkerPattern;

/// Replace the lines strictly between two marker lines of a file.
///
/// The marker lines and everything outside them are left byte-identical. The
/// file is rewritten atomically, and not at all when the result equals the
/// current content, so repeated calls with the same `new_lines` are no-ops.
///
/// Returns `true` when the file changed.
///
/// # Errors
/// - `Error::InvalidPattern` if either pattern does not compile.
/// - `Error::MarkerNotFound` if either marker is missing.
/// - `Error::AmbiguousRegion` if more than one line matches `start_pattern`.
/// - `Error::Fs` if the file cannot be read or written.
///
/// # Example
/// ```no_run
/// use std::path::Path;
///
/// use docgen_sections::replace_section;
///
/// replace_section(
///     Path::new("README.md"),
///     r"^<!-- TOC -->$",
///     r"^<!-- /TOC -->$",
///     &["\n".to_string(), "- [Options](#options)\n".to_string(), "\n".to_string()],
/// )
/// .unwrap();
/// ```
pub fn replace_section(
    path: &Path,
    start_pattern: &str,
    end_pattern: &str,
    new_lines: &[String],
) -> Result<bool> {
    replace_section_with(
        path,
        start_pattern,
        end_pattern,
        new_lines,
        Multiplicity::Unique,
    )
}

/// [`replace_section`] with an explicit policy for repeated start markers.
pub fn replace_section_with(
    path: &Path,
    start_pattern: &str,
    end_pattern: &str,
    new_lines: &[String],
    multiplicity: Multiplicity,
) -> Result<bool> {
    let start = MarkerPattern::new(start_pattern)?;
    let end = MarkerPattern::new(end_pattern)?;

    let mut document = Document::load(path)?;
    document.replace_section(&start, &end, new_lines, multiplicity)?;
    let changed = document.save()?;

    if changed {
        tracing::info!(path = %path.display(), marker = start_pattern, "section updated");
    } else {
        tracing::debug!(
            path = %path.display(),
            marker = start_pattern,
            "section already up to date"
        );
    }
    Ok(changed)
}
