//! Section reading.

use std::path::Path;

use crate::document::Document;
use crate::error::Result;
use crate::pattern::MarkerPattern;

/// Read the lines strictly between two marker lines of a file.
///
/// The first line matching `start_pattern` opens the section; the first line
/// after it matching `end_pattern` closes it. Returned lines keep their
/// terminators.
///
/// # Errors
/// - `Error::InvalidPattern` if either pattern does not compile.
/// - `Error::MarkerNotFound` if either marker is missing.
/// - `Error::Fs` if the file cannot be read.
///
/// # Example
/// ```no_run
/// use std::path::Path;
///
/// use docgen_sections::read_section;
///
/// let defaults = read_section(
///     Path::new("lua/quicker/config.lua"),
///     r"^\s*local default_config =",
///     r"^}$",
/// )
/// .unwrap();
/// ```
pub fn read_section(path: &Path, start_pattern: &str, end_pattern: &str) -> Result<Vec<String>> {
    let start = MarkerPattern::new(start_pattern)?;
    let end = MarkerPattern::new(end_pattern)?;
    Document::load(path)?.section(&start, &end)
}
