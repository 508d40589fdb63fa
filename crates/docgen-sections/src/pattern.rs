//! Line-oriented marker patterns.

use std::fmt;

use regex::Regex;

use crate::error::{Error, Result};

/// A regular expression matched against a single line.
///
/// Matching is anchored at the start of the line and ignores the line
/// terminator, so `^<!-- API -->$` matches `"<!-- API -->\n"` and
/// `"<!-- API -->\r\n"`.
#[derive(Debug, Clone)]
pub struct MarkerPattern {
    regex: Regex,
}

impl MarkerPattern {
    /// Compile a marker pattern.
    ///
    /// # Errors
    /// Returns `Error::InvalidPattern` if `pattern` is not a valid regex.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// The source text of the pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether `line` matches this pattern.
    pub fn matches(&self, line: &str) -> bool {
        let line = strip_terminator(line);
        // The leftmost match starts at 0 whenever any match does.
        self.regex.find(line).is_some_and(|m| m.start() == 0)
    }
}

impl fmt::Display for MarkerPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `line` without its trailing `\n` or `\r\n`.
pub(crate) fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollar_ignores_newline() {
        let pattern = MarkerPattern::new(r"^<!-- API -->$").unwrap();
        assert!(pattern.matches("<!-- API -->\n"));
        assert!(pattern.matches("<!-- API -->\r\n"));
        assert!(pattern.matches("<!-- API -->"));
        assert!(!pattern.matches("<!-- API --> trailing\n"));
    }

    #[test]
    fn test_match_is_anchored_at_line_start() {
        let pattern = MarkerPattern::new("local default_config =").unwrap();
        assert!(pattern.matches("local default_config = {\n"));
        assert!(!pattern.matches("  local default_config = {\n"));

        let indented = MarkerPattern::new(r"^\s*local default_config =").unwrap();
        assert!(indented.matches("  local default_config = {\n"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = MarkerPattern::new("(unclosed").unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
    }
}
