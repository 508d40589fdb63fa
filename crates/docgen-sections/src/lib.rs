//! Marker-delimited section reading and replacement.
//!
//! A managed region is a span of a text file bounded by two marker lines,
//! each identified by a regular expression:
//!
//! ```text
//! <!-- API -->
//! generated content
//! <!-- /API -->
//! ```
//!
//! [`read_section`] returns the interior of such a region and
//! [`replace_section`] rewrites it in place. The marker lines themselves are
//! never altered, and replacing a region with the content it already has
//! leaves the file untouched.

pub mod document;
pub mod error;
pub mod pattern;
pub mod reader;
pub mod writer;

pub use document::{Document, Multiplicity, Region, split_lines};
pub use error::{Error, MarkerKind, Result};
pub use pattern::MarkerPattern;
pub use reader::read_section;
pub use writer::{replace_section, replace_section_with};
