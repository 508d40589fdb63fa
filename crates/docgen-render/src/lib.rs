//! Rendering for plugin-docgen.
//!
//! Every renderer produces an ordered sequence of newline-terminated lines,
//! ready to be spliced into a managed region or written out as a file.

pub mod markdown;
pub mod text;
pub mod toc;
pub mod vimdoc;

pub use markdown::render_md_api;
pub use text::indent;
pub use toc::{
    Heading, Slugger, TocOptions, generate_toc, generate_toc_with, parse_headings, slugify,
};
pub use vimdoc::{Vimdoc, VimdocSection, render_vimdoc_api};
