//! Front-matter extraction and markdown helpers.
//!
//! - [`frontmatter`]: YAML header extraction and decoding
//! - [`parser`]: Heading and inline text extraction
//! - [`helpers`]: Bullet lists, fences, and blank-line normalization

pub mod frontmatter;
pub mod helpers;
pub mod parser;

// Re-export key types and functions
pub use frontmatter::{Frontmatter, extract_frontmatter, strip_frontmatter};
pub use helpers::{ListSplit, collapse_blank_lines, parse_list_item, split_trailing_list};
pub use parser::{extract_first_heading, inline_plain_text};
