//! Markdown structure parsing utilities.
//!
//! Uses `pulldown-cmark` to reduce headings and inline markup to plain
//! text, for titles derived from a document's leading heading.
//!
//! # Example
//!
//! ```rust
//! use syllabus_content::markdown::parser::{extract_first_heading, inline_plain_text};
//! use pulldown_cmark::HeadingLevel;
//!
//! let (level, title) = extract_first_heading("# Using `curl`\n\nBody").unwrap();
//! assert_eq!(level, HeadingLevel::H1);
//! assert_eq!(title, "Using curl");
//!
//! assert_eq!(inline_plain_text("**LEFT** or *RIGHT*?"), "LEFT or RIGHT?");
//! ```

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

/// Extract the first heading from markdown content.
///
/// Returns the heading level and text content. Inline formatting (bold,
/// italic, code, links) is stripped from the heading text.
pub fn extract_first_heading(content: &str) -> Option<(HeadingLevel, String)> {
    let mut in_heading = false;
    let mut heading_level = HeadingLevel::H1;
    let mut heading_text = String::new();

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                in_heading = true;
                heading_level = level;
                heading_text.clear();
            }
            Event::End(TagEnd::Heading(_)) => {
                if in_heading && !heading_text.trim().is_empty() {
                    return Some((heading_level, heading_text.trim().to_string()));
                }
                in_heading = false;
            }
            Event::Text(text) | Event::Code(text) if in_heading => {
                heading_text.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak if in_heading => {
                heading_text.push(' ');
            }
            _ => {}
        }
    }

    None
}

/// Reduce a single line of inline markdown to its plain text.
pub fn inline_plain_text(inline: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(inline) {
        match event {
            Event::Text(part) | Event::Code(part) => text.push_str(&part),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }

    text.trim().to_string()
}
