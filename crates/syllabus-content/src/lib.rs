//! Parsing and rendering of curriculum insight documents.
//!
//! An insight is a markdown file with a YAML header followed by typed
//! sections (content, practice question, revision question, quiz,
//! footnotes). This crate turns such text into an [`Insight`] and renders
//! an [`Insight`] back into the same format.
//!
//! # Modules
//!
//! - [`markdown`]: Front-matter extraction and markdown helpers
//! - [`metadata`]: Typed header fields
//! - [`sections`]: Section segmentation and per-kind decoders
//! - [`insight`]: The parsed document model
//! - [`workout`]: Workout documents that group insights
//! - [`render`]: Rendering and round-trip verification
//! - [`config`]: Parse and render settings
//! - [`source`]: The read/write interface to wherever documents live
//!
//! # Example
//!
//! ```rust
//! let text = "---\ntitle: UNION\n---\n\n## Content\n\nCombine rows.\n\n---\n## Practice\n\nUse ??? here.\n\n* `UNION`\n* `JOIN`\n";
//!
//! let insight = syllabus_content::parse(text).unwrap();
//! assert_eq!(insight.slug(), "union");
//! assert_eq!(insight.content(), "Combine rows.");
//!
//! let practice = insight.practice_question().unwrap();
//! assert_eq!(practice.answers, vec!["`UNION`", "`JOIN`"]);
//!
//! let rendered = syllabus_content::render(&insight).unwrap();
//! let again = syllabus_content::parse(&rendered).unwrap();
//! assert_eq!(again.content(), insight.content());
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod insight;
pub mod markdown;
pub mod metadata;
pub mod render;
pub mod sections;
pub mod source;
pub mod workout;

// Re-export commonly used types
pub use config::ContentConfig;
pub use insight::Insight;
pub use markdown::{Frontmatter, extract_frontmatter, strip_frontmatter};
pub use metadata::Metadata;
pub use render::{RoundTripReport, collapse_blank_lines, render_workout, verify_round_trip};
pub use sections::{
    Footnote, QuizQuestion, Question, RawSection, SectionDecodeWarning, SectionKind, segment,
};
pub use source::{ContentSource, FsSource};
pub use workout::Workout;

pub use syllabus_core::{Error, Result};

/// Parse raw insight text with the default configuration.
///
/// Fails only when the metadata header exists but cannot be decoded.
pub fn parse(raw_text: &str) -> Result<Insight> {
    Insight::parse(raw_text)
}

/// Render an insight with the default configuration.
pub fn render(insight: &Insight) -> Result<String> {
    render::render(insight)
}
