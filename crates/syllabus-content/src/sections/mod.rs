//! Section segmentation and decoding.
//!
//! A document body is split by [`segment`] into [`RawSection`]s, each tagged
//! with a [`SectionKind`]. [`decode`] turns one raw section into its
//! structured value, or a [`SectionDecodeWarning`] when the section does not
//! have the shape its kind requires.

pub mod decode;
pub mod segmenter;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use decode::{
    Decoded, Footnote, QuizQuestion, Question, SectionDecodeWarning, decode, parse_footnotes,
};
pub use segmenter::{Sections, segment};

/// The fixed set of section kinds a document body can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Free-form lesson text.
    Content,
    /// Practice question with an answer list.
    Practice,
    /// Revision question with an answer list.
    Revision,
    /// Quiz question with a headline.
    Quiz,
    /// Numbered footnote entries.
    Footnotes,
}

impl SectionKind {
    /// All kinds, in render order.
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Content,
        SectionKind::Practice,
        SectionKind::Revision,
        SectionKind::Quiz,
        SectionKind::Footnotes,
    ];

    /// Map a marker label to its kind. Matching ignores case and
    /// surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "content" => Some(SectionKind::Content),
            "practice" | "practice question" => Some(SectionKind::Practice),
            "revision" | "revision question" => Some(SectionKind::Revision),
            "quiz" | "quiz question" => Some(SectionKind::Quiz),
            "footnotes" | "footnote" => Some(SectionKind::Footnotes),
            _ => None,
        }
    }

    /// Canonical label used when rendering the marker.
    pub fn label(self) -> &'static str {
        match self {
            SectionKind::Content => "Content",
            SectionKind::Practice => "Practice",
            SectionKind::Revision => "Revision",
            SectionKind::Quiz => "Quiz",
            SectionKind::Footnotes => "Footnotes",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

/// One section of a document body, before decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSection<'a> {
    /// Section kind named by the marker.
    pub kind: SectionKind,
    /// Quiz headline, or the `# Title` of the implicit leading block.
    pub headline: Option<&'a str>,
    /// Section text after the marker and headline, trimmed.
    pub fragment: &'a str,
    /// Whole section text after the marker, trimmed.
    pub raw: &'a str,
    /// True for the text before the first marker.
    pub implicit: bool,
}
