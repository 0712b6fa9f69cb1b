//! Per-kind section decoders.
//!
//! Every decoder maps one [`RawSection`] to a structured value and has no
//! side effects beyond `debug` logging. A section that lacks the structure
//! its kind requires produces a [`SectionDecodeWarning`] instead; the caller
//! decides what to do with it.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{RawSection, SectionKind};
use crate::config::ContentConfig;
use crate::markdown::helpers::split_trailing_list;

static FOOTNOTE_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\[(\d{1,9}):([^\]\n]+)\][ \t]*").expect("Invalid footnote reference regex")
});

/// A question followed by its candidate answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question text, placeholder left in place.
    pub text: String,
    /// Candidate answers in source order.
    pub answers: Vec<String>,
    /// The section text this question was decoded from. Rendering emits it
    /// unchanged unless a bullet override is configured.
    pub raw_text: String,
    /// Bullet character of the first answer.
    pub bullet: char,
}

impl Question {
    /// Number of placeholder sentinels in the question text.
    pub fn placeholder_count(&self, placeholder: &str) -> usize {
        if placeholder.is_empty() {
            return 0;
        }
        self.text.matches(placeholder).count()
    }
}

/// A quiz question. Answers are optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Headline shown above the question.
    pub headline: String,
    /// Question body.
    pub question: String,
    /// Candidate answers, empty when the body has no trailing list.
    pub answers: Vec<String>,
    /// The answer list as written, empty when there are no answers.
    pub answer_list: String,
    /// The quiz body as written: everything below the headline, whether
    /// the headline was inline in the marker or on its own line.
    pub raw_text: String,
}

/// One `[index:label]` footnote entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footnote {
    /// Numeric reference.
    pub index: u32,
    /// Reference label.
    pub label: String,
    /// Entry text up to the next reference.
    pub body: String,
}

impl fmt::Display for Footnote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.index, self.label)?;
        if !self.body.is_empty() {
            write!(f, "\n{}", self.body)?;
        }
        Ok(())
    }
}

/// The decoded value of one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// Content text, verbatim.
    Content(String),
    /// Practice question.
    Practice(Question),
    /// Revision question.
    Revision(Question),
    /// Quiz question.
    Quiz(QuizQuestion),
    /// Footnote entries joined by blank lines.
    Footnotes(String),
}

/// A section whose text does not have the shape its kind requires.
///
/// Non-fatal: the document keeps parsing and leaves the field absent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SectionDecodeWarning {
    /// The section has no text.
    #[error("{0} section is empty")]
    Empty(SectionKind),

    /// A question section does not end in a bullet list.
    #[error("{0} section has no answer list")]
    MissingAnswers(SectionKind),

    /// A question section has answers but no question text.
    #[error("{0} section has no question text")]
    MissingQuestion(SectionKind),

    /// A quiz section has no headline.
    #[error("quiz section has no headline")]
    MissingHeadline,

    /// A footnotes section has no `[index:label]` reference.
    #[error("footnotes section has no [index:label] reference")]
    MissingFootnoteReference,
}

impl SectionDecodeWarning {
    /// The kind of section that produced this warning.
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Empty(kind) | Self::MissingAnswers(kind) | Self::MissingQuestion(kind) => *kind,
            Self::MissingHeadline => SectionKind::Quiz,
            Self::MissingFootnoteReference => SectionKind::Footnotes,
        }
    }
}

/// Decode one raw section according to its kind.
pub fn decode(
    section: &RawSection<'_>,
    config: &ContentConfig,
) -> Result<Decoded, SectionDecodeWarning> {
    match section.kind {
        SectionKind::Content => decode_content(section.fragment).map(Decoded::Content),
        SectionKind::Practice => {
            decode_question(SectionKind::Practice, section.fragment, config).map(Decoded::Practice)
        }
        SectionKind::Revision => {
            decode_question(SectionKind::Revision, section.fragment, config).map(Decoded::Revision)
        }
        SectionKind::Quiz => decode_quiz(section).map(Decoded::Quiz),
        SectionKind::Footnotes => decode_footnotes(section.fragment).map(Decoded::Footnotes),
    }
}

fn decode_content(fragment: &str) -> Result<String, SectionDecodeWarning> {
    if fragment.is_empty() {
        return Err(SectionDecodeWarning::Empty(SectionKind::Content));
    }
    Ok(fragment.to_string())
}

fn decode_question(
    kind: SectionKind,
    fragment: &str,
    config: &ContentConfig,
) -> Result<Question, SectionDecodeWarning> {
    if fragment.is_empty() {
        return Err(SectionDecodeWarning::Empty(kind));
    }

    let split = split_trailing_list(fragment).ok_or(SectionDecodeWarning::MissingAnswers(kind))?;
    let text = split.before.trim();
    if text.is_empty() {
        return Err(SectionDecodeWarning::MissingQuestion(kind));
    }

    if !text.contains(config.placeholder.as_str()) {
        log::debug!("{kind} question has no '{}' placeholder", config.placeholder);
    }

    Ok(Question {
        text: text.to_string(),
        answers: split.items.iter().map(|item| (*item).to_string()).collect(),
        raw_text: fragment.to_string(),
        bullet: split.bullet,
    })
}

fn decode_quiz(section: &RawSection<'_>) -> Result<QuizQuestion, SectionDecodeWarning> {
    if section.raw.is_empty() {
        return Err(SectionDecodeWarning::Empty(SectionKind::Quiz));
    }
    let headline = section
        .headline
        .filter(|headline| !headline.is_empty())
        .ok_or(SectionDecodeWarning::MissingHeadline)?;
    if section.fragment.is_empty() {
        return Err(SectionDecodeWarning::Empty(SectionKind::Quiz));
    }

    let (question, answers, answer_list) = match split_trailing_list(section.fragment) {
        Some(split) if split.before.trim().is_empty() => {
            return Err(SectionDecodeWarning::MissingQuestion(SectionKind::Quiz));
        }
        Some(split) => (
            split.before.trim().to_string(),
            split.items.iter().map(|item| (*item).to_string()).collect(),
            split.list.to_string(),
        ),
        None => (section.fragment.to_string(), Vec::new(), String::new()),
    };

    Ok(QuizQuestion {
        headline: headline.to_string(),
        question,
        answers,
        answer_list,
        raw_text: section.fragment.to_string(),
    })
}

fn decode_footnotes(fragment: &str) -> Result<String, SectionDecodeWarning> {
    let entries = parse_footnotes(fragment);
    if entries.is_empty() {
        return Err(SectionDecodeWarning::MissingFootnoteReference);
    }

    Ok(entries
        .iter()
        .map(Footnote::to_string)
        .collect::<Vec<_>>()
        .join("\n\n"))
}

/// Split footnote text into entries.
///
/// Each `[index:label]` at the start of a line opens an entry that runs to
/// the next reference or the end of the text. Text before the first
/// reference is ignored.
///
/// # Example
///
/// ```rust
/// use syllabus_content::sections::parse_footnotes;
///
/// let notes = parse_footnotes("[1:User Agents]\nBrowsers.\n\n[2:Payload]\nThe body.");
/// assert_eq!(notes.len(), 2);
/// assert_eq!(notes[0].label, "User Agents");
/// assert_eq!(notes[1].body, "The body.");
/// ```
pub fn parse_footnotes(text: &str) -> Vec<Footnote> {
    let matches: Vec<_> = FOOTNOTE_REF_RE.captures_iter(text).collect();

    if let Some(first) = matches.first().and_then(|caps| caps.get(0))
        && !text[..first.start()].trim().is_empty()
    {
        log::debug!("Ignoring text before the first footnote reference");
    }

    matches
        .iter()
        .enumerate()
        .filter_map(|(i, caps)| {
            let whole = caps.get(0)?;
            let end = matches
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(text.len(), |next| next.start());
            Some(Footnote {
                index: caps.get(1)?.as_str().parse().ok()?,
                label: caps.get(2)?.as_str().trim().to_string(),
                body: text[whole.end()..end].trim().to_string(),
            })
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
