//! Splits a document body into typed sections.
//!
//! A section starts at a marker line, `## <Label>`, where the label names
//! one of the [`SectionKind`]s. Everything before the first marker is an
//! implicit content block whose leading `# Title` heading is reported as its
//! headline. A `---` line right before a marker only separates sections and
//! is dropped. Markers inside fenced code blocks are ignored, and so are
//! level-2 headings with any other label.
//!
//! ```rust
//! use syllabus_content::sections::{SectionKind, segment};
//!
//! let body = "# UNION\n\n## Content\n\nRows.\n\n---\n## Quiz\n\n### Which one?\n\nPick.";
//! let kinds: Vec<SectionKind> = segment(body).map(|s| s.kind).collect();
//! assert_eq!(kinds, vec![SectionKind::Content, SectionKind::Content, SectionKind::Quiz]);
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::{RawSection, SectionKind};
use crate::markdown::helpers::fence_marker;

static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##[ \t]+(.+?)\s*$").expect("Invalid section marker regex"));

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[ \t]+(.+?)\s*$").expect("Invalid title heading regex"));

/// Separator line between sections.
const SEPARATOR: &str = "---";

/// Lazy iterator over the sections of a body, in document order.
///
/// Created by [`segment`]. Once exhausted it keeps returning `None`.
#[derive(Debug, Clone)]
pub struct Sections<'a> {
    body: &'a str,
    cursor: usize,
    open: Option<OpenSection<'a>>,
    fence: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
struct OpenSection<'a> {
    kind: SectionKind,
    inline_headline: Option<&'a str>,
    start: usize,
    implicit: bool,
}

/// Start segmenting a document body (the text after the header).
pub fn segment(body: &str) -> Sections<'_> {
    Sections {
        body,
        cursor: 0,
        open: Some(OpenSection {
            kind: SectionKind::Content,
            inline_headline: None,
            start: 0,
            implicit: true,
        }),
        fence: None,
    }
}

impl<'a> Iterator for Sections<'a> {
    type Item = RawSection<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.body.len() {
            let line_start = self.cursor;
            let line_end = self.body[line_start..]
                .find('\n')
                .map_or(self.body.len(), |pos| line_start + pos + 1);
            self.cursor = line_end;
            let line = &self.body[line_start..line_end];

            if let Some(marker) = fence_marker(line) {
                match self.fence {
                    Some(open) if open == marker => self.fence = None,
                    None => self.fence = Some(marker),
                    Some(_) => {}
                }
                continue;
            }
            if self.fence.is_some() {
                continue;
            }

            let Some((kind, inline_headline)) = parse_marker(line) else {
                continue;
            };

            let next = OpenSection {
                kind,
                inline_headline,
                start: line_end,
                implicit: false,
            };
            if let Some(finished) = self.open.replace(next)
                && let Some(section) = self.close(finished, line_start)
            {
                return Some(section);
            }
        }

        let finished = self.open.take()?;
        self.close(finished, self.body.len())
    }
}

impl<'a> Sections<'a> {
    fn close(&self, open: OpenSection<'a>, end: usize) -> Option<RawSection<'a>> {
        let raw = trim_fragment(&self.body[open.start..end]);

        if open.implicit {
            return implicit_section(raw);
        }

        let (headline, fragment) = match (open.kind, open.inline_headline) {
            (SectionKind::Quiz, Some(headline)) => (Some(headline), raw),
            (SectionKind::Quiz, None) => {
                let (first, rest) = split_first_line(raw);
                let headline = first.trim_start_matches('#').trim();
                if headline.is_empty() {
                    (None, raw)
                } else {
                    (Some(headline), rest.trim())
                }
            }
            _ => (None, raw),
        };

        Some(RawSection {
            kind: open.kind,
            headline,
            fragment,
            raw,
            implicit: false,
        })
    }
}

/// The text before the first marker. Blank text yields no section.
fn implicit_section(raw: &str) -> Option<RawSection<'_>> {
    if raw.is_empty() {
        return None;
    }

    let (first, rest) = split_first_line(raw);
    let (headline, fragment) = match TITLE_RE.captures(first).and_then(|caps| caps.get(1)) {
        Some(title) => (Some(title.as_str()), rest.trim()),
        None => (None, raw),
    };

    Some(RawSection {
        kind: SectionKind::Content,
        headline,
        fragment,
        raw,
        implicit: true,
    })
}

/// Recognize a marker line, returning its kind and an inline quiz headline.
fn parse_marker(line: &str) -> Option<(SectionKind, Option<&str>)> {
    let label = MARKER_RE.captures(line)?.get(1)?.as_str();

    if let Some(kind) = SectionKind::from_label(label) {
        return Some((kind, None));
    }

    // `## Quiz: <headline>`
    let (name, headline) = label.split_once(':')?;
    let headline = headline.trim();
    match SectionKind::from_label(name) {
        Some(SectionKind::Quiz) if !headline.is_empty() => Some((SectionKind::Quiz, Some(headline))),
        _ => None,
    }
}

/// Trim surrounding whitespace and any trailing separator lines.
fn trim_fragment(text: &str) -> &str {
    let mut text = text.trim_end();
    while let Some(rest) = strip_trailing_separator(text) {
        text = rest.trim_end();
    }
    text.trim_start()
}

fn strip_trailing_separator(text: &str) -> Option<&str> {
    let (head, last) = match text.rfind('\n') {
        Some(pos) => (&text[..pos], &text[pos + 1..]),
        None => ("", text),
    };
    (last.trim() == SEPARATOR).then_some(head)
}

fn split_first_line(text: &str) -> (&str, &str) {
    text.split_once('\n').unwrap_or((text, ""))
}

// ============================================================================
// Tests
// ============================================================================
