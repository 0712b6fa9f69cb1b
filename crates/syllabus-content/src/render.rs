//! Rendering documents back to text.
//!
//! The output layout is fixed: header, `# heading`, then the content,
//! practice, revision, quiz and footnotes sections, each only when present.
//! Answer lists are written as they were read; only
//! [`ContentConfig::bullet_override`] rewrites them. Parsing the rendered
//! text yields the same content, question and footnote text up to
//! blank-line layout, which [`verify_round_trip`] checks.
//!
//! # Example
//!
//! ```rust
//! use syllabus_content::{Insight, render::render};
//!
//! let insight = Insight::parse("# Ping\n\n## Content\n\nMeasures latency.").unwrap();
//! assert_eq!(render(&insight).unwrap(), "# Ping\n\n## Content\n\nMeasures latency.\n");
//! ```

use syllabus_core::{Error, Result};

use crate::config::ContentConfig;
use crate::insight::Insight;
use crate::markdown::frontmatter::HEADER_DELIMITER;
use crate::metadata::Metadata;
use crate::sections::{Question, SectionKind};
use crate::workout::Workout;

pub use crate::markdown::helpers::collapse_blank_lines;

/// Render an insight with the default settings.
pub fn render(insight: &Insight) -> Result<String> {
    render_with(insight, &ContentConfig::default())
}

/// Render an insight.
///
/// # Errors
///
/// Fails only when the metadata cannot be encoded as YAML.
pub fn render_with(insight: &Insight, config: &ContentConfig) -> Result<String> {
    let mut blocks = Vec::new();
    if let Some(heading) = insight.heading() {
        blocks.push(format!("# {heading}\n"));
    }

    let mut sections = Vec::new();
    if !insight.content().is_empty() {
        sections.push(section(SectionKind::Content, insight.content()));
    }
    if let Some(question) = insight.practice_question() {
        let body = question_body(question, config);
        sections.push(section(SectionKind::Practice, &body));
    }
    if let Some(question) = insight.revision_question() {
        let body = question_body(question, config);
        sections.push(section(SectionKind::Revision, &body));
    }
    if let Some(quiz) = insight.quiz_question() {
        let mut body = format!("### {}\n\n{}", quiz.headline, quiz.question);
        if !quiz.answers.is_empty() {
            body.push_str("\n\n");
            match config.bullet_override {
                None if !quiz.answer_list.is_empty() => body.push_str(&quiz.answer_list),
                bullet => body.push_str(&answer_list(&quiz.answers, bullet.unwrap_or('*'))),
            }
        }
        sections.push(section(SectionKind::Quiz, &body));
    }
    if let Some(footnotes) = insight.footnotes() {
        sections.push(section(SectionKind::Footnotes, footnotes));
    }

    if !sections.is_empty() {
        let separator = if config.section_separators {
            "\n---\n"
        } else {
            "\n"
        };
        blocks.push(sections.join(separator));
    }

    let mut out = render_header(insight.metadata())?;
    if !out.is_empty() && !blocks.is_empty() {
        out.push('\n');
    }
    out.push_str(&blocks.join("\n"));

    log::debug!("Rendered insight '{}'", insight.slug());
    Ok(out)
}

/// Render a workout: its header followed by the preserved body.
pub fn render_workout(workout: &Workout) -> Result<String> {
    let mut out = render_header(workout.metadata())?;
    out.push_str(workout.body());
    Ok(out)
}

fn render_header(metadata: &Metadata) -> Result<String> {
    if metadata.is_empty() {
        return Ok(String::new());
    }
    let yaml = metadata
        .to_yaml_string()
        .map_err(|e| Error::render_with_source("Failed to encode header", e))?;
    Ok(format!("{HEADER_DELIMITER}\n{yaml}{HEADER_DELIMITER}\n"))
}

fn section(kind: SectionKind, body: &str) -> String {
    format!("## {}\n\n{body}\n", kind.label())
}

fn question_body(question: &Question, config: &ContentConfig) -> String {
    match config.bullet_override {
        None if !question.raw_text.is_empty() => question.raw_text.clone(),
        bullet => {
            let bullet = bullet.unwrap_or(question.bullet);
            format!("{}\n\n{}", question.text, answer_list(&question.answers, bullet))
        }
    }
}

fn answer_list(answers: &[String], bullet: char) -> String {
    answers
        .iter()
        .map(|answer| format!("{bullet} {answer}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Round-trip verification
// ============================================================================

/// Sections whose text changed across a render/parse cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundTripReport {
    /// Mismatching sections in render order.
    pub mismatches: Vec<SectionKind>,
}

impl RoundTripReport {
    /// True when every compared section survived unchanged.
    pub fn is_faithful(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Render the insight, parse the result, and compare the two.
///
/// Content, practice and revision question text and footnotes are compared
/// after [`collapse_blank_lines`]. Quizzes are not compared.
///
/// # Errors
///
/// Fails when rendering fails or the rendered text does not parse.
pub fn verify_round_trip(insight: &Insight) -> Result<RoundTripReport> {
    let rendered = render(insight)?;
    let reparsed = Insight::parse(&rendered)?;

    let pairs = [
        (
            SectionKind::Content,
            Some(insight.content()),
            Some(reparsed.content()),
        ),
        (
            SectionKind::Practice,
            insight.practice_question().map(|q| q.raw_text.as_str()),
            reparsed.practice_question().map(|q| q.raw_text.as_str()),
        ),
        (
            SectionKind::Revision,
            insight.revision_question().map(|q| q.raw_text.as_str()),
            reparsed.revision_question().map(|q| q.raw_text.as_str()),
        ),
        (
            SectionKind::Footnotes,
            insight.footnotes(),
            reparsed.footnotes(),
        ),
    ];

    let mismatches: Vec<SectionKind> = pairs
        .into_iter()
        .filter(|(_, before, after)| {
            before.map(collapse_blank_lines) != after.map(collapse_blank_lines)
        })
        .map(|(kind, _, _)| kind)
        .collect();

    if !mismatches.is_empty() {
        log::warn!(
            "Round trip changed {} section(s) of '{}'",
            mismatches.len(),
            insight.slug()
        );
    }
    Ok(RoundTripReport { mismatches })
}
