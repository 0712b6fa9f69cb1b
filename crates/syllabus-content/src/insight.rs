//! The parsed insight document.
//!
//! An [`Insight`] is built once from raw text and is read-only afterwards.
//! Parsing runs the header extractor, segments the body, decodes each
//! section and assigns the results. Only a broken header is fatal; sections
//! that do not decode are logged, kept in [`Insight::warnings`], and leave
//! their field absent.

use std::path::Path;

use syllabus_core::{Result, slug_from_path, slugify};

use crate::config::ContentConfig;
use crate::markdown::helpers::normalize_line_endings;
use crate::markdown::{extract_frontmatter, inline_plain_text};
use crate::metadata::Metadata;
use crate::render;
use crate::sections::{
    Decoded, Footnote, QuizQuestion, Question, SectionDecodeWarning, decode, parse_footnotes,
    segment,
};
use crate::source::ContentSource;

/// A parsed insight.
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    raw_text: String,
    metadata: Metadata,
    slug: String,
    title: Option<String>,
    heading: Option<String>,
    content: String,
    practice_question: Option<Question>,
    revision_question: Option<Question>,
    quiz_question: Option<QuizQuestion>,
    footnotes: Option<String>,
    warnings: Vec<SectionDecodeWarning>,
}

impl Insight {
    /// Parse raw text with the default configuration. The slug comes from
    /// the header.
    pub fn parse(raw_text: &str) -> Result<Self> {
        Self::parse_with_config(raw_text, None, &ContentConfig::default())
    }

    /// Parse raw text read from `path`. The slug comes from the file name.
    pub fn parse_with_path(path: &Path, raw_text: &str) -> Result<Self> {
        Self::parse_with_config(raw_text, Some(path), &ContentConfig::default())
    }

    /// Parse raw text with explicit settings.
    ///
    /// # Errors
    ///
    /// Returns [`syllabus_core::Error::HeaderDecode`] when the header exists
    /// but cannot be decoded. Section problems never fail the parse.
    ///
    /// CRLF line endings are read as LF; [`Insight::raw_text`] keeps the
    /// input as given.
    pub fn parse_with_config(
        raw_text: &str,
        path: Option<&Path>,
        config: &ContentConfig,
    ) -> Result<Self> {
        let text = normalize_line_endings(raw_text);
        let frontmatter = extract_frontmatter(&text)?;
        let body = frontmatter.body();
        let metadata = frontmatter.into_metadata();

        let mut insight = Self {
            raw_text: raw_text.to_string(),
            metadata,
            slug: String::new(),
            title: None,
            heading: None,
            content: String::new(),
            practice_question: None,
            revision_question: None,
            quiz_question: None,
            footnotes: None,
            warnings: Vec::new(),
        };

        for section in segment(body) {
            if section.implicit {
                if let Some(headline) = section.headline {
                    insight.heading = Some(headline.to_string());
                }
                if section.fragment.is_empty() {
                    continue;
                }
            }

            match decode(&section, config) {
                Ok(decoded) => insight.assign(decoded),
                Err(warning) => {
                    log::warn!("Skipping section: {warning}");
                    insight.warnings.push(warning);
                }
            }
        }

        insight.title = insight
            .metadata
            .title
            .clone()
            .or_else(|| insight.heading.as_deref().map(inline_plain_text))
            .filter(|title| !title.is_empty());
        insight.slug = derive_slug(path, &insight.metadata, insight.title.as_deref());

        log::debug!(
            "Parsed insight '{}' ({} warnings)",
            insight.slug,
            insight.warnings.len()
        );
        Ok(insight)
    }

    /// Read and parse the document at `path`.
    pub fn load(source: &dyn ContentSource, path: &Path) -> Result<Self> {
        let raw_text = source.read(path)?;
        Self::parse_with_path(path, &raw_text)
    }

    /// Render this insight and write it to `path`.
    pub fn store(&self, source: &dyn ContentSource, path: &Path) -> Result<()> {
        let text = render::render(self)?;
        source.write(path, &text)
    }

    fn assign(&mut self, decoded: Decoded) {
        match decoded {
            Decoded::Content(content) => self.content = content,
            Decoded::Practice(question) => self.practice_question = Some(question),
            Decoded::Revision(question) => self.revision_question = Some(question),
            Decoded::Quiz(quiz) => self.quiz_question = Some(quiz),
            Decoded::Footnotes(notes) => {
                self.footnotes = Some(match self.footnotes.take() {
                    Some(existing) => format!("{existing}\n\n{notes}"),
                    None => notes,
                });
            }
        }
    }

    /// The text this insight was parsed from.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Decoded header.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Identifier, possibly empty.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Header title, or the plain text of the leading `# Title`.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The leading `# Title` text as written.
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    /// Content section text. Empty when there is none.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Practice question, if any.
    pub fn practice_question(&self) -> Option<&Question> {
        self.practice_question.as_ref()
    }

    /// Revision question, if any.
    pub fn revision_question(&self) -> Option<&Question> {
        self.revision_question.as_ref()
    }

    /// Quiz question, if any.
    pub fn quiz_question(&self) -> Option<&QuizQuestion> {
        self.quiz_question.as_ref()
    }

    /// Footnote entries joined by blank lines, if any.
    pub fn footnotes(&self) -> Option<&str> {
        self.footnotes.as_deref()
    }

    /// Footnotes split into their entries.
    pub fn footnote_entries(&self) -> Vec<Footnote> {
        self.footnotes.as_deref().map(parse_footnotes).unwrap_or_default()
    }

    /// Sections that were skipped while parsing.
    pub fn warnings(&self) -> &[SectionDecodeWarning] {
        &self.warnings
    }
}

/// File stem first, then the header slug, then the title.
fn derive_slug(path: Option<&Path>, metadata: &Metadata, title: Option<&str>) -> String {
    path.and_then(slug_from_path)
        .or_else(|| metadata.slug.as_deref().map(slugify))
        .or_else(|| title.map(slugify))
        .unwrap_or_default()
}
