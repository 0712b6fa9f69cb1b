//! Workout documents.
//!
//! A workout groups insights for practice. Its header names the insights by
//! slug and places the workout in the curriculum; the body is free text and
//! is kept verbatim.

use std::path::Path;

use syllabus_core::{Result, slug_from_path, slugify};

use crate::markdown::{extract_first_heading, extract_frontmatter};
use crate::metadata::Metadata;
use crate::source::ContentSource;

/// A parsed workout.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    raw_text: String,
    metadata: Metadata,
    slug: String,
    title: Option<String>,
    body: String,
}

impl Workout {
    /// Parse raw workout text. The slug comes from the header.
    pub fn parse(raw_text: &str) -> Result<Self> {
        Self::parse_at(None, raw_text)
    }

    /// Parse raw workout text read from `path`.
    pub fn parse_with_path(path: &Path, raw_text: &str) -> Result<Self> {
        Self::parse_at(Some(path), raw_text)
    }

    /// Read and parse the workout at `path`.
    pub fn load(source: &dyn ContentSource, path: &Path) -> Result<Self> {
        let raw_text = source.read(path)?;
        Self::parse_with_path(path, &raw_text)
    }

    fn parse_at(path: Option<&Path>, raw_text: &str) -> Result<Self> {
        let frontmatter = extract_frontmatter(raw_text)?;
        let body = frontmatter.body().to_string();
        let metadata = frontmatter.into_metadata();

        let title = metadata
            .title
            .clone()
            .or_else(|| extract_first_heading(&body).map(|(_, text)| text));
        let slug = path
            .and_then(slug_from_path)
            .or_else(|| metadata.slug.as_deref().map(slugify))
            .or_else(|| title.as_deref().map(slugify))
            .unwrap_or_default();

        log::debug!(
            "Parsed workout '{slug}' with {} insights",
            metadata.insights.len()
        );

        Ok(Self {
            raw_text: raw_text.to_string(),
            metadata,
            slug,
            title,
            body,
        })
    }

    /// The text this workout was parsed from.
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

    /// Header title, or the first heading of the body.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Text after the header, verbatim.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Insight slugs in practice order.
    pub fn insights(&self) -> &[String] {
        &self.metadata.insights
    }

    /// Curriculum section.
    pub fn section(&self) -> Option<&str> {
        self.metadata.section.as_deref()
    }

    /// Curriculum course.
    pub fn course(&self) -> Option<&str> {
        self.metadata.course.as_deref()
    }

    /// Curriculum topic.
    pub fn topic(&self) -> Option<&str> {
        self.metadata.topic.as_deref()
    }

    /// Slug of the parent document.
    pub fn parent(&self) -> Option<&str> {
        self.metadata.parent.as_deref()
    }
}
