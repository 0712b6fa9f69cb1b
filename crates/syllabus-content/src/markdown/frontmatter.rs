//! YAML header extraction from curriculum documents.
//!
//! The header is metadata at the start of a document, delimited by `---`
//! lines:
//!
//! ```markdown
//! ---
//! title: UNION
//! author: catalin
//! levels:
//!   - beginner
//! ---
//!
//! ## Content
//!
//! The body of the document starts here.
//! ```
//!
//! # Usage
//!
//! ```rust
//! use syllabus_content::markdown::extract_frontmatter;
//!
//! let content = "---\ntitle: UNION\n---\n\nBody";
//! let result = extract_frontmatter(content).unwrap();
//!
//! assert!(result.has_header());
//! assert_eq!(result.body().trim(), "Body");
//! assert_eq!(result.metadata().title.as_deref(), Some("UNION"));
//! assert_eq!(result.get_str("title"), Some("UNION"));
//! ```

use serde::de::DeserializeOwned;
use serde_yaml::Value;
use syllabus_core::{Error, Result};

use crate::metadata::Metadata;

/// Boundary token opening and closing the header.
pub const HEADER_DELIMITER: &str = "---";

/// Result of header extraction.
///
/// Holds the decoded metadata (empty when the document has no header) and
/// the body that follows the closing delimiter.
#[derive(Debug, Clone)]
pub struct Frontmatter<'a> {
    /// Raw YAML value, if the header held a mapping.
    value: Option<Value>,
    /// Typed view of the header.
    metadata: Metadata,
    /// Body content after the header.
    body: &'a str,
    /// Whether both delimiters were found.
    has_header: bool,
}

impl<'a> Frontmatter<'a> {
    fn with_header(value: Option<Value>, metadata: Metadata, body: &'a str) -> Self {
        Self {
            value,
            metadata,
            body,
            has_header: true,
        }
    }

    fn without_header(body: &'a str) -> Self {
        Self {
            value: None,
            metadata: Metadata::default(),
            body,
            has_header: false,
        }
    }

    /// Check if header delimiters were present.
    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Typed metadata. Empty when there is no header.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Take ownership of the typed metadata.
    pub fn into_metadata(self) -> Metadata {
        self.metadata
    }

    /// Get the raw YAML value, if present.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Get the body content (everything after the header).
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Deserialize the header into a caller-defined type.
    ///
    /// Returns `None` if the document has no header.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match &self.value {
            Some(value) => {
                let parsed: T = serde_yaml::from_value(value.clone()).map_err(|e| {
                    Error::header_decode_with_source("Failed to deserialize header", e)
                })?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    /// Get a string field from the header.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.value.as_ref()?.get(key)?.as_str()
    }

    /// Get a string list field from the header.
    ///
    /// Returns an empty vec if the field is missing or not a sequence.
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        self.value
            .as_ref()
            .and_then(|v| v.get(key))
            .and_then(|v| v.as_sequence())
            .map(|seq| {
                seq.iter()
                    .filter_map(|item| item.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Extract and decode the YAML header of a document.
///
/// # Behavior
///
/// - No opening `---` line: no header, the whole text is the body
/// - Opening line but no closing `---` line: logs a warning, no header
/// - Empty or `null` header: empty metadata
/// - Header that is not a mapping, not valid YAML, or has a known key of
///   the wrong shape: [`Error::HeaderDecode`]
///
/// # Example
///
/// ```rust
/// use syllabus_content::markdown::extract_frontmatter;
///
/// let result = extract_frontmatter("---\ntitle: Test\n---\n\n# Heading").unwrap();
/// assert_eq!(result.get_str("title"), Some("Test"));
/// assert_eq!(result.body().trim(), "# Heading");
///
/// let result = extract_frontmatter("# Just Markdown").unwrap();
/// assert!(!result.has_header());
/// assert_eq!(result.body(), "# Just Markdown");
///
/// assert!(extract_frontmatter("---\n- a\n- b\n---\nBody").is_err());
/// ```
pub fn extract_frontmatter(content: &str) -> Result<Frontmatter<'_>> {
    let Some(after_opening) = strip_delimiter_line(content) else {
        return Ok(Frontmatter::without_header(content));
    };

    let mut offset = 0;
    for line in after_opening.split_inclusive('\n') {
        if is_delimiter(line) {
            let yaml = &after_opening[..offset];
            let body = &after_opening[offset + line.len()..];
            let (value, metadata) = decode_header(yaml)?;
            return Ok(Frontmatter::with_header(value, metadata, body));
        }
        offset += line.len();
    }

    log::warn!("Header opening delimiter found but no closing delimiter");
    Ok(Frontmatter::without_header(content))
}

/// Strip the header from a document, returning only the body.
///
/// A header that fails to decode is still stripped.
///
/// # Example
///
/// ```rust
/// use syllabus_content::markdown::strip_frontmatter;
///
/// let body = strip_frontmatter("---\ntitle: Test\n---\n\n# Heading");
/// assert_eq!(body.trim(), "# Heading");
/// ```
pub fn strip_frontmatter(content: &str) -> &str {
    match extract_frontmatter(content) {
        Ok(result) => result.body(),
        Err(_) => {
            let Some(after_opening) = strip_delimiter_line(content) else {
                return content;
            };
            let mut offset = 0;
            for line in after_opening.split_inclusive('\n') {
                offset += line.len();
                if is_delimiter(line) {
                    return &after_opening[offset..];
                }
            }
            content
        }
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == HEADER_DELIMITER
}

fn strip_delimiter_line(content: &str) -> Option<&str> {
    let line_end = content.find('\n').map_or(content.len(), |pos| pos + 1);
    is_delimiter(&content[..line_end]).then(|| &content[line_end..])
}

fn decode_header(yaml: &str) -> Result<(Option<Value>, Metadata)> {
    if yaml.trim().is_empty() {
        return Ok((None, Metadata::default()));
    }

    let value: Value = serde_yaml::from_str(yaml)
        .map_err(|e| Error::header_decode_with_source("Invalid YAML in header", e))?;

    match value {
        Value::Null => Ok((None, Metadata::default())),
        Value::Mapping(_) => {
            let metadata: Metadata = serde_yaml::from_value(value.clone()).map_err(|e| {
                Error::header_decode_with_source("Header fields have an unexpected shape", e)
            })?;
            Ok((Some(value), metadata))
        }
        other => Err(Error::header_decode(format!(
            "Header must be a key/value mapping, found {}",
            value_kind(&other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

// ============================================================================
// Tests
// ============================================================================
