//! Slug utilities.
//!
//! Curriculum documents are identified by a slug derived from their file
//! name: lowercase words joined by single hyphens, punctuation dropped.

use std::path::Path;

/// Normalize a title or file stem into a slug.
///
/// Performs the following transformations:
/// 1. Converts to lowercase
/// 2. Drops punctuation (anything that is not alphanumeric, whitespace,
///    `-` or `_`)
/// 3. Collapses runs of whitespace, `-` and `_` into single hyphens
/// 4. Strips leading and trailing hyphens
///
/// # Examples
///
/// ```
/// use syllabus_core::util::ids::slugify;
///
/// assert_eq!(slugify("Using `curl` To Make HTTP Requests"), "using-curl-to-make-http-requests");
/// assert_eq!(slugify("Immediately-Invoked Function Expression (IIFE)"), "immediately-invoked-function-expression-iife");
/// assert_eq!(slugify("UNION"), "union");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_separator = true;
        }
    }

    slug
}

/// Compute a slug from a file path's stem.
///
/// Returns `None` if the path has no file stem.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use syllabus_core::util::ids::slug_from_path;
///
/// assert_eq!(
///     slug_from_path(Path::new("/sql/union/Multiple JOINs.md")),
///     Some("multiple-joins".to_string())
/// );
/// assert_eq!(slug_from_path(Path::new("/")), None);
/// ```
pub fn slug_from_path(path: &Path) -> Option<String> {
    path.file_stem().and_then(|s| s.to_str()).map(slugify)
}
