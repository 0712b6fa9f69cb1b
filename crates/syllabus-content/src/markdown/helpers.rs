//! Line-level helpers shared by the segmenter, the decoders and the renderer.
//!
//! # Key Functions
//!
//! - [`parse_list_item`]: Recognize a `*` or `-` bullet line
//! - [`split_trailing_list`]: Separate a block of text from the bullet list
//!   that ends it
//! - [`collapse_blank_lines`]: Normalize text for round-trip comparison
//!
//! # Example
//!
//! ```rust
//! use syllabus_content::markdown::helpers::split_trailing_list;
//!
//! let split = split_trailing_list("Pick one: ???\n\n* `UNION`\n* `JOIN`").unwrap();
//! assert_eq!(split.before, "Pick one: ???");
//! assert_eq!(split.items, vec!["`UNION`", "`JOIN`"]);
//! assert_eq!(split.bullet, '*');
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static LIST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]{0,3}([*-])[ \t]+(\S.*?)\s*$").expect("Invalid list item regex")
});

static NEWLINE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\n+").expect("Invalid newline run regex"));

/// Text that ends in a bullet list, split at the start of that list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSplit<'a> {
    /// Everything before the list, trailing whitespace removed.
    pub before: &'a str,
    /// The list lines as written, from the first bullet to the end.
    pub list: &'a str,
    /// List item texts in source order.
    pub items: Vec<&'a str>,
    /// Bullet character of the first item.
    pub bullet: char,
}

/// Parse a single bullet line, returning the bullet and the item text.
///
/// # Example
///
/// ```rust
/// use syllabus_content::markdown::helpers::parse_list_item;
///
/// assert_eq!(parse_list_item("* `FROM`"), Some(('*', "`FROM`")));
/// assert_eq!(parse_list_item("- false  "), Some(('-', "false")));
/// assert_eq!(parse_list_item("**bold**"), None);
/// assert_eq!(parse_list_item("---"), None);
/// ```
pub fn parse_list_item(line: &str) -> Option<(char, &str)> {
    let caps = LIST_ITEM_RE.captures(line)?;
    let bullet = caps.get(1)?.as_str().chars().next()?;
    Some((bullet, caps.get(2)?.as_str()))
}

/// Split text into the part before its trailing bullet list and the list
/// items.
///
/// The list is the longest run of bullet lines at the end of the text;
/// blank lines between items are allowed. Returns `None` when the text does
/// not end in a bullet line.
pub fn split_trailing_list(text: &str) -> Option<ListSplit<'_>> {
    let trimmed = text.trim_end();
    let mut items = Vec::new();
    let mut bullet = None;
    let mut list_start = trimmed.len();
    let mut cursor = trimmed.len();

    loop {
        let line_start = trimmed[..cursor].rfind('\n').map_or(0, |pos| pos + 1);
        let line = &trimmed[line_start..cursor];

        if !line.trim().is_empty() {
            match parse_list_item(line) {
                Some((item_bullet, item)) => {
                    items.push(item);
                    bullet = Some(item_bullet);
                    list_start = line_start;
                }
                None => break,
            }
        }

        if line_start == 0 {
            break;
        }
        cursor = line_start - 1;
    }

    let bullet = bullet?;
    items.reverse();
    Some(ListSplit {
        before: trimmed[..list_start].trim_end(),
        list: &trimmed[list_start..],
        items,
        bullet,
    })
}

/// Collapse every run of consecutive newlines into a single newline.
///
/// Two texts that differ only in blank-line layout compare equal after
/// collapsing.
///
/// # Example
///
/// ```rust
/// use syllabus_content::markdown::helpers::collapse_blank_lines;
///
/// assert_eq!(collapse_blank_lines("a\n\n\nb\nc"), "a\nb\nc");
/// ```
pub fn collapse_blank_lines(text: &str) -> String {
    NEWLINE_RUN_RE.replace_all(text, "\n").into_owned()
}

/// Convert CRLF line endings to LF, borrowing when there are none.
pub(crate) fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Return the fence marker if the line opens or closes a fenced code block.
pub(crate) fn fence_marker(line: &str) -> Option<&'static str> {
    let trimmed = line.trim_start();
    if trimmed.starts_with("```") {
        Some("```")
    } else if trimmed.starts_with("~~~") {
        Some("~~~")
    } else {
        None
    }
}

// ============================================================================
// Tests
// ============================================================================
