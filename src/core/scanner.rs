//! Delimiter lexing and per-pass pair collection
//!
//! Tags have a fixed lexical form: an opening delimiter is `<` followed by
//! one or more word characters (letters, digits, underscore) and `>`; a
//! closing delimiter is `</` + the same word characters + `>`. No attributes,
//! no self-closing shorthand. Anything else containing angle brackets, such
//! as `<color=#0070dd>`, is plain text to the scanner.
//!
//! Pair collection is an explicit scan rather than a regex so the matching
//! rule is precise: per occurrence of an open tag, the pair ends at the first
//! closing delimiter of the same name that follows, without skipping over
//! intervening same-name closes, and matches are taken left to right without
//! re-entering consumed spans.

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::diagnostics::Diagnostic;

lazy_static! {
    /// Delimiter whose tag name starts with a digit
    static ref NUMERIC_TAG: Regex = Regex::new(r"</?([0-9][0-9A-Za-z_]*)>").unwrap();
}

/// A single `<name>` or `</name>` delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter<'a> {
    /// The tag name between the angle brackets
    pub name: &'a str,
    /// Byte offset of the `<`
    pub start: usize,
    /// Byte offset one past the `>`
    pub end: usize,
}

/// One matched `<name>content</name>` pair within a rewrite pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMatch<'a> {
    pub name: &'a str,
    /// Byte offset of the opening `<`
    pub start: usize,
    /// Byte offset one past the closing `>`
    pub end: usize,
    /// Byte range of the content between the delimiters
    pub content_start: usize,
    pub content_end: usize,
}

impl<'a> TagMatch<'a> {
    /// The text between the open and close delimiters
    pub fn content(&self, input: &'a str) -> &'a str {
        &input[self.content_start..self.content_end]
    }
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Find the next opening delimiter at or after `from`
pub fn find_open_tag(input: &str, from: usize) -> Option<Delimiter<'_>> {
    let bytes = input.as_bytes();
    let mut i = from;

    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }

        let name_start = i + 1;
        let mut j = name_start;
        while j < bytes.len() && is_word_byte(bytes[j]) {
            j += 1;
        }

        // At least one word character, terminated by '>'
        if j > name_start && j < bytes.len() && bytes[j] == b'>' {
            return Some(Delimiter {
                name: &input[name_start..j],
                start: i,
                end: j + 1,
            });
        }

        i += 1;
    }

    None
}

/// Find the next closing delimiter at or after `from`
pub fn find_close_tag(input: &str, from: usize) -> Option<Delimiter<'_>> {
    let bytes = input.as_bytes();
    let mut i = from;

    while i + 1 < bytes.len() {
        if bytes[i] != b'<' || bytes[i + 1] != b'/' {
            i += 1;
            continue;
        }

        let name_start = i + 2;
        let mut j = name_start;
        while j < bytes.len() && is_word_byte(bytes[j]) {
            j += 1;
        }

        if j > name_start && j < bytes.len() && bytes[j] == b'>' {
            return Some(Delimiter {
                name: &input[name_start..j],
                start: i,
                end: j + 1,
            });
        }

        i += 1;
    }

    None
}

/// Find the next closing delimiter for `name` at or after `from`
fn find_close_named<'a>(input: &'a str, from: usize, name: &str) -> Option<Delimiter<'a>> {
    let mut cursor = from;
    while let Some(close) = find_close_tag(input, cursor) {
        if close.name == name {
            return Some(close);
        }
        cursor = close.end;
    }
    None
}

/// Collect every tag pair for one rewrite pass, left to right
///
/// Each opening delimiter pairs with the first closing delimiter of the same
/// name after it. The resulting matches are non-overlapping; scanning resumes
/// past each consumed pair. Opens with no following close of their name are
/// skipped (the well-formedness checker has its own say about those).
pub fn collect_pairs(input: &str) -> Vec<TagMatch<'_>> {
    let mut matches = Vec::new();
    let mut cursor = 0;

    while let Some(open) = find_open_tag(input, cursor) {
        match find_close_named(input, open.end, open.name) {
            Some(close) => {
                matches.push(TagMatch {
                    name: open.name,
                    start: open.start,
                    end: close.end,
                    content_start: open.end,
                    content_end: close.start,
                });
                cursor = close.end;
            }
            None => cursor = open.end,
        }
    }

    matches
}

/// Note the first delimiter whose tag name begins with a digit, if any
///
/// Numeric-leading names are discouraged but not rejected; expansion treats
/// them like any other word-shaped name.
pub fn numeric_tag_note(input: &str) -> Option<Diagnostic> {
    let caps = NUMERIC_TAG.captures(input)?;
    let whole = caps.get(0)?;
    let name = &caps[1];
    Some(
        Diagnostic::info(format!(
            "tag name '{}' starts with a digit; numeric tag names are discouraged",
            name
        ))
        .with_span(whole.start(), whole.end())
        .with_source(whole.as_str()),
    )
}
