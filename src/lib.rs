//! # tagmark
//!
//! Placeholder tag expansion engine for rich text markup.
//!
//! Human-authored templates use short placeholder tags like
//! `<rare>text</rare>`; tagmark expands them into the richer markup dialect a
//! renderer understands (colors, outlines, case transforms), rewriting
//! innermost-first until no defined tags remain.
//!
//! ## Features
//!
//! - **Data-driven**: tag definitions are a plain name → (open, close) table;
//!   adding a tag needs no engine change
//! - **Fail-soft**: malformed input is reported and returned unchanged,
//!   never raised as an error
//! - **Composable definitions**: a tag's markup may introduce other defined
//!   tags, which later passes expand in turn
//! - **Bounded**: the rewrite loop stops at a fixed point or a hard
//!   iteration cap, and says which
//!
//! ## Usage Examples
//!
//! ### Expanding a template
//!
//! ```rust
//! let out = tagmark::format("<rare>Sword of Dawn</rare>");
//! assert_eq!(out, "<color=#0070dd>Sword of Dawn</color>");
//!
//! // Undefined tags pass through untouched
//! assert_eq!(tagmark::format("<xyz>a</xyz>"), "<xyz>a</xyz>");
//! ```
//!
//! ### Custom tag sets
//!
//! ```rust
//! use tagmark::{Formatter, TagSet};
//!
//! let mut tags = TagSet::new();
//! tags.define("boss", "<color=#cc0000><b>", "</b></color>");
//!
//! let formatter = Formatter::new(tags).unwrap();
//! assert_eq!(
//!     formatter.format("<boss>Ragnar</boss>"),
//!     "<color=#cc0000><b>Ragnar</b></color>"
//! );
//! ```
//!
//! ### One-level wrapping
//!
//! ```rust
//! assert_eq!(tagmark::wrap("damage", "100"), "<color=#ff3333><b>100</b></color>");
//! assert_eq!(tagmark::defaults::heal("50"), "<color=#33cc66>50</color>");
//! ```

use lazy_static::lazy_static;

/// Core expansion modules
pub mod core;

/// Data layer - tag definitions and the built-in table
pub mod data;

/// Utility modules
pub mod utils;

// Re-export the engine surface
pub use core::engine::{Formatter, MAX_ITERATIONS};

// Re-export data modules
pub use data::defaults;
pub use data::{TagDefinition, TagSet};

// Re-export utilities
pub use utils::diagnostics;
pub use utils::diagnostics::{check_markup, CheckResult, Diagnostic, DiagnosticLevel};
pub use utils::error::{FormatOutput, TagError, TagResult};

lazy_static! {
    /// Formatter over the built-in tag table, shared by the top-level
    /// convenience functions and the generated per-tag wrappers.
    static ref DEFAULT_FORMATTER: Formatter = Formatter::new(TagSet::defaults())
        .unwrap_or_else(|e| panic!("built-in tag table is invalid: {}", e));
}

/// Expand all built-in tags in `input`
///
/// Uses the default tag table. Never fails: malformed input comes back
/// unchanged. See [`format_with_diagnostics`] for the reported conditions.
pub fn format(input: &str) -> String {
    DEFAULT_FORMATTER.format(input)
}

/// Expand all built-in tags in `input`, reporting non-fatal conditions
pub fn format_with_diagnostics(input: &str) -> FormatOutput {
    DEFAULT_FORMATTER.format_with_diagnostics(input)
}

/// Wrap `content` in a built-in tag's markup, one level deep
///
/// Returns `content` unchanged if `name` has no definition.
pub fn wrap(name: &str, content: &str) -> String {
    DEFAULT_FORMATTER.wrap(name, content)
}

/// Wrap `content` in a built-in tag's markup, reporting an undefined name
pub fn wrap_with_diagnostics(name: &str, content: &str) -> FormatOutput {
    DEFAULT_FORMATTER.wrap_with_diagnostics(name, content)
}

/// Look up a built-in tag definition
pub fn tag(name: &str) -> Option<&'static TagDefinition> {
    DEFAULT_FORMATTER.tag(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_basic() {
        let result = format("attack for <damage>120</damage>!");
        assert_eq!(result, "attack for <color=#ff3333><b>120</b></color>!");
    }

    #[test]
    fn test_format_never_fails_on_malformed() {
        assert_eq!(format("<rare>unclosed"), "<rare>unclosed");
        assert_eq!(format("</gold>"), "</gold>");
    }

    #[test]
    fn test_format_with_diagnostics_reports() {
        let out = format_with_diagnostics("<a><b>text</a></b>");
        assert_eq!(out.content, "<a><b>text</a></b>");
        assert!(out.has_warnings());
    }

    #[test]
    fn test_wrap_top_level() {
        assert_eq!(wrap("gold", "25"), "<color=#ffd700>25</color>");
        assert_eq!(wrap("undefined_tag", "25"), "25");
    }

    #[test]
    fn test_tag_accessor() {
        let def = tag("rare").unwrap();
        assert_eq!(def.open, "<color=#0070dd>");
        assert_eq!(def.close, "</color>");
        assert!(tag("missing").is_none());
    }

    #[test]
    fn test_check_markup_reexport() {
        assert!(check_markup("<rare>ok</rare>").is_empty());
        assert!(check_markup("<rare>").has_errors());
    }
}
