//! Fixed-point tag expansion
//!
//! A [`Formatter`] owns a validated [`TagSet`] and rewrites input text
//! pass by pass: each pass collects every tag pair in one scan and splices
//! in the replacements simultaneously, so a definition's own markup is never
//! consumed within the pass that produced it. Nested tags are peeled one
//! level per pass; the loop stops at a fixed point or at [`MAX_ITERATIONS`].

use crate::core::{checker, scanner, validator};
use crate::data::tags::{TagDefinition, TagSet};
use crate::utils::diagnostics::Diagnostic;
use crate::utils::error::{FormatOutput, TagResult};

/// Upper bound on rewrite passes within a single `format` call
///
/// Reaching it is reported, not fatal: the caller gets the partially
/// expanded string.
pub const MAX_ITERATIONS: usize = 100;

/// Tag expansion engine over an immutable, validated tag set
///
/// Construction runs the circular-definition validator once; a constructed
/// formatter has no mutable state and can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Formatter {
    tags: TagSet,
}

impl Formatter {
    /// Build a formatter, rejecting circular tag definitions
    pub fn new(tags: TagSet) -> TagResult<Self> {
        validator::validate(&tags)?;
        Ok(Self { tags })
    }

    /// The tag set this formatter expands with
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Raw definition lookup
    pub fn tag(&self, name: &str) -> Option<&TagDefinition> {
        self.tags.get(name)
    }

    /// Expand all defined tags in `input`
    ///
    /// Never fails: malformed input comes back unchanged and cap exhaustion
    /// returns the partial result. Use [`Formatter::format_with_diagnostics`]
    /// to observe those conditions.
    pub fn format(&self, input: &str) -> String {
        self.format_with_diagnostics(input).content
    }

    /// Expand all defined tags in `input`, reporting non-fatal conditions
    pub fn format_with_diagnostics(&self, input: &str) -> FormatOutput {
        let mut warnings = Vec::new();

        if let Some(note) = scanner::numeric_tag_note(input) {
            warnings.push(note);
        }

        // Expansion is skipped entirely on malformed input: returning the
        // original string is less surprising than expanding half of it.
        let check = checker::check(input);
        if check.has_errors() {
            warnings.extend(check.diagnostics);
            warnings.push(Diagnostic::warning(
                "input has malformed tags; returned unchanged",
            ));
            return FormatOutput::with_warnings(input.to_string(), warnings);
        }

        let mut current = input.to_string();
        for _ in 0..MAX_ITERATIONS {
            let next = self.expand_pass(&current);
            if next == current {
                return FormatOutput::with_warnings(current, warnings);
            }
            current = next;
        }

        warnings.push(Diagnostic::warning(format!(
            "maximum iterations ({}) reached; deep nesting or circular references likely",
            MAX_ITERATIONS
        )));
        FormatOutput::with_warnings(current, warnings)
    }

    /// One simultaneous rewrite pass against the pre-pass string
    fn expand_pass(&self, input: &str) -> String {
        let matches = scanner::collect_pairs(input);
        if matches.is_empty() {
            return input.to_string();
        }

        let mut out = String::with_capacity(input.len());
        let mut last = 0;

        for m in matches {
            out.push_str(&input[last..m.start]);
            match self.tags.get(m.name) {
                Some(def) => {
                    out.push_str(&def.open);
                    out.push_str(m.content(input));
                    out.push_str(&def.close);
                }
                // Undefined tags are inert: re-emitted literally for a later
                // processing stage.
                None => out.push_str(&input[m.start..m.end]),
            }
            last = m.end;
        }

        out.push_str(&input[last..]);
        out
    }

    /// Wrap `content` in a single tag's markup, one level deep
    ///
    /// No scanning, no recursion: if `name` is undefined the content comes
    /// back unchanged.
    pub fn wrap(&self, name: &str, content: &str) -> String {
        match self.tags.get(name) {
            Some(def) => format!("{}{}{}", def.open, content, def.close),
            None => content.to_string(),
        }
    }

    /// Wrap `content` in a single tag's markup, reporting an undefined name
    pub fn wrap_with_diagnostics(&self, name: &str, content: &str) -> FormatOutput {
        match self.tags.get(name) {
            Some(def) => FormatOutput::new(format!("{}{}{}", def.open, content, def.close)),
            None => FormatOutput::with_warnings(
                content.to_string(),
                vec![Diagnostic::warning(format!(
                    "no definition for tag '{}'; content returned unwrapped",
                    name
                ))],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter() -> Formatter {
        Formatter::new(TagSet::defaults()).unwrap()
    }

    #[test]
    fn test_single_tag() {
        let f = formatter();
        assert_eq!(
            f.format("<rare>Sword of Dawn</rare>"),
            "<color=#0070dd>Sword of Dawn</color>"
        );
    }

    #[test]
    fn test_undefined_tag_is_inert() {
        let f = formatter();
        let out = f.format_with_diagnostics("<xyz>a</xyz>");
        assert_eq!(out.content, "<xyz>a</xyz>");
        assert!(!out.has_warnings());
    }

    #[test]
    fn test_nesting_preserves_order() {
        let f = formatter();
        assert_eq!(
            f.format("<rare>A<legendary>B</legendary>C</rare>"),
            "<color=#0070dd>A<color=#ff8000><outline=#4d1a00>B</outline></color>C</color>"
        );
    }

    #[test]
    fn test_alias_reaches_fixed_point() {
        let f = formatter();
        let out = f.format_with_diagnostics("<b>x</b>");
        assert_eq!(out.content, "<b>x</b>");
        assert!(!out.has_warnings());
    }

    #[test]
    fn test_malformed_returns_original() {
        let f = formatter();
        let out = f.format_with_diagnostics("<rare>unclosed");
        assert_eq!(out.content, "<rare>unclosed");
        assert!(out.has_warnings());
    }

    #[test]
    fn test_orphan_close_returns_original() {
        let f = formatter();
        let out = f.format_with_diagnostics("</rare>");
        assert_eq!(out.content, "</rare>");
        assert!(out.has_warnings());
    }

    #[test]
    fn test_empty_content() {
        let f = formatter();
        assert_eq!(f.format("<rare></rare>"), "<color=#0070dd></color>");
    }

    #[test]
    fn test_composition_expands_over_passes() {
        let f = formatter();
        // enhanced -> <rare>...</rare> -> <color=...>...</color>
        assert_eq!(
            f.format("<enhanced>Blade</enhanced>"),
            "<color=#0070dd>Blade</color>"
        );
    }

    #[test]
    fn test_case_sensitive_lookup() {
        let f = formatter();
        assert_eq!(
            f.format("<RARE>x</RARE> <rare>y</rare>"),
            "<RARE>x</RARE> <color=#0070dd>y</color>"
        );
    }

    #[test]
    fn test_iteration_cap_on_oscillation() {
        let mut set = TagSet::new();
        set.define("ping", "<pong>", "</pong>");
        set.define("pong", "<ping>", "</ping>");
        let f = Formatter::new(set).unwrap();

        let out = f.format_with_diagnostics("<ping>x</ping>");
        assert!(out
            .warnings
            .iter()
            .any(|w| w.message.contains("maximum iterations")));
        // 100 passes from <ping> land back on <ping>
        assert_eq!(out.content, "<ping>x</ping>");
    }

    #[test]
    fn test_numeric_tag_note_is_surfaced() {
        let f = formatter();
        let out = f.format_with_diagnostics("<1up>extra</1up>");
        assert!(out
            .warnings
            .iter()
            .any(|w| w.message.contains("starts with a digit")));
        // Undefined, so it passes through regardless
        assert_eq!(out.content, "<1up>extra</1up>");
    }

    #[test]
    fn test_wrap_defined() {
        let f = formatter();
        assert_eq!(f.wrap("damage", "100"), "<color=#ff3333><b>100</b></color>");
    }

    #[test]
    fn test_wrap_undefined() {
        let f = formatter();
        assert_eq!(f.wrap("nope", "100"), "100");

        let out = f.wrap_with_diagnostics("nope", "100");
        assert_eq!(out.content, "100");
        assert!(out.warnings[0].message.contains("'nope'"));
    }

    #[test]
    fn test_wrap_does_not_expand_markup() {
        let f = formatter();
        // Direct wrap is one level: enhanced's markup is left as-is
        assert_eq!(f.wrap("enhanced", "Blade"), "<rare>Blade</rare>");
    }

    #[test]
    fn test_new_rejects_circular_set() {
        let mut set = TagSet::new();
        set.define("x", "prefix<x>", "</x>");
        assert!(Formatter::new(set).is_err());
    }

    #[test]
    fn test_raw_tag_lookup() {
        let f = formatter();
        assert_eq!(f.tag("rare").unwrap().open, "<color=#0070dd>");
        assert!(f.tag("missing").is_none());
    }
}
