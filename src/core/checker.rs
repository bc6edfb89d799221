//! Well-formedness checking
//!
//! Verifies that an input's `<tag>`/`</tag>` pairs are balanced and properly
//! nested before any expansion runs. This is a lexical property: every
//! word-shaped tag participates, whether or not a definition exists for it.

use crate::core::scanner::{find_close_tag, find_open_tag, Delimiter};
use crate::utils::diagnostics::{CheckResult, Diagnostic};

/// Check `input` for balanced, properly nested tags
///
/// Scans left to right with a single cursor, pushing opening tags onto a
/// stack and popping them against closing tags. Reports the first structural
/// problem found: a closing tag with no opening tag, a mismatched close, or
/// (after the scan) the innermost tag still left open. An empty result means
/// the tag structure is sound; crossing constructs like `<a><b></a></b>` are
/// caught as mismatches.
pub fn check(input: &str) -> CheckResult {
    let mut result = CheckResult::new();
    let mut stack: Vec<Delimiter<'_>> = Vec::new();
    let mut cursor = 0;

    loop {
        let open = find_open_tag(input, cursor);
        let close = find_close_tag(input, cursor);

        match (open, close) {
            (None, None) => break,
            // Whichever delimiter comes first wins; ties cannot happen
            // lexically, but opening would win if they did.
            (Some(o), None) => {
                stack.push(o);
                cursor = o.end;
            }
            (Some(o), Some(c)) if o.start <= c.start => {
                stack.push(o);
                cursor = o.end;
            }
            (_, Some(c)) => match stack.pop() {
                None => {
                    result.add(
                        Diagnostic::error(format!(
                            "closing tag '</{}>' without matching opening tag",
                            c.name
                        ))
                        .with_span(c.start, c.end)
                        .with_source(&input[c.start..c.end])
                        .with_suggestion(format!("Add '<{}>' before it or remove it", c.name)),
                    );
                    return result;
                }
                Some(o) if o.name != c.name => {
                    result.add(
                        Diagnostic::error(format!(
                            "mismatched closing tag: expected '</{}>', found '</{}>'",
                            o.name, c.name
                        ))
                        .with_span(c.start, c.end)
                        .with_source(&input[c.start..c.end])
                        .with_suggestion(format!("Close '<{}>' first", o.name)),
                    );
                    return result;
                }
                Some(_) => cursor = c.end,
            },
        }
    }

    // The innermost still-open tag is the most useful one to name.
    if let Some(o) = stack.last() {
        result.add(
            Diagnostic::error(format!("unclosed tag '<{}>'", o.name))
                .with_span(o.start, o.end)
                .with_source(&input[o.start..o.end])
                .with_suggestion(format!("Add '</{}>'", o.name)),
        );
    }

    result
}
