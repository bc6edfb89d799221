//! Circular-definition validation
//!
//! A tag whose replacement markup reintroduces the tag's own delimiter would
//! keep matching itself forever, so the expansion loop could never reach a
//! fixed point. That is a broken static configuration, not bad input, and is
//! rejected before a formatter is handed out.

use crate::data::tags::TagSet;
use crate::utils::error::{TagError, TagResult};

/// Validate a tag set against circular self-reference
///
/// For each entry, the exact pass-through alias (open and close reproducing
/// the tag's own delimiters verbatim) is explicitly allowed: it rewrites to
/// itself and changes nothing further after one pass. Any other definition
/// whose open markup contains `<name>` or whose close markup contains
/// `</name>` is circular and fatal.
pub fn validate(tags: &TagSet) -> TagResult<()> {
    for (name, def) in tags.iter() {
        let full_open = format!("<{}>", name);
        let full_close = format!("</{}>", name);

        if def.open == full_open && def.close == full_close {
            continue;
        }

        if def.open.contains(&full_open) || def.close.contains(&full_close) {
            return Err(TagError::circular(name));
        }
    }

    Ok(())
}
