//! Built-in tag table
//!
//! The stock definitions shipped with the crate: effect tags that expand
//! into the target markup dialect (colors, outlines, case transforms), and
//! the pass-through aliases for the dialect's own word-shaped tags.
//!
//! Replacement markup like `<color=#0070dd>` contains non-word characters,
//! so the matcher never picks it up as a tag; word-shaped pieces such as
//! `<b>` are covered by an alias and rewrite to themselves.

use fxhash::FxHashMap;
use lazy_static::lazy_static;
use phf::phf_set;

/// Declares the built-in effect tags and generates one convenience wrapper
/// function per entry, each equivalent to `wrap(name, content)` against the
/// default formatter.
macro_rules! effect_tags {
    ($($(#[$doc:meta])* $name:ident => ($open:expr, $close:expr)),* $(,)?) => {
        lazy_static! {
            /// Built-in effect tags: name -> (open markup, close markup)
            pub static ref EFFECT_TAGS: FxHashMap<&'static str, (&'static str, &'static str)> = {
                let mut m = FxHashMap::default();
                $(m.insert(stringify!($name), ($open, $close));)*
                m
            };
        }

        $(
            $(#[$doc])*
            pub fn $name(content: &str) -> String {
                crate::wrap(stringify!($name), content)
            }
        )*
    };
}

effect_tags! {
    /// Wrap `content` in rare-quality coloring.
    rare => ("<color=#0070dd>", "</color>"),
    /// Wrap `content` in epic-quality coloring.
    epic => ("<color=#a335ee>", "</color>"),
    /// Wrap `content` in legendary-quality coloring with an outline.
    legendary => ("<color=#ff8000><outline=#4d1a00>", "</outline></color>"),
    /// Wrap `content` in damage-number styling.
    damage => ("<color=#ff3333><b>", "</b></color>"),
    /// Wrap `content` in healing-number styling.
    heal => ("<color=#33cc66>", "</color>"),
    /// Wrap `content` in currency styling.
    gold => ("<color=#ffd700>", "</color>"),
    /// Wrap `content` in shouted speech styling.
    shout => ("<uppercase><b>", "</b></uppercase>"),
    /// Wrap `content` in whispered speech styling.
    whisper => ("<lowercase><i>", "</i></lowercase>"),
    /// Wrap `content` as an enhanced item. Expands to the `rare` tag, which
    /// a later pass expands in turn.
    enhanced => ("<rare>", "</rare>"),
}

/// Word-shaped tags of the target dialect, registered as pass-through
/// aliases so the engine treats them as known but leaves them unchanged.
pub static PASSTHROUGH_TAGS: phf::Set<&'static str> = phf_set! {
    "b",
    "i",
    "u",
    "s",
    "outline",
    "uppercase",
    "lowercase",
};
