//! Tag definition store
//!
//! A [`TagSet`] maps tag names to the open/close markup they expand to.
//! It is assembled once, handed to [`crate::Formatter::new`], and never
//! mutated afterwards. Adding a tag is pure data extension: the engine
//! needs no change.

use fxhash::FxHashMap;

/// The open/close markup a tag name expands to
///
/// Replacement text is opaque to the engine; it may itself contain further
/// tag delimiters (that is what makes definitions composable) but is never
/// re-interpreted for the tag's own name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDefinition {
    /// Markup emitted in place of `<name>`
    pub open: String,
    /// Markup emitted in place of `</name>`
    pub close: String,
}

impl TagDefinition {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// A pass-through alias: the definition reproduces the tag's own
    /// delimiters exactly, marking the tag as known but unchanged.
    pub fn alias(name: &str) -> Self {
        Self {
            open: format!("<{}>", name),
            close: format!("</{}>", name),
        }
    }

    /// Whether this definition is the pass-through alias for `name`.
    pub fn is_alias_of(&self, name: &str) -> bool {
        self.open == format!("<{}>", name) && self.close == format!("</{}>", name)
    }
}

/// Mapping from tag name to definition
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    tags: FxHashMap<String, TagDefinition>,
}

impl TagSet {
    /// Create an empty tag set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tag set with the built-in table pre-loaded
    pub fn defaults() -> Self {
        let mut set = Self::new();

        for (name, (open, close)) in crate::data::defaults::EFFECT_TAGS.iter() {
            set.define(*name, *open, *close);
        }

        // Built-in markup tags are registered as aliases so they are known
        // to the engine without being rewritten.
        for name in crate::data::defaults::PASSTHROUGH_TAGS.iter() {
            set.insert(*name, TagDefinition::alias(name));
        }

        set
    }

    /// Define a tag by its open/close markup (replaces any existing entry)
    pub fn define(
        &mut self,
        name: impl Into<String>,
        open: impl Into<String>,
        close: impl Into<String>,
    ) {
        self.tags
            .insert(name.into(), TagDefinition::new(open, close));
    }

    /// Insert a pre-built definition
    pub fn insert(&mut self, name: impl Into<String>, def: TagDefinition) {
        self.tags.insert(name.into(), def);
    }

    /// Look up a tag definition by name (case-sensitive)
    pub fn get(&self, name: &str) -> Option<&TagDefinition> {
        self.tags.get(name)
    }

    /// Check if a tag is defined
    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    /// Iterate over all defined names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(|k| k.as_str())
    }

    /// Iterate over all entries, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagDefinition)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_get() {
        let mut set = TagSet::new();
        set.define("rare", "<color=#0070dd>", "</color>");

        let def = set.get("rare").unwrap();
        assert_eq!(def.open, "<color=#0070dd>");
        assert_eq!(def.close, "</color>");
        assert!(set.get("epic").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut set = TagSet::new();
        set.define("rare", "<color=#0070dd>", "</color>");

        assert!(set.contains("rare"));
        assert!(!set.contains("RARE"));
    }

    #[test]
    fn test_alias() {
        let def = TagDefinition::alias("b");
        assert_eq!(def.open, "<b>");
        assert_eq!(def.close, "</b>");
        assert!(def.is_alias_of("b"));
        assert!(!def.is_alias_of("i"));
    }

    #[test]
    fn test_redefinition_replaces() {
        let mut set = TagSet::new();
        set.define("gold", "<color=#ffff00>", "</color>");
        set.define("gold", "<color=#ffd700>", "</color>");

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("gold").unwrap().open, "<color=#ffd700>");
    }

    #[test]
    fn test_defaults_loaded() {
        let set = TagSet::defaults();
        assert!(set.contains("rare"));
        assert!(set.contains("legendary"));
        assert!(set.contains("b"));
        assert!(set.get("b").unwrap().is_alias_of("b"));
    }

    #[test]
    fn test_names_visit_all() {
        let mut set = TagSet::new();
        set.define("a", "<x>", "</x>");
        set.define("c", "<y>", "</y>");

        let mut names: Vec<_> = set.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["a", "c"]);
    }
}
