//! Data layer - tag definitions and the built-in table
//!
//! This module owns the tag definition store:
//! - [`tags`]: the `TagSet` / `TagDefinition` types
//! - [`defaults`]: the stock effect tags and pass-through aliases

pub mod defaults;
pub mod tags;

// Re-export commonly used items
pub use defaults::{EFFECT_TAGS, PASSTHROUGH_TAGS};
pub use tags::{TagDefinition, TagSet};
