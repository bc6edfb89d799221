//! Error handling for tag expansion
//!
//! Only broken static configuration is an error here. Everything shaped by
//! input text degrades gracefully and is reported through the diagnostic
//! channel instead (see [`crate::diagnostics`]).

use std::fmt;

use crate::utils::diagnostics::Diagnostic;

/// Fatal configuration error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// A tag definition reintroduces its own delimiter, which would never
    /// reach a fixed point during expansion.
    CircularDefinition { name: String },
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::CircularDefinition { name } => {
                write!(
                    f,
                    "circular definition for tag '{}': its replacement markup contains \
                     the tag's own delimiter",
                    name
                )
            }
        }
    }
}

impl std::error::Error for TagError {}

impl TagError {
    pub fn circular(name: impl Into<String>) -> Self {
        TagError::CircularDefinition { name: name.into() }
    }

    /// Name of the tag this error refers to.
    pub fn tag_name(&self) -> &str {
        match self {
            TagError::CircularDefinition { name } => name,
        }
    }
}

/// Result type for formatter construction
pub type TagResult<T> = Result<T, TagError>;

/// Formatting output with any warnings raised along the way
#[derive(Debug, Clone)]
pub struct FormatOutput {
    /// The (possibly expanded) text
    pub content: String,
    /// Non-fatal conditions encountered while producing it
    pub warnings: Vec<Diagnostic>,
}

impl FormatOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(content: String, warnings: Vec<Diagnostic>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
