//! Diagnostics for tagged markup
//!
//! This module provides the reporting vocabulary shared by the
//! well-formedness checker and the expansion engine:
//!
//! - Structural errors (orphan closing tags, mismatched nesting, unclosed tags)
//! - Warnings (iteration cap reached, undefined tag in a direct wrap)
//! - Notes (numeric-leading tag names)
//!
//! ## Example
//!
//! ```rust
//! use tagmark::diagnostics::check_markup;
//!
//! let result = check_markup("<rare>unclosed");
//! assert!(result.has_errors());
//! ```

use std::fmt;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - output may contain unexpanded markup
    Warning,
    /// Error - the input's tag structure is broken
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Byte span of the offending text in the input (start, end)
    pub span: Option<(usize, usize)>,
    /// Relevant source text
    pub source_text: Option<String>,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: None,
            source_text: None,
            suggestion: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Error, message)
    }

    /// Add span information
    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.span = Some((start, end));
        self
    }

    /// Add source text
    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    /// Add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: level: message
        //         --> bytes start..end
        //         |
        //         | source text
        //         | = help: suggestion

        write!(f, "{}: {}", self.level, self.message)?;

        if let Some((start, end)) = self.span {
            write!(f, "\n  --> bytes {}..{}", start, end)?;
        }

        if let Some(ref source) = self.source_text {
            write!(f, "\n  |\n  | {}", source)?;
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  = help: {}", suggestion)?;
        }

        Ok(())
    }
}

/// Check result with summary
#[derive(Debug, Default)]
pub struct CheckResult {
    /// All diagnostics
    pub diagnostics: Vec<Diagnostic>,
    /// Number of errors
    pub errors: usize,
    /// Number of warnings
    pub warnings: usize,
    /// Number of info messages
    pub infos: usize,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn add(&mut self, diag: Diagnostic) {
        match diag.level {
            DiagnosticLevel::Error => self.errors += 1,
            DiagnosticLevel::Warning => self.warnings += 1,
            DiagnosticLevel::Info => self.infos += 1,
        }
        self.diagnostics.push(diag);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Check if there are any issues at all
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.errors > 0 {
            parts.push(format!(
                "{} error{}",
                self.errors,
                if self.errors == 1 { "" } else { "s" }
            ));
        }
        if self.warnings > 0 {
            parts.push(format!(
                "{} warning{}",
                self.warnings,
                if self.warnings == 1 { "" } else { "s" }
            ));
        }
        if self.infos > 0 {
            parts.push(format!(
                "{} note{}",
                self.infos,
                if self.infos == 1 { "" } else { "s" }
            ));
        }
        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Check tagged markup for structural issues
///
/// Runs the well-formedness checker over `input` and additionally notes
/// numeric-leading tag names. This is the standalone entry the CLI's check
/// mode uses; `format` runs the same checks internally.
pub fn check_markup(input: &str) -> CheckResult {
    let mut result = crate::core::checker::check(input);
    if let Some(diag) = crate::core::scanner::numeric_tag_note(input) {
        result.add(diag);
    }
    result
}

/// Format check results for terminal output
pub fn format_diagnostics(result: &CheckResult, use_color: bool) -> String {
    let mut output = String::new();

    for diag in &result.diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",   // Red
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
                DiagnosticLevel::Info => "\x1b[34m",    // Blue
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n\n");
        } else {
            output.push_str(&format!("{}\n\n", diag));
        }
    }

    // Summary
    if use_color {
        if result.has_errors() {
            output.push_str("\x1b[31m");
        } else if result.warnings > 0 {
            output.push_str("\x1b[33m");
        } else {
            output.push_str("\x1b[32m");
        }
    }

    output.push_str(&format!("Summary: {}", result.summary()));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("unclosed tag '<rare>'")
            .with_span(0, 6)
            .with_source("<rare>")
            .with_suggestion("Add '</rare>'");
        let text = diag.to_string();
        assert!(text.contains("error: unclosed tag"));
        assert!(text.contains("<rare>"));
        assert!(text.contains("help: Add '</rare>'"));
    }

    #[test]
    fn test_check_result_counts() {
        let mut result = CheckResult::new();
        result.add(Diagnostic::error("test"));
        result.add(Diagnostic::warning("test"));
        result.add(Diagnostic::info("test"));

        assert_eq!(result.errors, 1);
        assert_eq!(result.warnings, 1);
        assert_eq!(result.infos, 1);
        assert!(result.has_errors());
    }

    #[test]
    fn test_summary_format() {
        let mut result = CheckResult::new();
        result.add(Diagnostic::error("test"));
        result.add(Diagnostic::warning("test"));

        let summary = result.summary();
        assert!(summary.contains("1 error"));
        assert!(summary.contains("1 warning"));
    }

    #[test]
    fn test_empty_summary() {
        let result = CheckResult::new();
        assert_eq!(result.summary(), "no issues found");
        assert!(result.is_empty());
    }

    #[test]
    fn test_check_markup_clean() {
        let result = check_markup("plain text, no tags at all");
        assert!(result.is_empty());
    }

    #[test]
    fn test_format_diagnostics_plain() {
        let mut result = CheckResult::new();
        result.add(Diagnostic::error("broken"));
        let text = format_diagnostics(&result, false);
        assert!(text.contains("error: broken"));
        assert!(text.contains("Summary: 1 error"));
        assert!(!text.contains("\x1b["));
    }

    #[test]
    fn test_format_diagnostics_color() {
        let mut result = CheckResult::new();
        result.add(Diagnostic::warning("loose"));
        let text = format_diagnostics(&result, true);
        assert!(text.contains("\x1b[33m"));
        assert!(text.contains("\x1b[0m"));
    }
}
