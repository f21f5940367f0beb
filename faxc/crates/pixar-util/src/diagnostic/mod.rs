//! Diagnostic reporting: severities, codes, and the fluent builder.
//!
//! ```
//! use pixar_util::diagnostic::{Diagnostic, Handler, Span};
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(Diagnostic::error("undeclared identifier `x`", Span::DUMMY));
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity. Each compiler stage only ever emits [`Level::Error`]
/// before stopping (see the pipeline's fail-fast stage contract) — `Warning`,
/// `Note`, and `Help` exist for notes/helps attached to an error and are never
/// a terminating diagnostic on their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Note,
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A single compiler diagnostic: a message, its severity, and where it happened.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
    /// The §7 taxonomy tag (`Undeclared`, `TypeError`, `UnexpectedToken`, …)
    /// that fills `format_line`'s `<kind>` slot. `None` falls back to the
    /// severity (`"error"`/`"warning"`) — diagnostics built ad hoc (tests,
    /// generic notes) don't always have one.
    pub kind: Option<&'static str>,
    /// The `Exxxx` code, an adjunct for tooling — never rendered by
    /// `format_line`, whose `<kind>` slot is the taxonomy tag above.
    pub code: Option<DiagnosticCode>,
    pub notes: Vec<String>,
    pub helps: Vec<String>,
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            kind: None,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    pub fn with_kind(mut self, kind: &'static str) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Render as `<severity>:<line>:<col>: <kind>: <message>`, the line the
    /// driver prints to stderr and that the CLI's golden-file tests match on.
    /// `<kind>` is the §7 taxonomy tag (`Undeclared`, `TypeError`, …) if one
    /// was attached, `"error"`/`"warning"` otherwise. The `Exxxx` code, if
    /// any, is a separate tooling-facing adjunct and never appears here.
    pub fn format_line(&self) -> String {
        let kind = self.kind.map(str::to_string).unwrap_or_else(|| self.level.to_string());
        format!(
            "{}:{}:{}: {}: {}",
            self.level, self.span.line, self.span.column, kind, self.message
        )
    }
}

/// Accumulates diagnostics emitted during a single pipeline stage.
///
/// Every stage in this pipeline stops at its first error (see the driver's
/// stage contract), so in practice a `Handler` never holds more than one
/// error — but it can still carry trailing notes/helps attached to that
/// error, and tests construct handlers with several diagnostics at once.
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.emit(diagnostic);
    }

    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level == Level::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// The first error, if any — what the driver reports before exiting.
    pub fn first_error(&self) -> Option<Diagnostic> {
        self.diagnostics
            .borrow()
            .iter()
            .find(|d| d.level == Level::Error)
            .cloned()
    }

    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_display() {
        assert_eq!(Level::Error.to_string(), "error");
        assert_eq!(Level::Warning.to_string(), "warning");
    }

    #[test]
    fn diagnostic_builds_up_notes_and_helps() {
        let diag = Diagnostic::error("type mismatch", Span::DUMMY)
            .with_code(DiagnosticCode::E_SEM_TYPE_ERROR)
            .with_note("expected `int`, found `bool`")
            .with_help("compare with `==` instead of assigning");
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.helps.len(), 1);
    }

    #[test]
    fn format_line_uses_the_taxonomy_tag_when_present() {
        let span = Span::new(0, 1, 3, 7);
        let diag = Diagnostic::error("undeclared identifier `y`", span)
            .with_kind("Undeclared")
            .with_code(DiagnosticCode::E_SEM_UNDECLARED);
        assert_eq!(diag.format_line(), "error:3:7: Undeclared: undeclared identifier `y`");
    }

    #[test]
    fn format_line_never_renders_the_e_code() {
        let diag = Diagnostic::error("boom", Span::new(0, 1, 1, 1))
            .with_kind("TypeError")
            .with_code(DiagnosticCode::E_SEM_TYPE_ERROR);
        assert!(!diag.format_line().contains("E3003"));
    }

    #[test]
    fn format_line_falls_back_to_level_without_a_code() {
        let diag = Diagnostic::error("boom", Span::new(0, 1, 1, 1));
        assert_eq!(diag.format_line(), "error:1:1: error: boom");
    }

    #[test]
    fn handler_tracks_errors_and_warnings_separately() {
        let handler = Handler::new();
        assert!(!handler.has_errors());

        handler.emit_diagnostic(Diagnostic::warning("unused variable `x`", Span::DUMMY));
        assert!(!handler.has_errors());
        assert_eq!(handler.warning_count(), 1);

        handler.build_error(Span::DUMMY, "undeclared identifier `y`")
            .code(DiagnosticCode::E_SEM_UNDECLARED)
            .emit(&handler);
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics().len(), 2);
    }

    #[test]
    fn first_error_returns_the_earliest_error() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("first", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::error("second", Span::DUMMY));
        assert_eq!(handler.first_error().unwrap().message, "first");
    }

    #[test]
    fn clear_resets_the_handler() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("x", Span::DUMMY));
        handler.clear();
        assert!(!handler.has_errors());
        assert_eq!(handler.diagnostics().len(), 0);
    }
}
