//! Fluent construction of [`Diagnostic`] values.

use super::{Diagnostic, DiagnosticCode, Level, Span};

/// A source line plus the column range a diagnostic wants to highlight.
///
/// # Examples
///
/// ```
/// use pixar_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("let x: int = 1;", 1, 5, 6, Some("here"));
/// assert!(snippet.format().contains('^'));
/// ```
#[derive(Clone, Debug)]
pub struct SourceSnippet {
    pub line: String,
    pub line_number: usize,
    pub start_column: usize,
    pub end_column: usize,
    pub label: Option<String>,
}

impl SourceSnippet {
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// A snippet highlighting a single column, with no range.
    pub fn point(line: impl Into<String>, line_number: usize, column: usize) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column: column,
            end_column: column,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Render as a two-line `rustc`-style snippet: source line, then a caret underline.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let mut out = String::new();
        out.push_str(&format!("{:>width$} | {}\n", self.line_number, self.line, width = width));
        out.push_str(&format!("{:>width$} | ", "", width = width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = (self.end_column - self.start_column).max(1);
        for _ in 0..underline_start {
            out.push(' ');
        }
        for _ in 0..underline_len {
            out.push('^');
        }
        if let Some(ref label) = self.label {
            out.push_str(&format!(" {}", label));
        }
        out
    }
}

/// Builds a [`Diagnostic`] one piece at a time.
///
/// ```
/// use pixar_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Span};
///
/// let diag = DiagnosticBuilder::error("unexpected token `)`")
///     .code(DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN)
///     .span(Span::DUMMY)
///     .help("did you forget an operand?")
///     .build();
/// assert_eq!(diag.code, Some(DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN));
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    kind: Option<&'static str>,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            kind: None,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// The §7 taxonomy tag for `format_line`'s `<kind>` slot.
    pub fn kind(mut self, kind: &'static str) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    pub fn with_note(self, note: impl Into<String>) -> Self {
        self.note(note)
    }

    pub fn with_help(self, help: impl Into<String>) -> Self {
        self.help(help)
    }

    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            kind: self.kind,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build and immediately hand the diagnostic to `handler`.
    pub fn emit(self, handler: &super::Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_point_has_no_range() {
        let snippet = SourceSnippet::point("let x: int = 1;", 1, 5);
        assert_eq!(snippet.start_column, snippet.end_column);
        assert!(snippet.label.is_none());
    }

    #[test]
    fn snippet_format_contains_source_and_caret() {
        let snippet = SourceSnippet::new("let x: int = 1;", 1, 5, 6, Some("here"));
        let formatted = snippet.format();
        assert!(formatted.contains("let x: int = 1;"));
        assert!(formatted.contains('^'));
        assert!(formatted.contains("here"));
    }

    #[test]
    fn builder_collects_notes_and_helps() {
        let diag = DiagnosticBuilder::error("type mismatch")
            .code(DiagnosticCode::E_SEM_TYPE_ERROR)
            .note("expected `int`")
            .help("convert with an explicit cast")
            .span(Span::DUMMY)
            .build();

        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.notes, vec!["expected `int`"]);
        assert_eq!(diag.helps, vec!["convert with an explicit cast"]);
    }

    #[test]
    fn builder_emit_reaches_the_handler() {
        use super::super::Handler;

        let handler = Handler::new();
        DiagnosticBuilder::error("undeclared identifier `foo`")
            .code(DiagnosticCode::E_SEM_UNDECLARED)
            .span(Span::DUMMY)
            .emit(&handler);

        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
    }
}
