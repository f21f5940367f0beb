//! Syntactic error taxonomy (§7: `UnexpectedToken`, `UnexpectedEOF`,
//! `MalformedDeclaration`).

use pixar_util::{Diagnostic, DiagnosticCode, Span};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("unexpected end of file, expected {expected}")]
    UnexpectedEof { expected: String, span: Span },

    #[error("malformed declaration: {message}")]
    MalformedDeclaration { message: String, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEof { span, .. }
            | ParseError::MalformedDeclaration { span, .. } => *span,
        }
    }

    pub fn code(&self) -> DiagnosticCode {
        match self {
            ParseError::UnexpectedToken { .. } => DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN,
            ParseError::UnexpectedEof { .. } => DiagnosticCode::E_PARSE_UNEXPECTED_EOF,
            ParseError::MalformedDeclaration { .. } => DiagnosticCode::E_PARSE_MALFORMED_DECLARATION,
        }
    }

    /// The §7 taxonomy tag rendered into `format_line`'s `<kind>` slot.
    /// `UnexpectedEof` renders as the spec's `UnexpectedEOF` (all-caps EOF),
    /// not the Rust variant's `Eof` casing.
    pub fn tag(&self) -> &'static str {
        match self {
            ParseError::UnexpectedToken { .. } => "UnexpectedToken",
            ParseError::UnexpectedEof { .. } => "UnexpectedEOF",
            ParseError::MalformedDeclaration { .. } => "MalformedDeclaration",
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.to_string(), self.span())
            .with_kind(self.tag())
            .with_code(self.code())
    }
}
