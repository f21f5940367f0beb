//! Lexical error taxonomy (§7: `UnexpectedCharacter`, `InvalidEscape`,
//! `UnterminatedString`, `InvalidNumber`, `InvalidColour`).

use pixar_util::{Diagnostic, DiagnosticCode, Span};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LexError {
    #[error("unexpected character '{ch}'")]
    UnexpectedCharacter { ch: char, span: Span },

    #[error("invalid escape sequence '\\{seq}'")]
    InvalidEscape { seq: String, span: Span },

    #[error("unterminated string literal")]
    UnterminatedString { span: Span },

    #[error("invalid number literal '{text}'")]
    InvalidNumber { text: String, span: Span },

    #[error("invalid colour literal '{text}', expected 6 hex digits")]
    InvalidColour { text: String, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. }
            | LexError::InvalidEscape { span, .. }
            | LexError::UnterminatedString { span, .. }
            | LexError::InvalidNumber { span, .. }
            | LexError::InvalidColour { span, .. } => *span,
        }
    }

    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedCharacter { .. } => DiagnosticCode::E_LEX_UNEXPECTED_CHAR,
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEX_UNTERMINATED_STRING,
            LexError::InvalidNumber { .. } => DiagnosticCode::E_LEX_INVALID_NUMBER,
            LexError::InvalidColour { .. } => DiagnosticCode::E_LEX_INVALID_COLOUR,
            LexError::InvalidEscape { .. } => DiagnosticCode::E_LEX_INVALID_ESCAPE,
        }
    }

    /// The §7 taxonomy tag rendered into `format_line`'s `<kind>` slot.
    pub fn tag(&self) -> &'static str {
        match self {
            LexError::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            LexError::InvalidEscape { .. } => "InvalidEscape",
            LexError::UnterminatedString { .. } => "UnterminatedString",
            LexError::InvalidNumber { .. } => "InvalidNumber",
            LexError::InvalidColour { .. } => "InvalidColour",
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.to_string(), self.span())
            .with_kind(self.tag())
            .with_code(self.code())
    }
}
