//! Semantic error taxonomy (§7: `Undeclared`, `Redeclaration`, `TypeError`,
//! `ArityError`, `ReturnOutsideFunction`, `InvalidAssignment`).

use pixar_par::Type;
use pixar_util::{Diagnostic, DiagnosticCode, Span};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SemError {
    #[error("undeclared identifier `{name}`")]
    Undeclared { name: String, span: Span },

    #[error("`{name}` is already declared in this scope")]
    Redeclaration { name: String, span: Span },

    #[error("type error: expected `{expected}`, found `{found}`")]
    TypeError { expected: Type, found: Type, span: Span },

    #[error("`{callee}` expects {expected} argument(s), found {found}")]
    ArityError { callee: String, expected: usize, found: usize, span: Span },

    #[error("`return` outside of a function")]
    ReturnOutsideFunction { span: Span },

    #[error("`{name}` is not an assignable variable")]
    InvalidAssignment { name: String, span: Span },
}

impl SemError {
    pub fn span(&self) -> Span {
        match self {
            SemError::Undeclared { span, .. }
            | SemError::Redeclaration { span, .. }
            | SemError::TypeError { span, .. }
            | SemError::ArityError { span, .. }
            | SemError::ReturnOutsideFunction { span }
            | SemError::InvalidAssignment { span, .. } => *span,
        }
    }

    pub fn code(&self) -> DiagnosticCode {
        match self {
            SemError::Undeclared { .. } => DiagnosticCode::E_SEM_UNDECLARED,
            SemError::Redeclaration { .. } => DiagnosticCode::E_SEM_REDECLARATION,
            SemError::TypeError { .. } => DiagnosticCode::E_SEM_TYPE_ERROR,
            SemError::ArityError { .. } => DiagnosticCode::E_SEM_ARITY_ERROR,
            SemError::ReturnOutsideFunction { .. } => DiagnosticCode::E_SEM_RETURN_OUTSIDE_FUNCTION,
            SemError::InvalidAssignment { .. } => DiagnosticCode::E_SEM_INVALID_ASSIGNMENT,
        }
    }

    /// The §7 taxonomy tag rendered into `format_line`'s `<kind>` slot.
    pub fn tag(&self) -> &'static str {
        match self {
            SemError::Undeclared { .. } => "Undeclared",
            SemError::Redeclaration { .. } => "Redeclaration",
            SemError::TypeError { .. } => "TypeError",
            SemError::ArityError { .. } => "ArityError",
            SemError::ReturnOutsideFunction { .. } => "ReturnOutsideFunction",
            SemError::InvalidAssignment { .. } => "InvalidAssignment",
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.to_string(), self.span())
            .with_kind(self.tag())
            .with_code(self.code())
    }
}
