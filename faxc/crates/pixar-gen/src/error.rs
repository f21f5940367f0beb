//! Code-generation error taxonomy (§7: `UnresolvedSymbol`, `UnsupportedNode`).
//! Both are internal/defensive: a program that passed semantic analysis
//! should never trigger either, since name resolution and type checking
//! already happened in `pixar-sem`.

use pixar_util::{Diagnostic, DiagnosticCode, Span};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CodeGenError {
    #[error("unresolved symbol `{name}` (semantic analysis should have caught this)")]
    UnresolvedSymbol { name: String, span: Span },

    #[error("unsupported AST node: {description}")]
    UnsupportedNode { description: String, span: Span },

    #[error("frame size mismatch: computed {expected} slots, emitted {found}")]
    FrameMismatch { expected: u32, found: u32, span: Span },
}

impl CodeGenError {
    pub fn span(&self) -> Span {
        match self {
            CodeGenError::UnresolvedSymbol { span, .. }
            | CodeGenError::UnsupportedNode { span, .. }
            | CodeGenError::FrameMismatch { span, .. } => *span,
        }
    }

    pub fn code(&self) -> DiagnosticCode {
        match self {
            CodeGenError::UnresolvedSymbol { .. } => DiagnosticCode::E_GEN_UNRESOLVED_SYMBOL,
            CodeGenError::UnsupportedNode { .. } => DiagnosticCode::E_GEN_UNSUPPORTED_NODE,
            CodeGenError::FrameMismatch { .. } => DiagnosticCode::E_GEN_FRAME_MISMATCH,
        }
    }

    /// The §7 taxonomy tag rendered into `format_line`'s `<kind>` slot.
    /// `FrameMismatch` has no §7 counterpart (it's an internal invariant
    /// check, not a user-facing category); it renders under its own name.
    pub fn tag(&self) -> &'static str {
        match self {
            CodeGenError::UnresolvedSymbol { .. } => "UnresolvedSymbol",
            CodeGenError::UnsupportedNode { .. } => "UnsupportedNode",
            CodeGenError::FrameMismatch { .. } => "FrameMismatch",
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.to_string(), self.span())
            .with_kind(self.tag())
            .with_code(self.code())
    }
}
