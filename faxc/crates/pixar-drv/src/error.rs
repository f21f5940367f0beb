//! Driver-level error taxonomy, mapped onto the exit codes in §6:
//! `0` success, `1`-`4` the pipeline stages, `5` I/O.

use thiserror::Error;

use pixar_gen::CodeGenError;
use pixar_lex::LexError;
use pixar_par::ParseError;
use pixar_sem::SemError;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("{0}")]
    Lex(#[from] LexError),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Sem(#[from] SemError),

    #[error("{0}")]
    Gen(#[from] CodeGenError),

    #[error("could not read {path}: {source}")]
    Read { path: String, source: std::io::Error },

    #[error("could not write {path}: {source}")]
    Write { path: String, source: std::io::Error },
}

impl DriverError {
    /// The process exit code this error maps to, per §6.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Lex(_) => 1,
            DriverError::Parse(_) => 2,
            DriverError::Sem(_) => 3,
            DriverError::Gen(_) => 4,
            DriverError::Read { .. } | DriverError::Write { .. } => 5,
        }
    }

    /// The `<severity>:<line>:<col>: <kind>: <message>` line for stderr, for
    /// the stage errors that carry a span. I/O errors have no source
    /// position, so they render as a plain message instead.
    pub fn diagnostic_line(&self) -> String {
        match self {
            DriverError::Lex(e) => e.to_diagnostic().format_line(),
            DriverError::Parse(e) => e.to_diagnostic().format_line(),
            DriverError::Sem(e) => e.to_diagnostic().format_line(),
            DriverError::Gen(e) => e.to_diagnostic().format_line(),
            DriverError::Read { .. } | DriverError::Write { .. } => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pixar_util::Span;

    #[test]
    fn stage_errors_map_to_their_documented_exit_code() {
        let err = DriverError::Sem(SemError::Undeclared { name: "x".to_string(), span: Span::DUMMY });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn io_errors_map_to_exit_code_five() {
        let err = DriverError::Read {
            path: "main.pix".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn stage_errors_render_the_severity_line_col_kind_message_format() {
        let err = DriverError::Sem(SemError::Undeclared { name: "x".to_string(), span: Span::DUMMY });
        let line = err.diagnostic_line();
        assert!(line.starts_with("error:"));
        assert!(line.contains(": Undeclared: "));
        assert!(!line.contains("E3001"));
    }
}
