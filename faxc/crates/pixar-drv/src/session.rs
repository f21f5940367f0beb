//! Pipeline orchestration (§10.2, §5): one `Session` per compilation,
//! running lex -> parse -> analyze -> generate fail-fast, front to back,
//! on a single thread with no state surviving past the call.

use std::io::Write;

use pixar_lex::Lexer;
use pixar_par::Parser;
use pixar_util::{FileId, SourceMap};
use tracing::debug;

use crate::config::{Config, EmitMode};
use crate::error::{DriverError, Result};

pub struct Session {
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the full pipeline and writes the result to the configured
    /// output, returning the process exit code on failure.
    pub fn run(&self) -> Result<()> {
        let path = &self.config.input;
        let raw = std::fs::read_to_string(path).map_err(|source| DriverError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let source = normalize_line_endings(&raw);

        let mut source_map = SourceMap::new();
        let file_id = source_map.add_file(path.display().to_string(), source.clone());

        let text = self.compile(&source, file_id)?;

        match &self.config.output {
            Some(out_path) => {
                std::fs::write(out_path, text).map_err(|source| DriverError::Write {
                    path: out_path.display().to_string(),
                    source,
                })?;
            }
            None => {
                let mut stdout = std::io::stdout();
                let _ = writeln!(stdout, "{text}");
            }
        }

        Ok(())
    }

    fn compile(&self, source: &str, file_id: FileId) -> Result<String> {
        debug!(phase = "lex", "starting");
        let mut lexer = Lexer::new(source, file_id);
        let tokens = lexer.tokenize()?;
        debug!(phase = "lex", tokens = tokens.len(), "finished");

        if self.config.emit == EmitMode::Tokens {
            for token in &tokens {
                eprintln!("{token:?}");
            }
            return Ok(String::new());
        }

        debug!(phase = "parse", "starting");
        let program = Parser::new(tokens).parse()?;
        debug!(phase = "parse", statements = program.len(), "finished");

        if self.config.emit == EmitMode::Ast {
            for stmt in &program {
                eprintln!("{stmt:#?}");
            }
            return Ok(String::new());
        }

        debug!(phase = "sem", "starting");
        let typed = pixar_sem::analyze(&program)?;
        debug!(phase = "sem", "finished");

        debug!(phase = "gen", "starting");
        let instrs = pixar_gen::generate(&typed)?;
        debug!(phase = "gen", instructions = instrs.len(), "finished");

        Ok(pixar_gen::render(&instrs))
    }
}

/// Normalises `\r\n` to `\n` per §6's source-file contract.
fn normalize_line_endings(source: &str) -> String {
    source.replace("\r\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_source(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn compiles_a_well_formed_program_to_pixir_text() {
        let file = write_source("let x: int = 10 + 17;");
        let config = Config { input: file.path().to_path_buf(), output: None, emit: EmitMode::PixIr, verbose: false };
        let session = Session::new(config);
        let text = session.compile(&std::fs::read_to_string(file.path()).unwrap(), FileId::DUMMY).unwrap();
        assert!(text.contains("add"));
    }

    #[test]
    fn a_semantic_error_surfaces_as_a_driver_error() {
        let file = write_source("let x: int = true;");
        let config = Config { input: file.path().to_path_buf(), output: None, emit: EmitMode::PixIr, verbose: false };
        let session = Session::new(config);
        let err = session.compile(&std::fs::read_to_string(file.path()).unwrap(), FileId::DUMMY).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn carriage_returns_are_normalised_before_lexing() {
        assert_eq!(normalize_line_endings("let x: int = 1;\r\nlet y: int = 2;\r\n"), "let x: int = 1;\nlet y: int = 2;\n");
    }
}
