//! Command-line surface (§10.3). `clap` is confined to this module and
//! never leaks past [`Cli::into_config`]; everything downstream — the
//! library-facing [`crate::session::Session`] — takes a plain [`Config`],
//! the same boundary `faxt` draws around its own CLI parsing.

use std::path::PathBuf;

use clap::Parser;

/// Compile a PixArLang source file to PixIR.
#[derive(Parser, Debug)]
#[command(name = "pixarc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compile a PixArLang source file to PixIR", long_about = None)]
pub struct Cli {
    /// Source file to compile.
    pub input: PathBuf,

    /// Where to write the emitted PixIR. Defaults to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Dump the token stream to stderr and stop.
    #[arg(long)]
    pub emit_tokens: bool,

    /// Dump the parsed AST to stderr and stop.
    #[arg(long)]
    pub emit_ast: bool,

    /// Raise the log filter by one level (`warn` -> `debug`).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            input: self.input,
            output: self.output,
            emit: if self.emit_tokens {
                EmitMode::Tokens
            } else if self.emit_ast {
                EmitMode::Ast
            } else {
                EmitMode::PixIr
            },
            verbose: self.verbose,
        }
    }
}

/// What the driver should produce. A plain, `clap`-free struct so the
/// pipeline in [`crate::session`] stays usable outside a CLI context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub emit: EmitMode,
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitMode {
    Tokens,
    Ast,
    PixIr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_emitting_pixir_to_stdout() {
        let cli = Cli::parse_from(["pixarc", "main.pix"]);
        let config = cli.into_config();
        assert_eq!(config.input, PathBuf::from("main.pix"));
        assert_eq!(config.output, None);
        assert_eq!(config.emit, EmitMode::PixIr);
    }

    #[test]
    fn output_flag_sets_the_output_path() {
        let cli = Cli::parse_from(["pixarc", "main.pix", "-o", "out.pir"]);
        let config = cli.into_config();
        assert_eq!(config.output, Some(PathBuf::from("out.pir")));
    }

    #[test]
    fn emit_tokens_flag_takes_precedence_over_the_default() {
        let cli = Cli::parse_from(["pixarc", "main.pix", "--emit-tokens"]);
        assert_eq!(cli.into_config().emit, EmitMode::Tokens);
    }

    #[test]
    fn emit_ast_flag_selects_ast_mode() {
        let cli = Cli::parse_from(["pixarc", "main.pix", "--emit-ast"]);
        assert_eq!(cli.into_config().emit, EmitMode::Ast);
    }

    #[test]
    fn verbose_flag_is_carried_through() {
        let cli = Cli::parse_from(["pixarc", "main.pix", "--verbose"]);
        assert!(cli.into_config().verbose);
    }
}
