//! Code generation for PixArLang (§4.4): lowers the typed AST produced
//! by `pixar-sem` into PixIR, a stack-machine instruction set addressed
//! by `(slot, level)` rather than physical registers.

mod emit;
mod error;
mod frame;
mod ir;
mod label;

pub use error::CodeGenError;
pub use ir::{render, Instr};

use pixar_sem::TypedProgram;

/// Compiles a typed program to a flat PixIR instruction stream.
pub fn generate(program: &TypedProgram) -> Result<Vec<Instr>, CodeGenError> {
    emit::Emitter::generate(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixar_lex::Lexer;
    use pixar_par::Parser;
    use pixar_util::FileId;

    fn compile(source: &str) -> String {
        let tokens = Lexer::new(source, FileId::DUMMY).tokenize().unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        let typed = pixar_sem::analyze(&program).unwrap();
        render(&generate(&typed).unwrap())
    }

    #[test]
    fn scenario_1_addition_emits_the_documented_arithmetic_then_a_store() {
        let text = compile("let x: int = 10 + 17;");
        assert!(text.contains("add"));
        assert!(text.contains("st"));
    }

    #[test]
    fn scenario_6_while_loop_has_one_backward_jump_and_one_exit_cjmp() {
        let text = compile("let n: int = 3; while (n > 0) { n = n - 1; }");
        assert_eq!(text.matches("cjmp").count(), 1);
        assert_eq!(text.matches("jmp").count() - text.matches("cjmp").count(), 1);
    }

    #[test]
    fn codegen_is_a_pure_function_of_the_typed_ast() {
        let source = "let a: int = 1; let b: int = a + 2;";
        assert_eq!(compile(source), compile(source));
    }
}
