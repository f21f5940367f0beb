//! Semantic analysis for PixArLang (§4.3): scope-stack name resolution
//! and type checking over the AST `pixar-par` produces, yielding a typed
//! AST the code generator consumes without re-deriving any of it.

pub mod analysis;
pub mod error;
pub mod hir;
mod infer;
pub mod scope;
pub mod types;

pub use error::SemError;
pub use hir::{TypedBlock, TypedExpr, TypedParam, TypedProgram, TypedStmt};

use pixar_par::Program;

/// Runs semantic analysis over a whole program, producing a typed AST or
/// the first error encountered (source order, fail-fast).
pub fn analyze(program: &Program) -> Result<TypedProgram, SemError> {
    analysis::Analyzer::analyze(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixar_lex::Lexer;
    use pixar_par::Parser;
    use pixar_util::FileId;

    fn analyze_source(source: &str) -> Result<TypedProgram, SemError> {
        let mut lexer = Lexer::new(source, FileId::DUMMY);
        let tokens = lexer.tokenize().expect("lex failed");
        let program = Parser::new(tokens).parse().expect("parse failed");
        analyze(&program)
    }

    #[test]
    fn scenario_2_assigning_bool_to_int_is_a_type_error() {
        let err = analyze_source("let x: int = true;").unwrap_err();
        match err {
            SemError::TypeError { expected, found, .. } => {
                assert_eq!(expected, pixar_par::Type::Int);
                assert_eq!(found, pixar_par::Type::Bool);
            }
            other => panic!("expected a TypeError, got {other:?}"),
        }
    }

    #[test]
    fn scenario_5_relational_and_branches_type_check() {
        let program = analyze_source(
            "let a: int = 1; let b: int = 2; let x: int = 0; if (a < b) { x = 1; } else { x = 2; }",
        )
        .unwrap();
        assert_eq!(program.len(), 4);
    }

    #[test]
    fn function_call_arity_and_argument_types_are_checked() {
        let program = analyze_source("fun add(x:int, y:int)->int { return x + y; } add(2,3);").unwrap();
        match &program[1] {
            TypedStmt::Expr(TypedExpr::Call { ty, args, .. }) => {
                assert_eq!(*ty, pixar_par::Type::Int);
                assert_eq!(args.len(), 2);
            }
            other => panic!("expected a typed call, got {other:?}"),
        }
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let err = analyze_source("fun add(x:int, y:int)->int { return x + y; } add(2);").unwrap_err();
        assert!(matches!(err, SemError::ArityError { expected: 2, found: 1, .. }));
    }

    #[test]
    fn using_an_identifier_before_its_declaration_fails() {
        let err = analyze_source("x = 1;").unwrap_err();
        assert!(matches!(err, SemError::Undeclared { .. }));
    }

    #[test]
    fn redeclaring_in_the_same_scope_fails() {
        let err = analyze_source("let x: int = 1; let x: int = 2;").unwrap_err();
        assert!(matches!(err, SemError::Redeclaration { .. }));
    }

    #[test]
    fn shadowing_in_a_nested_block_is_allowed() {
        analyze_source("let x: int = 1; { let x: bool = true; }").unwrap();
    }

    #[test]
    fn return_outside_a_function_is_rejected() {
        let err = analyze_source("return 1;").unwrap_err();
        assert!(matches!(err, SemError::ReturnOutsideFunction { .. }));
    }

    #[test]
    fn return_type_must_match_the_function_signature() {
        let err = analyze_source("fun f() -> int { return true; }").unwrap_err();
        assert!(matches!(err, SemError::TypeError { .. }));
    }

    #[test]
    fn for_loop_variable_is_scoped_to_the_loop() {
        let err = analyze_source("for (let i: int = 0; i < 10; i = i + 1;) { } i = 0;").unwrap_err();
        assert!(matches!(err, SemError::Undeclared { .. }));
    }

    #[test]
    fn for_loop_body_local_may_shadow_the_loop_variable() {
        analyze_source("for (let i: int = 0; i < 5; i = i + 1;) { let i: int = 0; }")
            .expect("body-local `i` is in its own nested scope, not the loop rib");
    }

    #[test]
    fn pixel_builtin_requires_int_int_colour() {
        analyze_source("let x: int = 1; let y: int = 2; __pixel(x, y, #FF00AA);").unwrap();
        let err = analyze_source("let x: int = 1; __pixel(x, x, x);").unwrap_err();
        assert!(matches!(err, SemError::TypeError { .. }));
    }

    #[test]
    fn width_and_height_take_no_arguments_and_return_int() {
        let program = analyze_source("let w: int = __width(); let h: int = __height();").unwrap();
        assert_eq!(program.len(), 2);
    }
}
