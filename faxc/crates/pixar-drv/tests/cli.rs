//! End-to-end CLI tests for `pixarc`, driving the real binary the way a
//! user would (§6): a source file in, PixIR or a diagnostic line out.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn pixarc() -> Command {
    Command::cargo_bin("pixarc").expect("pixarc binary should build")
}

fn source_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".pix").expect("tempfile");
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn help_flag_prints_usage() {
    pixarc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pixarc"));
}

#[test]
fn version_flag_prints_the_crate_version() {
    pixarc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn compiling_a_well_formed_program_writes_pixir_to_stdout() {
    let file = source_file("let x: int = 10 + 17;");
    pixarc()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("add"));
}

#[test]
fn output_flag_writes_to_the_given_file() {
    let file = source_file("let x: int = 1;");
    let out = NamedTempFile::new().expect("tempfile");
    pixarc()
        .arg(file.path())
        .arg("-o")
        .arg(out.path())
        .assert()
        .success();
    let written = std::fs::read_to_string(out.path()).unwrap();
    assert!(written.contains("push 1"));
}

#[test]
fn a_lexical_error_exits_with_code_one() {
    let file = source_file("let s: int = \"unterminated;");
    pixarc().arg(file.path()).assert().code(1);
}

#[test]
fn a_parse_error_exits_with_code_two() {
    let file = source_file("let x: int = ;");
    pixarc().arg(file.path()).assert().code(2);
}

#[test]
fn a_semantic_error_exits_with_code_three_and_reports_the_position() {
    let file = source_file("let x: int = true;");
    pixarc()
        .arg(file.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error:1:"));
}

#[test]
fn a_missing_input_file_exits_with_code_five() {
    pixarc().arg("/no/such/file.pix").assert().code(5);
}

#[test]
fn emit_tokens_flag_dumps_tokens_and_stops_before_codegen() {
    let file = source_file("let x: int = 1;");
    pixarc()
        .arg(file.path())
        .arg("--emit-tokens")
        .assert()
        .success()
        .stderr(predicate::str::contains("Let"));
}

#[test]
fn emit_ast_flag_dumps_the_ast_and_stops_before_codegen() {
    let file = source_file("let x: int = 1;");
    pixarc()
        .arg(file.path())
        .arg("--emit-ast")
        .assert()
        .success()
        .stderr(predicate::str::contains("Let"));
}
