//! End-to-end tests against the compiled `polycalc` binary, covering the
//! parts the library tests intentionally leave to the driver: line framing,
//! 1-based line-number bookkeeping in diagnostics, and the process exit-code
//! convention.

use std::io::Write;
use std::process::{Command, Stdio};

fn run(input: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_polycalc"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn polycalc");

    child
        .stdin
        .take()
        .expect("stdin was piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");

    let output = child.wait_with_output().expect("failed to wait on child");
    (
        String::from_utf8(output.stdout).expect("stdout was not utf-8"),
        String::from_utf8(output.stderr).expect("stderr was not utf-8"),
        output.status.code().expect("process was not terminated by a signal"),
    )
}

#[test]
fn scenario_one_deg_and_print() {
    let (stdout, stderr, code) = run("(1,2)+(2,3)\nDEG\nPRINT\n");
    assert_eq!(stdout, "3\n(1,2)+(2,3)\n");
    assert_eq!(stderr, "");
    assert_eq!(code, 0);
}

#[test]
fn scenario_five_stack_underflow_on_first_line() {
    let (stdout, stderr, code) = run("ADD\n");
    assert_eq!(stdout, "");
    assert_eq!(stderr, "ERROR 1 STACK UNDERFLOW\n");
    assert_eq!(code, 0);
}

#[test]
fn scenario_eight_unknown_command_line_number() {
    let (_, stderr, _) = run("FOO\n");
    assert_eq!(stderr, "ERROR 1 WRONG COMMAND\n");
}

#[test]
fn line_numbers_count_ignored_lines() {
    // lines 1 and 2 are ignored (comment, blank); ZERO pushes on line 3;
    // an unknown command on line 4 should be reported as line 4.
    let (stdout, stderr, _) = run("# comment\n\nZERO\nBOGUS\n");
    assert_eq!(stdout, "");
    assert_eq!(stderr, "ERROR 4 WRONG COMMAND\n");
}

#[test]
fn missing_trailing_newline_is_treated_as_present() {
    let (stdout, stderr, code) = run("5\n3\nSUB\nPRINT");
    assert_eq!(stdout, "-2\n");
    assert_eq!(stderr, "");
    assert_eq!(code, 0);
}

#[test]
fn errors_on_separate_lines_do_not_abort_processing() {
    let (stdout, stderr, code) = run("FOO\nZERO\nIS_ZERO\n");
    assert_eq!(stdout, "1\n");
    assert_eq!(stderr, "ERROR 1 WRONG COMMAND\n");
    assert_eq!(code, 0);
}
