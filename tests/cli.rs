//! Binary-level tests: argument validation, exit codes, console output.

use std::process::{Command, Output};

fn run_driver(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_parmul"))
        .args(args)
        .output()
        .expect("driver binary should run")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_no_args_prints_usage_and_exits_1() {
    let output = run_driver(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("usage:"));
}

#[test]
fn test_one_arg_prints_usage_and_exits_1() {
    let output = run_driver(&["4"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("usage:"));
}

#[test]
fn test_zero_size_rejected() {
    let output = run_driver(&["0", "4"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("must be positive"));
}

#[test]
fn test_zero_threads_rejected() {
    let output = run_driver(&["4", "0"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("must be positive"));
}

#[test]
fn test_non_numeric_size_rejected() {
    let output = run_driver(&["four", "2"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("must be positive"));
}

#[test]
fn test_negative_size_rejected() {
    let output = run_driver(&["-3", "2"]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_oversized_dimension_exits_2() {
    // 2^32 squared overflows the element count on 64-bit targets.
    let output = run_driver(&["4294967296", "2"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_of(&output).contains("allocation failed"));
}

#[test]
fn test_small_run_prints_grids_and_product() {
    let output = run_driver(&["2", "2"]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Matrix size: 2 x 2"));
    assert!(stdout.contains("Threads: 2"));
    assert!(stdout.contains("microseconds"));
    assert!(stdout.contains("**-----------------------------**"));

    // Operand A rows, then the known product rows.
    assert!(stdout.contains("0 2"));
    assert!(stdout.contains("4 6"));
    assert!(stdout.contains("8 10"));
    assert!(stdout.contains("32 42"));
}

#[test]
fn test_large_run_suppresses_grids() {
    let output = run_driver(&["9", "3"]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Matrix size: 9 x 9"));
    assert!(stdout.contains("microseconds"));
    assert!(!stdout.contains("Matrix contents"));
}

#[test]
fn test_more_threads_than_rows_still_succeeds() {
    let output = run_driver(&["2", "64"]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("8 10"));
    assert!(stdout.contains("32 42"));
}
