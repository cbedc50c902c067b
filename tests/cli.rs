//! End-to-end tests that run the built `csv2md` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn csv2md(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_csv2md"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start csv2md");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_stdin_to_markdown() {
    let output = csv2md(&[], "name,age\nAlice,30\nBob,25");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "| name | age | \n| --- | --- | \n| Alice | 30 | \n| Bob | 25 | \n"
    );
}

#[test]
fn test_file_with_header() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"name,age\nAlice,30\nBob,25\n").unwrap();
    let path = file.path().to_str().unwrap();

    let output = csv2md(&["--header", "People", path], "");
    assert!(output.status.success());
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "# People");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "| name | age | ");
}

#[test]
fn test_tabs_aligned() {
    let output = csv2md(&["-t", "-a"], "id\tdescription\n1\tx\n");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "| id | description | \n| --- | ----------- | \n| 1  | x           | \n"
    );
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");

    let output = csv2md(&[missing.to_str().unwrap()], "");
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.starts_with("csv2md: Failed to open file"));
    assert!(err.contains("nope.csv"));
}

#[test]
fn test_unterminated_quote_fails() {
    let output = csv2md(&[], "a,b\n1,\"2\n");
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Failed to parse CSV from stdin"));
    assert!(err.contains("line 2"));
}

#[test]
fn test_empty_input_prints_usage_to_stderr() {
    let output = csv2md(&["--header", "Nothing"], "");
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Usage:"));
}

#[test]
fn test_help_word_prints_usage() {
    let output = csv2md(&["help"], "");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_log_goes_to_stderr() {
    let output = csv2md(&["--log"], "a\n1\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "| a | \n| --- | \n| 1 | \n");
    assert!(stderr(&output).contains("Parsed 2 rows"));
}

#[test]
fn test_blank_lines_skipped() {
    let output = csv2md(&[], "a,b\n\n1,2\n\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "| a | b | \n| --- | --- | \n| 1 | 2 | \n");
}
