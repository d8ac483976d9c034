use std::path::PathBuf;
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_detronade"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run detronade")
}

#[test]
fn dump_tokens_for_valid_file() {
    let path = fixture("sample.dtn");
    let output = run(&["--dump-tokens", "--color", "never", path.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "detronade failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).expect("output is valid UTF-8");
    assert!(stdout.contains("identifier \"width\""));
    assert!(stdout.contains("numeric_literal 31"));
    assert!(stdout.contains("operator \"<<=\""));
    assert!(output.stderr.is_empty());
}

#[test]
fn lexical_error_is_rendered_and_fails() {
    let path = fixture("bad_number.dtn");
    let output = run(&["--color", "never", path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("output is valid UTF-8");
    assert!(stderr.contains(":2:9: error: multiple decimal points in decimal numerical literal"));
    assert!(stderr.contains(" 2 | let b = 2.5.1;\n   |         ~~~^~\n"));
    assert!(stderr.contains("1 error(s)"));
}

#[test]
fn warning_alone_does_not_fail() {
    let path = fixture("loud_escape.dtn");
    let output = run(&["--color", "never", path.to_str().unwrap()]);
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("output is valid UTF-8");
    assert!(stderr.contains("warning: number `400` too large for character"));
}

#[test]
fn json_format_reports_tokens_and_messages() {
    let path = fixture("unterminated.dtn");
    let output = run(&["--format", "json", path.to_str().unwrap()]);
    assert!(!output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    assert_eq!(json["success"], false);
    assert_eq!(json["line_count"], 3);
    assert_eq!(json["tokens"].as_array().map(Vec::len), Some(0));
    assert_eq!(json["messages"][0]["text"], "unexpected EOF");
    assert_eq!(json["messages"][0]["severity"], "error");
}

#[test]
fn fancy_output_goes_through_miette() {
    let path = fixture("bad_number.dtn");
    let output = run(&["--fancy", "--color", "never", path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("output is valid UTF-8");
    assert!(stderr.contains("detronade::lex"));
    assert!(stderr.contains("multiple decimal points"));
}

#[test]
fn missing_file_reports_context() {
    let output = run(&["definitely-missing.dtn"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("output is valid UTF-8");
    assert!(stderr.contains("read source file 'definitely-missing.dtn'"));
}
