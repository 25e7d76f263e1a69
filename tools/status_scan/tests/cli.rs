use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn run_status_scan(args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_status_scan");
    Command::new(exe)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run status_scan")
}

fn write_input(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).expect("write input");
    path
}

fn stdout_lines(out: &Output) -> Vec<String> {
    String::from_utf8(out.stdout.clone())
        .expect("utf-8 stdout")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn prints_unique_statuses_sorted() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_input(
        tmp.path(),
        "doc.json",
        r#"{"a": {"status": "ok"}, "b": [{"status": "fail"}, {"status": "ok"}]}"#,
    );

    let out = run_status_scan(&[input.to_str().unwrap()]);
    assert_eq!(
        out.status.code(),
        Some(0),
        "stderr:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(stdout_lines(&out), vec!["fail", "ok"]);
}

#[test]
fn matched_object_prints_as_json_text() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_input(tmp.path(), "doc.json", r#"{"status": {"status": "nested"}}"#);

    let out = run_status_scan(&[input.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout_lines(&out), vec![r#"{"status": "nested"}"#]);
}

#[test]
fn document_without_objects_prints_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    for (name, text) in [("arr.json", "[1,2,3]"), ("obj.json", "{}"), ("str.json", r#""plain""#)] {
        let input = write_input(tmp.path(), name, text);
        let out = run_status_scan(&[input.to_str().unwrap()]);
        assert_eq!(out.status.code(), Some(0), "{}", name);
        assert!(out.stdout.is_empty(), "{}", name);
    }
}

#[test]
fn wrong_argument_count_prints_usage() {
    let out = run_status_scan(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout_lines(&out), vec!["usage: status_scan <json_file>"]);

    // Neither path exists; a file access would produce a stderr diagnostic.
    let out = run_status_scan(&["missing-a.json", "missing-b.json"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout_lines(&out), vec!["usage: status_scan <json_file>"]);
    assert!(out.stderr.is_empty());
}

#[test]
fn malformed_json_fails_without_output() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_input(tmp.path(), "bad.json", r#"{"status": "a"} {status: "b"}"#);

    let out = run_status_scan(&[input.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid JSON"), "stderr:\n{}", stderr);
}

#[test]
fn missing_file_fails_without_output() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("nope.json");

    let out = run_status_scan(&[input.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot read"));
}

#[test]
fn mixed_status_types_fail_without_output() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_input(tmp.path(), "mixed.json", r#"[{"status": "ok"}, {"status": 3}]"#);

    let out = run_status_scan(&[input.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("not comparable"));
}

#[test]
fn repeated_runs_are_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_input(
        tmp.path(),
        "doc.json",
        r#"{"jobs": [{"status": "queued"}, {"status": "done"}, {"meta": {"status": "done"}}], "status": "active"}"#,
    );

    let first = run_status_scan(&[input.to_str().unwrap()]);
    let second = run_status_scan(&[input.to_str().unwrap()]);
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(stdout_lines(&first), vec!["active", "done", "queued"]);
}

#[test]
fn numeric_statuses_collapse_by_value_and_keep_their_digits() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_input(
        tmp.path(),
        "nums.json",
        r#"[{"status": 1}, {"status": 1.0}, {"status": 123456789012345678901234567890}]"#,
    );

    let out = run_status_scan(&[input.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout_lines(&out),
        vec!["1", "123456789012345678901234567890"]
    );
}

#[test]
fn deeply_nested_document_is_scanned() {
    let tmp = tempfile::tempdir().unwrap();
    let depth = 2000;
    let text = format!("{}{}{}", "[".repeat(depth), r#"{"status":"deep"}"#, "]".repeat(depth));
    let input = write_input(tmp.path(), "deep.json", &text);

    let out = run_status_scan(&[input.to_str().unwrap()]);
    assert_eq!(
        out.status.code(),
        Some(0),
        "stderr:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(stdout_lines(&out), vec!["deep"]);
}
