//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::Command;

fn run_repute(dir: &Path, args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_repute");
    Command::new(bin)
        .args(args)
        .current_dir(dir)
        .env("REPUTE_DB", dir.join("repute.db"))
        .env_remove("REPUTE_CONFIG")
        .env_remove("REPUTE_LOG")
        .output()
        .expect("failed to run repute binary")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Resolves `text` and returns the object id printed first on the line.
fn resolve(dir: &Path, text: &str) -> String {
    let output = run_repute(dir, &["resolve", text]);
    assert!(output.status.success(), "resolve failed: {}", stderr(&output));
    stdout(&output).split_whitespace().next().expect("object id").to_string()
}

#[test]
fn normalize_prints_canonical_phone() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_repute(dir.path(), &["normalize", "8 (999) 888-77-66"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("+79998887766"));
    assert!(!dir.path().join("repute.db").exists());
}

#[test]
fn phone_spellings_share_one_object() {
    let dir = tempfile::tempdir().unwrap();
    let first = resolve(dir.path(), "+7 999 888 77 66");
    let second = resolve(dir.path(), "89998887766");
    let third = resolve(dir.path(), "9998887766");
    assert_eq!(first, second);
    assert_eq!(first, third);
}

#[test]
fn second_vote_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let id = resolve(dir.path(), "@someone");

    let output = run_repute(dir.path(), &["vote", &id, "up", "--voter", "1"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("👍 1"));

    let output = run_repute(dir.path(), &["vote", &id, "-1", "--voter", "1"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("already voted"));

    let output = run_repute(dir.path(), &["show", &id, "--json"]);
    let snapshot: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(snapshot["score"], 1);
}

#[test]
fn free_text_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_repute(dir.path(), &["resolve", "hello world"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unrecognized alias format"));
}

#[test]
fn link_merges_objects_and_retires_source() {
    let dir = tempfile::tempdir().unwrap();
    let a = resolve(dir.path(), "@foo");
    let b = resolve(dir.path(), "vk.com/bar");
    assert!(run_repute(dir.path(), &["vote", &a, "up", "--voter", "1"]).status.success());
    assert!(run_repute(dir.path(), &["vote", &b, "up", "--voter", "2"]).status.success());

    let output = run_repute(dir.path(), &["resolve", "@foo", "--link", &b]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("merged"));

    assert_eq!(resolve(dir.path(), "t.me/foo"), b);
    let output = run_repute(dir.path(), &["show", &b]);
    assert!(stdout(&output).contains("👍 2"));
    assert!(!run_repute(dir.path(), &["show", &a]).status.success());
}

#[test]
fn comments_come_back_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let id = resolve(dir.path(), "@foo");
    for text in ["first", "second", "third"] {
        assert!(run_repute(dir.path(), &["comment", &id, text]).status.success());
    }

    let output = run_repute(dir.path(), &["comments", &id, "--limit", "2"]);
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("third"));
    assert!(lines[1].ends_with("second"));
}

#[test]
fn tags_lists_default_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_repute(dir.path(), &["tags"]);
    assert!(output.status.success());
    let text = stdout(&output);
    for name in ["Business", "Criminal", "Police", "Frivolous", "Scammer"] {
        assert!(text.contains(name), "missing {name}");
    }
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_repute(dir.path(), &["nonsense"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unrecognized subcommand"));
}
