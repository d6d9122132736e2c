//! Integration tests for the `codepage` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn cmd() -> Command {
    Command::cargo_bin("codepage").unwrap()
}

const MINI: &str = "0x40 0x0020 SPACE\n0xc1 0x0041 A\ngarbage\n0xc2 0x0042 B\n";

// --- list ---

#[test]
fn list_shows_bundled_tables() {
    cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("CP037\n"))
        .stdout(predicate::str::contains("ISO8859-1\n"));
}

#[test]
fn list_json_is_sorted_array() {
    let output = cmd().args(["list", "--format", "json"]).output().unwrap();
    assert!(output.status.success());
    let names: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert!(names.contains(&"CP1140".to_string()));
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn list_from_custom_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("MINI.txt"), MINI).unwrap();
    fs::write(dir.path().join("notes.md"), "ignore me").unwrap();
    cmd()
        .arg("list")
        .arg("--tables")
        .arg(dir.path())
        .assert()
        .success()
        .stdout("MINI\n");
}

#[test]
fn missing_tables_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .arg("list")
        .arg("--tables")
        .arg(dir.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("table directory not found"));
}

// --- decode ---

#[test]
fn decode_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("digits.bin");
    fs::write(&input, [0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7, 0xF8, 0xF9]).unwrap();
    cmd()
        .args(["decode", "-e", "CP037"])
        .arg(&input)
        .assert()
        .success()
        .stdout("0123456789");
}

#[test]
fn decode_stdin() {
    cmd()
        .args(["decode", "--encoding", "CP037"])
        .write_stdin(vec![0xC8, 0xC5, 0xD3, 0xD3, 0xD6])
        .assert()
        .success()
        .stdout("HELLO");
}

#[test]
fn decode_unknown_table_fails() {
    cmd()
        .args(["decode", "-e", "CP999999"])
        .write_stdin(vec![0x00])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found: CP999999"));
}

#[test]
fn decode_missing_input_file_fails() {
    cmd()
        .args(["decode", "-e", "CP037", "/nonexistent/input.bin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// --- encode ---

#[test]
fn encode_stdin() {
    let output = cmd()
        .args(["encode", "-e", "CP037"])
        .write_stdin("HELLO")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, [0xC8, 0xC5, 0xD3, 0xD3, 0xD6]);
}

#[test]
fn encode_substitutes_unmapped() {
    let output = cmd()
        .args(["encode", "-e", "CP037"])
        .write_stdin("A€B")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, [0xC1, 0x40, 0xC2]);
}

#[test]
fn encode_strict_fails_on_unmapped() {
    cmd()
        .args(["encode", "-e", "CP037", "--strict"])
        .write_stdin("A€B")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("no mapping for U+20AC"));
}

#[test]
fn encode_strict_succeeds_when_all_mapped() {
    let output = cmd()
        .args(["encode", "-e", "CP1140", "--strict"])
        .write_stdin("€")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, [0x9F]);
}

#[test]
fn encode_rejects_invalid_utf8() {
    cmd()
        .args(["encode", "-e", "CP037"])
        .write_stdin(vec![0xFF, 0xFE])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn encode_with_custom_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("MINI.txt"), MINI).unwrap();
    let output = cmd()
        .args(["encode", "-e", "MINI", "--tables"])
        .arg(dir.path())
        .write_stdin("BA Z")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, [0xC2, 0xC1, 0x40, 0x40]);
}

// --- table ---

#[test]
fn table_text_uses_table_format() {
    cmd()
        .args(["table", "CP037"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# CP037\n"))
        .stdout(predicate::str::contains("0xf0\t0x0030\t0\n"))
        .stdout(predicate::str::contains("0x40\t0x0020\t \n"));
}

#[test]
fn table_json_lists_entries() {
    let output = cmd()
        .args(["table", "CP1252", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 251);
    assert_eq!(entries[0x41]["byte"], 0x41);
    assert_eq!(entries[0x41]["codepoint"], "A");
}

#[test]
fn table_reports_malformed_lines() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("MINI.txt"), MINI).unwrap();
    cmd()
        .args(["table", "MINI", "--tables"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0xc2\t0x0042\tB"))
        .stderr(predicate::str::contains("MALFORMED_LINE"));
}
