//! Integration tests for the Folio CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE_MARKUP: &str = "\
The Real Barenziah
Anonymous
%cBook One

Barenziah was born in Mournhold, the daughter of a minor noble.
%p
%sShe grew up quickly.
";

/// Create a markup source file for testing
fn create_test_markup(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

fn folio() -> Command {
    Command::cargo_bin("folio").unwrap()
}

#[test]
fn test_help() {
    folio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_version() {
    folio()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn test_convert_help() {
    folio()
        .args(["convert", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert a book"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--from"))
        .stdout(predicate::str::contains("--to"));
}

#[test]
fn test_convert_missing_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_markup(&temp_dir, "book.md", SAMPLE_MARKUP);

    folio()
        .args(["convert", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn test_convert_unknown_format() {
    folio()
        .args(["convert", "in.md", "--output", "out.txt", "--to", "epub"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format"));
}

#[test]
fn test_convert_nonexistent_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("BOOK0001.TXT");

    folio()
        .args([
            "convert",
            "/nonexistent/book.md",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input file"));
}

#[test]
fn test_convert_markup_to_binary_and_back() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_markup(&temp_dir, "book.md", SAMPLE_MARKUP);
    let binary = temp_dir.path().join("BOOK0042.TXT");
    let json = temp_dir.path().join("book.json");

    folio()
        .args([
            "convert",
            input.to_str().unwrap(),
            "--output",
            binary.to_str().unwrap(),
        ])
        .assert()
        .success();

    let data = fs::read(&binary).unwrap();
    assert_eq!(&data[..18], b"The Real Barenziah");
    assert_eq!(u16::from_le_bytes([data[234], data[235]]), 2);

    folio()
        .args([
            "convert",
            binary.to_str().unwrap(),
            "--output",
            json.to_str().unwrap(),
        ])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(value["author"], "Anonymous");
    assert_eq!(value["pages"][0][0]["align"], "center");
    assert_eq!(value["pages"][1][0]["font"], "script");
}

#[test]
fn test_convert_to_stdout_prints_listing() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_markup(&temp_dir, "book.md", SAMPLE_MARKUP);

    folio()
        .args(["convert", input.to_str().unwrap(), "--output", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Page 2 ==="))
        .stdout(predicate::str::contains(".S         |She grew up quickly."));
}

#[test]
fn test_convert_from_stdin() {
    folio()
        .args(["convert", "-", "--from", "markup", "--output", "-", "--to", "json"])
        .write_stdin(SAMPLE_MARKUP)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"The Real Barenziah\""));
}

#[test]
fn test_convert_malformed_markup() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_markup(&temp_dir, "bad.md", "Title\nAuthor\n%x oops\n");

    folio()
        .args(["convert", input.to_str().unwrap(), "--output", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_info_markup() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_markup(&temp_dir, "book.md", SAMPLE_MARKUP);

    folio()
        .args(["info", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Real Barenziah"))
        .stdout(predicate::str::contains("Pages:    2"));
}

#[test]
fn test_info_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_markup(&temp_dir, "book.md", SAMPLE_MARKUP);

    let output = folio()
        .args(["info", "--json", input.to_str().unwrap()])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("Output should be valid JSON");
    assert_eq!(json["title"], "The Real Barenziah");
    assert_eq!(json["unknowns"], serde_json::json!([1, 1234, 2345]));
    assert_eq!(json["script_lines"], 1);
}

#[test]
fn test_validate_truncated_binary() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("BOOK0000.TXT");
    fs::write(&input, vec![0u8; 100]).unwrap();

    folio()
        .args(["validate", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Truncated input"));
}

#[test]
fn test_validate_binary() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_markup(&temp_dir, "book.md", SAMPLE_MARKUP);
    let binary = temp_dir.path().join("BOOK0001.TXT");

    folio()
        .args([
            "convert",
            input.to_str().unwrap(),
            "--output",
            binary.to_str().unwrap(),
        ])
        .assert()
        .success();

    folio()
        .args(["validate", binary.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid binary book"));
}

#[test]
fn test_validate_title_too_long() {
    let temp_dir = TempDir::new().unwrap();
    let source = format!("{}\nAuthor\nText\n", "T".repeat(70));
    let input = create_test_markup(&temp_dir, "long.md", &source);

    folio()
        .args(["validate", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title"));
}

#[test]
fn test_verbose_flag() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_markup(&temp_dir, "book.md", SAMPLE_MARKUP);

    folio()
        .args(["--verbose", "info", input.to_str().unwrap()])
        .assert()
        .success();
}
