//! Integration tests for the treebench CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

#[test]
fn test_evaluate_text_output() {
    let mut cmd = Command::cargo_bin("treebench").unwrap();
    cmd.arg("evaluate")
        .arg("-g")
        .arg(fixture_path("gold.txt"))
        .arg("-p")
        .arg(fixture_path("berkeley.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Dependency scores: berkeley"))
        .stdout(predicate::str::contains("The dog ran."))
        .stdout(predicate::str::contains("POS/UPOS summary"))
        .stdout(predicate::str::contains("Tag mismatches"));
}

#[test]
fn test_evaluate_json_output() {
    let mut cmd = Command::cargo_bin("treebench").unwrap();
    cmd.arg("evaluate")
        .arg("-g")
        .arg(fixture_path("gold.txt"))
        .arg("-p")
        .arg(format!("berkeley={}", fixture_path("berkeley.txt")))
        .arg("-f")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert!(value["gold"].as_str().unwrap().contains("gold.txt"));
    assert_eq!(value["dependencies"][0]["parser"], "berkeley");
    // Sentence 1: one of four edges has a flipped label
    assert_eq!(value["dependencies"][0]["summary"]["average_uas"], 1.0);
    assert_eq!(value["dependencies"][0]["summary"]["average_las"], 0.875);
    assert_eq!(value["tagging"]["summaries"][0]["parser"], "berkeley");
}

#[test]
fn test_evaluate_dependencies_only() {
    let mut cmd = Command::cargo_bin("treebench").unwrap();
    cmd.arg("evaluate")
        .arg("-g")
        .arg(fixture_path("gold.txt"))
        .arg("-p")
        .arg(fixture_path("berkeley.txt"))
        .arg("-m")
        .arg("dependencies");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Dependency scores"))
        .stdout(predicate::str::contains("POS/UPOS summary").not());
}

#[test]
fn test_evaluate_strict_alignment_mismatch_fails() {
    let mut cmd = Command::cargo_bin("treebench").unwrap();
    cmd.arg("evaluate")
        .arg("-g")
        .arg(fixture_path("gold.txt"))
        .arg("-p")
        .arg(fixture_path("malformed.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("2 sentences"));
}

#[test]
fn test_evaluate_lenient_alignment_with_malformed_record_fails() {
    // Lenient alignment pairs the single malformed record, which is fatal
    // at scoring time
    let mut cmd = Command::cargo_bin("treebench").unwrap();
    cmd.arg("evaluate")
        .arg("-g")
        .arg(fixture_path("gold.txt"))
        .arg("-p")
        .arg(fixture_path("malformed.txt"))
        .arg("-a")
        .arg("lenient");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("malformed"));
}

#[test]
fn test_evaluate_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("report.txt");

    let mut cmd = Command::cargo_bin("treebench").unwrap();
    cmd.arg("evaluate")
        .arg("-g")
        .arg(fixture_path("gold.txt"))
        .arg("-p")
        .arg(fixture_path("berkeley.txt"))
        .arg("-o")
        .arg(&output_file);

    cmd.assert().success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("Summary over 2 sentences"));
}

#[test]
fn test_extract_trees() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("trees.txt");

    let mut cmd = Command::cargo_bin("treebench").unwrap();
    cmd.arg("extract-trees")
        .arg("-i")
        .arg(fixture_path("berkeley.txt"))
        .arg("-o")
        .arg(&output_file);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Saved 2 constituency parses"));

    let content = fs::read_to_string(&output_file).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    // Outer (TOP ...) wrapper is stripped
    assert_eq!(
        lines[0],
        "(S (NP (DT The) (NN dog)) (VP (VBD ran)) (. .))"
    );
    assert!(!content.contains("TOP"));
}

#[test]
fn test_evaluate_verbose_renders_library_diagnostics() {
    let mut cmd = Command::cargo_bin("treebench").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("evaluate")
        .arg("-g")
        .arg(fixture_path("gold.txt"))
        .arg("-p")
        .arg(fixture_path("berkeley.txt"))
        .arg("-v");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("parsed 2 records"));
}

#[test]
fn test_extract_trees_warns_about_malformed_records_on_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("trees.txt");

    let mut cmd = Command::cargo_bin("treebench").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("extract-trees")
        .arg("-i")
        .arg(fixture_path("malformed.txt"))
        .arg("-o")
        .arg(&output_file);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("skipping malformed record"));
}

#[test]
fn test_validate_clean_file() {
    let mut cmd = Command::cargo_bin("treebench").unwrap();
    cmd.arg("validate").arg("-i").arg(fixture_path("gold.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2 well-formed, 0 malformed"));
}

#[test]
fn test_validate_malformed_file() {
    let mut cmd = Command::cargo_bin("treebench").unwrap();
    cmd.arg("validate")
        .arg("-i")
        .arg(fixture_path("malformed.txt"));

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Malformed blocks"));
}

#[test]
fn test_generate_config_then_use_it() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("treebench.toml");

    let mut cmd = Command::cargo_bin("treebench").unwrap();
    cmd.arg("generate-config").arg("-o").arg(&config_file);
    cmd.assert().success();

    let mut cmd = Command::cargo_bin("treebench").unwrap();
    cmd.arg("evaluate")
        .arg("-g")
        .arg(fixture_path("gold.txt"))
        .arg("-p")
        .arg(fixture_path("berkeley.txt"))
        .arg("-c")
        .arg(&config_file);
    cmd.assert().success();
}

#[test]
fn test_missing_gold_file() {
    let mut cmd = Command::cargo_bin("treebench").unwrap();
    cmd.arg("evaluate")
        .arg("-g")
        .arg("/nonexistent/gold.txt")
        .arg("-p")
        .arg(fixture_path("berkeley.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}
