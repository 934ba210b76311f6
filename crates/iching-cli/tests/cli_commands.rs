//! Integration tests for the iching CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn iching() -> Command {
    Command::cargo_bin("iching").unwrap()
}

const REFERENCE_CAST: &str = "\
Seed: 9800
Timestamp: 0

Line 6 (6): ——  —— X
Line 5 (8): ——  ——
Line 4 (9): —————— O
Line 3 (8): ——  ——
Line 2 (8): ——  ——
Line 1 (8): ——  ——

Primary: 16 雷地豫 (Enthusiasm)
Relating: 23 山地剥 (Splitting Apart)
";

// ---------------------------------------------------------------------------
// cast
// ---------------------------------------------------------------------------

#[test]
fn cast_reference_readings() {
    iching()
        .args(["cast", "--azimuth", "0", "--accel", "9.8", "--timestamp", "0"])
        .assert()
        .success()
        .stdout(REFERENCE_CAST);
}

#[test]
fn cast_is_deterministic() {
    let args = ["cast", "-a", "123.45", "-g", "9.81", "-t", "1700000000000"];
    let first = iching().args(args).output().unwrap();
    let second = iching().args(args).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(
        String::from_utf8(first.stdout)
            .unwrap()
            .starts_with("Seed: 1700000022155\n")
    );
}

#[test]
fn cast_accepts_negative_azimuth() {
    iching()
        .args(["cast", "-a", "-10", "-t", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Timestamp: 0"));
}

#[test]
fn cast_from_seed() {
    iching()
        .args(["cast", "--seed", "0", "-t", "5", "--no-names"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Seed: 0\nTimestamp: 5\n")
                .and(predicate::str::contains("Line 4 (7): ——————"))
                .and(predicate::str::contains("Primary").not()),
        );
}

#[test]
fn cast_defaults_timestamp_to_now() {
    iching()
        .args(["cast"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Timestamp: ").and(predicate::str::contains("Line 1")));
}

#[test]
fn cast_ascii_style() {
    iching()
        .args(["cast", "-a", "0", "-g", "9.8", "-t", "0", "--style", "ascii"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Line 4 (9): ------ o")
                .and(predicate::str::contains("Line 6 (6): --  -- x")),
        );
}

#[test]
fn cast_rejects_unknown_style() {
    iching()
        .args(["cast", "--style", "braille"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown glyph style"));
}

#[test]
fn cast_json() {
    let output = iching()
        .args(["cast", "-a", "0", "-g", "9.8", "-t", "0", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["seed"], 9800);
    assert_eq!(json["lines"], serde_json::json!([8, 8, 8, 9, 8, 6]));
    assert_eq!(json["primary"]["english"], "Enthusiasm");
}

#[test]
fn cast_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cast.txt");
    iching()
        .args(["cast", "-a", "0", "-g", "9.8", "-t", "0", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cast written to"));

    assert_eq!(fs::read_to_string(&path).unwrap(), REFERENCE_CAST);
}

#[test]
fn cast_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("cast.txt");
    iching()
        .args(["cast", "-t", "0", "-o"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot write to"));
}

// ---------------------------------------------------------------------------
// lookup
// ---------------------------------------------------------------------------

#[test]
fn lookup_shows_names_and_trigrams() {
    iching()
        .args(["lookup", "11"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("地天泰")
                .and(predicate::str::contains("Peace"))
                .and(predicate::str::contains("Earth"))
                .and(predicate::str::contains("Heaven")),
        );
}

#[test]
fn lookup_ascii_style() {
    iching()
        .args(["lookup", "11", "--style", "ascii"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Line 6: --  --")
                .and(predicate::str::contains("Line 1: ------"))
                .and(predicate::str::contains("——").not()),
        );
}

#[test]
fn lookup_rejects_unknown_style() {
    iching()
        .args(["lookup", "1", "--style", "braille"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown glyph style"));
}

#[test]
fn lookup_out_of_range() {
    iching()
        .args(["lookup", "65"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 64"));
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

#[test]
fn stats_prints_frequency_table() {
    iching()
        .args(["stats", "-n", "500"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Line Frequencies")
                .and(predicate::str::contains("old yin"))
                .and(predicate::str::contains("0.3750")),
        );
}

#[test]
fn stats_rejects_zero_samples() {
    iching()
        .args(["stats", "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}
