/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

const MANIFEST: &str = "tests/fixtures/packages.json";
const PACMAN_DB: &str = "tests/fixtures/pacman";

fn pacfree() -> Command {
    let mut cmd = cargo_bin_cmd!("pacfree");
    cmd.env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .env_remove("RUST_LOG");
    cmd
}

fn json_output(args: &[&str]) -> serde_json::Value {
    let output = pacfree()
        .args(args)
        .args(["--report", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

mod exit_code_tests {
    use super::*;

    #[test]
    fn test_exit_code_version() {
        pacfree().arg("--version").assert().code(0);
    }

    /// Conflicting view flags are a usage error
    #[test]
    fn test_exit_code_conflicting_views() {
        pacfree()
            .args(["--from-json", MANIFEST, "-a", "-l", "MIT"])
            .assert()
            .code(2);
    }

    #[test]
    fn test_exit_code_missing_database() {
        pacfree()
            .args(["--dbpath", "/nonexistent/pacfree/db"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to open package database"));
    }

    #[test]
    fn test_exit_code_invalid_manifest() {
        pacfree()
            .args(["--from-json", "Cargo.toml"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to load package manifest"));
    }
}

#[test]
fn test_default_ranked_view() {
    pacfree()
        .args(["--from-json", MANIFEST])
        .assert()
        .success()
        .stdout(predicate::str::contains("MIT"))
        .stdout(predicate::str::contains("50.00%"))
        .stdout(predicate::str::contains("other"));
}

#[test]
fn test_all_ranked_json() {
    let json = json_output(&["--from-json", MANIFEST, "--all"]);

    assert_eq!(json["total"], 4);
    assert!(json.get("other").is_none());

    let names: Vec<&str> = json["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["MIT", "GPL2", "custom"]);
    assert_eq!(json["entries"][0]["percentage"], 50.0);
}

#[test]
fn test_limited_ranked_json() {
    let json = json_output(&["--from-json", MANIFEST, "-n", "1"]);

    assert_eq!(json["entries"].as_array().unwrap().len(), 1);
    assert_eq!(json["other"]["count"], 2);
    assert_eq!(json["other"]["percentage"], 50.0);
}

#[test]
fn test_summary_json() {
    let json = json_output(&["--from-json", MANIFEST, "--summary"]);

    assert_eq!(json["total"], 4);
    assert_eq!(json["packages"], 4);
    assert_eq!(json["unlicensed"], 1);
    assert_eq!(json["open_source_pct"], 75.0);
    assert_eq!(json["custom_pct"], 25.0);
    assert_eq!(json["other_pct"], 0.0);
}

#[test]
fn test_summary_terminal() {
    pacfree()
        .args(["--from-json", MANIFEST, "-s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("75.00%"))
        .stdout(predicate::str::contains("25.00%"));
}

#[test]
fn test_license_found() {
    pacfree()
        .args(["--from-json", MANIFEST, "-l", "MIT"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Found 2 packages with license \"MIT\"",
        ))
        .stdout(predicate::str::contains("foo"))
        .stdout(predicate::str::contains("bar"));
}

#[test]
fn test_license_not_found_is_not_an_error() {
    pacfree()
        .args(["--from-json", MANIFEST, "-l", "BSD"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No packages found with license \"BSD\"",
        ));

    let json = json_output(&["--from-json", MANIFEST, "-l", "BSD"]);
    assert_eq!(json["status"], "not_found");
    assert_eq!(json["license"], "BSD");
}

#[test]
fn test_quiet_summary_line() {
    pacfree()
        .args(["--from-json", MANIFEST, "-s", "-q"])
        .assert()
        .success()
        .stdout("Open source: 75.00%  Custom: 25.00%  Other: 00.00%\n");
}

#[test]
fn test_pacman_database_unique_names() {
    let json = json_output(&["--dbpath", PACMAN_DB, "-u"]);

    assert_eq!(json["count"], 5);
    let names: Vec<&str> = json["names"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n.as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["GPL", "LGPL", "GPL-3.0-or-later", "custom", "Zlib"]
    );
}

#[test]
fn test_pacman_database_lookup() {
    let json = json_output(&["--dbpath", PACMAN_DB, "-l", "GPL"]);

    assert_eq!(json["status"], "found");
    assert_eq!(json["count"], 2);
    assert_eq!(json["packages"], serde_json::json!(["acl", "filesystem"]));
}

#[test]
fn test_config_extends_classifier() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        "[classifier]\nextra_open_source = [\"custom\", \"Zlib\"]\n",
    )
    .unwrap();

    let json = json_output(&[
        "--from-json",
        MANIFEST,
        "-s",
        "--config",
        config.to_str().unwrap(),
    ]);
    // custom keeps its own bucket even when listed as open source
    assert_eq!(json["open_source_count"], 3);
    assert_eq!(json["custom_count"], 1);
    assert_eq!(json["other_count"], 0);
}
