//! CLI Integration Tests
//!
//! Tests the command-line interface end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get the binary to test.
fn lexiscomply() -> Command {
    Command::cargo_bin("lexiscomply").unwrap()
}

// ============================================================================
// Help & Version Tests
// ============================================================================

#[test]
fn test_help_flag() {
    lexiscomply()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compliance document workspace"));
}

#[test]
fn test_version_flag() {
    lexiscomply()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Catalog Command Tests
// ============================================================================

#[test]
fn test_catalog_templates() {
    lexiscomply()
        .args(["catalog", "templates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AML & KYC Policy"))
        .stdout(predicate::str::contains("GDPR Data Processing Agreement"));
}

#[test]
fn test_catalog_rules_filtered_by_industry() {
    lexiscomply()
        .args(["catalog", "rules", "--industry", "finance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FIN-001"))
        .stdout(predicate::str::contains("Healthcare").not());
}

#[test]
fn test_catalog_industries() {
    lexiscomply()
        .args(["catalog", "industries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("manufacturing"));
}

#[test]
fn test_catalog_dashboard_is_json() {
    lexiscomply()
        .args(["catalog", "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"compliance_score\": 88"));
}

// ============================================================================
// Demo Command Tests
// ============================================================================

#[test]
fn test_demo_fast_runs_the_full_journey() {
    lexiscomply()
        .args(["demo", "--fast"])
        .assert()
        .success()
        .stdout(predicate::str::contains("compliance score: 72"))
        .stdout(predicate::str::contains("GDPR DATA PROCESSING AGREEMENT"))
        .stdout(predicate::str::contains("queued for PDF export"));
}

#[test]
fn test_demo_with_bad_credentials_fails() {
    lexiscomply()
        .args(["demo", "--fast", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid email or password"));
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn test_config_shows_defaults() {
    lexiscomply()
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("analysis_delay_ms"));
}

#[test]
fn test_config_path() {
    lexiscomply().args(["config", "--path"]).assert().success();
}
