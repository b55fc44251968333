//! Integration tests for the `calculate` and `ranges` commands.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .canonicalize()
        .expect("fixture directory present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("loadicator-cli");
    cmd.env("RUST_LOG", "error")
        .env_remove("LOADICATOR_DATA_DIR")
        .arg("--no-color");
    cmd
}

fn with_fixtures() -> Command {
    let mut cmd = cli();
    cmd.arg("--data-dir").arg(fixtures_dir());
    cmd
}

#[test]
fn calculate_prints_non_compliant_verdict_for_high_kg() {
    with_fixtures()
        .args(["calculate", "--draft", "10", "--kg", "8.5"])
        .assert()
        .success()
        .stdout(contains("STABILITY CALCULATION REPORT"))
        .stdout(contains("Displacement:           50,000 t"))
        .stdout(contains("GM:                     0.500 m"))
        .stdout(contains(" t·m/cm\n"))
        .stdout(contains(" t/cm\n"))
        .stdout(contains("GZ at 30° ≥ 0.2 m"))
        .stdout(contains("OVERALL:  NON-COMPLIANT"));
}

#[test]
fn calculate_prints_compliant_verdict_and_omitted_angles() {
    with_fixtures()
        .args(["calculate", "--draft", "10", "--kg", "6"])
        .assert()
        .success()
        .stdout(contains("OVERALL:  COMPLIANT"))
        .stdout(contains("Omitted (outside cross-curve data): 80°, 85°, 90°"));
}

#[test]
fn calculate_json_is_valid() {
    let output = with_fixtures()
        .args(["--format", "json", "calculate", "--draft", "10", "--kg", "8.5"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(report["input"]["kg"], 8.5);
    assert_eq!(report["compliance"]["pass"], false);
    assert_eq!(report["compliance"]["criteria"].as_array().unwrap().len(), 6);
}

#[test]
fn out_of_range_draft_fails_with_valid_range() {
    with_fixtures()
        .args(["calculate", "--draft", "14.5", "--kg", "6"])
        .assert()
        .failure()
        .stderr(contains("draft 14.500 m is outside valid range [4.000 m, 13.000 m]"));
}

#[test]
fn strict_angles_reject_grid_beyond_cross_curves() {
    with_fixtures()
        .args(["calculate", "--draft", "10", "--kg", "6", "--strict-angles"])
        .assert()
        .failure()
        .stderr(contains("heel angle 80.00°"));
}

#[test]
fn angle_step_controls_curve_resolution() {
    with_fixtures()
        .args(["calculate", "--draft", "10", "--kg", "6", "--angle-step", "15"])
        .assert()
        .success()
        .stdout(contains("45.0"))
        .stdout(contains("Omitted (outside cross-curve data): 90°"));
}

#[test]
fn angle_step_too_fine_is_rejected() {
    with_fixtures()
        .args(["calculate", "--draft", "10", "--kg", "6", "--angle-step", "1e-9"])
        .assert()
        .failure()
        .stderr(contains("invalid calculation settings"))
        .stderr(contains("more than 1800 grid intervals"));
}

#[test]
fn no_color_environment_disables_escape_codes() {
    for (key, value) in [("NO_COLOR", "1"), ("TERM", "dumb")] {
        let mut cmd = cargo_bin_cmd!("loadicator-cli");
        cmd.env("RUST_LOG", "error")
            .env_remove("LOADICATOR_DATA_DIR")
            .env_remove("NO_COLOR")
            .env("TERM", "xterm-256color")
            .env(key, value)
            .arg("--data-dir")
            .arg(fixtures_dir())
            .args(["calculate", "--draft", "10", "--kg", "6"])
            .assert()
            .success()
            .stdout(contains("OVERALL:  COMPLIANT"))
            .stdout(contains("\x1b[").not());
    }
}

#[test]
fn non_positive_kg_is_rejected() {
    with_fixtures()
        .args(["calculate", "--draft", "10", "--kg=-1"])
        .assert()
        .failure()
        .stderr(contains("KG must be a positive number"));
}

#[test]
fn ranges_lists_limits() {
    with_fixtures()
        .arg("ranges")
        .assert()
        .success()
        .stdout(contains("4.000 - 13.000 m"))
        .stdout(contains("Maximum heel angle:         75°"));
}

#[test]
fn data_dir_from_environment_and_file_overrides() {
    let temp = TempDir::new().expect("create temp dir");
    fs::copy(
        fixtures_dir().join("hydrostatics.csv"),
        temp.path().join("hydrostatics.csv"),
    )
    .expect("copy hydrostatics");
    fs::copy(
        fixtures_dir().join("kn_curves.csv"),
        temp.path().join("vessel_kn.csv"),
    )
    .expect("copy kn curves");

    cli()
        .env("LOADICATOR_DATA_DIR", temp.path())
        .arg("--kn-curves")
        .arg(temp.path().join("vessel_kn.csv"))
        .args(["--format", "json", "ranges"])
        .assert()
        .success()
        .stdout(contains("\"max_heel_angle\": 75.0"));
}

#[test]
fn missing_data_files_fail_with_context() {
    let temp = TempDir::new().expect("create temp dir");
    cli()
        .arg("--data-dir")
        .arg(temp.path())
        .arg("ranges")
        .assert()
        .failure()
        .stderr(contains("failed to load vessel data"));
}
