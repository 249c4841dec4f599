//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn pacecalc() -> Command {
    Command::cargo_bin("pacecalc").expect("binary not found")
}

#[test]
fn help_flag() {
    pacecalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pace"));
}

#[test]
fn version_flag() {
    pacecalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pacecalc"))
        .stdout(predicate::str::contains("rust "));
}

#[test]
fn time_to_pace_quiet() {
    pacecalc()
        .args(["-m", "time-to-pace", "-d", "10", "-t", "50:00", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5:00"));
}

#[test]
fn time_to_pace_is_the_default_mode() {
    pacecalc()
        .args(["-d", "10", "-t", "50:00", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5:00"));
}

#[test]
fn time_to_pace_labelled_output() {
    pacecalc()
        .args(["-d", "10", "-t", "50:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pace required: 5:00 per km"))
        .stdout(predicate::str::contains("Speed:"));
}

#[test]
fn pace_to_time() {
    pacecalc()
        .args(["-m", "pace-to-time", "-d", "21.1", "-p", "5:30", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1h 56m 3s"));
}

#[test]
fn duration_to_distance() {
    pacecalc()
        .args(["-m", "distance", "-t", "30:00", "-p", "6:00", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5.00"));
}

#[test]
fn distance_shows_race_comparison() {
    pacecalc()
        .args(["-m", "distance", "-t", "1:00:00", "-p", "5:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distance covered: 12.00 km"))
        .stdout(predicate::str::contains("complete"))
        .stdout(predicate::str::contains("-9.1 km"));
}

#[test]
fn mile_unit_flag() {
    pacecalc()
        .args(["-u", "mile", "-d", "6.21", "-t", "1:00:00", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9:40"));
}

#[test]
fn env_var_pacecalc_unit() {
    pacecalc()
        .env("PACECALC_UNIT", "mile")
        .args(["-d", "3.11", "-t", "30:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("per mile"));
}

#[test]
fn verbose_mode() {
    pacecalc()
        .args(["-d", "10", "-t", "50:00", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode: time-to-pace"))
        .stdout(predicate::str::contains("Unit: km"));
}

#[test]
fn json_output() {
    pacecalc()
        .args(["-d", "10", "-t", "50:00", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\":\"pace\""))
        .stdout(predicate::str::contains("\"minutes\":5"));
}

#[test]
fn output_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("result.txt");
    pacecalc()
        .args(["-d", "10", "-t", "50:00", "-q", "-o", path.to_str().unwrap()])
        .assert()
        .success();
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.trim(), "5:00");
}

#[test]
fn json_output_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("result.json");
    pacecalc()
        .args([
            "-d",
            "10",
            "-t",
            "50:00",
            "--json",
            "-o",
            path.to_str().unwrap(),
        ])
        .assert()
        .success();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"type\":\"pace\""));
    assert!(content.contains("\"minutes\":5"));
}

#[test]
fn shell_completion_bash() {
    pacecalc()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pacecalc"));
}

#[test]
fn shell_completion_zsh() {
    pacecalc()
        .args(["--completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pacecalc"));
}

#[test]
fn shell_completion_fish() {
    pacecalc()
        .args(["--completion", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pacecalc"));
}

#[test]
fn zero_distance_produces_no_result() {
    pacecalc()
        .args(["-d", "0", "-t", "50:00"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("do not produce"));
}

#[test]
fn missing_inputs_is_a_config_error() {
    pacecalc()
        .args(["-d", "10"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("missing inputs"));
}

#[test]
fn invalid_mode() {
    pacecalc()
        .args(["-m", "teleport", "-d", "10", "-t", "50:00"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn invalid_unit() {
    pacecalc()
        .args(["-u", "furlong", "-d", "10", "-t", "50:00"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn invalid_time_format() {
    pacecalc()
        .args(["-d", "10", "-t", "1:2:3:4"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("invalid time"));
}

#[test]
fn invalid_pace_format() {
    pacecalc()
        .args(["-m", "pace-to-time", "-d", "10", "-p", "fast"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("invalid pace"));
}

#[test]
fn invalid_distance_value() {
    pacecalc()
        .args(["-d", "ten", "-t", "50:00"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("invalid distance"));
}

#[test]
fn non_finite_distance_is_a_config_error() {
    pacecalc()
        .args(["-d", "inf", "-t", "50:00"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("invalid distance"));
}

#[test]
fn mode_aliases_accepted() {
    pacecalc()
        .args(["-m", "pace", "-d", "10", "-t", "50:00", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5:00"));
}
