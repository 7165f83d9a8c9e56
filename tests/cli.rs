mod common;

use assert_cmd::Command;
use rorscore::{Card, Protocol};
use std::fs;
use tempfile::TempDir;

fn rorscore(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rorscore").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RORSCORE_CONFIG")
        .env("NO_COLOR", "1");
    cmd
}

fn write_protocol(dir: &TempDir, protocol: &Protocol) -> std::path::PathBuf {
    let path = dir.path().join("protocol.json");
    protocol.save(&path).unwrap();
    path
}

#[test]
fn template_prints_blank_protocol() {
    let dir = TempDir::new().unwrap();
    let output = rorscore(&dir).arg("template").output().unwrap();
    assert!(output.status.success());

    let protocol = Protocol::from_json(&String::from_utf8(output.stdout).unwrap()).unwrap();
    assert_eq!(protocol, Protocol::blank());
}

#[test]
fn template_sample_scores_without_edits() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.json");
    rorscore(&dir)
        .args(["template", "--sample", "-o"])
        .arg(&path)
        .assert()
        .success();
    assert_eq!(Protocol::load(&path).unwrap(), Protocol::sample());

    let output = rorscore(&dir)
        .args(["calculate", "-f", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["results"]["R"], 20);
}

#[test]
fn strategies_plain_flag_drops_colors() {
    let dir = TempDir::new().unwrap();
    let path = write_protocol(&dir, &common::rich_protocol());

    let colored = rorscore(&dir)
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .arg("strategies")
        .arg(&path)
        .output()
        .unwrap();
    assert!(colored.status.success());
    assert!(String::from_utf8_lossy(&colored.stdout).contains('\x1b'));

    let plain = rorscore(&dir)
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .args(["strategies", "--plain"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(plain.status.success());
    let stdout = String::from_utf8_lossy(&plain.stdout);
    assert!(!stdout.contains('\x1b'), "stdout: {stdout}");
    assert!(stdout.contains("Key variables"));
}

#[test]
fn strategies_honours_config_plain() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".rorscore.toml"), "[display]\nplain = true\n").unwrap();
    let path = write_protocol(&dir, &common::rich_protocol());

    let output = rorscore(&dir)
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .arg("strategies")
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains('\x1b'));
}

#[test]
fn calculate_emits_json_summary() {
    let dir = TempDir::new().unwrap();
    let path = write_protocol(&dir, &common::rich_protocol());

    let output = rorscore(&dir)
        .args(["calculate", "-f", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["results"]["R"], 20);
    assert_eq!(value["results"]["CopingStyle"], "Ambitent");
    assert!(value["key_strategies"].is_array());
}

#[test]
fn calculate_writes_markdown_file() {
    let dir = TempDir::new().unwrap();
    let path = write_protocol(&dir, &common::rich_protocol());
    let report = dir.path().join("summary.md");

    rorscore(&dir)
        .args(["calculate", "--format", "markdown", "--no-strategies", "-o"])
        .arg(&report)
        .arg(&path)
        .assert()
        .success();

    let markdown = fs::read_to_string(&report).unwrap();
    assert!(markdown.starts_with("# Structural Summary"));
    assert!(!markdown.contains("## Strategy"));
}

#[test]
fn calculate_refuses_protocol_missing_a_card() {
    let dir = TempDir::new().unwrap();
    let responses = common::one_per_card()
        .into_iter()
        .filter(|r| r.card != Some(Card::VII))
        .collect();
    let path = write_protocol(&dir, &Protocol::new(responses));

    let output = rorscore(&dir).arg("calculate").arg(&path).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("VII"), "stderr: {stderr}");
}

#[test]
fn validate_reports_short_protocol_warning() {
    let dir = TempDir::new().unwrap();
    let path = write_protocol(&dir, &Protocol::new(common::one_per_card()));

    let output = rorscore(&dir).arg("validate").arg(&path).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("10 responses"));
    assert!(stdout.contains("fewer than 14"));
}

#[test]
fn validate_fails_on_empty_protocol() {
    let dir = TempDir::new().unwrap();
    let path = write_protocol(&dir, &Protocol::new(Vec::new()));

    rorscore(&dir).arg("validate").arg(&path).assert().failure();
}

#[test]
fn config_file_relaxes_card_requirement() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".rorscore.toml"),
        "[validation]\nrequire_all_cards = false\n",
    )
    .unwrap();
    let responses = common::one_per_card().into_iter().take(9).collect();
    let path = write_protocol(&dir, &Protocol::new(responses));

    let output = rorscore(&dir).arg("validate").arg(&path).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No responses for cards: X."));
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    rorscore(&dir).arg("init").assert().success();
    assert!(dir.path().join(".rorscore.toml").exists());

    rorscore(&dir).arg("init").assert().failure();
    rorscore(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn annotate_rewrites_in_place() {
    let dir = TempDir::new().unwrap();
    let path = write_protocol(&dir, &common::rich_protocol());

    rorscore(&dir).arg("annotate").arg(&path).assert().success();

    let annotated = Protocol::load(&path).unwrap();
    assert!(annotated.responses().iter().all(|r| r.gphr.is_some()));
}
