use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;

const JIRA_LIST: &str =
    "file://skills/jira-cli/SKILL.md\nUser request: list issues by priority and updated";

fn bundled_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// Command isolated from local config files and the caller's environment
fn skillprobe(home: &tempfile::TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("skillprobe");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("SKILLPROBE_ROOT")
        .arg("--root")
        .arg(bundled_root());
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = cargo_bin_cmd!("skillprobe");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--explain"))
        .stdout(predicate::str::contains("--root"));
}

#[test]
fn test_cli_prompt_argument() {
    let home = tempfile::tempdir().unwrap();
    skillprobe(&home)
        .arg(JIRA_LIST)
        .assert()
        .success()
        .stdout(predicate::str::contains("ORDER BY priority DESC, updated DESC"));
}

#[test]
fn test_cli_prompt_from_stdin() {
    let home = tempfile::tempdir().unwrap();
    skillprobe(&home)
        .write_stdin("file://skills/jira-cli/SKILL.md\nUser request: create a Spike")
        .assert()
        .success()
        .stdout(predicate::str::contains("--type Spike"));
}

#[test]
fn test_cli_prompt_starting_with_fence() {
    let home = tempfile::tempdir().unwrap();
    skillprobe(&home)
        .arg(format!("---\n{JIRA_LIST}"))
        .assert()
        .success()
        .stdout(predicate::str::contains("ORDER BY priority DESC"));
}

#[test]
fn test_cli_json_output() {
    let home = tempfile::tempdir().unwrap();
    let output = skillprobe(&home)
        .args(["--json", JIRA_LIST])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["output"].as_str().unwrap().contains("currentUser()"));
    assert_eq!(
        value["token_usage"],
        serde_json::json!({ "total": 150, "prompt": 100, "completion": 50 })
    );
    assert!(value.get("error").is_none());
}

#[test]
fn test_cli_json_error_exits_zero() {
    let home = tempfile::tempdir().unwrap();
    let output = skillprobe(&home)
        .args(["--json", "User request: no reference"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["output"], "Error: No skill file found in prompt");
    assert_eq!(value["token_usage"]["total"], 0);
    assert_eq!(value["error"], "no_skill_reference");
}

#[test]
fn test_cli_explain_prints_rule_path() {
    let home = tempfile::tempdir().unwrap();
    skillprobe(&home)
        .args(["--explain", JIRA_LIST])
        .assert()
        .success()
        .stderr(predicate::str::contains("jira-cli > list > priority+updated ("))
        .stdout(predicate::str::contains("ORDER BY priority DESC"));
}
