//! CLI integration tests using the real botcfg binary

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn botcfg_cmd() -> Command {
    let mut cmd = Command::cargo_bin("botcfg").unwrap();
    cmd.env_remove("BOTCFG_PATTERN").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_output() {
    botcfg_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_output() {
    botcfg_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("botcfg"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_scan_fixture_text() {
    let tree = common::TestTree::new();
    let root = tree.copy_fixture_bots("bots");

    botcfg_cmd()
        .arg("scan")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 bundles"))
        .stdout(predicate::str::contains("Atba"))
        .stdout(predicate::str::contains("Kickoff Only"))
        .stdout(predicate::str::contains("Match Configuration").not());
}

#[test]
fn test_scan_fixture_json() {
    let tree = common::TestTree::new();
    let root = tree.copy_fixture_bots("bots");

    let output = botcfg_cmd()
        .args(["scan", "--format", "json"])
        .arg(&root)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Atba", "Kickoff Only"]);
}

#[test]
fn test_scan_empty_directory() {
    let tree = common::TestTree::new();

    botcfg_cmd()
        .arg("scan")
        .arg(&tree.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No bundles found."));
}

#[test]
fn test_scan_fatal_error_exits_nonzero() {
    let tree = common::TestTree::new();
    tree.write_bot("good.cfg", "Good");
    tree.write_file("broken.cfg", "[Locations]\nname = a\nname = b\n");

    botcfg_cmd()
        .arg("scan")
        .arg(&tree.path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_scan_pattern_from_env() {
    let tree = common::TestTree::new();
    tree.write_bot("bot.ini", "FromIni");
    tree.write_bot("bot.cfg", "FromCfg");

    botcfg_cmd()
        .env("BOTCFG_PATTERN", "*.ini")
        .arg("scan")
        .arg(&tree.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("FromIni"))
        .stdout(predicate::str::contains("FromCfg").not());
}

#[test]
fn test_scan_invalid_pattern() {
    let tree = common::TestTree::new();

    botcfg_cmd()
        .args(["scan", "--pattern", "**/["])
        .arg(&tree.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid glob pattern"));
}

#[test]
fn test_show_valid_file() {
    let tree = common::TestTree::new();
    let file = tree.write_bot("solo.cfg", "Solo");

    botcfg_cmd()
        .args(["show", "--format", "yaml"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("name: Solo"));
}

#[test]
fn test_show_non_bot_config_fails() {
    let tree = common::TestTree::new();
    let file = tree.write_file("match.cfg", "[Match Configuration]\ngame_mode = Soccer\n");

    botcfg_cmd()
        .arg("show")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no section [Locations]"));
}

#[test]
fn test_verbose_logs_skipped_files() {
    let tree = common::TestTree::new();
    tree.write_file("match.cfg", "[Match Configuration]\ngame_mode = Soccer\n");

    botcfg_cmd()
        .args(["scan", "-v"])
        .arg(&tree.path)
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping"));
}

#[test]
fn test_completions_unknown_shell() {
    botcfg_cmd()
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}
