use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

/// Command with HOME and the config dir pointed at an empty temp dir.
fn launchpad(home: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("launchpad");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

/// Projects root with a React project, a Godot project and a vendored decoy.
fn sample_root() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("web/start-session.sh"));
    touch(&root.join("web/src/App.jsx"));
    touch(&root.join("web/index.html"));
    touch(&root.join("web/style.css"));
    touch(&root.join("games/space/start-session.sh"));
    touch(&root.join("games/space/player.gd"));
    touch(&root.join("games/space/project.godot"));
    touch(&root.join("web/node_modules/x/start-session.sh"));
    dir
}

#[test]
fn list_prints_one_line_per_project() {
    let home = tempdir().unwrap();
    let root = sample_root();
    launchpad(&home)
        .args(["list", "--no-color", "--root"])
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("/games/space: "))
        .stdout(predicate::str::contains("/web: "))
        .stdout(predicate::str::contains("node_modules").not());
}

#[test]
fn list_json_reports_compressed_icons() {
    let home = tempdir().unwrap();
    let root = sample_root();
    let output = launchpad(&home)
        .args(["list", "--json", "--root"])
        .arg(root.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let body: serde_json::Value = serde_json::from_slice(&output).expect("list json");
    let projects = body.as_array().expect("array");
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0]["label"], "/games/space");
    assert_eq!(projects[0]["icons"], serde_json::json!(["gdscript", "shell"]));
    assert_eq!(projects[1]["label"], "/web");
    assert_eq!(projects[1]["icons"], serde_json::json!(["react", "shell"]));
}

#[test]
fn list_with_no_projects_says_so() {
    let home = tempdir().unwrap();
    let root = tempdir().unwrap();
    launchpad(&home)
        .arg("list")
        .arg("--root")
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Projects: (none)"));
}

#[test]
fn list_fails_for_missing_root() {
    let home = tempdir().unwrap();
    launchpad(&home)
        .args(["list", "--root", "/definitely/not/here"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to discover projects"));
}

#[test]
fn custom_launcher_script_from_config_file() {
    let home = tempdir().unwrap();
    let root = tempdir().unwrap();
    touch(&root.path().join("tool/dev.sh"));
    touch(&root.path().join("tool/main.go"));
    let config = home.path().join("launchpad.json");
    fs::write(
        &config,
        serde_json::json!({ "root": root.path(), "launcher_script": "dev.sh" }).to_string(),
    )
    .unwrap();

    launchpad(&home)
        .arg("list")
        .arg("--json")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"go\""))
        .stdout(predicate::str::contains("/tool"));
}

#[test]
fn icons_prints_plain_glyph_line() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    touch(&dir.path().join("a.rs"));
    touch(&dir.path().join("b.rs"));
    touch(&dir.path().join("LICENSE"));

    launchpad(&home)
        .arg("icons")
        .arg(dir.path())
        .arg("--no-color")
        .assert()
        .success()
        .stdout("\u{e7a8} \n");
}

#[test]
fn icons_json_lists_names() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    touch(&dir.path().join("app.tsx"));
    touch(&dir.path().join("old.jsx"));
    touch(&dir.path().join("index.html"));

    let output =
        launchpad(&home).arg("icons").arg(dir.path()).arg("--json").output().expect("run icons");
    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["files"], 3);
    assert_eq!(body["icons"], serde_json::json!(["react-ts"]));
}

#[test]
fn icons_fails_for_missing_dir() {
    let home = tempdir().unwrap();
    launchpad(&home)
        .args(["icons", "/definitely/not/here"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory does not exist"));
}

#[test]
fn classify_shows_tiers() {
    let home = tempdir().unwrap();
    launchpad(&home)
        .args(["classify", "Dockerfile", "main.rs", "gnome", "mystery"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dockerfile: "))
        .stdout(predicate::str::contains("tier=file_name (0)"))
        .stdout(predicate::str::contains("tier=extension (5)"))
        .stdout(predicate::str::contains("tier=desktop_environment (2)"))
        .stdout(predicate::str::contains("mystery: ").and(predicate::str::contains("(ignored)")));
}

#[test]
fn classify_requires_a_name() {
    let home = tempdir().unwrap();
    launchpad(&home).arg("classify").assert().failure();
}

#[test]
fn config_json_shows_defaults_and_resolved_root() {
    let home = tempdir().unwrap();
    let output = launchpad(&home)
        .args(["config", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let body: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(body["launcher_script"], "start-session.sh");
    assert_eq!(body["shell"], "bash");
    assert!(body["source"].is_null());
    assert!(body["resolved_root"].as_str().unwrap().ends_with("Projects"));
}

#[test]
fn pick_without_projects_exits_cleanly() {
    let home = tempdir().unwrap();
    let root = tempdir().unwrap();
    launchpad(&home)
        .arg("--root")
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects with a start-session.sh found."));
}

#[test]
fn pick_requires_a_terminal() {
    let home = tempdir().unwrap();
    let root = sample_root();
    launchpad(&home)
        .arg("pick")
        .arg("--root")
        .arg(root.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
