//! End-to-end tests for the utilicss-config binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const VALID_CONFIG: &str = r#"
content = [
    "./templates/**/*.html",
    "./node_modules/flowbite/**/*.js",
]
dark_mode = "class"
plugins = ["flowbite/plugin"]

[theme.extend]
"#;

fn write_config(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, text).expect("Failed to write config file");
    path
}

fn cmd() -> Command {
    Command::cargo_bin("utilicss-config").expect("binary should build")
}

#[test]
fn validates_explicit_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "utilicss.toml", VALID_CONFIG);

    cmd()
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration OK"))
        .stdout(predicate::str::contains("dark mode 'class'"));
}

#[test]
fn emits_json_for_the_generator() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "utilicss.toml", VALID_CONFIG);

    cmd()
        .arg("--config")
        .arg(&path)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dark_mode\": \"class\""))
        .stdout(predicate::str::contains("flowbite/plugin"));
}

#[test]
fn rejects_unknown_plugin() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "utilicss.toml",
        "content = []\nplugins = [\"nonexistent/plugin\"]\n",
    );

    cmd()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown plugin: nonexistent/plugin"));
}

#[test]
fn rejects_bad_dark_mode() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "utilicss.toml", "content = []\ndark_mode = \"toggle\"\n");

    cmd()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("dark_mode must be 'media' or 'class'"));
}

#[test]
fn warns_on_empty_content_but_succeeds() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "utilicss.toml", "content = []\n");

    cmd()
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("content is empty"));
}

#[test]
fn discovers_project_local_config() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "utilicss.toml", VALID_CONFIG);

    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration OK"));
}

#[test]
fn discovers_config_from_environment() {
    let dir = TempDir::new().unwrap();
    let empty_cwd = TempDir::new().unwrap();
    let path = write_config(&dir, "custom.toml", VALID_CONFIG);

    cmd()
        .current_dir(empty_cwd.path())
        .env("UTILICSS_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration OK"));
}

#[test]
fn fails_when_no_config_found() {
    let empty_cwd = TempDir::new().unwrap();

    cmd()
        .current_dir(empty_cwd.path())
        .env("UTILICSS_CONFIG", "/nonexistent/utilicss.toml")
        .env("XDG_CONFIG_HOME", empty_cwd.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No configuration file found"));
}
