//! Integration tests for the config commands

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::glen;

#[test]
fn config_path_prints_given_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    glen(&path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(path.display().to_string()));
}

#[test]
fn config_show_prints_defaults_without_file() {
    let dir = TempDir::new().unwrap();
    glen(&dir.path().join("config.toml"))
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("binary = \"len\""))
        .stdout(predicate::str::contains("scroll_step = 1"));
}

#[test]
fn config_init_writes_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/config.toml");

    glen(&path).args(["config", "init"]).assert().success();
    assert!(path.exists());

    glen(&path)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    glen(&path)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn invalid_palette_color_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[palette]\nRed = \"crimson\"\n").unwrap();

    glen(&path)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected #rrggbb"));
}

#[test]
fn completions_generate_script() {
    let dir = TempDir::new().unwrap();
    glen(&dir.path().join("config.toml"))
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("glen"));
}
