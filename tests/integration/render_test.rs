//! Integration tests for the render command

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixture, glen, glen_with_config_home, help_summary};

#[test]
fn snapshot_cli_help_render() {
    let dir = TempDir::new().unwrap();
    let args = ["render", "--help"];
    let output = glen(&dir.path().join("config.toml"))
        .args(args)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let summary = help_summary(&args, &stdout, output.status.code().unwrap_or(-1));

    insta::assert_snapshot!(summary, @r"
=== glen render --help ===
Exit code: 0

Render captured checker output with its colors.

Reads FILE, or stdin when FILE is omitted or '-', interprets the
embedded color escapes and writes the result in the chosen format.

Examples:
  len --color src/*.c | glen render
  glen render report.len_report --format json

Usage: glen render [OPTIONS] [FILE]
");
}

#[test]
fn render_file_as_plain_text() {
    let dir = TempDir::new().unwrap();
    glen(&dir.path().join("config.toml"))
        .arg("render")
        .arg(fixture("failing.len"))
        .args(["--format", "plain"])
        .assert()
        .success()
        .stdout("src/a.c:3: this line is far too long\nok\n");
}

#[test]
fn render_stdin_defaults_to_plain_when_piped() {
    let dir = TempDir::new().unwrap();
    glen(&dir.path().join("config.toml"))
        .arg("render")
        .write_stdin("\x1b[31mred\x1b[0m text")
        .assert()
        .success()
        .stdout("red text");
}

#[test]
fn render_json_reports_styles() {
    let dir = TempDir::new().unwrap();
    let output = glen(&dir.path().join("config.toml"))
        .args(["render", "-", "--format", "json"])
        .write_stdin("\x1b[1;31mbad")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["text"], "bad");
    assert_eq!(value[0]["tag"], "1;31");
    assert_eq!(value[0]["fg"], "Red");
    assert_eq!(value[0]["bg"], "White");
}

#[test]
fn snapshot_render_json_fixture() {
    let dir = TempDir::new().unwrap();
    let output = glen(&dir.path().join("config.toml"))
        .arg("render")
        .arg(fixture("failing.len"))
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    insta::assert_snapshot!(stdout.trim_end(), @r#"
[
  {
    "text": "src/a.c:3: ",
    "tag": "30",
    "fg": "Black",
    "bg": "White"
  },
  {
    "text": "this line is far too long",
    "tag": "1;31",
    "fg": "Red",
    "bg": "White"
  },
  {
    "text": "\n",
    "tag": "0",
    "fg": "Black",
    "bg": "White"
  },
  {
    "text": "ok",
    "tag": "32",
    "fg": "Green",
    "bg": "White"
  },
  {
    "text": "\n",
    "tag": "0",
    "fg": "Black",
    "bg": "White"
  }
]
"#);
}

#[test]
fn render_ansi_applies_palette_override() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[palette]\nRed = \"#102030\"\n").unwrap();

    glen(&config)
        .args(["render", "--format", "ansi"])
        .write_stdin("\x1b[31mx")
        .assert()
        .success()
        .stdout(predicate::str::contains("38;2;16;32;48"));
}

#[test]
fn render_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    glen(&dir.path().join("config.toml"))
        .args(["render", "/no/such/capture"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn render_without_config_file_uses_defaults() {
    let home = TempDir::new().unwrap();
    glen_with_config_home(home.path())
        .args(["render", "--format", "plain"])
        .write_stdin("\x1b[32mok\x1b[0m\n")
        .assert()
        .success()
        .stdout("ok\n");
}

#[test]
fn render_reads_config_from_default_location() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("glen");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[palette]\nGreen = \"#010203\"\n",
    )
    .unwrap();

    glen_with_config_home(home.path())
        .args(["render", "--format", "ansi"])
        .write_stdin("\x1b[32mok")
        .assert()
        .success()
        .stdout(predicate::str::contains("38;2;1;2;3"));
}
