//! Integration tests for the run command
//!
//! A small shell script stands in for len so the tests do not depend on it
//! being installed.

use std::path::{Path, PathBuf};

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{glen, help_summary};

/// Write an executable fake checker that echoes its arguments in color and
/// exits with `code`.
#[cfg(unix)]
fn fake_len(dir: &Path, code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-len");
    let script = format!(
        "#!/bin/sh\nprintf '\\033[1;31m%s\\033[0m\\n' \"$*\"\necho warning >&2\nexit {}\n",
        code
    );
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn snapshot_cli_help_run() {
    let dir = TempDir::new().unwrap();
    let args = ["run", "--help"];
    let output = glen(&dir.path().join("config.toml"))
        .args(args)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let summary = help_summary(&args, &stdout, output.status.code().unwrap_or(-1));

    insta::assert_snapshot!(summary, @r"
=== glen run --help ===
Exit code: 0

Run len over files and show the colored result.

Arguments after '--' are passed to len verbatim, after the
default_args from the config file. The exit code mirrors len's.

Examples:
  glen run src/main.c -- --max 80 --color
  glen run --save --header --out reports src/*.c

Usage: glen run [OPTIONS] <FILES>... [-- <LEN_ARGS>...]
");
}

#[test]
fn run_requires_files() {
    let dir = TempDir::new().unwrap();
    glen(&dir.path().join("config.toml"))
        .arg("run")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<FILES>"));
}

#[test]
fn run_with_missing_binary_fails() {
    let dir = TempDir::new().unwrap();
    glen(&dir.path().join("config.toml"))
        .args(["run", "--binary", "glen-no-such-checker", "a.c"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[cfg(unix)]
#[test]
fn run_passes_args_and_mirrors_exit_code() {
    let dir = TempDir::new().unwrap();
    let len = fake_len(dir.path(), 1);

    glen(&dir.path().join("config.toml"))
        .arg("run")
        .arg("--binary")
        .arg(&len)
        .args(["a.c", "--", "--max", "80"])
        .assert()
        .code(1)
        .stdout("--max 80 a.c\nwarning\n")
        .stderr(predicate::str::contains("(1) Check failed!"));
}

#[cfg(unix)]
#[test]
fn run_success_prints_passed() {
    let dir = TempDir::new().unwrap();
    let len = fake_len(dir.path(), 0);

    glen(&dir.path().join("config.toml"))
        .arg("run")
        .arg("--binary")
        .arg(&len)
        .arg("a.c")
        .assert()
        .success()
        .stderr(predicate::str::contains("Check passed!"));
}

#[cfg(unix)]
#[test]
fn run_prepends_config_default_args() {
    let dir = TempDir::new().unwrap();
    let len = fake_len(dir.path(), 0);
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        format!(
            "[run]\nbinary = \"{}\"\ndefault_args = [\"--color\"]\n",
            len.display()
        ),
    )
    .unwrap();

    glen(&config)
        .args(["run", "a.c", "--", "-p"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("--color -p a.c\n"));
}

#[cfg(unix)]
#[test]
fn run_saves_report_with_header() {
    let dir = TempDir::new().unwrap();
    let len = fake_len(dir.path(), 0);
    let out = dir.path().join("reports");

    glen(&dir.path().join("config.toml"))
        .arg("run")
        .arg("--binary")
        .arg(&len)
        .args(["--save", "--header", "--out"])
        .arg(&out)
        .args(["src/one.c", "two.c", "--", "--max", "72"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Report saved to"));

    let report = std::fs::read_to_string(out.join("one.c-two.c.len_report")).unwrap();
    assert!(report.starts_with("Command: \n"));
    assert!(report.contains("\t--max 72\n"));
    assert!(report.ends_with("\x1b[1;31m--max 72 src/one.c two.c\x1b[0m\nwarning\n"));
}
