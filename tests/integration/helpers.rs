//! Shared helpers for integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Directory holding test fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Path to a named fixture.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// glen command with colors disabled and an isolated config file.
pub fn glen(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("glen").expect("glen binary should build");
    cmd.env("NO_COLOR", "1")
        .env_remove("GLEN_LOG")
        .arg("--config")
        .arg(config);
    cmd
}

/// glen command without `--config`, resolving its config directory under
/// `config_home`.
pub fn glen_with_config_home(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("glen").expect("glen binary should build");
    cmd.env("NO_COLOR", "1")
        .env_remove("GLEN_LOG")
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home);
    cmd
}

/// Help text up to the argument list, with a header naming the command.
pub fn help_summary(args: &[&str], stdout: &str, exit_code: i32) -> String {
    let head = stdout.split("\n\nArguments:").next().unwrap_or(stdout);
    format!(
        "=== glen {} ===\nExit code: {}\n\n{}",
        args.join(" "),
        exit_code,
        head
    )
}
