//! Shell completion generation

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use glen::cli::Cli;

/// Write the completion script for `shell` to stdout.
pub fn handle(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "glen", &mut io::stdout());
}
