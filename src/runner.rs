//! Invocation of the external checker.
//!
//! The [`Runner`] trait is the seam between the session and the process
//! world; [`LenRunner`] is the real implementation.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info};

/// Errors from running the checker.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Checker binary '{binary}' not found")]
    NotFound { binary: String },

    #[error("Failed to run '{binary}': {source}")]
    Spawn {
        binary: String,
        source: std::io::Error,
    },
}

/// Captured result of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    /// stdout followed by stderr, lossily decoded
    pub output: String,
    /// Exit code; `None` when terminated by a signal
    pub status: Option<i32>,
}

/// Something that can run the checker over files.
pub trait Runner {
    /// Run with `args` followed by `files`.
    fn run(&self, args: &[String], files: &[PathBuf]) -> Result<RunOutput, RunError>;

    /// Program name, for report headers.
    fn program(&self) -> &str;
}

/// Runs the `len` binary.
#[derive(Debug, Clone)]
pub struct LenRunner {
    binary: String,
}

impl LenRunner {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for LenRunner {
    fn default() -> Self {
        Self::new("len")
    }
}

/// Arguments with empty entries removed.
pub fn non_empty_args(args: &[String]) -> Vec<&str> {
    args.iter()
        .map(String::as_str)
        .filter(|a| !a.is_empty())
        .collect()
}

impl Runner for LenRunner {
    fn run(&self, args: &[String], files: &[PathBuf]) -> Result<RunOutput, RunError> {
        let args = non_empty_args(args);
        info!(binary = %self.binary, ?args, files = files.len(), "running checker");

        let output = Command::new(&self.binary)
            .args(&args)
            .args(files)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| {
                if source.kind() == std::io::ErrorKind::NotFound {
                    RunError::NotFound {
                        binary: self.binary.clone(),
                    }
                } else {
                    RunError::Spawn {
                        binary: self.binary.clone(),
                        source,
                    }
                }
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        debug!(status = ?output.status.code(), bytes = text.len(), "checker finished");

        Ok(RunOutput {
            output: text,
            status: output.status.code(),
        })
    }

    fn program(&self) -> &str {
        &self.binary
    }
}

/// Entries of `files` that do not exist on disk.
pub fn missing_files(files: &[PathBuf]) -> Vec<&Path> {
    files
        .iter()
        .map(PathBuf::as_path)
        .filter(|p| !p.exists())
        .collect()
}
