//! Session controller.
//!
//! Holds everything that survives between checker runs: the files and
//! arguments of the last run, its raw output and verdict, and the rendered
//! text. Front-ends drive it through `&mut` and read back what to display.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::ansi::AnsiRenderer;
use crate::report;
use crate::runner::{RunError, Runner};
use crate::surface::StyledBuffer;
use crate::verdict::{Verdict, NO_VERDICT};

/// Title shown when no files are loaded.
pub const APP_TITLE: &str = "Glen";

/// Text written when a rerun is requested before any run.
pub const NO_PREVIOUS_RUN: &str = "No previous run!";

/// Errors from session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No previous run")]
    NoPreviousRun,

    #[error(transparent)]
    Run(#[from] RunError),

    #[error("Failed to save report to {path}: {source}")]
    Save {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// State of one front-end session.
#[derive(Debug)]
pub struct Session<R: Runner> {
    runner: R,
    renderer: AnsiRenderer<StyledBuffer>,
    files: Vec<PathBuf>,
    args: Vec<String>,
    output: String,
    verdict: Option<Verdict>,
}

impl<R: Runner> Session<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            renderer: AnsiRenderer::new(StyledBuffer::new()),
            files: Vec::new(),
            args: Vec::new(),
            output: String::new(),
            verdict: None,
        }
    }

    /// Run the checker over `files` with `args` and render its output.
    pub fn run(&mut self, files: Vec<PathBuf>, args: Vec<String>) -> Result<Verdict, SessionError> {
        self.files = files;
        self.args = args;
        self.execute()
    }

    /// Repeat the last run with the same files and arguments.
    pub fn rerun(&mut self) -> Result<Verdict, SessionError> {
        self.execute()
    }

    fn execute(&mut self) -> Result<Verdict, SessionError> {
        if self.files.is_empty() {
            self.renderer.write(NO_PREVIOUS_RUN);
            return Err(SessionError::NoPreviousRun);
        }

        let result = self.runner.run(&self.args, &self.files)?;
        self.renderer.clear();
        self.renderer.write(&result.output);
        self.output = result.output;

        let verdict = Verdict::from_code(result.status);
        info!(%verdict, "run complete");
        self.verdict = Some(verdict);
        Ok(verdict)
    }

    /// Clear the rendered text and the verdict. Files and output are kept
    /// for reruns and saves.
    pub fn clear(&mut self) {
        self.renderer.clear();
        self.verdict = None;
    }

    /// Window-style title naming the loaded files.
    pub fn title(&self) -> String {
        if self.files.is_empty() {
            return APP_TITLE.to_string();
        }
        let names: Vec<String> = self
            .files
            .iter()
            .map(|f| {
                f.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            })
            .collect();
        format!("{} - [{}]", APP_TITLE, names.join(", "))
    }

    /// Status label for the last verdict.
    pub fn status_label(&self) -> String {
        self.verdict
            .map(|v| v.to_string())
            .unwrap_or_else(|| NO_VERDICT.to_string())
    }

    /// Write the last output to `<dir>/<report name>`, optionally with the
    /// command header.
    pub fn save_report(&self, dir: &Path, with_header: bool) -> Result<PathBuf, SessionError> {
        let path = report::path_in(dir, &self.files);
        let header = with_header.then(|| report::header(self.runner.program(), &self.args));
        report::save(&path, &self.output, header.as_deref()).map_err(|source| {
            SessionError::Save {
                path: path.clone(),
                source,
            }
        })?;
        Ok(path)
    }

    pub fn buffer(&self) -> &StyledBuffer {
        self.renderer.surface()
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Raw output of the last run.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }
}
