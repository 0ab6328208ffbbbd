//! Run command handler

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use glen::runner::missing_files;
use glen::theme::current_theme;
use glen::viewer::Viewer;
use glen::{Config, LenRunner, Session};

use super::render::{default_format, format_buffer};

/// Options of one `glen run` invocation.
#[derive(Debug)]
pub struct RunOptions {
    pub binary: Option<String>,
    pub save: bool,
    pub header: bool,
    pub out: PathBuf,
    pub view: bool,
    pub files: Vec<PathBuf>,
    pub len_args: Vec<String>,
}

/// Arguments passed to the checker: config defaults, then the command line.
pub fn checker_args(config: &Config, len_args: &[String]) -> Vec<String> {
    config
        .run
        .default_args
        .iter()
        .chain(len_args)
        .cloned()
        .collect()
}

/// Run the checker and present its result. Returns the exit code to use.
pub fn handle(opts: RunOptions, config: &Config) -> Result<i32> {
    let theme = current_theme();
    let binary = opts.binary.unwrap_or_else(|| config.run.binary.clone());

    for path in missing_files(&opts.files) {
        warn!(path = %path.display(), "file does not exist");
    }

    let args = checker_args(config, &opts.len_args);
    let mut session = Session::new(LenRunner::new(binary));
    let verdict = session.run(opts.files, args)?;

    if opts.save {
        let path = save(&session, &opts.out, opts.header)?;
        eprintln!(
            "{}",
            theme.secondary_text(&format!("Report saved to {}", path.display()))
        );
    }

    if opts.view {
        show(&session, config)?;
    } else {
        let rendered = format_buffer(
            session.buffer(),
            default_format(),
            &config.palette_or_default(),
        )?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
    }

    let label = session.status_label();
    if verdict.is_success() {
        eprintln!("{}", theme.success_text(&label));
    } else {
        eprintln!("{}", theme.error_text(&label));
    }

    Ok(verdict.exit_code())
}

fn save(session: &Session<LenRunner>, dir: &Path, header: bool) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(session.save_report(dir, header)?)
}

#[cfg(not(tarpaulin_include))]
fn show(session: &Session<LenRunner>, config: &Config) -> Result<()> {
    Viewer::new(
        session.buffer(),
        &config.palette_or_default(),
        session.title(),
        session.status_label(),
        &config.viewer,
    )
    .run()
}
