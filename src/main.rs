//! Glen command-line entry point

mod commands;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use glen::cli::{Cli, Commands, ConfigCommands};
use glen::theme::current_theme;
use glen::Config;

use commands::run::RunOptions;

fn main() -> ExitCode {
    let cli = Cli::parse();
    glen::logging::init(cli.verbose);

    match dispatch(cli) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            let theme = current_theme();
            eprintln!("{}", theme.error_text(&format!("Error: {:#}", e)));
            ExitCode::FAILURE
        }
    }
}

/// Config from `--config`, or from the default location when it exists.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

/// Config file location for commands that need one.
fn config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(Config::config_path()?),
    }
}

fn dispatch(cli: Cli) -> Result<i32> {
    let explicit = cli.config;

    match cli.command {
        Commands::Render { file, format } => {
            let config = load_config(explicit.as_deref())?;
            commands::render::handle(file.as_deref(), format, &config)?;
        }
        Commands::View { file } => {
            let config = load_config(explicit.as_deref())?;
            commands::view::handle(file.as_deref(), &config)?;
        }
        Commands::Run {
            binary,
            save,
            header,
            out,
            view,
            files,
            len_args,
        } => {
            let config = load_config(explicit.as_deref())?;
            let opts = RunOptions {
                binary,
                save,
                header,
                out,
                view,
                files,
                len_args,
            };
            return commands::run::handle(opts, &config);
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => {
                let config = load_config(explicit.as_deref())?;
                commands::config::handle_show(&config)?;
            }
            ConfigCommands::Path => commands::config::handle_path(&config_path(explicit)?)?,
            ConfigCommands::Init { force } => {
                commands::config::handle_init(&config_path(explicit)?, force)?
            }
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
    Ok(0)
}
