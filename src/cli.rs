//! Command-line interface definition.
//!
//! Lives in the library so the xtask can generate man pages from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Glen - color-aware front-end for the len line length checker
#[derive(Debug, Parser)]
#[command(name = "glen", version = crate::VERSION, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). GLEN_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render captured checker output with its colors
    #[command(long_about = "Render captured checker output with its colors.

Reads FILE, or stdin when FILE is omitted or '-', interprets the
embedded color escapes and writes the result in the chosen format.

Examples:
  len --color src/*.c | glen render
  glen render report.len_report --format json")]
    Render {
        /// Capture to render (stdin when omitted or '-')
        file: Option<PathBuf>,

        /// Output format (default: ansi on a terminal, plain otherwise)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Open captured output in the scrollable viewer
    View {
        /// Capture to view (stdin when omitted or '-')
        file: Option<PathBuf>,
    },

    /// Run len over files and show the colored result
    #[command(long_about = "Run len over files and show the colored result.

Arguments after '--' are passed to len verbatim, after the
default_args from the config file. The exit code mirrors len's.

Examples:
  glen run src/main.c -- --max 80 --color
  glen run --save --header --out reports src/*.c")]
    Run {
        /// Checker binary (overrides run.binary from config)
        #[arg(long, value_name = "PATH")]
        binary: Option<String>,

        /// Save a report file (name built from the checked files)
        #[arg(long)]
        save: bool,

        /// Include the command and flags header in the report
        #[arg(long, requires = "save")]
        header: bool,

        /// Directory for the report file
        #[arg(long, value_name = "DIR", default_value = ".")]
        out: PathBuf,

        /// Open the result in the scrollable viewer
        #[arg(long)]
        view: bool,

        /// Files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Arguments passed to len
        #[arg(last = true, allow_hyphen_values = true)]
        len_args: Vec<String>,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// How `render` writes its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// 24-bit color escapes from the palette
    Ansi,
    /// Text only
    Plain,
    /// Styled fragments as JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_splits_files_and_len_args() {
        let cli = Cli::parse_from(["glen", "run", "a.c", "b.c", "--", "--max", "80"]);
        match cli.command {
            Commands::Run {
                files, len_args, ..
            } => {
                assert_eq!(files, vec![PathBuf::from("a.c"), PathBuf::from("b.c")]);
                assert_eq!(len_args, vec!["--max", "80"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn header_requires_save() {
        assert!(Cli::try_parse_from(["glen", "run", "--header", "a.c"]).is_err());
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::parse_from(["glen", "-vv", "config", "path"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn render_format_parses() {
        let cli = Cli::parse_from(["glen", "render", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Commands::Render {
                format: Some(OutputFormat::Json),
                ..
            }
        ));
    }
}
