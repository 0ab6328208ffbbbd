//! Subcommand handlers.

pub mod completions;
pub mod config;
pub mod render;
pub mod run;
pub mod view;
