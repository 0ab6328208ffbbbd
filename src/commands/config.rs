//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};

use glen::theme::current_theme;
use glen::Config;

/// Show the effective configuration as TOML.
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = config.to_toml()?;
    let theme = current_theme();
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}

/// Print the config file location, noting when it does not exist yet.
pub fn handle_path(path: &Path) -> Result<()> {
    let theme = current_theme();
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("{}", theme.secondary_text("(file does not exist, defaults in use)"));
    }
    Ok(())
}

/// Write the default configuration to `path`.
pub fn handle_init(path: &Path, force: bool) -> Result<()> {
    let theme = current_theme();
    if path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save_to(path)?;
    println!(
        "{}",
        theme.success_text(&format!("Wrote default config to {}", path.display()))
    );
    Ok(())
}
