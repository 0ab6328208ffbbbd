//! Render command handler

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use glen::cli::OutputFormat;
use glen::theme::Palette;
use glen::{AnsiRenderer, Config, StyledBuffer, TerminalSurface};

/// Read a capture from `file`, or stdin when it is absent or `-`.
pub fn read_input(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) if path != Path::new("-") => {
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        _ => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read stdin")?;
            Ok(bytes)
        }
    }
}

/// Format used when none is given: colors on a terminal, text otherwise.
pub fn default_format() -> OutputFormat {
    if atty::is(atty::Stream::Stdout) {
        OutputFormat::Ansi
    } else {
        OutputFormat::Plain
    }
}

/// Render `input` in `format`.
pub fn render(input: &[u8], format: OutputFormat, palette: &Palette) -> Result<String> {
    let mut renderer = AnsiRenderer::new(StyledBuffer::new());
    renderer.write_bytes(input);
    format_buffer(renderer.surface(), format, palette)
}

/// Format text already rendered into `buffer`.
pub fn format_buffer(
    buffer: &StyledBuffer,
    format: OutputFormat,
    palette: &Palette,
) -> Result<String> {
    match format {
        OutputFormat::Ansi => {
            let mut surface = TerminalSurface::new(palette.clone());
            surface.replay(buffer);
            Ok(surface.into_string())
        }
        OutputFormat::Plain => Ok(buffer.plain_text()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(buffer.fragments())?;
            json.push('\n');
            Ok(json)
        }
    }
}

pub fn handle(file: Option<&Path>, format: Option<OutputFormat>, config: &Config) -> Result<()> {
    let input = read_input(file)?;
    let format = format.unwrap_or_else(default_format);
    let output = render(&input, format, &config.palette_or_default())?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
