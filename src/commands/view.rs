//! View command handler

use std::path::Path;

use anyhow::Result;

use glen::session::APP_TITLE;
use glen::verdict::NO_VERDICT;
use glen::viewer::Viewer;
use glen::{AnsiRenderer, Config, StyledBuffer};

use super::render::read_input;

/// Open a capture in the viewer.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: Option<&Path>, config: &Config) -> Result<()> {
    let input = read_input(file)?;
    let mut renderer = AnsiRenderer::new(StyledBuffer::new());
    renderer.write_bytes(&input);

    let title = match file.and_then(Path::file_name) {
        Some(name) if file != Some(Path::new("-")) => {
            format!("{} - [{}]", APP_TITLE, name.to_string_lossy())
        }
        _ => APP_TITLE.to_string(),
    };

    Viewer::new(
        renderer.surface(),
        &config.palette_or_default(),
        title,
        NO_VERDICT,
        &config.viewer,
    )
    .run()
}
