//! Resolved styles and the mutable session state behind them.

use serde::{Deserialize, Serialize};

use super::palette::{ColorName, Intensity};

/// Tag registered at initialization; also selected by empty segments.
pub const DEFAULT_TAG: &str = "30";

/// A resolved (foreground, background) color pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    pub fg: ColorName,
    pub bg: ColorName,
}

impl Style {
    pub const fn new(fg: ColorName, bg: ColorName) -> Self {
        Self { fg, bg }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(ColorName::Black, ColorName::White)
    }
}

/// Attributes mutated while processing style codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Code of the tag currently selected for literal text
    pub code: String,
    pub intensity: Intensity,
    pub fg: ColorName,
    pub bg: ColorName,
}

impl SessionState {
    /// Restore every attribute to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The colors accumulated so far, as a style.
    pub fn style(&self) -> Style {
        Style::new(self.fg, self.bg)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        let style = Style::default();
        Self {
            code: DEFAULT_TAG.to_string(),
            intensity: Intensity::Bright,
            fg: style.fg,
            bg: style.bg,
        }
    }
}
