//! Style state machine.
//!
//! Interprets style codes against the session state and memoizes each code's
//! resolution. A code is resolved at most once per machine; later occurrences
//! reuse the cached style even if the session colors have moved on since.

use std::collections::HashMap;

use tracing::debug;

use super::palette::{self, Intensity};
use super::style::{SessionState, Style, DEFAULT_TAG};

/// Outcome of selecting a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// Style registered for the selected tag
    pub style: Style,
    /// True when this call resolved and registered the tag
    pub registered: bool,
}

/// Session state plus the known-tag cache.
#[derive(Debug, Clone)]
pub struct StyleMachine {
    state: SessionState,
    known: HashMap<String, Style>,
}

impl StyleMachine {
    /// Create a machine with the default tag pre-registered.
    pub fn new() -> Self {
        let mut known = HashMap::new();
        known.insert(DEFAULT_TAG.to_string(), Style::default());
        Self {
            state: SessionState::default(),
            known,
        }
    }

    /// Process a style code and make it the current tag.
    pub fn apply(&mut self, code: &str) -> Resolved {
        if let Some(style) = self.known.get(code) {
            self.state.code = code.to_string();
            return Resolved {
                style: *style,
                registered: false,
            };
        }

        for param in code.split(';') {
            self.apply_param(param);
        }

        let style = self.state.style();
        debug!(code, fg = %style.fg, bg = %style.bg, "resolved style tag");
        self.known.insert(code.to_string(), style);
        self.state.code = code.to_string();

        Resolved {
            style,
            registered: true,
        }
    }

    fn apply_param(&mut self, param: &str) {
        let intensity = self.state.intensity;
        if let Some(fg) = palette::foreground(intensity, param) {
            self.state.fg = fg;
        } else if let Some(bg) = palette::background(intensity, param) {
            self.state.bg = bg;
        } else {
            for ch in param.chars() {
                match ch {
                    '0' => self.state.reset(),
                    '1' => self.state.intensity = Intensity::Bright,
                    '2' => self.state.intensity = Intensity::Dim,
                    _ => {}
                }
            }
        }
    }

    /// Select the default tag without touching the session colors.
    ///
    /// Applied for empty segments between or around escapes.
    pub fn select_default(&mut self) {
        self.state.code = DEFAULT_TAG.to_string();
    }

    /// Style of the current tag, resolving the tag first if it is unknown.
    pub fn current_style(&mut self) -> Resolved {
        match self.known.get(&self.state.code) {
            Some(style) => Resolved {
                style: *style,
                registered: false,
            },
            None => {
                let code = self.state.code.clone();
                self.apply(&code)
            }
        }
    }

    /// Restore the session attributes to their defaults. Known tags are kept.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Code of the currently selected tag.
    pub fn current_code(&self) -> &str {
        &self.state.code
    }

    pub fn is_known(&self, code: &str) -> bool {
        self.known.contains_key(code)
    }

    /// Cached style for `code`, if it has been resolved.
    pub fn style_for(&self, code: &str) -> Option<Style> {
        self.known.get(code).copied()
    }

    /// Number of resolved tags, including the default.
    pub fn tag_count(&self) -> usize {
        self.known.len()
    }
}

impl Default for StyleMachine {
    fn default() -> Self {
        Self::new()
    }
}
