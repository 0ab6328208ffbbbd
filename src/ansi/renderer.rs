//! Renderer tying the scanner and state machine to a surface.

use super::machine::{Resolved, StyleMachine};
use super::scanner::{scan, Segment};
use super::style::{Style, DEFAULT_TAG};
use crate::surface::Surface;

/// Renders text containing SGR color codes onto a surface.
///
/// Owns the session state and tag cache for its surface; two renderers never
/// share state.
#[derive(Debug)]
pub struct AnsiRenderer<S: Surface> {
    machine: StyleMachine,
    surface: S,
}

impl<S: Surface> AnsiRenderer<S> {
    /// Wrap `surface`, registering the default tag with it.
    pub fn new(mut surface: S) -> Self {
        surface.register_tag(DEFAULT_TAG, Style::default());
        Self {
            machine: StyleMachine::new(),
            surface,
        }
    }

    /// Render `text` onto the surface.
    pub fn write(&mut self, text: &str) {
        for segment in scan(text) {
            match segment {
                Segment::Style(code) => {
                    let resolved = self.machine.apply(code);
                    self.register(code, resolved);
                }
                Segment::Empty => self.machine.select_default(),
                Segment::Literal(literal) => {
                    let resolved = self.machine.current_style();
                    let tag = self.machine.current_code().to_string();
                    self.register(&tag, resolved);
                    self.surface
                        .append_styled_text(literal, &tag, resolved.style);
                }
            }
        }
    }

    /// Render raw bytes, replacing invalid UTF-8.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.write(&String::from_utf8_lossy(bytes));
    }

    /// Clear the surface. Session state and known tags are kept.
    pub fn clear(&mut self) {
        self.surface.clear();
    }

    fn register(&mut self, tag: &str, resolved: Resolved) {
        if resolved.registered {
            self.surface.register_tag(tag, resolved.style);
        }
    }

    pub fn machine(&self) -> &StyleMachine {
        &self.machine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<S: Surface + Default> Default for AnsiRenderer<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
