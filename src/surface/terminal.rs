//! Surface that re-encodes styled text for a truecolor terminal.

use super::{StyledBuffer, Surface};
use crate::ansi::Style;
use crate::theme::{Palette, ANSI_RESET};

/// Accumulates text wrapped in 24-bit SGR sequences.
///
/// Every fragment is emitted as `<colors><text><reset>` so output can be cut
/// at any fragment boundary without leaking colors. Newlines are emitted
/// outside the colored span to keep background fills off line ends.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    palette: Palette,
    output: String,
}

impl TerminalSurface {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            output: String::new(),
        }
    }

    /// Re-encode every fragment already recorded in `buffer`.
    pub fn replay(&mut self, buffer: &StyledBuffer) {
        for fragment in buffer.fragments() {
            self.append_styled_text(&fragment.text, &fragment.tag, fragment.style);
        }
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_string(self) -> String {
        self.output
    }

    fn push_colored(&mut self, text: &str, style: Style) {
        if text.is_empty() {
            return;
        }
        self.palette.push_sgr(style, &mut self.output);
        self.output.push_str(text);
        self.output.push_str(ANSI_RESET);
    }
}

impl Surface for TerminalSurface {
    fn append_styled_text(&mut self, text: &str, _tag: &str, style: Style) {
        let mut pieces = text.split('\n').peekable();
        while let Some(piece) = pieces.next() {
            self.push_colored(piece, style);
            if pieces.peek().is_some() {
                self.output.push('\n');
            }
        }
    }

    fn clear(&mut self) {
        self.output.clear();
    }
}
