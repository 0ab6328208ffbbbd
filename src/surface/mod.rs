//! Rendering surfaces.
//!
//! A surface is the sink that receives styled text from the renderer. It sees
//! every tag registration (so it can configure display attributes once per
//! tag) and every appended fragment, in order.

mod buffer;
mod terminal;

pub use buffer::{Fragment, StyledBuffer};
pub use terminal::TerminalSurface;

use crate::ansi::Style;

/// Output sink for styled text fragments.
pub trait Surface {
    /// Called once per newly resolved tag, and for the default tag when the
    /// renderer is created.
    fn register_tag(&mut self, _tag: &str, _style: Style) {}

    /// Append `text` displayed with `style`. `tag` is the style code the
    /// style was resolved from.
    fn append_styled_text(&mut self, text: &str, tag: &str, style: Style);

    /// Remove all text.
    fn clear(&mut self);
}
