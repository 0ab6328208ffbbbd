//! ANSI color rendering.
//!
//! Turns text containing SGR color escapes into styled fragments:
//! - [`scanner`] splits raw text at escape sequences and classifies pieces
//! - [`machine`] interprets style codes and memoizes resolved tags
//! - [`renderer`] drives both and appends literal text to a surface
//!
//! Only the basic color directives are understood (`30`-`37`, `40`-`47`,
//! and the `0`/`1`/`2` reset and intensity characters). Anything else is
//! ignored or passed through as text; rendering never fails.

pub mod machine;
pub mod palette;
pub mod renderer;
pub mod scanner;
pub mod style;

pub use machine::{Resolved, StyleMachine};
pub use palette::{ColorName, Intensity};
pub use renderer::AnsiRenderer;
pub use scanner::{scan, Scanner, Segment};
pub use style::{SessionState, Style, DEFAULT_TAG};
