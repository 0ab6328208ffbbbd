//! Glen - color-aware front-end for the len line length checker
//!
//! The core is the [`ansi`] module: a renderer that turns text with embedded
//! SGR color escapes into styled fragments delivered to a [`surface::Surface`].
//! Around it sit the pieces a front-end needs: running the checker
//! ([`runner`]), turning its exit status into a [`verdict`], saving
//! [`report`]s, a [`session`] tying them together, and a scrollable
//! [`viewer`].

pub mod ansi;
pub mod cli;
pub mod config;
pub mod logging;
pub mod report;
pub mod runner;
pub mod session;
pub mod surface;
pub mod theme;
pub mod verdict;
pub mod viewer;

pub use ansi::{AnsiRenderer, ColorName, Style};
pub use config::Config;
pub use runner::{LenRunner, Runner};
pub use session::Session;
pub use surface::{StyledBuffer, Surface, TerminalSurface};
pub use verdict::Verdict;

/// Version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("GLEN_BUILD_DATE"),
    ")"
);

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GLEN_BUILD_DATE"),
    ")"
);
