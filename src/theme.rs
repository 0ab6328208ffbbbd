//! Theme and palette configuration for the viewer and CLI
//!
//! Centralizes all color definitions. The [`Palette`] maps the symbolic color
//! names produced by the renderer to concrete display colors; the [`Theme`]
//! holds the chrome colors used for status lines and messages. Both provide
//! ratatui styles (for the viewer) and ANSI escape codes (for CLI output).

use std::collections::HashMap;

use ratatui::style::{Color, Modifier, Style};

use crate::ansi::{ColorName, Style as TextStyle};

/// Concrete RGB values for each symbolic color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: HashMap<ColorName, (u8, u8, u8)>,
}

impl Default for Palette {
    fn default() -> Self {
        let colors = ColorName::ALL
            .iter()
            .map(|c| (*c, default_rgb(*c)))
            .collect();
        Self { colors }
    }
}

/// X11-style values for the named colors.
fn default_rgb(color: ColorName) -> (u8, u8, u8) {
    match color {
        ColorName::Black => (0, 0, 0),
        ColorName::Red => (255, 0, 0),
        ColorName::Green => (0, 255, 0),
        ColorName::Brown => (165, 42, 42),
        ColorName::Blue => (0, 0, 255),
        ColorName::Purple => (160, 32, 240),
        ColorName::Cyan => (0, 255, 255),
        ColorName::White => (255, 255, 255),
        ColorName::DarkGray => (169, 169, 169),
        ColorName::LightRed => (255, 128, 128),
        ColorName::LightGreen => (144, 238, 144),
        ColorName::Yellow => (255, 255, 0),
        ColorName::LightBlue => (173, 216, 230),
        ColorName::Magenta => (255, 0, 255),
        ColorName::Pink => (255, 192, 203),
    }
}

impl Palette {
    /// Override the value of one color.
    pub fn set(&mut self, color: ColorName, rgb: (u8, u8, u8)) {
        self.colors.insert(color, rgb);
    }

    pub fn rgb(&self, color: ColorName) -> (u8, u8, u8) {
        self.colors
            .get(&color)
            .copied()
            .unwrap_or_else(|| default_rgb(color))
    }

    /// ratatui color for a symbolic color.
    pub fn color(&self, color: ColorName) -> Color {
        let (r, g, b) = self.rgb(color);
        Color::Rgb(r, g, b)
    }

    /// ratatui style for a resolved text style.
    pub fn style(&self, style: TextStyle) -> Style {
        Style::default()
            .fg(self.color(style.fg))
            .bg(self.color(style.bg))
    }

    /// Append the 24-bit SGR sequence selecting `style` to `buf`.
    pub fn push_sgr(&self, style: TextStyle, buf: &mut String) {
        let (fr, fg, fb) = self.rgb(style.fg);
        let (br, bg, bb) = self.rgb(style.bg);
        buf.push_str(&format!(
            "\x1b[38;2;{};{};{};48;2;{};{};{}m",
            fr, fg, fb, br, bg, bb
        ));
    }
}

/// Parse a `#rrggbb` color.
pub fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Chrome colors for the viewer and CLI messages.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for titles and key hints
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Cyan,
            error: Color::Red,
            success: Color::Green,
        }
    }
}

impl Theme {
    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for bold accented text (titles, key hints).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    // ANSI color helpers for CLI output

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

/// Wrap `text` in the color's escape code; `Reset` and unmapped colors leave
/// the text bare.
fn paint(color: Color, text: &str) -> String {
    match color {
        Color::Reset => text.to_string(),
        _ => match color_to_ansi(color) {
            "" => text.to_string(),
            code => format!("{}{}{}", code, text, ANSI_RESET),
        },
    }
}

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        _ => "",
    }
}

/// Theme used by the CLI. Honors `NO_COLOR` by dropping all chrome colors.
pub fn current_theme() -> Theme {
    if std::env::var_os("NO_COLOR").is_some() {
        Theme {
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            accent: Color::Reset,
            error: Color::Reset,
            success: Color::Reset,
        }
    } else {
        Theme::default()
    }
}
