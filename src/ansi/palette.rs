//! Symbolic color names and the SGR color tables.
//!
//! Numeric color parameters resolve against one of two fixed tables chosen
//! by the current [`Intensity`]. Foreground entries are `30`-`37`, background
//! entries are `40`-`47`. Lookup is by exact parameter string.

use serde::{Deserialize, Serialize};

/// A named display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorName {
    Black,
    Red,
    Green,
    Brown,
    Blue,
    Purple,
    Cyan,
    White,
    DarkGray,
    LightRed,
    LightGreen,
    Yellow,
    LightBlue,
    Magenta,
    Pink,
}

impl ColorName {
    /// Every color, in table order (bright slots first, then the dim extras).
    pub const ALL: [ColorName; 15] = [
        ColorName::Black,
        ColorName::Red,
        ColorName::Green,
        ColorName::Brown,
        ColorName::Blue,
        ColorName::Purple,
        ColorName::Cyan,
        ColorName::White,
        ColorName::DarkGray,
        ColorName::LightRed,
        ColorName::LightGreen,
        ColorName::Yellow,
        ColorName::LightBlue,
        ColorName::Magenta,
        ColorName::Pink,
    ];

    /// The display name, as used for tag configuration and config keys.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Brown => "Brown",
            Self::Blue => "Blue",
            Self::Purple => "Purple",
            Self::Cyan => "Cyan",
            Self::White => "White",
            Self::DarkGray => "DarkGray",
            Self::LightRed => "LightRed",
            Self::LightGreen => "LightGreen",
            Self::Yellow => "Yellow",
            Self::LightBlue => "LightBlue",
            Self::Magenta => "Magenta",
            Self::Pink => "Pink",
        }
    }

    /// Look up a color by its display name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for ColorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which color table numeric parameters resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Intensity {
    #[default]
    Bright,
    Dim,
}

const BRIGHT: [ColorName; 8] = [
    ColorName::Black,
    ColorName::Red,
    ColorName::Green,
    ColorName::Brown,
    ColorName::Blue,
    ColorName::Purple,
    ColorName::Cyan,
    ColorName::White,
];

const DIM: [ColorName; 8] = [
    ColorName::DarkGray,
    ColorName::LightRed,
    ColorName::LightGreen,
    ColorName::Yellow,
    ColorName::LightBlue,
    ColorName::Magenta,
    ColorName::Pink,
    ColorName::White,
];

fn table(intensity: Intensity) -> &'static [ColorName; 8] {
    match intensity {
        Intensity::Bright => &BRIGHT,
        Intensity::Dim => &DIM,
    }
}

/// Slot index for a two-character parameter `<tens><0-7>`.
fn slot(param: &str, tens: u8) -> Option<usize> {
    match param.as_bytes() {
        [t, u] if *t == tens && (b'0'..=b'7').contains(u) => Some((u - b'0') as usize),
        _ => None,
    }
}

/// Resolve a foreground parameter (`30`-`37`) under the given intensity.
pub fn foreground(intensity: Intensity, param: &str) -> Option<ColorName> {
    slot(param, b'3').map(|i| table(intensity)[i])
}

/// Resolve a background parameter (`40`-`47`) under the given intensity.
pub fn background(intensity: Intensity, param: &str) -> Option<ColorName> {
    slot(param, b'4').map(|i| table(intensity)[i])
}
