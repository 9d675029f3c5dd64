#![forbid(unsafe_code)]

//! Style: colors, attribute flags, and the escape sequences that select them.

pub mod color;
pub mod sgr;
pub mod style;

pub use color::{
    Ansi16, Color, ColorParseError, ColorProfile, Rgb, ansi16_to_rgb, ansi256_to_rgb,
    rgb_to_256, rgb_to_ansi16,
};
pub use sgr::{SGR_RESET, hyperlink};
pub use style::{Style, StyleFlags, apply, apply_safe, apply_safe_with};
