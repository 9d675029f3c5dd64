#![forbid(unsafe_code)]

//! Text styles and the reset-wrap helpers.
//!
//! A [`Style`] is a foreground, a background, and a set of attribute flags.
//! It turns into exactly one SGR sequence; [`apply`] wraps text between that
//! sequence and a reset so styled text never leaks attributes into what
//! follows.
//!
//! ```
//! use ansikit_style::{Color, Style, apply};
//!
//! let warn = Style::new().fg(Color::rgb(255, 215, 0)).bold();
//! assert_eq!(apply(&warn, "careful"), "\x1b[1;38;2;255;215;0mcareful\x1b[0m");
//! assert_eq!(apply(&Style::new(), "plain"), "plain");
//! ```

use ansikit_core::TerminalCapabilities;
use bitflags::bitflags;

use crate::color::{Color, ColorProfile};
use crate::sgr::{FLAG_TABLE, SGR_RESET, sgr};

bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD          = 0b0000_0001;
        const DIM           = 0b0000_0010;
        const ITALIC        = 0b0000_0100;
        const UNDERLINE     = 0b0000_1000;
        const BLINK         = 0b0001_0000;
        const REVERSE       = 0b0010_0000;
        const STRIKETHROUGH = 0b0100_0000;
        const HIDDEN        = 0b1000_0000;
    }
}

/// Foreground, background, and attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attrs: StyleFlags,
}

impl Style {
    /// The empty style: renders text unchanged.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: StyleFlags::empty(),
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub fn fg(mut self, color: impl Into<Color>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn bg(mut self, color: impl Into<Color>) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Add attribute flags.
    #[must_use]
    pub fn attrs(mut self, flags: StyleFlags) -> Self {
        self.attrs |= flags;
        self
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.attrs(StyleFlags::BOLD)
    }

    #[must_use]
    pub fn dim(self) -> Self {
        self.attrs(StyleFlags::DIM)
    }

    #[must_use]
    pub fn italic(self) -> Self {
        self.attrs(StyleFlags::ITALIC)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.attrs(StyleFlags::UNDERLINE)
    }

    #[must_use]
    pub fn blink(self) -> Self {
        self.attrs(StyleFlags::BLINK)
    }

    #[must_use]
    pub fn reverse(self) -> Self {
        self.attrs(StyleFlags::REVERSE)
    }

    #[must_use]
    pub fn hidden(self) -> Self {
        self.attrs(StyleFlags::HIDDEN)
    }

    #[must_use]
    pub fn strikethrough(self) -> Self {
        self.attrs(StyleFlags::STRIKETHROUGH)
    }

    /// True when the style emits nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }

    /// Fit the colors to `profile`; attributes are kept.
    #[must_use]
    pub fn downgrade(self, profile: ColorProfile) -> Self {
        Self {
            fg: self.fg.and_then(|c| c.downgrade(profile)),
            bg: self.bg.and_then(|c| c.downgrade(profile)),
            attrs: self.attrs,
        }
    }

    /// The single SGR sequence selecting this style (empty for an empty style).
    #[must_use]
    pub fn sgr(&self) -> String {
        let mut params: Vec<String> = Vec::new();
        for (flag, codes) in FLAG_TABLE {
            if self.attrs.contains(flag) {
                params.push(codes.on.to_string());
            }
        }
        if let Some(fg) = self.fg {
            fg.push_params(false, &mut params);
        }
        if let Some(bg) = self.bg {
            bg.push_params(true, &mut params);
        }
        sgr(&params)
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Self {
        Self::new().fg(color)
    }
}

impl From<crate::color::Rgb> for Style {
    fn from(rgb: crate::color::Rgb) -> Self {
        Self::new().fg(rgb)
    }
}

/// Wrap `text` as `SGR + text + reset`; an empty style returns `text` as-is.
#[must_use]
pub fn apply(style: &Style, text: &str) -> String {
    if style.is_empty() {
        return text.to_owned();
    }
    let open = style.sgr();
    let mut out = String::with_capacity(open.len() + text.len() + SGR_RESET.len());
    out.push_str(&open);
    out.push_str(text);
    out.push_str(SGR_RESET);
    out
}

/// Like [`apply`], but returns `text` unchanged when the terminal does not
/// accept ANSI sequences. The environment is consulted on every call.
#[must_use]
pub fn apply_safe(style: &Style, text: &str) -> String {
    if ansikit_core::ansi_supported() {
        apply(style, text)
    } else {
        text.to_owned()
    }
}

/// [`apply_safe`] against an explicit capability set.
#[must_use]
pub fn apply_safe_with(caps: &TerminalCapabilities, style: &Style, text: &str) -> String {
    if caps.ansi_color {
        apply(style, text)
    } else {
        text.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Ansi16, Rgb};
    use ansikit_core::terminal_capabilities::DetectInputs;

    #[test]
    fn empty_style_is_identity() {
        assert_eq!(apply(&Style::new(), "text"), "text");
        assert_eq!(Style::new().sgr(), "");
    }

    #[test]
    fn fg_rgb_sequence() {
        let style = Style::new().fg(Rgb::new(50, 205, 50));
        assert_eq!(style.sgr(), "\x1b[38;2;50;205;50m");
        assert_eq!(apply(&style, "ok"), "\x1b[38;2;50;205;50mok\x1b[0m");
    }

    #[test]
    fn attrs_then_colors_in_one_sequence() {
        let style = Style::new()
            .underline()
            .bold()
            .fg(Ansi16::Red)
            .bg(Color::Ansi256(17));
        assert_eq!(style.sgr(), "\x1b[1;4;31;48;5;17m");
    }

    #[test]
    fn downgrade_to_mono_keeps_attrs_only() {
        let style = Style::new().fg(Color::rgb(255, 0, 0)).bold();
        let mono = style.downgrade(ColorProfile::Mono);
        assert_eq!(mono.fg, None);
        assert_eq!(mono.sgr(), "\x1b[1m");
    }

    #[test]
    fn downgrade_to_256() {
        let style = Style::new().fg(Color::rgb(255, 0, 0));
        assert_eq!(
            style.downgrade(ColorProfile::Ansi256).fg,
            Some(Color::Ansi256(196))
        );
    }

    #[test]
    fn applied_text_ends_with_reset() {
        let out = apply(&Style::new().italic(), "x");
        assert!(out.ends_with(SGR_RESET));
        assert!(out.starts_with("\x1b[3m"));
    }

    #[test]
    fn from_color() {
        let style: Style = Color::Ansi16(Ansi16::Green).into();
        assert_eq!(style.sgr(), "\x1b[32m");
    }

    // --- apply_safe tests ---

    #[test]
    fn apply_safe_with_follows_capabilities() {
        let style = Style::new().bold();
        let forced = TerminalCapabilities::detect_from(&DetectInputs {
            force_color: Some("1".to_owned()),
            ..DetectInputs::default()
        });
        assert_eq!(apply_safe_with(&forced, &style, "x"), "\x1b[1mx\x1b[0m");

        let no_color = TerminalCapabilities::detect_from(&DetectInputs {
            no_color: true,
            force_color: Some("1".to_owned()),
            ..DetectInputs::default()
        });
        assert_eq!(apply_safe_with(&no_color, &style, "x"), "x");
        assert_eq!(apply_safe_with(&TerminalCapabilities::plain(), &style, "x"), "x");
    }

    #[test]
    fn apply_safe_matches_current_environment() {
        let style = Style::new().fg(Rgb::new(1, 2, 3));
        let expected = if ansikit_core::ansi_supported() {
            apply(&style, "x")
        } else {
            "x".to_owned()
        };
        assert_eq!(apply_safe(&style, "x"), expected);
    }
}
