#![forbid(unsafe_code)]

//! Escape-aware measuring, truncating, and padding.
//!
//! Lengths here count `char`s in visible runs; escape sequences have zero
//! length. [`display_width`] is the cell-accurate variant for text with wide
//! glyphs.

use unicode_width::UnicodeWidthStr;

use crate::scanner::{Token, tokens};

/// SGR reset appended when truncation drops a style's reset.
const SGR_RESET: &str = "\x1b[0m";
/// OSC 8 close appended when truncation drops a hyperlink's close.
const HYPERLINK_END: &str = "\x1b]8;;\x1b\\";

/// Which side receives padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Pad before the text (right-aligns it).
    Left,
    /// Pad after the text (left-aligns it).
    #[default]
    Right,
    /// Split the padding, larger half after the text.
    Center,
}

/// Number of visible chars in `s`.
///
/// ```
/// use ansikit_text::visible_length;
///
/// assert_eq!(visible_length("\x1b[31mHi\x1b[0m"), 2);
/// ```
#[must_use]
pub fn visible_length(s: &str) -> usize {
    tokens(s)
        .map(|t| match t {
            Token::Text(text) => text.chars().count(),
            Token::Escape(_) => 0,
        })
        .sum()
}

/// Terminal cell width of the visible part of `s`.
#[must_use]
pub fn display_width(s: &str) -> usize {
    tokens(s)
        .map(|t| match t {
            Token::Text(text) => text.width(),
            Token::Escape(_) => 0,
        })
        .sum()
}

/// `s` with every escape sequence removed.
#[must_use]
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for token in tokens(s) {
        if let Token::Text(text) = token {
            out.push_str(text);
        }
    }
    out
}

/// Keep at most `max_visible` visible chars, never splitting an escape.
///
/// Escapes that start before the cut are kept whole; those after it are
/// dropped. If the kept prefix leaves a style or hyperlink open, a reset
/// (or link close) is appended.
///
/// ```
/// use ansikit_text::truncate;
///
/// assert_eq!(truncate("\x1b[31mHello World\x1b[0m", 5), "\x1b[31mHello\x1b[0m");
/// assert_eq!(truncate("short", 10), "short");
/// ```
#[must_use]
pub fn truncate(s: &str, max_visible: usize) -> String {
    if visible_length(s) <= max_visible {
        return s.to_owned();
    }

    let mut out = String::with_capacity(s.len());
    let mut visible = 0usize;
    let mut style_open = false;
    let mut link_open = false;

    'scan: for token in tokens(s) {
        match token {
            Token::Escape(esc) => {
                if token.is_sgr() {
                    style_open = !token.is_sgr_reset();
                } else if let Some(opens) = token.hyperlink_opens() {
                    link_open = opens;
                }
                out.push_str(esc);
            }
            Token::Text(text) => {
                for (idx, _) in text.char_indices() {
                    if visible == max_visible {
                        out.push_str(&text[..idx]);
                        break 'scan;
                    }
                    visible += 1;
                }
                out.push_str(text);
            }
        }
    }

    if link_open {
        out.push_str(HYPERLINK_END);
    }
    if style_open {
        out.push_str(SGR_RESET);
    }
    out
}

/// `ch` repeated `count` times; zero or negative counts give `""`.
///
/// ```
/// use ansikit_text::repeat;
///
/// assert_eq!(repeat('─', 3), "───");
/// assert_eq!(repeat('x', -2), "");
/// ```
#[must_use]
pub fn repeat<N: TryInto<usize>>(ch: char, count: N) -> String {
    let count = count.try_into().unwrap_or(0);
    std::iter::repeat_n(ch, count).collect()
}

/// Pad `s` with `pad_char` to `width` visible chars.
///
/// No-op when `s` is already at least `width` wide; never truncates.
#[must_use]
pub fn pad(s: &str, width: usize, side: Side, pad_char: char) -> String {
    let len = visible_length(s);
    if len >= width {
        return s.to_owned();
    }
    let deficit = width - len;
    let (left, right) = match side {
        Side::Left => (deficit, 0),
        Side::Right => (0, deficit),
        Side::Center => (deficit / 2, deficit - deficit / 2),
    };
    let mut out = String::with_capacity(s.len() + deficit * pad_char.len_utf8());
    out.extend(std::iter::repeat_n(pad_char, left));
    out.push_str(s);
    out.extend(std::iter::repeat_n(pad_char, right));
    out
}

/// Right-align `s` in `width` with spaces.
#[inline]
#[must_use]
pub fn pad_left(s: &str, width: usize) -> String {
    pad(s, width, Side::Left, ' ')
}

/// Left-align `s` in `width` with spaces.
#[inline]
#[must_use]
pub fn pad_right(s: &str, width: usize) -> String {
    pad(s, width, Side::Right, ' ')
}

/// Center `s` in `width` with spaces, extra space on the right.
#[inline]
#[must_use]
pub fn center(s: &str, width: usize) -> String {
    pad(s, width, Side::Center, ' ')
}

/// Truncate then pad so the result is exactly `width` visible chars.
#[must_use]
pub fn fit(s: &str, width: usize, side: Side) -> String {
    pad(&truncate(s, width), width, side, ' ')
}
