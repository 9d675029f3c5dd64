#![forbid(unsafe_code)]

//! Escape sequence constants and builders.
//!
//! | Category | Sequence | Description |
//! |----------|----------|-------------|
//! | CSI | `ESC [ n ; n m` | SGR (Select Graphic Rendition) |
//! | CSI | `ESC [ n A` | Cursor up |
//! | CSI | `ESC [ J` | Erase to end of display |
//! | OSC | `ESC ] 8 ; ; url ST` | Hyperlink (OSC 8) |

use crate::style::StyleFlags;

/// SGR reset: `CSI 0 m`
pub const SGR_RESET: &str = "\x1b[0m";

/// Erase from cursor to end of display: `CSI J`
pub const ERASE_BELOW: &str = "\x1b[J";

/// Close an open OSC 8 hyperlink.
pub const HYPERLINK_END: &str = "\x1b]8;;\x1b\\";

/// SGR attribute codes for style flags.
#[derive(Debug, Clone, Copy)]
pub struct SgrCodes {
    /// Enable code
    pub on: u8,
    /// Disable code
    pub off: u8,
}

/// Ordered table of (flag, on/off codes) for iteration.
pub const FLAG_TABLE: [(StyleFlags, SgrCodes); 8] = [
    (StyleFlags::BOLD, SgrCodes { on: 1, off: 22 }),
    (StyleFlags::DIM, SgrCodes { on: 2, off: 22 }),
    (StyleFlags::ITALIC, SgrCodes { on: 3, off: 23 }),
    (StyleFlags::UNDERLINE, SgrCodes { on: 4, off: 24 }),
    (StyleFlags::BLINK, SgrCodes { on: 5, off: 25 }),
    (StyleFlags::REVERSE, SgrCodes { on: 7, off: 27 }),
    (StyleFlags::HIDDEN, SgrCodes { on: 8, off: 28 }),
    (StyleFlags::STRIKETHROUGH, SgrCodes { on: 9, off: 29 }),
];

/// Build `ESC [ p1 ; p2 ; ... m`. Empty params yield an empty string.
#[must_use]
pub fn sgr<S: AsRef<str>>(params: &[S]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(4 + params.len() * 4);
    out.push_str("\x1b[");
    for (i, p) in params.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        out.push_str(p.as_ref());
    }
    out.push('m');
    out
}

/// Move the cursor up `n` lines (`CSI n A`); empty for zero.
#[must_use]
pub fn cursor_up(n: usize) -> String {
    if n == 0 {
        String::new()
    } else {
        format!("\x1b[{n}A")
    }
}

/// Wrap `text` in an OSC 8 hyperlink to `url`.
///
/// Format: `OSC 8 ; ; url ST text OSC 8 ; ; ST`, with ST = `ESC \`.
#[must_use]
pub fn hyperlink(url: &str, text: &str) -> String {
    format!("\x1b]8;;{url}\x1b\\{text}{HYPERLINK_END}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sgr_joins_params() {
        assert_eq!(sgr(&["1", "31"]), "\x1b[1;31m");
        assert_eq!(sgr::<&str>(&[]), "");
    }

    #[test]
    fn cursor_up_zero_is_empty() {
        assert_eq!(cursor_up(0), "");
        assert_eq!(cursor_up(3), "\x1b[3A");
    }

    #[test]
    fn hyperlink_format() {
        assert_eq!(
            hyperlink("https://example.com", "site"),
            "\x1b]8;;https://example.com\x1b\\site\x1b]8;;\x1b\\"
        );
    }

    #[test]
    fn flag_table_codes_are_distinct() {
        let mut on: Vec<u8> = FLAG_TABLE.iter().map(|(_, c)| c.on).collect();
        on.dedup();
        assert_eq!(on.len(), 8);
    }
}
