#![forbid(unsafe_code)]

//! Single-pass escape scanner.
//!
//! Splits a styled string into alternating escape runs and visible runs
//! without allocating. Recognized escapes:
//!
//! - CSI: `ESC [` parameters, ending at the first final byte (`0x40..=0x7E`),
//!   which is `m` for SGR.
//! - OSC: `ESC ]` payload, ending at BEL or ST (`ESC \`).
//! - Any other `ESC x` pair.
//!
//! An escape cut off by the end of input runs to the end of input.

/// One run of a styled string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A complete escape sequence, `ESC` included.
    Escape(&'a str),
    /// Visible text containing no `ESC`.
    Text(&'a str),
}

impl<'a> Token<'a> {
    /// The underlying slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        match self {
            Self::Escape(s) | Self::Text(s) => s,
        }
    }

    /// True for an SGR sequence (`ESC [ ... m`).
    #[must_use]
    pub fn is_sgr(&self) -> bool {
        matches!(self, Self::Escape(s) if s.starts_with("\x1b[") && s.ends_with('m'))
    }

    /// True for an SGR reset (`ESC [ m` or `ESC [ 0 m`).
    #[must_use]
    pub fn is_sgr_reset(&self) -> bool {
        matches!(self, Self::Escape(s) if *s == "\x1b[0m" || *s == "\x1b[m")
    }

    /// For an OSC 8 hyperlink, whether it opens (`Some(true)`) or closes a link.
    #[must_use]
    pub fn hyperlink_opens(&self) -> Option<bool> {
        let Self::Escape(s) = self else {
            return None;
        };
        let body = s.strip_prefix("\x1b]8;")?;
        let body = body
            .strip_suffix("\x1b\\")
            .or_else(|| body.strip_suffix('\x07'))
            .unwrap_or(body);
        let (_params, uri) = body.split_once(';')?;
        Some(!uri.is_empty())
    }
}

const ESC: u8 = 0x1b;
const BEL: u8 = 0x07;

/// Iterator over the [`Token`]s of a string.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    src: &'a str,
    pos: usize,
}

/// Scan `s` into escape and text runs.
#[must_use]
pub fn tokens(s: &str) -> Tokens<'_> {
    Tokens { src: s, pos: 0 }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.src.as_bytes();
        let start = self.pos;
        if start >= bytes.len() {
            return None;
        }

        if bytes[start] != ESC {
            let end = bytes[start..]
                .iter()
                .position(|&b| b == ESC)
                .map_or(bytes.len(), |off| start + off);
            self.pos = end;
            return Some(Token::Text(&self.src[start..end]));
        }

        let end = escape_end(bytes, start);
        self.pos = end;
        Some(Token::Escape(&self.src[start..end]))
    }
}

/// Byte index one past the escape starting at `start`.
///
/// Always lands on a char boundary: every terminator is ASCII, and an
/// unterminated escape runs to the end.
fn escape_end(bytes: &[u8], start: usize) -> usize {
    let len = bytes.len();
    let Some(&kind) = bytes.get(start + 1) else {
        return len;
    };
    match kind {
        b'[' => bytes[start + 2..]
            .iter()
            .position(|b| (0x40..=0x7e).contains(b))
            .map_or(len, |off| start + 2 + off + 1),
        b']' => {
            let mut i = start + 2;
            while i < len {
                match bytes[i] {
                    BEL => return i + 1,
                    ESC if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
                    _ => i += 1,
                }
            }
            len
        }
        // Two-byte escape; step over a whole char if the follower is not ASCII.
        b if b.is_ascii() => start + 2,
        _ => {
            let mut i = start + 2;
            while i < len && (bytes[i] & 0xC0) == 0x80 {
                i += 1;
            }
            i
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(s: &str) -> Vec<Token<'_>> {
        tokens(s).collect()
    }

    #[test]
    fn plain_text_is_one_run() {
        assert_eq!(collect("hello"), vec![Token::Text("hello")]);
        assert!(collect("").is_empty());
    }

    #[test]
    fn sgr_split() {
        assert_eq!(
            collect("\x1b[31mHi\x1b[0m!"),
            vec![
                Token::Escape("\x1b[31m"),
                Token::Text("Hi"),
                Token::Escape("\x1b[0m"),
                Token::Text("!"),
            ]
        );
    }

    #[test]
    fn unterminated_escape_runs_to_end() {
        assert_eq!(
            collect("ab\x1b[38;2;1"),
            vec![Token::Text("ab"), Token::Escape("\x1b[38;2;1")]
        );
        assert_eq!(collect("\x1b"), vec![Token::Escape("\x1b")]);
    }

    #[test]
    fn osc8_with_st_and_bel() {
        let link = "\x1b]8;;http://x\x1b\\go\x1b]8;;\x07";
        assert_eq!(
            collect(link),
            vec![
                Token::Escape("\x1b]8;;http://x\x1b\\"),
                Token::Text("go"),
                Token::Escape("\x1b]8;;\x07"),
            ]
        );
    }

    #[test]
    fn cursor_movement_is_an_escape() {
        assert_eq!(
            collect("\x1b[2Aup"),
            vec![Token::Escape("\x1b[2A"), Token::Text("up")]
        );
    }

    #[test]
    fn esc_before_multibyte_char_stays_on_boundary() {
        assert_eq!(
            collect("\x1bé!"),
            vec![Token::Escape("\x1bé"), Token::Text("!")]
        );
    }

    #[test]
    fn classification() {
        assert!(Token::Escape("\x1b[1;31m").is_sgr());
        assert!(!Token::Escape("\x1b[2A").is_sgr());
        assert!(Token::Escape("\x1b[0m").is_sgr_reset());
        assert!(Token::Escape("\x1b[m").is_sgr_reset());
        assert!(!Token::Text("\x1b[0m").is_sgr_reset());
        assert_eq!(Token::Escape("\x1b]8;;u\x1b\\").hyperlink_opens(), Some(true));
        assert_eq!(Token::Escape("\x1b]8;;\x1b\\").hyperlink_opens(), Some(false));
        assert_eq!(Token::Escape("\x1b[1m").hyperlink_opens(), None);
    }
}
