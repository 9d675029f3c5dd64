#![forbid(unsafe_code)]

//! Escape-aware line wrapping.
//!
//! Splits styled text into lines of at most `width` visible chars. Graphemes
//! are never split, and SGR state is carried across breaks: a line that ends
//! with a style open gets a reset, and the next line re-opens the style.
//!
//! ```
//! use ansikit_text::wrap::{WrapMode, wrap};
//!
//! let lines = wrap("\x1b[1mabcdef\x1b[0m", 3, WrapMode::Char);
//! assert_eq!(lines, vec!["\x1b[1mabc\x1b[0m", "\x1b[1mdef\x1b[0m"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::scanner::{Token, tokens};

const SGR_RESET: &str = "\x1b[0m";

/// Where lines may break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Break at any grapheme boundary.
    #[default]
    Char,
    /// Break at whitespace; words longer than the width fall back to `Char`.
    Word,
}

/// One visible grapheme plus the escapes that precede it.
#[derive(Debug)]
struct Atom<'a> {
    escapes: Vec<&'a str>,
    grapheme: &'a str,
    len: usize,
    is_space: bool,
}

/// Wrap `text` into lines of at most `width` visible chars.
///
/// Embedded `\n` always breaks. A zero `width` is treated as one so the
/// output stays finite.
#[must_use]
pub fn wrap(text: &str, width: usize, mode: WrapMode) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut active: Vec<String> = Vec::new();
    for line in text.split('\n') {
        wrap_line(line, width, mode, &mut active, &mut out);
    }
    out
}

fn atoms(line: &str) -> (Vec<Atom<'_>>, Vec<&str>) {
    let mut atoms = Vec::new();
    let mut pending: Vec<&str> = Vec::new();
    for token in tokens(line) {
        match token {
            Token::Escape(esc) => pending.push(esc),
            Token::Text(text) => {
                for grapheme in text.graphemes(true) {
                    atoms.push(Atom {
                        escapes: std::mem::take(&mut pending),
                        grapheme,
                        len: grapheme.chars().count(),
                        is_space: grapheme.chars().all(char::is_whitespace),
                    });
                }
            }
        }
    }
    (atoms, pending)
}

/// Tracks SGR sequences that are currently in effect.
fn track(active: &mut Vec<String>, esc: &str) {
    let token = Token::Escape(esc);
    if token.is_sgr_reset() {
        active.clear();
    } else if token.is_sgr() {
        active.push(esc.to_owned());
    }
}

fn wrap_line(
    line: &str,
    width: usize,
    mode: WrapMode,
    active: &mut Vec<String>,
    out: &mut Vec<String>,
) {
    let (atoms, trailing) = atoms(line);
    let breaks = match mode {
        WrapMode::Char => char_breaks(&atoms, width),
        WrapMode::Word => word_breaks(&atoms, width),
    };

    let mut start = 0usize;
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &end in &breaks {
        ranges.push((start, end));
        start = end;
    }
    ranges.push((start, atoms.len()));

    let last = ranges.len() - 1;
    for (i, &(from, to)) in ranges.iter().enumerate() {
        let mut rendered = active.concat();
        let mut visible_end = to;
        if mode == WrapMode::Word {
            let mut len: usize = atoms[from..to].iter().map(|a| a.len).sum();
            while visible_end > from
                && atoms[visible_end - 1].is_space
                && (i != last || len > width)
            {
                visible_end -= 1;
                len -= atoms[visible_end].len;
            }
        }
        let skip_leading = mode == WrapMode::Word && i != 0;
        let mut leading = skip_leading;
        for (idx, atom) in atoms[from..to].iter().enumerate() {
            for esc in &atom.escapes {
                track(active, esc);
                rendered.push_str(esc);
            }
            if leading && atom.is_space {
                continue;
            }
            leading = false;
            if from + idx < visible_end {
                rendered.push_str(atom.grapheme);
            }
        }
        if i == last {
            for esc in &trailing {
                track(active, esc);
                rendered.push_str(esc);
            }
        }
        if !active.is_empty() {
            rendered.push_str(SGR_RESET);
        }
        out.push(rendered);
    }
}

/// Atom indices where a new line starts, breaking anywhere.
fn char_breaks(atoms: &[Atom<'_>], width: usize) -> Vec<usize> {
    let mut breaks = Vec::new();
    let mut used = 0usize;
    for (idx, atom) in atoms.iter().enumerate() {
        if used > 0 && used + atom.len > width {
            breaks.push(idx);
            used = 0;
        }
        used += atom.len;
    }
    breaks
}

/// Atom indices where a new line starts, preferring whitespace.
///
/// Whitespace may overhang the width; it is trimmed when the line is built.
fn word_breaks(atoms: &[Atom<'_>], width: usize) -> Vec<usize> {
    let mut breaks = Vec::new();
    let mut line_start = 0usize;
    let mut used = 0usize;
    let mut last_space: Option<usize> = None;
    for (idx, atom) in atoms.iter().enumerate() {
        if atom.is_space {
            last_space = Some(idx);
        } else if used > 0 && used + atom.len > width {
            match last_space.filter(|&space| space > line_start) {
                Some(space) => {
                    line_start = space + 1;
                    used = atoms[line_start..idx].iter().map(|a| a.len).sum();
                    breaks.push(line_start);
                    if used > 0 && used + atom.len > width {
                        breaks.push(idx);
                        line_start = idx;
                        used = 0;
                    }
                }
                None => {
                    breaks.push(idx);
                    line_start = idx;
                    used = 0;
                }
            }
            last_space = None;
        }
        used += atom.len;
    }
    breaks
}
