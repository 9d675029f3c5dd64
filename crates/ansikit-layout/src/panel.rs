#![forbid(unsafe_code)]

//! Bordered boxes around wrapped text.
//!
//! Text is split on `\n` and wrapped to the inner width, escape-aware, then
//! each line is padded and framed. The title, if any, is drawn into the top
//! border.
//!
//! ```
//! use ansikit_layout::panel::{BoxOptions, render_box};
//!
//! let out = render_box("hello world", &BoxOptions::default().width(9));
//! assert_eq!(out, "┌───────┐\n│hello w│\n│orld   │\n└───────┘");
//! ```

use ansikit_core::terminal_size::{DEFAULT_WIDTH, terminal_width};
use ansikit_style::{Style, apply};
use ansikit_text::{WrapMode, pad_right, repeat, truncate, visible_length, wrap};

use crate::borders::{BorderSet, BorderType};
use crate::columns::Alignment;

/// Settings for [`render_box`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoxOptions {
    /// Outer width, borders included.
    pub width: usize,
    /// Blank rows above and below the content.
    pub padding: usize,
    pub border_type: BorderType,
    /// Style of the border glyphs.
    pub style: Style,
    pub title: Option<String>,
    pub title_alignment: Alignment,
    pub wrap: WrapMode,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            padding: 0,
            border_type: BorderType::Square,
            style: Style::new(),
            title: None,
            title_alignment: Alignment::Center,
            wrap: WrapMode::Char,
        }
    }
}

impl BoxOptions {
    /// Like [`Default`], but as wide as the terminal.
    #[must_use]
    pub fn for_terminal() -> Self {
        Self {
            width: terminal_width(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn padding(mut self, rows: usize) -> Self {
        self.padding = rows;
        self
    }

    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn title_alignment(mut self, alignment: Alignment) -> Self {
        self.title_alignment = alignment;
        self
    }

    #[must_use]
    pub fn wrap(mut self, mode: WrapMode) -> Self {
        self.wrap = mode;
        self
    }
}

/// Frame `text` in a box `options.width` columns wide.
///
/// Lines are joined with `\n`; there is no trailing newline. Widths below 2
/// are raised to 2 (an empty box).
#[must_use]
pub fn render_box(text: &str, options: &BoxOptions) -> String {
    let set = options.border_type.to_border_set();
    let inner = options.width.max(2) - 2;
    let border = |s: &str| apply(&options.style, s);

    let mut lines = Vec::new();
    lines.push(top_border(&set, inner, options));

    let blank = format!(
        "{v}{}{v}",
        repeat(' ', inner),
        v = border(&set.vertical.to_string())
    );
    lines.extend(std::iter::repeat_n(blank.clone(), options.padding));

    if inner > 0 {
        for line in wrap(text, inner, options.wrap) {
            let body = pad_right(&truncate(&line, inner), inner);
            let v = border(&set.vertical.to_string());
            lines.push(format!("{v}{body}{v}"));
        }
    }

    lines.extend(std::iter::repeat_n(blank, options.padding));

    let mut bottom = String::new();
    bottom.push(set.bottom_left);
    bottom.push_str(&repeat(set.horizontal, inner));
    bottom.push(set.bottom_right);
    lines.push(border(&bottom));

    lines.join("\n")
}

fn top_border(set: &BorderSet, inner: usize, options: &BoxOptions) -> String {
    let style = &options.style;
    let title = options
        .title
        .as_deref()
        .filter(|t| !t.is_empty() && inner > 0)
        .map(|t| truncate(t, inner));

    let Some(title) = title else {
        let mut line = String::new();
        line.push(set.top_left);
        line.push_str(&repeat(set.horizontal, inner));
        line.push(set.top_right);
        return apply(style, &line);
    };

    let len = visible_length(&title);
    let free = inner - len;
    let before = match options.title_alignment {
        Alignment::Left => 0,
        Alignment::Center => free / 2,
        Alignment::Right => free,
    };
    let mut left = String::new();
    left.push(set.top_left);
    left.push_str(&repeat(set.horizontal, before));
    let mut right = repeat(set.horizontal, free - before);
    right.push(set.top_right);

    format!("{}{}{}", apply(style, &left), title, apply(style, &right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ansikit_style::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_line() {
        let out = render_box("hi", &BoxOptions::default().width(6));
        assert_eq!(out, "┌────┐\n│hi  │\n└────┘");
    }

    #[test]
    fn empty_text_gives_one_blank_row() {
        let out = render_box("", &BoxOptions::default().width(4));
        assert_eq!(out, "┌──┐\n│  │\n└──┘");
    }

    #[test]
    fn padding_rows() {
        let out = render_box("x", &BoxOptions::default().width(3).padding(1));
        assert_eq!(out, "┌─┐\n│ │\n│x│\n│ │\n└─┘");
    }

    #[test]
    fn explicit_newlines_and_word_wrap() {
        let opts = BoxOptions::default()
            .width(12)
            .wrap(WrapMode::Word)
            .border_type(BorderType::Rounded);
        let out = render_box("one two three\nfour", &opts);
        assert_eq!(
            out,
            "╭──────────╮\n\
             │one two   │\n\
             │three     │\n\
             │four      │\n\
             ╰──────────╯"
        );
    }

    #[test]
    fn styled_text_keeps_frame_aligned() {
        let out = render_box("\x1b[31mred text here\x1b[0m", &BoxOptions::default().width(8));
        for line in out.lines() {
            assert_eq!(visible_length(line), 8, "{line:?}");
        }
    }

    #[test]
    fn border_style_only_on_glyphs() {
        let style = Style::new().fg(Color::rgb(1, 2, 3));
        let out = render_box("ab", &BoxOptions::default().width(4).style(style));
        let middle = out.lines().nth(1).unwrap();
        assert_eq!(middle, "\x1b[38;2;1;2;3m│\x1b[0mab\x1b[38;2;1;2;3m│\x1b[0m");
    }

    #[test]
    fn title_alignments() {
        let base = BoxOptions::default().width(10).title("Hi");
        let top = |o: &BoxOptions| render_box("", o).lines().next().unwrap().to_owned();
        assert_eq!(top(&base), "┌───Hi───┐");
        assert_eq!(top(&base.clone().title_alignment(Alignment::Left)), "┌Hi──────┐");
        assert_eq!(top(&base.clone().title_alignment(Alignment::Right)), "┌──────Hi┐");
    }

    #[test]
    fn long_title_truncated() {
        let out = render_box("", &BoxOptions::default().width(6).title("LongTitle"));
        assert_eq!(out.lines().next().unwrap(), "┌Long┐");
    }

    #[test]
    fn tiny_widths_do_not_panic() {
        assert_eq!(render_box("abc", &BoxOptions::default().width(0)), "┌┐\n└┘");
        assert_eq!(
            render_box("abc", &BoxOptions::default().width(2).title("t")),
            "┌┐\n└┘"
        );
    }
}
