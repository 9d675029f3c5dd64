#![forbid(unsafe_code)]

//! Horizontal dividers with an optional centered title.

use std::fmt;

use ansikit_core::terminal_size::{DEFAULT_WIDTH, terminal_width};
use ansikit_style::{Style, apply};
use ansikit_text::{repeat, truncate, visible_length};

/// Draw a `width`-wide line of `line_char`, with `text` centered in it.
///
/// The title gets one space on each side; any odd leftover goes to the
/// right-hand line. A title too long to leave at least one line char per
/// side is cut to `width - 6`.
///
/// ```
/// use ansikit_layout::divider::render_divider;
/// use ansikit_style::Style;
///
/// assert_eq!(render_divider("Title", 20, '-', &Style::new()), "------ Title -------");
/// assert_eq!(render_divider("", 5, '=', &Style::new()), "=====");
/// ```
#[must_use]
pub fn render_divider(text: &str, width: usize, line_char: char, style: &Style) -> String {
    render_with_title_style(text, width, line_char, style, style)
}

fn render_with_title_style(
    text: &str,
    width: usize,
    line_char: char,
    style: &Style,
    title_style: &Style,
) -> String {
    if text.is_empty() || width < 2 {
        return apply(style, &repeat(line_char, width));
    }

    let mut title = text.to_owned();
    if visible_length(&title) + 4 > width {
        title = truncate(&title, width.saturating_sub(6));
    }
    let len = visible_length(&title);
    let fill = width.saturating_sub(len + 2);
    let left = fill / 2;
    let right = fill - left;

    let mut out = apply(style, &repeat(line_char, left));
    out.push(' ');
    out.push_str(&apply(title_style, &title));
    out.push(' ');
    out.push_str(&apply(style, &repeat(line_char, right)));
    out
}

/// Settings for [`Divider`].
#[derive(Debug, Clone, PartialEq)]
pub struct DividerOptions {
    pub width: usize,
    pub line_char: char,
    pub style: Style,
    /// Title style; falls back to `style`.
    pub title_style: Option<Style>,
    /// Surround the line with blank lines.
    pub spacing: bool,
}

impl Default for DividerOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            line_char: '─',
            style: Style::new(),
            title_style: None,
            spacing: true,
        }
    }
}

impl DividerOptions {
    /// Like [`Default`], but as wide as the terminal.
    #[must_use]
    pub fn for_terminal() -> Self {
        Self {
            width: terminal_width(),
            ..Self::default()
        }
    }
}

/// Divider builder.
#[derive(Debug, Clone, Default)]
pub struct Divider {
    title: String,
    options: DividerOptions,
}

impl Divider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn options(mut self, options: DividerOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.options.width = width;
        self
    }

    #[must_use]
    pub fn line_char(mut self, ch: char) -> Self {
        self.options.line_char = ch;
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.options.style = style;
        self
    }

    #[must_use]
    pub fn title_style(mut self, style: Style) -> Self {
        self.options.title_style = Some(style);
        self
    }

    #[must_use]
    pub fn spacing(mut self, on: bool) -> Self {
        self.options.spacing = on;
        self
    }

    #[must_use]
    pub fn render(&self) -> String {
        let opts = &self.options;
        let title_style = opts.title_style.as_ref().unwrap_or(&opts.style);
        let line = render_with_title_style(
            &self.title,
            opts.width,
            opts.line_char,
            &opts.style,
            title_style,
        );
        if opts.spacing {
            format!("\n{line}\n")
        } else {
            line
        }
    }
}

impl fmt::Display for Divider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
