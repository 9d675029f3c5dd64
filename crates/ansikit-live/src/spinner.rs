#![forbid(unsafe_code)]

//! Spinner: an animated glyph beside the message.

use std::time::Duration;

use ansikit_style::Rgb;

use crate::live::{FrameContext, Render};

/// Built-in frame sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpinnerKind {
    Line,
    #[default]
    Dots,
    Arrow,
    Circle,
    Star,
    Box,
    Flip,
    Bar,
    Ascii,
}

impl SpinnerKind {
    #[must_use]
    pub const fn frames(self) -> &'static [&'static str] {
        match self {
            Self::Line | Self::Ascii => &["|", "/", "-", "\\"],
            Self::Dots => &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            Self::Arrow => &["←", "↖", "↑", "↗", "→", "↘", "↓", "↙"],
            Self::Circle => &["◐", "◓", "◑", "◒"],
            Self::Star => &["✶", "✸", "✹", "✺", "✹", "✷"],
            Self::Box => &["▖", "▘", "▝", "▗"],
            Self::Flip => &["_", "_", "_", "-", "`", "`", "'", "´", "-", "_", "_", "_"],
            Self::Bar => &[
                "[    ]", "[=   ]", "[==  ]", "[=== ]", "[====]", "[ ===]", "[  ==]", "[   =]",
            ],
        }
    }

    /// Frame shown at animation `step`.
    #[must_use]
    pub fn frame(self, step: u64) -> &'static str {
        let frames = self.frames();
        frames[(step % frames.len() as u64) as usize]
    }
}

/// An indeterminate spinner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spinner {
    kind: SpinnerKind,
    color: Rgb,
    message_first: bool,
    interval: Duration,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            kind: SpinnerKind::Dots,
            color: Rgb::new(50, 205, 50),
            message_first: true,
            interval: Duration::from_millis(80),
        }
    }

    #[must_use]
    pub fn kind(mut self, kind: SpinnerKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Put the message before the glyph (default) or after it.
    #[must_use]
    pub fn message_first(mut self, on: bool) -> Self {
        self.message_first = on;
        self
    }

    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

impl Render for Spinner {
    fn name(&self) -> &'static str {
        "Spinner"
    }

    fn render(&mut self, ctx: &FrameContext<'_>, out: &mut String) {
        let glyph = ctx.paint(self.color, self.kind.frame(ctx.step));
        let message = ctx.paint(ctx.palette.message, ctx.message);
        match (self.message_first, ctx.message.is_empty()) {
            (_, true) => out.push_str(&glyph),
            (true, false) => {
                out.push_str(&message);
                out.push(' ');
                out.push_str(&glyph);
            }
            (false, false) => {
                out.push_str(&glyph);
                out.push(' ');
                out.push_str(&message);
            }
        }
    }

    fn tick_interval(&self) -> Duration {
        self.interval
    }

    fn initial_indeterminate(&self) -> bool {
        true
    }
}
