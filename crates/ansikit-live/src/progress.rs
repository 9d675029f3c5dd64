#![forbid(unsafe_code)]

//! Progress bar: `message [█████▓░░░░] 50%`.

use ansikit_text::repeat;

use crate::live::{FrameContext, Render};

/// Narrowest bar, in cells between the brackets.
pub const MIN_BAR_WIDTH: usize = 5;

/// Glyphs for the three parts of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarChars {
    pub complete: char,
    pub remaining: char,
    /// Edge of the filled part; the moving block in indeterminate mode.
    pub leading: char,
}

impl BarChars {
    pub const BLOCKS: Self = Self {
        complete: '█',
        remaining: '░',
        leading: '▓',
    };

    pub const ASCII: Self = Self {
        complete: '=',
        remaining: ' ',
        leading: '>',
    };
}

impl Default for BarChars {
    fn default() -> Self {
        Self::BLOCKS
    }
}

/// A determinate or bouncing progress bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressBar {
    width: usize,
    chars: BarChars,
    show_percentage: bool,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressBar {
    /// A 40-cell block bar with a percentage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: 40,
            chars: BarChars::BLOCKS,
            show_percentage: true,
        }
    }

    /// Cells between the brackets; at least [`MIN_BAR_WIDTH`].
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width.max(MIN_BAR_WIDTH);
        self
    }

    #[must_use]
    pub fn chars(mut self, chars: BarChars) -> Self {
        self.chars = chars;
        self
    }

    #[must_use]
    pub fn ascii(self) -> Self {
        self.chars(BarChars::ASCII)
    }

    #[must_use]
    pub fn show_percentage(mut self, on: bool) -> Self {
        self.show_percentage = on;
        self
    }

    #[must_use]
    pub fn bar_width(&self) -> usize {
        self.width
    }

    fn determinate(&self, ctx: &FrameContext<'_>, progress: f64, out: &mut String) {
        let width = self.width;
        let mut complete = ((width as f64) * progress).floor() as usize;
        if progress > 0.0 && complete == 0 {
            complete = 1;
        }
        complete = complete.min(width);
        let leading = progress > 0.0 && progress < 1.0 && complete < width;
        let remaining = width - complete - usize::from(leading);

        let palette = ctx.palette;
        out.push_str(&ctx.paint(palette.progress, &repeat(self.chars.complete, complete)));
        if leading {
            out.push_str(&ctx.paint(palette.progress, &self.chars.leading.to_string()));
        }
        out.push_str(&ctx.paint(palette.remaining, &repeat(self.chars.remaining, remaining)));
    }

    /// A single leading char bouncing between the ends.
    fn indeterminate(&self, ctx: &FrameContext<'_>, out: &mut String) {
        let width = self.width;
        let period = 2 * (width - 1);
        let phase = (ctx.step % period as u64) as usize;
        let pos = if phase < width { phase } else { period - phase };

        let palette = ctx.palette;
        out.push_str(&ctx.paint(palette.remaining, &repeat(self.chars.remaining, pos)));
        out.push_str(&ctx.paint(palette.progress, &self.chars.leading.to_string()));
        out.push_str(&ctx.paint(palette.remaining, &repeat(self.chars.remaining, width - pos - 1)));
    }
}

impl Render for ProgressBar {
    fn name(&self) -> &'static str {
        "ProgressBar"
    }

    fn render(&mut self, ctx: &FrameContext<'_>, out: &mut String) {
        if !ctx.message.is_empty() {
            out.push_str(&ctx.paint(ctx.palette.message, ctx.message));
            out.push(' ');
        }
        out.push('[');
        match ctx.progress {
            Some(p) => self.determinate(ctx, p, out),
            None => self.indeterminate(ctx, out),
        }
        out.push(']');
        if let Some(p) = ctx.progress.filter(|_| self.show_percentage) {
            let percent = (p * 100.0).floor() as u32;
            out.push(' ');
            out.push_str(&ctx.paint(ctx.palette.percentage, &format!("{percent}%")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Palette;
    use ansikit_style::ColorProfile;
    use ansikit_text::{strip_ansi, visible_length};

    fn frame(bar: &mut ProgressBar, message: &str, progress: Option<f64>, step: u64) -> String {
        let palette = Palette::default();
        let ctx = FrameContext::new(message, progress, step, &palette);
        let mut out = String::new();
        bar.render(&ctx, &mut out);
        out
    }

    #[test]
    fn half_way_on_ten_cells() {
        let mut bar = ProgressBar::new().width(10);
        let out = frame(&mut bar, "", Some(0.5), 0);
        assert_eq!(out, "[█████▓░░░░] 50%");
        assert_eq!(out.matches('█').count(), 5);
    }

    #[test]
    fn empty_and_full() {
        let mut bar = ProgressBar::new().width(5);
        assert_eq!(frame(&mut bar, "", Some(0.0), 0), "[░░░░░] 0%");
        assert_eq!(frame(&mut bar, "", Some(1.0), 0), "[█████] 100%");
    }

    #[test]
    fn tiny_progress_shows_one_cell() {
        let mut bar = ProgressBar::new().width(10);
        assert_eq!(frame(&mut bar, "", Some(0.01), 0), "[█▓░░░░░░░░] 1%");
    }

    #[test]
    fn nearly_full_has_no_room_for_leading() {
        let mut bar = ProgressBar::new().width(5).show_percentage(false);
        assert_eq!(frame(&mut bar, "", Some(0.99), 0), "[████▓]");
    }

    #[test]
    fn width_has_a_floor() {
        assert_eq!(ProgressBar::new().width(1).bar_width(), MIN_BAR_WIDTH);
    }

    #[test]
    fn message_and_ascii() {
        let mut bar = ProgressBar::new().width(6).ascii();
        assert_eq!(frame(&mut bar, "Copy", Some(0.5), 0), "Copy [===>  ] 50%");
    }

    #[test]
    fn indeterminate_bounces() {
        let mut bar = ProgressBar::new().width(5).ascii();
        let positions: Vec<usize> = (0..10)
            .map(|step| frame(&mut bar, "", None, step).find('>').unwrap() - 1)
            .collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4, 3, 2, 1, 0, 1]);
        assert!(!frame(&mut bar, "", None, 0).contains('%'));
    }

    #[test]
    fn colored_frame_keeps_width() {
        let palette = Palette::default();
        let ctx = FrameContext::new("msg", Some(0.3), 0, &palette)
            .with_profile(ColorProfile::TrueColor);
        let mut out = String::new();
        ProgressBar::new().width(20).render(&ctx, &mut out);
        assert!(out.contains("\x1b[38;2;50;205;50m"));
        let expected = format!("msg [{}▓{}] 30%", "█".repeat(6), "░".repeat(13));
        assert_eq!(strip_ansi(&out), expected);
        assert_eq!(visible_length(&out), 30);
    }
}
