#![forbid(unsafe_code)]

//! Counter: `message [current/total] (NN%)`.

use ansikit_style::Rgb;

use crate::live::{FrameContext, Render};

/// Counts toward a fixed total.
///
/// In determinate mode `current = floor(progress × total)`; in
/// indeterminate mode the count cycles through `0..=total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    total: u64,
    color: Rgb,
    brackets: bool,
    show_percentage: bool,
}

impl Counter {
    /// `total` is raised to at least 1.
    #[must_use]
    pub fn new(total: u64) -> Self {
        Self {
            total: total.max(1),
            color: Rgb::new(255, 215, 0),
            brackets: true,
            show_percentage: true,
        }
    }

    #[must_use]
    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn brackets(mut self, on: bool) -> Self {
        self.brackets = on;
        self
    }

    #[must_use]
    pub fn show_percentage(mut self, on: bool) -> Self {
        self.show_percentage = on;
        self
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Count shown for `progress` (`None` = indeterminate) at `step`.
    #[must_use]
    pub fn current(&self, progress: Option<f64>, step: u64) -> u64 {
        match progress {
            Some(p) => ((p * self.total as f64).floor() as u64).min(self.total),
            None => step % (self.total + 1),
        }
    }
}

impl Render for Counter {
    fn name(&self) -> &'static str {
        "Counter"
    }

    fn render(&mut self, ctx: &FrameContext<'_>, out: &mut String) {
        if !ctx.message.is_empty() {
            out.push_str(&ctx.paint(ctx.palette.message, ctx.message));
            out.push(' ');
        }
        let count = format!("{}/{}", self.current(ctx.progress, ctx.step), self.total);
        let count = if self.brackets {
            format!("[{count}]")
        } else {
            count
        };
        out.push_str(&ctx.paint(self.color, &count));
        if let Some(p) = ctx.progress.filter(|_| self.show_percentage) {
            let percent = (p * 100.0).floor() as u32;
            out.push(' ');
            out.push_str(&ctx.paint(ctx.palette.percentage, &format!("({percent}%)")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Palette;

    fn frame(counter: &mut Counter, message: &str, progress: Option<f64>, step: u64) -> String {
        let palette = Palette::default();
        let ctx = FrameContext::new(message, progress, step, &palette);
        let mut out = String::new();
        counter.render(&ctx, &mut out);
        out
    }

    #[test]
    fn determinate_floor_and_cap() {
        let counter = Counter::new(7);
        assert_eq!(counter.current(Some(0.5), 0), 3);
        assert_eq!(counter.current(Some(1.0), 0), 7);
        assert_eq!(counter.current(Some(0.0), 99), 0);
    }

    #[test]
    fn indeterminate_cycles_through_total() {
        let counter = Counter::new(3);
        let seen: Vec<u64> = (0..6).map(|s| counter.current(None, s)).collect();
        assert_eq!(seen, vec![0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn zero_total_becomes_one() {
        assert_eq!(Counter::new(0).total(), 1);
    }

    #[test]
    fn frame_layout() {
        let mut counter = Counter::new(10);
        assert_eq!(frame(&mut counter, "Files", Some(0.4), 0), "Files [4/10] (40%)");
        assert_eq!(frame(&mut counter, "", None, 12), "[1/10]");
        let mut bare = Counter::new(4).brackets(false).show_percentage(false);
        assert_eq!(frame(&mut bare, "", Some(0.5), 0), "2/4");
    }
}
