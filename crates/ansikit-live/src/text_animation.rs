#![forbid(unsafe_code)]

//! Text animations over the current message.
//!
//! Every effect is a pure function of the message and the frame step, so a
//! frame can be reproduced from `(message, step)` alone. Styled messages
//! are animated by visible char; their escape sequences are copied whole.

use std::time::Duration;

use ansikit_style::{ColorProfile, Rgb, SGR_RESET, Style};
use ansikit_text::scanner::{Token, tokens};
use ansikit_text::{repeat, truncate};

use crate::live::{FrameContext, Render};

/// Shortest allowed `max_length`.
pub const MIN_ANIMATION_LENGTH: usize = 10;

const RAINBOW: [Rgb; 7] = [
    Rgb::new(255, 0, 0),
    Rgb::new(255, 127, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(75, 0, 130),
    Rgb::new(148, 0, 211),
];

const GLITCH_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '+', '_', '-', '=', '~', '`', '|', '\\', '/', '<',
    '>', '[', ']', '{', '}',
];

const GLITCH_COLOR: Rgb = Rgb::new(255, 50, 50);

/// Frames the typing cursor pauses at the end before restarting.
const TYPING_PAUSE: usize = 15;

/// Extra cells a slide travels past the text.
const SLIDE_MARGIN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationKind {
    /// Reveal one char per frame behind a `_` cursor.
    #[default]
    Typing,
    /// Cycle each char through seven hues.
    Rainbow,
    /// Pulse between black and white.
    Fade,
    /// Show and hide every ten frames.
    Blink,
    /// Slide in from the left edge and back.
    Slide,
    /// Hop sideways by up to three cells.
    Bounce,
    /// Scramble a few chars for three frames out of every twenty.
    Glitch,
}

/// Animates the widget message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextAnimation {
    kind: AnimationKind,
    max_length: usize,
    interval: Duration,
}

impl Default for TextAnimation {
    fn default() -> Self {
        Self::new(AnimationKind::default())
    }
}

impl TextAnimation {
    #[must_use]
    pub fn new(kind: AnimationKind) -> Self {
        Self {
            kind,
            max_length: 80,
            interval: Duration::from_millis(50),
        }
    }

    /// Chars of the message animated; at least [`MIN_ANIMATION_LENGTH`].
    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length.max(MIN_ANIMATION_LENGTH);
        self
    }

    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    fn typing(ctx: &FrameContext<'_>, text: &str, len: usize, out: &mut String) {
        let pos = (ctx.step % (len + TYPING_PAUSE) as u64) as usize;
        out.push_str(&ctx.paint(ctx.palette.message, &truncate(text, pos.min(len))));
        let cursor_on = pos < len || (ctx.step / 5) % 2 == 0;
        out.push(if cursor_on { '_' } else { ' ' });
    }

    /// Each visible char gets its own hue; the message's escapes pass through.
    fn rainbow(ctx: &FrameContext<'_>, glyphs: &Glyphs, out: &mut String) {
        if ctx.profile == ColorProfile::Mono {
            glyphs.emit(out, |_, ch, out| out.push(ch));
            return;
        }
        glyphs.emit(out, |i, ch, out| {
            let hue = RAINBOW[(i + ctx.step as usize) % RAINBOW.len()];
            out.push_str(&fg_sgr(ctx, hue));
            out.push(ch);
        });
        out.push_str(SGR_RESET);
    }

    fn fade(ctx: &FrameContext<'_>, text: &str, out: &mut String) {
        let level = ((ctx.step as f64 * 0.1).sin().abs() * 255.0) as u8;
        out.push_str(&ctx.paint(Rgb::new(level, level, level), text));
    }

    fn blink(ctx: &FrameContext<'_>, text: &str, len: usize, out: &mut String) {
        if (ctx.step / 10) % 2 == 0 {
            out.push_str(&ctx.paint(ctx.palette.message, text));
        } else {
            out.push_str(&repeat(' ', len));
        }
    }

    fn slide(ctx: &FrameContext<'_>, glyphs: &Glyphs, text: &str, out: &mut String) {
        let len = glyphs.len();
        let travel = len + SLIDE_MARGIN;
        let period = 2 * travel;
        let phase = (ctx.step % period as u64) as usize;
        let pos = if phase < travel { phase } else { period - phase };
        if pos <= len {
            let mut tail = String::new();
            glyphs.emit(&mut tail, |i, ch, tail| {
                if i >= len - pos {
                    tail.push(ch);
                }
            });
            out.push_str(&ctx.paint(ctx.palette.message, &tail));
        } else {
            out.push_str(&repeat(' ', pos - len));
            out.push_str(&ctx.paint(ctx.palette.message, text));
        }
    }

    fn bounce(ctx: &FrameContext<'_>, text: &str, out: &mut String) {
        let offset = ((ctx.step as f64 * 0.2).sin() * 3.0).abs() as usize;
        out.push_str(&repeat(' ', offset));
        out.push_str(&ctx.paint(ctx.palette.message, text));
    }

    fn glitch(ctx: &FrameContext<'_>, glyphs: &Glyphs, text: &str, out: &mut String) {
        let len = glyphs.len();
        let count = (len / 4).min(3);
        if ctx.step % 20 >= 3 || count == 0 {
            out.push_str(&ctx.paint(ctx.palette.message, text));
            return;
        }
        let step = ctx.step as usize;
        let mut scrambled: Vec<Option<char>> = vec![None; len];
        for i in 0..count {
            scrambled[(step + i * 7) % len] = Some(GLITCH_CHARS[(step + i) % GLITCH_CHARS.len()]);
        }

        let colored = ctx.profile != ColorProfile::Mono;
        let base = fg_sgr(ctx, ctx.palette.message);
        out.push_str(&base);
        // SGR state opened by the message itself, restored after each glitch.
        let mut active = String::new();
        for (cell, swap) in glyphs.cells.iter().zip(scrambled) {
            for token in tokens(&cell.lead) {
                if token.is_sgr_reset() {
                    active.clear();
                } else if token.is_sgr() {
                    active.push_str(token.as_str());
                }
            }
            out.push_str(&cell.lead);
            match swap {
                Some(g) if colored => {
                    out.push_str(&fg_sgr(ctx, GLITCH_COLOR));
                    out.push(g);
                    out.push_str(SGR_RESET);
                    out.push_str(&base);
                    out.push_str(&active);
                }
                Some(g) => out.push(g),
                None => out.push(cell.ch),
            }
        }
        out.push_str(&glyphs.trailing);
        if colored {
            out.push_str(SGR_RESET);
        }
    }
}

/// Foreground selector for `color`, empty when colors are off.
fn fg_sgr(ctx: &FrameContext<'_>, color: Rgb) -> String {
    if ctx.profile == ColorProfile::Mono {
        return String::new();
    }
    Style::new().fg(color).downgrade(ctx.profile).sgr()
}

/// One visible char and the escapes written just before it.
#[derive(Debug)]
struct Cell {
    lead: String,
    ch: char,
}

/// A styled message split into visible chars, escapes kept whole.
#[derive(Debug)]
struct Glyphs {
    cells: Vec<Cell>,
    /// Escapes after the last visible char.
    trailing: String,
}

impl Glyphs {
    fn new(text: &str) -> Self {
        let mut cells = Vec::new();
        let mut pending = String::new();
        for token in tokens(text) {
            match token {
                Token::Escape(esc) => pending.push_str(esc),
                Token::Text(run) => {
                    for ch in run.chars() {
                        cells.push(Cell {
                            lead: std::mem::take(&mut pending),
                            ch,
                        });
                    }
                }
            }
        }
        Self {
            cells,
            trailing: pending,
        }
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    /// Write every escape unchanged and hand each visible char to `each`.
    fn emit(&self, out: &mut String, mut each: impl FnMut(usize, char, &mut String)) {
        for (i, cell) in self.cells.iter().enumerate() {
            out.push_str(&cell.lead);
            each(i, cell.ch, out);
        }
        out.push_str(&self.trailing);
    }
}

impl Render for TextAnimation {
    fn name(&self) -> &'static str {
        "TextAnimation"
    }

    fn render(&mut self, ctx: &FrameContext<'_>, out: &mut String) {
        let text = truncate(ctx.message, self.max_length);
        let glyphs = Glyphs::new(&text);
        let len = glyphs.len();
        if len == 0 {
            return;
        }
        match self.kind {
            AnimationKind::Typing => Self::typing(ctx, &text, len, out),
            AnimationKind::Rainbow => Self::rainbow(ctx, &glyphs, out),
            AnimationKind::Fade => Self::fade(ctx, &text, out),
            AnimationKind::Blink => Self::blink(ctx, &text, len, out),
            AnimationKind::Slide => Self::slide(ctx, &glyphs, &text, out),
            AnimationKind::Bounce => Self::bounce(ctx, &text, out),
            AnimationKind::Glitch => Self::glitch(ctx, &glyphs, &text, out),
        }
    }

    fn tick_interval(&self) -> Duration {
        self.interval
    }

    fn initial_indeterminate(&self) -> bool {
        true
    }
}
