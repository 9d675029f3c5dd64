#![forbid(unsafe_code)]

//! Render loop configuration.

use std::time::Duration;

use ansikit_style::{ColorProfile, Rgb};

/// Tick interval used when a widget does not ask for its own.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// How long `stop()` waits for the render thread before detaching it.
pub const DEFAULT_JOIN_TIMEOUT: Duration = Duration::from_secs(1);

/// Colors shared by the built-in widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub message: Rgb,
    /// Filled part of a bar, spinner glyphs.
    pub progress: Rgb,
    /// Unfilled part of a bar.
    pub remaining: Rgb,
    pub percentage: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            message: Rgb::new(255, 255, 255),
            progress: Rgb::new(50, 205, 50),
            remaining: Rgb::new(100, 100, 100),
            percentage: Rgb::new(255, 215, 0),
        }
    }
}

/// Settings for a [`Live`](crate::Live) widget.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveConfig {
    /// Overrides the widget's own tick interval.
    pub interval: Option<Duration>,
    pub join_timeout: Duration,
    /// Pad over leftovers when a frame is narrower than the previous one.
    pub clear_line: bool,
    /// Color depth for frames; `Mono` renders plain text.
    pub profile: ColorProfile,
    pub palette: Palette,
}

impl Default for LiveConfig {
    /// Colors follow the attached terminal.
    fn default() -> Self {
        Self {
            interval: None,
            join_timeout: DEFAULT_JOIN_TIMEOUT,
            clear_line: true,
            profile: ColorProfile::detect(),
            palette: Palette::default(),
        }
    }
}

impl LiveConfig {
    /// Defaults without color, independent of the environment.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            profile: ColorProfile::Mono,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    #[must_use]
    pub fn join_timeout(mut self, timeout: Duration) -> Self {
        self.join_timeout = timeout;
        self
    }

    #[must_use]
    pub fn clear_line(mut self, on: bool) -> Self {
        self.clear_line = on;
        self
    }

    #[must_use]
    pub fn profile(mut self, profile: ColorProfile) -> Self {
        self.profile = profile;
        self
    }

    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}
