#![forbid(unsafe_code)]

//! ansikit public facade.
//!
//! Re-exports the styling, measuring, layout, and live-widget crates under
//! one name, plus a small prelude for everyday use.
//!
//! ```
//! use ansikit::prelude::*;
//!
//! let title = apply(&Style::new().bold(), "Report");
//! let table = Table::new()
//!     .header(["Name", "Size"])
//!     .row(["a.txt", "12K"])
//!     .render();
//! assert_eq!(visible_length(&title), 6);
//! assert!(table.starts_with('┌'));
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use ansikit_core::logging;
pub use ansikit_core::sink;
pub use ansikit_core::terminal_capabilities::DetectInputs;
pub use ansikit_core::{
    CaptureSink, TerminalCapabilities, TerminalSink, ansi_supported, terminal_width,
};

// --- Style re-exports ------------------------------------------------------

pub use ansikit_style::{
    Ansi16, Color, ColorParseError, ColorProfile, Rgb, SGR_RESET, Style, StyleFlags, apply,
    apply_safe, apply_safe_with, hyperlink,
};

// --- Text re-exports -------------------------------------------------------

pub use ansikit_text::{
    Side, WrapMode, center, display_width, fit, pad, pad_left, pad_right, strip_ansi, truncate,
    visible_length, wrap,
};

// --- Layout re-exports -----------------------------------------------------

pub use ansikit_layout::{
    Alignment, BorderSet, BorderType, BoxOptions, ColumnSpec, Divider, DividerOptions,
    LayoutBudget, Table, TableOptions, TreeBuildOptions, TreeGuides, TreeNode, TreeOptions,
    compute_column_widths, render_box, render_divider, render_table, render_tree,
};

// --- Live re-exports -------------------------------------------------------

#[cfg(feature = "live")]
pub use ansikit_live::{
    AnimationKind, BarChars, Counter, FrameContext, Live, LiveConfig, Palette, Phase,
    ProgressBar, Render, Spinner, SpinnerKind, TaskBoard, TaskList, TaskStatus, TaskSymbols,
    TextAnimation, WidgetState,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for ansikit callers.
#[derive(Debug)]
pub enum Error {
    /// Writing to the terminal failed.
    Io(std::io::Error),
    /// A color string did not parse.
    ColorParse(ColorParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::ColorParse(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::ColorParse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ColorParseError> for Error {
    fn from(err: ColorParseError) -> Self {
        Self::ColorParse(err)
    }
}

/// Standard result type for ansikit APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Alignment, BorderType, BoxOptions, Color, ColorProfile, Divider, Error, Result, Rgb,
        Style, Table, TreeNode, TreeOptions, apply, render_box, render_tree, truncate,
        visible_length,
    };

    #[cfg(feature = "live")]
    pub use crate::{
        AnimationKind, Counter, Live, LiveConfig, ProgressBar, Spinner, SpinnerKind, TaskList,
        TextAnimation,
    };
}
