#![forbid(unsafe_code)]

//! Core: output sinks, terminal capability detection, and terminal width.

pub mod logging;
pub mod sink;
pub mod terminal_capabilities;
pub mod terminal_size;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, trace, warn};

pub use sink::{CaptureSink, TerminalSink};
pub use terminal_capabilities::{TerminalCapabilities, ansi_supported};
pub use terminal_size::terminal_width;
