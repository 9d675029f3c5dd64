#![forbid(unsafe_code)]

//! Live widgets: progress bars, spinners, counters, task lists and text
//! animations redrawn in place by a background thread.
//!
//! Each widget is a [`Render`] implementation wrapped in a [`Live`], which
//! owns the shared [`WidgetState`] and the render thread. Any thread may
//! update progress and message while the widget runs; `stop()` ends the
//! line and returns within the configured join timeout.
//!
//! # Example
//! ```no_run
//! use ansikit_live::{Live, Spinner, SpinnerKind};
//!
//! let spinner = Live::new(Spinner::new().kind(SpinnerKind::Line)).message("Working");
//! spinner.start();
//! std::thread::sleep(std::time::Duration::from_millis(500));
//! spinner.set_message("Almost done");
//! spinner.stop()?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod config;
pub mod counter;
pub mod live;
pub mod progress;
mod signal;
pub mod spinner;
pub mod state;
pub mod task_list;
pub mod text_animation;

pub use config::{DEFAULT_INTERVAL, DEFAULT_JOIN_TIMEOUT, LiveConfig, Palette};
pub use counter::Counter;
pub use live::{FrameContext, Live, Render};
pub use progress::{BarChars, MIN_BAR_WIDTH, ProgressBar};
pub use spinner::{Spinner, SpinnerKind};
pub use state::{Phase, Snapshot, WidgetState};
pub use task_list::{TaskBoard, TaskList, TaskStatus, TaskSymbols};
pub use text_animation::{AnimationKind, MIN_ANIMATION_LENGTH, TextAnimation};
