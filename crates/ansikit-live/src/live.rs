#![forbid(unsafe_code)]

//! The render loop.
//!
//! A [`Live`] owns one widget renderer and, once started, one background
//! thread that redraws it in place at a fixed cadence:
//!
//! ```text
//!   caller thread                    render thread
//!   ─────────────                    ─────────────
//!   start() ── CAS Idle→Running ──▶  spawn
//!                                    loop while Running:
//!   set_progress / set_message ──▶     snapshot state
//!   (any thread, any time)             render frame (panics caught)
//!                                      \r + frame, flush
//!                                      sleep(interval) ◀── interruptible
//!   stop() ── CAS Running→Stopped
//!          ── wake sleeper
//!          ── wait ≤ join_timeout ◀── exit report
//!          ── write "\n"
//! ```
//!
//! The sink lock is held across the running check and the frame write, and
//! `stop()` writes its newline under the same lock, so no frame can land
//! after `stop()` returns even when the thread had to be detached.

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use ansikit_core::TerminalSink;
use ansikit_core::sink;
use ansikit_style::sgr::{ERASE_BELOW, cursor_up};
use ansikit_style::{ColorProfile, Rgb, Style, apply};
use ansikit_text::{repeat, visible_length};

use crate::config::{DEFAULT_INTERVAL, LiveConfig, Palette};
use crate::signal::{StopSignal, StopTrigger};
use crate::state::{Phase, WidgetState};

/// Produces one frame per tick.
pub trait Render: Send + 'static {
    /// Short name used for the thread name and log fields.
    fn name(&self) -> &'static str;

    /// Append the frame for `ctx` to `out`. No trailing newline.
    fn render(&mut self, ctx: &FrameContext<'_>, out: &mut String);

    fn tick_interval(&self) -> Duration {
        DEFAULT_INTERVAL
    }

    /// Whether the widget starts in indeterminate mode.
    fn initial_indeterminate(&self) -> bool {
        false
    }

    /// Called once with the shared state before the widget runs.
    fn attach(&mut self, _state: &Arc<WidgetState>) {}
}

/// Inputs for rendering one frame.
#[derive(Debug)]
pub struct FrameContext<'a> {
    pub message: &'a str,
    /// `None` in indeterminate mode.
    pub progress: Option<f64>,
    /// Frames rendered so far; drives animations.
    pub step: u64,
    pub palette: &'a Palette,
    pub profile: ColorProfile,
}

impl<'a> FrameContext<'a> {
    /// Context for rendering outside a render loop.
    #[must_use]
    pub fn new(message: &'a str, progress: Option<f64>, step: u64, palette: &'a Palette) -> Self {
        Self {
            message,
            progress,
            step,
            palette,
            profile: ColorProfile::Mono,
        }
    }

    #[must_use]
    pub fn with_profile(mut self, profile: ColorProfile) -> Self {
        self.profile = profile;
        self
    }

    /// `text` in foreground `color`, or plain when colors are off.
    #[must_use]
    pub fn paint(&self, color: Rgb, text: &str) -> String {
        self.style(Style::new().fg(color), text)
    }

    /// `text` in `style`, downgraded to the active profile.
    #[must_use]
    pub fn style(&self, style: Style, text: &str) -> String {
        if self.profile == ColorProfile::Mono || text.is_empty() {
            return text.to_owned();
        }
        apply(&style.downgrade(self.profile), text)
    }
}

struct Worker {
    trigger: StopTrigger,
    done: mpsc::Receiver<io::Result<()>>,
    handle: JoinHandle<()>,
}

type SharedSink = Arc<Mutex<Box<dyn TerminalSink>>>;

/// A widget redrawn in place by a background thread.
///
/// ```no_run
/// use ansikit_live::{Live, ProgressBar};
///
/// let bar = Live::new(ProgressBar::new().width(30)).message("Downloading");
/// bar.start();
/// for i in 0..=100 {
///     bar.set_progress(f64::from(i) / 100.0);
///     std::thread::sleep(std::time::Duration::from_millis(20));
/// }
/// bar.stop()?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Live<R: Render> {
    state: Arc<WidgetState>,
    config: LiveConfig,
    renderer: Mutex<Option<R>>,
    sink: SharedSink,
    worker: Mutex<Option<Worker>>,
}

impl<R: Render> Live<R> {
    /// Render to standard output.
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self::build(renderer, sink::stdout())
    }

    /// Render to `sink`.
    #[must_use]
    pub fn with_sink(renderer: R, sink: impl TerminalSink + 'static) -> Self {
        Self::build(renderer, Box::new(sink))
    }

    fn build(mut renderer: R, sink: Box<dyn TerminalSink>) -> Self {
        let state = Arc::new(WidgetState::new());
        state.set_indeterminate(renderer.initial_indeterminate());
        renderer.attach(&state);
        Self {
            state,
            config: LiveConfig::default(),
            renderer: Mutex::new(Some(renderer)),
            sink: Arc::new(Mutex::new(sink)),
            worker: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn config(mut self, config: LiveConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn message(self, message: impl Into<String>) -> Self {
        self.state.set_message(message);
        self
    }

    /// Shared state, for handing to other threads.
    #[must_use]
    pub fn state(&self) -> &Arc<WidgetState> {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn set_progress(&self, progress: f64) {
        self.state.set_progress(progress);
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.state.set_message(message);
    }

    pub fn set_indeterminate(&self, indeterminate: bool) {
        self.state.set_indeterminate(indeterminate);
    }

    /// Spawn the render thread.
    ///
    /// Returns `false` without side effects when the widget is already
    /// running or has been stopped.
    pub fn start(&self) -> bool {
        let mut worker = lock(&self.worker);
        if !self.state.begin() {
            tracing::trace!(phase = ?self.state.phase(), "start ignored");
            return false;
        }
        let Some(mut renderer) = lock(&self.renderer).take() else {
            self.state.abandon();
            return false;
        };

        let name = renderer.name();
        let interval = self.config.interval.unwrap_or_else(|| renderer.tick_interval());
        let (signal, trigger) = StopSignal::new();
        let (done_tx, done) = mpsc::channel();
        let ctx = LoopContext {
            state: Arc::clone(&self.state),
            sink: Arc::clone(&self.sink),
            signal,
            interval,
            clear_line: self.config.clear_line,
            palette: self.config.palette,
            profile: self.config.profile,
        };

        let spawned = thread::Builder::new()
            .name(format!("ansikit-{}", name.to_lowercase()))
            .spawn(move || {
                let result = run_loop(&mut renderer, &ctx);
                let _ = done_tx.send(result);
            });

        match spawned {
            Ok(handle) => {
                tracing::debug!(
                    widget = name,
                    interval_ms = interval.as_millis() as u64,
                    "render loop started"
                );
                *worker = Some(Worker {
                    trigger,
                    done,
                    handle,
                });
                true
            }
            Err(err) => {
                tracing::error!(widget = name, error = %err, "failed to spawn render thread");
                self.state.abandon();
                false
            }
        }
    }

    /// Stop the render thread and end the line.
    ///
    /// Waits up to `join_timeout` for the thread; past that it is detached
    /// and can no longer write. A no-op unless the widget is running.
    /// Returns the first sink error from the loop or the final newline.
    pub fn stop(&self) -> io::Result<()> {
        if !self.state.finish() {
            return Ok(());
        }
        let started = Instant::now();
        let worker = lock(&self.worker).take();

        let mut result = Ok(());
        if let Some(worker) = worker {
            worker.trigger.stop();
            match worker.done.recv_timeout(self.config.join_timeout) {
                Ok(loop_result) => {
                    let _ = worker.handle.join();
                    result = loop_result;
                }
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!(
                        timeout_ms = self.config.join_timeout.as_millis() as u64,
                        "render thread did not exit in time; detaching"
                    );
                }
                Err(RecvTimeoutError::Disconnected) => {
                    if worker.handle.join().is_err() {
                        tracing::error!("render thread panicked");
                    }
                }
            }
        }

        let mut sink = lock(&self.sink);
        let newline = sink.write_str("\n").and_then(|()| sink.flush());
        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "render loop stopped"
        );
        result.and(newline)
    }
}

impl<R: Render> Drop for Live<R> {
    fn drop(&mut self) {
        if self.state.phase() == Phase::Running {
            if let Err(err) = self.stop() {
                tracing::warn!(error = %err, "stop on drop failed");
            }
        }
    }
}

impl<R: Render> std::fmt::Debug for Live<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Live")
            .field("state", &self.state)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

struct LoopContext {
    state: Arc<WidgetState>,
    sink: SharedSink,
    signal: StopSignal,
    interval: Duration,
    clear_line: bool,
    palette: Palette,
    profile: ColorProfile,
}

/// What survives of the previous frame: enough to overwrite it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct PreviousFrame {
    width: usize,
    lines: usize,
}

fn run_loop<R: Render>(renderer: &mut R, ctx: &LoopContext) -> io::Result<()> {
    let widget = renderer.name();
    let mut frame = String::new();
    let mut prev = PreviousFrame::default();
    let mut step: u64 = 0;

    while ctx.state.is_running() {
        let snap = ctx.state.snapshot();
        let frame_ctx = FrameContext {
            message: &snap.message,
            progress: (!snap.indeterminate).then_some(snap.progress),
            step,
            palette: &ctx.palette,
            profile: ctx.profile,
        };

        frame.clear();
        let rendered = {
            let _span = tracing::debug_span!("widget_render", widget, step).entered();
            panic::catch_unwind(AssertUnwindSafe(|| renderer.render(&frame_ctx, &mut frame)))
        };
        if rendered.is_err() {
            tracing::error!(widget, step, "render callback panicked; ending render loop");
            return Ok(());
        }

        {
            let mut sink = lock(&ctx.sink);
            if !ctx.state.is_running() {
                break;
            }
            let out = overwrite(&frame, &mut prev, ctx.clear_line);
            sink.write_str(&out)?;
            sink.flush()?;
        }

        step = step.wrapping_add(1);
        if ctx.signal.wait_timeout(ctx.interval) {
            break;
        }
    }
    tracing::trace!(widget, frames = step, "render loop exited");
    Ok(())
}

/// Bytes that replace the previous frame with `frame`.
///
/// Single-line frames return to column 0 and pad over leftovers.
/// Multi-line frames move up to the first line and erase below.
fn overwrite(frame: &str, prev: &mut PreviousFrame, clear_line: bool) -> String {
    let lines = frame.matches('\n').count();
    let mut out = String::with_capacity(frame.len() + 16);
    if lines > 0 || prev.lines > 0 {
        out.push_str(&cursor_up(prev.lines));
        out.push('\r');
        out.push_str(ERASE_BELOW);
        out.push_str(frame);
        prev.width = 0;
    } else {
        let width = visible_length(frame);
        out.push('\r');
        out.push_str(frame);
        if clear_line && prev.width > width {
            out.push_str(&repeat(' ', prev.width - width));
        }
        prev.width = width;
    }
    prev.lines = lines;
    out
}

fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
