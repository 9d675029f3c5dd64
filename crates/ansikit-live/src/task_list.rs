#![forbid(unsafe_code)]

//! Task list: one status line per task under the message.
//!
//! Statuses live on a shared [`TaskBoard`] so any thread can update them
//! while the list is rendering. Every status change recomputes overall
//! progress as `completed / total`.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use ansikit_style::Rgb;

use crate::live::{FrameContext, Render};
use crate::state::WidgetState;

/// Glyphs cycled by tasks in progress.
const IN_PROGRESS_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum TaskStatus {
    #[default]
    Pending = 0,
    InProgress = 1,
    Complete = 2,
    Failed = 3,
}

impl TaskStatus {
    const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::InProgress,
            2 => Self::Complete,
            3 => Self::Failed,
            _ => Self::Pending,
        }
    }

    #[must_use]
    pub const fn color(self) -> Rgb {
        match self {
            Self::Pending => Rgb::new(150, 150, 150),
            Self::InProgress => Rgb::new(0, 191, 255),
            Self::Complete => Rgb::new(50, 205, 50),
            Self::Failed => Rgb::new(255, 69, 0),
        }
    }
}

/// One glyph per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSymbols {
    pub pending: &'static str,
    /// Shown only when animation is off; in-progress tasks normally spin.
    pub in_progress: &'static str,
    pub complete: &'static str,
    pub failed: &'static str,
}

impl TaskSymbols {
    pub const UNICODE: Self = Self {
        pending: "○",
        in_progress: "◔",
        complete: "●",
        failed: "✗",
    };

    pub const ASCII: Self = Self {
        pending: "-",
        in_progress: ">",
        complete: "+",
        failed: "x",
    };

    #[must_use]
    pub const fn get(&self, status: TaskStatus) -> &'static str {
        match status {
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Complete => self.complete,
            TaskStatus::Failed => self.failed,
        }
    }
}

impl Default for TaskSymbols {
    fn default() -> Self {
        Self::UNICODE
    }
}

/// Thread-safe task statuses.
#[derive(Debug)]
pub struct TaskBoard {
    labels: Vec<String>,
    statuses: Vec<AtomicU8>,
    state: OnceLock<Arc<WidgetState>>,
}

impl TaskBoard {
    fn new(labels: Vec<String>) -> Self {
        let statuses = labels
            .iter()
            .map(|_| AtomicU8::new(TaskStatus::Pending as u8))
            .collect();
        Self {
            labels,
            statuses,
            state: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn status(&self, index: usize) -> Option<TaskStatus> {
        self.statuses
            .get(index)
            .map(|s| TaskStatus::from_u8(s.load(Ordering::Acquire)))
    }

    /// Set a task's status. Out-of-range indices are ignored and return
    /// `false`.
    pub fn set_status(&self, index: usize, status: TaskStatus) -> bool {
        let Some(slot) = self.statuses.get(index) else {
            tracing::debug!(index, tasks = self.len(), "task index out of range");
            return false;
        };
        slot.store(status as u8, Ordering::Release);
        if let Some(state) = self.state.get() {
            state.set_progress(self.progress());
        }
        true
    }

    pub fn start_task(&self, index: usize) -> bool {
        self.set_status(index, TaskStatus::InProgress)
    }

    pub fn complete_task(&self, index: usize) -> bool {
        self.set_status(index, TaskStatus::Complete)
    }

    pub fn fail_task(&self, index: usize) -> bool {
        self.set_status(index, TaskStatus::Failed)
    }

    #[must_use]
    pub fn count(&self, status: TaskStatus) -> usize {
        (0..self.len())
            .filter(|&i| self.status(i) == Some(status))
            .count()
    }

    /// `completed / total`; 0 for an empty board.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.count(TaskStatus::Complete) as f64 / self.len() as f64
    }

    fn attach(&self, state: &Arc<WidgetState>) {
        if self.state.set(Arc::clone(state)).is_ok() {
            state.set_progress(self.progress());
        }
    }
}

/// A multi-line list of tasks with live statuses.
#[derive(Debug, Clone)]
pub struct TaskList {
    board: Arc<TaskBoard>,
    symbols: TaskSymbols,
    compact: bool,
}

impl TaskList {
    /// Empty labels are skipped.
    #[must_use]
    pub fn new<I, S>(tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels = tasks
            .into_iter()
            .map(Into::into)
            .filter(|label: &String| !label.is_empty())
            .collect();
        Self {
            board: Arc::new(TaskBoard::new(labels)),
            symbols: TaskSymbols::UNICODE,
            compact: false,
        }
    }

    /// Handle for updating statuses from any thread.
    #[must_use]
    pub fn board(&self) -> Arc<TaskBoard> {
        Arc::clone(&self.board)
    }

    #[must_use]
    pub fn symbols(mut self, symbols: TaskSymbols) -> Self {
        self.symbols = symbols;
        self
    }

    #[must_use]
    pub fn ascii(self) -> Self {
        self.symbols(TaskSymbols::ASCII)
    }

    /// All status glyphs on one line, without labels.
    #[must_use]
    pub fn compact(mut self, on: bool) -> Self {
        self.compact = on;
        self
    }

    fn glyph(&self, status: TaskStatus, step: u64) -> &'static str {
        if status == TaskStatus::InProgress {
            IN_PROGRESS_FRAMES[(step % IN_PROGRESS_FRAMES.len() as u64) as usize]
        } else {
            self.symbols.get(status)
        }
    }
}

impl Render for TaskList {
    fn name(&self) -> &'static str {
        "TaskList"
    }

    fn render(&mut self, ctx: &FrameContext<'_>, out: &mut String) {
        if !ctx.message.is_empty() {
            out.push_str(&ctx.paint(ctx.palette.message, ctx.message));
            out.push('\n');
        }
        let board = &self.board;
        for i in 0..board.len() {
            let status = board.status(i).unwrap_or_default();
            let glyph = ctx.paint(status.color(), self.glyph(status, ctx.step));
            if self.compact {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(&glyph);
            } else {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&glyph);
                out.push(' ');
                out.push_str(&ctx.paint(ctx.palette.message, board.label(i).unwrap_or("")));
            }
        }
    }

    fn tick_interval(&self) -> Duration {
        Duration::from_millis(100)
    }

    fn attach(&mut self, state: &Arc<WidgetState>) {
        self.board.attach(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Palette;

    fn frame(list: &mut TaskList, message: &str, step: u64) -> String {
        let palette = Palette::default();
        let ctx = FrameContext::new(message, None, step, &palette);
        let mut out = String::new();
        list.render(&ctx, &mut out);
        out
    }

    // --- TaskBoard tests ---

    #[test]
    fn empty_labels_skipped() {
        let list = TaskList::new(["a", "", "b"]);
        assert_eq!(list.board().len(), 2);
        assert_eq!(list.board().label(1), Some("b"));
    }

    #[test]
    fn status_updates_and_counts() {
        let list = TaskList::new(["a", "b", "c", "d"]);
        let board = list.board();
        assert!(board.complete_task(0));
        assert!(board.fail_task(1));
        assert!(board.start_task(2));
        assert!(!board.set_status(9, TaskStatus::Complete));
        assert_eq!(board.status(0), Some(TaskStatus::Complete));
        assert_eq!(board.status(3), Some(TaskStatus::Pending));
        assert_eq!(board.count(TaskStatus::Failed), 1);
        assert_eq!(board.progress(), 0.25);
    }

    #[test]
    fn attached_state_tracks_completion() {
        let mut list = TaskList::new(["a", "b"]);
        let state = Arc::new(WidgetState::new());
        list.attach(&state);
        assert_eq!(state.progress(), 0.0);
        list.board().complete_task(1);
        assert_eq!(state.progress(), 0.5);
        list.board().complete_task(0);
        assert_eq!(state.progress(), 1.0);
    }

    #[test]
    fn empty_board_progress_is_zero() {
        assert_eq!(TaskList::new(Vec::<String>::new()).board().progress(), 0.0);
    }

    // --- Render tests ---

    #[test]
    fn detailed_frame() {
        let mut list = TaskList::new(["fetch", "build", "test", "ship"]);
        let board = list.board();
        board.complete_task(0);
        board.start_task(1);
        board.fail_task(3);
        assert_eq!(
            frame(&mut list, "Pipeline", 1),
            "Pipeline\n● fetch\n/ build\n○ test\n✗ ship"
        );
    }

    #[test]
    fn compact_ascii_frame() {
        let mut list = TaskList::new(["a", "b", "c"]).ascii().compact(true);
        list.board().complete_task(0);
        list.board().start_task(2);
        assert_eq!(frame(&mut list, "", 2), "+ - -");
        assert_eq!(frame(&mut list, "", 3), "+ - \\");
    }
}
