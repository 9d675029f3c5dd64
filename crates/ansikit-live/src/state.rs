#![forbid(unsafe_code)]

//! Shared widget state.
//!
//! Every field is stored independently: a mutator touches exactly one field
//! and a reader may observe a mix of old and new values across fields for a
//! single frame. No update is ever torn within a field.

use std::sync::atomic::{AtomicBool, AtomicU8, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Lifecycle of a live widget. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Phase {
    Idle = 0,
    Running = 1,
    Stopped = 2,
}

impl Phase {
    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Idle,
            1 => Self::Running,
            _ => Self::Stopped,
        }
    }
}

/// Values read by the render thread for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub message: Arc<str>,
    pub progress: f64,
    pub indeterminate: bool,
}

/// Progress, message, and mode of a widget, plus its lifecycle phase.
#[derive(Debug)]
pub struct WidgetState {
    phase: AtomicU8,
    indeterminate: AtomicBool,
    /// `f64` bit pattern, always within `[0, 1]`.
    progress: AtomicU64,
    message: Mutex<Arc<str>>,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: AtomicU8::new(Phase::Idle as u8),
            indeterminate: AtomicBool::new(false),
            progress: AtomicU64::new(0f64.to_bits()),
            message: Mutex::new(Arc::from("")),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::from_u8(self.phase.load(Ordering::Acquire))
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase() == Phase::Running
    }

    /// `Idle -> Running`. Only one caller can win.
    pub(crate) fn begin(&self) -> bool {
        self.transition(Phase::Idle, Phase::Running)
    }

    /// `Running -> Stopped`. Only one caller can win.
    pub(crate) fn finish(&self) -> bool {
        self.transition(Phase::Running, Phase::Stopped)
    }

    /// Force `Stopped`, used when the render thread never came up.
    pub(crate) fn abandon(&self) {
        self.phase.store(Phase::Stopped as u8, Ordering::Release);
    }

    fn transition(&self, from: Phase, to: Phase) -> bool {
        self.phase
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Store `progress`, clamped into `[0, 1]`; NaN stores 0.
    pub fn set_progress(&self, progress: f64) {
        let clamped = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        self.progress.store(clamped.to_bits(), Ordering::Release);
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        f64::from_bits(self.progress.load(Ordering::Acquire))
    }

    pub fn set_indeterminate(&self, indeterminate: bool) {
        self.indeterminate.store(indeterminate, Ordering::Release);
    }

    #[must_use]
    pub fn is_indeterminate(&self) -> bool {
        self.indeterminate.load(Ordering::Acquire)
    }

    pub fn set_message(&self, message: impl Into<String>) {
        let message: Arc<str> = Arc::from(message.into());
        *self.lock_message() = message;
    }

    #[must_use]
    pub fn message(&self) -> Arc<str> {
        Arc::clone(&self.lock_message())
    }

    /// Read every field, each independently.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            message: self.message(),
            progress: self.progress(),
            indeterminate: self.is_indeterminate(),
        }
    }

    fn lock_message(&self) -> MutexGuard<'_, Arc<str>> {
        self.message
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
