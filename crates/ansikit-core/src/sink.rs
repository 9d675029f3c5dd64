#![forbid(unsafe_code)]

//! Output sinks.
//!
//! Widgets never write to stdout directly. Output goes through a
//! [`TerminalSink`], which is implemented for every `io::Write + Send`
//! type (stdout, stderr, files, sockets) and for the in-memory
//! [`CaptureSink`] used in tests and headless runs.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// Destination for rendered text.
pub trait TerminalSink: Send {
    /// Write `s` verbatim, escape sequences included.
    fn write_str(&mut self, s: &str) -> io::Result<()>;

    /// Push buffered output to the terminal.
    fn flush(&mut self) -> io::Result<()>;
}

impl<W: Write + Send> TerminalSink for W {
    #[inline]
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.write_all(s.as_bytes())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Write::flush(self)
    }
}

/// Boxed sink writing to standard output.
#[must_use]
pub fn stdout() -> Box<dyn TerminalSink> {
    Box::new(io::stdout())
}

/// Boxed sink writing to standard error.
#[must_use]
pub fn stderr() -> Box<dyn TerminalSink> {
    Box::new(io::stderr())
}

/// In-memory sink whose clones share one buffer.
///
/// Hand one clone to a widget and keep another to inspect what was written.
#[derive(Clone, Default)]
pub struct CaptureSink {
    buf: Arc<Mutex<Vec<u8>>>,
    flushes: Arc<Mutex<usize>>,
}

impl CaptureSink {
    /// Create an empty capture buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&lock(&self.buf)).into_owned()
    }

    /// Drain and return the buffer.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *lock(&self.buf));
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.buf).len()
    }

    /// True when nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many times `flush` was called.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        *lock(&self.flushes)
    }
}

impl Write for CaptureSink {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        lock(&self.buf).extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        *lock(&self.flushes) += 1;
        Ok(())
    }
}

impl std::fmt::Debug for CaptureSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CaptureSink").field(&self.len()).finish()
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
