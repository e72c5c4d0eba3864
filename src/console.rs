// SPDX-License-Identifier: MIT OR Apache-2.0

//! Console mirrors.
//!
//! When console mirroring is enabled, every accepted record is also handed to a
//! [`Console`].  [`StdoutConsole`] is the default; [`InMemoryConsole`] captures lines so
//! they can be examined programmatically, which is mostly useful in tests.

use crate::log_record::LogRecord;
use std::fmt::Debug;
use std::io::{IsTerminal, Write};
use std::sync::{Mutex, PoisonError};

pub trait Console: Debug + Send + Sync {
    /**
    Writes one rendered line.  The line has no trailing newline.

    Called with the logger's lock held, so lines from one logger never interleave.
    */
    fn write_line(&self, line: &str);

    /**
    Receives each accepted record.

    The default renders the record, coloured when [`Self::supports_color`] says so, and
    hands it to [`Self::write_line`].  Override it to route or filter on the record's
    fields instead of on text.
    */
    fn write_record(&self, record: &LogRecord) {
        self.write_line(&record.console_line(self.supports_color()));
    }

    /**
    Whether ANSI colour codes should be added to lines for this console.
    */
    fn supports_color(&self) -> bool {
        false
    }
}

/**
Writes to stdout, coloured when stdout is a terminal.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StdoutConsole {}

impl StdoutConsole {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Console for StdoutConsole {
    fn write_line(&self, line: &str) {
        let mut lock = std::io::stdout().lock();
        // A closed stdout must not take the file copy down with it.
        let _ = lock.write_all(line.as_bytes());
        let _ = lock.write_all(b"\n");
        let _ = lock.flush();
    }

    fn supports_color(&self) -> bool {
        std::io::stdout().is_terminal()
    }
}

/// A console that keeps lines in memory.
///
/// # Example
///
/// ```rust
/// use rotalog::{InMemoryConsole, Level, LoggerOptions};
/// use std::sync::Arc;
///
/// # let dir = tempfile::tempdir().unwrap();
/// let console = Arc::new(InMemoryConsole::new());
/// let logger = LoggerOptions::new(dir.path())
///     .console(console.clone())
///     .open()
///     .unwrap();
///
/// logger.log(Level::Warn, "disk almost full");
/// assert!(console.drain_logs().contains("[WARN]: disk almost full"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryConsole {
    lines: Mutex<Vec<String>>,
}

impl InMemoryConsole {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Drains all lines into a single newline-joined string, clearing the buffer.
    pub fn drain_logs(&self) -> String {
        let mut lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        let result = lines.join("\n");
        lines.clear();
        result
    }

    /// Number of lines currently buffered.
    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Console for InMemoryConsole {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_clears() {
        let console = InMemoryConsole::new();
        console.write_line("one");
        console.write_line("two");
        assert_eq!(console.len(), 2);
        assert_eq!(console.drain_logs(), "one\ntwo");
        assert!(console.is_empty());
        assert_eq!(console.drain_logs(), "");
    }

    #[test]
    fn in_memory_console_is_uncoloured() {
        assert!(!InMemoryConsole::new().supports_color());
    }
}
