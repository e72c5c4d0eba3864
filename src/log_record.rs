// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type.
//!
//! A [`LogRecord`] is captured once a message passes the level filter and is rendered
//! twice at most: once for the log file and, when mirroring is on, once for the console.
//!
//! # Line format
//!
//! ```text
//! [2024-05-01 13:37:00.042] [main] [INFO]: service started
//! ```
//!
//! The file copy never carries colour codes.  The console copy wraps the thread and level
//! tokens in ANSI colours when the console says it supports them.

use crate::Level;
use chrono::{DateTime, Local};
use std::fmt::{Display, Write};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

const RESET: &str = "\x1b[0m";
const THREAD_COLOR: &str = "\x1b[36m";

/**
A single accepted log message along with the moment and thread it came from.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    level: Level,
    timestamp: DateTime<Local>,
    thread: String,
    message: String,
}

impl LogRecord {
    /**
    Captures the current time and calling thread.
    */
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: Local::now(),
            thread: crate::sys::current_thread_name(),
            message: message.into(),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn thread(&self) -> &str {
        &self.thread
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /**
    Renders the record for a console, optionally with ANSI colours.

    The returned line has no trailing newline.
    */
    pub fn console_line(&self, color: bool) -> String {
        if !color {
            return self.to_string();
        }
        let mut line = String::with_capacity(self.message.len() + 64);
        let _ = write!(
            line,
            "[{}] [{THREAD_COLOR}{}{RESET}] ",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.thread
        );
        match level_color(self.level) {
            Some(color) => {
                let _ = write!(line, "[{color}{}{RESET}]: ", self.level);
            }
            None => {
                let _ = write!(line, "[{}]: ", self.level);
            }
        }
        line.push_str(&self.message);
        line
    }
}

fn level_color(level: Level) -> Option<&'static str> {
    match level {
        Level::Fatal => Some("\x1b[1;31m"),
        Level::Error => Some("\x1b[31m"),
        Level::Warn => Some("\x1b[33m"),
        Level::Debug => Some("\x1b[32m"),
        Level::Trace => Some("\x1b[34m"),
        _ => None,
    }
}

/// The uncoloured line, as written to the log file (without the newline).
impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] [{}] [{}]: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.thread,
            self.level,
            self.message
        )
    }
}
/*
Boilerplate notes for LogRecord:

IMPLEMENTED:
- Debug, Clone: Derived
- PartialEq/Eq/Hash: Derived, records compare by content including the timestamp
- Display: the file representation

NOT IMPLEMENTED:
- Default: a record without a message or a moment makes no sense
- Ord/PartialOrd: ordering lives in the file, not in the record
- Copy: owns heap data
*/

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed(level: Level) -> LogRecord {
        LogRecord {
            level,
            timestamp: Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap()
                + chrono::Duration::milliseconds(42),
            thread: "worker".to_string(),
            message: "hello".to_string(),
        }
    }

    #[test]
    fn file_line_is_zero_padded() {
        assert_eq!(
            fixed(Level::Info).to_string(),
            "[2024-03-07 09:05:01.042] [worker] [INFO]: hello"
        );
    }

    #[test]
    fn console_line_without_color_matches_file() {
        let record = fixed(Level::Warn);
        assert_eq!(record.console_line(false), record.to_string());
    }

    #[test]
    fn console_line_colors_tokens() {
        let line = fixed(Level::Error).console_line(true);
        assert!(line.contains("\x1b[36mworker\x1b[0m"));
        assert!(line.contains("[\x1b[31mERROR\x1b[0m]: hello"));

        let info = fixed(Level::Info).console_line(true);
        assert!(info.contains("[INFO]: hello"));
    }

    #[test]
    fn captures_thread_name() {
        let record = std::thread::Builder::new()
            .name("named".to_string())
            .spawn(|| LogRecord::new(Level::Debug, "x"))
            .unwrap()
            .join()
            .unwrap();
        assert_eq!(record.thread(), "named");
        assert_eq!(record.message(), "x");
    }
}
