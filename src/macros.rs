// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formatting front-ends for [`Logger::log_fmt`](crate::Logger::log_fmt).
//!
//! ```
//! use rotalog::{Duration, Level, Logger};
//!
//! # let dir = tempfile::tempdir().unwrap();
//! let logger = Logger::create(dir.path().join("logs"), Level::All, false, Duration::ZERO, false)
//!     .unwrap();
//! let job = 23;
//! rotalog::info!(logger, "completed job {job} in {:.1}s", 3.4);
//! rotalog::log!(logger, Level::Warn, "queue depth {}", 120);
//!
//! let contents = std::fs::read_to_string(logger.file_path()).unwrap();
//! assert!(contents.contains("[INFO]: completed job 23 in 3.4s"));
//! assert!(contents.contains("[WARN]: queue depth 120"));
//! ```
//!
//! Arguments are only rendered when the level is enabled.

/// Logs at an explicit level: `log!(logger, level, "fmt", args...)`.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_fmt($level, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Fatal, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)+)
    };
}
