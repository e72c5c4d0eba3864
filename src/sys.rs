// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform collaborators: clocks, the application data directory, thread names.
//!
//! [`Duration`] is re-exported at the crate root for use with
//! [`LoggerOptions::rotation_period`](crate::LoggerOptions::rotation_period).

use std::path::PathBuf;

pub use std::time::{Duration, Instant};

/// The platform application data root, e.g. `~/.local/share` on Linux.
pub fn data_directory() -> Option<PathBuf> {
    dirs::data_dir()
}

/// Human-readable name of the calling thread.
pub(crate) fn current_thread_name() -> String {
    let thread = std::thread::current();
    match thread.name() {
        Some(name) => name.to_string(),
        None => format!("{:?}", thread.id()),
    }
}
