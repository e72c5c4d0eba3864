// SPDX-License-Identifier: MIT OR Apache-2.0
use std::path::PathBuf;

/**
Errors returned when a [`Logger`](crate::Logger) cannot be created.

Once a logger exists, logging and the accessors do not fail observably.
*/
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A resource (path, thread) could not be acquired.
    #[error("failed to allocate logger resources: {0}")]
    Allocation(String),
    /// The application data directory could not be determined.
    #[error("failed to resolve the log directory")]
    DirectoryResolution,
    /// The log file, or the directory that should contain it, could not be opened.
    #[error("failed to open log file {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoggerError {
    pub(crate) fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.into(),
            source,
        }
    }
}
