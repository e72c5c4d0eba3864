// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logger configuration.

use crate::archive::{Archiver, TarGzArchiver};
use crate::console::{Console, StdoutConsole};
use crate::error::LoggerError;
use crate::logger::Logger;
use crate::sys::Duration;
use crate::Level;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/**
Builder for a [`Logger`].

```rust
use rotalog::{Duration, Level, LoggerOptions};

# let dir = tempfile::tempdir().unwrap();
let logger = LoggerOptions::new(dir.path().join("logs"))
    .level(Level::Info)
    .log_to_stdout(false)
    .rotation_period(Duration::from_secs(3600))
    .open()
    .unwrap();
assert_eq!(logger.level(), Level::Info);
```
*/
#[derive(Debug, Clone)]
pub struct LoggerOptions {
    pub(crate) directory_path: PathBuf,
    pub(crate) level: Level,
    pub(crate) log_to_stdout: bool,
    pub(crate) rotation_period: Duration,
    pub(crate) use_app_data_root: bool,
    pub(crate) archiver: Arc<dyn Archiver>,
    pub(crate) console: Arc<dyn Console>,
    pub(crate) data_root: fn() -> Option<PathBuf>,
}

impl LoggerOptions {
    /**
    Options for logging into `directory_path`.

    The path must be non-empty and must not end in a separator.  It is created if missing.
    Defaults: every level, mirrored to stdout, no rotation, not under the data root.
    */
    pub fn new(directory_path: impl AsRef<Path>) -> Self {
        Self {
            directory_path: directory_path.as_ref().to_path_buf(),
            level: Level::All,
            log_to_stdout: true,
            rotation_period: Duration::ZERO,
            use_app_data_root: false,
            archiver: Arc::new(TarGzArchiver::new()),
            console: Arc::new(StdoutConsole::new()),
            data_root: crate::sys::data_directory,
        }
    }

    /// Messages more verbose than `level` are dropped.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn log_to_stdout(mut self, log_to_stdout: bool) -> Self {
        self.log_to_stdout = log_to_stdout;
        self
    }

    /**
    How often to switch to a fresh, timestamped file.  [`Duration::ZERO`] disables
    rotation, and a single `log.txt` is appended to across sessions instead.
    */
    pub fn rotation_period(mut self, period: Duration) -> Self {
        self.rotation_period = period;
        self
    }

    /// Treat the directory as relative to the platform application data directory.
    pub fn use_app_data_root(mut self, use_app_data_root: bool) -> Self {
        self.use_app_data_root = use_app_data_root;
        self
    }

    pub fn archiver(mut self, archiver: Arc<dyn Archiver>) -> Self {
        self.archiver = archiver;
        self
    }

    /// Where mirrored lines go.  Defaults to [`StdoutConsole`].
    pub fn console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = console;
        self
    }

    /// Overrides how the application data directory is found.
    pub fn data_root_resolver(mut self, resolver: fn() -> Option<PathBuf>) -> Self {
        self.data_root = resolver;
        self
    }

    pub fn open(self) -> Result<Logger, LoggerError> {
        Logger::open(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = LoggerOptions::new("logs");
        assert_eq!(options.level, Level::All);
        assert!(options.log_to_stdout);
        assert!(options.rotation_period.is_zero());
        // relative to the caller, not the data root, unless asked
        assert!(!options.use_app_data_root);
        assert!(options.use_app_data_root(true).use_app_data_root);
    }
}
