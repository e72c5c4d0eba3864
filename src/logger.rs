// SPDX-License-Identifier: MIT OR Apache-2.0

//! The logger itself.
//!
//! A [`Logger`] owns one open log file and a small bundle of mutable settings, all behind a
//! single mutex.  Every accepted message is written and flushed while that mutex is held,
//! so lines from concurrent threads never interleave and a message is on disk by the time
//! [`Logger::log`] returns.
//!
//! With a non-zero rotation period a background task periodically swaps in a new
//! timestamped file and archives the old one; see the `rotation` module.

use crate::Level;
use crate::archive::{Archiver, archive_path};
use crate::console::Console;
use crate::error::LoggerError;
use crate::log_record::LogRecord;
use crate::options::LoggerOptions;
use crate::rotation::RotationTask;
use crate::sys::Duration;
use chrono::Local;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// File name used when rotation is disabled.
pub const FIXED_FILE_NAME: &str = "log.txt";

#[derive(Debug)]
struct State {
    file_path: PathBuf,
    /// `None` only after teardown.
    file: Option<File>,
    level: Level,
    log_to_stdout: bool,
}

/**
The part of a logger shared with its rotation task.
*/
#[derive(Debug)]
pub(crate) struct Shared {
    directory_path: PathBuf,
    rotation_period: Duration,
    archiver: Arc<dyn Archiver>,
    console: Arc<dyn Console>,
    state: Mutex<State>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, State> {
        // A panicking console must not disable logging for everyone else.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn rotation_period(&self) -> Duration {
        self.rotation_period
    }

    pub(crate) fn write(&self, level: Level, message: &str) {
        if !level.is_message_level() {
            return;
        }
        let mut state = self.lock();
        if level > state.level {
            return;
        }
        let record = LogRecord::new(level, message);
        if state.log_to_stdout {
            self.console.write_record(&record);
        }
        let line = format!("{record}\n");
        let State {
            file, file_path, ..
        } = &mut *state;
        match file {
            Some(file) => {
                if let Err(err) = file.write_all(line.as_bytes()).and_then(|()| file.flush()) {
                    eprintln!("rotalog: can't write to {}: {err}", file_path.display());
                    eprint!("{line}");
                }
            }
            None => eprint!("{line}"),
        }
    }

    /**
    Swaps in a fresh timestamped file, returning the path of the closed one.

    On error the current file stays in place.  The lock is released before returning,
    so the caller may log the error through [`Self::write`].
    */
    pub(crate) fn rotate(&self) -> Result<PathBuf, LoggerError> {
        let mut state = self.lock();
        let path = timestamped_path(&self.directory_path)
            .map_err(|err| LoggerError::file_open(&self.directory_path, err))?;
        let file = open_log_file(&path, true).map_err(|err| LoggerError::file_open(&path, err))?;
        let retired = std::mem::replace(&mut state.file_path, path);
        drop(state.file.replace(file));
        Ok(retired)
    }

    /**
    Closes the current file for good, returning its path if it was still open.
    */
    pub(crate) fn retire(&self) -> Option<PathBuf> {
        let mut state = self.lock();
        state.file.take().map(|_| state.file_path.clone())
    }

    /// Archives a closed file.  Failures are logged, never returned.
    pub(crate) fn archive(&self, path: &Path) {
        if let Err(err) = self.archiver.archive(path) {
            self.write(
                Level::Error,
                &format!("failed to archive log file {}: {err}", path.display()),
            );
        }
    }
}

/**
A thread-safe file logger.

Dropping the logger stops rotation (archiving the final file when rotation is enabled)
and closes the file.  Share it between threads with `Arc<Logger>`.

```rust
use rotalog::{Duration, Level, Logger};

# let dir = tempfile::tempdir().unwrap();
let logger = Logger::create(dir.path().join("logs"), Level::Info, false, Duration::ZERO, false)
    .unwrap();
logger.log(Level::Warn, "low disk space");
rotalog::debug!(logger, "dropped: {} > {}", rotalog::Level::Debug, logger.level());

let contents = std::fs::read_to_string(logger.file_path()).unwrap();
assert!(contents.ends_with("[WARN]: low disk space\n"));
```
*/
#[derive(Debug)]
pub struct Logger {
    shared: Arc<Shared>,
    rotation: Option<RotationTask>,
}

impl Logger {
    /**
    Creates a logger writing into `directory_path`.

    See [`LoggerOptions`] for the remaining knobs.

    # Panics

    If `directory_path` is empty or ends with a path separator.
    */
    pub fn create(
        directory_path: impl AsRef<Path>,
        level: Level,
        log_to_stdout: bool,
        rotation_period: Duration,
        use_app_data_root: bool,
    ) -> Result<Self, LoggerError> {
        LoggerOptions::new(directory_path)
            .level(level)
            .log_to_stdout(log_to_stdout)
            .rotation_period(rotation_period)
            .use_app_data_root(use_app_data_root)
            .open()
    }

    pub(crate) fn open(options: LoggerOptions) -> Result<Self, LoggerError> {
        let directory_path = resolve_directory(&options)?;
        match fs::create_dir_all(&directory_path) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {}
            Err(err) => return Err(LoggerError::file_open(directory_path, err)),
        }

        let rotating = !options.rotation_period.is_zero();
        let file_path = if rotating {
            timestamped_path(&directory_path)
                .map_err(|err| LoggerError::file_open(&directory_path, err))?
        } else {
            directory_path.join(FIXED_FILE_NAME)
        };
        let file =
            open_log_file(&file_path, rotating).map_err(|err| LoggerError::file_open(&file_path, err))?;

        let shared = Arc::new(Shared {
            directory_path,
            rotation_period: options.rotation_period,
            archiver: options.archiver,
            console: options.console,
            state: Mutex::new(State {
                file_path,
                file: Some(file),
                level: options.level,
                log_to_stdout: options.log_to_stdout,
            }),
        });
        // Dropping `shared` on failure closes the file.
        let rotation = if rotating {
            Some(RotationTask::spawn(shared.clone())?)
        } else {
            None
        };
        Ok(Self { shared, rotation })
    }

    /// Absolute directory the log files live in.
    pub fn directory_path(&self) -> &Path {
        &self.shared.directory_path
    }

    /// Path of the file currently being written.
    pub fn file_path(&self) -> PathBuf {
        self.shared.lock().file_path.clone()
    }

    /// [`Duration::ZERO`] when rotation is disabled.
    pub fn rotation_period(&self) -> Duration {
        self.shared.rotation_period
    }

    pub fn level(&self) -> Level {
        self.shared.lock().level
    }

    pub fn set_level(&self, level: Level) {
        self.shared.lock().level = level;
    }

    pub fn log_to_stdout(&self) -> bool {
        self.shared.lock().log_to_stdout
    }

    pub fn set_log_to_stdout(&self, log_to_stdout: bool) {
        self.shared.lock().log_to_stdout = log_to_stdout;
    }

    /// Whether a message at `level` would currently be written.
    pub fn enabled(&self, level: Level) -> bool {
        level.is_message_level() && level <= self.level()
    }

    /**
    Writes one line to the log file, and to the console when mirroring is on.

    Messages more verbose than [`Self::level`] are dropped, as are messages tagged
    [`Level::Off`] or [`Level::All`].  Blocks until the line is flushed.
    */
    pub fn log(&self, level: Level, message: &str) {
        self.shared.write(level, message);
    }

    /**
    Formats and logs.  Arguments are only rendered when the level is enabled.

    Usually reached through [`log!`](crate::log) and friends.
    */
    pub fn log_fmt(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        match args.as_str() {
            Some(message) => self.log(level, message),
            None => self.log(level, &fmt::format(args)),
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Some(rotation) = self.rotation.take() {
            rotation.stop();
        }
        drop(self.shared.retire());
    }
}
/*
Boilerplate notes.

Clone is out: two owners would each try to stop the rotation task and close the file.
PartialEq/Eq/Hash: no meaningful equality for an open file.
Default: there is no sensible default directory.
Display: nothing to display beyond Debug.
Send/Sync: automatic, every field is behind the mutex or immutable.
*/

fn resolve_directory(options: &LoggerOptions) -> Result<PathBuf, LoggerError> {
    let requested = options.directory_path.as_os_str();
    assert!(!requested.is_empty(), "log directory path must not be empty");
    assert!(
        !requested.to_string_lossy().ends_with(std::path::is_separator),
        "log directory path must not end with a separator: {}",
        options.directory_path.display()
    );

    let path = if options.use_app_data_root {
        let root = (options.data_root)().ok_or(LoggerError::DirectoryResolution)?;
        root.join(&options.directory_path)
    } else {
        options.directory_path.clone()
    };
    std::path::absolute(&path).map_err(|_| LoggerError::DirectoryResolution)
}

/**
`log_YYYY-MM-DD_HH-MM-SS.txt` in `directory`, suffixed with `_1`, `_2`, ... when that
name or its archive is already taken.
*/
pub(crate) fn timestamped_path(directory: &Path) -> io::Result<PathBuf> {
    let stamp = Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
    let mut suffix = 0u32;
    loop {
        let name = if suffix == 0 {
            format!("log_{stamp}.txt")
        } else {
            format!("log_{stamp}_{suffix}.txt")
        };
        let path = directory.join(name);
        if !path.try_exists()? && !archive_path(&path).try_exists()? {
            return Ok(path);
        }
        suffix += 1;
    }
}

/// Rotated files start empty; the fixed file accumulates across sessions.
fn open_log_file(path: &Path, rotating: bool) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true);
    if rotating {
        options.write(true).truncate(true);
    } else {
        options.append(true);
    }
    options.open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::InMemoryConsole;

    fn quiet(dir: &Path) -> LoggerOptions {
        LoggerOptions::new(dir.join("logs")).log_to_stdout(false)
    }

    #[test]
    fn timestamped_names_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let first = timestamped_path(dir.path()).unwrap();
        fs::write(&first, "").unwrap();
        let second = timestamped_path(dir.path()).unwrap();
        assert_ne!(first, second);

        let name = first.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("log_") && name.ends_with(".txt"));
        // log_YYYY-MM-DD_HH-MM-SS.txt
        assert_eq!(name.len(), "log_2024-01-01_00-00-00.txt".len());
    }

    #[test]
    fn archived_names_are_not_reused() {
        let dir = tempfile::tempdir().unwrap();
        let first = timestamped_path(dir.path()).unwrap();
        fs::write(archive_path(&first), "").unwrap();
        assert_ne!(timestamped_path(dir.path()).unwrap(), first);
    }

    #[test]
    fn fixed_file_appends_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        {
            let logger = quiet(dir.path()).open().unwrap();
            logger.log(Level::Info, "first");
        }
        let logger = quiet(dir.path()).open().unwrap();
        logger.log(Level::Info, "second");
        assert_eq!(logger.file_path(), dir.path().join("logs").join(FIXED_FILE_NAME));

        let contents = fs::read_to_string(logger.file_path()).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.contains("first") && contents.contains("second"));
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let logger = quiet(dir.path()).open().unwrap();
        assert!(logger.directory_path().is_dir());
        assert_eq!(logger.directory_path(), dir.path().join("logs"));
    }

    #[test]
    fn bounds_are_never_written() {
        let dir = tempfile::tempdir().unwrap();
        let logger = quiet(dir.path()).open().unwrap();
        logger.log(Level::Off, "off");
        logger.log(Level::All, "all");
        assert_eq!(fs::read_to_string(logger.file_path()).unwrap(), "");
    }

    #[test]
    fn log_fmt_renders_lazily() {
        struct Loud;
        impl fmt::Display for Loud {
            fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
                panic!("rendered a filtered message")
            }
        }
        let dir = tempfile::tempdir().unwrap();
        let logger = quiet(dir.path()).level(Level::Warn).open().unwrap();
        logger.log_fmt(Level::Debug, format_args!("{}", Loud));
        logger.log_fmt(Level::Error, format_args!("{} + {}", 1, 2));
        let contents = fs::read_to_string(logger.file_path()).unwrap();
        assert!(contents.ends_with("[ERROR]: 1 + 2\n"));
    }

    #[test]
    fn console_mirror_follows_flag() {
        let dir = tempfile::tempdir().unwrap();
        let console = Arc::new(InMemoryConsole::new());
        let logger = quiet(dir.path()).console(console.clone()).open().unwrap();
        logger.log(Level::Info, "hidden");
        assert!(console.is_empty());

        logger.set_log_to_stdout(true);
        assert!(logger.log_to_stdout());
        logger.log(Level::Info, "shown");
        assert!(console.drain_logs().ends_with("[INFO]: shown"));
    }

    #[test]
    fn retire_closes_once() {
        let dir = tempfile::tempdir().unwrap();
        let logger = quiet(dir.path()).open().unwrap();
        assert_eq!(logger.shared.retire(), Some(logger.file_path()));
        assert_eq!(logger.shared.retire(), None);
    }
}
