//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# rotalog

rotalog is a small, thread-safe file logger with timed rotation.

# What it does

A [`Logger`] writes one line per accepted message into a file inside a directory you
choose, optionally mirroring each line to the console.  Optionally, on a fixed period it
switches to a fresh timestamped file and compresses the old one into a `.tar.gz` next to it.

That's it.  There is no global logger, no structured logging, no async queue and no
network transport.  Each logger is an ordinary value you own and pass around.

# Levels

| Level | Value | Notes                    |
|-------|-------|--------------------------|
| Off   | 0     | filter bound only        |
| Fatal | 1     |                          |
| Error | 2     |                          |
| Warn  | 3     |                          |
| Info  | 4     |                          |
| Debug | 5     |                          |
| Trace | 6     |                          |
| All   | 7     | filter bound only        |

A message is written when its level is at or below the logger's level.

# Files

```text
[2024-05-01 13:37:00.042] [main] [INFO]: service started
```

Without rotation the logger appends to `log.txt` across sessions.  With rotation every
session and every period gets its own `log_YYYY-MM-DD_HH-MM-SS.txt`, and retired files
become `log_YYYY-MM-DD_HH-MM-SS.txt.tar.gz`.

# The API

```rust
use rotalog::{Duration, Level, LoggerOptions};
use std::sync::Arc;

# let dir = tempfile::tempdir().unwrap();
let logger = Arc::new(
    LoggerOptions::new(dir.path().join("logs"))
        .level(Level::Debug)
        .log_to_stdout(false)
        .rotation_period(Duration::from_secs(24 * 60 * 60))
        .open()
        .unwrap(),
);

let worker = logger.clone();
std::thread::spawn(move || rotalog::info!(worker, "hello from {}", "a worker"))
    .join()
    .unwrap();
rotalog::trace!(logger, "filtered out");
```

# Multithreading

All writes to one logger are serialized by a single lock and flushed before
[`Logger::log`] returns.  Lines never interleave, and a line is not lost if the process
dies right after the call.
*/

mod archive;
mod console;
mod error;
mod level;
mod log_record;
mod logger;
mod macros;
mod options;
mod rotation;
mod sys;

pub use archive::{ARCHIVE_EXTENSION, Archiver, TarGzArchiver, archive_path};
pub use console::{Console, InMemoryConsole, StdoutConsole};
pub use error::LoggerError;
pub use level::{InvalidLevel, Level, ParseLevelError};
pub use log_record::LogRecord;
pub use logger::{FIXED_FILE_NAME, Logger};
pub use options::LoggerOptions;

pub use sys::{Duration, data_directory};
