// SPDX-License-Identifier: MIT OR Apache-2.0

//! Background rotation task.
//!
//! One thread per rotating [`Logger`](crate::Logger).  It sleeps on a channel until the
//! next rotation is due, so a stop request from the owner wakes it immediately instead of
//! waiting out the period.  Rotation fires no earlier than the period and possibly a
//! little later.
//!
//! On stop the final file is closed and archived as well.  A failed rotation is logged
//! through the logger and ends the task; logging carries on in the last good file.

use crate::Level;
use crate::error::LoggerError;
use crate::logger::Shared;
use crate::sys::Instant;
use std::sync::Arc;
use std::thread::JoinHandle;

use wasm_safe_mutex::mpsc;

const THREAD_NAME: &str = "rotalog-rotation";

enum Message {
    Stop,
}

pub(crate) struct RotationTask {
    sender: mpsc::Sender<Message>,
    handle: JoinHandle<()>,
}

impl std::fmt::Debug for RotationTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotationTask")
            .field("finished", &self.handle.is_finished())
            .finish_non_exhaustive()
    }
}

impl RotationTask {
    pub(crate) fn spawn(shared: Arc<Shared>) -> Result<Self, LoggerError> {
        let (sender, receiver) = mpsc::channel();
        let handle = std::thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || rotation_loop(&shared, receiver))
            .map_err(|err| LoggerError::Allocation(format!("rotation thread: {err}")))?;
        Ok(Self { sender, handle })
    }

    /**
    Asks the task to archive the current file and exit, and waits until it has.
    */
    pub(crate) fn stop(self) {
        // Fails when the task already ended after a rotation error.
        let _ = self.sender.send_sync(Message::Stop);
        drop(self.sender);
        let _ = self.handle.join();
    }
}

fn rotation_loop(shared: &Shared, receiver: mpsc::Receiver<Message>) {
    let period = shared.rotation_period();
    let mut deadline = Instant::now() + period;
    loop {
        match receiver.recv_sync_timeout(deadline) {
            Ok(Message::Stop) => break,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => { /* fall through to deadline check */ }
        }
        if Instant::now() < deadline {
            continue;
        }

        match shared.rotate() {
            Ok(retired) => {
                deadline = Instant::now() + period;
                shared.archive(&retired);
            }
            Err(err) => {
                // rotate() has released the lock by now.
                shared.write(
                    Level::Error,
                    &format!("log rotation failed, no further rotation: {err}"),
                );
                return;
            }
        }
    }

    if let Some(last) = shared.retire() {
        shared.archive(&last);
    }
}
