//! Repeating countdown driver.
//!
//! The countdown only delivers [`Tick`]s; whoever owns the session applies
//! them, so the session itself is never touched from the timer task.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

/// One elapsed period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// A running countdown task. Stopped explicitly or when dropped.
#[derive(Debug)]
pub struct Countdown {
    handle: JoinHandle<()>,
}

impl Countdown {
    /// Spawn the ticking task. The first tick arrives one `period` after
    /// the call. Must be called from within a tokio runtime.
    pub fn start(period: Duration) -> (Self, mpsc::UnboundedReceiver<Tick>) {
        let (tx, rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if tx.send(Tick).is_err() {
                    break;
                }
            }
        });

        (Self { handle }, rx)
    }

    pub fn every_second() -> (Self, mpsc::UnboundedReceiver<Tick>) {
        Self::start(Duration::from_secs(1))
    }

    /// Stop scheduling ticks. The receiver closes once the task is gone.
    pub fn stop(self) {
        self.handle.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
