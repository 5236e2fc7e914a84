//! Wall-clock ticker for realtime play.
//!
//! A background thread calls a sink once per period with the current
//! generation number. `rearm` bumps the generation and restarts the period,
//! so a tick scheduled for an old game is both delayed and recognisably
//! stale: the consumer drops any tick whose stamp fails `is_current`.
//! The game core never sees this thread; it only receives `tick` calls.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use tracing::debug;

/// Handle to a running ticker thread. Dropping it stops the thread.
#[derive(Debug)]
pub struct Ticker {
    control: mpsc::Sender<u64>,
    generation: u64,
}

impl Ticker {
    /// Starts ticking every `period`. The thread exits once `sink` returns
    /// false or the handle is dropped.
    pub fn spawn<F>(period: Duration, mut sink: F) -> Ticker
    where
        F: FnMut(u64) -> bool + Send + 'static,
    {
        let (control, control_rx) = mpsc::channel::<u64>();
        thread::spawn(move || {
            let mut generation = 0;
            loop {
                match control_rx.recv_timeout(period) {
                    Ok(next) => generation = next,
                    Err(RecvTimeoutError::Timeout) => {
                        if !sink(generation) {
                            return;
                        }
                    }
                    Err(RecvTimeoutError::Disconnected) => return,
                }
            }
        });
        Ticker { control, generation: 0 }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Invalidates ticks already scheduled and starts a fresh period.
    pub fn rearm(&mut self) {
        self.generation += 1;
        debug!(generation = self.generation, "ticker rearmed");
        // A dead thread has nothing left to cancel.
        let _ = self.control.send(self.generation);
    }

    /// Returns true if a tick stamped `stamp` belongs to the current game.
    pub fn is_current(&self, stamp: u64) -> bool {
        stamp == self.generation
    }
}
