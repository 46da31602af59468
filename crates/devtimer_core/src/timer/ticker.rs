//! Cancellable periodic sampler.
//!
//! # Responsibility
//! - Invoke a tick callback on a fixed interval from one background thread.
//! - Stop deterministically: `cancel` returns only after the thread exits.
//!
//! # Invariants
//! - No callback starts after `cancel` (or drop) returns.
//! - The sampler sleeps on the cancellation channel, so cancel wakes it
//!   immediately instead of waiting out the interval.

use log::warn;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

const TICKER_THREAD_NAME: &str = "devtimer-ticker";

/// Owned handle to one running sampler thread.
#[derive(Debug)]
pub struct TickerHandle {
    cancel_tx: Option<Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Spawns a sampler that calls `on_tick` every `interval`.
    ///
    /// # Errors
    /// - Returns the OS error when the thread cannot be spawned.
    pub fn spawn<F>(interval: Duration, mut on_tick: F) -> std::io::Result<Self>
    where
        F: FnMut() + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let join = thread::Builder::new()
            .name(TICKER_THREAD_NAME.to_string())
            .spawn(move || loop {
                match cancel_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => on_tick(),
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })?;

        Ok(Self {
            cancel_tx: Some(cancel_tx),
            join: Some(join),
        })
    }

    /// Stops the sampler and waits for its thread to exit.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            // A send error only means the thread is already gone.
            let _ = cancel_tx.send(());
        }
        if let Some(join) = self.join.take() {
            if join.join().is_err() {
                warn!("event=ticker_join module=timer status=error reason=sampler_panicked");
            }
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}
