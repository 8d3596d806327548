//! Background one-second clock.
//!
//! A [`Ticker`] owns one worker thread that sends [`Tick`] messages at a fixed
//! period. It holds no timer state; the receiver applies each tick. Stopping
//! wakes the worker immediately and joins it.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::error::TimerError;

/// One elapsed period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// A cancellable periodic clock running on its own thread.
#[derive(Debug)]
pub struct Ticker {
    cancel: Option<Sender<()>>,
    ticks: Receiver<Tick>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawn a ticker with a custom period.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::Io` if the worker thread cannot be spawned.
    pub fn spawn(period: Duration) -> Result<Self, TimerError> {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let (tick_tx, tick_rx) = mpsc::channel::<Tick>();

        let handle = thread::Builder::new()
            .name("pomotimer-ticker".to_string())
            .spawn(move || run(period, &cancel_rx, &tick_tx))?;

        tracing::debug!(period_ms = period.as_millis(), "ticker started");
        Ok(Self {
            cancel: Some(cancel_tx),
            ticks: tick_rx,
            handle: Some(handle),
        })
    }

    /// Take every tick that has arrived so far without blocking.
    #[must_use]
    pub fn drain(&self) -> usize {
        let mut count = 0;
        loop {
            match self.ticks.try_recv() {
                Ok(Tick) => count += 1,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return count,
            }
        }
    }

    /// Block until the next tick arrives or `timeout` passes.
    #[must_use]
    pub fn wait(&self, timeout: Duration) -> Option<Tick> {
        self.ticks.recv_timeout(timeout).ok()
    }

    /// Stop the worker and wait for it to exit.
    pub fn stop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            // A send error means the worker already exited.
            let _ = cancel.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("ticker thread panicked");
            }
            tracing::debug!("ticker stopped");
        }
    }

    /// Whether the worker is still attached.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run(period: Duration, cancel: &Receiver<()>, ticks: &Sender<Tick>) {
    loop {
        match cancel.recv_timeout(period) {
            Err(RecvTimeoutError::Timeout) => {
                if ticks.send(Tick).is_err() {
                    return;
                }
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
        }
    }
}
