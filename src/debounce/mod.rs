//! Input debouncing
//!
//! Delays propagation of a rapidly changing value until it has stayed
//! unchanged for a fixed quiet period. At most one timer is pending at a
//! time: every update cancels and reschedules it, so a burst of changes
//! publishes at most one downstream value, and only after the input stops
//! changing. Intermediate values are never observable downstream.

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Debounced holder of a continuously-updating value
///
/// Settled values are published on a watch channel. Dropping the debouncer
/// (or calling [`cancel`](Self::cancel)) aborts any pending timer, so no
/// late update fires after teardown.
pub struct Debouncer<T> {
    quiet_period: Duration,
    tx: watch::Sender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Clone + Send + Sync + 'static> Debouncer<T> {
    /// Create a debouncer seeded with an initial settled value
    pub fn new(initial: T, quiet_period: Duration) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            quiet_period,
            tx,
            pending: None,
        }
    }

    /// Subscribe to settled values
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Feed a new input value, restarting the quiet-period timer
    pub fn update(&mut self, value: T) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let tx = self.tx.clone();
        let quiet_period = self.quiet_period;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            tx.send_replace(value);
        }));
    }

    /// Cancel any pending propagation
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// The most recently settled value
    pub fn settled(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
