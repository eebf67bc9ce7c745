//! Single-slot debounce scheduler.
//!
//! Each [`Debouncer::schedule`] call aborts the pending task, if any, and
//! starts a new one that sleeps for the quiet period before running. Every
//! schedule also bumps an epoch; a task that already fired but whose result
//! is still queued somewhere can be recognised as superseded with
//! [`Debouncer::complete`].

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Cancellable single-slot delayed task.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<JoinHandle<()>>,
    epoch: u64,
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the pending task with `make_task(epoch)`, run after `delay`.
    ///
    /// Returns the epoch handed to the task.
    pub fn schedule<F, Fut>(&mut self, delay: Duration, make_task: F) -> u64
    where
        F: FnOnce(u64) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.abort_pending();
        self.epoch = self.epoch.wrapping_add(1);

        let task = make_task(self.epoch);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));

        tracing::trace!(epoch = self.epoch, delay_ms = delay.as_millis(), "debounce scheduled");
        self.epoch
    }

    /// Drops the pending task and invalidates anything it already emitted.
    pub fn cancel(&mut self) {
        if self.abort_pending() {
            tracing::trace!(epoch = self.epoch, "debounce cancelled");
        }
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Whether `epoch` belongs to the latest scheduled task.
    #[must_use]
    pub const fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    /// Marks the task for `epoch` as done.
    ///
    /// Returns `false` when `epoch` has been superseded or cancelled, in
    /// which case its result must be ignored.
    pub fn complete(&mut self, epoch: u64) -> bool {
        if !self.is_current(epoch) {
            tracing::trace!(epoch, current = self.epoch, "dropping superseded debounce firing");
            return false;
        }
        self.pending = None;
        true
    }

    /// Whether a task is waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    fn abort_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.abort_pending();
    }
}
