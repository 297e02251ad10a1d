//! Deferred work for columns.
//!
//! Columns never call timers directly; they go through a [`Scheduler`] so the
//! deferred snap and the wheel idle timer can be driven by a fake clock.

use std::time::Duration;

use floem::action::exec_after;

/// Runs callbacks later on the UI thread.
pub(crate) trait Scheduler {
    /// Run `task` once `delay` has elapsed.
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>);

    /// Run `task` on the next scheduling turn.
    fn defer(&self, task: Box<dyn FnOnce()>) {
        self.after(Duration::ZERO, task);
    }
}

/// [`Scheduler`] backed by Floem's timer queue.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct FloemScheduler;

impl Scheduler for FloemScheduler {
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        exec_after(delay, move |_| task());
    }
}

#[cfg(test)]
pub(crate) use manual::ManualScheduler;
