//! Cancellable one-shot timers.
//!
//! Every stateful primitive that reverts itself after a delay (contact status,
//! copy confirmation) schedules through a [`Scheduler`] and keeps the returned
//! [`TimerHandle`]. Re-triggering the same action cancels the old handle before
//! scheduling a new one, so a stale revert can never fire over newer state.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

pub type Task = Box<dyn FnOnce() + Send + 'static>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("Couldn't schedule timer: {0}")]
    Unavailable(String),
}

/// Handle to a scheduled task. Dropping it does not cancel the task.
pub struct TimerHandle {
    cancel: Box<dyn FnOnce() + Send + Sync + 'static>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Box::new(cancel),
        }
    }

    pub fn cancel(self) {
        (self.cancel)()
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle").finish_non_exhaustive()
    }
}

pub trait Scheduler: Send + Sync + 'static {
    fn schedule(&self, delay: Duration, task: Task) -> Result<TimerHandle, TimerError>;
}

/// Schedules on the browser event loop via `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowScheduler;

impl Scheduler for WindowScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Result<TimerHandle, TimerError> {
        use leptos::prelude::set_timeout_with_handle;

        let handle = set_timeout_with_handle(task, delay)
            .map_err(|e| TimerError::Unavailable(format!("{e:?}")))?;
        Ok(TimerHandle::new(move || handle.clear()))
    }
}

/// Takes the previous handle out of `slot` (cancelling it) and stores the new one.
/// A scheduling failure leaves the slot empty and is logged.
pub fn replace_timer(
    slot: &mut Option<TimerHandle>,
    scheduled: Result<TimerHandle, TimerError>,
) {
    if let Some(previous) = slot.take() {
        previous.cancel();
    }
    match scheduled {
        Ok(handle) => *slot = Some(handle),
        Err(e) => log::error!("{e}"),
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::{Scheduler, Task, TimerError, TimerHandle};

    struct Scheduled {
        id: u64,
        due: Duration,
        task: Task,
    }

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: u64,
        pending: Vec<Scheduled>,
    }

    /// Virtual-time scheduler: nothing runs until [`ManualScheduler::advance`].
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Arc<Mutex<Clock>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn pending(&self) -> usize {
            self.clock.lock().expect("clock lock").pending.len()
        }

        /// Runs every task due within `by`, earliest first, including tasks
        /// scheduled by tasks that run during this call.
        pub fn advance(&self, by: Duration) {
            let target = self.clock.lock().expect("clock lock").now + by;
            loop {
                let next = {
                    let mut clock = self.clock.lock().expect("clock lock");
                    let earliest = clock
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, s)| s.due <= target)
                        .min_by_key(|(_, s)| (s.due, s.id))
                        .map(|(i, _)| i);
                    match earliest {
                        Some(i) => {
                            let scheduled = clock.pending.remove(i);
                            clock.now = scheduled.due;
                            Some(scheduled.task)
                        }
                        None => {
                            clock.now = target;
                            None
                        }
                    }
                };
                match next {
                    Some(task) => task(),
                    None => break,
                }
            }
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay: Duration, task: Task) -> Result<TimerHandle, TimerError> {
            let mut clock = self.clock.lock().expect("clock lock");
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.pending.push(Scheduled { id, due, task });

            let shared = self.clock.clone();
            Ok(TimerHandle::new(move || {
                shared
                    .lock()
                    .expect("clock lock")
                    .pending
                    .retain(|s| s.id != id);
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::manual::ManualScheduler;
    use super::*;

    fn counter_task(counter: &Arc<AtomicUsize>) -> Task {
        let counter = counter.clone();
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_task_fires_only_after_delay() {
        let scheduler = ManualScheduler::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let _handle = scheduler
            .schedule(Duration::from_millis(100), counter_task(&fired))
            .unwrap();

        scheduler.advance(Duration::from_millis(99));
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let scheduler = ManualScheduler::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let handle = scheduler
            .schedule(Duration::from_millis(10), counter_task(&fired))
            .unwrap();
        handle.cancel();

        scheduler.advance(Duration::from_secs(1));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_replace_timer_cancels_previous() {
        let scheduler = ManualScheduler::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let mut slot = None;

        replace_timer(
            &mut slot,
            scheduler.schedule(Duration::from_millis(50), counter_task(&fired)),
        );
        scheduler.advance(Duration::from_millis(30));
        replace_timer(
            &mut slot,
            scheduler.schedule(Duration::from_millis(50), counter_task(&fired)),
        );

        // first one would have been due at 50ms
        scheduler.advance(Duration::from_millis(30));
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        scheduler.advance(Duration::from_millis(20));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_replace_timer_keeps_slot_empty_on_failure() {
        let mut slot = Some(TimerHandle::new(|| {}));
        replace_timer(&mut slot, Err(TimerError::Unavailable("no window".into())));
        assert!(slot.is_none());
    }
}
