//! Periodic tick abstraction.
//!
//! The core never talks to a timer API directly; it asks a [`Scheduler`]
//! for a repeating tick and holds the returned [`RepeatingHandle`]. The
//! production implementation runs each task on its own background thread;
//! [`ManualScheduler`] substitutes a deterministic test clock.

use std::cell::{Cell, RefCell};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A repeating task, boxed so schedulers can own it.
pub type RepeatingTask = Box<dyn FnMut() + Send>;

/// Schedules a task to run once per interval until cancelled.
pub trait Scheduler {
    /// Schedule `task` to run every `every`, first firing one interval
    /// from now. Returns a handle that cancels future ticks.
    fn schedule_repeating(&self, every: Duration, task: RepeatingTask) -> RepeatingHandle;
}

/// Cancellation handle for a scheduled task.
///
/// Dropping the handle does not cancel the task; call [`cancel`] to stop
/// it. In-flight ticks run to completion.
///
/// [`cancel`]: RepeatingHandle::cancel
#[derive(Clone)]
pub struct RepeatingHandle {
    cancelled: Arc<AtomicBool>,
}

impl RepeatingHandle {
    fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Thread-per-task scheduler for production use.
#[derive(Default)]
pub struct ThreadScheduler;

impl ThreadScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule_repeating(&self, every: Duration, mut task: RepeatingTask) -> RepeatingHandle {
        let handle = RepeatingHandle::new();
        let cancelled = handle.cancelled.clone();
        std::thread::spawn(move || loop {
            std::thread::sleep(every);
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            task();
        });
        handle
    }
}

struct ManualTask {
    every: Duration,
    next_due: Duration,
    task: RepeatingTask,
    cancelled: Arc<AtomicBool>,
}

/// Deterministic scheduler for tests.
///
/// Nothing fires on its own; [`advance`] moves the virtual clock forward
/// and runs every due tick in due order, each to completion, mirroring a
/// single-threaded cooperative event loop. Tasks must not call back into
/// the scheduler from inside a tick.
///
/// [`advance`]: ManualScheduler::advance
#[derive(Default)]
pub struct ManualScheduler {
    tasks: RefCell<Vec<ManualTask>>,
    now: Cell<Duration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current virtual time.
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Advance the virtual clock by `dt`, firing all ticks that become due.
    pub fn advance(&self, dt: Duration) {
        let target = self.now.get() + dt;
        loop {
            let mut tasks = self.tasks.borrow_mut();
            tasks.retain(|t| !t.cancelled.load(Ordering::Relaxed));
            let next = tasks
                .iter_mut()
                .filter(|t| t.next_due <= target)
                .min_by_key(|t| t.next_due);
            let Some(task) = next else {
                break;
            };
            task.next_due += task.every;
            (task.task)();
        }
        self.now.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&self, every: Duration, task: RepeatingTask) -> RepeatingHandle {
        // A zero interval would never catch up to the target time.
        let every = every.max(Duration::from_nanos(1));
        let handle = RepeatingHandle::new();
        self.tasks.borrow_mut().push(ManualTask {
            every,
            next_due: self.now.get() + every,
            task,
            cancelled: handle.cancelled.clone(),
        });
        handle
    }
}
