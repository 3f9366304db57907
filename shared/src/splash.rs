//! # Splash/Loading Controller
//!
//! Gates the main view behind a fixed-duration loading screen.
//!
//! ## State Machine
//!
//! ```text
//!   Loading ──(delay elapsed)──▶ Ready
//! ```
//!
//! `Ready` is terminal. Nothing but the timer moves the controller, and the
//! timer fires at most once. Tearing the controller down while it is still
//! `Loading` cancels the timer, so no callback runs against a view that is gone.
//!
//! Timers come from a [`Scheduler`]; the browser hands in a gloo timeout, tests
//! use a manual clock they advance themselves.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Delay used when a market does not configure its own.
pub const DEFAULT_SPLASH_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Loading,
    Ready,
}

/// A scheduled one-shot task that has not fired yet.
pub trait TaskHandle {
    /// Prevent the task from ever running. Cancelling a task that already ran
    /// is harmless.
    fn cancel(self);
}

/// Source of one-shot, cancellable timers.
pub trait Scheduler {
    type Handle: TaskHandle;

    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Owns the loading phase and the timer that ends it.
pub struct SplashController<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    phase: Rc<Cell<LoadingPhase>>,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> SplashController<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            phase: Rc::new(Cell::new(LoadingPhase::Loading)),
            pending: None,
        }
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase.get()
    }

    pub fn is_loading(&self) -> bool {
        self.phase() == LoadingPhase::Loading
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm the timer. `on_ready` runs once, right after the phase flips.
    ///
    /// Calling this again while the timer is armed, or after it has fired, does
    /// nothing.
    pub fn start(&mut self, on_ready: impl FnOnce() + 'static) {
        if self.pending.is_some() || !self.is_loading() {
            log::debug!("Splash controller already started, ignoring start()");
            return;
        }

        let phase = Rc::clone(&self.phase);
        let handle = self.scheduler.schedule_once(
            self.delay,
            Box::new(move || {
                if phase.get() == LoadingPhase::Loading {
                    phase.set(LoadingPhase::Ready);
                    log::info!("Splash finished, revealing main view");
                    on_ready();
                }
            }),
        );

        log::debug!("Splash timer armed for {}ms", self.delay.as_millis());
        self.pending = Some(handle);
    }

    /// Cancel the timer if it has not fired yet. Idempotent.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.pending.take() {
            if self.is_loading() {
                log::debug!("Splash torn down before expiry, cancelling timer");
            }
            handle.cancel();
        }
    }
}

impl<S: Scheduler> Drop for SplashController<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
pub use manual::{ManualHandle, ManualScheduler};

#[cfg(test)]
mod manual {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use std::time::Duration;

    use super::{Scheduler, TaskHandle};

    struct ScheduledTask {
        id: u64,
        due: Duration,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct ManualClock {
        now: Duration,
        next_id: u64,
        tasks: Vec<ScheduledTask>,
    }

    /// Deterministic scheduler: time only moves when [`advance`](Self::advance)
    /// is called. Clones share one clock.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<ManualClock>>,
    }

    pub struct ManualHandle {
        id: u64,
        clock: Weak<RefCell<ManualClock>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> Duration {
            self.clock.borrow().now
        }

        /// Tasks scheduled but not yet fired or cancelled.
        pub fn pending(&self) -> usize {
            self.clock.borrow().tasks.len()
        }

        /// Move time forward and run every task that came due, in due order.
        /// Returns how many tasks ran.
        pub fn advance(&self, by: Duration) -> usize {
            let due = {
                let mut clock = self.clock.borrow_mut();
                clock.now += by;
                let now = clock.now;
                let (mut due, waiting): (Vec<_>, Vec<_>) =
                    clock.tasks.drain(..).partition(|task| task.due <= now);
                clock.tasks = waiting;
                due.sort_by_key(|task| (task.due, task.id));
                due
            };

            let fired = due.len();
            for scheduled in due {
                (scheduled.task)();
            }
            fired
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ManualHandle {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.tasks.push(ScheduledTask { id, due, task });

            ManualHandle {
                id,
                clock: Rc::downgrade(&self.clock),
            }
        }
    }

    impl TaskHandle for ManualHandle {
        fn cancel(self) {
            if let Some(clock) = self.clock.upgrade() {
                clock.borrow_mut().tasks.retain(|task| task.id != self.id);
            }
        }
    }
}
