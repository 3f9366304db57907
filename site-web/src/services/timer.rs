//! One-shot timers backed by `setTimeout`.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use shared::splash::{Scheduler, TaskHandle};

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

/// Pending `setTimeout`. Dropping it also clears the timer.
pub struct TimerHandle(Timeout);

impl TaskHandle for TimerHandle {
    fn cancel(self) {
        drop(self.0.cancel());
    }
}

impl Scheduler for GlooScheduler {
    type Handle = TimerHandle;

    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        TimerHandle(Timeout::new(millis, task))
    }
}
