//! Fixed-interval tick driver.
//!
//! The clock itself only tracks whether ticks should be delivered. The UI
//! turns [`GameClock::is_ticking`] into a periodic timer subscription, so
//! stopping the clock drops the timer before another tick can fire.
use std::time::Duration;

use log::debug;

pub trait GameClock {
    fn start(&mut self);

    fn pause(&mut self);

    fn resume(&mut self);

    /// Stops delivery of ticks. Calling it again has no effect.
    fn stop(&mut self);

    fn is_ticking(&self) -> bool;

    fn interval(&self) -> Duration;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockState {
    Stopped,
    Running,
    Paused,
}

#[derive(Clone, Debug)]
pub struct IntervalClock {
    interval: Duration,
    state: ClockState,
}

impl IntervalClock {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: ClockState::Stopped,
        }
    }

    #[must_use]
    pub fn state(&self) -> ClockState {
        self.state
    }
}

impl GameClock for IntervalClock {
    fn start(&mut self) {
        debug!("Clock started with {:?} interval", self.interval);
        self.state = ClockState::Running;
    }

    fn pause(&mut self) {
        if self.state == ClockState::Running {
            self.state = ClockState::Paused;
        }
    }

    fn resume(&mut self) {
        if self.state == ClockState::Paused {
            self.state = ClockState::Running;
        }
    }

    fn stop(&mut self) {
        if self.state != ClockState::Stopped {
            debug!("Clock stopped");
        }
        self.state = ClockState::Stopped;
    }

    fn is_ticking(&self) -> bool {
        self.state == ClockState::Running
    }

    fn interval(&self) -> Duration {
        self.interval
    }
}
