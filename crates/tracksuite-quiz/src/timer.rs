//! Countdown timer for timed quizzes.
//!
//! [`Countdown`] owns the warning and expiry logic and is purely
//! synchronous; [`spawn`] drives it from a one-second tokio interval and
//! returns a guard that aborts the task on drop. The guard must be
//! dropped at every exit from the taking state so a stray late tick can
//! never reach a superseded session.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// What a tick observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSignal {
    Running,
    /// Remaining time is at or below 25% of the total.
    Warning,
    /// The countdown reached zero. Delivered exactly once.
    Expired,
}

/// A second-granularity countdown.
#[derive(Debug, Clone)]
pub struct Countdown {
    total_secs: u32,
    remaining: u32,
    expired_delivered: bool,
}

impl Countdown {
    pub fn new(total_secs: u32) -> Self {
        Self {
            total_secs,
            remaining: total_secs,
            expired_delivered: false,
        }
    }

    pub fn from_minutes(minutes: u32) -> Self {
        Self::new(minutes * 60)
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining
    }

    /// Warning once remaining time is at or below a quarter of the
    /// total.
    pub fn is_warning(&self) -> bool {
        u64::from(self.remaining) * 4 <= u64::from(self.total_secs)
    }

    /// Remaining time as `MM:SS`.
    pub fn format_remaining(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }

    /// Advance one second. Returns `None` once expiry has been
    /// delivered; further ticks are inert.
    pub fn tick(&mut self) -> Option<TimerSignal> {
        if self.expired_delivered {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.expired_delivered = true;
            Some(TimerSignal::Expired)
        } else if self.is_warning() {
            Some(TimerSignal::Warning)
        } else {
            Some(TimerSignal::Running)
        }
    }
}

/// Aborts the countdown task when dropped.
#[derive(Debug)]
pub struct CountdownGuard {
    handle: JoinHandle<()>,
}

impl Drop for CountdownGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Drive a countdown on a one-second interval, sending each tick's
/// signal. The task ends after delivering `Expired` or when the
/// receiver goes away; the guard cancels it early.
pub fn spawn(total_secs: u32, tx: mpsc::UnboundedSender<TimerSignal>) -> CountdownGuard {
    let handle = tokio::spawn(async move {
        let mut countdown = Countdown::new(total_secs);
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        // The first interval tick completes immediately; skip it so the
        // first signal arrives after one full second.
        interval.tick().await;
        loop {
            interval.tick().await;
            match countdown.tick() {
                Some(signal) => {
                    let expired = signal == TimerSignal::Expired;
                    if tx.send(signal).is_err() || expired {
                        break;
                    }
                }
                None => break,
            }
        }
    });
    CountdownGuard { handle }
}
