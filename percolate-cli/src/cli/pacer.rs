//! Pacing for the animated driving mode.
//!
//! The core exposes a synchronous `step()` only; the paced mode is a caller
//! concern. [`Pacer`] gates a loop to at most one step per configured
//! interval using a monotonic clock, so the grid/engine logic stays free of
//! timing.

use std::{
    thread,
    time::{Duration, Instant},
};

/// Enforces a minimum interval between loop iterations.
#[derive(Debug)]
pub(crate) struct Pacer {
    interval: Duration,
    due: Option<Instant>,
}

impl Pacer {
    pub(crate) const fn new(interval: Duration) -> Self {
        Self {
            interval,
            due: None,
        }
    }

    /// Blocks until the next step is due. The first call never waits.
    pub(crate) fn pause(&mut self) {
        if let Some(due) = self.due {
            let now = Instant::now();
            if due > now {
                thread::sleep(due - now);
            }
        }
        self.due = Some(Instant::now() + self.interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_pause_does_not_wait() {
        let mut pacer = Pacer::new(Duration::from_secs(60));
        let start = Instant::now();
        pacer.pause();
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn later_pauses_enforce_the_interval() {
        let interval = Duration::from_millis(10);
        let mut pacer = Pacer::new(interval);
        let start = Instant::now();
        for _ in 0..3 {
            pacer.pause();
        }
        // Two gated iterations follow the free first one.
        assert!(start.elapsed() >= interval * 2);
    }

    #[test]
    fn zero_interval_never_sleeps() {
        let mut pacer = Pacer::new(Duration::ZERO);
        let start = Instant::now();
        for _ in 0..100 {
            pacer.pause();
        }
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
