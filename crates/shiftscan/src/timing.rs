//! Wall-clock tracking for the scan loop.
//!
//! The scanner owns a `Timing` value for the duration of one run; there is
//! no process-wide timer. Snapshots are throttled to the configured
//! interval, and the remaining-time estimate extrapolates from how many
//! offsets were covered during the last interval.

use std::time::{Duration, Instant};

/// Emitted at most once per throttle interval.
#[derive(Debug, Clone, Copy)]
pub struct TimingSnapshot {
    pub elapsed: Duration,
    /// Estimated time to finish; `None` until progress has advanced.
    pub remaining: Option<Duration>,
}

#[derive(Debug)]
pub struct Timing {
    started: Instant,
    interval: Duration,
    last_tick: Instant,
    last_done: usize,
}

impl Timing {
    pub fn new(interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            started: now,
            interval,
            last_tick: now,
            last_done: 0,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Report progress: `done` of `total` work items finished. Returns a
    /// snapshot when the throttle interval has elapsed since the last one,
    /// `None` otherwise.
    pub fn tick(&mut self, done: usize, total: usize) -> Option<TimingSnapshot> {
        let since = self.last_tick.elapsed();
        if since < self.interval {
            return None;
        }

        let advanced = done.saturating_sub(self.last_done);
        let remaining = if advanced > 0 && total > done {
            let per_item = since.div_f64(advanced as f64);
            Some(per_item.mul_f64((total - done) as f64))
        } else {
            None
        };

        self.last_tick = Instant::now();
        self.last_done = done;
        Some(TimingSnapshot {
            elapsed: self.elapsed(),
            remaining,
        })
    }
}

/// Render a duration as `XhMMmSSs`, e.g. `0h01m23s`.
pub fn format_hms(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours}h{minutes:02}m{seconds:02}s")
}
