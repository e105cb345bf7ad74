//! Pure stopwatch logic with no platform dependencies.
//! Testable on host, driven by the browser host crate on wasm.

mod controller;
mod host;
mod laps;

pub use controller::{StopwatchController, StopwatchState};
pub use host::{ButtonFace, ButtonId, Clock, FrameHandle, FrameScheduler, View};
pub use laps::{Lap, LapBook};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimerState {
    Stopped,
    Running,
}

/// Anchor-based elapsed time accumulator.
///
/// While running, `elapsed = now - anchor`. Resuming rebases the anchor on
/// the frozen elapsed value so paused intervals are never counted.
pub struct TimerCore {
    pub state: TimerState,
    elapsed_ms: u64,
    anchor_ms: i64,
}

impl TimerCore {
    pub fn new() -> Self {
        Self {
            state: TimerState::Stopped,
            elapsed_ms: 0,
            anchor_ms: 0,
        }
    }

    /// Returns false if the timer was already running.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.state == TimerState::Running {
            return false;
        }
        self.anchor_ms = now_ms as i64 - self.elapsed_ms as i64;
        self.state = TimerState::Running;
        true
    }

    /// Freezes elapsed at its last sampled value. Returns false if not running.
    pub fn pause(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        self.state = TimerState::Stopped;
        true
    }

    /// Returns false (and changes nothing) while running.
    pub fn reset(&mut self) -> bool {
        if self.state == TimerState::Running {
            return false;
        }
        self.elapsed_ms = 0;
        self.anchor_ms = 0;
        true
    }

    /// Recomputes elapsed from the clock while running; returns the frozen
    /// value otherwise. A clock that steps backwards never shrinks elapsed.
    pub fn sample(&mut self, now_ms: u64) -> u64 {
        if self.state == TimerState::Running {
            let measured = (now_ms as i64 - self.anchor_ms).max(0) as u64;
            self.elapsed_ms = self.elapsed_ms.max(measured);
        }
        self.elapsed_ms
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn anchor_ms(&self) -> i64 {
        self.anchor_ms
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }
}

impl Default for TimerCore {
    fn default() -> Self {
        Self::new()
    }
}

/// Format an elapsed duration as "MM:SS.CC".
///
/// Minutes wrap at 60: durations of an hour or more only show the minutes
/// within the current hour. All fields truncate.
pub fn format_time(ms: u64) -> String {
    let total_secs = ms / 1000;
    let cs = (ms % 1000) / 10;
    let m = (total_secs / 60) % 60;
    let s = total_secs % 60;
    format!("{:02}:{:02}.{:02}", m, s, cs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_pause_resume() {
        let mut t = TimerCore::new();
        assert_eq!(t.state, TimerState::Stopped);
        assert_eq!(t.sample(500), 0);

        assert!(t.start(1000));
        assert_eq!(t.anchor_ms(), 1000);
        assert_eq!(t.sample(1500), 500);
        assert_eq!(t.sample(2000), 1000);

        assert!(t.pause());
        assert_eq!(t.state, TimerState::Stopped);
        assert_eq!(t.sample(5000), 1000); // Frozen while stopped

        assert!(t.start(5000));
        assert_eq!(t.anchor_ms(), 4000);
        assert_eq!(t.sample(5500), 1500);
    }

    #[test]
    fn test_timer_start_twice_keeps_anchor() {
        let mut t = TimerCore::new();
        assert!(t.start(100));
        assert!(!t.start(900));
        assert_eq!(t.anchor_ms(), 100);
        assert_eq!(t.sample(1100), 1000);
    }

    #[test]
    fn test_timer_anchor_before_clock_origin() {
        let mut t = TimerCore::new();
        t.start(0);
        t.sample(3000);
        t.pause();
        // Resuming at a clock reading smaller than elapsed needs a negative anchor.
        t.start(1000);
        assert_eq!(t.anchor_ms(), -2000);
        assert_eq!(t.sample(1500), 3500);
    }

    #[test]
    fn test_timer_pause_keeps_last_sample() {
        let mut t = TimerCore::new();
        t.start(0);
        assert_eq!(t.sample(1000), 1000);
        // Clock moved on since the last sample; pause does not read it.
        assert!(t.pause());
        assert_eq!(t.elapsed_ms(), 1000);
        assert!(!t.pause());
        assert_eq!(t.elapsed_ms(), 1000);
    }

    #[test]
    fn test_timer_backwards_clock() {
        let mut t = TimerCore::new();
        t.start(1000);
        assert_eq!(t.sample(2000), 1000);
        assert_eq!(t.sample(1800), 1000);
        assert_eq!(t.sample(2100), 1100);
    }

    #[test]
    fn test_timer_reset_guarded() {
        let mut t = TimerCore::new();
        t.start(0);
        t.sample(700);
        assert!(!t.reset());
        assert_eq!(t.elapsed_ms(), 700);

        t.pause();
        assert_eq!(t.elapsed_ms(), 700);
        assert!(t.reset());
        assert_eq!(t.elapsed_ms(), 0);
        assert_eq!(t.sample(10_000), 0);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00.00");
        assert_eq!(format_time(61_234), "01:01.23");
        assert_eq!(format_time(9), "00:00.00");
        assert_eq!(format_time(999), "00:00.99");
        assert_eq!(format_time(59_999), "00:59.99");
        assert_eq!(format_time(3_599_999), "59:59.99");
    }

    #[test]
    fn test_format_time_wraps_hour() {
        assert_eq!(format_time(3_600_000), "00:00.00");
        assert_eq!(format_time(3_661_010), "01:01.01");
    }
}
