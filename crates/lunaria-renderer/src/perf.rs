//! Frame counting and timing.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Counts presented frames and keeps a rolling window of frame durations.
///
/// The frame count drives every animation term, so it only advances
/// when a frame is actually presented.
pub struct FrameClock {
    frame: u64,
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    last_report: Instant,
    max_samples: usize,
}

impl FrameClock {
    /// Create a new clock at frame 0 with a 120-sample rolling window.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame: 0,
            frame_times: VecDeque::new(),
            last_frame: now,
            last_report: now,
            max_samples: 120,
        }
    }

    /// Frames presented so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Record a presented frame.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.frame += 1;
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        let total = self.window_secs();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        (self.window_secs() / self.frame_times.len() as f64) * 1000.0
    }

    /// Number of frame samples currently stored.
    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    /// True once every `interval`; resets the report timer when it fires.
    pub fn report_due(&mut self, interval: Duration) -> bool {
        let now = Instant::now();
        if now.saturating_duration_since(self.last_report) >= interval {
            self.last_report = now;
            true
        } else {
            false
        }
    }

    fn window_secs(&self) -> f64 {
        self.frame_times.iter().map(|d| d.as_secs_f64()).sum()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_frame_zero() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.fps(), 0.0);
        assert_eq!(clock.frame_time_ms(), 0.0);
    }

    #[test]
    fn tick_advances_frame_by_one() {
        let mut clock = FrameClock::new();
        for expected in 1..=5 {
            clock.tick();
            assert_eq!(clock.frame(), expected);
        }
    }

    #[test]
    fn fps_from_fixed_intervals() {
        let mut clock = FrameClock::new();
        let start = clock.last_frame;
        for i in 1..=10 {
            clock.tick_at(start + Duration::from_millis(20 * i));
        }
        assert!((clock.fps() - 50.0).abs() < 1e-6);
        assert!((clock.frame_time_ms() - 20.0).abs() < 1e-6);
        assert_eq!(clock.sample_count(), 10);
    }

    #[test]
    fn max_samples_respected() {
        let mut clock = FrameClock::new();
        for _ in 0..200 {
            clock.tick();
        }
        assert!(clock.sample_count() <= 120);
        assert_eq!(clock.frame(), 200);
    }

    #[test]
    fn report_due_after_interval() {
        let mut clock = FrameClock::new();
        assert!(clock.report_due(Duration::ZERO));
        assert!(!clock.report_due(Duration::from_secs(3600)));
    }
}
