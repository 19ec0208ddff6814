//! Repeating countdown timer.

use crate::input::{Duration, Instant};

/// Default timer length.
pub const DEFAULT_TIMER_SECS: f64 = 10.0;

/// Timer that measures elapsed time against a duration and restarts from
/// zero whenever the duration is reached.
#[derive(Debug, Clone)]
pub struct Timer {
    duration: Duration,
    start: Option<Instant>,
    elapsed: Duration,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(Duration::from_secs_f64(DEFAULT_TIMER_SECS))
    }
}

impl Timer {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            start: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance to `now`. The first tick starts the timer.
    pub fn tick(&mut self, now: Instant) {
        let start = *self.start.get_or_insert(now);
        let elapsed = now.saturating_duration_since(start);
        if elapsed >= self.duration {
            self.start = Some(now);
            self.elapsed = Duration::ZERO;
        } else {
            self.elapsed = elapsed;
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Change the duration; takes effect on the next tick.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Progress in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        let mut timer = Timer::default();
        let t0 = Instant::now();
        timer.tick(t0);
        assert_eq!(timer.elapsed(), Duration::ZERO);

        timer.tick(t0 + Duration::from_millis(2500));
        assert!((timer.ratio() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_restarts_when_duration_reached() {
        let mut timer = Timer::new(Duration::from_secs(2));
        let t0 = Instant::now();
        timer.tick(t0);
        timer.tick(t0 + Duration::from_secs(2));
        assert_eq!(timer.elapsed(), Duration::ZERO);

        timer.tick(t0 + Duration::from_secs(3));
        assert_eq!(timer.elapsed(), Duration::from_secs(1));
    }

    #[test]
    fn test_shrinking_duration_restarts_on_next_tick() {
        let mut timer = Timer::new(Duration::from_secs(10));
        let t0 = Instant::now();
        timer.tick(t0);
        timer.tick(t0 + Duration::from_secs(5));
        timer.set_duration(Duration::from_secs(3));
        timer.tick(t0 + Duration::from_secs(6));
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert_eq!(timer.duration(), Duration::from_secs(3));
    }
}
