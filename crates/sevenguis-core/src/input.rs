//! Pointer input filtering.

// Use web_time for WASM compatibility
#[cfg(target_arch = "wasm32")]
pub use web_time::{Duration, Instant};
#[cfg(not(target_arch = "wasm32"))]
pub use std::time::{Duration, Instant};

/// Minimum gap between two accepted clicks.
pub const CLICK_DEBOUNCE_MS: u64 = 20;

/// Drops clicks that arrive too soon after the previously accepted one.
///
/// The gap is measured from the last *accepted* click, so a burst of rapid
/// clicks cannot keep extending the quiet period.
#[derive(Debug, Clone)]
pub struct ClickDebouncer {
    interval: Duration,
    last_accepted: Option<Instant>,
}

impl Default for ClickDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickDebouncer {
    /// Create a debouncer with the default interval.
    pub fn new() -> Self {
        Self::with_interval(Duration::from_millis(CLICK_DEBOUNCE_MS))
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: None,
        }
    }

    /// Decide whether a click at `now` goes through, remembering it if so.
    /// The first click is always accepted.
    pub fn accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            if now.saturating_duration_since(last) < self.interval {
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time of the last accepted click.
    pub fn last_accepted(&self) -> Option<Instant> {
        self.last_accepted
    }
}
