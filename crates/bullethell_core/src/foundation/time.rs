//! Time management utilities

use std::time::{Duration, Instant};

/// Interval gate for work that should run at most once per period.
///
/// The host calls [`Throttle::ready`] every tick; it returns `true` (and
/// re-arms) only when at least the configured interval has elapsed since the
/// last time it fired. A fresh throttle fires on the first call.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last_fired: Option<Instant>,
}

impl Throttle {
    /// Create a new throttle with the given minimum interval between firings.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
        }
    }

    /// Check whether the interval has elapsed; arms the throttle when it has.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last_fired {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }

    /// Get the configured interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_fires() {
        let mut throttle = Throttle::new(Duration::from_millis(150));
        assert!(throttle.ready(Instant::now()));
    }

    #[test]
    fn test_blocked_within_interval() {
        let mut throttle = Throttle::new(Duration::from_millis(150));
        let t0 = Instant::now();
        assert!(throttle.ready(t0));
        assert!(!throttle.ready(t0 + Duration::from_millis(100)));
        assert!(!throttle.ready(t0 + Duration::from_millis(149)));
    }

    #[test]
    fn test_fires_after_interval() {
        let mut throttle = Throttle::new(Duration::from_millis(150));
        let t0 = Instant::now();
        assert!(throttle.ready(t0));
        assert!(throttle.ready(t0 + Duration::from_millis(150)));
        assert!(throttle.ready(t0 + Duration::from_millis(300)));
    }

    #[test]
    fn test_blocked_call_does_not_rearm() {
        let mut throttle = Throttle::new(Duration::from_millis(150));
        let t0 = Instant::now();
        assert!(throttle.ready(t0));
        assert!(!throttle.ready(t0 + Duration::from_millis(100)));
        // Still measured from t0, not from the blocked call.
        assert!(throttle.ready(t0 + Duration::from_millis(150)));
    }
}
