use std::time::Duration;

/// Decides when gravity pulls the falling piece down one row.
///
/// Fed a monotonically increasing timestamp once per frame, the clock
/// accumulates the elapsed time between frames. Once more than
/// [`DROP_INTERVAL`](Self::DROP_INTERVAL) has accumulated a drop is due;
/// every drop, automatic or player-driven, resets the accumulator so a
/// soft drop also postpones the next gravity step.
#[derive(Debug, Clone, Default)]
pub struct GravityClock {
    last_time: Option<Duration>,
    accumulated: Duration,
}

impl GravityClock {
    /// Time between automatic drops.
    pub const DROP_INTERVAL: Duration = Duration::from_millis(1000);

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a frame timestamp and reports whether a drop is due.
    ///
    /// Timestamps that go backwards contribute no elapsed time.
    pub fn observe(&mut self, now: Duration) -> bool {
        let delta = self
            .last_time
            .map_or(Duration::ZERO, |prev| now.saturating_sub(prev));
        self.last_time = Some(now);
        self.accumulated += delta;
        self.accumulated > Self::DROP_INTERVAL
    }

    /// Restarts the accumulation after a drop.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_first_observation_only_anchors() {
        let mut clock = GravityClock::new();
        assert!(!clock.observe(ms(5000)));
    }

    #[test]
    fn test_drop_due_after_interval_elapses() {
        let mut clock = GravityClock::new();
        assert!(!clock.observe(ms(0)));
        assert!(!clock.observe(ms(600)));
        assert!(clock.observe(ms(1200)));
    }

    #[test]
    fn test_exactly_the_interval_is_not_yet_due() {
        let mut clock = GravityClock::new();
        clock.observe(ms(0));
        assert!(!clock.observe(ms(1000)));
        assert!(clock.observe(ms(1001)));
    }

    #[test]
    fn test_reset_restarts_accumulation() {
        let mut clock = GravityClock::new();
        clock.observe(ms(0));
        clock.observe(ms(900));
        clock.reset();
        assert!(!clock.observe(ms(1500)));
        assert!(clock.observe(ms(2000)));
    }

    #[test]
    fn test_backwards_timestamps_are_ignored() {
        let mut clock = GravityClock::new();
        clock.observe(ms(1000));
        assert!(!clock.observe(ms(400)));
        assert!(!clock.observe(ms(900)));
        assert!(clock.observe(ms(1500)));
    }
}
