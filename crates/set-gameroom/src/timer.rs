use std::time::Duration;
use tokio::time::Instant;

/// Round timing knobs, split out of [`crate::Config`] for the dealer.
#[derive(Debug, Clone, Copy)]
pub struct TimerConfig {
    pub timeout: Duration,
    pub warning: Duration,
    pub normal: Duration,
    pub urgent: Duration,
}

/// Deadline for the current round.
///
/// Remaining time is always derived from the deadline rather than
/// decremented per tick, so a late wake never skews the countdown.
#[derive(Debug)]
pub struct Countdown {
    config: TimerConfig,
    deadline: Option<Instant>,
}

impl Countdown {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            deadline: None,
        }
    }
    /// Starts a fresh round.
    pub fn reset(&mut self) {
        self.deadline = Some(Instant::now() + self.config.timeout);
    }
    pub fn clear(&mut self) {
        self.deadline = None;
    }
    #[cfg(test)]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
    pub fn remaining(&self) -> Duration {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
            .unwrap_or_default()
    }
    pub fn expired(&self) -> bool {
        self.deadline.map(|d| Instant::now() >= d).unwrap_or(true)
    }
    /// Inside the warning window the display turns urgent.
    pub fn urgent(&self) -> bool {
        self.remaining() < self.config.warning
    }
    /// How often the display should be refreshed right now.
    pub fn cadence(&self) -> Duration {
        match self.urgent() {
            true => self.config.urgent,
            false => self.config.normal,
        }
    }
    /// Longest the dealer may block before the next display refresh.
    pub fn wait(&self) -> Duration {
        self.cadence().min(self.remaining())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn config(timeout: u64, warning: u64) -> TimerConfig {
        TimerConfig {
            timeout: Duration::from_millis(timeout),
            warning: Duration::from_millis(warning),
            normal: Duration::from_millis(50),
            urgent: Duration::from_millis(5),
        }
    }
    #[test]
    fn starts_expired() {
        let countdown = Countdown::new(config(1000, 100));
        assert!(countdown.deadline().is_none());
        assert!(countdown.expired());
        assert_eq!(countdown.remaining(), Duration::ZERO);
    }
    #[test]
    fn reset_sets_deadline() {
        let mut countdown = Countdown::new(config(60_000, 5_000));
        countdown.reset();
        assert!(!countdown.expired());
        assert!(!countdown.urgent());
        assert!(countdown.remaining() > Duration::from_secs(59));
        assert_eq!(countdown.cadence(), Duration::from_millis(50));
    }
    #[test]
    fn warning_window_is_urgent() {
        let mut countdown = Countdown::new(config(1_000, 5_000));
        countdown.reset();
        assert!(countdown.urgent());
        assert_eq!(countdown.cadence(), Duration::from_millis(5));
    }
    #[test]
    fn wait_never_overshoots_deadline() {
        let mut countdown = Countdown::new(config(20, 10));
        countdown.reset();
        assert!(countdown.wait() <= Duration::from_millis(20));
        countdown.clear();
        assert_eq!(countdown.wait(), Duration::ZERO);
    }
    #[tokio::test]
    async fn expires_after_timeout() {
        let mut countdown = Countdown::new(config(10, 5));
        countdown.reset();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(countdown.expired());
        assert_eq!(countdown.remaining(), Duration::ZERO);
    }
}
