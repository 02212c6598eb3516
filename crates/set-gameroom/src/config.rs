use super::*;
use set_core::*;
use std::time::Duration;

/// Table geometry, deck composition, seating, and timing for one game.
#[derive(Debug, Clone)]
pub struct Config {
    pub rows: usize,
    pub columns: usize,
    /// Features per card.
    pub feature_count: usize,
    /// Values per feature; also the number of cards in a set.
    pub feature_size: usize,
    pub players: usize,
    /// The first `humans` players take input from outside; the rest get a robot.
    pub humans: usize,
    pub turn_timeout: Duration,
    pub turn_warning: Duration,
    pub normal_tick: Duration,
    pub urgent_tick: Duration,
    pub point_freeze: Duration,
    pub penalty_freeze: Duration,
    pub freeze_tick: Duration,
    pub think_delay: Duration,
    /// Sweep and redeal a board that has no set while the deck still has one.
    pub ensure_set: bool,
    pub reshuffle_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: ROWS,
            columns: COLUMNS,
            feature_count: FEATURE_COUNT,
            feature_size: FEATURE_SIZE,
            players: PLAYERS,
            humans: HUMANS,
            turn_timeout: TURN_TIMEOUT,
            turn_warning: TURN_WARNING,
            normal_tick: NORMAL_TICK,
            urgent_tick: URGENT_TICK,
            point_freeze: POINT_FREEZE,
            penalty_freeze: PENALTY_FREEZE,
            freeze_tick: FREEZE_TICK,
            think_delay: THINK_DELAY,
            ensure_set: true,
            reshuffle_limit: RESHUFFLE_LIMIT,
        }
    }
}

impl Config {
    pub fn slots(&self) -> usize {
        self.rows * self.columns
    }
    pub fn set_size(&self) -> usize {
        self.feature_size
    }
    pub fn is_human(&self, player: PlayerId) -> bool {
        player < self.humans
    }
    pub fn timer(&self) -> TimerConfig {
        TimerConfig {
            timeout: self.turn_timeout,
            warning: self.turn_warning,
            normal: self.normal_tick,
            urgent: self.urgent_tick,
        }
    }
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.slots() > 0, "board needs at least one slot");
        anyhow::ensure!(self.feature_count > 0, "cards need at least one feature");
        anyhow::ensure!(self.feature_size > 1, "a set needs at least two cards");
        anyhow::ensure!(
            self.feature_size.checked_pow(self.feature_count as u32)
                .is_some_and(|n| n <= u16::MAX as usize),
            "deck of {}^{} cards is too large",
            self.feature_size,
            self.feature_count
        );
        anyhow::ensure!(self.players > 0, "table needs at least one player");
        anyhow::ensure!(
            self.humans <= self.players,
            "{} humans cannot fit among {} players",
            self.humans,
            self.players
        );
        anyhow::ensure!(
            self.turn_warning < self.turn_timeout,
            "warning threshold must be shorter than the round"
        );
        anyhow::ensure!(
            !self.normal_tick.is_zero() && !self.urgent_tick.is_zero(),
            "dealer ticks must be positive"
        );
        anyhow::ensure!(!self.freeze_tick.is_zero(), "freeze tick must be positive");
        anyhow::ensure!(!self.think_delay.is_zero(), "robot think delay must be positive");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.slots(), 12);
        assert_eq!(config.set_size(), 3);
        assert!(!config.is_human(0));
    }
    #[test]
    fn rejects_more_humans_than_players() {
        let config = Config {
            humans: 4,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
    #[test]
    fn rejects_warning_past_timeout() {
        let config = Config {
            turn_warning: Duration::from_secs(90),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
    #[test]
    fn rejects_oversized_deck() {
        let config = Config {
            feature_count: 20,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
