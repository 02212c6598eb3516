use super::*;
use set_cards::*;
use std::sync::Arc;

/// Assembles a game from its configuration and collaborators.
pub struct Room {
    config: Config,
    rules: Arc<dyn Rules>,
    screen: Arc<dyn Screen>,
}

impl Room {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            rules: Arc::new(Features::new(config.feature_count, config.set_size())),
            screen: Arc::new(Console),
            config,
        })
    }
    pub fn with_rules(mut self, rules: Arc<dyn Rules>) -> Self {
        self.rules = rules;
        self
    }
    pub fn with_screen(mut self, screen: Arc<dyn Screen>) -> Self {
        self.screen = screen;
        self
    }
    /// Starts the dealer, which seats the players. Requires a tokio runtime.
    pub fn spawn(self) -> Handle {
        log::info!(
            "[table] {}x{} board, {} card deck, sets of {}",
            self.config.rows,
            self.config.columns,
            self.rules.deck(),
            self.rules.size()
        );
        let dealer = Dealer::new(self.config, self.rules, self.screen);
        let table = dealer.table().clone();
        let seats = dealer.seats().to_vec();
        let stop = dealer.stop();
        Handle::new(table, seats, stop, tokio::spawn(dealer.run()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Three cards, one set: the game ends as soon as someone finds it.
    fn single_set() -> Config {
        Config {
            rows: 1,
            columns: 3,
            feature_count: 1,
            feature_size: 3,
            players: 2,
            humans: 0,
            turn_timeout: Duration::from_secs(2),
            turn_warning: Duration::from_millis(100),
            normal_tick: Duration::from_millis(20),
            urgent_tick: Duration::from_millis(5),
            point_freeze: Duration::from_millis(10),
            penalty_freeze: Duration::from_millis(20),
            freeze_tick: Duration::from_millis(5),
            think_delay: Duration::from_millis(2),
            ..Config::default()
        }
    }

    #[test]
    fn invalid_config_is_refused() {
        let config = Config {
            players: 0,
            ..Config::default()
        };
        assert!(Room::new(config).is_err());
    }
    #[tokio::test]
    async fn rules_without_sets_end_at_once() {
        struct Barren;
        impl Rules for Barren {
            fn size(&self) -> usize {
                3
            }
            fn deck(&self) -> usize {
                9
            }
            fn is_set(&self, _: &[Card]) -> bool {
                false
            }
            fn find_sets(&self, _: &[Card], _: usize) -> Vec<Vec<Card>> {
                Vec::new()
            }
        }
        let handle = Room::new(single_set())
            .unwrap()
            .with_rules(Arc::new(Barren))
            .spawn();
        let summary = tokio::time::timeout(Duration::from_secs(2), handle.join())
            .await
            .expect("game over")
            .unwrap();
        assert_eq!(summary.scores, vec![0, 0]);
        assert_eq!(summary.winners, vec![0, 1]);
    }
    #[tokio::test]
    async fn robots_exhaust_the_deck() {
        let handle = Room::new(single_set()).unwrap().spawn();
        let summary = tokio::time::timeout(Duration::from_secs(5), handle.join())
            .await
            .expect("game over")
            .unwrap();
        assert_eq!(summary.scores.iter().sum::<u32>(), 1);
        assert_eq!(summary.winners.len(), 1);
        assert_eq!(summary.scores[summary.winners[0]], 1);
        assert!(handle.join().await.is_err());
    }
    #[tokio::test]
    async fn human_presses_route_through_handle() {
        let config = Config {
            players: 1,
            humans: 1,
            ..single_set()
        };
        let recorder = Arc::new(Recorder::default());
        let handle = Room::new(config)
            .unwrap()
            .with_screen(recorder.clone())
            .spawn();
        tokio::time::timeout(Duration::from_secs(2), handle.ready())
            .await
            .expect("board opened");
        assert!(!handle.press(3, 0));
        assert!(handle.press(0, 0));
        assert!(handle.press(0, 1));
        assert!(handle.press(0, 2));
        let summary = tokio::time::timeout(Duration::from_secs(5), handle.join())
            .await
            .expect("game over")
            .unwrap();
        assert_eq!(summary.winners, vec![0]);
        assert_eq!(summary.scores, vec![1]);
        let events = recorder.events();
        assert!(events.contains(&"score 0 1".to_string()));
        assert!(events.contains(&"winners [0]".to_string()));
    }
    #[tokio::test]
    async fn terminate_ends_a_quiet_game() {
        let config = Config {
            players: 2,
            humans: 2,
            turn_timeout: Duration::from_secs(30),
            ..single_set()
        };
        let handle = Room::new(config).unwrap().spawn();
        tokio::time::timeout(Duration::from_secs(2), handle.ready())
            .await
            .expect("board opened");
        handle.terminate();
        let summary = tokio::time::timeout(Duration::from_secs(5), handle.join())
            .await
            .expect("game over")
            .unwrap();
        assert_eq!(summary.scores, vec![0, 0]);
        assert_eq!(summary.winners, vec![0, 1]);
        assert!(handle.is_terminated());
    }
}
