use super::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Synthesizes key presses for a player nobody is sitting at.
///
/// Presses go through the same admission path as a human's. While the
/// player is frozen or the board is not ready, the robot parks until its
/// seat is released by the dealer or by the player.
pub struct Robot {
    seat: Arc<Seat>,
    table: Arc<Table>,
    delay: Duration,
    stop: CancellationToken,
}

impl Robot {
    pub fn spawn(
        seat: Arc<Seat>,
        table: Arc<Table>,
        delay: Duration,
        stop: CancellationToken,
    ) -> JoinHandle<()> {
        let robot = Self {
            seat,
            table,
            delay,
            stop,
        };
        tokio::spawn(robot.run())
    }
    async fn run(self) {
        let id = self.seat.id();
        log::debug!("[robot P{}] starting", id);
        while !self.stop.is_cancelled() {
            if self.seat.is_awake() && self.table.is_ready() {
                let slot = rand::random_range(0..self.table.slots());
                if self.seat.press(&self.table, slot) {
                    log::trace!("[robot P{}] pressed {}", id, slot);
                }
                tokio::select! {
                    biased;
                    _ = self.stop.cancelled() => break,
                    _ = tokio::time::sleep(self.pause()) => {}
                }
            } else {
                tokio::select! {
                    biased;
                    _ = self.stop.cancelled() => break,
                    _ = self.seat.released() => {}
                }
            }
        }
        log::debug!("[robot P{}] stopped", id);
    }
    fn pause(&self) -> Duration {
        let micros = self.delay.as_micros().max(1) as u64;
        Duration::from_micros(rand::random_range(1..=micros))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use set_cards::Card;
    fn table() -> Arc<Table> {
        let table = Arc::new(Table::new(12, Arc::new(Console)));
        (0..12).for_each(|s| table.place_card(Card::from(s as u16), s).unwrap());
        table
    }
    #[tokio::test]
    async fn parks_until_released() {
        let table = table();
        let seat = Arc::new(Seat::new(0, false, 3));
        let stop = CancellationToken::new();
        let handle = Robot::spawn(seat.clone(), table.clone(), Duration::from_millis(1), stop.clone());
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(seat.pending().is_empty());
        table.set_ready(true);
        seat.release();
        tokio::time::timeout(Duration::from_secs(2), async {
            while seat.pending().len() < 3 {
                tokio::time::sleep(Duration::from_millis(2)).await;
            }
        })
        .await
        .expect("robot pressed keys");
        stop.cancel();
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("robot stopped")
            .unwrap();
    }
}
