use super::*;
use parking_lot::Mutex;
use set_core::*;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Outside control of a running game: key presses in, termination, results out.
#[derive(Clone)]
pub struct Handle {
    table: Arc<Table>,
    seats: Vec<Arc<Seat>>,
    stop: CancellationToken,
    game: Arc<Mutex<Option<JoinHandle<Summary>>>>,
}

impl Handle {
    pub(crate) fn new(
        table: Arc<Table>,
        seats: Vec<Arc<Seat>>,
        stop: CancellationToken,
        game: JoinHandle<Summary>,
    ) -> Self {
        Self {
            table,
            seats,
            stop,
            game: Arc::new(Mutex::new(Some(game))),
        }
    }
    /// Routes a key press to the player's admission path.
    /// Returns whether it was queued.
    pub fn press(&self, player: PlayerId, slot: Slot) -> bool {
        match self.seats.get(player) {
            Some(seat) => seat.press(&self.table, slot),
            None => false,
        }
    }
    /// Resolves once the board next opens for selections.
    pub async fn ready(&self) {
        self.table.ready().await
    }
    /// Asks the dealer to wrap up: drain the board and announce winners.
    pub fn terminate(&self) {
        log::info!("[table] termination requested");
        self.stop.cancel();
    }
    pub fn is_terminated(&self) -> bool {
        self.stop.is_cancelled()
    }
    /// Waits for the dealer and every player to stop.
    /// Only one clone of the handle gets the summary.
    pub async fn join(&self) -> anyhow::Result<Summary> {
        let game = self.game.lock().take();
        match game {
            Some(game) => Ok(game.await?),
            None => anyhow::bail!("game already joined"),
        }
    }
}
