use super::*;
use parking_lot::RwLock;
use set_cards::*;
use set_core::*;
use std::sync::Arc;
use tokio::sync::watch;

/// Shared physical table: the board, its ready flag, and the screen.
///
/// Card placement and removal belong to the dealer. Players only touch
/// their own tokens and read slots. Every mutation is a single short
/// critical section on the board, and screen notifications are sent after
/// the lock is released.
pub struct Table {
    board: RwLock<Board>,
    ready: watch::Sender<bool>,
    screen: Arc<dyn Screen>,
}

impl Table {
    pub fn new(slots: usize, screen: Arc<dyn Screen>) -> Self {
        Self {
            board: RwLock::new(Board::new(slots)),
            ready: watch::Sender::new(false),
            screen,
        }
    }
    pub fn screen(&self) -> &dyn Screen {
        self.screen.as_ref()
    }
    pub fn slots(&self) -> usize {
        self.board.read().len()
    }
    pub fn count(&self) -> usize {
        self.board.read().count()
    }
    pub fn card(&self, slot: Slot) -> Option<Card> {
        self.board.read().card(slot)
    }
    pub fn slot(&self, card: Card) -> Option<Slot> {
        self.board.read().slot(card)
    }
    pub fn cards(&self) -> Vec<Card> {
        self.board.read().cards()
    }
    pub fn vacancies(&self) -> Vec<Slot> {
        self.board.read().vacancies()
    }
    pub fn occupied(&self) -> Vec<Slot> {
        self.board.read().occupied()
    }
    pub fn tokens(&self, slot: Slot) -> Vec<PlayerId> {
        self.board.read().tokens(slot)
    }
}

/// Dealer-only card mutations.
impl Table {
    pub fn place_card(&self, card: Card, slot: Slot) -> Result<(), BoardError> {
        self.board.write().place(card, slot)?;
        self.screen.place_card(card, slot);
        Ok(())
    }
    /// Clears the slot and any tokens on it. No-op on an empty slot.
    pub fn remove_card(&self, slot: Slot) -> Option<Card> {
        let (card, swept) = self.board.write().remove(slot)?;
        swept
            .into_iter()
            .for_each(|player| self.screen.remove_token(player, slot));
        self.screen.remove_card(slot);
        Some(card)
    }
    /// Clears every slot, returning the cards in slot order.
    pub fn sweep(&self) -> Vec<Card> {
        (0..self.slots())
            .filter_map(|slot| self.remove_card(slot))
            .collect()
    }
}

/// Per-player token bookkeeping.
impl Table {
    pub fn place_token(&self, player: PlayerId, slot: Slot) -> bool {
        let placed = self.board.write().mark(player, slot);
        if placed {
            self.screen.place_token(player, slot);
        }
        placed
    }
    pub fn remove_token(&self, player: PlayerId, slot: Slot) -> bool {
        let removed = self.board.write().unmark(player, slot);
        if removed {
            self.screen.remove_token(player, slot);
        }
        removed
    }
}

/// Board-ready signal.
impl Table {
    pub fn is_ready(&self) -> bool {
        *self.ready.borrow()
    }
    pub fn set_ready(&self, ready: bool) {
        if self.ready.send_replace(ready) != ready {
            log::trace!("[table] board {}", if ready { "ready" } else { "not ready" });
        }
    }
    /// Resolves once the board is ready.
    pub async fn ready(&self) {
        let mut rx = self.ready.subscribe();
        let _ = rx.wait_for(|ready| *ready).await;
    }
}
