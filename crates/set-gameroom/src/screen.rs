use set_cards::Card;
use set_core::*;
use std::time::Duration;

/// Fire-and-forget display notifications.
///
/// Every method defaults to doing nothing so a sink only implements what it
/// renders. Calls may arrive from any actor, sometimes while a table or seat
/// lock is held, so implementations must not call back into the room.
pub trait Screen: Send + Sync {
    fn countdown(&self, _remaining: Duration, _urgent: bool) {}
    fn freeze(&self, _player: PlayerId, _remaining: Duration) {}
    fn score(&self, _player: PlayerId, _score: Score) {}
    fn winners(&self, _players: &[PlayerId]) {}
    fn place_card(&self, _card: Card, _slot: Slot) {}
    fn remove_card(&self, _slot: Slot) {}
    fn place_token(&self, _player: PlayerId, _slot: Slot) {}
    fn remove_token(&self, _player: PlayerId, _slot: Slot) {}
}

/// Renders the table into the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Screen for Console {
    fn countdown(&self, remaining: Duration, urgent: bool) {
        match urgent {
            true => log::info!("[screen] hurry! {}", seconds(remaining)),
            false => log::trace!("[screen] {} left", seconds(remaining)),
        }
    }
    fn freeze(&self, player: PlayerId, remaining: Duration) {
        log::debug!("[screen] P{} frozen for {}", player, seconds(remaining));
    }
    fn score(&self, player: PlayerId, score: Score) {
        log::info!("[screen] P{} scores {}", player, score);
    }
    fn winners(&self, players: &[PlayerId]) {
        let names = players
            .iter()
            .map(|p| format!("P{}", p))
            .collect::<Vec<_>>()
            .join(", ");
        match players.len() {
            1 => log::info!("[screen] winner: {}", names),
            _ => log::info!("[screen] it's a tie: {}", names),
        }
    }
    fn place_card(&self, card: Card, slot: Slot) {
        log::trace!("[screen] {} -> slot {}", card, slot);
    }
    fn remove_card(&self, slot: Slot) {
        log::trace!("[screen] slot {} cleared", slot);
    }
    fn place_token(&self, player: PlayerId, slot: Slot) {
        log::trace!("[screen] P{} marks slot {}", player, slot);
    }
    fn remove_token(&self, player: PlayerId, slot: Slot) {
        log::trace!("[screen] P{} unmarks slot {}", player, slot);
    }
}

/// Captures notifications for assertions.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Recorder(parking_lot::Mutex<Vec<String>>);

#[cfg(test)]
impl Recorder {
    pub fn events(&self) -> Vec<String> {
        self.0.lock().clone()
    }
    fn push(&self, event: String) {
        self.0.lock().push(event);
    }
}

#[cfg(test)]
impl Screen for Recorder {
    fn score(&self, player: PlayerId, score: Score) {
        self.push(format!("score {} {}", player, score));
    }
    fn winners(&self, players: &[PlayerId]) {
        self.push(format!("winners {:?}", players));
    }
    fn place_card(&self, card: Card, slot: Slot) {
        self.push(format!("place_card {} {}", card, slot));
    }
    fn remove_card(&self, slot: Slot) {
        self.push(format!("remove_card {}", slot));
    }
    fn place_token(&self, player: PlayerId, slot: Slot) {
        self.push(format!("place_token {} {}", player, slot));
    }
    fn remove_token(&self, player: PlayerId, slot: Slot) {
        self.push(format!("remove_token {} {}", player, slot));
    }
}
