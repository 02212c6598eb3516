use super::card::Card;
use set_core::PlayerId;
use set_core::Slot;
use std::collections::BTreeSet;
use std::collections::HashMap;

/// Structural misuse of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    OutOfBounds(Slot),
    Occupied(Slot),
    Duplicate(Card),
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds(slot) => write!(f, "slot {} is off the board", slot),
            Self::Occupied(slot) => write!(f, "slot {} already holds a card", slot),
            Self::Duplicate(card) => write!(f, "card {} is already on the board", card),
        }
    }
}

impl std::error::Error for BoardError {}

/// Fixed grid of slots, each holding at most one card.
///
/// While a card is on the board it occupies exactly one slot, and the
/// reverse lookup is kept in step. Tokens are per-player markers on slots;
/// they carry no legality of their own and vanish with the card beneath them.
#[derive(Debug, Clone)]
pub struct Board {
    slots: Vec<Option<Card>>,
    positions: HashMap<Card, Slot>,
    tokens: Vec<BTreeSet<PlayerId>>,
}

impl Board {
    pub fn new(n: usize) -> Self {
        Self {
            slots: vec![None; n],
            positions: HashMap::with_capacity(n),
            tokens: vec![BTreeSet::new(); n],
        }
    }
    /// Number of slots, occupied or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
    /// Number of cards currently on the board.
    pub fn count(&self) -> usize {
        self.positions.len()
    }
    pub fn card(&self, slot: Slot) -> Option<Card> {
        self.slots.get(slot).copied().flatten()
    }
    pub fn slot(&self, card: Card) -> Option<Slot> {
        self.positions.get(&card).copied()
    }
    /// Cards on the board in slot order.
    pub fn cards(&self) -> Vec<Card> {
        self.slots.iter().flatten().copied().collect()
    }
    /// Slots waiting for a card.
    pub fn vacancies(&self) -> Vec<Slot> {
        (0..self.len()).filter(|s| self.slots[*s].is_none()).collect()
    }
    /// Slots holding a card.
    pub fn occupied(&self) -> Vec<Slot> {
        (0..self.len()).filter(|s| self.slots[*s].is_some()).collect()
    }
    /// Players holding a token on the slot.
    pub fn tokens(&self, slot: Slot) -> Vec<PlayerId> {
        self.tokens
            .get(slot)
            .map(|t| t.iter().copied().collect())
            .unwrap_or_default()
    }
    pub fn place(&mut self, card: Card, slot: Slot) -> Result<(), BoardError> {
        match self.slots.get(slot) {
            None => Err(BoardError::OutOfBounds(slot)),
            Some(Some(_)) => Err(BoardError::Occupied(slot)),
            Some(None) if self.positions.contains_key(&card) => Err(BoardError::Duplicate(card)),
            Some(None) => {
                self.slots[slot] = Some(card);
                self.positions.insert(card, slot);
                Ok(())
            }
        }
    }
    /// Takes the card off a slot along with every token on it.
    /// Returns the card and the players whose tokens were swept away,
    /// or None if the slot was already empty.
    pub fn remove(&mut self, slot: Slot) -> Option<(Card, Vec<PlayerId>)> {
        let card = self.slots.get_mut(slot)?.take()?;
        self.positions.remove(&card);
        let swept = std::mem::take(&mut self.tokens[slot]);
        Some((card, swept.into_iter().collect()))
    }
    /// Returns false if the slot is off the board, holds no card,
    /// or the token was already there.
    pub fn mark(&mut self, player: PlayerId, slot: Slot) -> bool {
        match self.card(slot) {
            Some(_) => self.tokens[slot].insert(player),
            None => false,
        }
    }
    /// Returns false if there was no such token.
    pub fn unmark(&mut self, player: PlayerId, slot: Slot) -> bool {
        self.tokens
            .get_mut(slot)
            .map(|t| t.remove(&player))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn place_keeps_bijection() {
        let mut board = Board::new(12);
        board.place(Card::from(7), 3).unwrap();
        assert_eq!(board.card(3), Some(Card::from(7)));
        assert_eq!(board.slot(Card::from(7)), Some(3));
        assert_eq!(board.count(), 1);
        assert_eq!(board.vacancies().len(), 11);
        assert_eq!(board.occupied(), vec![3]);
    }
    #[test]
    fn place_rejects_occupied_and_duplicates() {
        let mut board = Board::new(12);
        board.place(Card::from(7), 3).unwrap();
        assert_eq!(board.place(Card::from(8), 3), Err(BoardError::Occupied(3)));
        assert_eq!(board.place(Card::from(7), 4), Err(BoardError::Duplicate(Card::from(7))));
        assert_eq!(board.place(Card::from(9), 12), Err(BoardError::OutOfBounds(12)));
    }
    #[test]
    fn remove_sweeps_tokens() {
        let mut board = Board::new(12);
        board.place(Card::from(7), 3).unwrap();
        assert!(board.mark(0, 3));
        assert!(board.mark(2, 3));
        assert!(!board.mark(2, 3));
        let (card, swept) = board.remove(3).unwrap();
        assert_eq!(card, Card::from(7));
        assert_eq!(swept, vec![0, 2]);
        assert!(board.tokens(3).is_empty());
        assert_eq!(board.slot(card), None);
        assert!(board.remove(3).is_none());
    }
    #[test]
    fn mark_needs_a_card() {
        let mut board = Board::new(4);
        assert!(!board.mark(0, 1));
        assert!(!board.mark(0, 9));
        assert!(board.tokens(1).is_empty());
    }
    #[test]
    fn unmark_missing_token() {
        let mut board = Board::new(4);
        assert!(!board.unmark(1, 0));
        assert!(!board.unmark(1, 40));
    }
}
