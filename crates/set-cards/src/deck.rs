use super::card::Card;

/// Cards that are neither on the board nor claimed.
///
/// Owned exclusively by the dealer. Shrinks as cards are dealt and grows
/// again when the board is swept back into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// Creates a full deck of `n` distinct cards.
    pub fn new(n: usize) -> Self {
        Self((0..n as u16).map(Card::from).collect())
    }
    /// Draws and removes a uniformly random card, if any remain.
    pub fn draw(&mut self) -> Option<Card> {
        match self.0.len() {
            0 => None,
            n => Some(self.0.swap_remove(rand::random_range(0..n))),
        }
    }
    /// Returns a card to the deck.
    pub fn push(&mut self, card: Card) {
        debug_assert!(!self.contains(&card));
        self.0.push(card);
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Remaining cards, in no particular order.
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl Extend<Card> for Deck {
    fn extend<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        cards.into_iter().for_each(|card| self.push(card));
    }
}
