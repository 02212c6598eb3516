use super::card::Card;
use std::collections::BTreeSet;

/// The set-validity predicate, treated as a pure collaborator by the table.
pub trait Rules: Send + Sync {
    /// Number of cards that make up a set.
    fn size(&self) -> usize;
    /// Number of distinct cards in a full deck.
    fn deck(&self) -> usize;
    /// Whether the selection forms a legal set.
    fn is_set(&self, cards: &[Card]) -> bool;
    /// Up to `limit` legal sets found among the given cards.
    fn find_sets(&self, cards: &[Card], limit: usize) -> Vec<Vec<Card>>;
    /// Number of legal sets among the given cards, capped at `limit`.
    fn count_sets(&self, cards: &[Card], limit: usize) -> usize {
        self.find_sets(cards, limit).len()
    }
}

/// Classic rules. Each card carries `count` features of `size` values;
/// `size` distinct cards form a set when every feature is either the same
/// on all of them or different on all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    count: usize,
    size: usize,
}

impl Features {
    pub fn new(count: usize, size: usize) -> Self {
        debug_assert!(size > 1);
        Self { count, size }
    }
    /// Every feature is either uniform or pairwise distinct across the cards.
    /// A prefix of a set always satisfies this, so it doubles as a search prune.
    fn consistent(&self, cards: &[Card]) -> bool {
        (0..self.count).all(|f| {
            let values = cards
                .iter()
                .map(|c| c.feature(f, self.size))
                .collect::<BTreeSet<_>>()
                .len();
            values == 1 || values == cards.len()
        })
    }
    fn search(
        &self,
        cards: &[Card],
        start: usize,
        chosen: &mut Vec<Card>,
        found: &mut Vec<Vec<Card>>,
        limit: usize,
    ) {
        if chosen.len() == self.size {
            found.push(chosen.clone());
            return;
        }
        for i in start..cards.len() {
            if found.len() >= limit {
                return;
            }
            chosen.push(cards[i]);
            if self.consistent(chosen) {
                self.search(cards, i + 1, chosen, found, limit);
            }
            chosen.pop();
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::new(set_core::FEATURE_COUNT, set_core::FEATURE_SIZE)
    }
}

impl Rules for Features {
    fn size(&self) -> usize {
        self.size
    }
    fn deck(&self) -> usize {
        self.size.pow(self.count as u32)
    }
    fn is_set(&self, cards: &[Card]) -> bool {
        cards.len() == self.size
            && cards.iter().collect::<BTreeSet<_>>().len() == self.size
            && self.consistent(cards)
    }
    fn find_sets(&self, cards: &[Card], limit: usize) -> Vec<Vec<Card>> {
        let mut found = Vec::new();
        if limit > 0 {
            let mut chosen = Vec::with_capacity(self.size);
            self.search(cards, 0, &mut chosen, &mut found, limit);
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Deck;
    fn cards(ids: &[u16]) -> Vec<Card> {
        ids.iter().copied().map(Card::from).collect()
    }
    #[test]
    fn classic_deck_size() {
        assert_eq!(Features::default().deck(), 81);
        assert_eq!(Features::default().size(), 3);
    }
    #[test]
    fn one_feature_varies() {
        // 0000, 0001, 0002
        assert!(Features::default().is_set(&cards(&[0, 1, 2])));
    }
    #[test]
    fn every_feature_varies() {
        // 0000, 1111, 2222
        assert!(Features::default().is_set(&cards(&[0, 40, 80])));
    }
    #[test]
    fn two_alike_one_different() {
        // 0000, 0001, 0010
        assert!(!Features::default().is_set(&cards(&[0, 1, 3])));
    }
    #[test]
    fn wrong_size_or_repeated() {
        let rules = Features::default();
        assert!(!rules.is_set(&cards(&[0, 1])));
        assert!(!rules.is_set(&cards(&[0, 0, 0])));
        assert!(!rules.is_set(&cards(&[0, 1, 2, 3])));
    }
    #[test]
    fn find_respects_limit() {
        let rules = Features::default();
        let deck = Deck::new(81);
        assert_eq!(rules.count_sets(deck.cards(), 1), 1);
        assert_eq!(rules.count_sets(deck.cards(), 5), 5);
        assert_eq!(rules.count_sets(deck.cards(), 0), 0);
    }
    #[test]
    fn full_deck_holds_1080_sets() {
        let rules = Features::default();
        let deck = Deck::new(81);
        assert_eq!(rules.count_sets(deck.cards(), usize::MAX), 1080);
    }
    #[test]
    fn no_set_among_unrelated_cards() {
        // 0000, 0001, 0010, 0011: every triple repeats a value in some feature
        let rules = Features::default();
        assert_eq!(rules.count_sets(&cards(&[0, 1, 3, 4]), 1), 0);
    }
    #[test]
    fn found_sets_are_legal() {
        let rules = Features::default();
        let deck = Deck::new(81);
        let found = rules.find_sets(&deck.cards()[..12], usize::MAX);
        assert!(found.iter().all(|s| rules.is_set(s)));
    }
}
