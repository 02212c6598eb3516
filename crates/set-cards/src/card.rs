/// A card identified by its index in a freshly built deck.
///
/// The identifier is opaque to the table: only [`Rules`] knows how to read
/// features out of it. Under [`Features`], index `n` is the base-`size`
/// expansion of `n`, one digit per feature.
///
/// [`Rules`]: super::rules::Rules
/// [`Features`]: super::rules::Features
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u16);

impl Card {
    /// Position of this card in a freshly built deck.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
    /// Value of one feature when every feature ranges over `size` values.
    pub fn feature(&self, feature: usize, size: usize) -> usize {
        (0..feature).fold(self.index(), |n, _| n / size) % size
    }
}

/// u16 isomorphism
impl From<u16> for Card {
    fn from(n: u16) -> Self {
        Self(n)
    }
}
impl From<Card> for u16 {
    fn from(c: Card) -> u16 {
        c.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn features_are_base_digits() {
        // 5 = 0*27 + 0*9 + 1*3 + 2
        let card = Card::from(5);
        assert_eq!(card.feature(0, 3), 2);
        assert_eq!(card.feature(1, 3), 1);
        assert_eq!(card.feature(2, 3), 0);
        assert_eq!(card.feature(3, 3), 0);
    }
    #[test]
    fn last_card_is_all_max() {
        let card = Card::from(80);
        assert!((0..4).all(|f| card.feature(f, 3) == 2));
    }
}
