use crate::{Card, Rank, RngState, Suit};

/// Ranks dealt into the crescent. Aces and Kings stay on the foundations.
pub const PLAY_RANKS: [Rank; 11] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
];

pub const DECK_SIZE: usize = Suit::ALL.len() * PLAY_RANKS.len();

#[derive(Debug, Default, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The 44-card play deck in suit-major order.
    pub fn crescent() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in PLAY_RANKS {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    pub fn shuffled(rng: &mut RngState) -> Self {
        let mut deck = Self::crescent();
        deck.shuffle(rng);
        deck
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn crescent_deck_excludes_aces_and_kings() {
        let deck = Deck::crescent();
        assert_eq!(deck.len(), 44);
        assert!(deck
            .cards()
            .iter()
            .all(|card| card.rank != Rank::Ace && card.rank != Rank::King));
        let unique: HashSet<_> = deck.cards().iter().collect();
        assert_eq!(unique.len(), 44);
    }

    #[test]
    fn same_seed_same_order() {
        let a = Deck::shuffled(&mut RngState::from_seed(7));
        let b = Deck::shuffled(&mut RngState::from_seed(7));
        let c = Deck::shuffled(&mut RngState::from_seed(8));
        assert_eq!(a.cards(), b.cards());
        assert_ne!(a.cards(), c.cards());
    }
}
