use crate::{Card, LayoutConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PileId(pub usize);

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One stack of the crescent, bottom to top. Only the top card is face up and
/// draggable; that holds by construction since nothing else is reachable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pile {
    id: PileId,
    cards: Vec<Card>,
}

impl Pile {
    pub fn new(id: PileId, cards: Vec<Card>) -> Self {
        Self { id, cards }
    }

    pub fn id(&self) -> PileId {
        self.id
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn position_of(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|item| *item == card)
    }

    pub fn is_top(&self, card: Card) -> bool {
        self.top() == Some(card)
    }

    /// Removes the top card and returns it with the card it uncovers.
    pub(crate) fn take_top(&mut self) -> Option<(Card, Option<Card>)> {
        let taken = self.cards.pop()?;
        Some((taken, self.top()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("{cards} cards do not fit in {stacks} stacks of {depth}")]
    Overflow {
        cards: usize,
        stacks: usize,
        depth: usize,
    },
    #[error("stack depth must be at least 1")]
    ZeroDepth,
}

/// Deals `cards` front to back into consecutive piles of `stack_depth`,
/// stopping early once the cards run out. The last card dealt into a pile is
/// its top.
pub fn deal_crescent(cards: &[Card], layout: &LayoutConfig) -> Result<Vec<Pile>, LayoutError> {
    if layout.stack_depth == 0 {
        return Err(LayoutError::ZeroDepth);
    }
    if cards.len() > layout.capacity() {
        return Err(LayoutError::Overflow {
            cards: cards.len(),
            stacks: layout.stack_count,
            depth: layout.stack_depth,
        });
    }
    let piles = cards
        .chunks(layout.stack_depth)
        .enumerate()
        .map(|(index, chunk)| Pile::new(PileId(index), chunk.to_vec()))
        .collect();
    Ok(piles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, RngState};

    #[test]
    fn default_layout_deals_fifteen_piles() {
        let deck = Deck::shuffled(&mut RngState::from_seed(3));
        let piles = deal_crescent(deck.cards(), &LayoutConfig::default()).unwrap();
        assert_eq!(piles.len(), 15);
        assert!(piles[..14].iter().all(|pile| pile.len() == 3));
        assert_eq!(piles[14].len(), 2);
        assert_eq!(piles[14].top(), deck.cards().last().copied());
        for (index, pile) in piles.iter().enumerate() {
            assert_eq!(pile.id(), PileId(index));
            assert_eq!(pile.cards(), &deck.cards()[index * 3..(index * 3 + pile.len())]);
        }
    }

    #[test]
    fn short_input_stops_early() {
        let deck = Deck::crescent();
        let piles = deal_crescent(&deck.cards()[..4], &LayoutConfig::default()).unwrap();
        assert_eq!(piles.len(), 2);
        assert_eq!(piles[1].cards(), &deck.cards()[3..4]);
        assert!(deal_crescent(&[], &LayoutConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn overflow_is_an_error() {
        let layout = LayoutConfig {
            stack_count: 2,
            stack_depth: 3,
        };
        let deck = Deck::crescent();
        assert_eq!(
            deal_crescent(&deck.cards()[..7], &layout),
            Err(LayoutError::Overflow {
                cards: 7,
                stacks: 2,
                depth: 3
            })
        );
    }

    #[test]
    fn take_top_uncovers_the_card_below() {
        let deck = Deck::crescent();
        let mut pile = Pile::new(PileId(0), deck.cards()[..2].to_vec());
        assert_eq!(pile.take_top(), Some((deck.cards()[1], Some(deck.cards()[0]))));
        assert_eq!(pile.take_top(), Some((deck.cards()[0], None)));
        assert_eq!(pile.take_top(), None);
    }
}
