use crate::{rules, AnchorId, Card, Foundations, Pile, PileId, Rank, Row};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Contract violations. A caller that only places interactable cards after a
/// successful `can_place` never sees these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("{0} is not in play")]
    NotInPlay(Card),
    #[error("{0} is not on top of its pile")]
    NotInteractable(Card),
    #[error("{card} cannot go on {anchor}")]
    IllegalPlacement { card: Card, anchor: AnchorId },
    #[error("build direction already locked to {0}")]
    DirectionLocked(Row),
    #[error("{0} appears more than once")]
    DuplicateCard(Card),
    #[error("{0} starts a foundation and cannot be in play")]
    FoundationCard(Card),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Location {
    Pile { pile: PileId, position: usize },
    Foundation(AnchorId),
}

/// Where a card is and what the player may do with it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardState {
    pub card: Card,
    pub location: Location,
    pub revealed: bool,
    pub interactable: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedCard {
    pub card: Card,
    pub anchor: AnchorId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceOutcome {
    pub anchor: AnchorId,
    /// New top of the card's former pile, now face up and draggable.
    pub revealed: Option<Card>,
    /// Set when this placement locked the build direction.
    pub locked: Option<Row>,
    /// True exactly on the placement that emptied the crescent.
    pub won: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    piles: Vec<Pile>,
    foundations: Foundations,
    build_direction: Option<Row>,
    placed: Vec<PlacedCard>,
    won: bool,
}

impl GameState {
    /// Fresh state over dealt piles: foundations on Aces and Kings, no
    /// direction chosen.
    pub fn new(piles: Vec<Pile>) -> Self {
        Self {
            piles,
            foundations: Foundations::new(),
            build_direction: None,
            placed: Vec::new(),
            won: false,
        }
    }

    /// Builds piles from bottom-to-top card lists, numbered in order.
    pub fn from_stacks(stacks: Vec<Vec<Card>>) -> Result<Self, RuleError> {
        let piles = stacks
            .into_iter()
            .enumerate()
            .map(|(index, cards)| Pile::new(PileId(index), cards))
            .collect();
        let state = Self::new(piles);
        state.validate()?;
        Ok(state)
    }

    /// Checks that every card is held once, either in a pile or on a
    /// foundation, and that no Ace or King is in play.
    pub fn validate(&self) -> Result<(), RuleError> {
        let mut seen = HashSet::new();
        for card in self.cards_in_play() {
            if matches!(card.rank, Rank::Ace | Rank::King) {
                return Err(RuleError::FoundationCard(card));
            }
            if !seen.insert(card) {
                return Err(RuleError::DuplicateCard(card));
            }
        }
        for placed in &self.placed {
            if !seen.insert(placed.card) {
                return Err(RuleError::DuplicateCard(placed.card));
            }
        }
        Ok(())
    }

    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        self.piles.iter().find(|pile| pile.id() == id)
    }

    pub fn foundations(&self) -> &Foundations {
        &self.foundations
    }

    pub fn build_direction(&self) -> Option<Row> {
        self.build_direction
    }

    /// Placement history, oldest first.
    pub fn placed(&self) -> &[PlacedCard] {
        &self.placed
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// The row that was built on, once the game is won.
    pub fn used_row(&self) -> Option<Row> {
        if self.won {
            self.build_direction
        } else {
            None
        }
    }

    pub fn unused_row(&self) -> Option<Row> {
        self.used_row().map(Row::opposite)
    }

    /// Cards not yet on a foundation, pile by pile, bottom to top.
    pub fn cards_in_play(&self) -> impl Iterator<Item = Card> + '_ {
        self.piles.iter().flat_map(|pile| pile.cards().iter().copied())
    }

    pub fn in_play_count(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }

    pub fn locate(&self, card: Card) -> Option<(PileId, usize)> {
        self.piles
            .iter()
            .find_map(|pile| pile.position_of(card).map(|position| (pile.id(), position)))
    }

    pub fn is_interactable(&self, card: Card) -> bool {
        self.piles.iter().any(|pile| pile.is_top(card))
    }

    /// Top cards of non-empty piles in pile order.
    pub fn interactable_cards(&self) -> Vec<Card> {
        self.piles.iter().filter_map(Pile::top).collect()
    }

    pub fn card_state(&self, card: Card) -> Option<CardState> {
        if let Some((pile, position)) = self.locate(card) {
            let top = self.pile(pile).is_some_and(|item| item.is_top(card));
            return Some(CardState {
                card,
                location: Location::Pile { pile, position },
                revealed: top,
                interactable: top,
            });
        }
        // Only the latest card on each anchor is still showing.
        let anchor = self
            .placed
            .iter()
            .rev()
            .find(|placed| placed.card == card)?
            .anchor;
        Some(CardState {
            card,
            location: Location::Foundation(anchor),
            revealed: self.foundations.face(anchor) == card,
            interactable: false,
        })
    }

    pub fn can_place(&self, card: Card, anchor: AnchorId) -> bool {
        rules::can_place(card, anchor, &self.foundations, self.build_direction)
    }

    pub fn legal_anchor(&self, card: Card) -> Option<AnchorId> {
        rules::legal_anchor(card, &self.foundations, self.build_direction)
    }

    /// Moves the top card of a pile onto `anchor`: the anchor shows the card,
    /// the card leaves play, the card below it is uncovered and the direction
    /// locks on first use.
    pub fn place(&mut self, card: Card, anchor: AnchorId) -> Result<PlaceOutcome, RuleError> {
        let index = self
            .piles
            .iter()
            .position(|pile| pile.position_of(card).is_some())
            .ok_or(RuleError::NotInPlay(card))?;
        if !self.piles[index].is_top(card) {
            return Err(RuleError::NotInteractable(card));
        }
        if !self.can_place(card, anchor) {
            return Err(RuleError::IllegalPlacement { card, anchor });
        }
        let revealed = self.piles[index]
            .take_top()
            .and_then(|(_, uncovered)| uncovered);
        self.foundations.set_face(anchor, card);
        self.placed.push(PlacedCard { card, anchor });
        let locked = if self.build_direction.is_none() {
            self.build_direction = Some(anchor.row);
            Some(anchor.row)
        } else {
            None
        };
        let won = !self.won && self.in_play_count() == 0;
        if won {
            self.won = true;
        }
        Ok(PlaceOutcome {
            anchor,
            revealed,
            locked,
            won,
        })
    }

    /// Locks the build direction ahead of the first placement. Returns whether
    /// the lock changed.
    pub fn lock_direction(&mut self, row: Row) -> Result<bool, RuleError> {
        match self.build_direction {
            None => {
                self.build_direction = Some(row);
                Ok(true)
            }
            Some(current) if current == row => Ok(false),
            Some(current) => Err(RuleError::DirectionLocked(current)),
        }
    }

    pub(crate) fn replace_piles(&mut self, piles: Vec<Pile>) {
        self.piles = piles;
    }
}
