use crate::{AnchorId, Card, PileId, Row};
use serde::{Deserialize, Serialize};

/// Instructions for the presentation layer, in the order the state changed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    Dealt {
        seed: u64,
        piles: usize,
        cards: usize,
    },
    DirectionLocked { row: Row },
    CardPlaced { card: Card, anchor: AnchorId },
    CardRevealed { card: Card, pile: PileId },
    PlacementDeclined { card: Card },
    Reshuffled { cards: usize, piles: usize },
    ReshuffleSkipped,
    Won { used: Row },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
