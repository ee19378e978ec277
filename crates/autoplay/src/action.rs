use crescent_core::{AnchorId, Card};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AutoAction {
    Place { card: Card, anchor: AnchorId },
    Reshuffle,
}

impl AutoAction {
    pub fn stable_key(&self) -> String {
        match self {
            Self::Place { card, anchor } => format!("place:{}:{anchor}", card.face_key()),
            Self::Reshuffle => "reshuffle".to_string(),
        }
    }

    pub fn short_label(&self) -> String {
        match self {
            Self::Place { card, anchor } => format!("place {card} -> {anchor}"),
            Self::Reshuffle => "reshuffle".to_string(),
        }
    }
}
