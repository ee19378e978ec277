use crate::{Card, Rank, Suit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which foundation row a build targets. The Ace row climbs, the King row
/// descends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Row {
    Ace,
    King,
}

impl Row {
    /// Fixed check order for placements and hints.
    pub const ORDER: [Row; 2] = [Row::Ace, Row::King];

    pub fn base_rank(self) -> Rank {
        match self {
            Self::Ace => Rank::Ace,
            Self::King => Rank::King,
        }
    }

    /// The only rank this row accepts on top of `current`.
    pub fn next_rank(self, current: Rank) -> Option<Rank> {
        match self {
            Self::Ace => current.succ(),
            Self::King => current.pred(),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Ace => Self::King,
            Self::King => Self::Ace,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ace => "ace",
            Self::King => "king",
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AnchorId {
    pub row: Row,
    pub suit: Suit,
}

impl AnchorId {
    pub fn new(row: Row, suit: Suit) -> Self {
        Self { row, suit }
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.row, self.suit.name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoundationRow {
    row: Row,
    faces: [Card; 4],
}

impl FoundationRow {
    pub fn new(row: Row) -> Self {
        Self {
            row,
            faces: Suit::ALL.map(|suit| Card::new(suit, row.base_rank())),
        }
    }

    pub fn row(&self) -> Row {
        self.row
    }

    pub fn face(&self, suit: Suit) -> Card {
        self.faces[suit.index()]
    }

    pub fn faces(&self) -> &[Card; 4] {
        &self.faces
    }

    pub fn anchors(&self) -> impl Iterator<Item = AnchorId> + '_ {
        Suit::ALL
            .into_iter()
            .map(move |suit| AnchorId::new(self.row, suit))
    }

    /// True while every slot still shows its starting face.
    pub fn untouched(&self) -> bool {
        self.faces.iter().all(|face| face.rank == self.row.base_rank())
    }

    pub(crate) fn set_face(&mut self, card: Card) {
        self.faces[card.suit.index()] = card;
    }
}

/// Both anchor rows. Anchors are fixed for the whole game; only their
/// displayed face changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Foundations {
    ace: FoundationRow,
    king: FoundationRow,
}

impl Default for Foundations {
    fn default() -> Self {
        Self::new()
    }
}

impl Foundations {
    pub fn new() -> Self {
        Self {
            ace: FoundationRow::new(Row::Ace),
            king: FoundationRow::new(Row::King),
        }
    }

    pub fn row(&self, row: Row) -> &FoundationRow {
        match row {
            Row::Ace => &self.ace,
            Row::King => &self.king,
        }
    }

    pub fn face(&self, anchor: AnchorId) -> Card {
        self.row(anchor.row).face(anchor.suit)
    }

    pub(crate) fn set_face(&mut self, anchor: AnchorId, card: Card) {
        let row = match anchor.row {
            Row::Ace => &mut self.ace,
            Row::King => &mut self.king,
        };
        row.set_face(card);
    }
}
