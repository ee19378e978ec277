//! Foundation placement rules.
//!
//! A card goes on an anchor of its own suit when its rank is exactly one step
//! past the anchor's current face in the row's direction: up on the Ace row,
//! down on the King row, never wrapping. Once the first card lands, the build
//! direction locks to that row for the rest of the game.
//!
//! A single card can never satisfy both rows at once. Both rows are only open
//! while nothing has been placed, and then they show Aces and Kings, which
//! accept a Two and a Queen respectively. Rows are still checked in
//! `Row::ORDER` so results are deterministic.

use crate::{AnchorId, Card, Foundations, Row};

/// Whether `card` may land on an anchor currently showing `face` in `row`.
pub fn fits(card: Card, face: Card, row: Row) -> bool {
    card.suit == face.suit && row.next_rank(face.rank) == Some(card.rank)
}

/// Whether the build direction permits placing on `row` at all.
pub fn row_open(direction: Option<Row>, row: Row) -> bool {
    direction.map_or(true, |locked| locked == row)
}

pub fn can_place(
    card: Card,
    anchor: AnchorId,
    foundations: &Foundations,
    direction: Option<Row>,
) -> bool {
    row_open(direction, anchor.row) && fits(card, foundations.face(anchor), anchor.row)
}

/// First anchor `card` may legally go to, Ace row first.
pub fn legal_anchor(
    card: Card,
    foundations: &Foundations,
    direction: Option<Row>,
) -> Option<AnchorId> {
    Row::ORDER
        .into_iter()
        .map(|row| AnchorId::new(row, card.suit))
        .find(|anchor| can_place(card, *anchor, foundations, direction))
}

/// Picks the anchor a drop resolves to among `nearby`: every open Ace-row
/// candidate in the given order, then every open King-row candidate.
pub fn resolve_drop(
    card: Card,
    nearby: &[AnchorId],
    foundations: &Foundations,
    direction: Option<Row>,
) -> Option<AnchorId> {
    Row::ORDER.into_iter().find_map(|row| {
        nearby
            .iter()
            .filter(|anchor| anchor.row == row)
            .find(|anchor| can_place(card, **anchor, foundations, direction))
            .copied()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn fresh_foundations_accept_two_and_queen() {
        let foundations = Foundations::new();
        let two = card(Suit::Hearts, Rank::Two);
        let queen = card(Suit::Hearts, Rank::Queen);
        assert_eq!(
            legal_anchor(two, &foundations, None),
            Some(AnchorId::new(Row::Ace, Suit::Hearts))
        );
        assert_eq!(
            legal_anchor(queen, &foundations, None),
            Some(AnchorId::new(Row::King, Suit::Hearts))
        );
        assert_eq!(legal_anchor(card(Suit::Hearts, Rank::Five), &foundations, None), None);
    }

    #[test]
    fn locked_direction_closes_the_other_row() {
        let foundations = Foundations::new();
        let queen = card(Suit::Spades, Rank::Queen);
        let king_anchor = AnchorId::new(Row::King, Suit::Spades);
        assert!(can_place(queen, king_anchor, &foundations, None));
        assert!(can_place(queen, king_anchor, &foundations, Some(Row::King)));
        assert!(!can_place(queen, king_anchor, &foundations, Some(Row::Ace)));
        assert_eq!(legal_anchor(queen, &foundations, Some(Row::Ace)), None);
    }

    #[test]
    fn suit_must_match_the_anchor() {
        let foundations = Foundations::new();
        let two = card(Suit::Clubs, Rank::Two);
        assert!(!can_place(
            two,
            AnchorId::new(Row::Ace, Suit::Spades),
            &foundations,
            None
        ));
    }

    #[test]
    fn drop_prefers_ace_row_then_king_row() {
        let foundations = Foundations::new();
        let two = card(Suit::Diamonds, Rank::Two);
        let nearby = [
            AnchorId::new(Row::King, Suit::Diamonds),
            AnchorId::new(Row::Ace, Suit::Clubs),
            AnchorId::new(Row::Ace, Suit::Diamonds),
        ];
        assert_eq!(
            resolve_drop(two, &nearby, &foundations, None),
            Some(AnchorId::new(Row::Ace, Suit::Diamonds))
        );
        assert_eq!(resolve_drop(two, &nearby[..2], &foundations, None), None);
        assert_eq!(resolve_drop(two, &[], &foundations, None), None);
    }
}
