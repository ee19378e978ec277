use crescent_core::{
    deal_crescent, AnchorId, Card, Deck, Foundations, Game, GameConfig, LayoutConfig,
    ReshuffleOutcome, RngState, Row, Suit, DECK_SIZE, PLAY_RANKS,
};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

fn all_anchors() -> Vec<AnchorId> {
    let foundations = Foundations::new();
    Row::ORDER
        .into_iter()
        .flat_map(|row| foundations.row(row).anchors().collect::<Vec<_>>())
        .collect()
}

fn multiset(cards: impl Iterator<Item = Card>) -> BTreeMap<Card, usize> {
    let mut counts = BTreeMap::new();
    for card in cards {
        *counts.entry(card).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn shuffled_deck_is_a_permutation_of_the_play_cards(seed in any::<u64>()) {
        let deck = Deck::shuffled(&mut RngState::from_seed(seed));
        prop_assert_eq!(deck.len(), DECK_SIZE);
        let unique: BTreeSet<Card> = deck.cards().iter().copied().collect();
        prop_assert_eq!(unique.len(), 44);
        for suit in Suit::ALL {
            for rank in PLAY_RANKS {
                prop_assert!(unique.contains(&Card::new(suit, rank)));
            }
        }
    }

    #[test]
    fn layout_partitions_its_input(
        seed in any::<u64>(),
        take in 0usize..=44,
        depth in 1usize..=6,
    ) {
        let deck = Deck::shuffled(&mut RngState::from_seed(seed));
        let cards = &deck.cards()[..take];
        let layout = LayoutConfig { stack_count: 44, stack_depth: depth };
        let piles = deal_crescent(cards, &layout).unwrap();

        let dealt: Vec<Card> = piles.iter().flat_map(|pile| pile.cards().iter().copied()).collect();
        prop_assert_eq!(dealt.as_slice(), cards);
        for pile in &piles {
            prop_assert!(!pile.is_empty());
            prop_assert!(pile.len() <= depth);
        }
        prop_assert_eq!(piles.len(), take.div_ceil(depth));
    }

    #[test]
    fn random_play_never_crosses_the_locked_row(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..120),
    ) {
        let mut game = Game::new(GameConfig::with_seed(seed)).unwrap();
        let anchors = all_anchors();
        let mut locked: Option<Row> = None;
        let mut wins = 0;
        for pick in picks {
            let tops = game.state().interactable_cards();
            if tops.is_empty() {
                break;
            }
            let card = *pick.get(&tops);
            let before_tops = tops.clone();
            let result = game.attempt_placement(card, &anchors).unwrap();
            if !result.accepted {
                prop_assert_eq!(game.state().interactable_cards(), before_tops);
                if pick.index(3) == 0 {
                    game.request_reshuffle().unwrap();
                }
                continue;
            }
            let row = result.anchor.unwrap().row;
            match locked {
                Some(expected) => prop_assert_eq!(row, expected),
                None => locked = Some(row),
            }
            prop_assert_eq!(game.state().build_direction(), locked);
            if result.won {
                wins += 1;
            }
        }
        prop_assert!(wins <= 1);
        prop_assert_eq!(wins == 1, game.state().in_play_count() == 0);
    }

    #[test]
    fn reshuffle_preserves_in_play_cards(seed in any::<u64>(), moves in 0usize..10) {
        let mut game = Game::new(GameConfig::with_seed(seed)).unwrap();
        for _ in 0..moves {
            match game.hint_move() {
                Some((card, anchor)) => {
                    game.place_on(card, anchor).unwrap();
                }
                None => break,
            }
        }
        let before = multiset(game.state().cards_in_play());
        let foundations = game.state().foundations().clone();
        let direction = game.state().build_direction();
        match game.request_reshuffle().unwrap() {
            ReshuffleOutcome::Reshuffled { piles } => {
                for pile in &piles {
                    prop_assert!(pile.len() <= 3 && !pile.is_empty());
                }
            }
            ReshuffleOutcome::NothingToReshuffle => prop_assert!(before.is_empty()),
        }
        prop_assert_eq!(multiset(game.state().cards_in_play()), before);
        prop_assert_eq!(game.state().foundations(), &foundations);
        prop_assert_eq!(game.state().build_direction(), direction);
    }
}
