use crescent_core::{Event, GameState, Row};

const HIDDEN: &str = "##";

pub fn render_board(state: &GameState) -> String {
    let mut lines = Vec::new();
    for row in Row::ORDER {
        let faces = state
            .foundations()
            .row(row)
            .faces()
            .iter()
            .map(|card| format!("{:>3}", card.to_string()))
            .collect::<Vec<_>>()
            .join(" ");
        let marker = match state.build_direction() {
            Some(locked) if locked == row => " <",
            _ => "",
        };
        lines.push(format!("{:>5}: {faces}{marker}", row.name()));
    }
    lines.push(String::new());
    for pile in state.piles() {
        if pile.is_empty() {
            lines.push(format!("  [{:>2}] --", pile.id().0));
            continue;
        }
        let cards = pile
            .cards()
            .iter()
            .map(|card| {
                if pile.is_top(*card) {
                    format!("{:>3}", card.to_string())
                } else {
                    format!("{HIDDEN:>3}")
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("  [{:>2}] {cards}", pile.id().0));
    }
    lines.push(String::new());
    lines.push(format!(
        "in play: {}  placed: {}  direction: {}",
        state.in_play_count(),
        state.placed().len(),
        state.build_direction().map_or("unset", Row::name)
    ));
    lines.join("\n")
}

pub fn describe_event(event: &Event) -> String {
    match event {
        Event::Dealt { seed, piles, cards } => {
            format!("dealt {cards} cards into {piles} piles (seed {seed})")
        }
        Event::DirectionLocked { row } => format!("building on the {row} row"),
        Event::CardPlaced { card, anchor } => format!("{card} -> {anchor}"),
        Event::CardRevealed { card, pile } => format!("pile {pile} shows {card}"),
        Event::PlacementDeclined { card } => format!("{card} does not fit there"),
        Event::Reshuffled { cards, piles } => {
            format!("reshuffled {cards} cards into {piles} piles")
        }
        Event::ReshuffleSkipped => "nothing to reshuffle".to_string(),
        Event::Won { used } => match used {
            Row::Ace => "you win! everything built up on the Aces".to_string(),
            Row::King => "you win! everything built down on the Kings".to_string(),
        },
    }
}
