use crate::{
    deal_crescent, rules, AnchorId, Card, ConfigError, Deck, Event, EventBus, GameConfig,
    GameState, LayoutError, Pile, RngState, Row, RuleError,
};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("rule violation: {0}")]
    Rule(#[from] RuleError),
}

/// Answer to a drop. A declined drop changed nothing; the presentation layer
/// snaps the card back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacementResult {
    pub accepted: bool,
    pub anchor: Option<AnchorId>,
    pub revealed: Option<Card>,
    pub won: bool,
    /// The row that was built on, set on the winning placement only.
    pub used_direction: Option<Row>,
}

impl PlacementResult {
    fn declined() -> Self {
        Self {
            accepted: false,
            anchor: None,
            revealed: None,
            won: false,
            used_direction: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReshuffleOutcome {
    Reshuffled { piles: Vec<Pile> },
    NothingToReshuffle,
}

/// The rule engine as seen by the presentation layer: it owns the state and
/// answers requests; it never listens for input itself.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    rng: RngState,
    state: GameState,
    events: EventBus,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => RngState::from_seed(seed),
            None => RngState::from_entropy(),
        };
        let mut game = Self {
            config,
            rng,
            state: GameState::new(Vec::new()),
            events: EventBus::default(),
        };
        game.deal()?;
        Ok(game)
    }

    /// Resumes from a prepared state. Reshuffles and new games still draw
    /// from the configured seed. A valid config holds the whole deck, so any
    /// state that passes `GameState::validate` can be redealt.
    pub fn from_state(config: GameConfig, state: GameState) -> Result<Self, GameError> {
        config.validate()?;
        state.validate()?;
        let rng = match config.seed {
            Some(seed) => RngState::from_seed(seed),
            None => RngState::from_entropy(),
        };
        Ok(Self {
            config,
            rng,
            state,
            events: EventBus::default(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Seed of the current deal.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        self.events.drain().collect()
    }

    fn deal(&mut self) -> Result<(), GameError> {
        let deck = Deck::shuffled(&mut self.rng);
        let piles = deal_crescent(deck.cards(), &self.config.layout)?;
        info!(
            "dealt {} cards into {} piles (seed {})",
            deck.len(),
            piles.len(),
            self.rng.seed()
        );
        self.events.push(Event::Dealt {
            seed: self.rng.seed(),
            piles: piles.len(),
            cards: deck.len(),
        });
        self.state = GameState::new(piles);
        Ok(())
    }

    /// Whether the presentation layer may start dragging `card`.
    pub fn on_pickup(&self, card: Card) -> bool {
        self.state.is_interactable(card)
    }

    /// Resolves a drop of `card` near `nearby` anchors. Ace-row anchors are
    /// tried before King-row anchors, each in the order given, skipping the
    /// row the build direction excludes.
    pub fn attempt_placement(
        &mut self,
        card: Card,
        nearby: &[AnchorId],
    ) -> Result<PlacementResult, GameError> {
        let Some((pile, _)) = self.state.locate(card) else {
            warn!("drop of {card} which is not in play");
            return Err(RuleError::NotInPlay(card).into());
        };
        if !self.state.is_interactable(card) {
            warn!("drop of covered card {card} from pile {pile}");
            return Err(RuleError::NotInteractable(card).into());
        }
        let direction = self.state.build_direction();
        let Some(anchor) = rules::resolve_drop(card, nearby, self.state.foundations(), direction)
        else {
            debug!("declined {card} near {} anchors", nearby.len());
            self.events.push(Event::PlacementDeclined { card });
            return Ok(PlacementResult::declined());
        };

        let outcome = self.state.place(card, anchor)?;
        debug!("placed {card} on {anchor}");
        if let Some(row) = outcome.locked {
            info!("build direction locked to {row}");
            self.events.push(Event::DirectionLocked { row });
        }
        self.events.push(Event::CardPlaced { card, anchor });
        if let Some(next) = outcome.revealed {
            debug!("revealed {next} on pile {pile}");
            self.events.push(Event::CardRevealed { card: next, pile });
        }
        let used_direction = if outcome.won {
            let used = self.state.used_row();
            if let Some(used) = used {
                info!("game won on the {used} row");
                self.events.push(Event::Won { used });
            }
            used
        } else {
            None
        };
        Ok(PlacementResult {
            accepted: true,
            anchor: Some(anchor),
            revealed: outcome.revealed,
            won: outcome.won,
            used_direction,
        })
    }

    /// Drops `card` on one specific anchor.
    pub fn place_on(&mut self, card: Card, anchor: AnchorId) -> Result<PlacementResult, GameError> {
        self.attempt_placement(card, &[anchor])
    }

    /// Redeals every card still in play into a fresh crescent. Foundations and
    /// the build direction are kept.
    pub fn request_reshuffle(&mut self) -> Result<ReshuffleOutcome, GameError> {
        let cards: Vec<Card> = self.state.cards_in_play().collect();
        if cards.is_empty() {
            info!("nothing to reshuffle");
            self.events.push(Event::ReshuffleSkipped);
            return Ok(ReshuffleOutcome::NothingToReshuffle);
        }
        let mut deck = Deck::from_cards(cards);
        deck.shuffle(&mut self.rng);
        let piles = deal_crescent(deck.cards(), &self.config.layout)?;
        info!("reshuffled {} cards into {} piles", deck.len(), piles.len());
        self.events.push(Event::Reshuffled {
            cards: deck.len(),
            piles: piles.len(),
        });
        self.state.replace_piles(piles.clone());
        Ok(ReshuffleOutcome::Reshuffled { piles })
    }

    /// Starts over: new deck, new crescent, fresh foundations, no direction.
    pub fn request_new_game(&mut self) -> Result<(), GameError> {
        self.rng = self.rng.fork();
        info!("new game (seed {})", self.rng.seed());
        self.deal()
    }

    /// First draggable card, by pile, that has a legal placement.
    pub fn request_hint(&self) -> Option<Card> {
        self.hint_move().map(|(card, _)| card)
    }

    /// Like `request_hint`, with the anchor the card would go to.
    pub fn hint_move(&self) -> Option<(Card, AnchorId)> {
        self.state
            .interactable_cards()
            .into_iter()
            .find_map(|card| self.state.legal_anchor(card).map(|anchor| (card, anchor)))
    }

    /// Commits to a build direction before the first placement.
    pub fn choose_direction(&mut self, row: Row) -> Result<(), GameError> {
        if self.state.lock_direction(row)? {
            info!("build direction chosen: {row}");
            self.events.push(Event::DirectionLocked { row });
        }
        Ok(())
    }
}
