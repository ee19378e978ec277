use crate::{
    AutoAction, AutoplayConfig, AutoplayError, AutoplayResult, FinalMetrics, RunStatus,
    StepRecord, SummaryStats,
};
use crescent_core::{Game, ReshuffleOutcome};
use log::{debug, info};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct Autoplayer {
    pub config: AutoplayConfig,
}

impl Autoplayer {
    pub fn new(config: AutoplayConfig) -> Self {
        Self { config }
    }

    /// Deals a fresh game from the configured seed and plays it out.
    pub fn run(&self) -> Result<AutoplayResult, AutoplayError> {
        let mut game = Game::new(self.config.game_config())?;
        self.play(&mut game)
    }

    /// Plays `game` from its current position: place the hinted card, or
    /// reshuffle when no card fits, until won or out of budget.
    pub fn play(&self, game: &mut Game) -> Result<AutoplayResult, AutoplayError> {
        let started = Instant::now();
        if let Some(row) = self.config.direction {
            game.choose_direction(row)?;
        }
        let stale = game.drain_events().len();
        if stale > 0 {
            debug!("discarded {stale} events queued before autoplay");
        }
        let mut steps = Vec::new();
        let mut placements = 0u32;
        let mut reshuffles = 0u32;
        let mut step = 0u32;

        let status = loop {
            if game.state().is_won() {
                break RunStatus::Won;
            }
            if step >= self.config.max_steps {
                break RunStatus::MaxSteps;
            }
            let in_play_before = game.state().in_play_count();
            let (action, revealed) = match game.hint_move() {
                Some((card, anchor)) => {
                    let result = game.place_on(card, anchor)?;
                    if !result.accepted {
                        break RunStatus::Stuck;
                    }
                    placements += 1;
                    (AutoAction::Place { card, anchor }, result.revealed)
                }
                None => {
                    if reshuffles >= self.config.max_reshuffles {
                        break RunStatus::Stuck;
                    }
                    match game.request_reshuffle()? {
                        ReshuffleOutcome::NothingToReshuffle => break RunStatus::Stuck,
                        ReshuffleOutcome::Reshuffled { .. } => reshuffles += 1,
                    }
                    (AutoAction::Reshuffle, None)
                }
            };
            step += 1;
            let events = game.drain_events().len();
            debug!("autoplay step {step}: {} ({events} events)", action.short_label());
            let state = game.state();
            steps.push(StepRecord {
                step,
                action,
                in_play_before,
                in_play_after: state.in_play_count(),
                piles_after: state.piles().iter().filter(|pile| !pile.is_empty()).count(),
                revealed,
                direction_after: state.build_direction(),
                events,
            });
        };

        let state = game.state();
        info!(
            "autoplay finished: {status:?} after {step} steps ({reshuffles} reshuffles)"
        );
        Ok(AutoplayResult {
            status,
            seed: game.seed(),
            final_metrics: FinalMetrics {
                in_play: state.in_play_count(),
                placed: state.placed().len(),
                direction: state.build_direction(),
                used_row: state.used_row(),
            },
            steps,
            summary: SummaryStats {
                steps: step,
                placements,
                reshuffles,
                wall_time_ms: started.elapsed().as_millis() as u64,
            },
        })
    }
}
