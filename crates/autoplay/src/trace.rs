use crate::{AutoAction, AutoplayError};
use crescent_core::{Card, Row};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RunStatus {
    Won,
    Stuck,
    MaxSteps,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: u32,
    pub action: AutoAction,
    pub in_play_before: usize,
    pub in_play_after: usize,
    pub piles_after: usize,
    #[serde(default)]
    pub revealed: Option<Card>,
    #[serde(default)]
    pub direction_after: Option<Row>,
    /// Events the step queued for the presentation layer.
    #[serde(default)]
    pub events: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalMetrics {
    pub in_play: usize,
    pub placed: usize,
    pub direction: Option<Row>,
    pub used_row: Option<Row>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    pub steps: u32,
    pub placements: u32,
    pub reshuffles: u32,
    pub wall_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoplayResult {
    pub status: RunStatus,
    pub seed: u64,
    pub final_metrics: FinalMetrics,
    pub steps: Vec<StepRecord>,
    pub summary: SummaryStats,
}

impl AutoplayResult {
    pub fn to_text_report(&self) -> String {
        let mut lines = vec![
            format!("status: {}", run_status_label(self.status)),
            format!("seed: {}", self.seed),
            format!(
                "final: in_play={} placed={} direction={} used_row={}",
                self.final_metrics.in_play,
                self.final_metrics.placed,
                row_label(self.final_metrics.direction),
                row_label(self.final_metrics.used_row)
            ),
            format!(
                "summary: steps={} placements={} reshuffles={} wall_ms={}",
                self.summary.steps,
                self.summary.placements,
                self.summary.reshuffles,
                self.summary.wall_time_ms
            ),
            String::new(),
            "steps:".to_string(),
        ];
        for step in &self.steps {
            lines.push(format!(
                "  step {:>4} | {}",
                step.step,
                step.action.short_label()
            ));
            lines.push(format!(
                "    in_play {} -> {} piles {} direction {}",
                step.in_play_before,
                step.in_play_after,
                step.piles_after,
                row_label(step.direction_after)
            ));
            if let Some(card) = step.revealed {
                lines.push(format!("    revealed: {card}"));
            }
        }
        lines.join("\n")
    }
}

fn row_label(row: Option<Row>) -> &'static str {
    row.map_or("unset", Row::name)
}

fn run_status_label(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Won => "Won",
        RunStatus::Stuck => "Stuck",
        RunStatus::MaxSteps => "MaxSteps",
    }
}

pub fn write_json(path: &Path, result: &AutoplayResult) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(result)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn write_text(path: &Path, result: &AutoplayResult) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, result.to_text_report())?;
    Ok(())
}
