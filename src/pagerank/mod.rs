//! Node ranking
//!
//! This module provides the damped power iteration TextRank uses to weight
//! graph nodes, and the result type it produces.

pub mod power;

use serde::Serialize;

/// Where the power iteration is in its run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IterationState {
    /// Weights initialized, no step taken yet
    Initialized,
    /// At least one step taken, not yet terminal
    Iterating,
    /// The weight sum moved less than the threshold
    Converged,
    /// The step cap was reached without convergence
    Exhausted,
}

impl IterationState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Converged | Self::Exhausted)
    }
}

/// Result of a ranking run
#[derive(Debug, Clone, Serialize)]
pub struct RankOutput {
    /// Weight per node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Steps performed
    pub iterations: usize,
    /// Absolute change of the weight sum at the last step
    pub delta: f64,
    /// Terminal state
    pub state: IterationState,
}

impl RankOutput {
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, state: IterationState) -> Self {
        Self {
            scores,
            iterations,
            delta,
            state,
        }
    }

    pub fn converged(&self) -> bool {
        self.state == IterationState::Converged
    }

    /// Weight of a node, 0 when out of range
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }
}
