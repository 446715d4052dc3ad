//! ASSESS: how attractive an edge looks to an ant.
//!
//! Ants weigh two signals when choosing the next hop: the trail left by
//! earlier generations (pheromone) and their own short-sightedness (prefer
//! the nearest city). The assessment folds both into one score. It is the
//! only part of the construction rule meant to be swapped out.

use crate::types::Edge;
use serde::{Deserialize, Serialize};

/// Score an edge. Higher scores are more likely to be chosen.
///
/// Any `Fn(&Edge) -> f64` that is `Send + Sync` is an assessment, so a
/// closure can stand in for [`PheromoneHeuristic`].
pub trait Assessment: Send + Sync {
    /// Non-negative desirability of `edge`.
    fn assess(&self, edge: &Edge) -> f64;
}

impl<F> Assessment for F
where
    F: Fn(&Edge) -> f64 + Send + Sync,
{
    fn assess(&self, edge: &Edge) -> f64 {
        self(edge)
    }
}

/// Inverse-distance desirability of an edge, independent of pheromone.
pub fn heuristic(edge: &Edge) -> f64 {
    1.0 / edge.length()
}

/// The classic ACO score: `pheromone^alpha * heuristic^beta`.
///
/// `alpha` controls exploitation of existing trails, `beta` the greedy
/// preference for short edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PheromoneHeuristic {
    pub alpha: f64,
    pub beta: f64,
}

impl PheromoneHeuristic {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }
}

impl Default for PheromoneHeuristic {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 5.0,
        }
    }
}

impl Assessment for PheromoneHeuristic {
    fn assess(&self, edge: &Edge) -> f64 {
        edge.pheromone().powf(self.alpha) * heuristic(edge).powf(self.beta)
    }
}
