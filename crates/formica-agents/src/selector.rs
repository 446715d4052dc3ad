//! Move selection: where an ant goes next.
//!
//! The selector looks at every edge leaving the ant's current point, drops
//! those leading back to a visited point, scores the rest with the colony's
//! [`Assessment`] and normalizes the scores into probabilities. The
//! [`SelectionPolicy`] then turns those probabilities into one choice.

use formica_core::assessment::Assessment;
use formica_core::topology::TrailGraph;
use formica_core::tour::Tour;
use formica_core::types::{EdgeId, PointId};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One possible next hop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// The unvisited point at the far end of `edge`.
    pub point: PointId,
    pub edge: EdgeId,
    pub probability: f64,
}

/// Computes the choice distribution for an ant standing at the end of `tour`.
pub struct MoveSelector<'a, G: TrailGraph + ?Sized> {
    graph: &'a G,
    tour: &'a Tour,
    assessment: &'a dyn Assessment,
}

impl<'a, G: TrailGraph + ?Sized> MoveSelector<'a, G> {
    pub fn new(graph: &'a G, tour: &'a Tour, assessment: &'a dyn Assessment) -> Self {
        Self {
            graph,
            tour,
            assessment,
        }
    }

    /// Unvisited neighbors of the current point with their probabilities.
    ///
    /// Empty when the ant has nowhere left to go. Otherwise the
    /// probabilities sum to 1. Scores are computed once and the same values
    /// feed both numerator and denominator. Negative or NaN scores count as
    /// zero. Infinite scores split the whole mass evenly between them; if
    /// every score is zero the distribution is uniform.
    pub fn candidates(&self) -> Vec<Candidate> {
        let current = self.tour.current();

        let scored: Vec<(PointId, EdgeId, f64)> = self
            .graph
            .edges_incident_to(current)
            .into_iter()
            .filter_map(|id| {
                let edge = self.graph.edge(id)?;
                let next = edge.other_endpoint(current)?;
                if self.tour.has_visited(next) {
                    return None;
                }
                let score = self.assessment.assess(edge);
                let score = if score.is_nan() { 0.0 } else { score.max(0.0) };
                Some((next, id, score))
            })
            .collect();

        if scored.is_empty() {
            return Vec::new();
        }

        let weights = weights(scored.iter().map(|(_, _, s)| *s).collect());
        let total: f64 = weights.iter().sum();

        scored
            .into_iter()
            .zip(weights)
            .map(|((point, edge, _), weight)| Candidate {
                point,
                edge,
                probability: weight / total,
            })
            .collect()
    }
}

/// Non-negative weights with a positive, finite sum.
fn weights(scores: Vec<f64>) -> Vec<f64> {
    let total: f64 = scores.iter().sum();
    if total > 0.0 && total.is_finite() {
        return scores;
    }
    let max = scores.iter().copied().fold(0.0, f64::max);
    if max == f64::INFINITY {
        scores
            .into_iter()
            .map(|s| if s == f64::INFINITY { 1.0 } else { 0.0 })
            .collect()
    } else if max > 0.0 {
        // Finite scores whose sum overflowed
        scores.into_iter().map(|s| s / max).collect()
    } else {
        vec![1.0; scores.len()]
    }
}

/// How an ant turns candidate probabilities into a single move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Walk the candidates in order with one fresh draw each; take the first
    /// whose draw falls below its probability, else the last one visited.
    ///
    /// Order-dependent and biased toward later candidates. This is the
    /// colony's reference behavior.
    #[default]
    RouletteFallback,
    /// A single draw against the cumulative distribution: a true weighted
    /// sample.
    WeightedSample,
}

impl SelectionPolicy {
    /// Pick one candidate, or `None` if there are none.
    pub fn choose<'c, R: Rng + ?Sized>(
        &self,
        candidates: &'c [Candidate],
        rng: &mut R,
    ) -> Option<&'c Candidate> {
        match self {
            SelectionPolicy::RouletteFallback => {
                let mut chosen = None;
                for candidate in candidates {
                    chosen = Some(candidate);
                    if rng.gen::<f64>() < candidate.probability {
                        break;
                    }
                }
                chosen
            }
            SelectionPolicy::WeightedSample => {
                let draw = rng.gen::<f64>();
                let mut cumulative = 0.0;
                for candidate in candidates {
                    cumulative += candidate.probability;
                    if draw < cumulative {
                        return Some(candidate);
                    }
                }
                // Rounding left the cumulative sum just short of 1.
                candidates.last()
            }
        }
    }
}
