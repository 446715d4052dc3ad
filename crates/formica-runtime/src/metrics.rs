//! Quantitative metrics for tracking how a colony converges.
//!
//! - Per-generation tour lengths compared against a known optimum
//! - How pheromone is spread over the graph, and how much of it sits on the
//!   best tour found so far

use crate::colony::{Colony, GenerationReport};
use formica_core::topology::TrailGraph;
use serde::Serialize;
use std::collections::HashSet;

/// Tour-length summary for one generation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    pub generation: u64,
    pub tours: usize,
    pub stranded: usize,
    pub mean_length: f64,
    pub best_length: f64,
    pub worst_length: f64,
    /// Each tour's length divided by the optimum, when one is known.
    pub ratios: Vec<f64>,
}

impl GenerationSummary {
    /// Mean of `ratios`, or `None` if no optimum was given.
    pub fn mean_ratio(&self) -> Option<f64> {
        if self.ratios.is_empty() {
            None
        } else {
            Some(self.ratios.iter().sum::<f64>() / self.ratios.len() as f64)
        }
    }
}

/// Summarize a generation report, optionally against an optimal length.
pub fn summarize(report: &GenerationReport, optimum: Option<f64>) -> GenerationSummary {
    let ratios = match optimum {
        Some(opt) if opt > 0.0 => report.tours.iter().map(|t| t.length / opt).collect(),
        _ => Vec::new(),
    };
    GenerationSummary {
        generation: report.generation,
        tours: report.tours.len(),
        stranded: report.stranded.len(),
        mean_length: report.mean_length().unwrap_or(0.0),
        best_length: report.shortest().map(|t| t.length).unwrap_or(0.0),
        worst_length: report.longest().map(|t| t.length).unwrap_or(0.0),
        ratios,
    }
}

/// Distribution of pheromone across the trail graph.
#[derive(Debug, Clone, Serialize)]
pub struct PheromoneStats {
    pub edges: usize,
    pub total: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Fraction of the total lying on edges of the best tour so far.
    pub best_tour_share: f64,
}

pub fn pheromone_stats(colony: &Colony) -> PheromoneStats {
    let graph = colony.graph();
    let best_edges: HashSet<_> = colony
        .best()
        .map(|b| b.edges.iter().copied().collect())
        .unwrap_or_default();

    let mut total = 0.0;
    let mut on_best = 0.0;
    let mut min = f64::INFINITY;
    let mut max = 0.0f64;
    for (id, edge) in graph.edges() {
        let level = edge.pheromone();
        total += level;
        min = min.min(level);
        max = max.max(level);
        if best_edges.contains(&id) {
            on_best += level;
        }
    }

    let edges = graph.edge_count();
    PheromoneStats {
        edges,
        total,
        min: if edges == 0 { 0.0 } else { min },
        max,
        mean: if edges == 0 { 0.0 } else { total / edges as f64 },
        best_tour_share: if total > 0.0 { on_best / total } else { 0.0 },
    }
}

/// Mean tour length per generation, for plotting convergence.
pub fn mean_length_trend(reports: &[GenerationReport]) -> Vec<f64> {
    reports
        .iter()
        .filter_map(GenerationReport::mean_length)
        .collect()
}
