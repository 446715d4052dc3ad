//! Colony builder.
//!
//! Assembles a colony from a list of points: connects every pair, seeds the
//! pheromone, and picks the start point.
//!
//! # Example
//!
//! ```rust
//! use formica_runtime::colony_builder::ColonyBuilder;
//! use formica_runtime::cities::InitialPheromone;
//! use formica_core::types::Point;
//!
//! let mut colony = ColonyBuilder::new()
//!     .with_points(vec![
//!         Point::new(0.0, 0.0),
//!         Point::new(3.0, 0.0),
//!         Point::new(3.0, 4.0),
//!     ])
//!     .with_initial_pheromone(InitialPheromone::Constant { level: 1.0 })
//!     .build()
//!     .unwrap();
//!
//! let report = colony.run_generation().unwrap();
//! assert_eq!(report.tours.len(), colony.config().population);
//! ```

use crate::cities::{complete_graph, InitialPheromone};
use crate::colony::{Colony, ColonyConfig};
use formica_core::assessment::Assessment;
use formica_core::error::{GraphError, Result};
use formica_core::types::Point;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Builder for creating colonies over a complete graph.
pub struct ColonyBuilder {
    points: Vec<Point>,
    start: usize,
    initial: InitialPheromone,
    config: ColonyConfig,
    assessment: Option<Box<dyn Assessment>>,
}

impl Default for ColonyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ColonyBuilder {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            start: 0,
            initial: InitialPheromone::default(),
            config: ColonyConfig::default(),
            assessment: None,
        }
    }

    pub fn with_points(mut self, points: Vec<Point>) -> Self {
        self.points = points;
        self
    }

    /// Index into the point list where every ant starts (default: 0).
    pub fn with_start(mut self, index: usize) -> Self {
        self.start = index;
        self
    }

    pub fn with_initial_pheromone(mut self, initial: InitialPheromone) -> Self {
        self.initial = initial;
        self
    }

    pub fn with_config(mut self, config: ColonyConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the default `pheromone^alpha * (1/length)^beta` score.
    pub fn with_assessment(mut self, assessment: Box<dyn Assessment>) -> Self {
        self.assessment = Some(assessment);
        self
    }

    /// Build the colony.
    ///
    /// Uniform initial pheromone is drawn from a stream seeded by the
    /// colony seed, so the same builder always yields the same graph.
    pub fn build(self) -> Result<Colony> {
        if self.points.is_empty() {
            return Err(GraphError::EmptyGraph.into());
        }
        self.config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let (graph, ids) = complete_graph(&self.points, self.initial, &mut rng)?;
        let start = ids
            .get(self.start)
            .copied()
            .ok_or(GraphError::PointNotFound(self.start as u32))?;

        let colony = Colony::new(graph, start, self.config)?;
        Ok(match self.assessment {
            Some(assessment) => colony.with_assessment(assessment),
            None => colony,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formica_core::topology::TrailGraph;
    use formica_core::types::Edge;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ]
    }

    #[test]
    fn builds_complete_graph() {
        let colony = ColonyBuilder::new().with_points(square()).build().unwrap();
        assert_eq!(colony.graph().point_count(), 4);
        assert_eq!(colony.graph().edge_count(), 6);
        assert_eq!(colony.generation(), 0);
    }

    #[test]
    fn same_seed_same_initial_pheromone() {
        let a = ColonyBuilder::new().with_points(square()).build().unwrap();
        let b = ColonyBuilder::new().with_points(square()).build().unwrap();
        assert_eq!(a.graph().total_pheromone(), b.graph().total_pheromone());
    }

    #[test]
    fn start_index_is_checked() {
        assert!(ColonyBuilder::new()
            .with_points(square())
            .with_start(4)
            .build()
            .is_err());
        let colony = ColonyBuilder::new()
            .with_points(square())
            .with_start(2)
            .build()
            .unwrap();
        assert_eq!(colony.start().0, 2);
    }

    #[test]
    fn empty_point_list_is_rejected() {
        assert!(ColonyBuilder::new().build().is_err());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ColonyConfig {
            retention: 2.0,
            ..Default::default()
        };
        assert!(ColonyBuilder::new()
            .with_points(square())
            .with_config(config)
            .build()
            .is_err());
    }

    #[test]
    fn custom_assessment_is_installed() {
        let flat = |_: &Edge| 1.0;
        let mut colony = ColonyBuilder::new()
            .with_points(square())
            .with_assessment(Box::new(flat))
            .build()
            .unwrap();
        let report = colony.run_generation().unwrap();
        assert!(report.tours.iter().all(|t| t.complete));
    }
}
