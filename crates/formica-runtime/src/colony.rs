//! Colony: the generation loop.
//!
//! The colony owns the trail graph and runs one generation at a time:
//!
//! 1. Spawn a fresh population of ants at the start point
//! 2. Construct: step every ant until a sweep in which none of them moves
//! 3. Evaporate: scale every edge's pheromone by the retention factor
//! 4. Deposit: each ant adds `Q / length` to every distinct edge it used
//!
//! Ants only hold shared borrows of the graph, so steps 3 and 4 cannot
//! start until every ant of the generation has been dropped.

use crate::topology_impl::PetTrailGraph;
use formica_agents::selector::SelectionPolicy;
use formica_agents::spawn::spawn_population;
use formica_core::agent::Agent;
use formica_core::assessment::{Assessment, PheromoneHeuristic};
use formica_core::error::{FormicaError, GraphError, Result};
use formica_core::topology::TrailGraph;
use formica_core::tour::Tour;
use formica_core::types::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};
use uuid::Uuid;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Configuration for colony simulation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColonyConfig {
    /// Pheromone exponent in the edge score (default: 1.0).
    pub alpha: f64,
    /// Inverse-distance exponent in the edge score (default: 5.0).
    pub beta: f64,
    /// Fraction of pheromone kept by each evaporation, in (0, 1) (default: 0.3).
    pub retention: f64,
    /// Deposit constant Q; an ant lays `Q / tour length` per edge (default: 100.0).
    pub deposit: f64,
    /// Ants spawned per generation (default: 20).
    pub population: usize,
    /// Master seed for every ant's random stream (default: 42).
    pub seed: u64,
    /// How ants turn probabilities into moves.
    pub selection: SelectionPolicy,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 5.0,
            retention: 0.3,
            deposit: 100.0,
            population: 20,
            seed: 42,
            selection: SelectionPolicy::RouletteFallback,
        }
    }
}

impl ColonyConfig {
    /// Check every parameter is in range.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("alpha", self.alpha), ("beta", self.beta)] {
            if !value.is_finite() || value < 0.0 {
                return Err(FormicaError::invalid_config(
                    field,
                    value.to_string(),
                    "must be finite and >= 0",
                ));
            }
        }
        if !(self.retention > 0.0 && self.retention < 1.0) {
            return Err(FormicaError::out_of_range("retention", 0.0, 1.0, self.retention));
        }
        if !(self.deposit.is_finite() && self.deposit > 0.0) {
            return Err(FormicaError::invalid_config(
                "deposit",
                self.deposit.to_string(),
                "must be finite and > 0",
            ));
        }
        if self.population == 0 {
            return Err(FormicaError::invalid_config(
                "population",
                "0",
                "at least one ant is needed",
            ));
        }
        Ok(())
    }

    /// The standard assessment for these exponents.
    pub fn assessment(&self) -> PheromoneHeuristic {
        PheromoneHeuristic::new(self.alpha, self.beta)
    }
}

/// A finished tour, as reported after a generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourRecord {
    pub ant: AgentId,
    pub generation: Generation,
    pub points: Vec<PointId>,
    pub edges: Vec<EdgeId>,
    pub length: f64,
    /// Whether the tour visits every point of the graph.
    pub complete: bool,
}

/// What happened during one generation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub generation: Generation,
    /// Tours that contributed pheromone.
    pub tours: Vec<TourRecord>,
    /// Ants that never left the start point; they deposit nothing.
    pub stranded: Vec<AgentId>,
    /// Total pheromone added in the deposit phase.
    pub deposited: f64,
    /// Construction sweeps until every ant had stopped.
    pub sweeps: usize,
}

impl GenerationReport {
    pub fn mean_length(&self) -> Option<f64> {
        if self.tours.is_empty() {
            return None;
        }
        Some(self.tours.iter().map(|t| t.length).sum::<f64>() / self.tours.len() as f64)
    }

    pub fn shortest(&self) -> Option<&TourRecord> {
        self.tours
            .iter()
            .min_by(|a, b| a.length.total_cmp(&b.length))
    }

    pub fn longest(&self) -> Option<&TourRecord> {
        self.tours
            .iter()
            .max_by(|a, b| a.length.total_cmp(&b.length))
    }
}

/// Statistics about the colony.
#[derive(Debug, Clone, Serialize)]
pub struct ColonyStats {
    pub generation: Generation,
    pub points: usize,
    pub edges: usize,
    pub total_pheromone: f64,
    pub min_pheromone: f64,
    pub max_pheromone: f64,
    pub best_length: Option<f64>,
}

/// The colony: owns the trail graph and runs generations.
pub struct Colony {
    id: Uuid,
    graph: PetTrailGraph,
    start: PointId,
    config: ColonyConfig,
    assessment: Box<dyn Assessment>,
    generation: Generation,
    best: Option<TourRecord>,
}

impl Colony {
    /// Create a colony over `graph` whose ants all start at `start`.
    pub fn new(graph: PetTrailGraph, start: PointId, config: ColonyConfig) -> Result<Self> {
        config.validate()?;
        if graph.point(start).is_none() {
            return Err(FormicaError::point_not_found(start.0));
        }
        let assessment = Box::new(config.assessment());
        Ok(Self {
            id: Uuid::new_v4(),
            graph,
            start,
            config,
            assessment,
            generation: 0,
            best: None,
        })
    }

    /// Swap in a different edge assessment.
    pub fn with_assessment(mut self, assessment: Box<dyn Assessment>) -> Self {
        self.assessment = assessment;
        self
    }

    /// Continue a colony from saved state.
    pub(crate) fn resume(
        mut self,
        id: Uuid,
        generation: Generation,
        best: Option<TourRecord>,
    ) -> Self {
        self.id = id;
        self.generation = generation;
        self.best = best;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn graph(&self) -> &PetTrailGraph {
        &self.graph
    }

    pub fn start(&self) -> PointId {
        self.start
    }

    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    /// Number of generations completed so far.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Shortest complete tour seen in any generation.
    pub fn best(&self) -> Option<&TourRecord> {
        self.best.as_ref()
    }

    /// Run one generation: spawn, construct, evaporate, deposit.
    pub fn run_generation(&mut self) -> Result<GenerationReport> {
        let generation = self.generation;
        let (tours, sweeps) = self.construct(generation);

        let mut report = GenerationReport {
            generation,
            tours: Vec::with_capacity(tours.len()),
            stranded: Vec::new(),
            deposited: 0.0,
            sweeps,
        };

        let point_count = self.graph.point_count();
        let mut deposits: HashMap<EdgeId, f64> = HashMap::new();
        for (ant, tour) in tours {
            let length = tour.length(&self.graph);
            if tour.hops() == 0 || length <= 0.0 {
                warn!(?ant, generation, "ant never left the start point");
                report.stranded.push(ant);
                continue;
            }

            let amount = self.config.deposit / length;
            for id in tour.distinct_edges() {
                *deposits.entry(id).or_default() += amount;
                report.deposited += amount;
            }
            report.tours.push(TourRecord {
                ant,
                generation,
                complete: tour.points().len() == point_count,
                points: tour.points().to_vec(),
                edges: tour.edges().to_vec(),
                length,
            });
        }

        // Nothing is written until every new level is known to be valid
        self.check_deposits(&deposits)?;
        self.graph.evaporate(self.config.retention)?;
        for (id, amount) in deposits {
            let edge = self
                .graph
                .edge_mut(id)
                .ok_or_else(|| FormicaError::edge_not_found(id.0))?;
            let level = edge.pheromone();
            edge.set_pheromone(level + amount)?;
        }

        if let Some(shortest) = report
            .tours
            .iter()
            .filter(|t| t.complete)
            .min_by(|a, b| a.length.total_cmp(&b.length))
        {
            let improved = self
                .best
                .as_ref()
                .map_or(true, |best| shortest.length < best.length);
            if improved {
                self.best = Some(shortest.clone());
            }
        }

        debug!(
            generation,
            tours = report.tours.len(),
            stranded = report.stranded.len(),
            mean = report.mean_length().unwrap_or(0.0),
            best = self.best.as_ref().map(|b| b.length).unwrap_or(0.0),
            "generation complete"
        );

        self.generation += 1;
        Ok(report)
    }

    /// Run several generations, collecting every report.
    pub fn run(&mut self, generations: u64) -> Result<Vec<GenerationReport>> {
        (0..generations).map(|_| self.run_generation()).collect()
    }

    /// Get colony statistics.
    pub fn stats(&self) -> ColonyStats {
        let levels: Vec<f64> = self.graph.edges().map(|(_, e)| e.pheromone()).collect();
        ColonyStats {
            generation: self.generation,
            points: self.graph.point_count(),
            edges: self.graph.edge_count(),
            total_pheromone: levels.iter().sum(),
            min_pheromone: levels.iter().copied().reduce(f64::min).unwrap_or(0.0),
            max_pheromone: levels.iter().copied().reduce(f64::max).unwrap_or(0.0),
            best_length: self.best.as_ref().map(|b| b.length),
        }
    }

    /// Build this generation's tours. The graph is only read here.
    fn construct(&self, generation: Generation) -> (Vec<(AgentId, Tour)>, usize) {
        let mut ants = spawn_population(
            &self.graph,
            self.start,
            self.assessment.as_ref(),
            self.config.selection,
            self.config.population,
            self.config.seed,
            generation,
        );

        #[cfg(feature = "parallel")]
        let sweeps = ants
            .par_iter_mut()
            .map(|ant| ant.run_to_completion())
            .max()
            .unwrap_or(0);

        #[cfg(not(feature = "parallel"))]
        let sweeps = sweep(&mut ants);

        let tours = ants
            .into_iter()
            .map(|ant| (ant.id(), ant.into_tour()))
            .collect();
        (tours, sweeps)
    }

    /// Fail if evaporating and then adding `deposits` would leave any edge
    /// with a level `Edge::set_pheromone` rejects.
    fn check_deposits(&self, deposits: &HashMap<EdgeId, f64>) -> Result<()> {
        for (&id, &amount) in deposits {
            let edge = self
                .graph
                .edge(id)
                .ok_or_else(|| FormicaError::edge_not_found(id.0))?;
            let level = edge.pheromone() * self.config.retention + amount;
            if !level.is_finite() {
                return Err(GraphError::InvalidPheromone(level).into());
            }
        }
        Ok(())
    }
}

/// Step every unfinished agent once per sweep until a sweep where none moves.
/// Returns the number of sweeps in which at least one agent moved.
pub fn sweep<A: Agent>(agents: &mut [A]) -> usize {
    let mut sweeps = 0;
    loop {
        let mut moved = false;
        for agent in agents.iter_mut().filter(|a| !a.is_done()) {
            moved |= agent.step().is_some();
        }
        if !moved {
            return sweeps;
        }
        sweeps += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_points() -> (PetTrailGraph, PointId, PointId, EdgeId) {
        let mut graph = PetTrailGraph::new();
        let a = graph.add_point(Point::new(0.0, 0.0));
        let b = graph.add_point(Point::new(6.0, 8.0));
        let e = graph.connect(a, b, 1.0).unwrap();
        (graph, a, b, e)
    }

    #[test]
    fn default_config_is_valid() {
        assert!(ColonyConfig::default().validate().is_ok());
    }

    #[test]
    fn config_rejects_out_of_range_values() {
        let bad = [
            ColonyConfig { retention: 1.0, ..Default::default() },
            ColonyConfig { retention: 0.0, ..Default::default() },
            ColonyConfig { alpha: -1.0, ..Default::default() },
            ColonyConfig { beta: f64::NAN, ..Default::default() },
            ColonyConfig { deposit: 0.0, ..Default::default() },
            ColonyConfig { population: 0, ..Default::default() },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{config:?} should be rejected");
        }
    }

    #[test]
    fn unknown_start_point_is_rejected() {
        let (graph, ..) = two_points();
        assert!(Colony::new(graph, PointId(7), ColonyConfig::default()).is_err());
    }

    #[test]
    fn generation_counter_advances() {
        let (graph, a, ..) = two_points();
        let mut colony = Colony::new(graph, a, ColonyConfig::default()).unwrap();
        let reports = colony.run(3).unwrap();
        assert_eq!(reports.len(), 3);
        assert_eq!(colony.generation(), 3);
        assert_eq!(reports[2].generation, 2);
    }

    #[test]
    fn every_ant_reports_a_tour() {
        let (graph, a, ..) = two_points();
        let config = ColonyConfig { population: 5, ..Default::default() };
        let mut colony = Colony::new(graph, a, config).unwrap();
        let report = colony.run_generation().unwrap();
        assert_eq!(report.tours.len(), 5);
        assert!(report.stranded.is_empty());
        assert_eq!(report.sweeps, 1);
        assert!(report.tours.iter().all(|t| t.complete));
    }

    #[test]
    fn stranded_ants_deposit_nothing() {
        let mut graph = PetTrailGraph::new();
        let lonely = graph.add_point(Point::new(0.0, 0.0));
        let a = graph.add_point(Point::new(5.0, 0.0));
        let b = graph.add_point(Point::new(5.0, 5.0));
        let e = graph.connect(a, b, 1.0).unwrap();
        let mut colony = Colony::new(graph, lonely, ColonyConfig::default()).unwrap();
        let report = colony.run_generation().unwrap();
        assert!(report.tours.is_empty());
        assert_eq!(report.stranded.len(), 20);
        assert_eq!(report.deposited, 0.0);
        assert!((colony.graph().edge(e).unwrap().pheromone() - 0.3).abs() < 1e-12);
        assert!(colony.best().is_none());
    }

    #[test]
    fn overflowing_deposit_leaves_the_graph_untouched() {
        let mut graph = PetTrailGraph::new();
        let a = graph.add_point(Point::new(0.0, 0.0));
        let b = graph.add_point(Point::new(0.5, 0.0));
        let e = graph.connect(a, b, 1.0).unwrap();
        let config = ColonyConfig {
            deposit: f64::MAX,
            population: 1,
            ..Default::default()
        };
        let mut colony = Colony::new(graph, a, config).unwrap();

        let err = colony.run_generation().unwrap_err();
        assert!(matches!(err, FormicaError::Graph(GraphError::InvalidPheromone(_))));
        assert_eq!(colony.generation(), 0);
        assert_eq!(colony.graph().edge(e).unwrap().pheromone(), 1.0);
        assert!(colony.best().is_none());
    }

    #[test]
    fn custom_assessment_is_used() {
        let mut graph = PetTrailGraph::new();
        let hub = graph.add_point(Point::new(0.0, 0.0));
        let near = graph.add_point(Point::new(1.0, 0.0));
        let far = graph.add_point(Point::new(0.0, 9.0));
        graph.connect(hub, near, 1.0).unwrap();
        let far_edge = graph.connect(hub, far, 1.0).unwrap();
        // Only the far edge ever scores.
        let only_far = move |e: &Edge| if e.to() == far { 1.0 } else { 0.0 };
        let mut colony = Colony::new(graph, hub, ColonyConfig::default())
            .unwrap()
            .with_assessment(Box::new(only_far));
        let report = colony.run_generation().unwrap();
        assert!(report.tours.iter().all(|t| t.edges[0] == far_edge));
    }

    #[test]
    fn stats_track_pheromone_range() {
        let (graph, a, _, _) = two_points();
        let colony = Colony::new(graph, a, ColonyConfig::default()).unwrap();
        let stats = colony.stats();
        assert_eq!(stats.points, 2);
        assert_eq!(stats.edges, 1);
        assert_eq!(stats.total_pheromone, 1.0);
        assert_eq!(stats.min_pheromone, 1.0);
        assert_eq!(stats.max_pheromone, 1.0);
        assert!(stats.best_length.is_none());
    }
}
