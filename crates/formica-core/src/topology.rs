//! Topology: the trail graph ants walk on.
//!
//! The graph is the only state that survives a generation. Ants read it;
//! the colony writes to it once per generation (evaporate, then deposit).
//! Following stigmergy: the pheromone map IS the colony's memory.

use crate::error::Result;
use crate::types::*;

/// A handle to the trail graph.
///
/// This is a trait rather than a concrete type so that different graph
/// backends can be plugged into the same ants and colony.
pub trait TrailGraph {
    /// Add a point and return its ID.
    fn add_point(&mut self, point: Point) -> PointId;

    /// Connect two points with a bidirectional edge.
    fn connect(&mut self, a: PointId, b: PointId, pheromone: f64) -> Result<EdgeId>;

    /// Connect two points with an edge that can only be taken from `from`.
    fn connect_directed(&mut self, from: PointId, to: PointId, pheromone: f64) -> Result<EdgeId>;

    /// Get a point by ID.
    fn point(&self, id: PointId) -> Option<&Point>;

    /// Get edge data by ID.
    fn edge(&self, id: EdgeId) -> Option<&Edge>;

    /// Get mutable edge data by ID.
    fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge>;

    /// All edges an ant standing at `point` could take.
    ///
    /// The order is unspecified; callers must treat the result as a set.
    fn edges_incident_to(&self, point: PointId) -> Vec<EdgeId>;

    /// Get all point IDs.
    fn point_ids(&self) -> Vec<PointId>;

    /// Get all edge IDs.
    fn edge_ids(&self) -> Vec<EdgeId>;

    /// Number of points.
    fn point_count(&self) -> usize;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// Multiply every edge's pheromone by `retention`.
    ///
    /// `retention` must lie in [0, 1]; anything else is rejected by the
    /// pheromone setter before any edge is touched.
    fn evaporate(&mut self, retention: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&retention) {
            return Err(crate::error::FormicaError::out_of_range(
                "retention", 0.0, 1.0, retention,
            ));
        }
        for id in self.edge_ids() {
            if let Some(edge) = self.edge_mut(id) {
                let level = edge.pheromone();
                edge.set_pheromone(level * retention)?;
            }
        }
        Ok(())
    }

    /// Sum of pheromone over every edge.
    fn total_pheromone(&self) -> f64 {
        self.edge_ids()
            .into_iter()
            .filter_map(|id| self.edge(id))
            .map(|e| e.pheromone())
            .sum()
    }
}
