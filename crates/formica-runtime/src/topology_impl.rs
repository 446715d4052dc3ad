//! Concrete implementation of the TrailGraph trait using petgraph.
//!
//! Points and edges are never removed, so petgraph's dense indices double as
//! our stable `PointId` / `EdgeId` handles. Edges are stored directed; a
//! bidirectional edge is also reachable from its `to` endpoint.

use formica_core::error::{FormicaError, Result};
use formica_core::topology::TrailGraph;
use formica_core::types::*;
use petgraph::graph::{EdgeIndex, Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

/// Petgraph-backed implementation of the trail graph.
#[derive(Debug, Clone, Default)]
pub struct PetTrailGraph {
    graph: Graph<Point, Edge>,
}

impl PetTrailGraph {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// The edge joining `a` and `b`, in either direction.
    pub fn find_edge(&self, a: PointId, b: PointId) -> Option<EdgeId> {
        let (ai, bi) = (self.node_index(a)?, self.node_index(b)?);
        self.graph
            .find_edge(ai, bi)
            .or_else(|| self.graph.find_edge(bi, ai))
            .map(|idx| EdgeId(idx.index() as u32))
    }

    /// Every point with its ID, in insertion order.
    pub fn points(&self) -> impl Iterator<Item = (PointId, &Point)> {
        self.graph
            .node_indices()
            .map(move |idx| (PointId(idx.index() as u32), &self.graph[idx]))
    }

    /// Every edge with its ID, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.graph
            .edge_indices()
            .map(move |idx| (EdgeId(idx.index() as u32), &self.graph[idx]))
    }

    fn node_index(&self, id: PointId) -> Option<NodeIndex> {
        (id.index() < self.graph.node_count()).then(|| NodeIndex::new(id.index()))
    }

    fn edge_index(&self, id: EdgeId) -> Option<EdgeIndex> {
        (id.index() < self.graph.edge_count()).then(|| EdgeIndex::new(id.index()))
    }

    fn insert_edge(
        &mut self,
        from: PointId,
        to: PointId,
        pheromone: f64,
        bidirectional: bool,
    ) -> Result<EdgeId> {
        let from_idx = self
            .node_index(from)
            .ok_or_else(|| FormicaError::point_not_found(from.0))?;
        let to_idx = self
            .node_index(to)
            .ok_or_else(|| FormicaError::point_not_found(to.0))?;
        let length = self.graph[from_idx].distance(&self.graph[to_idx]);
        let edge = Edge::new(from, to, pheromone, bidirectional, length)?;
        let idx = self.graph.add_edge(from_idx, to_idx, edge);
        Ok(EdgeId(idx.index() as u32))
    }
}

impl TrailGraph for PetTrailGraph {
    fn add_point(&mut self, point: Point) -> PointId {
        PointId(self.graph.add_node(point).index() as u32)
    }

    fn connect(&mut self, a: PointId, b: PointId, pheromone: f64) -> Result<EdgeId> {
        self.insert_edge(a, b, pheromone, true)
    }

    fn connect_directed(&mut self, from: PointId, to: PointId, pheromone: f64) -> Result<EdgeId> {
        self.insert_edge(from, to, pheromone, false)
    }

    fn point(&self, id: PointId) -> Option<&Point> {
        self.node_index(id).map(|idx| &self.graph[idx])
    }

    fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edge_index(id).map(|idx| &self.graph[idx])
    }

    fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        let idx = self.edge_index(id)?;
        Some(&mut self.graph[idx])
    }

    fn edges_incident_to(&self, point: PointId) -> Vec<EdgeId> {
        let Some(idx) = self.node_index(point) else {
            return Vec::new();
        };

        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .chain(self.graph.edges_directed(idx, Direction::Incoming))
            .filter(|edge| edge.weight().connects(point))
            .map(|edge| EdgeId(edge.id().index() as u32))
            .collect()
    }

    fn point_ids(&self) -> Vec<PointId> {
        self.graph
            .node_indices()
            .map(|idx| PointId(idx.index() as u32))
            .collect()
    }

    fn edge_ids(&self) -> Vec<EdgeId> {
        self.graph
            .edge_indices()
            .map(|idx| EdgeId(idx.index() as u32))
            .collect()
    }

    fn point_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn evaporate(&mut self, retention: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&retention) {
            return Err(FormicaError::out_of_range("retention", 0.0, 1.0, retention));
        }
        for edge in self.graph.edge_weights_mut() {
            let level = edge.pheromone();
            edge.set_pheromone(level * retention)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formica_core::error::GraphError;

    fn triangle() -> (PetTrailGraph, [PointId; 3]) {
        let mut graph = PetTrailGraph::new();
        let a = graph.add_point(Point::new(0.0, 0.0));
        let b = graph.add_point(Point::new(3.0, 0.0));
        let c = graph.add_point(Point::new(0.0, 4.0));
        graph.connect(a, b, 1.0).unwrap();
        graph.connect(b, c, 1.0).unwrap();
        graph.connect(c, a, 1.0).unwrap();
        (graph, [a, b, c])
    }

    #[test]
    fn add_and_get_point() {
        let mut graph = PetTrailGraph::new();
        let id = graph.add_point(Point::new(2.0, 7.0));
        assert_eq!(graph.point(id), Some(&Point::new(2.0, 7.0)));
        assert_eq!(graph.point_count(), 1);
        assert!(graph.point(PointId(5)).is_none());
    }

    #[test]
    fn identical_coordinates_are_distinct_points() {
        let mut graph = PetTrailGraph::new();
        let a = graph.add_point(Point::new(1.0, 1.0));
        let b = graph.add_point(Point::new(1.0, 1.0));
        assert_ne!(a, b);
        assert_eq!(graph.point_count(), 2);
    }

    #[test]
    fn edge_length_comes_from_endpoints() {
        let (graph, [_, b, c]) = triangle();
        let id = graph.find_edge(b, c).unwrap();
        assert!((graph.edge(id).unwrap().length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn connect_rejects_unknown_and_coincident_points() {
        let mut graph = PetTrailGraph::new();
        let a = graph.add_point(Point::new(1.0, 1.0));
        let b = graph.add_point(Point::new(1.0, 1.0));
        assert!(matches!(
            graph.connect(a, PointId(9), 1.0),
            Err(FormicaError::Graph(GraphError::PointNotFound(9)))
        ));
        assert!(matches!(
            graph.connect(a, b, 1.0),
            Err(FormicaError::Graph(GraphError::DegenerateEdge { .. }))
        ));
        assert!(graph.connect(a, a, 1.0).is_err());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn incident_edges_cover_both_directions() {
        let (graph, [a, b, c]) = triangle();
        for p in [a, b, c] {
            let incident = graph.edges_incident_to(p);
            assert_eq!(incident.len(), 2);
            for id in incident {
                assert!(graph.edge(id).unwrap().connects(p));
            }
        }
    }

    #[test]
    fn directed_edges_are_one_way() {
        let mut graph = PetTrailGraph::new();
        let a = graph.add_point(Point::new(0.0, 0.0));
        let b = graph.add_point(Point::new(1.0, 0.0));
        let e = graph.connect_directed(a, b, 1.0).unwrap();
        assert_eq!(graph.edges_incident_to(a), vec![e]);
        assert!(graph.edges_incident_to(b).is_empty());
    }

    #[test]
    fn evaporate_scales_every_edge() {
        let (mut graph, _) = triangle();
        graph.evaporate(0.3).unwrap();
        for id in graph.edge_ids() {
            assert!((graph.edge(id).unwrap().pheromone() - 0.3).abs() < 1e-12);
        }
        assert!((graph.total_pheromone() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn evaporate_rejects_growth() {
        let (mut graph, _) = triangle();
        assert!(graph.evaporate(1.5).is_err());
        assert!(graph.evaporate(-0.1).is_err());
        assert!((graph.total_pheromone() - 3.0).abs() < 1e-12);
    }
}
