//! Tour: the partial path an ant builds during one generation.
//!
//! A tour is append-only: it starts at a designated point and grows by one
//! (point, edge) pair per move. The i-th edge always joins the i-th and
//! (i+1)-th points.

use crate::topology::TrailGraph;
use crate::types::{path_length, EdgeId, PointId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    points: Vec<PointId>,
    edges: Vec<EdgeId>,
}

impl Tour {
    pub fn new(start: PointId) -> Self {
        Self {
            points: vec![start],
            edges: Vec::new(),
        }
    }

    /// Record a move along `edge` to `point`.
    pub fn move_to(&mut self, point: PointId, edge: EdgeId) {
        self.points.push(point);
        self.edges.push(edge);
    }

    pub fn start(&self) -> PointId {
        self.points[0]
    }

    /// The point the owning ant is standing on.
    pub fn current(&self) -> PointId {
        // `points` is never empty: it is seeded with the start point.
        self.points[self.points.len() - 1]
    }

    pub fn points(&self) -> &[PointId] {
        &self.points
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn has_visited(&self, point: PointId) -> bool {
        self.points.contains(&point)
    }

    /// Number of moves made so far.
    pub fn hops(&self) -> usize {
        self.edges.len()
    }

    /// Edges of this tour with repeats removed, in first-traversal order.
    pub fn distinct_edges(&self) -> Vec<EdgeId> {
        let mut seen = HashSet::with_capacity(self.edges.len());
        self.edges
            .iter()
            .copied()
            .filter(|e| seen.insert(*e))
            .collect()
    }

    /// Total length, following the point sequence.
    ///
    /// Points unknown to `graph` are skipped.
    pub fn length<G: TrailGraph + ?Sized>(&self, graph: &G) -> f64 {
        path_length(self.points.iter().filter_map(|id| graph.point(*id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_one_point_and_no_edges() {
        let tour = Tour::new(PointId(3));
        assert_eq!(tour.points(), &[PointId(3)]);
        assert!(tour.edges().is_empty());
        assert_eq!(tour.current(), PointId(3));
        assert_eq!(tour.hops(), 0);
    }

    #[test]
    fn moves_keep_points_and_edges_aligned() {
        let mut tour = Tour::new(PointId(0));
        tour.move_to(PointId(1), EdgeId(10));
        tour.move_to(PointId(2), EdgeId(11));
        assert_eq!(tour.points().len(), tour.edges().len() + 1);
        assert_eq!(tour.current(), PointId(2));
        assert_eq!(tour.start(), PointId(0));
        assert!(tour.has_visited(PointId(1)));
        assert!(!tour.has_visited(PointId(5)));
    }

    #[test]
    fn distinct_edges_drops_repeats() {
        let mut tour = Tour::new(PointId(0));
        tour.move_to(PointId(1), EdgeId(4));
        tour.move_to(PointId(0), EdgeId(4));
        tour.move_to(PointId(2), EdgeId(5));
        assert_eq!(tour.distinct_edges(), vec![EdgeId(4), EdgeId(5)]);
    }
}
