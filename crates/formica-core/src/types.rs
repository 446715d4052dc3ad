//! Shared types used across all Formica crates.

use crate::error::{FormicaError, GraphError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an ant in the colony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub Uuid);

impl AgentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministic ID derived from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self(Uuid::from_u64_pair(seed, !seed))
    }

    /// Deterministic ID for the `index`-th ant of a generation.
    pub fn for_ant(generation: u64, index: u64) -> Self {
        Self(Uuid::from_u64_pair(generation, index))
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a point stored in a trail graph.
///
/// Points are entities, not values: two points with identical coordinates
/// still get distinct IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(pub u32);

impl PointId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Handle to an edge stored in a trail graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

impl EdgeId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// A city: an immutable coordinate in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A road between two points carrying a pheromone level.
///
/// Endpoints and length are fixed when the graph creates the edge; only the
/// pheromone changes afterwards, and it never goes negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    from: PointId,
    to: PointId,
    pheromone: f64,
    bidirectional: bool,
    length: f64,
}

impl Edge {
    /// Build an edge between two points at a known distance.
    ///
    /// Graph implementations call this after resolving the endpoints; the
    /// length must be strictly positive so that `1 / length` stays finite.
    pub fn new(
        from: PointId,
        to: PointId,
        pheromone: f64,
        bidirectional: bool,
        length: f64,
    ) -> Result<Self> {
        if from == to || length <= 0.0 || !length.is_finite() {
            return Err(FormicaError::Graph(GraphError::DegenerateEdge {
                from: from.0,
                to: to.0,
                length,
            }));
        }
        check_pheromone(pheromone)?;
        Ok(Self {
            from,
            to,
            pheromone,
            bidirectional,
            length,
        })
    }

    pub fn from(&self) -> PointId {
        self.from
    }

    pub fn to(&self) -> PointId {
        self.to
    }

    pub fn is_bidirectional(&self) -> bool {
        self.bidirectional
    }

    /// Distance between the two endpoints.
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn pheromone(&self) -> f64 {
        self.pheromone
    }

    /// Overwrite the pheromone level. Negative or non-finite values are rejected.
    pub fn set_pheromone(&mut self, pheromone: f64) -> Result<()> {
        check_pheromone(pheromone)?;
        self.pheromone = pheromone;
        Ok(())
    }

    /// Whether an ant standing at `point` may take this edge.
    pub fn connects(&self, point: PointId) -> bool {
        self.from == point || (self.bidirectional && self.to == point)
    }

    /// The endpoint opposite `point`, if this edge can be taken from there.
    pub fn other_endpoint(&self, point: PointId) -> Option<PointId> {
        if !self.connects(point) {
            None
        } else if self.from == point {
            Some(self.to)
        } else {
            Some(self.from)
        }
    }
}

fn check_pheromone(pheromone: f64) -> Result<()> {
    if pheromone.is_finite() && pheromone >= 0.0 {
        Ok(())
    } else {
        Err(FormicaError::Graph(GraphError::InvalidPheromone(pheromone)))
    }
}

/// Sum of the distances between consecutive points.
pub fn path_length<'a, I>(points: I) -> f64
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut total = 0.0;
    let mut prev: Option<&Point> = None;
    for point in points {
        if let Some(p) = prev {
            total += p.distance(point);
        }
        prev = Some(point);
    }
    total
}

/// Generation counter of the colony update loop.
pub type Generation = u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert!((a.distance(&b) - 5.0).abs() < f64::EPSILON);
        assert!((b.distance(&a) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bidirectional_edge_connects_both_ends() {
        let e = Edge::new(PointId(0), PointId(1), 0.5, true, 2.0).unwrap();
        assert!(e.connects(PointId(0)));
        assert!(e.connects(PointId(1)));
        assert!(!e.connects(PointId(2)));
        assert_eq!(e.other_endpoint(PointId(0)), Some(PointId(1)));
        assert_eq!(e.other_endpoint(PointId(1)), Some(PointId(0)));
        assert_eq!(e.other_endpoint(PointId(2)), None);
    }

    #[test]
    fn directed_edge_only_leaves_from_source() {
        let e = Edge::new(PointId(0), PointId(1), 0.5, false, 2.0).unwrap();
        assert!(e.connects(PointId(0)));
        assert!(!e.connects(PointId(1)));
        assert_eq!(e.other_endpoint(PointId(1)), None);
    }

    #[test]
    fn degenerate_edges_are_rejected() {
        assert!(Edge::new(PointId(0), PointId(0), 1.0, true, 1.0).is_err());
        assert!(Edge::new(PointId(0), PointId(1), 1.0, true, 0.0).is_err());
        assert!(Edge::new(PointId(0), PointId(1), 1.0, true, f64::NAN).is_err());
    }

    #[test]
    fn pheromone_cannot_go_negative() {
        let mut e = Edge::new(PointId(0), PointId(1), 0.5, true, 1.0).unwrap();
        assert!(e.set_pheromone(-0.1).is_err());
        assert!(e.set_pheromone(f64::INFINITY).is_err());
        assert_eq!(e.pheromone(), 0.5);
        e.set_pheromone(0.0).unwrap();
        assert_eq!(e.pheromone(), 0.0);
    }

    #[test]
    fn path_length_sums_consecutive_hops() {
        let pts = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(3.0, 0.0)];
        assert!((path_length(&pts) - 9.0).abs() < 1e-12);
        assert_eq!(path_length(&pts[..1]), 0.0);
        assert_eq!(path_length(&[] as &[Point]), 0.0);
    }
}
