//! Problem generation: random city layouts and complete graphs over them.

use crate::topology_impl::PetTrailGraph;
use formica_core::error::{FormicaError, Result};
use formica_core::topology::TrailGraph;
use formica_core::types::{Point, PointId};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Starting pheromone level for freshly connected edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InitialPheromone {
    /// An independent draw from `[0, 1)` per edge.
    Uniform,
    /// The same level on every edge.
    Constant { level: f64 },
}

impl Default for InitialPheromone {
    fn default() -> Self {
        InitialPheromone::Uniform
    }
}

impl InitialPheromone {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            InitialPheromone::Uniform => rng.gen::<f64>(),
            InitialPheromone::Constant { level } => level,
        }
    }
}

/// `count` cities at distinct integer coordinates in `[0, extent]²`.
///
/// Coincident draws are redrawn, so every pair of cities is a positive
/// distance apart.
pub fn random_cities<R: Rng + ?Sized>(count: usize, extent: u32, rng: &mut R) -> Result<Vec<Point>> {
    let side = u64::from(extent) + 1;
    // A full u32 square holds 2^64 positions, more than any u64 count
    if let Some(capacity) = side.checked_mul(side) {
        if count as u64 > capacity {
            return Err(FormicaError::invalid_config(
                "count",
                count.to_string(),
                format!("only {capacity} distinct positions fit in a {extent}x{extent} square"),
            ));
        }
    }

    let mut taken = HashSet::with_capacity(count);
    let mut cities = Vec::with_capacity(count);
    while cities.len() < count {
        let x = rng.gen_range(0..=extent);
        let y = rng.gen_range(0..=extent);
        if taken.insert((x, y)) {
            cities.push(Point::new(f64::from(x), f64::from(y)));
        }
    }
    Ok(cities)
}

/// Add `points` to a fresh graph and join every pair with a bidirectional edge.
///
/// Returns the graph and the IDs in the same order as `points`.
pub fn complete_graph<R: Rng + ?Sized>(
    points: &[Point],
    initial: InitialPheromone,
    rng: &mut R,
) -> Result<(PetTrailGraph, Vec<PointId>)> {
    let mut graph = PetTrailGraph::new();
    let ids: Vec<PointId> = points.iter().map(|p| graph.add_point(*p)).collect();
    for (i, &a) in ids.iter().enumerate() {
        for &b in &ids[i + 1..] {
            graph.connect(a, b, initial.sample(rng))?;
        }
    }
    Ok((graph, ids))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn cities_are_distinct_and_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let cities = random_cities(50, 10, &mut rng).unwrap();
        assert_eq!(cities.len(), 50);
        let unique: HashSet<(i64, i64)> = cities
            .iter()
            .map(|p| (p.x() as i64, p.y() as i64))
            .collect();
        assert_eq!(unique.len(), 50);
        assert!(cities
            .iter()
            .all(|p| (0.0..=10.0).contains(&p.x()) && (0.0..=10.0).contains(&p.y())));
    }

    #[test]
    fn too_many_cities_for_the_square() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(random_cities(5, 1, &mut rng).is_err());
        assert_eq!(random_cities(4, 1, &mut rng).unwrap().len(), 4);
    }

    #[test]
    fn full_u32_extent_is_accepted() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let cities = random_cities(3, u32::MAX, &mut rng).unwrap();
        assert_eq!(cities.len(), 3);
        assert!(cities.iter().all(|c| c.x() <= f64::from(u32::MAX) && c.y() >= 0.0));
    }

    #[test]
    fn complete_graph_joins_every_pair() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let cities = random_cities(6, 100, &mut rng).unwrap();
        let (graph, ids) = complete_graph(&cities, InitialPheromone::Uniform, &mut rng).unwrap();
        assert_eq!(ids.len(), 6);
        assert_eq!(graph.edge_count(), 15);
        for &id in &ids {
            assert_eq!(graph.edges_incident_to(id).len(), 5);
        }
        assert!(graph
            .edges()
            .all(|(_, e)| (0.0..1.0).contains(&e.pheromone())));
    }

    #[test]
    fn constant_initial_pheromone() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let cities = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
        let (graph, _) =
            complete_graph(&cities, InitialPheromone::Constant { level: 2.5 }, &mut rng).unwrap();
        assert!((graph.total_pheromone() - 7.5).abs() < 1e-12);
    }

    #[test]
    fn coincident_points_cannot_be_joined() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let cities = [Point::new(2.0, 2.0), Point::new(2.0, 2.0)];
        assert!(complete_graph(&cities, InitialPheromone::Uniform, &mut rng).is_err());
    }
}
