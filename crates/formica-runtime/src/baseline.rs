//! Exhaustive baseline for small problems.
//!
//! Tries every ordering of the points with the first one fixed as the start,
//! which is the same open-path problem the ants solve. Only practical for a
//! handful of points.

use formica_core::error::{FormicaError, GraphError, Result};
use formica_core::types::{path_length, Point};
use serde::{Deserialize, Serialize};

/// Largest problem the brute-force search accepts (9! orderings).
pub const MAX_BASELINE_POINTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    /// Shortest path length over all orderings.
    pub min: f64,
    /// Longest path length over all orderings.
    pub max: f64,
    /// Indices into the input slice, in the order of the shortest path.
    pub shortest: Vec<usize>,
}

/// Shortest and longest open path that starts at `points[0]` and visits every point.
pub fn min_max_length(points: &[Point]) -> Result<Baseline> {
    if points.is_empty() {
        return Err(GraphError::EmptyGraph.into());
    }
    if points.len() > MAX_BASELINE_POINTS {
        return Err(FormicaError::invalid_config(
            "points",
            points.len().to_string(),
            format!("brute force is limited to {MAX_BASELINE_POINTS} points"),
        ));
    }

    let mut order: Vec<usize> = (0..points.len()).collect();
    let mut best = Baseline {
        min: f64::INFINITY,
        max: 0.0,
        shortest: order.clone(),
    };

    permute(&mut order, 1, &mut |order| {
        let length = path_length(order.iter().map(|&i| &points[i]));
        if length < best.min {
            best.min = length;
            best.shortest = order.to_vec();
        }
        best.max = best.max.max(length);
    });

    Ok(best)
}

fn permute(order: &mut [usize], k: usize, visit: &mut dyn FnMut(&[usize])) {
    if k >= order.len() {
        visit(order);
        return;
    }
    for i in k..order.len() {
        order.swap(k, i);
        permute(order, k + 1, visit);
        order.swap(k, i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_point_has_zero_length() {
        let baseline = min_max_length(&[Point::new(4.0, 4.0)]).unwrap();
        assert_eq!(baseline.min, 0.0);
        assert_eq!(baseline.max, 0.0);
        assert_eq!(baseline.shortest, vec![0]);
    }

    #[test]
    fn collinear_points() {
        // Start at 0; visiting 1 then 2 is shortest, 2 then 1 is longest.
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(3.0, 0.0)];
        let baseline = min_max_length(&points).unwrap();
        assert!((baseline.min - 3.0).abs() < 1e-12);
        assert!((baseline.max - 5.0).abs() < 1e-12);
        assert_eq!(baseline.shortest, vec![0, 1, 2]);
    }

    #[test]
    fn square_corners() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        let baseline = min_max_length(&points).unwrap();
        assert!((baseline.min - 3.0).abs() < 1e-12);
        assert!((baseline.max - (1.0 + 2.0 * 2f64.sqrt())).abs() < 1e-12);
        assert_eq!(baseline.shortest[0], 0);
    }

    #[test]
    fn refuses_empty_and_large_inputs() {
        assert!(min_max_length(&[]).is_err());
        let many: Vec<Point> = (0..=MAX_BASELINE_POINTS)
            .map(|i| Point::new(i as f64, 0.0))
            .collect();
        assert!(min_max_length(&many).is_err());
    }
}
