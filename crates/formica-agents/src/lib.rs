//! # Formica Agents
//!
//! The tour-building side of the colony:
//!
//! - **MoveSelector**: turns the trail graph into a probability for each
//!   unvisited neighbor
//! - **SelectionPolicy**: turns those probabilities into one move
//! - **Ant**: owns a tour and keeps moving until it runs out of neighbors
//! - **spawn**: a fresh, reproducibly seeded population per generation

pub mod selector;
pub mod ant;
pub mod spawn;
pub mod prelude;
