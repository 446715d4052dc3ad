//! # Formica Core
//!
//! Core traits and types for ant colony optimization over planar points.
//!
//! This crate defines the vocabulary shared by every other Formica crate:
//!
//! - **Point / Edge**: cities and the pheromone-carrying roads between them
//! - **TrailGraph**: the shared substrate ants read and the colony updates
//! - **Tour**: the append-only path an ant builds during one generation
//! - **Assessment**: the single extension point, scoring how desirable an edge is
//! - **Agent**: anything that can take one construction step at a time
//!
//! ## Quick Start
//!
//! ```rust
//! use formica_core::prelude::*;
//!
//! let a = Point::new(0.0, 0.0);
//! let b = Point::new(3.0, 4.0);
//! assert_eq!(a.distance(&b), 5.0);
//!
//! // Deterministic ant ID (for testing)
//! let id = AgentId::from_seed(42);
//! assert_eq!(id, AgentId::from_seed(42));
//! ```

pub mod types;
pub mod tour;
pub mod topology;
pub mod assessment;
pub mod agent;
pub mod error;
pub mod prelude;
