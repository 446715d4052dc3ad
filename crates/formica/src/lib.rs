//! # Formica
//!
//! Ant colony optimization for the travelling salesman problem.
//!
//! A population of ants walks a weighted graph of points. Each ant builds a
//! tour by repeatedly choosing an unvisited neighbor, favoring edges that are
//! short and carry a lot of pheromone. After every generation the pheromone
//! on all edges evaporates and each ant reinforces the edges it used in
//! proportion to how short its tour was. Over many generations the pheromone
//! concentrates on short tours.
//!
//! ## Quick Start
//!
//! ```rust
//! use formica::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // Eight random cities on a 100x100 grid
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let cities = random_cities(8, 100, &mut rng).unwrap();
//!
//! // Connect every pair and start all ants at the first city
//! let mut colony = ColonyBuilder::new()
//!     .with_points(cities.clone())
//!     .with_config(ColonyConfig { population: 10, ..Default::default() })
//!     .build()
//!     .unwrap();
//!
//! // Run the simulation
//! colony.run(20).unwrap();
//!
//! // Nothing beats exhaustive search
//! let baseline = min_max_length(&cities).unwrap();
//! assert!(colony.best().unwrap().length >= baseline.min - 1e-9);
//! ```
//!
//! ## Architecture
//!
//! Formica is organized into several crates:
//!
//! - [`formica_core`] - Points, edges, tours, the graph and agent traits, errors
//! - [`formica_agents`] - The move selector, ants and population spawning
//! - [`formica_runtime`] - The colony loop, petgraph storage, sessions and metrics
//!
//! ## The Generation Cycle
//!
//! | Phase | Graph access | What happens |
//! |-------|--------------|--------------|
//! | Spawn | shared | A fresh population is placed on the start point |
//! | Construct | shared | Ants step until none of them can move |
//! | Evaporate | exclusive | Every edge keeps `retention` of its pheromone |
//! | Deposit | exclusive | Each ant adds `Q / length` to every edge it used |
//!
//! Ants borrow the graph immutably, so the compiler guarantees no pheromone
//! changes while tours are being built.
//!
//! ## Edge Scores
//!
//! By default an edge scores `pheromone^alpha * (1 / length)^beta` with
//! `alpha = 1` and `beta = 5`. Any `Fn(&Edge) -> f64` can replace it:
//!
//! ```rust
//! use formica::prelude::*;
//!
//! let greedy = |edge: &Edge| heuristic(edge);
//! let colony = ColonyBuilder::new()
//!     .with_points(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)])
//!     .with_assessment(Box::new(greedy))
//!     .build()
//!     .unwrap();
//! assert_eq!(colony.graph().edge_count(), 1);
//! ```
//!
//! ## Session Persistence
//!
//! ```rust,ignore
//! use formica::prelude::*;
//! use std::path::Path;
//!
//! save_session(&colony, Path::new(".formica/current.json"))?;
//!
//! let state = load_session(Path::new(".formica/current.json"))?;
//! let mut colony = restore_colony(&state)?;
//! colony.run(10)?;
//! ```

// Re-export all subcrates
pub use formica_core as core;
pub use formica_agents as agents;
pub use formica_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use formica::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use formica_core::types::{
        AgentId, PointId, EdgeId,
        Point, Edge,
        Generation,
        path_length,
    };
    pub use formica_core::tour::Tour;

    // Core traits
    pub use formica_core::agent::Agent;
    pub use formica_core::topology::TrailGraph;
    pub use formica_core::assessment::{Assessment, PheromoneHeuristic, heuristic};

    // Error types
    pub use formica_core::error::{FormicaError, GraphError, ConfigError, SessionError, Result};

    // Agents
    pub use formica_agents::ant::Ant;
    pub use formica_agents::selector::{Candidate, MoveSelector, SelectionPolicy};
    pub use formica_agents::spawn::{ant_rng, spawn_population};

    // Runtime
    pub use formica_runtime::colony::{
        Colony, ColonyConfig, ColonyStats, GenerationReport, TourRecord,
    };
    pub use formica_runtime::colony_builder::ColonyBuilder;
    pub use formica_runtime::topology_impl::PetTrailGraph;
    pub use formica_runtime::cities::{complete_graph, random_cities, InitialPheromone};
    pub use formica_runtime::baseline::{min_max_length, Baseline};
    pub use formica_runtime::metrics::{
        mean_length_trend, pheromone_stats, summarize, GenerationSummary, PheromoneStats,
    };
    pub use formica_runtime::session::{
        load_session, restore_colony, save_session,
        ColonyState, SessionMetadata,
    };
}
