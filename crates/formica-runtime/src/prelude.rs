//! Formica Runtime Prelude: convenient imports for common usage.
//!
//! ```rust
//! use formica_runtime::prelude::*;
//! ```

// Re-export colony
pub use crate::colony::{sweep, Colony, ColonyConfig, ColonyStats, GenerationReport, TourRecord};

// Re-export colony builder
pub use crate::colony_builder::ColonyBuilder;

// Re-export graph storage
pub use crate::topology_impl::PetTrailGraph;

// Re-export problem generation and baseline
pub use crate::baseline::{min_max_length, Baseline, MAX_BASELINE_POINTS};
pub use crate::cities::{complete_graph, random_cities, InitialPheromone};

// Re-export session
pub use crate::session::{
    load_session, restore_colony, save_session, snapshot, ColonyState, SerializedEdge,
    SerializedPoint, SessionMetadata, SESSION_VERSION,
};

// Re-export metrics
pub use crate::metrics::{
    mean_length_trend, pheromone_stats, summarize, GenerationSummary, PheromoneStats,
};

// Re-export from agents
pub use formica_agents::prelude::*;
