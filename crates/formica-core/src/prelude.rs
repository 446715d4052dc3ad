//! Formica Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use formica_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{
    AgentId, PointId, EdgeId,
    Point, Edge,
    Generation,
    path_length,
};

pub use crate::tour::Tour;

// Re-export the Agent trait
pub use crate::agent::Agent;

// Re-export the TrailGraph trait
pub use crate::topology::TrailGraph;

// Re-export the assessment seam
pub use crate::assessment::{Assessment, PheromoneHeuristic, heuristic};

// Re-export error types
pub use crate::error::{FormicaError, GraphError, ConfigError, SessionError, Result};
