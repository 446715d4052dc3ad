//! Formica Agents Prelude: convenient imports for common usage.
//!
//! ```rust
//! use formica_agents::prelude::*;
//! ```

// Re-export agent types
pub use crate::ant::Ant;
pub use crate::selector::{Candidate, MoveSelector, SelectionPolicy};
pub use crate::spawn::{ant_rng, spawn_population};

// Re-export from core
pub use formica_core::prelude::*;
