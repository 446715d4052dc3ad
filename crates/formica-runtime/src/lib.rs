//! # Formica Runtime
//!
//! Colony management, graph storage and persistence.
//!
//! The runtime owns the trail graph between generations, runs the
//! spawn / construct / evaporate / deposit cycle, and provides the tooling
//! around it: random problem generation, a brute-force baseline for small
//! instances, convergence metrics and JSON sessions.

pub mod topology_impl;
pub mod colony;
pub mod colony_builder;
pub mod cities;
pub mod baseline;
pub mod metrics;
pub mod session;
pub mod prelude;
