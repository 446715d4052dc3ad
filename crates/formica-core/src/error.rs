//! Error types for Formica operations.
//!
//! An ant with nowhere to go is not an error: `Agent::step` returns `None`.

use thiserror::Error;

/// Result type for Formica operations.
pub type Result<T> = std::result::Result<T, FormicaError>;

/// Errors that can occur during Formica operations.
#[derive(Debug, Clone, Error)]
pub enum FormicaError {
    /// Graph-related errors.
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
    /// Configuration errors.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// Session-related errors.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(String),
    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for FormicaError {
    fn from(e: std::io::Error) -> Self {
        FormicaError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for FormicaError {
    fn from(e: serde_json::Error) -> Self {
        FormicaError::Serialization(e.to_string())
    }
}

/// Graph-related errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Point not found.
    #[error("Point not found: {0}")]
    PointNotFound(u32),
    /// Edge not found.
    #[error("Edge not found: {0}")]
    EdgeNotFound(u32),
    /// Self-loop or zero-length edge; its heuristic would be infinite.
    #[error("Degenerate edge {from} -> {to} (length {length})")]
    DegenerateEdge { from: u32, to: u32, length: f64 },
    /// Pheromone must be finite and non-negative.
    #[error("Invalid pheromone: {0} (must be finite and >= 0)")]
    InvalidPheromone(f64),
    /// Graph is empty.
    #[error("Graph is empty")]
    EmptyGraph,
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Invalid value.
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    /// Out of range.
    #[error("{field} out of range: {value} (must be {min}-{max})")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

/// Session-related errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// Session not found.
    #[error("Session not found: {0}")]
    NotFound(String),
    /// Session file corrupt.
    #[error("Session file corrupt: {0}")]
    Corrupt(String),
    /// Version mismatch.
    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

// Convenience constructors
impl FormicaError {
    pub fn point_not_found(id: u32) -> Self {
        FormicaError::Graph(GraphError::PointNotFound(id))
    }

    pub fn edge_not_found(id: u32) -> Self {
        FormicaError::Graph(GraphError::EdgeNotFound(id))
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FormicaError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }

    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        FormicaError::Config(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }
}
