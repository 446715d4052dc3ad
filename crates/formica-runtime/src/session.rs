//! Session persistence: save/load a colony's trail graph and progress.
//!
//! Serializes the points, edges (with their pheromone), configuration,
//! generation counter and best tour to JSON so a run can be continued later.
//! A custom [`Assessment`](formica_core::assessment::Assessment) is not
//! saved; a restored colony scores edges with the configured exponents.

use crate::colony::{Colony, ColonyConfig, TourRecord};
use crate::topology_impl::PetTrailGraph;
use formica_core::error::{FormicaError, Result, SessionError};
use formica_core::topology::TrailGraph;
use formica_core::types::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Format version written by this build.
pub const SESSION_VERSION: u32 = 1;

/// Serializable snapshot of a colony.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColonyState {
    pub version: u32,
    pub metadata: SessionMetadata,
    pub config: ColonyConfig,
    pub start: PointId,
    pub points: Vec<SerializedPoint>,
    pub edges: Vec<SerializedEdge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best: Option<TourRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedPoint {
    pub id: PointId,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedEdge {
    pub id: EdgeId,
    pub from: PointId,
    pub to: PointId,
    pub pheromone: f64,
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
}

fn default_bidirectional() -> bool {
    true
}

/// Session metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMetadata {
    pub session_id: String,
    pub generation: Generation,
    pub point_count: usize,
    pub edge_count: usize,
}

/// Capture the colony's current state.
pub fn snapshot(colony: &Colony) -> ColonyState {
    let graph = colony.graph();
    let points: Vec<SerializedPoint> = graph
        .points()
        .map(|(id, p)| SerializedPoint {
            id,
            x: p.x(),
            y: p.y(),
        })
        .collect();
    let edges: Vec<SerializedEdge> = graph
        .edges()
        .map(|(id, e)| SerializedEdge {
            id,
            from: e.from(),
            to: e.to(),
            pheromone: e.pheromone(),
            bidirectional: e.is_bidirectional(),
        })
        .collect();

    ColonyState {
        version: SESSION_VERSION,
        metadata: SessionMetadata {
            session_id: colony.id().to_string(),
            generation: colony.generation(),
            point_count: points.len(),
            edge_count: edges.len(),
        },
        config: colony.config().clone(),
        start: colony.start(),
        points,
        edges,
        best: colony.best().cloned(),
    }
}

/// Save the colony to a JSON file, creating parent directories as needed.
pub fn save_session(colony: &Colony, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&snapshot(colony))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, json)?;
    Ok(())
}

/// Load a saved session from JSON.
pub fn load_session(path: &Path) -> Result<ColonyState> {
    if !path.exists() {
        return Err(SessionError::NotFound(path.display().to_string()).into());
    }
    let json = std::fs::read_to_string(path)?;
    let state: ColonyState = serde_json::from_str(&json)
        .map_err(|e| FormicaError::from(SessionError::Corrupt(e.to_string())))?;
    if state.version != SESSION_VERSION {
        return Err(SessionError::VersionMismatch {
            expected: SESSION_VERSION,
            found: state.version,
        }
        .into());
    }
    Ok(state)
}

/// Rebuild a colony from saved state.
///
/// Points and edges are re-added in their saved order so that every ID,
/// including those in the best tour, keeps its meaning.
pub fn restore_colony(state: &ColonyState) -> Result<Colony> {
    let corrupt = |msg: String| FormicaError::from(SessionError::Corrupt(msg));

    let mut graph = PetTrailGraph::new();
    for saved in &state.points {
        let id = graph.add_point(Point::new(saved.x, saved.y));
        if id != saved.id {
            return Err(corrupt(format!(
                "point {} restored as {}",
                saved.id.0, id.0
            )));
        }
    }
    for saved in &state.edges {
        let id = if saved.bidirectional {
            graph.connect(saved.from, saved.to, saved.pheromone)?
        } else {
            graph.connect_directed(saved.from, saved.to, saved.pheromone)?
        };
        if id != saved.id {
            return Err(corrupt(format!("edge {} restored as {}", saved.id.0, id.0)));
        }
    }

    let id = Uuid::parse_str(&state.metadata.session_id)
        .map_err(|e| corrupt(format!("session id: {e}")))?;

    Ok(Colony::new(graph, state.start, state.config.clone())?.resume(
        id,
        state.metadata.generation,
        state.best.clone(),
    ))
}
