//! CLI command implementations.

pub mod init;
pub mod run;
pub mod baseline;
pub mod stats;
pub mod export;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use formica::prelude::*;

use crate::config::current_session_path;

/// Load the current session, or explain how to create one.
pub(crate) fn load_current() -> Result<ColonyState> {
    let session_path = current_session_path()?;

    if !session_path.exists() {
        bail!("No session found. Run {} first.", "formica run".cyan());
    }

    load_session(&session_path)
        .with_context(|| format!("Failed to load {}", session_path.display()))
}

/// The colony's points with the start point first, as the baseline expects.
pub(crate) fn points_from_start(colony: &Colony) -> Vec<Point> {
    let mut points: Vec<Point> = colony.graph().points().map(|(_, p)| *p).collect();
    points.swap(0, colony.start().index());
    points
}
