//! Export the pheromone map.

use anyhow::{Context, Result};
use colored::Colorize;
use formica::prelude::*;
use serde::Serialize;
use std::path::Path;

use super::load_current;

#[derive(Serialize)]
struct ExportedMap {
    cities: Vec<ExportedCity>,
    edges: Vec<ExportedEdge>,
    best_tour: Option<ExportedTour>,
    metadata: ExportMetadata,
}

#[derive(Serialize)]
struct ExportedCity {
    id: u32,
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct ExportedEdge {
    source: u32,
    target: u32,
    length: f64,
    pheromone: f64,
    /// Pheromone relative to the strongest edge.
    strength: f64,
}

#[derive(Serialize)]
struct ExportedTour {
    cities: Vec<u32>,
    length: f64,
    generation: u64,
}

#[derive(Serialize)]
struct ExportMetadata {
    session_id: String,
    generation: u64,
    city_count: usize,
    edge_count: usize,
}

fn build_export(colony: &Colony, session_id: String) -> ExportedMap {
    let graph = colony.graph();
    let max = graph
        .edges()
        .map(|(_, e)| e.pheromone())
        .fold(0.0f64, f64::max);

    let cities: Vec<ExportedCity> = graph
        .points()
        .map(|(id, p)| ExportedCity {
            id: id.0,
            x: p.x(),
            y: p.y(),
        })
        .collect();

    let edges: Vec<ExportedEdge> = graph
        .edges()
        .map(|(_, e)| ExportedEdge {
            source: e.from().0,
            target: e.to().0,
            length: e.length(),
            pheromone: e.pheromone(),
            strength: if max > 0.0 { e.pheromone() / max } else { 0.0 },
        })
        .collect();

    let best_tour = colony.best().map(|b| ExportedTour {
        cities: b.points.iter().map(|p| p.0).collect(),
        length: b.length,
        generation: b.generation,
    });

    ExportedMap {
        metadata: ExportMetadata {
            session_id,
            generation: colony.generation(),
            city_count: cities.len(),
            edge_count: edges.len(),
        },
        cities,
        edges,
        best_tour,
    }
}

pub fn run(output: &str) -> Result<()> {
    println!("{} Loading session...", "→".blue());
    let state = load_current()?;
    let colony = restore_colony(&state)?;

    let export = build_export(&colony, state.metadata.session_id.clone());
    let json = serde_json::to_string_pretty(&export).context("Failed to serialize export")?;

    let path = Path::new(output);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{} Exported {} cities and {} edges to {}",
        "✓".green().bold(),
        export.metadata.city_count.to_string().cyan(),
        export.metadata.edge_count.to_string().cyan(),
        output
    );

    Ok(())
}
