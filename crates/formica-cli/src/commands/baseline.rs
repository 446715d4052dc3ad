//! Brute-force baseline for the current session.

use anyhow::{bail, Result};
use colored::Colorize;
use formica::prelude::*;
use formica::runtime::baseline::MAX_BASELINE_POINTS;

use super::{load_current, points_from_start};

pub fn run() -> Result<()> {
    let colony = restore_colony(&load_current()?)?;
    let points = points_from_start(&colony);

    if points.len() > MAX_BASELINE_POINTS {
        bail!(
            "{} cities is too many for exhaustive search (limit {})",
            points.len(),
            MAX_BASELINE_POINTS
        );
    }

    println!(
        "{} Trying every ordering of {} cities...",
        "→".blue(),
        points.len().to_string().cyan()
    );
    let baseline = min_max_length(&points)?;

    // Indices in the baseline are positions in `points`; map them back to IDs
    let ids: Vec<u32> = {
        let mut ids: Vec<u32> = (0..points.len() as u32).collect();
        ids.swap(0, colony.start().index());
        baseline.shortest.iter().map(|&i| ids[i]).collect()
    };

    println!();
    println!("  Shortest: {}", format!("{:.3}", baseline.min).green());
    println!("  Longest:  {}", format!("{:.3}", baseline.max).yellow());
    println!(
        "  Order:    {}",
        ids.iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(" → ")
            .dimmed()
    );

    if let Some(best) = colony.best().filter(|_| baseline.min > 0.0) {
        println!();
        println!(
            "  Colony best: {:.3} (ratio {:.4})",
            best.length,
            best.length / baseline.min
        );
    }

    Ok(())
}
