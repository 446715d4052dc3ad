//! Show colony statistics.

use anyhow::Result;
use colored::Colorize;
use formica::prelude::*;

use super::load_current;

pub fn run() -> Result<()> {
    let state = load_current()?;
    let colony = restore_colony(&state)?;

    let stats = colony.stats();
    let pheromone = pheromone_stats(&colony);
    let config = colony.config();

    println!("{}", "Formica Colony Statistics".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    println!("{}", "Session".blue().bold());
    println!("  Id:                {}", state.metadata.session_id.dimmed());
    println!("  Generations run:   {}", stats.generation.to_string().cyan());
    println!();

    println!("{}", "Graph Structure".blue().bold());
    println!("  Cities:            {}", stats.points.to_string().cyan());
    println!("  Edges:             {}", stats.edges.to_string().cyan());
    println!("  Start city:        {}", colony.start().0.to_string().cyan());
    println!();

    println!("{}", "Parameters".blue().bold());
    println!("  alpha / beta:      {} / {}", config.alpha, config.beta);
    println!("  Retention:         {}", config.retention);
    println!("  Deposit (Q):       {}", config.deposit);
    println!("  Population:        {}", config.population);
    println!("  Selection:         {:?}", config.selection);
    println!();

    println!("{}", "Pheromone".blue().bold());
    println!("  Total:             {:.4}", pheromone.total);
    println!("  Min / max:         {:.4} / {:.4}", pheromone.min, pheromone.max);
    println!("  Mean per edge:     {:.4}", pheromone.mean);
    println!(
        "  On best tour:      {}",
        format!("{:.1}%", pheromone.best_tour_share * 100.0).green()
    );
    println!();

    println!("{}", "Best Tour".blue().bold());
    match colony.best() {
        Some(best) => {
            println!("  Length:            {}", format!("{:.3}", best.length).green());
            println!("  Found in gen:      {}", best.generation);
        }
        None => println!("  {}", "none yet".yellow()),
    }

    println!();
    println!("{}", "═".repeat(40).dimmed());

    Ok(())
}
