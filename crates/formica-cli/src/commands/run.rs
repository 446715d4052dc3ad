//! Run the colony simulation.

use anyhow::{Context, Result};
use colored::Colorize;
use formica::prelude::*;
use formica::runtime::baseline::MAX_BASELINE_POINTS;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::{load_current, points_from_start};
use crate::config::{current_session_path, Config};

pub struct RunArgs {
    pub generations: Option<u64>,
    pub report_every: Option<u64>,
    pub cities: Option<usize>,
    pub seed: Option<u64>,
    pub fresh: bool,
}

pub fn run(args: RunArgs, verbose: bool) -> Result<()> {
    let config = Config::load()?;
    let session_path = current_session_path()?;
    let generations = args.generations.unwrap_or(config.run.generations);
    let report_every = args.report_every.unwrap_or(config.run.report_every);

    let mut colony = if session_path.exists() && !args.fresh {
        println!("{} Loading session...", "→".blue());
        if args.cities.is_some() || args.seed.is_some() {
            println!(
                "  {} --cities and --seed only apply to a new session (use {})",
                "•".yellow(),
                "--fresh".cyan()
            );
        }
        restore_colony(&load_current()?).context("Failed to restore colony")?
    } else {
        new_colony(&config, &args)?
    };

    let stats = colony.stats();
    println!(
        "  {} cities, {} edges, generation {}",
        stats.points.to_string().cyan(),
        stats.edges.to_string().cyan(),
        stats.generation.to_string().cyan()
    );

    // Exhaustive search is only feasible for small instances
    let optimum = if stats.points <= MAX_BASELINE_POINTS {
        let baseline = min_max_length(&points_from_start(&colony))?;
        println!(
            "  Brute-force optimum: {}",
            format!("{:.3}", baseline.min).green()
        );
        Some(baseline.min)
    } else {
        None
    };

    println!(
        "{} Running {} generations...",
        "→".blue(),
        generations.to_string().cyan()
    );

    let pb = ProgressBar::new(generations);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} generations")?
            .progress_chars("#>-"),
    );

    for _ in 0..generations {
        let report = colony.run_generation()?;
        let due = report_every > 0 && (report.generation + 1) % report_every == 0;
        if due || verbose {
            pb.println(report_line(&summarize(&report, optimum)));
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");

    save_session(&colony, &session_path)
        .with_context(|| format!("Failed to save {}", session_path.display()))?;
    debug!(path = %session_path.display(), generation = colony.generation(), "session saved");

    println!();
    println!("{} Simulation complete!", "✓".green().bold());
    match colony.best() {
        Some(best) => {
            println!(
                "  Best length: {} (generation {})",
                format!("{:.3}", best.length).green(),
                best.generation
            );
            if let Some(opt) = optimum {
                println!("  Ratio to optimum: {:.4}", best.length / opt);
            }
            let order: Vec<String> = best.points.iter().map(|p| p.0.to_string()).collect();
            println!("  Order: {}", order.join(" → ").dimmed());
        }
        None => println!("  {} No complete tour found", "•".yellow()),
    }
    println!("  Session saved to {}", session_path.display());

    Ok(())
}

fn new_colony(config: &Config, args: &RunArgs) -> Result<Colony> {
    let mut colony_config = config.colony.clone();
    if let Some(seed) = args.seed {
        colony_config.seed = seed;
    }
    let count = args.cities.unwrap_or(config.cities.count);

    // Cities come from their own stream so they don't mirror the pheromone draws
    let mut rng = ChaCha8Rng::seed_from_u64(colony_config.seed);
    rng.set_stream(1);
    let cities = random_cities(count, config.cities.extent, &mut rng)?;
    println!(
        "{} Generated {} cities in a {}x{} square",
        "→".blue(),
        count.to_string().cyan(),
        config.cities.extent,
        config.cities.extent
    );

    ColonyBuilder::new()
        .with_points(cities)
        .with_initial_pheromone(config.cities.initial_pheromone)
        .with_config(colony_config)
        .build()
        .context("Failed to build colony")
}

fn report_line(summary: &GenerationSummary) -> String {
    let mut line = format!(
        "  gen {:>5}  mean {:>10.3}  best {:>10.3}  worst {:>10.3}",
        summary.generation, summary.mean_length, summary.best_length, summary.worst_length
    );
    if let Some(ratio) = summary.mean_ratio() {
        line.push_str(&format!("  ratio {:.4}", ratio));
    }
    if summary.stranded > 0 {
        line.push_str(&format!("  {}", format!("{} stranded", summary.stranded).yellow()));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(ratios: Vec<f64>, stranded: usize) -> GenerationSummary {
        GenerationSummary {
            generation: 9,
            tours: 2,
            stranded,
            mean_length: 12.5,
            best_length: 10.0,
            worst_length: 15.0,
            ratios,
        }
    }

    #[test]
    fn report_line_includes_ratio_when_optimum_known() {
        let line = report_line(&summary(vec![1.0, 1.5], 0));
        assert!(line.contains("gen     9"));
        assert!(line.contains("ratio 1.2500"));
        assert!(!line.contains("stranded"));
    }

    #[test]
    fn report_line_flags_stranded_ants() {
        let line = report_line(&summary(Vec::new(), 3));
        assert!(!line.contains("ratio"));
        assert!(line.contains("3 stranded"));
    }
}
