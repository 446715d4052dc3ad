//! Configuration management for the Formica CLI.

use anyhow::{Context, Result};
use formica::prelude::{ColonyConfig, InitialPheromone};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "formica.toml";

/// Formica project configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub colony: ColonyConfig,
    #[serde(default)]
    pub cities: CitiesConfig,
    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitiesConfig {
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_extent")]
    pub extent: u32,
    #[serde(default)]
    pub initial_pheromone: InitialPheromone,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_generations")]
    pub generations: u64,
    #[serde(default = "default_report_every")]
    pub report_every: u64,
}

// Default value functions
fn default_count() -> usize { 10 }
fn default_extent() -> u32 { 100 }
fn default_generations() -> u64 { 100 }
fn default_report_every() -> u64 { 10 }

impl Default for CitiesConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            extent: default_extent(),
            initial_pheromone: InitialPheromone::default(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            generations: default_generations(),
            report_every: default_report_every(),
        }
    }
}

impl Config {
    /// Load config from formica.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Find formica.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Get the Formica data directory (.formica/).
pub fn data_dir() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(".formica"))
}

/// Get the current session file path.
pub fn current_session_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("current.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use formica::prelude::SelectionPolicy;

    #[test]
    fn default_config_survives_a_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        Config::default().save(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.colony, ColonyConfig::default());
        assert_eq!(loaded.cities.count, 10);
        assert_eq!(loaded.cities.initial_pheromone, InitialPheromone::Uniform);
        assert_eq!(loaded.run.report_every, 10);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            "[colony]\nbeta = 2.0\nselection = \"weighted_sample\"\n\n[run]\ngenerations = 7\n",
        )
        .unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.colony.beta, 2.0);
        assert_eq!(config.colony.alpha, 1.0);
        assert_eq!(config.colony.selection, SelectionPolicy::WeightedSample);
        assert_eq!(config.run.generations, 7);
        assert_eq!(config.run.report_every, 10);
        assert_eq!(config.cities.extent, 100);
    }

    #[test]
    fn constant_pheromone_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            "[cities.initial_pheromone]\nkind = \"constant\"\nlevel = 0.5\n",
        )
        .unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.cities.initial_pheromone,
            InitialPheromone::Constant { level: 0.5 }
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[colony\nalpha = ").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
