//! Configuration loading for the marga-nav CLI.

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure.
///
/// Loaded from a TOML file; every field has a default so a partial (or
/// absent) file works. CLI flags override whatever was loaded.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MargaConfig {
    #[serde(default)]
    pub search: SearchSection,

    #[serde(default)]
    pub output: OutputSection,
}

/// Search engine settings.
#[derive(Clone, Debug, Deserialize)]
pub struct SearchSection {
    /// Which engine(s) to run (default: both).
    #[serde(default = "default_engine")]
    pub engine: Engine,

    /// Starting heuristic weight for the dynamic weighting engine
    /// (default: 3.0).
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            epsilon: default_epsilon(),
        }
    }
}

/// Output settings.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputSection {
    /// Print an ASCII rendering of the board with the path overlaid.
    #[serde(default)]
    pub show_grid: bool,
}

/// Engine selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Engine {
    /// Adaptive beam search (soft obstacles).
    Beam,
    /// Dynamic weighting search (hard obstacles).
    Weighted,
    /// Run both engines and report each result.
    Both,
}

fn default_engine() -> Engine {
    Engine::Both
}

fn default_epsilon() -> f64 {
    3.0
}

impl MargaConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
