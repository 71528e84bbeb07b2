//! `flock.toml` loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use flock_core::{Boundary, Bounds, FlockParams, SimConfig};

/// Every section is optional; missing keys fall back to the defaults of the
/// 10-agent, 20-tick, 5×5 torus scenario.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub sim:    SimConfig,
    pub params: FlockParams,
    pub world:  WorldConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub agents:   usize,
    pub width:    f64,
    pub height:   f64,
    pub boundary: Boundary,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    /// Log a tick summary at INFO every N ticks.
    pub log_every: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sim:    SimConfig::default(),
            params: FlockParams::default(),
            world:  WorldConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { agents: 10, width: 5.0, height: 5.0, boundary: Boundary::Toroidal }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("output/swarm"), log_every: 5 }
    }
}

impl WorldConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::from_size(self.width, self.height)
    }
}

impl DemoConfig {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("parsing flock config")
    }

    /// Load `path`, or fall back to the defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = Self::parse(&content)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
