//! # Engine Configuration
//!
//! Tunable constants for streaming, per-tick budgets, interaction and terrain.
//! Every field has a default, and a JSON file only needs to name the fields it
//! overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parameters of the terrain generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Horizontal frequency scale applied to world coordinates before sampling noise.
    pub scale: f64,
    pub octaves: usize,
    pub persistence: f64,
    pub lacunarity: f64,
    /// Height added per unit of noise.
    pub height_multiplier: f64,
    /// Height at noise value zero.
    pub base_height: f64,
    pub sea_level: i32,
    /// Surfaces above `sea_level + snow_offset` are covered in snow.
    pub snow_offset: i32,
    /// Chance that a stone cell becomes ore.
    pub ore_chance: f64,
    /// Chance that a grass column grows a tree.
    pub tree_chance: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        TerrainConfig {
            scale: 0.02,
            octaves: 6,
            persistence: 0.5,
            lacunarity: 2.0,
            height_multiplier: 40.0,
            base_height: 50.0,
            sea_level: 64,
            snow_offset: 30,
            ore_chance: 0.01,
            tree_chance: 0.02,
        }
    }
}

impl TerrainConfig {
    /// A constant height profile with no ores or trees, used to pin scenarios down.
    pub fn flat(height: i32) -> Self {
        TerrainConfig {
            height_multiplier: 0.0,
            base_height: height as f64,
            ore_chance: 0.0,
            tree_chance: 0.0,
            ..TerrainConfig::default()
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Chebyshev radius, in chunks, kept resident around the viewpoint.
    pub render_distance: i32,
    /// Extra chunks kept beyond the render distance before eviction.
    pub unload_margin: i32,
    /// Chunks generated per tick.
    pub generation_budget: usize,
    /// Chunks meshed per tick.
    pub mesh_budget: usize,
    /// Maximum raycast length for block interaction.
    pub reach_distance: f32,
    /// Ray marching step in blocks.
    pub raycast_step: f32,
    pub saves_dir: PathBuf,
    pub world_file: String,
    pub terrain: TerrainConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            render_distance: 8,
            unload_margin: 2,
            generation_budget: 2,
            mesh_budget: 4,
            reach_distance: 5.0,
            raycast_step: 0.1,
            saves_dir: PathBuf::from("saves"),
            world_file: String::from("world.dat"),
            terrain: TerrainConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Reads a JSON configuration file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    /// Full path of the default save file.
    pub fn world_path(&self) -> PathBuf {
        self.saves_dir.join(&self.world_file)
    }
}
