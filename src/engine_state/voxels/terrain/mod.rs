//! # Terrain Generation
//!
//! Fills chunks from a fractal Perlin height field.
//!
//! ## Column Layout
//!
//! From the bottom of each column upwards:
//! 1. Bedrock at y = 0
//! 2. Stone, with occasional ore, up to four cells below the surface
//! 3. Dirt up to the surface
//! 4. A surface cell chosen from the height relative to sea level
//! 5. Water from just above the surface through sea level, for sunken columns
//! 6. Sometimes a tree on grass
//!
//! Heights depend only on the seed and the world column. Ores and trees draw from a
//! random source keyed by seed and column, so regenerating a chunk reproduces it
//! exactly.

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::engine_state::config::TerrainConfig;

use super::{
    block::{block_type::BlockType, Block},
    chunk::{Chunk, CHUNK_HEIGHT, CHUNK_SIZE},
};

pub mod features;

/// Depth of the dirt band between stone and the surface.
const DIRT_DEPTH: i32 = 4;
/// Columns this close below sea level get a sand surface.
const BEACH_DEPTH: i32 = 3;

/// Produces terrain for chunks of one world.
pub struct TerrainGenerator {
    seed: u32,
    config: TerrainConfig,
    height_noise: Fbm<Perlin>,
}

impl TerrainGenerator {
    pub fn new(seed: u32, config: TerrainConfig) -> Self {
        let height_noise = Fbm::<Perlin>::new(seed)
            .set_octaves(config.octaves)
            .set_persistence(config.persistence)
            .set_lacunarity(config.lacunarity)
            .set_frequency(1.0);

        TerrainGenerator {
            seed,
            config,
            height_noise,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Surface height of world column (x, z), in `[1, CHUNK_HEIGHT - 1]`.
    pub fn height_at(&self, x: i32, z: i32) -> i32 {
        let sample = self
            .height_noise
            .get([x as f64 * self.config.scale, z as f64 * self.config.scale]);
        let height = (self.config.base_height + sample * self.config.height_multiplier) as i32;
        height.clamp(1, CHUNK_HEIGHT - 1)
    }

    /// Fills every column of `chunk` and marks it generated and dirty.
    ///
    /// Columns are produced x-major, z-minor.
    pub fn generate(&self, chunk: &mut Chunk) {
        for lx in 0..CHUNK_SIZE {
            for lz in 0..CHUNK_SIZE {
                let (wx, wz) = chunk.position.to_world(lx, lz);
                let height = self.height_at(wx, wz);
                let mut rng = features::column_rng(self.seed, wx, wz);
                self.generate_column(chunk, lx, lz, height, &mut rng);
            }
        }

        chunk.generated = true;
        chunk.dirty = true;
        log::debug!("Generated chunk {}", chunk.position);
    }

    fn generate_column(
        &self,
        chunk: &mut Chunk,
        lx: i32,
        lz: i32,
        height: i32,
        rng: &mut fastrand::Rng,
    ) {
        let sea_level = self.config.sea_level;
        let mut set = |y: i32, block_type: BlockType| {
            let _ = chunk.set_block(lx, y, lz, Block::new(block_type));
        };

        set(0, BlockType::BEDROCK);

        let stone_top = (height - DIRT_DEPTH).max(1);
        for y in 1..stone_top {
            if rng.f64() < self.config.ore_chance {
                set(y, features::ore_for_depth(y, rng));
            } else {
                set(y, BlockType::STONE);
            }
        }

        for y in stone_top..height {
            set(y, BlockType::DIRT);
        }

        let surface = if height >= sea_level {
            if height > sea_level + self.config.snow_offset {
                BlockType::SNOW
            } else {
                BlockType::GRASS
            }
        } else if height > sea_level - BEACH_DEPTH {
            for y in (height - 2).max(1)..height {
                set(y, BlockType::SAND);
            }
            BlockType::SAND
        } else {
            BlockType::DIRT
        };
        set(height, surface);

        if height < sea_level {
            for y in (height + 1)..=sea_level.min(CHUNK_HEIGHT - 1) {
                set(y, BlockType::WATER);
            }
        }

        if surface == BlockType::GRASS && rng.f64() < self.config.tree_chance {
            features::place_tree(chunk, lx, height + 1, lz);
        }
    }
}
