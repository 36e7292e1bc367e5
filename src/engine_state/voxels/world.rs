//! # World Module
//!
//! This module provides the `World` struct which manages the resident chunks of the
//! voxel world. It serves as the central coordinator for chunk creation, generation,
//! eviction and block access.
//!
//! ## Architecture
//!
//! The world uses a sparse storage approach where only chunks near the viewpoint,
//! or explicitly referenced by an edit, are kept in memory. Chunks are owned by a
//! single hash map keyed by `ChunkCoord`; neighbor links are coordinates resolved
//! against that map, so removing a chunk can never leave a dangling reference.
//!
//! ## Chunk Lifecycle
//!
//! 1. Created on first reference (ungenerated, dirty, unlinked) and queued for generation
//! 2. Generated by `process_generation_budget`, then linked to resident neighbors
//! 3. Edited through `set_block` at any time after generation
//! 4. Evicted once outside the retention radius; links are cleared and any pending
//!    generation is cancelled
//!
//! ## Performance Considerations
//!
//! - Chunk lookup is O(1) using a hash map
//! - Generation work is bounded per call by an explicit budget

use std::collections::HashMap;

use crate::engine_state::{
    config::{EngineConfig, TerrainConfig},
    task_management::GenerationQueue,
};

use super::{
    block::Block,
    chunk::{world_to_local, Chunk, ChunkCoord, ChunkNeighbor, ChunkNeighbors, CHUNK_HEIGHT},
    terrain::TerrainGenerator,
};

/// Chunks created and evicted by one streaming update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamingUpdate {
    pub created: Vec<ChunkCoord>,
    pub evicted: Vec<ChunkCoord>,
}

/// Represents a voxel world composed of resident chunks.
///
/// # Examples
///
/// ```
/// use voxel_world::{Block, BlockType, EngineConfig, World};
///
/// let config = EngineConfig { render_distance: 0, ..EngineConfig::default() };
/// let mut world = World::from_config(42, &config);
/// world.update_streaming(0.0, 0.0);
/// world.process_generation_budget(usize::MAX);
/// assert!(world.set_block(3, 120, 3, Block::new(BlockType::BRICK)));
/// assert_eq!(world.get_block(3, 120, 3), Block::new(BlockType::BRICK));
/// ```
pub struct World {
    /// A mapping from chunk coordinates to chunk data.
    chunks: HashMap<ChunkCoord, Chunk>,
    /// Chunks waiting for terrain, oldest first.
    generation_queue: GenerationQueue,
    terrain: TerrainGenerator,
    render_distance: i32,
    unload_margin: i32,
}

impl World {
    /// Creates a new, empty world with default configuration.
    pub fn new(seed: u32) -> Self {
        Self::from_config(seed, &EngineConfig::default())
    }

    /// Creates a new, empty world using the streaming and terrain settings of `config`.
    pub fn from_config(seed: u32, config: &EngineConfig) -> Self {
        World {
            chunks: HashMap::new(),
            generation_queue: GenerationQueue::new(),
            terrain: TerrainGenerator::new(seed, config.terrain.clone()),
            render_distance: config.render_distance.max(0),
            unload_margin: config.unload_margin.max(0),
        }
    }

    pub fn seed(&self) -> u32 {
        self.terrain.seed()
    }

    pub fn terrain(&self) -> &TerrainGenerator {
        &self.terrain
    }

    pub fn render_distance(&self) -> i32 {
        self.render_distance
    }

    /// Number of chunks currently held.
    pub fn resident_chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Number of chunks waiting for terrain.
    pub fn pending_generation_count(&self) -> usize {
        self.generation_queue.len()
    }

    pub fn is_generation_pending(&self, coord: ChunkCoord) -> bool {
        self.generation_queue.contains(&coord)
    }

    /// Retrieves the resident chunk at `coord`.
    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    /// Iterates over every resident chunk in no particular order.
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    /// Returns the resident chunk at `coord`, creating and queueing it if absent.
    pub fn get_or_create_chunk(&mut self, coord: ChunkCoord) -> &mut Chunk {
        let queue = &mut self.generation_queue;
        self.chunks.entry(coord).or_insert_with(|| {
            queue.push(coord);
            log::debug!("Created chunk {}", coord);
            Chunk::new(coord)
        })
    }

    /// Gets the block at world coordinates.
    ///
    /// Heights outside the world, non-resident chunks and ungenerated chunks read as air.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> Block {
        if !(0..CHUNK_HEIGHT).contains(&y) {
            return Block::AIR;
        }
        let (coord, lx, lz) = world_to_local(x, z);
        match self.chunks.get(&coord) {
            Some(chunk) if chunk.generated => chunk.get_block(lx, y, lz),
            _ => Block::AIR,
        }
    }

    /// Block-solidity query used for collision.
    pub fn is_solid_at(&self, x: i32, y: i32, z: i32) -> bool {
        self.get_block(x, y, z).info().is_solid
    }

    /// Sets the block at world coordinates.
    ///
    /// The containing chunk is created if needed. Edits on a chunk border also mark
    /// the linked neighbor across that border dirty.
    ///
    /// # Returns
    /// `false` if `y` is outside the world or the chunk has not been generated yet.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: Block) -> bool {
        if !(0..CHUNK_HEIGHT).contains(&y) {
            return false;
        }
        let (coord, lx, lz) = world_to_local(x, z);
        let chunk = self.get_or_create_chunk(coord);
        if !chunk.generated {
            return false;
        }

        let edit = chunk.set_block(lx, y, lz, block);
        for neighbor in edit.neighbors() {
            if let Some(neighbor) = self.chunks.get_mut(&neighbor) {
                neighbor.dirty = true;
            }
        }
        true
    }

    /// Makes every chunk within the render distance of the viewpoint's chunk resident
    /// and evicts chunks beyond the render distance plus the unload margin.
    pub fn update_streaming(&mut self, viewpoint_x: f32, viewpoint_z: f32) -> StreamingUpdate {
        let center = ChunkCoord::containing_point(viewpoint_x, viewpoint_z);
        let radius = self.render_distance;
        let mut update = StreamingUpdate::default();

        for dx in -radius..=radius {
            for dz in -radius..=radius {
                let coord = center.offset(dx, dz);
                if !self.chunks.contains_key(&coord) {
                    self.get_or_create_chunk(coord);
                    update.created.push(coord);
                }
            }
        }

        let retention = radius + self.unload_margin;
        update.evicted = self
            .chunks
            .keys()
            .filter(|coord| coord.chebyshev_distance(center) > retention)
            .copied()
            .collect();
        for coord in &update.evicted {
            self.evict(*coord);
        }

        if !update.created.is_empty() || !update.evicted.is_empty() {
            log::debug!(
                "Streaming around {}: {} created, {} evicted, {} resident",
                center,
                update.created.len(),
                update.evicted.len(),
                self.chunks.len()
            );
        }
        update
    }

    /// Removes a chunk, clearing every link that points at it and cancelling its
    /// pending generation.
    ///
    /// # Returns
    /// `false` if the chunk was not resident.
    pub fn evict(&mut self, coord: ChunkCoord) -> bool {
        if !self.chunks.contains_key(&coord) {
            return false;
        }

        for direction in ChunkNeighbor::all() {
            if let Some(neighbor) = self.chunks.get_mut(&direction.of(coord)) {
                if neighbor.neighbor(direction.opposite()) == Some(coord) {
                    neighbor.set_neighbor(direction.opposite(), None);
                }
            }
        }
        if let Some(chunk) = self.chunks.get_mut(&coord) {
            chunk.take_neighbors();
        }

        self.generation_queue.cancel(&coord);
        self.chunks.remove(&coord);
        log::debug!("Evicted chunk {}", coord);
        true
    }

    /// Generates up to `budget` queued chunks in FIFO order and links each one to
    /// its resident neighbors.
    ///
    /// # Returns
    /// The number of chunks generated.
    pub fn process_generation_budget(&mut self, budget: usize) -> usize {
        let chunks = &mut self.chunks;
        let terrain = &self.terrain;
        let mut generated = Vec::new();

        self.generation_queue
            .drain_budget(budget, |coord| match chunks.get_mut(&coord) {
                Some(chunk) if !chunk.generated => {
                    terrain.generate(chunk);
                    generated.push(coord);
                    true
                }
                _ => false,
            });

        for coord in &generated {
            self.link_neighbors(*coord);
        }
        generated.len()
    }

    /// Links `coord` with each resident lateral neighbor, on both sides.
    ///
    /// Generated neighbors are marked dirty so their seam faces get re-culled.
    fn link_neighbors(&mut self, coord: ChunkCoord) {
        for direction in ChunkNeighbor::all() {
            let other = direction.of(coord);
            let linked = match self.chunks.get_mut(&other) {
                Some(neighbor) => {
                    neighbor.set_neighbor(direction.opposite(), Some(coord));
                    if neighbor.generated {
                        neighbor.dirty = true;
                    }
                    Some(other)
                }
                None => None,
            };
            if let Some(chunk) = self.chunks.get_mut(&coord) {
                chunk.set_neighbor(direction, linked);
            }
        }
    }

    /// Resolves the linked neighbors of `coord` for the mesher.
    pub fn neighbors_of(&self, coord: ChunkCoord) -> ChunkNeighbors<'_> {
        let resolve = |direction| {
            self.chunks
                .get(&coord)
                .and_then(|chunk| chunk.neighbor(direction))
                .and_then(|linked| self.chunks.get(&linked))
        };
        ChunkNeighbors::new(
            resolve(ChunkNeighbor::NORTH),
            resolve(ChunkNeighbor::SOUTH),
            resolve(ChunkNeighbor::EAST),
            resolve(ChunkNeighbor::WEST),
        )
    }

    /// All resident chunks that are generated and dirty.
    pub fn dirty_generated_chunks(&self) -> Vec<ChunkCoord> {
        self.chunks
            .values()
            .filter(|chunk| chunk.needs_mesh())
            .map(|chunk| chunk.position)
            .collect()
    }

    /// Clears the dirty flag after the chunk's geometry was rebuilt.
    pub fn mark_clean(&mut self, coord: ChunkCoord) {
        if let Some(chunk) = self.chunks.get_mut(&coord) {
            chunk.dirty = false;
        }
    }

    /// Swaps in a complete set of generated chunks and a new seed, dropping all
    /// pending generation and relinking every chunk.
    pub(crate) fn replace_contents(&mut self, seed: u32, chunks: Vec<Chunk>) {
        let terrain_config: TerrainConfig = self.terrain.config().clone();
        self.terrain = TerrainGenerator::new(seed, terrain_config);
        self.generation_queue.clear();
        self.chunks = chunks
            .into_iter()
            .map(|mut chunk| {
                chunk.generated = true;
                chunk.dirty = true;
                (chunk.position, chunk)
            })
            .collect();

        let coords: Vec<ChunkCoord> = self.chunks.keys().copied().collect();
        for coord in coords {
            self.link_neighbors(coord);
        }
    }
}
