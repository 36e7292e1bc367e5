//! # Chunk Module
//!
//! This module provides the `Chunk` struct and related functionality for managing
//! 16x256x16 columns of voxel data.
//!
//! ## Storage
//!
//! Blocks are kept in one flat array in `[x][y][z]` row-major order, which is also
//! the byte layout written to save files. Out-of-range local access never fails:
//! reads return air and writes are ignored.
//!
//! ## Neighbors
//!
//! A chunk records up to four lateral neighbors by coordinate only. The chunks
//! themselves are owned by the world's store, which resolves the coordinates and
//! keeps both sides of every link consistent.

use cgmath::Point3;

use super::block::Block;

pub mod chunk_coord;
pub mod chunk_iteration;

pub use chunk_coord::{world_to_local, ChunkCoord, ChunkNeighbor};
use chunk_iteration::ChunkBlockIterator;

/// The horizontal dimension (width and depth) of a chunk in blocks.
pub const CHUNK_SIZE: i32 = 16;
/// The vertical dimension of a chunk, and of the world, in blocks.
pub const CHUNK_HEIGHT: i32 = 256;
/// The total number of blocks in a chunk.
pub const CHUNK_VOLUME: usize = (CHUNK_SIZE * CHUNK_HEIGHT * CHUNK_SIZE) as usize;
/// Array dimensions as persisted: `[x, y, z]`.
pub const CHUNK_SHAPE: [usize; 3] = [
    CHUNK_SIZE as usize,
    CHUNK_HEIGHT as usize,
    CHUNK_SIZE as usize,
];

/// Outcome of a `Chunk::set_block` call.
///
/// The chunk cannot reach its neighbors, so it reports which linked neighbors
/// share the edited face and the world marks them dirty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockEdit {
    /// Whether the stored value changed.
    pub changed: bool,
    /// Linked neighbors touching the edited cell, at most one per horizontal axis.
    pub dirty_neighbors: [Option<ChunkCoord>; 2],
}

impl BlockEdit {
    pub fn neighbors(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.dirty_neighbors.iter().flatten().copied()
    }
}

/// A fixed-size column of voxel blocks with its lifecycle flags.
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not block coordinates).
    pub position: ChunkCoord,

    blocks: Box<[Block]>,

    /// Terrain has been produced (or loaded) for this chunk.
    pub generated: bool,

    /// Geometry must be rebuilt.
    pub dirty: bool,

    neighbors: [Option<ChunkCoord>; 4],
}

impl Chunk {
    /// Creates a new, completely empty chunk: all air, ungenerated, dirty and unlinked.
    pub fn new(position: ChunkCoord) -> Self {
        Chunk {
            position,
            blocks: vec![Block::AIR; CHUNK_VOLUME].into_boxed_slice(),
            generated: false,
            dirty: true,
            neighbors: [None; 4],
        }
    }

    /// Rebuilds a chunk from raw voxel bytes in persisted order.
    ///
    /// # Returns
    /// `None` if `bytes` does not hold exactly one chunk worth of voxels.
    pub fn from_bytes(position: ChunkCoord, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != CHUNK_VOLUME {
            return None;
        }
        let mut chunk = Chunk::new(position);
        chunk
            .blocks
            .copy_from_slice(bytemuck::cast_slice::<u8, Block>(bytes));
        Some(chunk)
    }

    /// The raw voxel bytes in persisted order.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.blocks)
    }

    /// World coordinates of local (0, 0, 0).
    pub fn world_origin(&self) -> Point3<i32> {
        let (x, z) = self.position.to_world(0, 0);
        Point3::new(x, 0, z)
    }

    /// Whether this chunk is waiting for the mesher.
    pub fn needs_mesh(&self) -> bool {
        self.generated && self.dirty
    }

    #[inline]
    fn index(lx: i32, ly: i32, lz: i32) -> Option<usize> {
        if (0..CHUNK_SIZE).contains(&lx)
            && (0..CHUNK_HEIGHT).contains(&ly)
            && (0..CHUNK_SIZE).contains(&lz)
        {
            Some(((lx * CHUNK_HEIGHT + ly) * CHUNK_SIZE + lz) as usize)
        } else {
            None
        }
    }

    /// Gets the block at the specified chunk-relative coordinates.
    ///
    /// Returns air for any coordinate outside the chunk.
    pub fn get_block(&self, lx: i32, ly: i32, lz: i32) -> Block {
        Self::index(lx, ly, lz)
            .map(|i| self.blocks[i])
            .unwrap_or(Block::AIR)
    }

    /// Sets the block at the specified chunk-relative coordinates.
    ///
    /// Out-of-range coordinates and unchanged values are no-ops. Otherwise the
    /// chunk is marked dirty and any linked neighbor sharing a face with the
    /// cell is reported in the returned `BlockEdit`.
    pub fn set_block(&mut self, lx: i32, ly: i32, lz: i32, block: Block) -> BlockEdit {
        let Some(i) = Self::index(lx, ly, lz) else {
            return BlockEdit::default();
        };
        if self.blocks[i] == block {
            return BlockEdit::default();
        }

        self.blocks[i] = block;
        self.dirty = true;

        let x_neighbor = match lx {
            0 => self.neighbor(ChunkNeighbor::WEST),
            x if x == CHUNK_SIZE - 1 => self.neighbor(ChunkNeighbor::EAST),
            _ => None,
        };
        let z_neighbor = match lz {
            0 => self.neighbor(ChunkNeighbor::NORTH),
            z if z == CHUNK_SIZE - 1 => self.neighbor(ChunkNeighbor::SOUTH),
            _ => None,
        };

        BlockEdit {
            changed: true,
            dirty_neighbors: [x_neighbor, z_neighbor],
        }
    }

    /// The linked neighbor in the given direction, if any.
    pub fn neighbor(&self, direction: ChunkNeighbor) -> Option<ChunkCoord> {
        self.neighbors[direction as usize]
    }

    /// Records one side of a neighbor link. The world sets the reciprocal side.
    pub(crate) fn set_neighbor(&mut self, direction: ChunkNeighbor, coord: Option<ChunkCoord>) {
        self.neighbors[direction as usize] = coord;
    }

    /// Drops every link and returns the coordinates that were linked.
    pub(crate) fn take_neighbors(&mut self) -> [Option<ChunkCoord>; 4] {
        std::mem::take(&mut self.neighbors)
    }

    /// Iterates over every non-air block with its local position.
    pub fn iter_blocks(&self) -> ChunkBlockIterator<'_> {
        ChunkBlockIterator::new(self)
    }

    pub(crate) fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

/// The resolved lateral neighbors of one chunk, borrowed from the world's store.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChunkNeighbors<'a> {
    chunks: [Option<&'a Chunk>; 4],
}

impl<'a> ChunkNeighbors<'a> {
    /// No neighbors: every seam reads as air.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(
        north: Option<&'a Chunk>,
        south: Option<&'a Chunk>,
        east: Option<&'a Chunk>,
        west: Option<&'a Chunk>,
    ) -> Self {
        ChunkNeighbors {
            chunks: [north, south, east, west],
        }
    }

    pub fn get(&self, direction: ChunkNeighbor) -> Option<&'a Chunk> {
        self.chunks[direction as usize]
    }

    /// Reads a block addressed relative to the centre chunk, following the seam
    /// into a generated neighbor when the coordinate leaves the chunk by one step
    /// along a single horizontal axis. Anything else outside the chunk is air.
    pub fn block_across(&self, center: &Chunk, lx: i32, ly: i32, lz: i32) -> Block {
        if !(0..CHUNK_HEIGHT).contains(&ly) {
            return Block::AIR;
        }
        let inside_x = (0..CHUNK_SIZE).contains(&lx);
        let inside_z = (0..CHUNK_SIZE).contains(&lz);

        let (direction, nx, nz) = match (inside_x, inside_z) {
            (true, true) => return center.get_block(lx, ly, lz),
            (false, true) if lx == -1 => (ChunkNeighbor::WEST, CHUNK_SIZE - 1, lz),
            (false, true) if lx == CHUNK_SIZE => (ChunkNeighbor::EAST, 0, lz),
            (true, false) if lz == -1 => (ChunkNeighbor::NORTH, lx, CHUNK_SIZE - 1),
            (true, false) if lz == CHUNK_SIZE => (ChunkNeighbor::SOUTH, lx, 0),
            _ => return Block::AIR,
        };

        match self.get(direction) {
            Some(neighbor) if neighbor.generated => neighbor.get_block(nx, ly, nz),
            _ => Block::AIR,
        }
    }
}

impl std::fmt::Debug for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chunk")
            .field("position", &self.position)
            .field("generated", &self.generated)
            .field("dirty", &self.dirty)
            .field("neighbors", &self.neighbors)
            .finish()
    }
}
