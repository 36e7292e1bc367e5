//! # Chunk Iteration Module
//!
//! This module provides an iterator for traversing all non-air blocks in a chunk
//! together with their local positions.
//!
//! The iterator walks the flat storage in its native `[x][y][z]` order and decodes
//! the position from the index, so it touches each cell exactly once.

use cgmath::Point3;

use crate::engine_state::voxels::block::Block;

use super::{Chunk, CHUNK_HEIGHT, CHUNK_SIZE};

/// An iterator over all non-air blocks in a chunk.
///
/// Positions are chunk-local and always inside the chunk bounds.
pub struct ChunkBlockIterator<'a> {
    /// The chunk's block storage
    blocks: &'a [Block],
    /// Next storage index to inspect
    current_offset: usize,
}

impl<'a> ChunkBlockIterator<'a> {
    /// Creates a new `ChunkBlockIterator` positioned before the first cell.
    pub fn new(chunk_ref: &'a Chunk) -> Self {
        ChunkBlockIterator {
            blocks: chunk_ref.blocks(),
            current_offset: 0,
        }
    }

    fn position_of(offset: usize) -> Point3<i32> {
        let offset = offset as i32;
        let z = offset % CHUNK_SIZE;
        let y = (offset / CHUNK_SIZE) % CHUNK_HEIGHT;
        let x = offset / (CHUNK_SIZE * CHUNK_HEIGHT);
        Point3::new(x, y, z)
    }
}

impl Iterator for ChunkBlockIterator<'_> {
    type Item = (Point3<i32>, Block);

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_offset < self.blocks.len() {
            let offset = self.current_offset;
            self.current_offset += 1;

            let block = self.blocks[offset];
            if !block.is_air() {
                return Some((Self::position_of(offset), block));
            }
        }
        None
    }
}
