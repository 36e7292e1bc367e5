//! Mesh generation for voxel rendering.
//!
//! This module converts chunk voxel data into triangle lists. Each visible face
//! becomes two triangles with a flat, per-direction shade of the block color.
//!
//! # Face Visibility
//! A face is emitted when the voxel across it is air or transparent. Lookups that
//! leave the chunk sideways go through the linked neighbor chunk; a missing or
//! ungenerated neighbor, and anything above or below the world, counts as air.
//!
//! # Architecture
//! - `ChunkMesher`: Builds the mesh of one chunk
//! - `mesh/`: The `Mesh` and `Face` data structures
//!
//! # Performance Considerations
//! - Only non-air cells are visited
//! - No face merging; the output is one quad per visible face

use cgmath::Point3;

use crate::engine_state::voxels::{
    block::{block_side::BlockSide, block_type::BlockType},
    chunk::{Chunk, ChunkNeighbors},
};

mod mesh;

pub use mesh::*;

/// Builds chunk geometry. Stateless; every call is a pure function of its inputs.
pub struct ChunkMesher;

impl ChunkMesher {
    /// Generates the mesh of `chunk`, culling faces against its own voxels and
    /// against `neighbors` at the chunk seams.
    ///
    /// # Arguments
    /// * `chunk` - The chunk to mesh
    /// * `neighbors` - The chunk's resolved lateral neighbors
    ///
    /// # Returns
    /// A `Mesh` with vertex positions in world space.
    pub fn build(chunk: &Chunk, neighbors: &ChunkNeighbors<'_>) -> Mesh {
        let mut mesh = Mesh::new();
        let origin = chunk.world_origin();

        for (local, block) in chunk.iter_blocks() {
            let info = block.info();
            if info.block_type == BlockType::AIR {
                continue;
            }

            for side in BlockSide::all() {
                let across = local + side.offset();
                let neighbor = neighbors.block_across(chunk, across.x, across.y, across.z);
                if !neighbor.info().is_transparent {
                    continue;
                }

                let world = Point3::new(origin.x + local.x, local.y, origin.z + local.z);
                mesh.add_face(&Face::new(world, info.color, side));
            }
        }

        log::debug!(
            "Meshed chunk {}: {} faces",
            chunk.position,
            mesh.face_count()
        );
        mesh
    }
}
