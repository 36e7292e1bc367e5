//! Rendering-side geometry for the voxel engine.
//!
//! This module turns chunk data into render-ready triangle lists. Drawing itself
//! belongs to the rendering collaborator, which receives finished meshes through
//! `MeshSink`.

pub mod meshing;
mod vertex;

// Re-export commonly used types
pub use meshing::{ChunkMesher, Face, Mesh, MeshSide};
pub use vertex::Vertex;

use crate::engine_state::voxels::chunk::ChunkCoord;

/// Receives chunk geometry from the engine tick.
///
/// Implemented by the rendering collaborator. The engine clears a chunk's dirty
/// flag only after `upload` reports success, so a refused upload is retried on a
/// later tick.
pub trait MeshSink {
    /// Takes the freshly built geometry of `coord`, replacing any previous mesh.
    ///
    /// # Returns
    /// `true` if the mesh was accepted.
    fn upload(&mut self, coord: ChunkCoord, mesh: Mesh) -> bool;

    /// Drops the geometry of an evicted chunk.
    fn release(&mut self, coord: ChunkCoord);
}
