//! Mesh data structures for chunk geometry.
//!
//! A mesh keeps the triangles of each block side in its own buffer so that the
//! rendering collaborator can skip whole sides that face away from the camera.

use crate::engine_state::rendering::Vertex;
use crate::engine_state::voxels::block::block_side::BlockSide;

use super::face::Face;

/// The triangles of one block side.
#[derive(Debug, Clone)]
pub struct MeshSide {
    /// Six vertices per face, two triangles each
    pub vertices: Vec<Vertex>,
    /// Which block side this mesh represents
    pub side: BlockSide,
}

impl MeshSide {
    /// Creates a new, empty `MeshSide` for the specified block side.
    pub fn new(side: BlockSide) -> Self {
        MeshSide {
            vertices: Vec::new(),
            side,
        }
    }

    pub fn face_count(&self) -> usize {
        self.vertices.len() / 6
    }
}

/// Represents the complete geometry of one chunk.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Array of mesh sides, indexed by `BlockSide` enum values.
    /// The order matches the `BlockSide` enum variant order.
    pub mesh: [MeshSide; 6],
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates a new, empty mesh with all sides initialized.
    pub fn new() -> Self {
        Mesh {
            mesh: BlockSide::all().map(MeshSide::new),
        }
    }

    /// Appends the two triangles of `face` to the buffer of its side.
    pub fn add_face(&mut self, face: &Face) {
        self.mesh[face.block_side as usize]
            .vertices
            .extend_from_slice(&face.vertices());
    }

    pub fn face_count(&self) -> usize {
        self.mesh.iter().map(MeshSide::face_count).sum()
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.iter().map(|side| side.vertices.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// The vertices of one side.
    pub fn side(&self, side: BlockSide) -> &[Vertex] {
        &self.mesh[side as usize].vertices
    }

    /// All vertices, side by side in `BlockSide` order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.mesh.iter().flat_map(|side| side.vertices.iter())
    }

    /// One contiguous triangle list, ready to be uploaded as raw bytes with
    /// `bytemuck::cast_slice`.
    pub fn to_triangle_list(&self) -> Vec<Vertex> {
        self.vertices().copied().collect()
    }
}
