use cgmath::{Point3, Vector3};

use crate::engine_state::{rendering::Vertex, voxels::block::block_side::BlockSide};

/// Corner offsets of the two triangles of each face, relative to the block's
/// minimum corner, indexed by `BlockSide`.
const FACE_TRIANGLES: [[[i32; 3]; 6]; 6] = [
    // TOP
    [[0, 1, 0], [1, 1, 0], [1, 1, 1], [0, 1, 0], [1, 1, 1], [0, 1, 1]],
    // BOTTOM
    [[0, 0, 0], [1, 0, 1], [1, 0, 0], [0, 0, 0], [0, 0, 1], [1, 0, 1]],
    // EAST
    [[1, 0, 0], [1, 1, 0], [1, 1, 1], [1, 0, 0], [1, 1, 1], [1, 0, 1]],
    // WEST
    [[0, 0, 0], [0, 1, 1], [0, 1, 0], [0, 0, 0], [0, 0, 1], [0, 1, 1]],
    // SOUTH
    [[0, 0, 1], [1, 1, 1], [1, 0, 1], [0, 0, 1], [0, 1, 1], [1, 1, 1]],
    // NORTH
    [[0, 0, 0], [1, 0, 0], [1, 1, 0], [0, 0, 0], [1, 1, 0], [0, 1, 0]],
];

/// Represents a single visible face of one voxel.
///
/// A face is emitted as two triangles sharing a diagonal. Its color is the block's
/// base color multiplied by the flat brightness of `block_side`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Minimum corner of the block in world coordinates
    pub origin: Point3<i32>,
    /// Which side of the block this face represents
    pub block_side: BlockSide,
    /// Shaded RGB color shared by all six vertices
    pub color: [f32; 3],
}

impl Face {
    /// Creates a new face for the block whose minimum corner is `origin`.
    ///
    /// # Arguments
    /// * `origin` - World coordinates of the block
    /// * `base_color` - Unshaded block color from the registry
    /// * `block_side` - Which side of the block this face represents
    pub fn new(origin: Point3<i32>, base_color: [f32; 3], block_side: BlockSide) -> Self {
        let brightness = block_side.brightness();
        Face {
            origin,
            block_side,
            color: base_color.map(|channel| channel * brightness),
        }
    }

    /// The six vertices of the face's two triangles.
    pub fn vertices(&self) -> [Vertex; 6] {
        FACE_TRIANGLES[self.block_side as usize].map(|[dx, dy, dz]| {
            Vertex::new(self.origin + Vector3::new(dx, dy, dz), self.color)
        })
    }
}
