//! # Block Side Module
//!
//! This module defines the different faces/sides of a voxel block.
//! It provides the direction offsets used for face culling and the flat
//! per-direction shading applied by the mesher.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// North is -Z, south is +Z, east is +X and west is -X, matching the lateral
/// neighbor naming used by chunks.
///
/// The order is: [TOP, BOTTOM, EAST, WEST, SOUTH, NORTH]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The top face (facing positive Y)
    TOP = 0,

    /// The bottom face (facing negative Y)
    BOTTOM = 1,

    /// The east face (facing positive X)
    EAST = 2,

    /// The west face (facing negative X)
    WEST = 3,

    /// The south face (facing positive Z)
    SOUTH = 4,

    /// The north face (facing negative Z)
    NORTH = 5,
}

impl BlockSide {
    /// Returns an array containing all six block faces in a consistent order.
    ///
    /// The order is: [TOP, BOTTOM, EAST, WEST, SOUTH, NORTH]
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::TOP,
            BlockSide::BOTTOM,
            BlockSide::EAST,
            BlockSide::WEST,
            BlockSide::SOUTH,
            BlockSide::NORTH,
        ]
    }

    /// The unit offset from a block to the block across this face.
    pub fn offset(self) -> Vector3<i32> {
        match self {
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::EAST => Vector3::new(1, 0, 0),
            BlockSide::WEST => Vector3::new(-1, 0, 0),
            BlockSide::SOUTH => Vector3::new(0, 0, 1),
            BlockSide::NORTH => Vector3::new(0, 0, -1),
        }
    }

    /// Flat brightness multiplier applied to the block color of this face.
    ///
    /// Top is brightest, bottom darkest, and the two lateral axes get
    /// distinct intermediate shades so edges stay readable without lighting.
    pub fn brightness(self) -> f32 {
        match self {
            BlockSide::TOP => 1.0,
            BlockSide::BOTTOM => 0.5,
            BlockSide::EAST | BlockSide::WEST => 0.8,
            BlockSide::SOUTH | BlockSide::NORTH => 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_unit_and_distinct() {
        let offsets: Vec<_> = BlockSide::all().iter().map(|s| s.offset()).collect();
        for (i, a) in offsets.iter().enumerate() {
            assert_eq!(a.x.abs() + a.y.abs() + a.z.abs(), 1);
            for b in offsets.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn top_is_brightest_and_bottom_darkest() {
        for side in BlockSide::all() {
            assert!(side.brightness() <= BlockSide::TOP.brightness());
            assert!(side.brightness() >= BlockSide::BOTTOM.brightness());
        }
    }
}
