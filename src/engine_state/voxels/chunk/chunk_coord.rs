//! Chunk coordinates and the world ↔ chunk/local mapping.

use std::fmt;

use super::CHUNK_SIZE;

/// Integer coordinates of a chunk column on the horizontal grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cz: i32) -> Self {
        Self { cx, cz }
    }

    /// The chunk containing world column (x, z).
    #[inline]
    pub fn containing(x: i32, z: i32) -> Self {
        Self {
            cx: x.div_euclid(CHUNK_SIZE),
            cz: z.div_euclid(CHUNK_SIZE),
        }
    }

    /// The chunk containing a floating point world position.
    #[inline]
    pub fn containing_point(x: f32, z: f32) -> Self {
        Self::containing(x.floor() as i32, z.floor() as i32)
    }

    #[inline]
    pub fn offset(self, dx: i32, dz: i32) -> Self {
        Self {
            cx: self.cx + dx,
            cz: self.cz + dz,
        }
    }

    /// Chebyshev distance in chunks.
    #[inline]
    pub fn chebyshev_distance(self, other: ChunkCoord) -> i32 {
        (self.cx - other.cx).abs().max((self.cz - other.cz).abs())
    }

    /// World coordinates of a local column inside this chunk.
    #[inline]
    pub fn to_world(self, lx: i32, lz: i32) -> (i32, i32) {
        (self.cx * CHUNK_SIZE + lx, self.cz * CHUNK_SIZE + lz)
    }

    /// Text key used by the save format, `"cx,cz"`.
    pub fn to_key(self) -> String {
        format!("{},{}", self.cx, self.cz)
    }

    /// Parses a `"cx,cz"` key.
    pub fn from_key(key: &str) -> Option<Self> {
        let (cx, cz) = key.split_once(',')?;
        Some(Self::new(cx.trim().parse().ok()?, cz.trim().parse().ok()?))
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.cx, self.cz)
    }
}

impl From<(i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Splits world column (x, z) into its chunk and the local (lx, lz) inside it.
///
/// Uses floor division so negative coordinates land in `[0, CHUNK_SIZE)`.
#[inline]
pub fn world_to_local(x: i32, z: i32) -> (ChunkCoord, i32, i32) {
    (
        ChunkCoord::containing(x, z),
        x.rem_euclid(CHUNK_SIZE),
        z.rem_euclid(CHUNK_SIZE),
    )
}

/// Lateral neighbor directions of a chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChunkNeighbor {
    /// -Z
    NORTH = 0,
    /// +Z
    SOUTH = 1,
    /// +X
    EAST = 2,
    /// -X
    WEST = 3,
}

impl ChunkNeighbor {
    pub fn all() -> [ChunkNeighbor; 4] {
        [
            ChunkNeighbor::NORTH,
            ChunkNeighbor::SOUTH,
            ChunkNeighbor::EAST,
            ChunkNeighbor::WEST,
        ]
    }

    pub fn opposite(self) -> ChunkNeighbor {
        match self {
            ChunkNeighbor::NORTH => ChunkNeighbor::SOUTH,
            ChunkNeighbor::SOUTH => ChunkNeighbor::NORTH,
            ChunkNeighbor::EAST => ChunkNeighbor::WEST,
            ChunkNeighbor::WEST => ChunkNeighbor::EAST,
        }
    }

    /// The coordinate of the adjacent chunk in this direction.
    pub fn of(self, coord: ChunkCoord) -> ChunkCoord {
        match self {
            ChunkNeighbor::NORTH => coord.offset(0, -1),
            ChunkNeighbor::SOUTH => coord.offset(0, 1),
            ChunkNeighbor::EAST => coord.offset(1, 0),
            ChunkNeighbor::WEST => coord.offset(-1, 0),
        }
    }
}
