//! # Block Module
//!
//! This module provides the core block-related functionality for the voxel engine.
//! It includes block type definitions, the static material registry, and the
//! face enumeration used by the mesher.

use block_type::BlockType;

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in memory.
/// This is also the on-disk representation of a single voxel.
pub type BlockTypeSize = u8;

/// Number of registered block types. Identifiers at or above this value resolve to air.
pub const BLOCK_TYPE_COUNT: usize = 21;

/// Immutable material properties of a block type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockInfo {
    /// The block type this entry describes
    pub block_type: BlockType,
    /// Lower-case identifier, matching the name table in `block_type`
    pub name: &'static str,
    /// Base RGB color before face shading
    pub color: [f32; 3],
    /// Whether the block stops movement and raycasts
    pub is_solid: bool,
    /// Whether faces behind this block stay visible
    pub is_transparent: bool,
}

const fn info(
    block_type: BlockType,
    name: &'static str,
    color: [f32; 3],
    is_solid: bool,
    is_transparent: bool,
) -> BlockInfo {
    BlockInfo {
        block_type,
        name,
        color,
        is_solid,
        is_transparent,
    }
}

/// Maps each block type to its material properties.
///
/// The array is indexed by `BlockType` as a `usize`. Entries never change after
/// startup, so lookups need no synchronization.
pub static BLOCK_REGISTRY: [BlockInfo; BLOCK_TYPE_COUNT] = [
    info(BlockType::AIR, "air", [0.0, 0.0, 0.0], false, true),
    info(BlockType::GRASS, "grass", [0.4, 0.8, 0.2], true, false),
    info(BlockType::DIRT, "dirt", [0.6, 0.4, 0.2], true, false),
    info(BlockType::STONE, "stone", [0.5, 0.5, 0.5], true, false),
    info(BlockType::SAND, "sand", [0.9, 0.9, 0.6], true, false),
    info(BlockType::WATER, "water", [0.2, 0.4, 0.8], true, true),
    info(BlockType::COAL_ORE, "coal_ore", [0.2, 0.2, 0.2], true, false),
    info(BlockType::IRON_ORE, "iron_ore", [0.7, 0.5, 0.4], true, false),
    info(BlockType::GOLD_ORE, "gold_ore", [0.9, 0.8, 0.2], true, false),
    info(BlockType::DIAMOND_ORE, "diamond_ore", [0.3, 0.8, 0.9], true, false),
    info(BlockType::WOOD, "wood", [0.6, 0.4, 0.2], true, false),
    info(BlockType::PLANKS, "planks", [0.8, 0.6, 0.3], true, false),
    info(BlockType::GLASS, "glass", [0.8, 0.9, 1.0], true, true),
    info(BlockType::BRICK, "brick", [0.7, 0.3, 0.2], true, false),
    info(BlockType::COBBLESTONE, "cobblestone", [0.6, 0.6, 0.6], true, false),
    info(BlockType::LEAVES, "leaves", [0.2, 0.6, 0.2], true, true),
    info(BlockType::SNOW, "snow", [0.95, 0.95, 1.0], true, false),
    info(BlockType::ICE, "ice", [0.7, 0.85, 1.0], true, true),
    info(BlockType::GRAVEL, "gravel", [0.5, 0.5, 0.5], true, false),
    info(BlockType::BEDROCK, "bedrock", [0.2, 0.2, 0.2], true, false),
    info(BlockType::LAVA, "lava", [1.0, 0.3, 0.0], true, false),
];

/// Represents a single voxel block in the world.
///
/// This is a lightweight structure that stores only the block identifier.
/// The actual block properties are looked up from the registry.
///
/// # Memory Layout
/// The `#[repr(C)]` attribute and `Pod` derive let a slice of blocks be viewed
/// as raw bytes, which is exactly the persisted voxel format.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq, Eq, Default)]
pub struct Block {
    /// The type of this block, encoded as a `BlockTypeSize` for compact storage.
    pub block_type: BlockTypeSize,
}

impl Block {
    /// The empty block.
    pub const AIR: Block = Block { block_type: 0 };

    /// Creates a new block of the specified type.
    pub const fn new(block_type: BlockType) -> Self {
        Block {
            block_type: block_type as BlockTypeSize,
        }
    }

    /// Wraps a raw identifier. Unregistered identifiers are kept as-is and read as air.
    pub const fn from_id(id: BlockTypeSize) -> Self {
        Block { block_type: id }
    }

    /// Returns true for identifier 0.
    pub fn is_air(&self) -> bool {
        self.block_type == 0
    }

    /// Looks up the material properties of this block.
    pub fn info(&self) -> &'static BlockInfo {
        block_info(self.block_type)
    }
}

impl From<BlockType> for Block {
    fn from(block_type: BlockType) -> Self {
        Block::new(block_type)
    }
}

/// Gets the registry entry for a raw identifier.
///
/// Identifier 0 and every unregistered identifier resolve to the air entry.
pub fn block_info(id: BlockTypeSize) -> &'static BlockInfo {
    BLOCK_REGISTRY
        .get(id as usize)
        .unwrap_or(&BLOCK_REGISTRY[BlockType::AIR as usize])
}

/// Whether the identifier refers to a solid block.
pub fn is_solid(id: BlockTypeSize) -> bool {
    block_info(id).is_solid
}

/// Whether the identifier refers to a transparent block.
pub fn is_transparent(id: BlockTypeSize) -> bool {
    block_info(id).is_transparent
}
