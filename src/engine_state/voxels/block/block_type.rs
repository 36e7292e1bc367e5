//! # Block Type Module
//!
//! This module defines the different types of blocks in the voxel world.
//! It provides functionality for block type identification and conversion
//! from raw identifiers and names.

use num_derive::FromPrimitive;
use phf::phf_map;

use super::BlockTypeSize;

/// Enumerates all possible block types in the voxel world.
///
/// Discriminants are the stable on-disk identifiers. The `FromPrimitive` derive
/// allows conversion from raw identifiers read back from a save file.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(u8)]
pub enum BlockType {
    /// Empty space, non-solid and transparent.
    AIR = 0,
    GRASS = 1,
    DIRT = 2,
    STONE = 3,
    SAND = 4,
    /// Fluid surface; solid for collision and rays, rendered with transparency.
    WATER = 5,
    COAL_ORE = 6,
    IRON_ORE = 7,
    GOLD_ORE = 8,
    DIAMOND_ORE = 9,
    WOOD = 10,
    PLANKS = 11,
    GLASS = 12,
    BRICK = 13,
    COBBLESTONE = 14,
    LEAVES = 15,
    SNOW = 16,
    ICE = 17,
    GRAVEL = 18,
    /// Unconditional bottom layer of every column.
    BEDROCK = 19,
    LAVA = 20,
}

/// Compile-time name table used by tooling and configuration input.
static BLOCK_TYPES_BY_NAME: phf::Map<&'static str, BlockType> = phf_map! {
    "air" => BlockType::AIR,
    "grass" => BlockType::GRASS,
    "dirt" => BlockType::DIRT,
    "stone" => BlockType::STONE,
    "sand" => BlockType::SAND,
    "water" => BlockType::WATER,
    "coal_ore" => BlockType::COAL_ORE,
    "iron_ore" => BlockType::IRON_ORE,
    "gold_ore" => BlockType::GOLD_ORE,
    "diamond_ore" => BlockType::DIAMOND_ORE,
    "wood" => BlockType::WOOD,
    "planks" => BlockType::PLANKS,
    "glass" => BlockType::GLASS,
    "brick" => BlockType::BRICK,
    "cobblestone" => BlockType::COBBLESTONE,
    "leaves" => BlockType::LEAVES,
    "snow" => BlockType::SNOW,
    "ice" => BlockType::ICE,
    "gravel" => BlockType::GRAVEL,
    "bedrock" => BlockType::BEDROCK,
    "lava" => BlockType::LAVA,
};

impl BlockType {
    /// Converts a raw identifier to a `BlockType`.
    ///
    /// # Returns
    /// `None` if the identifier is not registered.
    pub fn from_id(id: BlockTypeSize) -> Option<Self> {
        num::FromPrimitive::from_u8(id)
    }

    /// Looks a block type up by its registry name.
    pub fn from_name(name: &str) -> Option<Self> {
        BLOCK_TYPES_BY_NAME.get(name).copied()
    }

    /// The registry name of this block type.
    pub fn name(self) -> &'static str {
        super::BLOCK_REGISTRY[self as usize].name
    }
}
