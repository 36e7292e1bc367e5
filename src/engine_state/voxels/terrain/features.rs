//! Ores, trees and the position-keyed random source that places them.

use crate::engine_state::voxels::{
    block::{block_type::BlockType, Block},
    chunk::{Chunk, CHUNK_HEIGHT, CHUNK_SIZE},
};

/// Trunk length of a generated tree.
pub const TREE_TRUNK_HEIGHT: i32 = 5;
/// Half-extent of the leaf cube before the Manhattan cutoff.
const LEAF_EXTENT: i32 = 2;
/// Leaves are kept where |dx| + |dy| + |dz| is at most this.
const LEAF_MANHATTAN_RADIUS: i32 = 3;

fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Seed for the feature random source of world column (x, z).
pub fn column_seed(seed: u32, x: i32, z: i32) -> u64 {
    let mut h = splitmix64(seed as u64);
    h = splitmix64(h ^ (x as u32 as u64));
    splitmix64(h ^ ((z as u32 as u64) << 32))
}

/// Random source for one world column, identical for every generation of that column.
pub fn column_rng(seed: u32, x: i32, z: i32) -> fastrand::Rng {
    fastrand::Rng::with_seed(column_seed(seed, x, z))
}

/// Picks an ore for a stone cell at height `y`. Deeper cells get rarer ores.
pub fn ore_for_depth(y: i32, rng: &mut fastrand::Rng) -> BlockType {
    if y < 16 && rng.f64() < 0.3 {
        BlockType::DIAMOND_ORE
    } else if y < 32 && rng.f64() < 0.4 {
        BlockType::GOLD_ORE
    } else if y < 64 && rng.f64() < 0.5 {
        BlockType::IRON_ORE
    } else {
        BlockType::COAL_ORE
    }
}

fn place_if_air(chunk: &mut Chunk, lx: i32, y: i32, lz: i32, block: Block) {
    if chunk.get_block(lx, y, lz).is_air() {
        let _ = chunk.set_block(lx, y, lz, block);
    }
}

/// Grows a tree whose trunk starts at local (lx, base_y, lz).
///
/// Leaves are clipped to this chunk and nothing already present is overwritten.
pub fn place_tree(chunk: &mut Chunk, lx: i32, base_y: i32, lz: i32) {
    let wood = Block::new(BlockType::WOOD);
    for dy in 0..TREE_TRUNK_HEIGHT {
        place_if_air(chunk, lx, base_y + dy, lz, wood);
    }

    let crown_y = base_y + TREE_TRUNK_HEIGHT;
    if crown_y >= CHUNK_HEIGHT - 2 {
        return;
    }

    let leaves = Block::new(BlockType::LEAVES);
    for dx in -LEAF_EXTENT..=LEAF_EXTENT {
        for dz in -LEAF_EXTENT..=LEAF_EXTENT {
            let (x, z) = (lx + dx, lz + dz);
            if !(0..CHUNK_SIZE).contains(&x) || !(0..CHUNK_SIZE).contains(&z) {
                continue;
            }
            for dy in -LEAF_EXTENT..=LEAF_EXTENT {
                if dx.abs() + dy.abs() + dz.abs() <= LEAF_MANHATTAN_RADIUS {
                    place_if_air(chunk, x, crown_y + dy, z, leaves);
                }
            }
        }
    }
}
