use proptest::prelude::*;
use voxel_world::{
    world_to_local, Block, BlockType, ChunkCoord, ChunkNeighbor, EngineConfig, TerrainConfig,
    World, CHUNK_HEIGHT, CHUNK_SIZE,
};

fn flat_world(render_distance: i32) -> World {
    let config = EngineConfig {
        render_distance,
        terrain: TerrainConfig::flat(64),
        ..EngineConfig::default()
    };
    World::from_config(11, &config)
}

fn generated_world(render_distance: i32) -> World {
    let mut world = flat_world(render_distance);
    world.update_streaming(0.0, 0.0);
    world.process_generation_budget(usize::MAX);
    world
}

fn assert_links_symmetric(world: &World) {
    for chunk in world.chunks() {
        for direction in ChunkNeighbor::all() {
            if let Some(linked) = chunk.neighbor(direction) {
                assert_eq!(linked, direction.of(chunk.position));
                let other = world
                    .chunk(linked)
                    .unwrap_or_else(|| panic!("{} links to evicted {}", chunk.position, linked));
                assert_eq!(other.neighbor(direction.opposite()), Some(chunk.position));
            }
        }
    }
}

#[test]
fn streaming_keeps_the_square_resident_and_evicts_past_the_margin() {
    let mut world = flat_world(3);
    let update = world.update_streaming(8.0, 8.0);
    assert_eq!(update.created.len(), 49);
    assert!(update.evicted.is_empty());

    // Four chunks east: columns cx = -3 and -2 fall outside R + 2.
    let update = world.update_streaming(8.0 + 16.0 * 4.0, 8.0);
    let center = ChunkCoord::new(4, 0);
    for dx in -3..=3 {
        for dz in -3..=3 {
            assert!(world.chunk(center.offset(dx, dz)).is_some());
        }
    }
    for chunk in world.chunks() {
        assert!(chunk.position.chebyshev_distance(center) <= 5);
    }
    assert_eq!(update.evicted.len(), 2 * 7);
    assert!(update.evicted.iter().all(|coord| coord.cx < -1));
}

#[test]
fn neighbor_links_stay_symmetric_through_eviction() {
    let mut world = generated_world(2);
    assert_links_symmetric(&world);

    let origin = world.chunk(ChunkCoord::new(0, 0)).unwrap();
    assert_eq!(origin.neighbor(ChunkNeighbor::EAST), Some(ChunkCoord::new(1, 0)));
    assert_eq!(origin.neighbor(ChunkNeighbor::NORTH), Some(ChunkCoord::new(0, -1)));

    world.update_streaming(16.0 * 6.0, 0.0);
    world.process_generation_budget(usize::MAX);
    assert_links_symmetric(&world);

    // Column cx = 3 was never resident, so nothing links across it.
    let edge = world.chunk(ChunkCoord::new(4, 0)).unwrap();
    assert_eq!(edge.neighbor(ChunkNeighbor::WEST), None);
}

#[test]
fn boundary_edit_dirties_the_linked_neighbor() {
    let mut world = generated_world(1);
    for chunk in world.dirty_generated_chunks() {
        world.mark_clean(chunk);
    }

    // World x = 16 is local x = 0 of chunk (1, 0).
    assert!(world.set_block(16, 70, 5, Block::new(BlockType::PLANKS)));
    assert!(world.chunk(ChunkCoord::new(1, 0)).unwrap().dirty);
    assert!(world.chunk(ChunkCoord::new(0, 0)).unwrap().dirty);
    assert!(!world.chunk(ChunkCoord::new(1, 1)).unwrap().dirty);

    let mut dirty = world.dirty_generated_chunks();
    dirty.sort_by_key(|c| (c.cx, c.cz));
    assert_eq!(dirty, vec![ChunkCoord::new(0, 0), ChunkCoord::new(1, 0)]);
}

#[test]
fn interior_and_unchanged_edits_dirty_only_what_changed() {
    let mut world = generated_world(1);
    for chunk in world.dirty_generated_chunks() {
        world.mark_clean(chunk);
    }

    assert!(world.set_block(5, 70, 5, Block::new(BlockType::GLASS)));
    assert_eq!(world.dirty_generated_chunks(), vec![ChunkCoord::new(0, 0)]);

    world.mark_clean(ChunkCoord::new(0, 0));
    assert!(world.set_block(5, 70, 5, Block::new(BlockType::GLASS)));
    assert!(world.dirty_generated_chunks().is_empty());
}

#[test]
fn reads_outside_resident_chunks_are_air() {
    let world = generated_world(0);
    assert!(world.get_block(1000, 10, 1000).is_air());
    assert_eq!(world.resident_chunk_count(), 1);
    assert!(!world.is_solid_at(0, 70, 0));
    assert!(world.is_solid_at(0, 64, 0));
}

#[test]
fn generation_budget_is_fifo_and_bounded() {
    let mut world = flat_world(1);
    let update = world.update_streaming(0.0, 0.0);
    assert_eq!(world.process_generation_budget(3), 3);
    for coord in &update.created[..3] {
        assert!(world.chunk(*coord).unwrap().generated);
    }
    for coord in &update.created[3..] {
        assert!(!world.chunk(*coord).unwrap().generated);
    }
    assert_eq!(world.pending_generation_count(), 6);
    assert_eq!(world.process_generation_budget(100), 6);
    assert_eq!(world.process_generation_budget(100), 0);
}

proptest! {
    #[test]
    fn world_to_local_round_trips(x in -1_000_000i32..1_000_000, z in -1_000_000i32..1_000_000) {
        let (coord, lx, lz) = world_to_local(x, z);
        prop_assert!((0..CHUNK_SIZE).contains(&lx));
        prop_assert!((0..CHUNK_SIZE).contains(&lz));
        prop_assert_eq!(coord.to_world(lx, lz), (x, z));
        prop_assert_eq!(coord, ChunkCoord::containing(x, z));
    }

    #[test]
    fn heights_outside_the_world_are_air_and_rejected(
        x in -64i32..64,
        z in -64i32..64,
        y in prop_oneof![i32::MIN..0, CHUNK_HEIGHT..i32::MAX],
    ) {
        let mut world = World::new(1);
        prop_assert!(world.get_block(x, y, z).is_air());
        prop_assert!(!world.set_block(x, y, z, Block::new(BlockType::STONE)));
        prop_assert_eq!(world.resident_chunk_count(), 0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn edits_land_in_exactly_one_cell(x in -16i32..32, y in 1i32..CHUNK_HEIGHT, z in -16i32..32) {
        let mut world = generated_world(1);
        let brick = Block::new(BlockType::BRICK);
        prop_assert!(world.set_block(x, y, z, brick));
        prop_assert_eq!(world.get_block(x, y, z), brick);

        let (coord, lx, lz) = world_to_local(x, z);
        let chunk = world.chunk(coord).unwrap();
        prop_assert_eq!(chunk.get_block(lx, y, lz), brick);
        prop_assert!(chunk.dirty);
    }
}
