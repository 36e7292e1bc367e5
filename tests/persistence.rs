use voxel_world::{
    Block, BlockType, ChunkCoord, ChunkNeighbor, EngineConfig, PersistenceError, TerrainConfig,
    World, CHUNK_HEIGHT, CHUNK_SIZE,
};

fn generated_world(seed: u32, render_distance: i32) -> World {
    let config = EngineConfig {
        render_distance,
        ..EngineConfig::default()
    };
    let mut world = World::from_config(seed, &config);
    world.update_streaming(0.0, 0.0);
    world.process_generation_budget(usize::MAX);
    world
}

#[test]
fn round_trip_restores_blocks_and_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saves").join("world.dat");

    let mut world = generated_world(4242, 0);
    assert!(world.set_block(3, 200, 4, Block::new(BlockType::DIAMOND_ORE)));
    world.mark_clean(ChunkCoord::new(0, 0));
    assert_eq!(world.save(&path).unwrap(), 1);

    let mut restored = World::new(1);
    assert_eq!(restored.load(&path).unwrap(), 1);
    assert_eq!(restored.seed(), 4242);

    let before = world.chunk(ChunkCoord::new(0, 0)).unwrap();
    let after = restored.chunk(ChunkCoord::new(0, 0)).unwrap();
    assert!(after.generated && after.dirty);
    for x in 0..CHUNK_SIZE {
        for y in 0..CHUNK_HEIGHT {
            for z in 0..CHUNK_SIZE {
                assert_eq!(after.get_block(x, y, z), before.get_block(x, y, z));
            }
        }
    }
    assert_eq!(restored.get_block(3, 200, 4), Block::new(BlockType::DIAMOND_ORE));
}

#[test]
fn only_generated_chunks_are_written_and_links_are_rebuilt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("world.dat");

    let config = EngineConfig {
        render_distance: 1,
        terrain: TerrainConfig::flat(60),
        ..EngineConfig::default()
    };
    let mut world = World::from_config(8, &config);
    world.update_streaming(0.0, 0.0);
    world.process_generation_budget(4);
    assert_eq!(world.save(&path).unwrap(), 4);

    let mut restored = World::from_config(0, &config);
    restored.update_streaming(0.0, 0.0);
    assert_eq!(restored.load(&path).unwrap(), 4);
    assert_eq!(restored.resident_chunk_count(), 4);
    assert_eq!(restored.pending_generation_count(), 0);

    // Streaming order makes the first four chunks the (-1, -1..=1) column and (0, -1).
    let west = restored.chunk(ChunkCoord::new(-1, 0)).unwrap();
    assert_eq!(west.neighbor(ChunkNeighbor::NORTH), Some(ChunkCoord::new(-1, -1)));
    assert_eq!(west.neighbor(ChunkNeighbor::SOUTH), Some(ChunkCoord::new(-1, 1)));
    assert_eq!(west.neighbor(ChunkNeighbor::EAST), None);
}

#[test]
fn missing_file_leaves_world_intact() {
    let dir = tempfile::tempdir().unwrap();
    let mut world = generated_world(77, 0);

    let err = world.load(dir.path().join("absent.dat")).unwrap_err();
    assert!(matches!(err, PersistenceError::Io { .. }));
    assert_eq!(world.seed(), 77);
    assert_eq!(world.resident_chunk_count(), 1);
    assert!(world.chunk(ChunkCoord::new(0, 0)).unwrap().generated);
}

#[test]
fn malformed_file_leaves_world_intact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.dat");
    std::fs::write(&path, b"definitely not messagepack").unwrap();

    let mut world = generated_world(78, 0);
    let err = world.load(&path).unwrap_err();
    assert!(matches!(err, PersistenceError::Decode { .. }));
    assert_eq!(world.seed(), 78);
    assert_eq!(world.resident_chunk_count(), 1);
}

#[test]
fn wrong_shape_aborts_the_whole_load() {
    #[derive(serde::Serialize)]
    struct Chunk {
        #[serde(with = "serde_bytes")]
        blocks: Vec<u8>,
        shape: [usize; 3],
    }
    #[derive(serde::Serialize)]
    struct Save {
        seed: u32,
        chunks: std::collections::BTreeMap<String, Chunk>,
    }

    let mut chunks = std::collections::BTreeMap::new();
    chunks.insert(
        "0,0".to_string(),
        Chunk {
            blocks: vec![1; 16 * 256 * 16],
            shape: [16, 256, 16],
        },
    );
    chunks.insert(
        "1,0".to_string(),
        Chunk {
            blocks: vec![1; 16 * 128 * 16],
            shape: [16, 128, 16],
        },
    );
    let bytes = rmp_serde::to_vec_named(&Save { seed: 5, chunks }).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad_shape.dat");
    std::fs::write(&path, bytes).unwrap();

    let mut world = generated_world(79, 0);
    let err = world.load(&path).unwrap_err();
    assert!(matches!(err, PersistenceError::InvalidShape { .. }));
    assert_eq!(world.seed(), 79);
    assert!(world.chunk(ChunkCoord::new(1, 0)).is_none());
}
