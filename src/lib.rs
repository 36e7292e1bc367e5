#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel World
//!
//! A streaming voxel-world engine: an unbounded grid of typed blocks partitioned
//! into 16x256x16 chunks, generated on demand from seeded noise, meshed into
//! render-ready triangles under per-tick budgets, saved to and loaded from
//! MessagePack files, and queried by point lookups and raycasts.
//!
//! ## Key Modules
//!
//! * `engine_state` - The tick driver plus configuration, meshing, task queues and voxel data
//!
//! ## Usage
//!
//! ```rust
//! use voxel_world::{EngineConfig, World};
//!
//! let config = EngineConfig { render_distance: 1, ..EngineConfig::default() };
//! let mut world = World::from_config(1234, &config);
//! world.update_streaming(0.0, 0.0);
//! while world.pending_generation_count() > 0 {
//!     world.process_generation_budget(2);
//! }
//! assert_eq!(world.dirty_generated_chunks().len(), 9);
//! ```
//!
//! ## Performance Considerations
//!
//! * Chunk-based voxel storage with O(1) chunk lookup
//! * Terrain generation and meshing are capped per tick
//! * Face culling against neighbors, including across chunk seams

pub mod engine_state;

pub use engine_state::{
    config::{ConfigError, EngineConfig, TerrainConfig},
    occupied_cells,
    rendering::{ChunkMesher, Face, Mesh, MeshSide, MeshSink, Vertex},
    task_management::{BudgetedQueue, GenerationQueue},
    voxels::{
        block::{
            block_info, block_side::BlockSide, block_type::BlockType, is_solid, is_transparent,
            Block, BlockInfo, BLOCK_REGISTRY,
        },
        chunk::{
            world_to_local, Chunk, ChunkCoord, ChunkNeighbor, ChunkNeighbors, CHUNK_HEIGHT,
            CHUNK_SIZE,
        },
        persistence::PersistenceError,
        raycast::RaycastHit,
        terrain::TerrainGenerator,
        world::{StreamingUpdate, World},
    },
    EditIntent, EditOutcome, EngineState, TickReport,
};

/// Installs the `env_logger` backend, writing to stdout and filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let mut log_builder = env_logger::Builder::new();
    let _ = log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .try_init();
}
