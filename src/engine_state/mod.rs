//! # Engine State Module
//!
//! The core engine module that manages the state and per-tick progress of the
//! voxel world.
//!
//! ## Key Components
//!
//! * `EngineState` - The main state container and tick driver
//! * `config` - Tunable constants for streaming, budgets, interaction and terrain
//! * `rendering` - Chunk meshing and the `MeshSink` seam towards the renderer
//! * `task_management` - Budgeted work queues
//! * `voxels` - Handles voxel data, chunks, terrain, raycasting and persistence
//!
//! ## Tick Order
//!
//! Every tick runs the same fixed sequence:
//! 1. Streaming around the viewpoint; geometry of evicted chunks is released
//! 2. At most `generation_budget` chunks get terrain
//! 3. At most `mesh_budget` dirty, generated chunks are meshed, nearest first
//!
//! A chunk that becomes resident in a tick can be generated and meshed in that
//! same tick only if both budgets still have room. Nothing blocks; pending work
//! simply waits in the queues for a later tick.

use std::path::Path;

use cgmath::{Point3, Vector3};

use config::EngineConfig;
use rendering::{ChunkMesher, MeshSink};
use voxels::{
    block::{block_type::BlockType, Block},
    chunk::ChunkCoord,
    persistence::PersistenceError,
    raycast::cell_of,
    world::World,
};

pub mod config;
pub mod rendering;
pub mod task_management;
pub mod voxels;

/// What one call to `EngineState::tick` did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Chunks that became resident
    pub created: usize,
    /// Chunks evicted and released from the sink
    pub evicted: usize,
    /// Chunks that received terrain
    pub generated: usize,
    /// Meshes accepted by the sink
    pub meshed: usize,
    /// Meshes the sink refused; those chunks stay dirty
    pub rejected: usize,
}

/// What an actor wants to do with the block under the crosshair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditIntent {
    /// Replace the targeted block with air.
    Break,
    /// Put a block into the cell in front of the targeted face.
    Place(BlockType),
}

/// Result of `EngineState::apply_edit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Broken(Point3<i32>),
    Placed(Point3<i32>),
    /// Nothing solid within reach.
    NoTarget,
    /// The placement cell is occupied by the actor, or the eye is inside the
    /// hit block.
    Obstructed(Point3<i32>),
    /// The world refused the write, e.g. the cell lies above the world.
    Rejected(Point3<i32>),
}

/// Cells an upright actor whose feet are at `feet` occupies: the feet cell and
/// the one above it.
pub fn occupied_cells(feet: Point3<f32>) -> [Point3<i32>; 2] {
    let cell = cell_of(feet);
    [cell, Point3::new(cell.x, cell.y + 1, cell.z)]
}

/// The main state container for the voxel engine.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_world::{ChunkCoord, EngineConfig, EngineState, Mesh, MeshSink};
///
/// struct Discard;
/// impl MeshSink for Discard {
///     fn upload(&mut self, _: ChunkCoord, _: Mesh) -> bool { true }
///     fn release(&mut self, _: ChunkCoord) {}
/// }
///
/// let config = EngineConfig { render_distance: 1, ..EngineConfig::default() };
/// let mut engine = EngineState::new(7, config);
/// let report = engine.tick(Point3::new(0.0, 80.0, 0.0), &mut Discard);
/// assert_eq!(report.created, 9);
/// assert_eq!(report.generated, 2);
/// ```
pub struct EngineState {
    /// The voxel world containing all chunk data
    pub world: World,
    config: EngineConfig,
    ticks: u64,
}

impl EngineState {
    /// Creates an engine with an empty world.
    pub fn new(seed: u32, config: EngineConfig) -> Self {
        log::info!(
            "Engine created: seed {}, render distance {}, budgets {}/{}",
            seed,
            config.render_distance,
            config.generation_budget,
            config.mesh_budget
        );
        EngineState {
            world: World::from_config(seed, &config),
            config,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advances the world by one tick around `viewpoint`.
    ///
    /// # Arguments
    /// * `viewpoint` - Position driving streaming and mesh priority
    /// * `sink` - Receives built meshes and release notices
    pub fn tick(&mut self, viewpoint: Point3<f32>, sink: &mut impl MeshSink) -> TickReport {
        let mut report = TickReport::default();

        let streaming = self.world.update_streaming(viewpoint.x, viewpoint.z);
        report.created = streaming.created.len();
        report.evicted = streaming.evicted.len();
        for coord in streaming.evicted {
            sink.release(coord);
        }

        report.generated = self
            .world
            .process_generation_budget(self.config.generation_budget);

        let center = ChunkCoord::containing_point(viewpoint.x, viewpoint.z);
        let mut dirty = self.world.dirty_generated_chunks();
        dirty.sort_by_key(|coord| (coord.chebyshev_distance(center), coord.cx, coord.cz));

        for coord in dirty.into_iter().take(self.config.mesh_budget) {
            let Some(chunk) = self.world.chunk(coord) else {
                continue;
            };
            let mesh = ChunkMesher::build(chunk, &self.world.neighbors_of(coord));
            if sink.upload(coord, mesh) {
                self.world.mark_clean(coord);
                report.meshed += 1;
            } else {
                report.rejected += 1;
            }
        }

        self.ticks += 1;
        log::trace!("Tick {}: {:?}", self.ticks, report);
        report
    }

    /// Raycasts from `eye` along `look` up to the configured reach and applies
    /// `intent` to the result.
    ///
    /// Placement goes into the cell sampled just before the hit. It is refused
    /// when that cell is one of `occupied`, or when the eye is already inside
    /// the hit block and no such cell exists.
    pub fn apply_edit(
        &mut self,
        eye: Point3<f32>,
        look: Vector3<f32>,
        intent: EditIntent,
        occupied: &[Point3<i32>],
    ) -> EditOutcome {
        let Some(hit) = self.world.raycast(
            eye,
            look,
            self.config.reach_distance,
            self.config.raycast_step,
        ) else {
            return EditOutcome::NoTarget;
        };

        match intent {
            EditIntent::Break => {
                let target = hit.hit;
                if self.world.set_block(target.x, target.y, target.z, Block::AIR) {
                    log::info!("Broke block at {:?}", target);
                    EditOutcome::Broken(target)
                } else {
                    EditOutcome::Rejected(target)
                }
            }
            EditIntent::Place(block_type) => {
                let Some(target) = hit.previous else {
                    return EditOutcome::Obstructed(hit.hit);
                };
                if occupied.contains(&target) {
                    return EditOutcome::Obstructed(target);
                }
                if self
                    .world
                    .set_block(target.x, target.y, target.z, Block::new(block_type))
                {
                    log::info!("Placed {} at {:?}", block_type.name(), target);
                    EditOutcome::Placed(target)
                } else {
                    EditOutcome::Rejected(target)
                }
            }
        }
    }

    /// Saves the world to `path`, or to the configured world file.
    pub fn save_world(&self, path: Option<&Path>) -> Result<usize, PersistenceError> {
        match path {
            Some(path) => self.world.save(path),
            None => self.world.save(self.config.world_path()),
        }
    }

    /// Loads the world from `path`, or from the configured world file.
    ///
    /// Chunks that were resident before and are absent from the file are
    /// released from `sink`. A failed load leaves the world and the sink alone.
    pub fn load_world(
        &mut self,
        path: Option<&Path>,
        sink: &mut impl MeshSink,
    ) -> Result<usize, PersistenceError> {
        let resident: Vec<ChunkCoord> = self.world.chunks().map(|chunk| chunk.position).collect();

        let loaded = match path {
            Some(path) => self.world.load(path)?,
            None => {
                let path = self.config.world_path();
                self.world.load(path)?
            }
        };

        let mut released = 0;
        for coord in resident {
            if self.world.chunk(coord).is_none() {
                sink.release(coord);
                released += 1;
            }
        }
        log::debug!("Released {} chunks replaced by the load", released);
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::{config::TerrainConfig, rendering::Mesh};

    #[derive(Default)]
    struct RecordingSink {
        accept: bool,
        uploads: Vec<ChunkCoord>,
        releases: Vec<ChunkCoord>,
    }

    impl MeshSink for RecordingSink {
        fn upload(&mut self, coord: ChunkCoord, _mesh: Mesh) -> bool {
            self.uploads.push(coord);
            self.accept
        }

        fn release(&mut self, coord: ChunkCoord) {
            self.releases.push(coord);
        }
    }

    fn flat_engine(render_distance: i32) -> EngineState {
        let config = EngineConfig {
            render_distance,
            terrain: TerrainConfig::flat(64),
            ..EngineConfig::default()
        };
        EngineState::new(5, config)
    }

    #[test]
    fn budgets_bound_each_tick() {
        let mut engine = flat_engine(2);
        let mut sink = RecordingSink {
            accept: true,
            ..Default::default()
        };

        let report = engine.tick(Point3::new(0.0, 70.0, 0.0), &mut sink);
        assert_eq!(report.created, 25);
        assert_eq!(report.generated, 2);
        assert_eq!(report.meshed, 2);
        assert_eq!(engine.world.pending_generation_count(), 23);

        let report = engine.tick(Point3::new(0.0, 70.0, 0.0), &mut sink);
        assert_eq!(report.created, 0);
        assert_eq!(report.generated, 2);
        assert!(report.meshed <= 4);
    }

    #[test]
    fn refused_uploads_stay_dirty() {
        let mut engine = flat_engine(0);
        let mut sink = RecordingSink::default();

        let report = engine.tick(Point3::new(0.0, 70.0, 0.0), &mut sink);
        assert_eq!(report.rejected, 1);
        assert_eq!(engine.world.dirty_generated_chunks().len(), 1);

        sink.accept = true;
        let report = engine.tick(Point3::new(0.0, 70.0, 0.0), &mut sink);
        assert_eq!(report.meshed, 1);
        assert!(engine.world.dirty_generated_chunks().is_empty());
        assert_eq!(sink.uploads.len(), 2);
    }

    #[test]
    fn evicted_chunks_are_released() {
        let mut engine = flat_engine(0);
        let mut sink = RecordingSink {
            accept: true,
            ..Default::default()
        };
        engine.tick(Point3::new(0.0, 70.0, 0.0), &mut sink);
        let report = engine.tick(Point3::new(16.0 * 5.0, 70.0, 0.0), &mut sink);
        assert_eq!(report.evicted, 1);
        assert_eq!(sink.releases, vec![ChunkCoord::new(0, 0)]);
    }

    #[test]
    fn break_then_place() {
        let mut engine = flat_engine(1);
        let mut sink = RecordingSink {
            accept: true,
            ..Default::default()
        };
        for _ in 0..5 {
            engine.tick(Point3::new(0.5, 70.0, 0.5), &mut sink);
        }

        let eye = Point3::new(0.5, 66.5, 0.5);
        let down = Vector3::new(0.0, -1.0, 0.0);
        assert_eq!(
            engine.apply_edit(eye, down, EditIntent::Break, &[]),
            EditOutcome::Broken(Point3::new(0, 64, 0))
        );
        assert!(engine.world.get_block(0, 64, 0).is_air());

        let outcome = engine.apply_edit(eye, down, EditIntent::Place(BlockType::BRICK), &[]);
        assert_eq!(outcome, EditOutcome::Placed(Point3::new(0, 64, 0)));
        assert_eq!(engine.world.get_block(0, 64, 0), Block::new(BlockType::BRICK));
    }

    #[test]
    fn placement_into_the_actor_is_refused() {
        let mut engine = flat_engine(0);
        let mut sink = RecordingSink {
            accept: true,
            ..Default::default()
        };
        engine.tick(Point3::new(0.5, 70.0, 0.5), &mut sink);

        let feet = Point3::new(0.5, 65.0, 0.5);
        let occupied = occupied_cells(feet);
        let outcome = engine.apply_edit(
            Point3::new(0.5, 66.6, 0.5),
            Vector3::new(0.0, -1.0, 0.0),
            EditIntent::Place(BlockType::DIRT),
            &occupied,
        );
        assert_eq!(outcome, EditOutcome::Obstructed(Point3::new(0, 65, 0)));
        assert!(engine.world.get_block(0, 65, 0).is_air());
    }

    #[test]
    fn placing_from_inside_a_block_leaves_it_alone() {
        let mut engine = flat_engine(0);
        let mut sink = RecordingSink {
            accept: true,
            ..Default::default()
        };
        engine.tick(Point3::new(0.5, 70.0, 0.5), &mut sink);
        let buried = engine.world.get_block(0, 60, 0);
        assert!(!buried.is_air());

        let outcome = engine.apply_edit(
            Point3::new(0.5, 60.5, 0.5),
            Vector3::new(0.0, -1.0, 0.0),
            EditIntent::Place(BlockType::BRICK),
            &[],
        );
        assert_eq!(outcome, EditOutcome::Obstructed(Point3::new(0, 60, 0)));
        assert_eq!(engine.world.get_block(0, 60, 0), buried);
    }

    #[test]
    fn loading_a_smaller_world_releases_dropped_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("single.dat");

        let mut small = flat_engine(0);
        small.tick(Point3::new(0.5, 70.0, 0.5), &mut RecordingSink::default());
        assert_eq!(small.save_world(Some(path.as_path())).unwrap(), 1);

        let mut engine = flat_engine(1);
        let mut sink = RecordingSink {
            accept: true,
            ..Default::default()
        };
        for _ in 0..20 {
            engine.tick(Point3::new(0.5, 70.0, 0.5), &mut sink);
        }
        assert_eq!(engine.world.pending_generation_count(), 0);
        assert!(engine.world.dirty_generated_chunks().is_empty());
        let mut uploaded = sink.uploads.clone();
        uploaded.sort_by_key(|coord| (coord.cx, coord.cz));
        uploaded.dedup();
        assert_eq!(uploaded.len(), 9);
        assert!(sink.releases.is_empty());

        assert_eq!(engine.load_world(Some(path.as_path()), &mut sink).unwrap(), 1);
        assert_eq!(engine.world.resident_chunk_count(), 1);
        assert_eq!(sink.releases.len(), 8);
        assert!(!sink.releases.contains(&ChunkCoord::new(0, 0)));
    }

    #[test]
    fn failed_load_releases_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = flat_engine(0);
        let mut sink = RecordingSink {
            accept: true,
            ..Default::default()
        };
        engine.tick(Point3::new(0.5, 70.0, 0.5), &mut sink);

        let missing = dir.path().join("missing.dat");
        assert!(engine.load_world(Some(missing.as_path()), &mut sink).is_err());
        assert!(sink.releases.is_empty());
        assert_eq!(engine.world.resident_chunk_count(), 1);
    }
}
