//! # Voxel World Headless Driver
//!
//! Runs the engine without a window: the viewpoint walks along +x while ticks
//! stream, generate and mesh chunks into a counting sink.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- --seed 42 --ticks 200 --save saves/world.dat
//! ```

use std::path::PathBuf;

use cgmath::Point3;
use clap::Parser;
use voxel_world::{ChunkCoord, EngineConfig, EngineState, Mesh, MeshSink};

/// Headless voxel world driver.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// World seed
    #[arg(long, default_value_t = 0)]
    seed: u32,

    /// Number of ticks to run
    #[arg(long, default_value_t = 100)]
    ticks: u32,

    /// JSON engine configuration; unspecified fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the world here after the run
    #[arg(long)]
    save: Option<PathBuf>,

    /// Load this world before the first tick
    #[arg(long)]
    load: Option<PathBuf>,

    /// Blocks the viewpoint moves along +x per tick
    #[arg(long, default_value_t = 0.5)]
    speed: f32,
}

/// Counts meshes instead of drawing them.
#[derive(Default)]
struct CountingSink {
    uploads: usize,
    releases: usize,
    vertices: usize,
}

impl MeshSink for CountingSink {
    fn upload(&mut self, _coord: ChunkCoord, mesh: Mesh) -> bool {
        self.uploads += 1;
        self.vertices += mesh.vertex_count();
        true
    }

    fn release(&mut self, _coord: ChunkCoord) {
        self.releases += 1;
    }
}

fn main() {
    voxel_world::init_logging();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match EngineConfig::from_json_file(path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{}", err);
                std::process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    let mut engine = EngineState::new(args.seed, config);
    let mut sink = CountingSink::default();
    if let Some(path) = &args.load {
        if engine.load_world(Some(path.as_path()), &mut sink).is_err() {
            std::process::exit(1);
        }
    }

    let start = std::time::Instant::now();
    for tick in 0..args.ticks {
        let viewpoint = Point3::new(tick as f32 * args.speed, 80.0, 0.0);
        engine.tick(viewpoint, &mut sink);
    }

    log::info!(
        "{} ticks in {:.2?}: {} resident, {} pending, {} meshes ({} vertices), {} released",
        engine.ticks(),
        start.elapsed(),
        engine.world.resident_chunk_count(),
        engine.world.pending_generation_count(),
        sink.uploads,
        sink.vertices,
        sink.releases
    );

    if let Some(path) = &args.save {
        if let Err(err) = engine.save_world(Some(path.as_path())) {
            log::error!("{}", err);
            std::process::exit(1);
        }
    }
}
