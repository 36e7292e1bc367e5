//! # Voxel World Core
//!
//! This module contains the voxel data model and everything that reads or
//! mutates it.
//!
//! ## Architecture
//!
//! * **Block**: Voxel identifiers, the static material registry and face directions
//! * **Chunk**: Fixed-size 16x256x16 columns of blocks with lifecycle flags
//! * **Terrain**: Seeded, reproducible procedural generation of chunk contents
//! * **World**: The chunk store, neighbor graph, generation queue and streaming
//! * **Raycast**: Fixed-step ray marching for block interaction
//! * **Persistence**: MessagePack save files
//!
//! ## Data Flow
//!
//! 1. Streaming makes chunks around the viewpoint resident and queues them
//! 2. The generation budget fills queued chunks and links them to their neighbors
//! 3. Generated chunks are dirty until the mesher has rebuilt them
//! 4. Block edits dirty the edited chunk and any neighbor sharing the edited face
//!
//! ## Thread Safety
//!
//! All mutation goes through `World` on a single thread. Chunks never own each
//! other; neighbor links are coordinates resolved against the world's store.

pub mod block;
pub mod chunk;
pub mod persistence;
pub mod raycast;
pub mod terrain;
pub mod world;
