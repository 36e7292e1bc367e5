//! Mesh data for voxel rendering.
//!
//! # Architecture
//! - [`Mesh`]: The complete geometry of one chunk, bucketed by block side
//! - [`Face`]: A single visible face of a voxel, emitted as two triangles
//!
//! # Usage
//! ```
//! use cgmath::Point3;
//! use voxel_world::{BlockSide, Face, Mesh};
//!
//! let mut mesh = Mesh::new();
//! mesh.add_face(&Face::new(Point3::new(0, 64, 0), [0.4, 0.8, 0.2], BlockSide::TOP));
//! assert_eq!(mesh.vertex_count(), 6);
//! ```

mod face;
#[allow(clippy::module_inception)]
mod mesh;

pub use face::Face;
pub use mesh::*;
