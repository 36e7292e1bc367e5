//! Vertex data structures for chunk geometry.
//!
//! This module defines the vertex format produced by the mesher and handed to the
//! rendering collaborator.

use cgmath::Point3;

/// A vertex of chunk geometry.
///
/// # Memory Layout
/// - Position: [f32; 3] (12 bytes), world space
/// - Color: [f32; 3] (12 bytes), RGB already multiplied by face brightness
///
/// Total size: 24 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    /// Creates a new vertex.
    ///
    /// # Arguments
    /// * `pos` - The position of the vertex in world space
    /// * `color` - The shaded RGB color
    pub fn new(pos: Point3<i32>, color: [f32; 3]) -> Self {
        Vertex {
            position: [pos.x as f32, pos.y as f32, pos.z as f32],
            color,
        }
    }
}
