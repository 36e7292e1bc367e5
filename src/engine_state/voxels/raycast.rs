//! Fixed-step ray marching through the world's block grid.
//!
//! The ray advances by a constant fraction of a block and tests the cell that
//! contains each sample point. It can step past thin features or report a
//! neighboring cell at grazing angles; interaction code tolerates both.

use cgmath::{InnerSpace, Point3, Vector3};

use super::world::World;

/// Result of a successful raycast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaycastHit {
    /// The first solid cell the ray entered.
    pub hit: Point3<i32>,
    /// The cell sampled at the step before the hit. Placement targets this cell.
    ///
    /// `None` when the origin itself lies in a solid cell.
    pub previous: Option<Point3<i32>>,
}

/// Cell containing a continuous world position.
pub fn cell_of(point: Point3<f32>) -> Point3<i32> {
    Point3::new(
        point.x.floor() as i32,
        point.y.floor() as i32,
        point.z.floor() as i32,
    )
}

impl World {
    /// Marches from `origin` along `direction` in increments of `step` blocks and
    /// returns the first solid cell within `max_distance`.
    ///
    /// `direction` is normalized first. A zero direction, a non-positive or
    /// non-finite step, and a non-positive or non-finite reach never hit.
    pub fn raycast(
        &self,
        origin: Point3<f32>,
        direction: Vector3<f32>,
        max_distance: f32,
        step: f32,
    ) -> Option<RaycastHit> {
        if direction.magnitude2() <= f32::EPSILON || !direction.magnitude2().is_finite() {
            return None;
        }
        if step <= 0.0 || !step.is_finite() || max_distance <= 0.0 || !max_distance.is_finite() {
            return None;
        }
        let direction = direction.normalize();
        let samples = (max_distance / step).ceil() as u64;

        let mut previous = None;
        for sample in 0..samples {
            let distance = sample as f32 * step;
            if distance >= max_distance {
                break;
            }

            let cell = cell_of(origin + direction * distance);
            if self.is_solid_at(cell.x, cell.y, cell.z) {
                return Some(RaycastHit { hit: cell, previous });
            }
            previous = Some(cell);
        }
        None
    }
}
