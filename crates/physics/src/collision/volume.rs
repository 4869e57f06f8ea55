//! Static building collision volumes.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned building volume in world space.
///
/// Built once at world-build time and read-only afterward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BuildingVolume {
    /// Minimum corner (meters).
    pub min: Vec3,

    /// Maximum corner (meters).
    pub max: Vec3,
}

impl BuildingVolume {
    /// Create a volume from two corners. Components are reordered so
    /// `min` is always the lesser corner.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create a building standing on the ground plane from its footprint
    /// center, width/depth, and height.
    pub fn from_footprint(x: f32, z: f32, width: f32, depth: f32, height: f32) -> Self {
        Self {
            min: Vec3::new(x - width / 2.0, 0.0, z - depth / 2.0),
            max: Vec3::new(x + width / 2.0, height, z + depth / 2.0),
        }
    }

    /// Roof height (meters).
    #[inline]
    pub fn roof_y(&self) -> f32 {
        self.max.y
    }

    /// Center of the roof in the XZ plane.
    #[inline]
    pub fn center_xz(&self) -> (f32, f32) {
        (
            (self.min.x + self.max.x) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// Whether `position` lies horizontally over the footprint expanded by
    /// `radius` on every side.
    pub fn footprint_contains(&self, position: Vec3, radius: f32) -> bool {
        position.x > self.min.x - radius
            && position.x < self.max.x + radius
            && position.z > self.min.z - radius
            && position.z < self.max.z + radius
    }

    /// Closest point on the volume to `point` (componentwise clamp).
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }
}
