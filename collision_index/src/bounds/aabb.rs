/// Axis-aligned bounding box in world space.

use glam::Vec3;

/// Axis-Aligned Bounding Box given by its two corners
///
/// Used by the broad phases for storage and queries, and by
/// `BoundingVolume` as its derived min/max form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Build an AABB from a center point and full extents.
    pub fn from_center_size(center: Vec3, size: Vec3) -> AABB {
        let half = size * 0.5;
        AABB { min: center - half, max: center + half }
    }

    /// Center point of this AABB.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full extents (max - min).
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Whether min <= max on every axis and all coordinates are finite.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min.cmple(self.max).all()
    }

    /// Test if this AABB fully contains another AABB.
    ///
    /// Used by OctreeBroadPhase to decide if a box fits entirely
    /// within a child node.
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }

    /// Test if this AABB intersects (overlaps) another AABB.
    ///
    /// Inclusive: boxes that only touch on a face, edge or corner intersect.
    pub fn intersects(&self, other: &AABB) -> bool {
        !(self.max.x < other.min.x || self.min.x > other.max.x
        || self.max.y < other.min.y || self.min.y > other.max.y
        || self.max.z < other.min.z || self.min.z > other.max.z)
    }
}
