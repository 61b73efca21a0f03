/// One registered collision box.
///
/// A BoundingVolume stores only `center` and `size`; `min`, `max` and
/// `half_extents` are always derived, so they can never drift out of sync.

use glam::{Mat4, Vec3};
use super::aabb::AABB;

/// Axis-aligned collision box with an auxiliary transform.
///
/// - `size` is the full width/height/depth. Every component is >= 0:
///   negative or NaN components are clamped to 0 on every write.
/// - A zero component makes the volume non-collidable: it never overlaps
///   anything. Consumers use this to disable a volume without giving up
///   its handle.
/// - `transform` is stored for renderer/consumer convenience and is not
///   used by the overlap test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingVolume {
    center: Vec3,
    size: Vec3,
    transform: Mat4,
    is_player: bool,
}

impl BoundingVolume {
    /// Create a volume. The transform starts as a pure translation to `center`.
    pub fn new(center: Vec3, size: Vec3, is_player: bool) -> Self {
        Self {
            center,
            size: Self::clamp_size(size),
            transform: Mat4::from_translation(center),
            is_player,
        }
    }

    /// Center point in world space
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Full extents (never negative)
    pub fn size(&self) -> Vec3 {
        self.size
    }

    /// Half extents (size / 2)
    pub fn half_extents(&self) -> Vec3 {
        self.size * 0.5
    }

    /// Minimum corner (center - half extents)
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents()
    }

    /// Maximum corner (center + half extents)
    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents()
    }

    /// Corner form of this volume
    pub fn aabb(&self) -> AABB {
        AABB { min: self.min(), max: self.max() }
    }

    /// Auxiliary transform matrix
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Informational player tag
    pub fn is_player(&self) -> bool {
        self.is_player
    }

    /// Whether this volume can overlap anything: every size component is
    /// > 0 and the center is finite.
    pub fn is_collidable(&self) -> bool {
        self.size.cmpgt(Vec3::ZERO).all() && self.center.is_finite()
    }

    /// Inclusive overlap test against another volume.
    ///
    /// Boxes touching on a boundary overlap. A non-collidable volume on
    /// either side never overlaps.
    pub fn intersects(&self, other: &BoundingVolume) -> bool {
        self.is_collidable() && other.is_collidable() && self.aabb().intersects(&other.aabb())
    }

    /// Transient copy moved to `center`, keeping size and tag.
    pub fn probe_at(&self, center: Vec3) -> BoundingVolume {
        BoundingVolume {
            center,
            size: self.size,
            transform: self.transform,
            is_player: self.is_player,
        }
    }

    /// Overwrite center and size. Returns `true` if the size had to be clamped.
    pub(crate) fn set_bounds(&mut self, center: Vec3, size: Vec3) -> bool {
        self.center = center;
        self.size = Self::clamp_size(size);
        Self::needs_clamp(size)
    }

    /// Store the matrix and take its translation as the new center.
    pub(crate) fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
        self.center = transform.w_axis.truncate();
    }

    /// Whether `size` has a negative or NaN component
    pub(crate) fn needs_clamp(size: Vec3) -> bool {
        !size.cmpge(Vec3::ZERO).all()
    }

    fn clamp_size(size: Vec3) -> Vec3 {
        // NaN > 0.0 is false, so NaN also clamps to zero
        let clamp = |v: f32| if v > 0.0 { v } else { 0.0 };
        Vec3::new(clamp(size.x), clamp(size.y), clamp(size.z))
    }
}

#[cfg(test)]
#[path = "bounding_volume_tests.rs"]
mod tests;
