/// Offscreen culling for side-scrolling scenes.
///
/// Volumes that drift too far left or right of the camera are disabled by
/// shrinking them to zero size. Their handles stay valid, so an object that
/// comes back can restore its size with a plain `update_bounds`.

use glam::Vec3;
use crate::error::Result;
use crate::index::{ColliderHandle, CollisionIndex};
use crate::owner::OwnerRef;

const SOURCE: &str = "collision::Culler";

/// Decides whether an owner's volume may be culled.
pub trait CullTarget {
    fn is_cullable(&self) -> bool;
}

impl CullTarget for OwnerRef {
    /// The player and the terrain are never culled.
    fn is_cullable(&self) -> bool {
        !self.is_player() && !self.is_terrain()
    }
}

/// Offscreen culler configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffscreenCullerConfig {
    /// How far beyond the camera (world units, on x) volumes stay active
    pub horizontal_margin: f32,
    /// Seconds between two culling passes in `tick`
    pub check_interval: f32,
}

impl Default for OffscreenCullerConfig {
    fn default() -> Self {
        Self {
            horizontal_margin: 40.0,
            check_interval: 0.5,
        }
    }
}

/// Periodically disables volumes far from the camera.
pub struct OffscreenCuller {
    config: OffscreenCullerConfig,
    elapsed: f32,
}

impl OffscreenCuller {
    /// Create a culler.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the margin is negative or the
    /// interval is not strictly positive (or either is not finite).
    pub fn new(config: OffscreenCullerConfig) -> Result<Self> {
        if !config.horizontal_margin.is_finite() || config.horizontal_margin < 0.0 {
            return Err(crate::collision_err!(
                SOURCE, "horizontal_margin must be finite and >= 0, got {}", config.horizontal_margin
            ));
        }
        if !config.check_interval.is_finite() || config.check_interval <= 0.0 {
            return Err(crate::collision_err!(
                SOURCE, "check_interval must be finite and > 0, got {}", config.check_interval
            ));
        }

        Ok(Self { config, elapsed: 0.0 })
    }

    pub fn config(&self) -> &OffscreenCullerConfig {
        &self.config
    }

    /// Advance the timer by `dt` seconds and run a pass when the interval
    /// has elapsed. Returns the handles disabled by that pass (empty when
    /// no pass ran).
    pub fn tick<O: CullTarget>(
        &mut self,
        dt: f32,
        camera_x: f32,
        index: &mut CollisionIndex<O>,
    ) -> Vec<ColliderHandle> {
        self.elapsed += dt.max(0.0);
        if self.elapsed < self.config.check_interval {
            return Vec::new();
        }

        self.elapsed -= self.config.check_interval;
        // Never queue more than one catch-up pass after a long frame
        if self.elapsed >= self.config.check_interval {
            self.elapsed = 0.0;
        }
        self.cull_once(camera_x, index)
    }

    /// Run one pass now.
    ///
    /// Skips volumes with no owner, owners that are not cullable and
    /// volumes already disabled. Every other volume whose center lies
    /// outside `[camera_x - margin, camera_x + margin]` is shrunk to zero
    /// size in place. Returns the newly disabled handles in handle order.
    pub fn cull_once<O: CullTarget>(
        &self,
        camera_x: f32,
        index: &mut CollisionIndex<O>,
    ) -> Vec<ColliderHandle> {
        let left_limit = camera_x - self.config.horizontal_margin;
        let right_limit = camera_x + self.config.horizontal_margin;

        let mut culled = Vec::new();
        for (handle, volume) in index.all_volumes() {
            let cullable = index.owner(handle).is_some_and(CullTarget::is_cullable);
            if !cullable || !volume.is_collidable() {
                continue;
            }

            let center = volume.center();
            if center.x < left_limit || center.x > right_limit {
                index.update_bounds(handle, center, Vec3::ZERO);
                culled.push(handle);
            }
        }

        if !culled.is_empty() {
            crate::collision_debug!(
                SOURCE,
                "Culled {} collider(s) outside x in [{}, {}]",
                culled.len(), left_limit, right_limit
            );
        }
        culled
    }
}

#[cfg(test)]
#[path = "offscreen_culler_tests.rs"]
mod tests;
