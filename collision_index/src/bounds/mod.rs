//! Bounds math
//!
//! Corner-form boxes (`AABB`) and the center/size volumes stored by the
//! collision index (`BoundingVolume`).

mod aabb;
mod bounding_volume;

pub use aabb::AABB;
pub use bounding_volume::BoundingVolume;
