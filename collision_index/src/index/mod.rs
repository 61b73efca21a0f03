//! Collision index
//!
//! Handle-keyed registry of bounding volumes with owner association,
//! per-frame mutation and overlap queries, backed by a pluggable broad
//! phase (brute force or octree).

mod handle;
mod broad_phase;
mod octree_broad_phase;
mod config;
mod collision_index;

pub use handle::ColliderHandle;
pub use broad_phase::{BroadPhase, BruteForceBroadPhase};
pub use octree_broad_phase::{OctreeBroadPhase, MAX_OCTREE_DEPTH};
pub use config::{BroadPhaseConfig, CollisionIndexConfig};
pub use collision_index::{CollisionIndex, MoveQuery};
