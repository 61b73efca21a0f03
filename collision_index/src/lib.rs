/*!
# Collision Index

Engine-independent broad-phase collision registry for gameplay objects.

Every object that collides (player, enemies, obstacles, pickups,
projectiles, goal, terrain) registers one axis-aligned box and receives a
stable handle. Objects move their box every frame, probe proposed
positions with `query_move`, and remove their handle on destruction.

## Architecture

- **CollisionIndex**: handle → volume registry with weak owner association
- **BroadPhase**: candidate search strategy (brute force or octree), behind one trait
- **BoundingVolume / AABB**: center/size boxes with inclusive overlap tests
- **OwnerRef**: tagged, non-owning back reference with capability queries
- **OffscreenCuller**: maintenance pass disabling volumes far from the camera
- **Engine**: global logger and optional session-wide shared index

Handle operations never fail: unknown or removed handles get neutral
results. Only configuration and session lifecycle return `Result`.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod bounds;
pub mod index;
pub mod owner;
pub mod culling;
pub mod utils;

// Main collision namespace module
pub mod collision {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::{Engine, SharedCollisionIndex};

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Core types
    pub use crate::bounds::{AABB, BoundingVolume};
    pub use crate::index::{
        BroadPhase, BroadPhaseConfig, BruteForceBroadPhase, ColliderHandle,
        CollisionIndex, CollisionIndexConfig, MoveQuery, OctreeBroadPhase,
        MAX_OCTREE_DEPTH,
    };
    pub use crate::owner::{OwnerKind, OwnerRef};
    pub use crate::culling::{CullTarget, OffscreenCuller, OffscreenCullerConfig};
}

// Re-export math library at crate root
pub use glam;
