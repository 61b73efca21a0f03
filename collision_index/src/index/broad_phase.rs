/// Broad-phase strategies for collision queries.
///
/// A BroadPhase returns candidate handles whose stored AABB intersects a
/// query box. The CollisionIndex owns the authoritative volumes and runs
/// the exact test on every candidate, so strategies only have to be
/// conservative: never miss a box that intersects (touching included).
///
/// Implementations: brute force (flat scan), octree.

use rustc_hash::FxHashMap;
use crate::bounds::AABB;
use super::handle::ColliderHandle;

/// Trait for spatial indexing of collision volumes.
///
/// The CollisionIndex keeps its broad phase in sync on every register,
/// update and remove.
pub trait BroadPhase: Send + Sync {
    /// Insert a handle with its world-space AABB.
    fn insert(&mut self, handle: ColliderHandle, aabb: &AABB);

    /// Remove a handle. Unknown handles are ignored.
    fn remove(&mut self, handle: ColliderHandle);

    /// Update a handle's AABB (inserts it if absent).
    fn update(&mut self, handle: ColliderHandle, aabb: &AABB);

    /// Append every stored handle whose AABB intersects `aabb` (inclusive)
    /// to `results`. Order is unspecified.
    fn query_aabb(&self, aabb: &AABB, results: &mut Vec<ColliderHandle>);

    /// Remove all handles.
    fn clear(&mut self);

    /// Number of stored handles.
    fn len(&self) -> usize;

    /// Whether nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Brute-force broad phase: O(n) scan over every stored box.
///
/// The baseline strategy. Suitable for the tens of objects a gameplay
/// scene typically registers.
pub struct BruteForceBroadPhase {
    boxes: FxHashMap<ColliderHandle, AABB>,
}

impl BruteForceBroadPhase {
    pub fn new() -> Self {
        Self {
            boxes: FxHashMap::default(),
        }
    }
}

impl Default for BruteForceBroadPhase {
    fn default() -> Self {
        Self::new()
    }
}

impl BroadPhase for BruteForceBroadPhase {
    fn insert(&mut self, handle: ColliderHandle, aabb: &AABB) {
        self.boxes.insert(handle, *aabb);
    }

    fn remove(&mut self, handle: ColliderHandle) {
        self.boxes.remove(&handle);
    }

    fn update(&mut self, handle: ColliderHandle, aabb: &AABB) {
        self.boxes.insert(handle, *aabb);
    }

    fn query_aabb(&self, aabb: &AABB, results: &mut Vec<ColliderHandle>) {
        results.extend(
            self.boxes
                .iter()
                .filter(|(_, stored)| stored.intersects(aabb))
                .map(|(&handle, _)| handle),
        );
    }

    fn clear(&mut self) {
        self.boxes.clear();
    }

    fn len(&self) -> usize {
        self.boxes.len()
    }
}
