/// CollisionIndex: broad-phase AABB registry shared by gameplay objects.
///
/// Every gameplay object that collides (player, enemies, obstacles,
/// pickups, projectiles, goal, terrain) registers one volume, moves it
/// every frame, asks `query_move` before committing a position, and
/// removes it on destruction.
///
/// All handle operations are total: an unknown or removed handle gets a
/// neutral result (no-op, `None`, empty result, identity matrix) and
/// never an error or panic. A consumer racing its own removal against one
/// more query in the same frame simply sees "gone".
///
/// Owner references are weak. The index stores the value it is given and
/// never frees or validates what it refers to. Callers must `remove` a
/// handle when its owner is destroyed; a forgotten handle keeps
/// participating in overlap tests.

use std::collections::BTreeMap;
use glam::{Mat4, Vec3};
use rustc_hash::FxHashMap;
use crate::bounds::BoundingVolume;
use crate::error::Result;
use crate::owner::OwnerRef;
use crate::utils::HandleAllocator;
use super::broad_phase::{BroadPhase, BruteForceBroadPhase};
use super::config::CollisionIndexConfig;
use super::handle::ColliderHandle;

const SOURCE: &str = "collision::Index";

/// Result of a `query_move` probe
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveQuery {
    /// At least one other volume overlaps the probe
    pub collided: bool,
    /// Every overlapping handle, ascending, without duplicates
    pub colliding: Vec<ColliderHandle>,
}

impl MoveQuery {
    fn from_hits(colliding: Vec<ColliderHandle>) -> Self {
        Self {
            collided: !colliding.is_empty(),
            colliding,
        }
    }
}

/// Broad-phase collision registry.
///
/// `O` is the owner reference type; it defaults to the tagged `OwnerRef`
/// but any value works (an entity key, an index, ...).
pub struct CollisionIndex<O = OwnerRef> {
    volumes: FxHashMap<ColliderHandle, BoundingVolume>,
    owners: FxHashMap<ColliderHandle, O>,
    handles: HandleAllocator,
    broad_phase: Box<dyn BroadPhase>,
}

impl<O> CollisionIndex<O> {
    /// Create an empty index with the brute-force broad phase
    pub fn new() -> Self {
        Self::with_broad_phase(Box::new(BruteForceBroadPhase::new()))
    }

    /// Create an empty index from a configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the broad-phase parameters are invalid.
    pub fn with_config(config: &CollisionIndexConfig) -> Result<Self> {
        Ok(Self::with_broad_phase(config.broad_phase.build()?))
    }

    /// Create an empty index using the given broad-phase strategy
    pub fn with_broad_phase(broad_phase: Box<dyn BroadPhase>) -> Self {
        Self {
            volumes: FxHashMap::default(),
            owners: FxHashMap::default(),
            handles: HandleAllocator::new(),
            broad_phase,
        }
    }

    // ===== LIFECYCLE =====

    /// Register a new volume and return its handle.
    ///
    /// Never fails. Every call returns a fresh handle, even for identical
    /// geometry. Negative or NaN size components are clamped to zero.
    pub fn register(&mut self, center: Vec3, size: Vec3, is_player: bool) -> ColliderHandle {
        let handle = ColliderHandle::from_raw(self.handles.alloc());
        if BoundingVolume::needs_clamp(size) {
            crate::collision_warn!(SOURCE, "Collider {} registered with size {}, clamped to >= 0", handle, size);
        }

        let volume = BoundingVolume::new(center, size, is_player);
        self.broad_phase.insert(handle, &volume.aabb());
        self.volumes.insert(handle, volume);

        crate::collision_debug!(
            SOURCE,
            "Collider {} registered, center: {}, size: {}, is_player: {}",
            handle, center, volume.size(), is_player
        );
        handle
    }

    /// Delete a volume and its owner association.
    ///
    /// Idempotent. Returns `true` only if the handle was live.
    pub fn remove(&mut self, handle: ColliderHandle) -> bool {
        if self.volumes.remove(&handle).is_none() {
            crate::collision_trace!(SOURCE, "remove on unknown collider {}", handle);
            return false;
        }

        self.owners.remove(&handle);
        self.broad_phase.remove(handle);
        crate::collision_debug!(SOURCE, "Collider {} removed", handle);
        true
    }

    /// Remove every volume and owner. Handle values are still never reused.
    pub fn clear(&mut self) {
        self.volumes.clear();
        self.owners.clear();
        self.broad_phase.clear();
    }

    // ===== OWNERS =====

    /// Associate (or overwrite) the owner of a live handle.
    ///
    /// Returns `false` and stores nothing if the handle is unknown, so the
    /// owner map never holds entries for volumes that do not exist.
    pub fn set_owner(&mut self, handle: ColliderHandle, owner: O) -> bool {
        if !self.volumes.contains_key(&handle) {
            crate::collision_trace!(SOURCE, "set_owner on unknown collider {}", handle);
            return false;
        }
        self.owners.insert(handle, owner);
        true
    }

    /// Owner of a handle, `None` if unset or the handle is unknown.
    pub fn owner(&self, handle: ColliderHandle) -> Option<&O> {
        self.owners.get(&handle)
    }

    // ===== MUTATION =====

    /// Overwrite center and size in place. No-op (returns `false`) if unknown.
    pub fn update_bounds(&mut self, handle: ColliderHandle, center: Vec3, size: Vec3) -> bool {
        let Some(volume) = self.volumes.get_mut(&handle) else {
            crate::collision_trace!(SOURCE, "update_bounds on unknown collider {}", handle);
            return false;
        };

        if volume.set_bounds(center, size) {
            crate::collision_warn!(SOURCE, "Collider {} updated with size {}, clamped to >= 0", handle, size);
        }
        self.broad_phase.update(handle, &volume.aabb());
        true
    }

    /// Store a transform and move the center to its translation, keeping
    /// the size. No-op (returns `false`) if unknown.
    pub fn update_transform(&mut self, handle: ColliderHandle, transform: Mat4) -> bool {
        let Some(volume) = self.volumes.get_mut(&handle) else {
            crate::collision_trace!(SOURCE, "update_transform on unknown collider {}", handle);
            return false;
        };

        volume.set_transform(transform);
        self.broad_phase.update(handle, &volume.aabb());
        true
    }

    /// Stored transform, identity if the handle is unknown.
    pub fn transform(&self, handle: ColliderHandle) -> Mat4 {
        self.volumes
            .get(&handle)
            .map(BoundingVolume::transform)
            .unwrap_or(Mat4::IDENTITY)
    }

    // ===== QUERIES =====

    /// Which volumes would `handle` overlap if its center moved to
    /// `proposed_center`?
    ///
    /// The probe uses the current size of `handle`. `handle` itself is
    /// never reported. Touching counts as overlap; zero-size volumes (and a
    /// zero-size probe) never overlap. Unknown handles and non-finite
    /// centers yield an empty result.
    pub fn query_move(&self, handle: ColliderHandle, proposed_center: Vec3) -> MoveQuery {
        let Some(current) = self.volumes.get(&handle) else {
            crate::collision_trace!(SOURCE, "query_move on unknown collider {}", handle);
            return MoveQuery::default();
        };

        if !proposed_center.is_finite() {
            crate::collision_warn!(SOURCE, "query_move for collider {} with non-finite center {}", handle, proposed_center);
            return MoveQuery::default();
        }

        let probe = current.probe_at(proposed_center);
        if !probe.is_collidable() {
            return MoveQuery::default();
        }

        let mut candidates = Vec::new();
        self.broad_phase.query_aabb(&probe.aabb(), &mut candidates);

        candidates.retain(|other| {
            *other != handle
                && self
                    .volumes
                    .get(other)
                    .is_some_and(|volume| probe.intersects(volume))
        });
        candidates.sort_unstable();
        candidates.dedup();

        MoveQuery::from_hits(candidates)
    }

    /// Handles currently overlapping `handle` (a `query_move` in place).
    pub fn overlapping(&self, handle: ColliderHandle) -> Vec<ColliderHandle> {
        match self.volumes.get(&handle) {
            Some(volume) => self.query_move(handle, volume.center()).colliding,
            None => Vec::new(),
        }
    }

    /// Snapshot of every live volume, ordered by handle.
    ///
    /// The map is an owned copy: later mutations of the index do not
    /// affect it, and it can be iterated while mutating the index.
    pub fn all_volumes(&self) -> BTreeMap<ColliderHandle, BoundingVolume> {
        self.volumes.iter().map(|(&handle, &volume)| (handle, volume)).collect()
    }

    /// Volume of a live handle
    pub fn volume(&self, handle: ColliderHandle) -> Option<&BoundingVolume> {
        self.volumes.get(&handle)
    }

    /// Whether `handle` is live
    pub fn contains(&self, handle: ColliderHandle) -> bool {
        self.volumes.contains_key(&handle)
    }

    /// Number of live volumes
    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    /// Whether no volume is registered
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// Total number of handles ever issued by this index
    pub fn issued_handles(&self) -> u64 {
        self.handles.high_water_mark()
    }
}

impl<O> Default for CollisionIndex<O> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "collision_index_tests.rs"]
mod tests;
