/// OctreeBroadPhase: static octree for collision candidate queries.
///
/// Single-node placement: each box is stored in exactly one node, the
/// deepest node whose AABB fully contains it. A box that straddles a child
/// boundary stays in the parent; a box outside the world bounds is kept in
/// the root, so nothing is ever dropped.
///
/// The tree is pre-allocated at construction time with a fixed `max_depth`.
/// All 8^d nodes exist regardless of occupancy.

use rustc_hash::FxHashMap;
use glam::Vec3;
use crate::bounds::AABB;
use crate::error::Result;
use super::broad_phase::BroadPhase;
use super::handle::ColliderHandle;

/// Deepest allowed tree (depth 6 = 299 593 pre-allocated nodes).
pub const MAX_OCTREE_DEPTH: u32 = 6;

/// Index of the root node in the flat node array.
const ROOT: usize = 0;

/// A single node in the octree.
struct OctreeNode {
    /// World-space AABB of this node
    aabb: AABB,
    /// Index of the first child in the flat array (0 = leaf)
    first_child: usize,
    /// Handles stored in this node
    handles: Vec<ColliderHandle>,
}

/// Static octree broad phase.
pub struct OctreeBroadPhase {
    /// Flat array of all octree nodes (depth-first layout)
    nodes: Vec<OctreeNode>,
    /// Maximum depth of the tree (root = depth 0)
    max_depth: u32,
    /// Reverse lookup: handle → (node index, stored AABB)
    locations: FxHashMap<ColliderHandle, (usize, AABB)>,
    /// subtree_sizes[d] = node count of a subtree of depth d
    subtree_sizes: Vec<usize>,
}

impl OctreeBroadPhase {
    /// Create a new static octree over `world_bounds`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the bounds are not finite, if
    /// min > max on any axis, or if `max_depth` exceeds `MAX_OCTREE_DEPTH`.
    pub fn new(world_bounds: AABB, max_depth: u32) -> Result<Self> {
        if !world_bounds.is_valid() {
            return Err(crate::collision_err!(
                "collision::Octree",
                "World bounds must be finite with min <= max, got min={} max={}",
                world_bounds.min, world_bounds.max
            ));
        }
        if max_depth > MAX_OCTREE_DEPTH {
            return Err(crate::collision_err!(
                "collision::Octree",
                "max_depth {} exceeds the limit of {}",
                max_depth, MAX_OCTREE_DEPTH
            ));
        }

        let total_nodes = Self::total_node_count(max_depth);
        let mut nodes = Vec::with_capacity(total_nodes);
        Self::build_recursive(&mut nodes, &world_bounds, 0, max_depth);
        debug_assert_eq!(nodes.len(), total_nodes);

        let subtree_sizes: Vec<usize> = (0..=max_depth).map(Self::total_node_count).collect();

        crate::collision_debug!(
            "collision::Octree",
            "Octree created: depth {}, {} nodes",
            max_depth, total_nodes
        );

        Ok(Self {
            nodes,
            max_depth,
            locations: FxHashMap::default(),
            subtree_sizes,
        })
    }

    /// World bounds covered by the root node
    pub fn world_bounds(&self) -> AABB {
        self.nodes[ROOT].aabb
    }

    /// Total number of nodes for a given depth: (8^(d+1) - 1) / 7
    fn total_node_count(max_depth: u32) -> usize {
        let mut count = 0usize;
        let mut level_count = 1usize;
        for _ in 0..=max_depth {
            count += level_count;
            level_count *= 8;
        }
        count
    }

    fn build_recursive(nodes: &mut Vec<OctreeNode>, aabb: &AABB, depth: u32, max_depth: u32) {
        let node_index = nodes.len();
        nodes.push(OctreeNode {
            aabb: *aabb,
            first_child: 0,
            handles: Vec::new(),
        });

        if depth >= max_depth {
            return;
        }

        let center = aabb.center();
        nodes[node_index].first_child = nodes.len();

        for octant in 0..8u8 {
            let child_aabb = Self::octant_aabb(aabb, &center, octant);
            Self::build_recursive(nodes, &child_aabb, depth + 1, max_depth);
        }
    }

    /// AABB of octant 0–7. Bit layout: bit0 = X, bit1 = Y, bit2 = Z (0 = low half).
    fn octant_aabb(parent: &AABB, center: &Vec3, octant: u8) -> AABB {
        AABB {
            min: Vec3::new(
                if octant & 1 == 0 { parent.min.x } else { center.x },
                if octant & 2 == 0 { parent.min.y } else { center.y },
                if octant & 4 == 0 { parent.min.z } else { center.z },
            ),
            max: Vec3::new(
                if octant & 1 == 0 { center.x } else { parent.max.x },
                if octant & 2 == 0 { center.y } else { parent.max.y },
                if octant & 4 == 0 { center.z } else { parent.max.z },
            ),
        }
    }

    /// Octant of a point relative to a center (same bit layout as `octant_aabb`).
    fn point_octant(center: &Vec3, point: &Vec3) -> u8 {
        ((point.x >= center.x) as u8)
            | (((point.y >= center.y) as u8) << 1)
            | (((point.z >= center.z) as u8) << 2)
    }

    /// Deepest node that fully contains `aabb`.
    ///
    /// If both corners fall into the same octant the box fits in that
    /// child; otherwise it straddles a boundary and stays here.
    fn find_target_node(&self, aabb: &AABB) -> usize {
        if !self.nodes[ROOT].aabb.contains(aabb) {
            return ROOT;
        }

        let mut node_idx = ROOT;
        let mut depth = 0;

        loop {
            let first_child = self.nodes[node_idx].first_child;
            if depth >= self.max_depth || first_child == 0 {
                return node_idx;
            }

            let center = self.nodes[node_idx].aabb.center();
            let min_oct = Self::point_octant(&center, &aabb.min);
            let max_oct = Self::point_octant(&center, &aabb.max);
            if min_oct != max_oct {
                return node_idx;
            }

            node_idx = first_child + self.subtree_offset(min_oct, self.max_depth - depth - 1);
            depth += 1;
        }
    }

    fn subtree_offset(&self, octant: u8, remaining_depth: u32) -> usize {
        octant as usize * self.subtree_sizes[remaining_depth as usize]
    }

    /// Test handles stored at this node, then descend into every child
    /// whose node box intersects the query (inclusive, so touching boxes
    /// on a node boundary are never pruned).
    fn query_recursive(
        &self,
        node_idx: usize,
        aabb: &AABB,
        results: &mut Vec<ColliderHandle>,
        depth: u32,
    ) {
        let node = &self.nodes[node_idx];

        for handle in &node.handles {
            if let Some((_, stored)) = self.locations.get(handle) {
                if stored.intersects(aabb) {
                    results.push(*handle);
                }
            }
        }

        if depth >= self.max_depth || node.first_child == 0 {
            return;
        }

        for octant in 0..8u8 {
            let child_idx = node.first_child
                + self.subtree_offset(octant, self.max_depth - depth - 1);
            if self.nodes[child_idx].aabb.intersects(aabb) {
                self.query_recursive(child_idx, aabb, results, depth + 1);
            }
        }
    }

    fn detach(&mut self, handle: ColliderHandle, node_idx: usize) {
        let handles = &mut self.nodes[node_idx].handles;
        if let Some(pos) = handles.iter().position(|&h| h == handle) {
            handles.swap_remove(pos);
        }
    }
}

impl BroadPhase for OctreeBroadPhase {
    fn insert(&mut self, handle: ColliderHandle, aabb: &AABB) {
        self.update(handle, aabb);
    }

    fn remove(&mut self, handle: ColliderHandle) {
        if let Some((node_idx, _)) = self.locations.remove(&handle) {
            self.detach(handle, node_idx);
        }
    }

    fn update(&mut self, handle: ColliderHandle, aabb: &AABB) {
        let target = self.find_target_node(aabb);

        if let Some(entry) = self.locations.get_mut(&handle) {
            if entry.0 == target {
                // Same node: only the stored box changes
                entry.1 = *aabb;
                return;
            }
            let old = entry.0;
            self.detach(handle, old);
        }

        self.nodes[target].handles.push(handle);
        self.locations.insert(handle, (target, *aabb));
    }

    fn query_aabb(&self, aabb: &AABB, results: &mut Vec<ColliderHandle>) {
        self.query_recursive(ROOT, aabb, results, 0);
    }

    fn clear(&mut self) {
        for node in &mut self.nodes {
            node.handles.clear();
        }
        self.locations.clear();
    }

    fn len(&self) -> usize {
        self.locations.len()
    }
}

#[cfg(test)]
#[path = "octree_broad_phase_tests.rs"]
mod tests;
