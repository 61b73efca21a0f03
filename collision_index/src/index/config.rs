use crate::bounds::AABB;
use crate::error::Result;
use super::broad_phase::{BroadPhase, BruteForceBroadPhase};
use super::octree_broad_phase::OctreeBroadPhase;

/// Broad-phase strategy selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BroadPhaseConfig {
    /// Flat O(n) scan (default)
    BruteForce,
    /// Static octree over fixed world bounds
    Octree {
        /// Region covered by the tree; boxes outside it are kept in the root
        world_bounds: AABB,
        /// Tree depth (root = 0), at most `MAX_OCTREE_DEPTH`
        max_depth: u32,
    },
}

impl Default for BroadPhaseConfig {
    fn default() -> Self {
        BroadPhaseConfig::BruteForce
    }
}

impl BroadPhaseConfig {
    /// Build the configured broad phase.
    pub(crate) fn build(&self) -> Result<Box<dyn BroadPhase>> {
        match *self {
            BroadPhaseConfig::BruteForce => Ok(Box::new(BruteForceBroadPhase::new())),
            BroadPhaseConfig::Octree { world_bounds, max_depth } => {
                Ok(Box::new(OctreeBroadPhase::new(world_bounds, max_depth)?))
            }
        }
    }
}

/// Collision index configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CollisionIndexConfig {
    /// Candidate search strategy. Query results do not depend on it.
    pub broad_phase: BroadPhaseConfig,
}
