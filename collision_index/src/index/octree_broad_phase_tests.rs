use super::*;
use crate::error::Error;
use crate::index::broad_phase::BruteForceBroadPhase;

fn make_aabb(min: Vec3, max: Vec3) -> AABB {
    AABB { min, max }
}

fn world() -> AABB {
    make_aabb(Vec3::splat(-100.0), Vec3::splat(100.0))
}

fn h(raw: u64) -> ColliderHandle {
    ColliderHandle::from_raw(raw)
}

fn sorted_query(bp: &dyn BroadPhase, aabb: &AABB) -> Vec<ColliderHandle> {
    let mut results = Vec::new();
    bp.query_aabb(aabb, &mut results);
    results.sort();
    results
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_creates_correct_node_count() {
    assert_eq!(OctreeBroadPhase::new(world(), 0).unwrap().nodes.len(), 1);
    assert_eq!(OctreeBroadPhase::new(world(), 1).unwrap().nodes.len(), 9);
    assert_eq!(OctreeBroadPhase::new(world(), 2).unwrap().nodes.len(), 73);
}

#[test]
fn test_new_rejects_inverted_bounds() {
    let result = OctreeBroadPhase::new(make_aabb(Vec3::ONE, Vec3::ZERO), 2);
    assert!(matches!(result, Err(Error::InvalidParameter(_))));
}

#[test]
fn test_new_rejects_non_finite_bounds() {
    let result = OctreeBroadPhase::new(make_aabb(Vec3::ZERO, Vec3::splat(f32::INFINITY)), 2);
    assert!(matches!(result, Err(Error::InvalidParameter(_))));
}

#[test]
fn test_new_rejects_excessive_depth() {
    let result = OctreeBroadPhase::new(world(), MAX_OCTREE_DEPTH + 1);
    assert!(matches!(result, Err(Error::InvalidParameter(_))));
}

// ============================================================================
// Placement
// ============================================================================

#[test]
fn test_small_box_descends_to_leaf() {
    let mut octree = OctreeBroadPhase::new(world(), 2).unwrap();
    octree.insert(h(0), &make_aabb(Vec3::splat(60.0), Vec3::splat(61.0)));
    let (node, _) = octree.locations[&h(0)];
    assert_ne!(node, ROOT);
    assert_eq!(octree.nodes[node].first_child, 0);
}

#[test]
fn test_straddling_box_stays_in_root() {
    let mut octree = OctreeBroadPhase::new(world(), 3).unwrap();
    octree.insert(h(0), &make_aabb(Vec3::splat(-1.0), Vec3::splat(1.0)));
    assert!(octree.nodes[ROOT].handles.contains(&h(0)));
}

#[test]
fn test_box_outside_world_goes_to_root() {
    let mut octree = OctreeBroadPhase::new(world(), 3).unwrap();
    octree.insert(h(0), &make_aabb(Vec3::splat(-200.0), Vec3::splat(-150.0)));
    assert!(octree.nodes[ROOT].handles.contains(&h(0)));

    let found = sorted_query(&octree, &make_aabb(Vec3::splat(-160.0), Vec3::splat(-155.0)));
    assert_eq!(found, vec![h(0)]);
}

#[test]
fn test_update_moves_box_between_nodes() {
    let mut octree = OctreeBroadPhase::new(world(), 3).unwrap();
    octree.insert(h(0), &make_aabb(Vec3::splat(50.0), Vec3::splat(60.0)));
    let (node1, _) = octree.locations[&h(0)];

    octree.update(h(0), &make_aabb(Vec3::splat(-60.0), Vec3::splat(-50.0)));
    let (node2, _) = octree.locations[&h(0)];

    assert_ne!(node1, node2);
    assert!(!octree.nodes[node1].handles.contains(&h(0)));
    assert!(octree.nodes[node2].handles.contains(&h(0)));
    assert_eq!(octree.len(), 1);
}

#[test]
fn test_remove_is_idempotent() {
    let mut octree = OctreeBroadPhase::new(world(), 3).unwrap();
    octree.insert(h(0), &make_aabb(Vec3::ZERO, Vec3::ONE));
    octree.remove(h(0));
    octree.remove(h(0));
    assert!(octree.is_empty());
    assert!(sorted_query(&octree, &world()).is_empty());
}

#[test]
fn test_clear_removes_all() {
    let mut octree = OctreeBroadPhase::new(world(), 3).unwrap();
    for i in 0..10u64 {
        let pos = i as f32 * 5.0 - 25.0;
        octree.insert(h(i), &make_aabb(Vec3::splat(pos), Vec3::splat(pos + 2.0)));
    }
    assert_eq!(octree.len(), 10);

    octree.clear();
    assert_eq!(octree.len(), 0);
    assert!(sorted_query(&octree, &world()).is_empty());
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_touching_across_node_boundary_is_found() {
    let mut octree = OctreeBroadPhase::new(world(), 3).unwrap();
    // Lives entirely in the high-x half, touching the x = 0 split plane
    octree.insert(h(0), &make_aabb(Vec3::new(0.0, 10.0, 10.0), Vec3::new(2.0, 12.0, 12.0)));

    // Probe entirely in the low-x half, touching the same plane
    let probe = make_aabb(Vec3::new(-2.0, 10.0, 10.0), Vec3::new(0.0, 12.0, 12.0));
    assert_eq!(sorted_query(&octree, &probe), vec![h(0)]);
}

#[test]
fn test_no_duplicates_in_results() {
    let mut octree = OctreeBroadPhase::new(world(), 3).unwrap();
    octree.insert(h(0), &make_aabb(Vec3::splat(-1.0), Vec3::splat(1.0)));

    let mut results = Vec::new();
    octree.query_aabb(&world(), &mut results);
    assert_eq!(results.iter().filter(|&&k| k == h(0)).count(), 1);
}

#[test]
fn test_matches_brute_force_on_grid_scene() {
    let mut octree = OctreeBroadPhase::new(world(), 4).unwrap();
    let mut brute = BruteForceBroadPhase::new();

    let mut raw = 0u64;
    for x in -4i32..=4 {
        for z in -4i32..=4 {
            let center = Vec3::new(x as f32 * 11.0, (x * z) as f32 * 0.5, z as f32 * 9.0);
            let size = Vec3::new(2.0 + (x.abs() as f32), 3.0, 2.0 + (z.abs() as f32));
            let aabb = AABB::from_center_size(center, size);
            octree.insert(h(raw), &aabb);
            brute.insert(h(raw), &aabb);
            raw += 1;
        }
    }

    for probe_x in -6..=6 {
        for probe_z in -6..=6 {
            let probe = AABB::from_center_size(
                Vec3::new(probe_x as f32 * 8.0, 0.0, probe_z as f32 * 8.0),
                Vec3::new(6.0, 40.0, 6.0),
            );
            assert_eq!(
                sorted_query(&octree, &probe),
                sorted_query(&brute, &probe),
                "mismatch at probe ({}, {})", probe_x, probe_z
            );
        }
    }
}
