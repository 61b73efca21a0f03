use super::*;

// ============================================================================
// Derived bounds
// ============================================================================

#[test]
fn test_derived_min_max() {
    let volume = BoundingVolume::new(Vec3::new(5.0, 0.0, 0.0), Vec3::splat(2.0), false);
    assert_eq!(volume.half_extents(), Vec3::ONE);
    assert_eq!(volume.min(), Vec3::new(4.0, -1.0, -1.0));
    assert_eq!(volume.max(), Vec3::new(6.0, 1.0, 1.0));
    assert_eq!(volume.aabb(), AABB { min: volume.min(), max: volume.max() });
}

#[test]
fn test_derived_bounds_follow_updates() {
    let mut volume = BoundingVolume::new(Vec3::ZERO, Vec3::splat(2.0), false);
    volume.set_bounds(Vec3::new(10.0, 0.0, 0.0), Vec3::new(4.0, 2.0, 2.0));
    assert_eq!(volume.min(), Vec3::new(8.0, -1.0, -1.0));
    assert_eq!(volume.max(), Vec3::new(12.0, 1.0, 1.0));
}

#[test]
fn test_initial_transform_is_translation() {
    let volume = BoundingVolume::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ONE, true);
    assert_eq!(volume.transform(), Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));
    assert!(volume.is_player());
}

// ============================================================================
// Size clamping
// ============================================================================

#[test]
fn test_negative_size_clamped_on_create() {
    let volume = BoundingVolume::new(Vec3::ZERO, Vec3::new(-1.0, 2.0, 3.0), false);
    assert_eq!(volume.size(), Vec3::new(0.0, 2.0, 3.0));
    assert!(!volume.is_collidable());
}

#[test]
fn test_nan_size_clamped() {
    let mut volume = BoundingVolume::new(Vec3::ZERO, Vec3::ONE, false);
    let clamped = volume.set_bounds(Vec3::ZERO, Vec3::new(f32::NAN, 1.0, 1.0));
    assert!(clamped);
    assert_eq!(volume.size(), Vec3::new(0.0, 1.0, 1.0));
}

#[test]
fn test_set_bounds_reports_clamping() {
    let mut volume = BoundingVolume::new(Vec3::ZERO, Vec3::ONE, false);
    assert!(!volume.set_bounds(Vec3::ZERO, Vec3::splat(2.0)));
    assert!(!volume.set_bounds(Vec3::ZERO, Vec3::ZERO));
    assert!(volume.set_bounds(Vec3::ZERO, Vec3::new(1.0, -0.5, 1.0)));
}

// ============================================================================
// Collidability and intersection
// ============================================================================

#[test]
fn test_zero_size_component_disables_collision() {
    let a = BoundingVolume::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 2.0), false);
    let b = BoundingVolume::new(Vec3::ZERO, Vec3::splat(2.0), false);
    assert!(!a.is_collidable());
    assert!(!a.intersects(&b));
    assert!(!b.intersects(&a));
}

#[test]
fn test_zero_size_at_same_center_does_not_intersect() {
    let a = BoundingVolume::new(Vec3::ONE, Vec3::ZERO, false);
    let b = BoundingVolume::new(Vec3::ONE, Vec3::ZERO, false);
    assert!(!a.intersects(&b));
}

#[test]
fn test_non_finite_center_never_intersects() {
    let lost = BoundingVolume::new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ONE, false);
    let other = BoundingVolume::new(Vec3::ZERO, Vec3::splat(100.0), false);
    assert!(!lost.is_collidable());
    assert!(!lost.intersects(&other));
    assert!(!other.intersects(&lost));
}

#[test]
fn test_touching_volumes_intersect() {
    let a = BoundingVolume::new(Vec3::new(3.0, 0.0, 0.0), Vec3::splat(2.0), false);
    let b = BoundingVolume::new(Vec3::new(5.0, 0.0, 0.0), Vec3::splat(2.0), false);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn test_gap_means_no_intersection() {
    let a = BoundingVolume::new(Vec3::new(2.0, 0.0, 0.0), Vec3::splat(2.0), false);
    let b = BoundingVolume::new(Vec3::new(5.0, 0.0, 0.0), Vec3::splat(2.0), false);
    assert!(!a.intersects(&b));
}

// ============================================================================
// Transform path and probes
// ============================================================================

#[test]
fn test_set_transform_moves_center_keeps_size() {
    let mut volume = BoundingVolume::new(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0), false);
    let matrix = Mat4::from_scale_rotation_translation(
        Vec3::splat(4.0),
        glam::Quat::from_rotation_y(1.0),
        Vec3::new(7.0, 8.0, 9.0),
    );
    volume.set_transform(matrix);
    assert_eq!(volume.center(), Vec3::new(7.0, 8.0, 9.0));
    assert_eq!(volume.size(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(volume.transform(), matrix);
}

#[test]
fn test_probe_keeps_size_and_moves_center() {
    let volume = BoundingVolume::new(Vec3::ZERO, Vec3::splat(2.0), true);
    let probe = volume.probe_at(Vec3::new(3.0, 0.0, 0.0));
    assert_eq!(probe.center(), Vec3::new(3.0, 0.0, 0.0));
    assert_eq!(probe.size(), volume.size());
    assert_eq!(volume.center(), Vec3::ZERO);
}
