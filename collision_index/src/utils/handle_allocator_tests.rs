use super::*;
use std::collections::HashSet;

// ============================================================================
// Basic allocation tests
// ============================================================================

#[test]
fn test_sequential_alloc_starts_at_zero() {
    let mut alloc = HandleAllocator::new();
    assert_eq!(alloc.alloc(), 0);
    assert_eq!(alloc.alloc(), 1);
    assert_eq!(alloc.alloc(), 2);
}

#[test]
fn test_new_has_issued_nothing() {
    let alloc = HandleAllocator::default();
    assert_eq!(alloc.high_water_mark(), 0);
}

#[test]
fn test_high_water_mark_tracks_issued_count() {
    let mut alloc = HandleAllocator::new();
    alloc.alloc();
    alloc.alloc();
    assert_eq!(alloc.high_water_mark(), 2);
    assert_eq!(alloc.alloc(), 2);
    assert_eq!(alloc.high_water_mark(), 3);
}

// ============================================================================
// Stress / pattern tests
// ============================================================================

#[test]
fn test_values_unique_and_increasing() {
    let mut alloc = HandleAllocator::new();
    let mut seen = HashSet::new();
    let mut previous = None;

    for _ in 0..200 {
        let value = alloc.alloc();
        assert!(seen.insert(value), "duplicate handle {}", value);
        if let Some(prev) = previous {
            assert!(value > prev);
        }
        previous = Some(value);
    }

    assert_eq!(alloc.high_water_mark(), 200);
}
