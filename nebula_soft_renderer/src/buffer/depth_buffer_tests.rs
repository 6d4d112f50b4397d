//! Unit tests for depth_buffer.rs

use super::*;

// ============================================================================
// Construction and clear
// ============================================================================

#[test]
fn test_new_depth_buffer_is_far() {
    let mut zb = DepthBuffer::new(8, 8);
    assert_eq!(zb.width(), 8);
    assert_eq!(zb.height(), 8);
    // Everything passes against +infinity
    assert!(zb.test_and_set(0, 0, 1.0e30));
}

#[test]
fn test_clear_resets_to_infinity() {
    let mut zb = DepthBuffer::new(2, 2);
    assert!(zb.test_and_set(1, 1, 0.5));
    assert!(!zb.test_and_set(1, 1, 0.5));
    zb.clear();
    assert!(zb.test_and_set(1, 1, 0.5));
}

// ============================================================================
// Test-and-set semantics
// ============================================================================

#[test]
fn test_monotonic_depth_sequence_all_pass() {
    // d1 > d2 > d3, presented nearest-last: every call wins
    let mut zb = DepthBuffer::new(1, 1);
    assert!(zb.test_and_set(0, 0, 3.0));
    assert!(zb.test_and_set(0, 0, 2.0));
    assert!(zb.test_and_set(0, 0, 1.0));
}

#[test]
fn test_out_of_order_depth_sequence() {
    // d2, d1, d3: the farther d1 must lose, d3 must still win
    let mut zb = DepthBuffer::new(1, 1);
    assert!(zb.test_and_set(0, 0, 2.0));
    assert!(!zb.test_and_set(0, 0, 3.0));
    assert!(zb.test_and_set(0, 0, 1.0));
}

#[test]
fn test_equal_depth_loses() {
    // Strictly-less: an equal depth must not rewrite the pixel
    let mut zb = DepthBuffer::new(1, 1);
    assert!(zb.test_and_set(0, 0, 1.0));
    assert!(!zb.test_and_set(0, 0, 1.0));
}

#[test]
fn test_failed_test_leaves_cell_unchanged() {
    let mut zb = DepthBuffer::new(1, 1);
    assert!(zb.test_and_set(0, 0, 2.0));
    assert!(!zb.test_and_set(0, 0, 5.0));
    // Cell still holds 2.0, so 1.5 wins but 2.5 does not
    assert!(!zb.test_and_set(0, 0, 2.5));
    assert!(zb.test_and_set(0, 0, 1.5));
}

#[test]
#[should_panic]
fn test_out_of_bounds_panics() {
    let mut zb = DepthBuffer::new(2, 2);
    zb.test_and_set(2, 0, 1.0);
}
