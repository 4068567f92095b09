//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_vertex_merge_epsilon_larger_than_epsilon() {
    assert!(
        VERTEX_MERGE_EPSILON >= EPSILON,
        "VERTEX_MERGE_EPSILON should be >= EPSILON"
    );
}

#[test]
fn test_zero_length_epsilon_is_small() {
    assert!(ZERO_LENGTH_EPSILON > 0.0);
    assert!(ZERO_LENGTH_EPSILON < 1e-3);
}

// =============================================================================
// PLACEMENT TESTS
// =============================================================================

#[test]
fn test_joint_scale_maps_template_to_radius() {
    let world_radius = TEMPLATE_RADIUS * DEFAULT_RADIUS * JOINT_SCALE;
    assert_eq!(world_radius, DEFAULT_RADIUS);
}

#[test]
fn test_segment_scale_maps_template_span_to_unit() {
    // Template Y in [-1, 1] -> pivot offset -> [0, 2] -> scale -> [0, 1]
    let bottom = (-TEMPLATE_HALF_HEIGHT + SEGMENT_PIVOT_OFFSET[1]) * SEGMENT_SCALE[1];
    let top = (TEMPLATE_HALF_HEIGHT + SEGMENT_PIVOT_OFFSET[1]) * SEGMENT_SCALE[1];
    assert_eq!(bottom, 0.0);
    assert_eq!(top, 1.0);
}

#[test]
fn test_segment_scale_is_uniform_across_section() {
    assert_eq!(SEGMENT_SCALE[0], SEGMENT_SCALE[2]);
    assert_eq!(SEGMENT_SCALE[0], JOINT_SCALE);
}

#[test]
fn test_up_axis_is_unit_y() {
    assert_eq!(UP_AXIS, [0.0, 1.0, 0.0]);
}

// =============================================================================
// TEMPLATE TESTS
// =============================================================================

#[test]
fn test_template_segment_range() {
    assert!(MIN_TEMPLATE_SEGMENTS >= 3);
    assert!(DEFAULT_TEMPLATE_SEGMENTS >= MIN_TEMPLATE_SEGMENTS);
    assert!(DEFAULT_TEMPLATE_SEGMENTS <= MAX_TEMPLATE_SEGMENTS);
}

#[test]
fn test_clamp_template_segments() {
    assert_eq!(clamp_template_segments(0), MIN_TEMPLATE_SEGMENTS);
    assert_eq!(clamp_template_segments(16), 16);
    assert_eq!(clamp_template_segments(u32::MAX), MAX_TEMPLATE_SEGMENTS);
}

// =============================================================================
// COLOR TESTS
// =============================================================================

#[test]
fn test_gradient_runs_white_to_black() {
    assert_eq!(GRADIENT_START_COLOR, [1.0, 1.0, 1.0, 1.0]);
    assert_eq!(GRADIENT_END_COLOR, [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn test_colors_in_unit_range() {
    for color in [GRADIENT_START_COLOR, GRADIENT_END_COLOR, DEFAULT_COLOR] {
        for channel in color {
            assert!((0.0..=1.0).contains(&channel));
        }
    }
}
