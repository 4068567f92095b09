//! # Configuration Constants
//!
//! Centralized constants for the path mesh pipeline. Placement scale
//! factors, gradient colors, template dimensions and precision values are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Placement**: Scale and offset factors applied to template instances
//! - **Templates**: Dimensions and tessellation of the built-in templates
//! - **Limits**: Maximum values for safety bounds
//! - **Colors**: Gradient endpoints and fallback color

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Length below which a direction vector is treated as zero.
///
/// Normalizing a vector shorter than this yields the zero vector, and a
/// rotation towards the zero vector is the identity. Matches the threshold
/// used by common game engines for `normalized`.
///
/// # Example
///
/// ```rust
/// use config::constants::ZERO_LENGTH_EPSILON;
///
/// let edge_length: f64 = 1e-7;
/// assert!(edge_length <= ZERO_LENGTH_EPSILON);
/// ```
pub const ZERO_LENGTH_EPSILON: f64 = 1e-5;

/// Epsilon for vertex deduplication.
///
/// Tolerance used when welding nearly-identical vertices during the
/// optional optimize pass.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_MERGE_EPSILON;
///
/// fn vertices_should_merge(v1: [f64; 3], v2: [f64; 3]) -> bool {
///     let dx = v1[0] - v2[0];
///     let dy = v1[1] - v2[1];
///     let dz = v1[2] - v2[2];
///     (dx * dx + dy * dy + dz * dz).sqrt() < VERTEX_MERGE_EPSILON
/// }
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

/// Tolerance for comparing color channels when welding vertices.
pub const COLOR_MERGE_EPSILON: f32 = 1e-6;

// =============================================================================
// PLACEMENT CONSTANTS
// =============================================================================

/// Default tube radius.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_RADIUS;
///
/// let user_radius: Option<f64> = None;
/// assert_eq!(user_radius.unwrap_or(DEFAULT_RADIUS), 1.0);
/// ```
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Uniform scale applied to a joint template after the radius scale.
///
/// Joint transform: `Translate(p) · Scale(r, r, r) · Scale(2, 2, 2)`.
pub const JOINT_SCALE: f64 = 2.0;

/// Non-uniform scale applied to a segment template after the radius and
/// height scale.
///
/// Maps the template's Y span of 2 (after the pivot offset, `[0, 2]`) onto
/// `[0, 1]` so the subsequent height scale lands it on the edge length.
pub const SEGMENT_SCALE: [f64; 3] = [2.0, 0.5, 2.0];

/// Offset applied to a segment template before any scale.
///
/// Moves the template's `[-1, 1]` Y span to `[0, 2]` so its bottom sits on
/// the segment start.
pub const SEGMENT_PIVOT_OFFSET: [f64; 3] = [0.0, 1.0, 0.0];

/// Canonical "up" axis of the segment template.
pub const UP_AXIS: [f64; 3] = [0.0, 1.0, 0.0];

// =============================================================================
// TEMPLATE CONSTANTS
// =============================================================================

/// Radius of the built-in joint and segment templates.
///
/// Combined with [`JOINT_SCALE`] and [`SEGMENT_SCALE`] this yields a tube
/// whose world radius equals the builder radius.
pub const TEMPLATE_RADIUS: f64 = 0.5;

/// Half-height of the built-in segment template along Y.
///
/// Templates span local Y in `[-TEMPLATE_HALF_HEIGHT, TEMPLATE_HALF_HEIGHT]`.
pub const TEMPLATE_HALF_HEIGHT: f64 = 1.0;

/// Default number of segments around the circumference of the built-in
/// templates.
pub const DEFAULT_TEMPLATE_SEGMENTS: u32 = 16;

/// Minimum number of segments for a built-in template.
pub const MIN_TEMPLATE_SEGMENTS: u32 = 3;

/// Maximum number of segments for a built-in template.
///
/// Safety limit to prevent excessive tessellation.
pub const MAX_TEMPLATE_SEGMENTS: u32 = 1000;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a combined mesh.
///
/// Triangle indices are `u32`, and this keeps combined meshes well below
/// that limit.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Gradient color at the start of the path (t = 0): white.
///
/// RGBA values in range [0.0, 1.0].
pub const GRADIENT_START_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Gradient color at the end of the path (t = 1): black.
pub const GRADIENT_END_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Default color when none is specified (light gray).
///
/// Used to pad the color buffer when merging an uncolored mesh with a
/// colored one.
pub const DEFAULT_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps a requested template tessellation to the supported range.
///
/// # Example
///
/// ```rust
/// use config::constants::{clamp_template_segments, MIN_TEMPLATE_SEGMENTS};
///
/// assert_eq!(clamp_template_segments(1), MIN_TEMPLATE_SEGMENTS);
/// assert_eq!(clamp_template_segments(24), 24);
/// ```
pub fn clamp_template_segments(segments: u32) -> u32 {
    segments.clamp(MIN_TEMPLATE_SEGMENTS, MAX_TEMPLATE_SEGMENTS)
}
