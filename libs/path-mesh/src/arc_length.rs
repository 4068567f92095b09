//! # Arc-Length Parameterization
//!
//! Normalized path parameter used for the color gradient.
//!
//! The parameter accumulates **squared** segment lengths and divides by the
//! total squared length. It matches true arc length only when every segment
//! has the same length; the squared form is kept because it defines the
//! gradient's look.

use glam::DVec3;

/// Gradient parameters of one path edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentParam {
    /// Parameter at the start of the edge
    pub t0: f64,
    /// Parameter at the end of the edge
    pub t1: f64,
    /// Squared edge length
    pub length_squared: f64,
}

/// Sum of squared distances between consecutive points.
///
/// # Example
///
/// ```rust
/// use path_mesh::arc_length::total_length_squared;
/// use glam::DVec3;
///
/// let points = [DVec3::ZERO, DVec3::new(3.0, 0.0, 0.0), DVec3::new(3.0, 1.0, 0.0)];
/// assert_eq!(total_length_squared(&points), 10.0);
/// ```
pub fn total_length_squared(points: &[DVec3]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[1].distance_squared(pair[0]))
        .sum()
}

/// Computes `t0`/`t1` for every edge of the path.
///
/// Returns one entry per consecutive point pair. When the total squared
/// length is zero (all points coincide) every parameter is 0.
pub fn segment_params(points: &[DVec3]) -> Vec<SegmentParam> {
    let total = total_length_squared(points);
    let mut offset = 0.0;

    points
        .windows(2)
        .map(|pair| {
            let length_squared = pair[1].distance_squared(pair[0]);
            let (t0, t1) = if total > 0.0 {
                (offset / total, (offset + length_squared) / total)
            } else {
                (0.0, 0.0)
            };
            offset += length_squared;
            SegmentParam {
                t0,
                t1,
                length_squared,
            }
        })
        .collect()
}
