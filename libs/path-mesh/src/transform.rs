//! # Instance Transforms
//!
//! Placement matrices for joint and segment instances.
//!
//! Matrices are composed left to right and applied right to left: the
//! innermost (rightmost) factor acts on template-local vertices first.
//!
//! ```text
//! joint   = Translate(p) · Scale(r, r, r) · Scale(2, 2, 2)
//! segment = Translate(from) · Rotate(q) · Scale(r, h, r) · Scale(2, 0.5, 2) · Translate(0, 1, 0)
//! ```

use config::constants::{
    EPSILON, JOINT_SCALE, SEGMENT_PIVOT_OFFSET, SEGMENT_SCALE, UP_AXIS, ZERO_LENGTH_EPSILON,
};
use glam::{DMat3, DMat4, DQuat, DVec3};

/// Canonical up axis of the segment template.
pub const UP: DVec3 = DVec3::from_array(UP_AXIS);

/// Normalizes `v`, or returns zero if it is shorter than
/// [`ZERO_LENGTH_EPSILON`].
pub fn normalize_or_zero(v: DVec3) -> DVec3 {
    let length = v.length();
    if length > ZERO_LENGTH_EPSILON {
        v / length
    } else {
        DVec3::ZERO
    }
}

/// Shortest-arc rotation taking direction `from` onto direction `to`.
///
/// Returns the identity when either direction has (near) zero length.
/// Opposite directions give a half turn about an axis orthogonal to `from`.
///
/// # Example
///
/// ```rust
/// use path_mesh::transform::{from_to_rotation, UP};
/// use glam::DVec3;
///
/// let q = from_to_rotation(UP, DVec3::X);
/// assert!((q * UP - DVec3::X).length() < 1e-12);
/// ```
pub fn from_to_rotation(from: DVec3, to: DVec3) -> DQuat {
    let from = normalize_or_zero(from);
    let to = normalize_or_zero(to);

    if from == DVec3::ZERO || to == DVec3::ZERO {
        return DQuat::IDENTITY;
    }

    DQuat::from_rotation_arc(from, to)
}

/// Placement of a joint template at `position`.
///
/// The template is scaled uniformly by `radius * 2`.
pub fn joint_transform(position: DVec3, radius: f64) -> DMat4 {
    DMat4::from_translation(position)
        * DMat4::from_scale(DVec3::splat(radius))
        * DMat4::from_scale(DVec3::splat(JOINT_SCALE))
}

/// Rotation that aligns the segment template with the edge `from -> to`.
///
/// Identity for a zero-length edge.
pub fn segment_rotation(from: DVec3, to: DVec3) -> DQuat {
    from_to_rotation(UP, to - from)
}

/// Placement of a segment template spanning `from -> to`.
///
/// A template spanning local Y in [-1, 1] ends up with its bottom at `from`
/// and its top at `to`, with cross-section scaled by `radius * 2`.
pub fn segment_transform(from: DVec3, to: DVec3, radius: f64) -> DMat4 {
    let height = (to - from).length();
    let rotation = segment_rotation(from, to);

    DMat4::from_translation(from)
        * DMat4::from_quat(rotation)
        * DMat4::from_scale(DVec3::new(radius, height, radius))
        * DMat4::from_scale(DVec3::from_array(SEGMENT_SCALE))
        * DMat4::from_translation(DVec3::from_array(SEGMENT_PIVOT_OFFSET))
}

/// Matrix that transforms normals under `matrix`.
///
/// This is the inverse-transpose of the linear part, up to a positive
/// scale. It is built from cofactors so singular matrices (a zero-height
/// segment) stay finite.
pub fn normal_matrix(matrix: &DMat4) -> DMat3 {
    let linear = DMat3::from_mat4(*matrix);
    let (a, b, c) = (linear.x_axis, linear.y_axis, linear.z_axis);
    let cofactor = DMat3::from_cols(b.cross(c), c.cross(a), a.cross(b));

    if linear.determinant() < 0.0 {
        cofactor * -1.0
    } else {
        cofactor
    }
}

/// Transforms and renormalizes a normal.
///
/// Falls back to `normal` when the transformed vector collapses to zero.
pub fn transform_normal(normal_matrix: &DMat3, normal: DVec3) -> DVec3 {
    let transformed = *normal_matrix * normal;
    if transformed.length_squared() > EPSILON {
        transformed.normalize()
    } else {
        normal
    }
}
