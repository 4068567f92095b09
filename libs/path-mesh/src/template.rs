//! # Template Meshes
//!
//! Validation of caller-provided templates and the built-in unit templates.
//!
//! A template is a plain [`Mesh`] used as a stamp. Templates are expected to
//! span local Y in `[-1, 1]`; the segment template's local Y drives the
//! per-vertex color along the segment.

use crate::error::{MeshError, TemplateRole};
use crate::mesh::Mesh;
use crate::primitives::{create_cylinder, create_sphere};
use config::constants::{clamp_template_segments, TEMPLATE_HALF_HEIGHT, TEMPLATE_RADIUS};

/// Checks that `template` can be stamped.
///
/// A valid template has at least one vertex, finite positions, triangle
/// indices in range, and either no normals or one normal per vertex.
pub fn validate_template(role: TemplateRole, template: &Mesh) -> Result<(), MeshError> {
    if template.is_empty() {
        return Err(MeshError::invalid_template(role, "template has no vertices"));
    }

    if let Some(i) = template.vertices().iter().position(|v| !v.is_finite()) {
        return Err(MeshError::invalid_template(
            role,
            format!("vertex {} is not finite", i),
        ));
    }

    let vertex_count = template.vertex_count();
    for (t, tri) in template.triangles().iter().enumerate() {
        if let Some(index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::invalid_template(
                role,
                format!(
                    "triangle {} references vertex {} of {}",
                    t, index, vertex_count
                ),
            ));
        }
    }

    if let Some(normals) = template.normals() {
        if normals.len() != vertex_count {
            return Err(MeshError::invalid_template(
                role,
                format!("{} normals for {} vertices", normals.len(), vertex_count),
            ));
        }
    }

    Ok(())
}

/// Unit joint template: a sphere of radius 0.5 centered on the origin.
///
/// With the joint scale of `radius * 2` the stamped sphere has the tube
/// radius.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_TEMPLATE_SEGMENTS;
/// use path_mesh::template::unit_joint;
///
/// let joint = unit_joint(DEFAULT_TEMPLATE_SEGMENTS).unwrap();
/// let (min, max) = joint.bounding_box();
/// assert!(max.y <= 0.5 && min.y >= -0.5);
/// ```
pub fn unit_joint(segments: u32) -> Result<Mesh, MeshError> {
    create_sphere(TEMPLATE_RADIUS, clamp_template_segments(segments))
}

/// Unit segment template: a capped cylinder of radius 0.5 spanning Y in
/// `[-1, 1]`.
pub fn unit_segment(segments: u32) -> Result<Mesh, MeshError> {
    create_cylinder(
        TEMPLATE_RADIUS,
        TEMPLATE_HALF_HEIGHT,
        clamp_template_segments(segments),
    )
}
