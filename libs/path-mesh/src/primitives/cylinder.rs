//! # Cylinder Primitive
//!
//! Generates a capped, Y-up cylinder mesh with normals, used as the segment
//! template.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{MAX_TEMPLATE_SEGMENTS, MIN_TEMPLATE_SEGMENTS};
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a capped cylinder centered on the origin along Y.
///
/// # Arguments
///
/// * `radius` - Radius of the cross-section
/// * `half_height` - The cylinder spans Y in `[-half_height, half_height]`
/// * `segments` - Number of segments around circumference
///
/// Side vertices carry radial normals; cap vertices are duplicated so the
/// caps get flat `±Y` normals.
///
/// # Example
///
/// ```rust
/// use path_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(0.5, 1.0, 16).unwrap();
/// let (min, max) = mesh.bounding_box();
/// assert_eq!(min.y, -1.0);
/// assert_eq!(max.y, 1.0);
/// ```
pub fn create_cylinder(radius: f64, half_height: f64, segments: u32) -> Result<Mesh, MeshError> {
    if !(half_height > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Cylinder half-height must be positive: {}",
            half_height
        )));
    }

    if !(radius > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Cylinder radius must be positive: {}",
            radius
        )));
    }

    if !(MIN_TEMPLATE_SEGMENTS..=MAX_TEMPLATE_SEGMENTS).contains(&segments) {
        return Err(MeshError::degenerate(format!(
            "Cylinder segments must be in {}..={}: {}",
            MIN_TEMPLATE_SEGMENTS, MAX_TEMPLATE_SEGMENTS, segments
        )));
    }

    let ring_size = segments as usize;
    let mut mesh = Mesh::with_capacity(4 * ring_size, 4 * ring_size);
    let mut normals = Vec::with_capacity(4 * ring_size);

    let directions: Vec<DVec3> = (0..segments)
        .map(|j| {
            let theta = 2.0 * PI * j as f64 / segments as f64;
            DVec3::new(theta.cos(), 0.0, -theta.sin())
        })
        .collect();

    let mut ring = |y: f64, normal: Option<DVec3>| -> Vec<u32> {
        directions
            .iter()
            .map(|d| {
                normals.push(normal.unwrap_or(*d));
                mesh.add_vertex(*d * radius + DVec3::new(0.0, y, 0.0))
            })
            .collect()
    };

    let side_bottom = ring(-half_height, None);
    let side_top = ring(half_height, None);
    let cap_bottom = ring(-half_height, Some(DVec3::NEG_Y));
    let cap_top = ring(half_height, Some(DVec3::Y));

    // Side faces: quads between the two circles
    for j in 0..ring_size {
        let j_next = (j + 1) % ring_size;

        let b0 = side_bottom[j];
        let b1 = side_bottom[j_next];
        let t0 = side_top[j];
        let t1 = side_top[j_next];

        mesh.add_triangle(b0, b1, t1);
        mesh.add_triangle(b0, t1, t0);
    }

    for j in 1..ring_size - 1 {
        mesh.add_triangle(cap_bottom[0], cap_bottom[j + 1], cap_bottom[j]);
        mesh.add_triangle(cap_top[0], cap_top[j], cap_top[j + 1]);
    }

    mesh.set_normals(normals);
    Ok(mesh)
}
