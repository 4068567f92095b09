//! # Sphere Primitive
//!
//! Generates a Y-up sphere mesh with normals, used as the joint template.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{MAX_TEMPLATE_SEGMENTS, MIN_TEMPLATE_SEGMENTS};
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a sphere mesh using latitude/longitude tessellation.
///
/// # Arguments
///
/// * `radius` - The radius of the sphere
/// * `segments` - Number of segments around the circumference
///
/// # Algorithm
///
/// - num_rings = (segments + 1) / 2
/// - Each ring at polar angle phi = 180° * (i + 0.5) / num_rings, measured
///   from +Y
/// - No pole vertices; the first and last rings are closed with fans
///
/// Normals point radially outwards.
///
/// # Example
///
/// ```rust
/// use path_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(0.5, 16).unwrap();
/// assert!(mesh.vertex_count() > 0);
/// assert_eq!(mesh.normals().unwrap().len(), mesh.vertex_count());
/// ```
pub fn create_sphere(radius: f64, segments: u32) -> Result<Mesh, MeshError> {
    if !(radius > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Sphere radius must be positive: {}",
            radius
        )));
    }

    if !(MIN_TEMPLATE_SEGMENTS..=MAX_TEMPLATE_SEGMENTS).contains(&segments) {
        return Err(MeshError::degenerate(format!(
            "Sphere segments must be in {}..={}: {}",
            MIN_TEMPLATE_SEGMENTS, MAX_TEMPLATE_SEGMENTS, segments
        )));
    }

    let num_rings = (segments + 1) / 2;
    let vertex_count = num_rings as usize * segments as usize;
    let mut mesh = Mesh::with_capacity(vertex_count, 2 * vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);

    let mut rings: Vec<Vec<u32>> = Vec::with_capacity(num_rings as usize);

    for i in 0..num_rings {
        // Polar angle (0 = top, PI = bottom)
        let phi = PI * (i as f64 + 0.5) / num_rings as f64;
        let ring_radius = phi.sin();
        let y = phi.cos();

        let ring_indices = (0..segments)
            .map(|j| {
                let theta = 2.0 * PI * j as f64 / segments as f64;
                let direction = DVec3::new(ring_radius * theta.cos(), y, -ring_radius * theta.sin());
                normals.push(direction);
                mesh.add_vertex(direction * radius)
            })
            .collect();

        rings.push(ring_indices);
    }

    // Top cap
    let first_ring = &rings[0];
    for j in 1..segments - 1 {
        mesh.add_triangle(
            first_ring[0],
            first_ring[j as usize],
            first_ring[(j + 1) as usize],
        );
    }

    // Bands between adjacent rings
    for pair in rings.windows(2) {
        let (ring_a, ring_b) = (&pair[0], &pair[1]);

        for j in 0..segments as usize {
            let j_next = (j + 1) % segments as usize;

            let a0 = ring_a[j];
            let a1 = ring_a[j_next];
            let b0 = ring_b[j];
            let b1 = ring_b[j_next];

            mesh.add_triangle(a0, b0, b1);
            mesh.add_triangle(a0, b1, a1);
        }
    }

    // Bottom cap (reversed)
    let last_ring = &rings[(num_rings - 1) as usize];
    for j in 1..segments - 1 {
        mesh.add_triangle(
            last_ring[0],
            last_ring[(j + 1) as usize],
            last_ring[j as usize],
        );
    }

    mesh.set_normals(normals);
    Ok(mesh)
}
