//! # Mesh Combining
//!
//! Concatenates placed template instances into a single mesh.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MAX_VERTICES;
use glam::DMat4;

/// One template stamp: the template, its per-vertex colors and its
/// placement.
#[derive(Debug, Clone)]
pub struct CombineInstance<'a> {
    /// Template mesh (borrowed, never modified)
    pub template: &'a Mesh,
    /// One color per template vertex
    pub colors: Vec<[f32; 4]>,
    /// Template-local to combined-mesh transform
    pub transform: DMat4,
}

impl<'a> CombineInstance<'a> {
    /// Creates an instance with every vertex tinted `color`.
    pub fn uniform(template: &'a Mesh, color: [f32; 4], transform: DMat4) -> Self {
        Self {
            template,
            colors: vec![color; template.vertex_count()],
            transform,
        }
    }
}

/// Combines instances into one mesh.
///
/// Every instance's vertices are transformed into the common frame, its
/// normals by the matching normal matrix, and its triangle indices offset
/// by the number of vertices already emitted. If any template lacks normals
/// the result gets smooth normals computed from its faces.
///
/// # Example
///
/// ```rust
/// use path_mesh::combine::{combine, CombineInstance};
/// use path_mesh::Mesh;
/// use glam::{DMat4, DVec3};
///
/// let mut tri = Mesh::new();
/// tri.add_vertex(DVec3::ZERO);
/// tri.add_vertex(DVec3::X);
/// tri.add_vertex(DVec3::Y);
/// tri.add_triangle(0, 1, 2);
///
/// let mesh = combine(vec![
///     CombineInstance::uniform(&tri, [1.0; 4], DMat4::IDENTITY),
///     CombineInstance::uniform(&tri, [0.0, 0.0, 0.0, 1.0], DMat4::from_translation(DVec3::Z)),
/// ])
/// .unwrap();
/// assert_eq!(mesh.triangle(1), [3, 4, 5]);
/// ```
pub fn combine(instances: Vec<CombineInstance<'_>>) -> Result<Mesh, MeshError> {
    let vertex_total: usize = instances.iter().map(|i| i.template.vertex_count()).sum();
    if vertex_total > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count: vertex_total,
            max: MAX_VERTICES,
        });
    }

    if let Some(bad) = instances
        .iter()
        .find(|i| i.colors.len() != i.template.vertex_count())
    {
        return Err(MeshError::invalid_input(format!(
            "{} colors for a template with {} vertices",
            bad.colors.len(),
            bad.template.vertex_count()
        )));
    }

    let triangle_total = instances.iter().map(|i| i.template.triangle_count()).sum();
    let all_have_normals = instances.iter().all(|i| i.template.normals().is_some());

    let mut result = Mesh::with_capacity(vertex_total, triangle_total);
    for instance in instances {
        let mut placed = instance.template.clone();
        placed.set_colors(instance.colors);
        placed.transform(&instance.transform);
        result.merge(&placed);
    }

    if !all_have_normals && !result.is_empty() {
        result.compute_normals();
    }

    Ok(result)
}
