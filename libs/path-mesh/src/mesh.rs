//! # Mesh Data Structure
//!
//! Core mesh representation with vertices, triangles, normals and colors.

use crate::error::MeshError;
use crate::transform::{normal_matrix, transform_normal};
use config::constants::{DEFAULT_COLOR, VERTEX_MERGE_EPSILON};
use glam::{DMat4, DVec3};

/// A triangle mesh with vertices and indices.
///
/// Used both for the template meshes stamped along a path and for the
/// combined output. Geometry is kept in f64; export to f32 only happens
/// through the `*_f32` helpers.
///
/// # Example
///
/// ```rust
/// use path_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex colors (RGBA, f32 for GPU)
    colors: Option<Vec<[f32; 4]>>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
            colors: None,
            normals: None,
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            colors: None,
            normals: None,
        }
    }

    /// Creates a mesh from flat engine-style buffers.
    ///
    /// `indices` is a flat triangle list; its length must be a multiple of 3
    /// and every index must refer to a vertex. `normals`, when given, must
    /// have one entry per vertex.
    ///
    /// # Example
    ///
    /// ```rust
    /// use path_mesh::Mesh;
    /// use glam::DVec3;
    ///
    /// let positions = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
    /// let mesh = Mesh::from_buffers(positions, None, &[0, 1, 2]).unwrap();
    /// assert_eq!(mesh.triangle_count(), 1);
    ///
    /// let bad = Mesh::from_buffers(vec![DVec3::ZERO], None, &[0, 0]);
    /// assert!(bad.is_err());
    /// ```
    pub fn from_buffers(
        positions: Vec<DVec3>,
        normals: Option<Vec<DVec3>>,
        indices: &[u32],
    ) -> Result<Self, MeshError> {
        if indices.len() % 3 != 0 {
            return Err(MeshError::invalid_indices(format!(
                "index count {} is not a multiple of 3",
                indices.len()
            )));
        }

        let vertex_count = positions.len();
        if let Some(bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::invalid_indices(format!(
                "index {} out of range for {} vertices",
                bad, vertex_count
            )));
        }

        if let Some(normals) = &normals {
            if normals.len() != vertex_count {
                return Err(MeshError::invalid_indices(format!(
                    "{} normals for {} vertices",
                    normals.len(),
                    vertex_count
                )));
            }
        }

        let triangles = indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        Ok(Self {
            vertices: positions,
            triangles,
            colors: None,
            normals,
        })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Sets vertex colors.
    pub fn set_colors(&mut self, colors: Vec<[f32; 4]>) {
        self.colors = Some(colors);
    }

    /// Sets a uniform color for all vertices.
    pub fn set_uniform_color(&mut self, color: [f32; 4]) {
        let colors = vec![color; self.vertices.len()];
        self.colors = Some(colors);
    }

    /// Returns the vertex colors.
    pub fn colors(&self) -> Option<&[[f32; 4]]> {
        self.colors.as_deref()
    }

    /// Sets vertex normals.
    pub fn set_normals(&mut self, normals: Vec<DVec3>) {
        self.normals = Some(normals);
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes smooth vertex normals from the triangle faces.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Transforms all vertices by a 4x4 matrix.
    ///
    /// Normals are transformed by the inverse-transpose of the linear part
    /// and renormalized. A normal that collapses under a singular matrix
    /// keeps its previous direction.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }

        if let Some(normals) = &mut self.normals {
            let normal_matrix = normal_matrix(matrix);
            for n in normals {
                *n = transform_normal(&normal_matrix, *n);
            }
        }
    }

    /// Merges another mesh into this one.
    ///
    /// Triangle indices of `other` are offset by the current vertex count.
    /// Colors are padded with the default color when only one side has
    /// them. Normals survive only if both sides carry them.
    pub fn merge(&mut self, other: &Mesh) {
        let was_empty = self.vertices.is_empty();
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);

        for tri in &other.triangles {
            self.triangles
                .push([tri[0] + offset, tri[1] + offset, tri[2] + offset]);
        }

        match (&mut self.colors, &other.colors) {
            (Some(self_colors), Some(other_colors)) => {
                self_colors.extend_from_slice(other_colors);
            }
            (Some(self_colors), None) => {
                self_colors.resize(self.vertices.len(), DEFAULT_COLOR);
            }
            (None, Some(other_colors)) => {
                let mut colors = vec![DEFAULT_COLOR; offset as usize];
                colors.extend_from_slice(other_colors);
                self.colors = Some(colors);
            }
            (None, None) => {}
        }

        self.normals = match (self.normals.take(), &other.normals) {
            (Some(mut normals), Some(other_normals)) => {
                normals.extend_from_slice(other_normals);
                Some(normals)
            }
            (None, Some(other_normals)) if was_empty => Some(other_normals.clone()),
            _ => None,
        };
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No degenerate triangles (zero area)
    /// - Color and normal buffers match the vertex count
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        if self.colors.as_ref().is_some_and(|c| c.len() != self.vertices.len())
            || self.normals.as_ref().is_some_and(|n| n.len() != self.vertices.len())
        {
            return false;
        }

        for tri in &self.triangles {
            if tri[0] >= vertex_count || tri[1] >= vertex_count || tri[2] >= vertex_count {
                return false;
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let area = (v1 - v0).cross(v2 - v0).length();
            if area < VERTEX_MERGE_EPSILON {
                return false;
            }
        }

        true
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            let mut result = Vec::with_capacity(normals.len() * 3);
            for n in normals {
                result.push(n.x as f32);
                result.push(n.y as f32);
                result.push(n.z as f32);
            }
            result
        })
    }

    /// Exports colors as flattened [r, g, b, a, ...] array for GPU.
    pub fn colors_f32(&self) -> Option<Vec<f32>> {
        self.colors
            .as_ref()
            .map(|colors| colors.iter().flatten().copied().collect())
    }
}
