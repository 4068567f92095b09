//! # Path Mesh Provider
//!
//! Owns a point path and the mesh built from it. Every rebuild discards the
//! previous mesh and builds a fresh one; there is no incremental update.

use crate::builder::PathMeshBuilder;
use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// A path together with its templates and its current mesh.
///
/// Templates are borrowed; the provider only owns the points and the mesh
/// slot.
///
/// # Example
///
/// ```rust
/// use path_mesh::template::{unit_joint, unit_segment};
/// use path_mesh::{PathMeshBuilder, PathMeshProvider};
/// use glam::DVec3;
///
/// let joint = unit_joint(8).unwrap();
/// let segment = unit_segment(8).unwrap();
///
/// let mut provider = PathMeshProvider::new(&joint, &segment, PathMeshBuilder::new());
/// provider.set_points(vec![DVec3::ZERO, DVec3::X]);
/// provider.rebuild().unwrap();
/// assert!(provider.mesh().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct PathMeshProvider<'a> {
    points: Vec<DVec3>,
    joint_template: &'a Mesh,
    segment_template: &'a Mesh,
    builder: PathMeshBuilder,
    mesh: Option<Mesh>,
}

impl<'a> PathMeshProvider<'a> {
    /// Creates a provider with no points and no mesh.
    pub fn new(joint_template: &'a Mesh, segment_template: &'a Mesh, builder: PathMeshBuilder) -> Self {
        Self {
            points: Vec::new(),
            joint_template,
            segment_template,
            builder,
            mesh: None,
        }
    }

    /// Replaces the path. The mesh is not rebuilt until [`rebuild`](Self::rebuild).
    pub fn set_points(&mut self, points: Vec<DVec3>) {
        self.points = points;
    }

    /// Returns the current path.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Returns the builder used for rebuilds.
    pub fn builder(&self) -> &PathMeshBuilder {
        &self.builder
    }

    /// Replaces the builder used for rebuilds.
    pub fn set_builder(&mut self, builder: PathMeshBuilder) {
        self.builder = builder;
    }

    /// Returns the active mesh, if one has been built.
    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_ref()
    }

    /// Removes and returns the active mesh.
    pub fn take_mesh(&mut self) -> Option<Mesh> {
        self.mesh.take()
    }

    /// Builds a fresh mesh from the current points and makes it active.
    ///
    /// On failure the previously active mesh is kept and the error returned.
    pub fn rebuild(&mut self) -> Result<&Mesh, MeshError> {
        let mesh = self
            .builder
            .build(&self.points, self.joint_template, self.segment_template)
            .map_err(|err| {
                tracing::debug!(error = %err, "path mesh rebuild failed");
                err
            })?;
        Ok(self.mesh.insert(mesh))
    }
}
