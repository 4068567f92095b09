//! # Path Mesh Builder
//!
//! Stamps joint and segment templates along a polyline and combines them
//! into one colored mesh.
//!
//! ## Layout
//!
//! For `n` points the builder emits, in order:
//!
//! ```text
//! joint(p0) segment(p0→p1) joint(p1) segment(p1→p2) ... joint(pn-1)
//! ```
//!
//! `2n - 1` instances in total. Colors follow the squared arc-length
//! parameter (see [`arc_length`](crate::arc_length)); the last joint always
//! carries the end color.

use crate::arc_length::segment_params;
use crate::color::Color;
use crate::combine::{combine, CombineInstance};
use crate::error::{MeshError, TemplateRole};
use crate::mesh::Mesh;
use crate::optimize::weld_vertices;
use crate::settings::BuildSettings;
use crate::template::validate_template;
use crate::transform::{joint_transform, segment_rotation, segment_transform};
use config::constants::ZERO_LENGTH_EPSILON;
use glam::{DMat4, DQuat, DVec3};

/// What an instance stamps and how it is tinted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InstanceKind {
    /// Joint template, one color for every vertex
    Joint { color: Color },
    /// Segment template, colors interpolated over the template's local Y
    Segment {
        color_start: Color,
        color_end: Color,
        rotation: DQuat,
        height: f64,
    },
}

/// A planned template stamp.
#[derive(Debug, Clone, PartialEq)]
pub struct PathInstance {
    /// Kind and tint
    pub kind: InstanceKind,
    /// Template-local to mesh transform
    pub transform: DMat4,
    /// Gradient parameter at the instance start
    pub t0: f64,
    /// Gradient parameter at the instance end (equal to `t0` for joints)
    pub t1: f64,
}

impl PathInstance {
    /// Returns true for joint instances.
    pub fn is_joint(&self) -> bool {
        matches!(self.kind, InstanceKind::Joint { .. })
    }

    /// Returns true for segment instances.
    pub fn is_segment(&self) -> bool {
        matches!(self.kind, InstanceKind::Segment { .. })
    }

    /// Per-vertex colors for `template`.
    ///
    /// Segment vertices get `lerp(color_start, color_end, (y + 1) / 2)` from
    /// their untransformed local Y.
    pub fn vertex_colors(&self, template: &Mesh) -> Vec<[f32; 4]> {
        match self.kind {
            InstanceKind::Joint { color } => vec![color.to_array(); template.vertex_count()],
            InstanceKind::Segment {
                color_start,
                color_end,
                ..
            } => template
                .vertices()
                .iter()
                .map(|v| {
                    let t = ((v.y + 1.0) / 2.0) as f32;
                    color_start.lerp(color_end, t).to_array()
                })
                .collect(),
        }
    }
}

/// Builds a tube-and-joint mesh along a polyline.
///
/// The builder holds no state between calls: the same points and templates
/// always produce the same mesh.
///
/// # Example
///
/// ```rust
/// use path_mesh::template::{unit_joint, unit_segment};
/// use path_mesh::PathMeshBuilder;
/// use glam::DVec3;
///
/// let joint = unit_joint(12).unwrap();
/// let segment = unit_segment(12).unwrap();
/// let points = [DVec3::ZERO, DVec3::new(0.0, 10.0, 0.0), DVec3::new(5.0, 10.0, 0.0)];
///
/// let mesh = PathMeshBuilder::new()
///     .radius(0.25)
///     .build(&points, &joint, &segment)
///     .unwrap();
/// assert!(mesh.triangle_count() > 0);
/// assert_eq!(mesh.colors().unwrap().len(), mesh.vertex_count());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathMeshBuilder {
    settings: BuildSettings,
}

impl PathMeshBuilder {
    /// Creates a builder with default settings (radius 1, white to black).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with the given settings.
    pub fn with_settings(settings: BuildSettings) -> Self {
        Self { settings }
    }

    /// Sets the tube radius.
    pub fn radius(mut self, radius: f64) -> Self {
        self.settings.radius = radius;
        self
    }

    /// Enables or disables the weld pass.
    pub fn optimize(mut self, optimize: bool) -> Self {
        self.settings.optimize = optimize;
        self
    }

    /// Returns the current settings.
    pub fn settings(&self) -> &BuildSettings {
        &self.settings
    }

    /// Number of instances emitted for `point_count` points.
    pub fn instance_count(point_count: usize) -> usize {
        if point_count == 0 {
            0
        } else {
            2 * point_count - 1
        }
    }

    /// Plans every instance for `points` without touching any template.
    pub fn plan(&self, points: &[DVec3]) -> Result<Vec<PathInstance>, MeshError> {
        self.settings.validate()?;
        validate_points(points)?;

        let radius = self.settings.radius;
        let mut instances = Vec::with_capacity(Self::instance_count(points.len()));

        let params = segment_params(points);
        if points.len() > 1 && params.iter().all(|p| p.length_squared == 0.0) {
            tracing::debug!(
                points = points.len(),
                "path has zero total length, gradient parameter fixed at 0"
            );
        }

        for (i, param) in params.iter().enumerate() {
            let (from, to) = (points[i], points[i + 1]);
            let color_start = self.settings.color_at(param.t0);
            let color_end = self.settings.color_at(param.t1);

            instances.push(PathInstance {
                kind: InstanceKind::Joint { color: color_start },
                transform: joint_transform(from, radius),
                t0: param.t0,
                t1: param.t0,
            });

            let height = param.length_squared.sqrt();
            if height <= ZERO_LENGTH_EPSILON {
                tracing::debug!(segment = i, "zero-length segment, using identity rotation");
            }

            instances.push(PathInstance {
                kind: InstanceKind::Segment {
                    color_start,
                    color_end,
                    rotation: segment_rotation(from, to),
                    height,
                },
                transform: segment_transform(from, to, radius),
                t0: param.t0,
                t1: param.t1,
            });
        }

        // Final joint is pinned to the end color, also for a single point
        let last = points[points.len() - 1];
        instances.push(PathInstance {
            kind: InstanceKind::Joint {
                color: self.settings.end_color,
            },
            transform: joint_transform(last, radius),
            t0: 1.0,
            t1: 1.0,
        });

        Ok(instances)
    }

    /// Builds the combined mesh for `points`.
    ///
    /// Fails without producing any mesh if the settings, either template or
    /// the point list is invalid.
    pub fn build(
        &self,
        points: &[DVec3],
        joint_template: &Mesh,
        segment_template: &Mesh,
    ) -> Result<Mesh, MeshError> {
        validate_template(TemplateRole::Joint, joint_template)?;
        validate_template(TemplateRole::Segment, segment_template)?;
        let plan = self.plan(points)?;

        tracing::debug!(
            points = points.len(),
            instances = plan.len(),
            radius = self.settings.radius,
            "building path mesh"
        );

        let instances = plan
            .iter()
            .map(|instance| {
                let template = if instance.is_joint() {
                    joint_template
                } else {
                    segment_template
                };
                CombineInstance {
                    template,
                    colors: instance.vertex_colors(template),
                    transform: instance.transform,
                }
            })
            .collect();

        let mut mesh = combine(instances)?;
        if self.settings.optimize {
            let before = mesh.vertex_count();
            mesh = weld_vertices(&mesh, self.settings.weld_epsilon);
            tracing::trace!(before, after = mesh.vertex_count(), "welded vertices");
        }

        tracing::debug!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "path mesh built"
        );

        Ok(mesh)
    }
}

fn validate_points(points: &[DVec3]) -> Result<(), MeshError> {
    if points.is_empty() {
        return Err(MeshError::invalid_input("path needs at least one point"));
    }

    if let Some(i) = points.iter().position(|p| !p.is_finite()) {
        return Err(MeshError::invalid_input(format!(
            "point {} is not finite: {:?}",
            i, points[i]
        )));
    }

    Ok(())
}
