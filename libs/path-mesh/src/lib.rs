//! # Path Mesh
//!
//! Colored tube-and-joint meshes along a polyline.
//! Copies of a joint template and a segment template are placed along the
//! path and combined into one mesh whose vertex colors run from a start
//! color to an end color.
//!
//! ## Architecture
//!
//! ```text
//! points ─► arc_length (t0, t1) ─┐
//!                                ├─► builder::plan ─► combine ─► optimize ─► Mesh
//! points ─► transform (matrices) ┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::DEFAULT_TEMPLATE_SEGMENTS;
//! use path_mesh::template::{unit_joint, unit_segment};
//! use path_mesh::PathMeshBuilder;
//! use glam::DVec3;
//!
//! let joint = unit_joint(DEFAULT_TEMPLATE_SEGMENTS)?;
//! let segment = unit_segment(DEFAULT_TEMPLATE_SEGMENTS)?;
//! let points = [DVec3::ZERO, DVec3::new(0.0, 10.0, 0.0)];
//!
//! let mesh = PathMeshBuilder::new().build(&points, &joint, &segment)?;
//! assert!(mesh.validate());
//! # Ok::<(), path_mesh::MeshError>(())
//! ```

pub mod arc_length;
pub mod builder;
pub mod color;
pub mod combine;
pub mod error;
pub mod mesh;
pub mod optimize;
pub mod primitives;
pub mod provider;
pub mod settings;
pub mod template;
pub mod transform;

pub use builder::{InstanceKind, PathInstance, PathMeshBuilder};
pub use color::Color;
pub use error::{MeshError, TemplateRole};
pub use mesh::Mesh;
pub use provider::PathMeshProvider;
pub use settings::BuildSettings;
