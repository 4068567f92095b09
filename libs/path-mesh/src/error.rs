//! # Mesh Errors
//!
//! Error types for path mesh generation.

use thiserror::Error;

/// Which template a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateRole {
    /// Mesh stamped at every path point
    Joint,
    /// Mesh stretched along every path edge
    Segment,
}

impl std::fmt::Display for TemplateRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateRole::Joint => f.write_str("joint"),
            TemplateRole::Segment => f.write_str("segment"),
        }
    }
}

/// Errors that can occur during path mesh generation.
///
/// Any error aborts the whole build; no partial mesh is produced.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Invalid path input (empty point list, non-finite point)
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Malformed template mesh
    #[error("Invalid {role} template: {message}")]
    InvalidTemplate { role: TemplateRole, message: String },

    /// Invalid builder settings
    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },

    /// Degenerate primitive parameters
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Malformed flat index buffer
    #[error("Invalid index buffer: {message}")]
    InvalidIndices { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl MeshError {
    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an invalid template error.
    pub fn invalid_template(role: TemplateRole, message: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            role,
            message: message.into(),
        }
    }

    /// Creates an invalid settings error.
    pub fn invalid_settings(message: impl Into<String>) -> Self {
        Self::InvalidSettings {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid index buffer error.
    pub fn invalid_indices(message: impl Into<String>) -> Self {
        Self::InvalidIndices {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for MeshError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_settings(err.to_string())
    }
}
