//! # Build Settings
//!
//! Runtime configuration for [`PathMeshBuilder`](crate::PathMeshBuilder).
//! Defaults come from `config::constants`; any field may be overridden from
//! JSON.

use crate::color::Color;
use crate::error::MeshError;
use config::constants::{DEFAULT_RADIUS, VERTEX_MERGE_EPSILON};
use serde::{Deserialize, Serialize};

/// Parameters of a path mesh build.
///
/// # Example
///
/// ```rust
/// use path_mesh::BuildSettings;
///
/// let settings = BuildSettings::from_json(r#"{ "radius": 0.25 }"#).unwrap();
/// assert_eq!(settings.radius, 0.25);
/// assert!(settings.optimize);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    /// Tube radius; joints and segment cross-sections are scaled by
    /// `radius * 2`
    pub radius: f64,
    /// Color at t = 0
    pub start_color: Color,
    /// Color at t = 1
    pub end_color: Color,
    /// Run the weld pass on the combined mesh
    pub optimize: bool,
    /// Position tolerance of the weld pass
    pub weld_epsilon: f64,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            start_color: Color::WHITE,
            end_color: Color::BLACK,
            optimize: true,
            weld_epsilon: VERTEX_MERGE_EPSILON,
        }
    }
}

impl BuildSettings {
    /// Parses settings from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, MeshError> {
        let settings: BuildSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serializes the settings to JSON.
    pub fn to_json(&self) -> Result<String, MeshError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), MeshError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(MeshError::invalid_settings(format!(
                "radius must be positive and finite: {}",
                self.radius
            )));
        }

        if !self.start_color.is_finite() || !self.end_color.is_finite() {
            return Err(MeshError::invalid_settings("gradient colors must be finite"));
        }

        if !self.weld_epsilon.is_finite()
            || self.weld_epsilon <= 0.0
            || !(1.0 / self.weld_epsilon).is_finite()
        {
            return Err(MeshError::invalid_settings(format!(
                "weld epsilon must be positive, finite and invertible: {}",
                self.weld_epsilon
            )));
        }

        Ok(())
    }

    /// Gradient color at parameter `t`.
    pub fn color_at(&self, t: f64) -> Color {
        self.start_color.lerp(self.end_color, t as f32)
    }
}
