//! # Config Crate
//!
//! Centralized configuration constants for the path mesh pipeline.
//! All magic numbers used when stamping joint and segment templates along
//! a polyline live here, so the builder, the templates and the tests agree
//! on one set of values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_RADIUS, JOINT_SCALE};
//!
//! // A joint template of radius 0.5 ends up with the tube radius.
//! let template_radius = 0.5;
//! let world_radius = template_radius * DEFAULT_RADIUS * JOINT_SCALE;
//! assert_eq!(world_radius, DEFAULT_RADIUS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Template Conventions**: Scale factors assume templates span [-1, 1]
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
