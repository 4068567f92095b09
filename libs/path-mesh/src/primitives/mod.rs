//! # Primitives
//!
//! Mesh generation for the built-in template shapes (sphere, cylinder).

pub mod cylinder;
pub mod sphere;

pub use cylinder::create_cylinder;
pub use sphere::create_sphere;
