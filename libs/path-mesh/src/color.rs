//! # Vertex Colors
//!
//! RGBA color with componentwise linear interpolation.

use config::constants::{GRADIENT_END_COLOR, GRADIENT_START_COLOR};
use serde::{Deserialize, Serialize};

/// An RGBA color with channels in [0, 1].
///
/// Stored as `f32` to match the mesh color buffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::from_array(GRADIENT_START_COLOR);

    /// Opaque black.
    pub const BLACK: Color = Color::from_array(GRADIENT_END_COLOR);

    /// Creates a color from its channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from an `[r, g, b, a]` array.
    pub const fn from_array(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Returns the color as an `[r, g, b, a]` array.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linear interpolation between two colors.
    ///
    /// `t` is clamped to [0, 1], so `lerp(a, b, 2.0) == b`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use path_mesh::Color;
    ///
    /// let grey = Color::WHITE.lerp(Color::BLACK, 0.5);
    /// assert_eq!(grey, Color::new(0.5, 0.5, 0.5, 1.0));
    /// ```
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Returns true if every channel is finite.
    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Color::from_array(c)
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}
