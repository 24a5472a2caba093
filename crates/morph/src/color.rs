//! Diffuse color gradient.

use serde::{Deserialize, Serialize};

/// An RGB color with channels on the 0-255 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Blend from `start` toward `end`: `end * ratio + start * (1 - ratio)`.
    ///
    /// Like vertex interpolation, the ratio is not clamped.
    #[must_use]
    pub fn lerp(start: Self, end: Self, ratio: f64) -> Self {
        let mix = |s: f64, e: f64| e * ratio + s * (1.0 - ratio);
        Self {
            r: mix(start.r, end.r),
            g: mix(start.g, end.g),
            b: mix(start.b, end.b),
        }
    }

    /// Normalized RGBA with opaque alpha, as material diffuse colors expect.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_rgba(self) -> [f32; 4] {
        [
            (self.r / 255.0) as f32,
            (self.g / 255.0) as f32,
            (self.b / 255.0) as f32,
            1.0,
        ]
    }
}
