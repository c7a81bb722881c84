// src/color.rs

//! Concrete RGB colors used by the renderer and the color scheme
//! configuration.

use serde::{Deserialize, Serialize};

/// A concrete 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const BLACK: Rgb = Rgb::gray(0);
pub const WHITE: Rgb = Rgb::gray(255);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A gray with all three channels at `value`.
    pub const fn gray(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    /// Shade for a canvas cell holding `intensity` in [0, 1]: full ink is
    /// near-black, blank is white (`255 - intensity * 255` per channel).
    pub fn from_cell_intensity(intensity: f32) -> Self {
        let channel = (255.0 - intensity * 255.0).clamp(0.0, 255.0).round() as u8;
        Self::gray(channel)
    }

    /// Gray whose brightness tracks a confidence in [0, 1].
    pub fn from_confidence(confidence: f32) -> Self {
        let channel = (confidence * 255.0).clamp(0.0, 255.0).round() as u8;
        Self::gray(channel)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        BLACK
    }
}
