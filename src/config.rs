// src/config.rs

//! Configuration structures for the sketch pad.
//!
//! Settings are grouped into logical sections that can be deserialized from
//! a JSON file to customize the canvas geometry, pacing, and colors. Every
//! field has a sensible default, so a missing file or a partial one works.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::{self, Rgb};
use crate::pixels::PixelRect;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;

/// Default configuration instance shared by the binary and tests.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);

/// The complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Canvas and window geometry.
    pub appearance: AppearanceConfig,
    /// Control-loop pacing.
    pub performance: PerformanceConfig,
    /// Color scheme.
    pub colors: ColorScheme,
    /// The reset control region.
    pub reset_control: ResetControlConfig,
}

impl Config {
    /// Loads configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

/// Canvas geometry and window sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Number of grid rows.
    pub grid_rows: usize,
    /// Number of grid columns.
    pub grid_cols: usize,
    /// Side length of one grid cell in device pixels.
    pub cell_size_px: f32,
    /// Gap between the display origin and the canvas, on both axes.
    pub offset_px: f32,
    /// Window width hint in device pixels.
    pub window_width_px: f32,
    /// Window height hint in device pixels.
    pub window_height_px: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            grid_rows: 28,
            grid_cols: 28,
            cell_size_px: 10.0,
            offset_px: 20.0,
            window_width_px: 500.0,
            window_height_px: 500.0,
        }
    }
}

impl AppearanceConfig {
    /// Device-pixel extent of the canvas including the offset on both sides.
    pub fn canvas_extent_px(&self) -> f32 {
        self.offset_px * 2.0 + self.cell_size_px * self.grid_cols as f32
    }
}

/// Control-loop pacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Milliseconds between control-loop ticks. 33 ms is roughly 30 Hz.
    pub tick_interval_ms: f64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        PerformanceConfig {
            tick_interval_ms: 33.0,
        }
    }
}

/// Colors for everything except the ink shading itself, which is derived
/// from cell intensity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    /// Window background.
    pub background: Rgb,
    /// Fill for cells holding no ink.
    pub blank_cell: Rgb,
    /// One-pixel border drawn around every cell.
    pub cell_border: Rgb,
    /// Reset button fill.
    pub button_fill: Rgb,
    /// Reset button label.
    pub button_text: Rgb,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            background: color::BLACK,
            blank_cell: color::WHITE,
            cell_border: color::BLACK,
            button_fill: color::WHITE,
            button_text: color::BLACK,
        }
    }
}

/// The reset control: a pressed pointer inside this region clears the pad
/// instead of drawing for that tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResetControlConfig {
    /// Button bounds in device pixels.
    pub rect: PixelRect,
    /// Button label.
    pub label: String,
}

impl Default for ResetControlConfig {
    fn default() -> Self {
        // Sits just below the default 28x28 canvas (20 + 28*10 + 30 = 330).
        ResetControlConfig {
            rect: PixelRect::new(30.0, 330.0, 100.0, 30.0),
            label: "Reset".to_string(),
        }
    }
}
