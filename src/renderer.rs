// src/renderer.rs

//! Translates sketch pad state into abstract drawing commands.
//!
//! The `Renderer` is backend-agnostic: it emits [`RenderCommand`]s and never
//! touches pixels or fonts itself. Each tick it redraws the full frame; the
//! canvas is small enough that dirty tracking would buy nothing at 30 Hz.

use crate::color::Rgb;
use crate::config::Config;
use crate::pixels::PixelRect;
use crate::platform::{PlatformState, RenderCommand};
use crate::sketch::SketchPad;

/// Vertical center of the first ranking entry, in device pixels.
const RANKING_TOP_PX: f32 = 25.0;
/// Vertical spacing between ranking entries.
const RANKING_SPACING_PX: f32 = 50.0;

/// Builds the per-frame command batch for a [`SketchPad`].
///
/// Stateless beyond the scope of a single call.
pub struct Renderer {}

impl Renderer {
    pub fn new() -> Self {
        Self {}
    }

    /// Produces the full command batch for one frame: background, shaded
    /// canvas cells, the reset control, and the ranking list.
    pub fn prepare_render_commands(
        &self,
        pad: &SketchPad,
        config: &Config,
        platform_state: &PlatformState,
    ) -> Vec<RenderCommand> {
        let mut commands = Vec::new();

        commands.push(RenderCommand::ClearAll {
            bg: config.colors.background,
        });
        self.push_canvas_commands(pad, config, &mut commands);
        self.push_reset_control_commands(config, &mut commands);
        self.push_ranking_commands(pad, config, platform_state, &mut commands);

        commands
    }

    /// One filled rectangle per cell, shaded by ink intensity, each with a
    /// one-pixel border.
    fn push_canvas_commands(
        &self,
        pad: &SketchPad,
        config: &Config,
        commands: &mut Vec<RenderCommand>,
    ) {
        let appearance = &config.appearance;
        let cell = appearance.cell_size_px;

        for row in 0..pad.grid().rows() {
            for col in 0..pad.grid().cols() {
                let rect = PixelRect::new(
                    appearance.offset_px + col as f32 * cell,
                    appearance.offset_px + row as f32 * cell,
                    cell,
                    cell,
                );

                let intensity = pad.grid().get(row as i32, col as i32);
                let fill = if intensity > 0.0 {
                    Rgb::from_cell_intensity(intensity)
                } else {
                    config.colors.blank_cell
                };

                commands.push(RenderCommand::FillRect { rect, color: fill });
                commands.push(RenderCommand::StrokeRect {
                    rect,
                    color: config.colors.cell_border,
                });
            }
        }
    }

    fn push_reset_control_commands(&self, config: &Config, commands: &mut Vec<RenderCommand>) {
        let control = &config.reset_control;
        commands.push(RenderCommand::FillRect {
            rect: control.rect,
            color: config.colors.button_fill,
        });
        commands.push(RenderCommand::DrawText {
            x: control.rect.x + control.rect.width / 2.0,
            y: control.rect.y + control.rect.height / 2.0,
            text: control.label.clone(),
            color: config.colors.button_text,
        });
    }

    /// The ranked list, centered in the area right of the canvas, one line
    /// per class in descending confidence order. Line brightness tracks
    /// confidence, so unlikely classes fade toward the background.
    fn push_ranking_commands(
        &self,
        pad: &SketchPad,
        config: &Config,
        platform_state: &PlatformState,
        commands: &mut Vec<RenderCommand>,
    ) {
        let Some(ranking) = pad.classification() else {
            return;
        };

        let canvas_extent = config.appearance.canvas_extent_px();
        let x = canvas_extent + (platform_state.display_width_px - canvas_extent) / 2.0;
        let mut y = RANKING_TOP_PX;

        for entry in ranking {
            commands.push(RenderCommand::DrawText {
                x,
                y,
                text: entry.to_string(),
                color: Rgb::from_confidence(entry.confidence),
            });
            y += RANKING_SPACING_PX;
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
