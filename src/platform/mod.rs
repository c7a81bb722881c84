// src/platform/mod.rs

//! Defines the `Driver` trait for presentation backends and the common types
//! crossing that boundary: `BackendEvent`, `PointerState`, `PlatformState`,
//! and `RenderCommand`.
//!
//! Window management, pixel blitting, and font handling all live behind
//! `Driver`. The application core only ever produces abstract render command
//! batches and consumes polled pointer state, so any windowing stack can host
//! it by implementing this one trait. The bundled [`headless::HeadlessDriver`]
//! is the reference implementation used by tests and the default binary.

use crate::color::Rgb;
use crate::pixels::PixelRect;
use anyhow::Result;

pub mod headless;

pub use headless::HeadlessDriver;

/// Events originating from the platform, translated out of whatever native
/// form the backend receives them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendEvent {
    /// The application received a request to close from the platform
    /// (e.g. the user closed the window).
    CloseRequested,
}

/// The pointer as seen at one poll: button state plus position in device
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub pressed: bool,
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub const fn released() -> Self {
        Self {
            pressed: false,
            x: 0.0,
            y: 0.0,
        }
    }

    pub const fn pressed_at(x: f32, y: f32) -> Self {
        Self {
            pressed: true,
            x,
            y,
        }
    }
}

/// Display metrics owned by the driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformState {
    /// Current width of the display area in device pixels.
    pub display_width_px: f32,
    /// Current height of the display area in device pixels.
    pub display_height_px: f32,
}

/// Abstract drawing commands produced by the renderer, in device pixels.
///
/// Drivers execute these against their actual surface; the renderer never
/// touches pixels itself.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Clears the entire display area with the given background color.
    ClearAll { bg: Rgb },
    /// Fills a rectangle with a solid color.
    FillRect { rect: PixelRect, color: Rgb },
    /// Outlines a rectangle with a one-pixel border.
    StrokeRect { rect: PixelRect, color: Rgb },
    /// Draws a line of text centered on `(x, y)`.
    DrawText {
        x: f32,
        y: f32,
        text: String,
        color: Rgb,
    },
}

/// The interface a presentation backend implements.
///
/// A `Driver` is responsible for:
/// 1. Window/display setup and teardown.
/// 2. Translating native events into [`BackendEvent`]s and exposing the
///    polled pointer state.
/// 3. Executing abstract [`RenderCommand`]s and presenting frames.
/// 4. Reporting display metrics.
pub trait Driver {
    /// Processes pending platform events, returning them in arrival order.
    fn process_events(&mut self) -> Result<Vec<BackendEvent>>;

    /// The pointer state for this tick. Polled once per control-loop cycle.
    fn poll_pointer(&mut self) -> PointerState;

    /// Current display metrics.
    fn get_platform_state(&self) -> PlatformState;

    /// Executes a batch of render commands against the display surface.
    fn execute_render_commands(&mut self, commands: Vec<RenderCommand>) -> Result<()>;

    /// Presents the composed frame. For double-buffered systems this swaps
    /// buffers; others may flush an output stream.
    fn present(&mut self) -> Result<()>;

    /// Sets the window title, where the backend has one.
    fn set_title(&mut self, title: &str);

    /// Releases platform resources. Idempotent.
    fn cleanup(&mut self) -> Result<()>;
}
