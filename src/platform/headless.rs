// src/platform/headless.rs

//! A display-less driver.
//!
//! Pointer frames are injected through a channel and consumed one per poll;
//! executed render commands and presented frames are recorded for
//! inspection. Tests drive the whole application through this driver, and
//! the binary falls back to it when no graphical backend is compiled in.

use super::{BackendEvent, Driver, PlatformState, PointerState, RenderCommand};
use anyhow::Result;
use log::info;
use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender};

pub struct HeadlessDriver {
    display_width_px: f32,
    display_height_px: f32,
    pointer_rx: Receiver<PointerState>,
    pointer_tx: Sender<PointerState>,
    last_pointer: PointerState,
    pending_events: VecDeque<BackendEvent>,
    commands: Vec<RenderCommand>,
    frames_presented: usize,
    title: String,
}

impl HeadlessDriver {
    pub fn new(display_width_px: f32, display_height_px: f32) -> Self {
        let (pointer_tx, pointer_rx) = mpsc::channel();
        Self {
            display_width_px,
            display_height_px,
            pointer_rx,
            pointer_tx,
            last_pointer: PointerState::released(),
            pending_events: VecDeque::new(),
            commands: Vec::new(),
            frames_presented: 0,
            title: String::new(),
        }
    }

    /// Queues a pointer frame; each poll consumes one. Once the queue runs
    /// dry, polls repeat the last frame.
    pub fn push_pointer_frame(&mut self, frame: PointerState) {
        // Send cannot fail: the receiver lives in the same struct.
        let _ = self.pointer_tx.send(frame);
    }

    /// A handle for injecting pointer frames while the driver is borrowed
    /// by the control loop.
    pub fn pointer_injector(&self) -> Sender<PointerState> {
        self.pointer_tx.clone()
    }

    pub fn push_event(&mut self, event: BackendEvent) {
        self.pending_events.push_back(event);
    }

    /// Render commands executed since the last call, oldest first.
    pub fn take_commands(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn frames_presented(&self) -> usize {
        self.frames_presented
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Driver for HeadlessDriver {
    fn process_events(&mut self) -> Result<Vec<BackendEvent>> {
        Ok(self.pending_events.drain(..).collect())
    }

    fn poll_pointer(&mut self) -> PointerState {
        if let Ok(frame) = self.pointer_rx.try_recv() {
            self.last_pointer = frame;
        }
        self.last_pointer
    }

    fn get_platform_state(&self) -> PlatformState {
        PlatformState {
            display_width_px: self.display_width_px,
            display_height_px: self.display_height_px,
        }
    }

    fn execute_render_commands(&mut self, commands: Vec<RenderCommand>) -> Result<()> {
        self.commands.extend(commands);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.frames_presented += 1;
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn cleanup(&mut self) -> Result<()> {
        info!(
            "HeadlessDriver: cleanup after {} presented frames",
            self.frames_presented
        );
        Ok(())
    }
}
