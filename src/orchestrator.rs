// src/orchestrator.rs

//! Orchestrates one control-loop cycle, coordinating pointer input, the
//! sketch pad, the classification task, and the renderer. This module aims
//! to encapsulate the core event processing logic, making it testable
//! against a scripted driver by abstracting away backend specifics.

use crate::classifier::{Classifier, ClassifyTask};
use crate::config::Config;
use crate::pixels::device_to_grid;
use crate::platform::{BackendEvent, Driver};
use crate::ranking::rank;
use crate::renderer::Renderer;
use crate::sketch::SketchPad;
use anyhow::{Context, Result};
use log::{debug, info, trace};
use std::sync::Arc;

/// Status of the orchestrator after one cycle.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OrchestratorStatus {
    /// The cycle completed; keep ticking.
    Running,
    /// A shutdown signal was received; terminate gracefully.
    Shutdown,
}

/// Owns the application state and coordinates it with the driver and the
/// classifier each tick.
///
/// The driver is a trait object so scripted backends can stand in during
/// tests; the classifier is shared behind an `Arc` because classification
/// runs on a worker thread.
pub struct AppOrchestrator<'a> {
    driver: &'a mut dyn Driver,
    classifier: Arc<dyn Classifier>,
    config: Config,
    pad: SketchPad,
    renderer: Renderer,
    in_flight: Option<ClassifyTask>,
}

impl<'a> AppOrchestrator<'a> {
    pub fn new(driver: &'a mut dyn Driver, classifier: Arc<dyn Classifier>, config: Config) -> Self {
        let pad = SketchPad::new(config.appearance.grid_rows, config.appearance.grid_cols);
        AppOrchestrator {
            driver,
            classifier,
            config,
            pad,
            renderer: Renderer::new(),
            in_flight: None,
        }
    }

    pub fn pad(&self) -> &SketchPad {
        &self.pad
    }

    /// Runs one full cycle. Exactly one frame is presented per call.
    pub fn process_event_cycle(&mut self) -> Result<OrchestratorStatus> {
        for event in self
            .driver
            .process_events()
            .context("driver event processing failed")?
        {
            debug!("Orchestrator: handling {:?}", event);
            match event {
                BackendEvent::CloseRequested => {
                    info!("Orchestrator: close requested, signaling shutdown");
                    return Ok(OrchestratorStatus::Shutdown);
                }
            }
        }

        self.process_pointer();
        self.poll_classification()?;
        self.dispatch_classification()?;
        self.render_frame()?;

        Ok(OrchestratorStatus::Running)
    }

    /// Feeds this tick's pointer poll to the pad. A press inside the reset
    /// control clears the pad instead of drawing for that tick.
    fn process_pointer(&mut self) {
        let pointer = self.driver.poll_pointer();

        if !pointer.pressed {
            self.pad.pointer_released();
            return;
        }

        if self.config.reset_control.rect.contains(pointer.x, pointer.y) {
            self.pad.reset();
            return;
        }

        let sample = device_to_grid(
            pointer.x,
            pointer.y,
            self.config.appearance.offset_px,
            self.config.appearance.cell_size_px,
        );
        trace!(
            "Orchestrator: pointer at ({}, {}) -> {:?}",
            pointer.x,
            pointer.y,
            sample
        );
        self.pad.pointer_held(sample);
    }

    /// Collects a finished classification, if any. Results computed from an
    /// outdated grid are dropped; the newer stroke owes its own run.
    fn poll_classification(&mut self) -> Result<()> {
        let Some(mut task) = self.in_flight.take() else {
            return Ok(());
        };

        match task.poll() {
            None => {
                self.in_flight = Some(task);
            }
            Some(result) => {
                let version = task.version();
                let confidences = result.context("classification failed")?;
                let ranking = rank(&confidences);
                if self.pad.install_classification(version, ranking) {
                    debug!(
                        "Orchestrator: installed classification for grid version {}",
                        version
                    );
                }
            }
        }
        Ok(())
    }

    /// Starts the owed classification once the previous one has drained.
    /// At most one task is ever in flight.
    fn dispatch_classification(&mut self) -> Result<()> {
        if !self.pad.wants_classification() || self.in_flight.is_some() {
            return Ok(());
        }

        let task = ClassifyTask::spawn(Arc::clone(&self.classifier), self.pad.grid().clone())
            .context("failed to start classification")?;
        self.pad.classification_started();
        self.in_flight = Some(task);
        Ok(())
    }

    fn render_frame(&mut self) -> Result<()> {
        let platform_state = self.driver.get_platform_state();
        let commands = self
            .renderer
            .prepare_render_commands(&self.pad, &self.config, &platform_state);
        self.driver
            .execute_render_commands(commands)
            .context("driver rejected render commands")?;
        self.driver.present().context("driver present failed")?;
        Ok(())
    }
}
