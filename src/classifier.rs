// src/classifier.rs

//! The boundary to the trained model, plus the one-shot background task that
//! runs it off the control loop.
//!
//! The model is consumed purely through the [`Classifier`] trait: a grid of
//! ink goes in, one confidence per class comes out. The bundled
//! [`LinearModel`] implementation loads an affine model from a JSON weight
//! file and squashes its scores through a softmax; anything heavier lives
//! behind the same trait in the embedding application.
//!
//! Classification is slow relative to a frame, so it never runs on the
//! control loop thread. [`ClassifyTask::spawn`] clones the grid, records its
//! version, and evaluates on a named worker thread; the loop polls the task
//! each tick and discards the result if the grid has moved on.

use crate::grid::Grid;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// A trained model that scores a grid of ink.
pub trait Classifier: Send + Sync {
    /// The `(rows, cols)` grid shape the model was trained on.
    fn input_shape(&self) -> (usize, usize);

    /// Number of classes in the output vector.
    fn num_classes(&self) -> usize;

    /// Scores the grid, returning one confidence per class in `[0, 1]`.
    /// The output is not required to sum to 1.
    fn classify(&self, grid: &Grid) -> Result<Vec<f32>>;
}

/// Checks once at startup that the canvas and the model agree on the grid
/// shape. A mismatch is fatal; it is never re-checked per tick.
pub fn validate_input_shape(classifier: &dyn Classifier, grid: &Grid) -> Result<()> {
    let (rows, cols) = classifier.input_shape();
    if (rows, cols) != (grid.rows(), grid.cols()) {
        bail!(
            "model expects a {}x{} grid but the canvas is {}x{}",
            rows,
            cols,
            grid.rows(),
            grid.cols()
        );
    }
    Ok(())
}

/// An affine per-class model loaded from a JSON weight file.
///
/// The file holds one weight row per class over the flattened row-major grid,
/// plus a bias per class:
///
/// ```json
/// { "rows": 28, "cols": 28, "weights": [[...784 floats...], ...], "bias": [...] }
/// ```
#[derive(Debug, Deserialize)]
pub struct LinearModel {
    rows: usize,
    cols: usize,
    weights: Vec<Vec<f32>>,
    bias: Vec<f32>,
}

impl LinearModel {
    /// Loads and validates a model file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read model file {}", path.display()))?;
        let model: LinearModel = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse model file {}", path.display()))?;
        model.validate()?;
        info!(
            "Loaded linear model: {} classes over a {}x{} grid",
            model.bias.len(),
            model.rows,
            model.cols
        );
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        if self.weights.is_empty() {
            bail!("model has no classes");
        }
        if self.weights.len() != self.bias.len() {
            bail!(
                "model has {} weight rows but {} biases",
                self.weights.len(),
                self.bias.len()
            );
        }
        let expected = self.rows * self.cols;
        for (class, row) in self.weights.iter().enumerate() {
            if row.len() != expected {
                bail!(
                    "weight row for class {} has {} entries, expected {}",
                    class,
                    row.len(),
                    expected
                );
            }
        }
        Ok(())
    }
}

impl Classifier for LinearModel {
    fn input_shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn num_classes(&self) -> usize {
        self.bias.len()
    }

    fn classify(&self, grid: &Grid) -> Result<Vec<f32>> {
        let cells = grid.cells();
        let scores: Vec<f32> = self
            .weights
            .iter()
            .zip(&self.bias)
            .map(|(row, bias)| bias + row.iter().zip(cells).map(|(w, x)| w * x).sum::<f32>())
            .collect();
        Ok(softmax(&scores))
    }
}

/// Numerically stable softmax: confidences in `[0, 1]` summing to 1.
fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// A single classification running on a background thread.
///
/// The task owns a clone of the grid taken at spawn time, tagged with that
/// grid's version. At most one task should be in flight at a time; the
/// orchestrator enforces this by holding the task in an `Option` slot.
pub struct ClassifyTask {
    version: u64,
    result_rx: Receiver<Result<Vec<f32>>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl ClassifyTask {
    /// Spawns a worker thread that classifies `grid`.
    ///
    /// # Arguments
    ///
    /// * `classifier` - The shared model.
    /// * `grid` - A snapshot of the canvas; its version tags the result.
    pub fn spawn(classifier: Arc<dyn Classifier>, grid: Grid) -> Result<Self> {
        let version = grid.version();
        let (result_tx, result_rx) = mpsc::channel();

        let thread_handle = thread::Builder::new()
            .name("classify".to_string())
            .spawn(move || {
                debug!("ClassifyTask: evaluating grid version {}", version);
                let result = classifier.classify(&grid);
                // The receiver may already be gone on shutdown.
                let _ = result_tx.send(result);
            })
            .context("Failed to spawn classify thread")?;

        Ok(Self {
            version,
            result_rx,
            thread_handle: Some(thread_handle),
        })
    }

    /// The grid version this task's result belongs to.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Non-blocking poll. Returns `Some` exactly once, when the worker has
    /// finished; the caller is expected to drop the task afterwards.
    pub fn poll(&mut self) -> Option<Result<Vec<f32>>> {
        match self.result_rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(Err(anyhow::anyhow!("classify worker exited without a result")))
            }
        }
    }
}

impl Drop for ClassifyTask {
    fn drop(&mut self) {
        if let Some(handle) = self.thread_handle.take() {
            if let Err(e) = handle.join() {
                log::error!("ClassifyTask: worker thread panicked: {:?}", e);
            }
        }
    }
}
