// src/sketch.rs

//! The sketch state machine: pointer polls in, grid writes and a ranked
//! classification out.
//!
//! One [`SketchPad`] owns all mutable drawing state: the ink grid, the
//! stroke phase, and the most recent classification. The control loop feeds
//! it one pointer poll per tick and asks it whether a classification is owed.
//!
//! Stroke phases:
//!
//! - `Idle` - pointer up; the classification on display (if any) is current.
//! - `Drawing` - pointer held; each poll rasterizes a segment from the last
//!   retained sample to the current one. Only the most recent sample is kept,
//!   never the whole stroke.
//! - `PendingClassify` - pointer just released; exactly one classification is
//!   owed for the completed stroke.
//!
//! A released pointer in `Idle` never re-classifies, so an unchanged grid is
//! scored at most once per stroke no matter how many frames render it.

use crate::grid::Grid;
use crate::pixels::GridPoint;
use crate::ranking::Ranked;
use crate::rasterizer;
use log::debug;

/// Where the pad is within the press-release cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokePhase {
    /// Pointer released; nothing owed.
    Idle,
    /// Pointer held; `last` is the previous poll's grid sample.
    Drawing { last: GridPoint },
    /// Pointer just released; one classification owed.
    PendingClassify,
}

/// A ranking together with the grid version it was computed from.
#[derive(Debug, Clone, PartialEq)]
struct Classification {
    grid_version: u64,
    entries: Vec<Ranked>,
}

/// The drawing surface and its classification state.
#[derive(Debug)]
pub struct SketchPad {
    grid: Grid,
    phase: StrokePhase,
    classification: Option<Classification>,
}

impl SketchPad {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            phase: StrokePhase::Idle,
            classification: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> StrokePhase {
        self.phase
    }

    /// Handles a poll with the pointer held at `sample`.
    ///
    /// The first sample of a press has no predecessor, so the drawn segment
    /// degenerates to a single point. Later samples rasterize the segment
    /// from the last retained sample.
    pub fn pointer_held(&mut self, sample: GridPoint) {
        let from = match self.phase {
            StrokePhase::Drawing { last } => last,
            StrokePhase::Idle | StrokePhase::PendingClassify => {
                debug!("SketchPad: stroke begins at {:?}", sample);
                sample
            }
        };
        rasterizer::draw_segment(&mut self.grid, from, sample);
        self.phase = StrokePhase::Drawing { last: sample };
    }

    /// Handles a poll with the pointer released.
    ///
    /// Ending a stroke owes exactly one classification; released polls in any
    /// other phase change nothing.
    pub fn pointer_released(&mut self) {
        if let StrokePhase::Drawing { .. } = self.phase {
            debug!(
                "SketchPad: stroke ended at grid version {}",
                self.grid.version()
            );
            self.phase = StrokePhase::PendingClassify;
        }
    }

    /// True while a classification is owed for a completed stroke.
    pub fn wants_classification(&self) -> bool {
        self.phase == StrokePhase::PendingClassify
    }

    /// Marks the owed classification as underway. The pad returns to `Idle`
    /// so the same stroke is never scored twice.
    pub fn classification_started(&mut self) {
        debug_assert!(self.wants_classification());
        self.phase = StrokePhase::Idle;
    }

    /// Installs a ranking computed from grid version `version`.
    ///
    /// Returns false (and keeps the previous result) when the grid has
    /// changed since the snapshot was taken; a newer stroke already owes its
    /// own classification.
    pub fn install_classification(&mut self, version: u64, entries: Vec<Ranked>) -> bool {
        if version != self.grid.version() {
            debug!(
                "SketchPad: discarding stale ranking for version {} (grid at {})",
                version,
                self.grid.version()
            );
            return false;
        }
        self.classification = Some(Classification {
            grid_version: version,
            entries,
        });
        true
    }

    /// The ranking on display, if any. Persists across idle frames until the
    /// next stroke's result replaces it or the pad is reset.
    pub fn classification(&self) -> Option<&[Ranked]> {
        self.classification.as_ref().map(|c| c.entries.as_slice())
    }

    /// Clears the grid, the classification, and any stroke in progress.
    pub fn reset(&mut self) {
        debug!("SketchPad: reset");
        self.grid.reset();
        self.classification = None;
        self.phase = StrokePhase::Idle;
    }
}
