// src/ranking.rs

//! Orders per-class confidences into the list shown to the user.

use std::fmt;

/// One entry of a classification ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked {
    /// The class label (the index into the confidence vector).
    pub label: usize,
    /// The model's confidence for this class, in `[0, 1]`.
    pub confidence: f32,
}

impl Ranked {
    /// Confidence as a whole percentage, rounded.
    pub fn percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

impl fmt::Display for Ranked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}%", self.label, self.percent())
    }
}

/// Ranks a confidence vector, highest confidence first.
///
/// The sort is a stable ascending sort followed by a reversal, so entries
/// with equal confidence come out ordered by descending label. Display code
/// and tests rely on exactly this ordering.
pub fn rank(confidences: &[f32]) -> Vec<Ranked> {
    let mut ranked: Vec<Ranked> = confidences
        .iter()
        .enumerate()
        .map(|(label, &confidence)| Ranked { label, confidence })
        .collect();

    ranked.sort_by(|a, b| a.confidence.total_cmp(&b.confidence));
    ranked.reverse();
    ranked
}

#[cfg(test)]
mod tests;
