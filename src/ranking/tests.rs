// src/ranking/tests.rs

use super::*;

#[test]
fn ranks_descending_by_confidence() {
    let ranking = rank(&[0.2, 0.5, 0.3]);
    let pairs: Vec<(usize, f32)> = ranking.iter().map(|r| (r.label, r.confidence)).collect();
    assert_eq!(pairs, vec![(1, 0.5), (2, 0.3), (0, 0.2)]);
}

#[test]
fn equal_confidences_order_by_descending_label() {
    let ranking = rank(&[0.1, 0.9, 0.1]);
    let pairs: Vec<(usize, f32)> = ranking.iter().map(|r| (r.label, r.confidence)).collect();
    // Index 2 outranks index 0 despite equal confidence.
    assert_eq!(pairs, vec![(1, 0.9), (2, 0.1), (0, 0.1)]);
}

#[test]
fn all_equal_confidences_reverse_the_label_order() {
    let ranking = rank(&[0.25, 0.25, 0.25, 0.25]);
    let labels: Vec<usize> = ranking.iter().map(|r| r.label).collect();
    assert_eq!(labels, vec![3, 2, 1, 0]);
}

#[test]
fn empty_input_ranks_to_empty() {
    assert!(rank(&[]).is_empty());
}

#[test]
fn ranking_preserves_every_label_exactly_once() {
    let ranking = rank(&[0.05, 0.2, 0.05, 0.6, 0.1]);
    let mut labels: Vec<usize> = ranking.iter().map(|r| r.label).collect();
    labels.sort_unstable();
    assert_eq!(labels, vec![0, 1, 2, 3, 4]);
}

#[test]
fn percent_rounds_to_nearest_whole() {
    let entry = Ranked {
        label: 7,
        confidence: 0.856,
    };
    assert_eq!(entry.percent(), 86);
    assert_eq!(entry.to_string(), "7: 86%");
}
