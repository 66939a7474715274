// src/scoring/total.rs

use super::round::round2;
use super::subject::{SUBJECT_POOL_SIZE, accuracy};
use crate::models::performance::SubjectPerformance;

/// Questions across the three papers of one sitting.
pub const TOTAL_POOL_SIZE: u32 = SUBJECT_POOL_SIZE * 3;

/// Combines three scored subjects into the sitting's total block.
///
/// Counters (including `incorrect`) are summed. Integer counters saturate
/// rather than overflow. Accuracy is not averaged: it is recomputed over the
/// pooled 75-question attempt, so a subject with fewer attempts carries
/// proportionally less weight.
pub fn aggregate_total(
    physics: &SubjectPerformance,
    chemistry: &SubjectPerformance,
    maths: &SubjectPerformance,
) -> SubjectPerformance {
    let blocks = [physics, chemistry, maths];

    let marks = blocks.iter().fold(0i32, |acc, b| acc.saturating_add(b.marks));
    let unattempted = blocks
        .iter()
        .fold(0u32, |acc, b| acc.saturating_add(b.unattempted));
    // Each addend already has two decimals; rounding only drops float noise.
    let incorrect = round2(blocks.iter().map(|b| b.incorrect).sum::<f64>());

    SubjectPerformance {
        marks,
        unattempted,
        incorrect,
        accuracy: accuracy(unattempted, incorrect, TOTAL_POOL_SIZE),
        errors: blocks.iter().map(|b| b.errors).sum(),
    }
}
