// src/scoring/subject.rs

use super::round::round2;
use crate::models::performance::{SubjectInput, SubjectPerformance};

/// Questions per subject paper.
pub const SUBJECT_POOL_SIZE: u32 = 25;

/// Marks awarded for a correct answer.
pub const MARKS_PER_CORRECT: i32 = 4;

/// Marks deducted for an incorrect answer.
pub const PENALTY_PER_INCORRECT: i32 = 1;

/// Derived fields for one block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectScore {
    pub incorrect: f64,
    pub accuracy: f64,
}

/// Number of wrong answers implied by `marks` and `unattempted`.
///
/// Under +4/-1 marking the best possible score is `4 * pool_size`. Every
/// unattempted question forfeits 4 of those marks and every wrong answer
/// forfeits 5, so what remains of the shortfall after the unattempted share
/// is five times the incorrect count.
///
/// Inputs are not checked for plausibility; an impossible combination just
/// yields a negative or fractional count.
pub fn incorrect_count(marks: i32, unattempted: u32, pool_size: u32) -> f64 {
    let per_correct = f64::from(MARKS_PER_CORRECT);
    let max_marks = f64::from(pool_size) * per_correct;
    let accounted = f64::from(marks) + per_correct * f64::from(unattempted);

    round2((max_marks - accounted) / f64::from(MARKS_PER_CORRECT + PENALTY_PER_INCORRECT))
}

/// Percentage of attempted questions answered correctly.
///
/// Returns 0 when nothing was attempted (including `unattempted > pool_size`).
pub fn accuracy(unattempted: u32, incorrect: f64, pool_size: u32) -> f64 {
    let attempted = i64::from(pool_size) - i64::from(unattempted);
    if attempted <= 0 {
        return 0.0;
    }

    let attempted = attempted as f64;
    round2((attempted - incorrect) / attempted * 100.0)
}

/// Scores one block against a pool of `pool_size` questions.
pub fn score(marks: i32, unattempted: u32, pool_size: u32) -> SubjectScore {
    let incorrect = incorrect_count(marks, unattempted, pool_size);

    SubjectScore {
        incorrect,
        accuracy: accuracy(unattempted, incorrect, pool_size),
    }
}

/// Turns raw subject input into a fully derived block.
pub fn score_subject(input: &SubjectInput) -> SubjectPerformance {
    let SubjectScore {
        incorrect,
        accuracy,
    } = score(input.marks, input.unattempted, SUBJECT_POOL_SIZE);

    SubjectPerformance {
        marks: input.marks,
        unattempted: input.unattempted,
        incorrect,
        accuracy,
        errors: input.errors,
    }
}
