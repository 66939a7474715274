// src/scoring/mod.rs

//! Derivation of incorrect counts and accuracy.
//!
//! Everything here is a pure function over plain values. Nothing fails:
//! implausible input produces an implausible number rather than an error, and
//! the only singularity (zero attempted questions) is defined as 0% accuracy.

pub mod round;
pub mod subject;
pub mod total;

pub use round::{round1, round2};
pub use subject::{
    MARKS_PER_CORRECT, PENALTY_PER_INCORRECT, SUBJECT_POOL_SIZE, SubjectScore, accuracy,
    incorrect_count, score, score_subject,
};
pub use total::{TOTAL_POOL_SIZE, aggregate_total};
