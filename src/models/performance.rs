// src/models/performance.rs

use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Self-reported tallies of why questions went wrong.
///
/// The six counters are independent: a single wrong answer may be tagged under
/// several categories, and nothing ties their sum to `incorrect`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorTally {
    pub calc_error: u32,
    pub misconception: u32,
    pub concept_not_aware: u32,
    pub reading_error: u32,
    pub extra_thinking: u32,
    pub lack_of_time: u32,
}

/// Component-wise, saturating at `u32::MAX`.
impl Add for ErrorTally {
    type Output = ErrorTally;

    fn add(self, rhs: ErrorTally) -> ErrorTally {
        ErrorTally {
            calc_error: self.calc_error.saturating_add(rhs.calc_error),
            misconception: self.misconception.saturating_add(rhs.misconception),
            concept_not_aware: self.concept_not_aware.saturating_add(rhs.concept_not_aware),
            reading_error: self.reading_error.saturating_add(rhs.reading_error),
            extra_thinking: self.extra_thinking.saturating_add(rhs.extra_thinking),
            lack_of_time: self.lack_of_time.saturating_add(rhs.lack_of_time),
        }
    }
}

impl Sum for ErrorTally {
    fn sum<I: Iterator<Item = ErrorTally>>(iter: I) -> ErrorTally {
        iter.fold(ErrorTally::default(), Add::add)
    }
}

/// Raw values for one subject, exactly as the user enters them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectInput {
    /// Marks obtained. Negative marking means this can go below zero.
    pub marks: i32,
    /// Questions left unattempted.
    pub unattempted: u32,
    #[serde(flatten)]
    pub errors: ErrorTally,
}

/// One scored block of a sitting: a single subject or the combined total.
///
/// `incorrect` and `accuracy` are always derived from `marks`/`unattempted`
/// (see [`crate::scoring`]); they are never taken from user input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectPerformance {
    pub marks: i32,
    pub unattempted: u32,
    pub incorrect: f64,
    pub accuracy: f64,
    #[serde(flatten)]
    pub errors: ErrorTally,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallies_sum_component_wise() {
        let a = ErrorTally {
            calc_error: 1,
            concept_not_aware: 1,
            ..Default::default()
        };
        let b = ErrorTally {
            calc_error: 1,
            concept_not_aware: 3,
            lack_of_time: 2,
            ..Default::default()
        };

        let total: ErrorTally = [a, b, ErrorTally::default()].into_iter().sum();

        assert_eq!(total.calc_error, 2);
        assert_eq!(total.concept_not_aware, 4);
        assert_eq!(total.lack_of_time, 2);
        assert_eq!(total.misconception, 0);
    }

    #[test]
    fn tallies_saturate_instead_of_overflowing() {
        let full = ErrorTally {
            reading_error: u32::MAX,
            ..Default::default()
        };
        let one = ErrorTally {
            reading_error: 1,
            ..Default::default()
        };

        assert_eq!((full + one).reading_error, u32::MAX);
    }

    #[test]
    fn performance_serializes_flat_camel_case() {
        let block = SubjectPerformance {
            marks: 90,
            unattempted: 0,
            incorrect: 2.0,
            accuracy: 92.0,
            errors: ErrorTally {
                calc_error: 1,
                concept_not_aware: 1,
                ..Default::default()
            },
        };

        let json = serde_json::to_value(block).unwrap();

        assert_eq!(json["marks"], 90);
        assert_eq!(json["accuracy"], 92.0);
        assert_eq!(json["calcError"], 1);
        assert_eq!(json["conceptNotAware"], 1);
        assert_eq!(json["lackOfTime"], 0);
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn input_ignores_derived_fields_and_defaults_tallies() {
        let input: SubjectInput = serde_json::from_value(serde_json::json!({
            "marks": 91,
            "unattempted": 1,
            "incorrect": 40,
            "accuracy": 12.5,
            "readingError": 2
        }))
        .unwrap();

        assert_eq!(input.marks, 91);
        assert_eq!(input.unattempted, 1);
        assert_eq!(input.errors.reading_error, 2);
        assert_eq!(input.errors.calc_error, 0);
    }

    #[test]
    fn input_requires_marks() {
        let parsed = serde_json::from_value::<SubjectInput>(serde_json::json!({
            "unattempted": 1
        }));

        assert!(parsed.is_err());
    }
}
