// src/reporting.rs

//! Read-only summaries over recorded sittings.
//!
//! These only read fields that scoring already derived; nothing here writes back.

use crate::{
    models::{
        performance::{ErrorTally, SubjectPerformance},
        stats::{
            CategoryContribution, CategoryCount, DashboardStats, EfficiencyPoint, ErrorAnalysis,
            ErrorView, SubjectAverage, TrendPoint,
        },
        test_entry::{Subject, TestEntry},
    },
    scoring::{TOTAL_POOL_SIZE, round1},
};

/// The six self-reported mistake categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Calculation,
    Misconception,
    ConceptGap,
    Reading,
    ExtraThinking,
    TimePressure,
}

impl ErrorCategory {
    pub const ALL: [ErrorCategory; 6] = [
        ErrorCategory::Calculation,
        ErrorCategory::Misconception,
        ErrorCategory::ConceptGap,
        ErrorCategory::Reading,
        ErrorCategory::ExtraThinking,
        ErrorCategory::TimePressure,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Calculation => "Calculation",
            ErrorCategory::Misconception => "Misconception",
            ErrorCategory::ConceptGap => "Concept Gap",
            ErrorCategory::Reading => "Reading",
            ErrorCategory::ExtraThinking => "Extra Thinking",
            ErrorCategory::TimePressure => "Time Pressure",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            ErrorCategory::Calculation => "Calc",
            ErrorCategory::Misconception => "Misc",
            ErrorCategory::ConceptGap => "Gap",
            ErrorCategory::Reading => "Read",
            ErrorCategory::ExtraThinking => "Think",
            ErrorCategory::TimePressure => "Time",
        }
    }

    pub fn count(self, tally: &ErrorTally) -> u32 {
        match self {
            ErrorCategory::Calculation => tally.calc_error,
            ErrorCategory::Misconception => tally.misconception,
            ErrorCategory::ConceptGap => tally.concept_not_aware,
            ErrorCategory::Reading => tally.reading_error,
            ErrorCategory::ExtraThinking => tally.extra_thinking,
            ErrorCategory::TimePressure => tally.lack_of_time,
        }
    }
}

fn view_block(entry: &TestEntry, view: ErrorView) -> &SubjectPerformance {
    match view {
        ErrorView::Total => &entry.total,
        ErrorView::Physics => entry.subject(Subject::Physics),
        ErrorView::Chemistry => entry.subject(Subject::Chemistry),
        ErrorView::Maths => entry.subject(Subject::Maths),
    }
}

fn category_sum<'a, I>(blocks: I, category: ErrorCategory) -> u64
where
    I: IntoIterator<Item = &'a SubjectPerformance>,
{
    blocks
        .into_iter()
        .map(|b| u64::from(category.count(&b.errors)))
        .sum()
}

fn mean<I>(values: I, n: usize) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().sum::<f64>() / n as f64
}

/// Dashboard summary, or `None` when nothing has been recorded yet.
///
/// `entries` is expected newest first, as the store lists them.
pub fn dashboard(entries: &[TestEntry]) -> Option<DashboardStats> {
    if entries.is_empty() {
        return None;
    }
    let n = entries.len();

    // Stable sort over the reversed list keeps same-day sittings in recording order.
    let mut chronological: Vec<&TestEntry> = entries.iter().rev().collect();
    chronological.sort_by_key(|e| e.date);
    let latest = chronological.last()?;

    let avg_marks = mean(entries.iter().map(|e| f64::from(e.total.marks)), n);
    let avg_accuracy = mean(entries.iter().map(|e| e.total.accuracy), n);

    let subject_averages = Subject::ALL
        .iter()
        .map(|&subject| SubjectAverage {
            subject,
            name: subject.label(),
            avg: round1(mean(
                entries.iter().map(|e| f64::from(e.subject(subject).marks)),
                n,
            )),
        })
        .collect();

    let trend = chronological
        .iter()
        .map(|e| TrendPoint {
            date: e.date,
            test_name: e.test_name.clone(),
            total: e.total.marks,
            physics: e.physics.marks,
            chemistry: e.chemistry.marks,
            maths: e.maths.marks,
            accuracy: e.total.accuracy,
        })
        .collect();

    let efficiency = entries
        .iter()
        .map(|e| EfficiencyPoint {
            test_name: e.test_name.clone(),
            attempts: i64::from(TOTAL_POOL_SIZE) - i64::from(e.total.unattempted),
            accuracy: e.total.accuracy,
            marks: e.total.marks,
        })
        .collect();

    Some(DashboardStats {
        entry_count: n,
        latest_mark: latest.total.marks,
        avg_marks: round1(avg_marks),
        avg_accuracy: round1(avg_accuracy),
        subject_averages,
        trend,
        efficiency,
    })
}

/// Error category totals for the chosen view, plus a per-subject split.
pub fn error_analysis(entries: &[TestEntry], view: ErrorView) -> ErrorAnalysis {
    if entries.is_empty() {
        return ErrorAnalysis::default();
    }

    let radar = ErrorCategory::ALL
        .iter()
        .map(|&category| CategoryCount {
            label: category.label(),
            value: category_sum(entries.iter().map(|e| view_block(e, view)), category),
        })
        .collect();

    let per_subject = |subject: Subject, category: ErrorCategory| {
        category_sum(entries.iter().map(|e| e.subject(subject)), category)
    };

    let contribution = ErrorCategory::ALL
        .iter()
        .map(|&category| CategoryContribution {
            category: category.short_label(),
            physics: per_subject(Subject::Physics, category),
            chemistry: per_subject(Subject::Chemistry, category),
            maths: per_subject(Subject::Maths, category),
        })
        .collect();

    ErrorAnalysis {
        radar,
        contribution,
    }
}
