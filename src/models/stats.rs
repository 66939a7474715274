// src/models/stats.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::test_entry::Subject;

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub entry_count: usize,
    /// Total marks of the most recent sitting.
    pub latest_mark: i32,
    pub avg_marks: f64,
    pub avg_accuracy: f64,
    pub subject_averages: Vec<SubjectAverage>,
    /// Oldest sitting first.
    pub trend: Vec<TrendPoint>,
    pub efficiency: Vec<EfficiencyPoint>,
}

/// Mean marks for one subject across all sittings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectAverage {
    pub subject: Subject,
    pub name: &'static str,
    pub avg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub test_name: String,
    pub total: i32,
    pub physics: i32,
    pub chemistry: i32,
    pub maths: i32,
    pub accuracy: f64,
}

/// Attempts against accuracy for one sitting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyPoint {
    pub test_name: String,
    pub attempts: i64,
    pub accuracy: f64,
    pub marks: i32,
}

/// Which block the error radar reads from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorView {
    #[default]
    Total,
    Physics,
    Chemistry,
    Maths,
}

/// Query params for `GET /api/stats/errors`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorAnalysisParams {
    #[serde(default)]
    pub view: ErrorView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub label: &'static str,
    pub value: u64,
}

/// One error category split by subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryContribution {
    #[serde(rename = "type")]
    pub category: &'static str,
    pub physics: u64,
    pub chemistry: u64,
    pub maths: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ErrorAnalysis {
    pub radar: Vec<CategoryCount>,
    pub contribution: Vec<CategoryContribution>,
}
