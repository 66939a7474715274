// src/models/test_entry.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{FromRow, types::Json};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppError,
    models::performance::{SubjectInput, SubjectPerformance},
    scoring::{aggregate_total, score_subject},
};

/// The three papers of a sitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Physics,
    Chemistry,
    Maths,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Physics, Subject::Chemistry, Subject::Maths];

    pub fn label(self) -> &'static str {
        match self {
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Maths => "Maths",
        }
    }
}

/// Raw input for a whole sitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSheet {
    pub physics: SubjectInput,
    pub chemistry: SubjectInput,
    pub maths: SubjectInput,
}

/// A fully derived sitting, minus identity and metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredSheet {
    pub physics: SubjectPerformance,
    pub chemistry: SubjectPerformance,
    pub maths: SubjectPerformance,
    pub total: SubjectPerformance,
}

impl ScoreSheet {
    /// Scores each subject, then aggregates. The total is only computed once
    /// all three subjects are final.
    pub fn score(&self) -> ScoredSheet {
        let physics = score_subject(&self.physics);
        let chemistry = score_subject(&self.chemistry);
        let maths = score_subject(&self.maths);
        let total = aggregate_total(&physics, &chemistry, &maths);

        ScoredSheet {
            physics,
            chemistry,
            maths,
            total,
        }
    }
}

/// One recorded sitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub test_name: String,
    pub physics: SubjectPerformance,
    pub chemistry: SubjectPerformance,
    pub maths: SubjectPerformance,
    pub total: SubjectPerformance,
}

impl TestEntry {
    /// Builds a record from raw input, scoring every block.
    ///
    /// The name is kept verbatim apart from surrounding whitespace; a blank
    /// name becomes `Test on <date>`.
    pub fn assemble(id: Uuid, date: NaiveDate, test_name: Option<&str>, sheet: &ScoreSheet) -> Self {
        let ScoredSheet {
            physics,
            chemistry,
            maths,
            total,
        } = sheet.score();

        Self {
            id,
            date,
            test_name: default_test_name(test_name, date),
            physics,
            chemistry,
            maths,
            total,
        }
    }

    pub fn subject(&self, subject: Subject) -> &SubjectPerformance {
        match subject {
            Subject::Physics => &self.physics,
            Subject::Chemistry => &self.chemistry,
            Subject::Maths => &self.maths,
        }
    }
}

fn default_test_name(name: Option<&str>, date: NaiveDate) -> String {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("Test on {}", date.format("%Y-%m-%d")),
    }
}

/// DTO for creating or replacing a sitting.
///
/// Edits always resupply every subject; there is no partial update.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EntryRequest {
    /// Defaults to today.
    pub date: Option<NaiveDate>,
    #[validate(length(max = 100, message = "Test name must be at most 100 characters."))]
    pub test_name: Option<String>,
    pub physics: SubjectInput,
    pub chemistry: SubjectInput,
    pub maths: SubjectInput,
}

impl EntryRequest {
    pub fn sheet(&self) -> ScoreSheet {
        ScoreSheet {
            physics: self.physics,
            chemistry: self.chemistry,
            maths: self.maths,
        }
    }

    /// Validates and turns the request into a record carrying `id`.
    pub fn into_entry(self, id: Uuid, today: NaiveDate) -> Result<TestEntry, AppError> {
        self.validate()?;

        let date = self.date.unwrap_or(today);

        Ok(TestEntry::assemble(
            id,
            date,
            self.test_name.as_deref(),
            &self.sheet(),
        ))
    }
}

/// One element of an imported history file.
///
/// Derived fields (`incorrect`, `accuracy`, `total`) may be present but are
/// ignored; the record is re-scored from its raw values.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedEntry {
    pub id: Option<Uuid>,
    pub date: NaiveDate,
    #[serde(default)]
    pub test_name: Option<String>,
    pub physics: SubjectInput,
    pub chemistry: SubjectInput,
    pub maths: SubjectInput,
}

impl ImportedEntry {
    pub fn into_entry(self) -> TestEntry {
        let sheet = ScoreSheet {
            physics: self.physics,
            chemistry: self.chemistry,
            maths: self.maths,
        };
        TestEntry::assemble(
            self.id.unwrap_or_else(Uuid::new_v4),
            self.date,
            self.test_name.as_deref(),
            &sheet,
        )
    }
}

/// Parses an exported history file.
///
/// The payload must be a JSON array; anything else is rejected rather than
/// coerced. Stored derived fields are discarded and recomputed.
pub fn parse_history(payload: Value) -> Result<Vec<TestEntry>, AppError> {
    let Value::Array(items) = payload else {
        return Err(AppError::BadRequest(
            "Invalid file format: expected an array of test entries".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value::<ImportedEntry>(item)
                .map(ImportedEntry::into_entry)
                .map_err(|e| AppError::BadRequest(format!("Invalid entry at index {}: {}", i, e)))
        })
        .collect()
}

/// Represents the 'test_entries' table in the database.
/// Subject blocks are stored as JSON text.
#[derive(Debug, Clone, FromRow)]
pub struct TestEntryRow {
    pub id: String,
    pub date: NaiveDate,
    pub test_name: String,
    pub physics: Json<SubjectPerformance>,
    pub chemistry: Json<SubjectPerformance>,
    pub maths: Json<SubjectPerformance>,
    pub total: Json<SubjectPerformance>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<TestEntryRow> for TestEntry {
    type Error = AppError;

    fn try_from(row: TestEntryRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id).map_err(|e| {
            AppError::InternalServerError(format!("Corrupt entry id '{}': {}", row.id, e))
        })?;

        Ok(TestEntry {
            id,
            date: row.date,
            test_name: row.test_name,
            physics: row.physics.0,
            chemistry: row.chemistry.0,
            maths: row.maths.0,
            total: row.total.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::performance::ErrorTally;
    use serde_json::json;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn input(marks: i32, unattempted: u32) -> SubjectInput {
        SubjectInput {
            marks,
            unattempted,
            errors: ErrorTally::default(),
        }
    }

    fn sheet() -> ScoreSheet {
        ScoreSheet {
            physics: input(90, 0),
            chemistry: input(80, 0),
            maths: input(91, 1),
        }
    }

    #[test]
    fn assemble_derives_every_block() {
        let entry = TestEntry::assemble(Uuid::new_v4(), date("2025-12-24"), Some("DFT 2"), &sheet());

        assert_eq!(entry.test_name, "DFT 2");
        assert_eq!(entry.physics.accuracy, 92.0);
        assert_eq!(entry.chemistry.accuracy, 84.0);
        assert_eq!(entry.maths.accuracy, 95.83);
        assert_eq!(
            entry.total,
            aggregate_total(&entry.physics, &entry.chemistry, &entry.maths)
        );
        assert_eq!(entry.total.accuracy, 90.54);
    }

    #[test]
    fn blank_name_defaults_to_date() {
        let d = date("2025-12-22");

        let unnamed = TestEntry::assemble(Uuid::new_v4(), d, None, &sheet());
        let blank = TestEntry::assemble(Uuid::new_v4(), d, Some("   "), &sheet());

        assert_eq!(unnamed.test_name, "Test on 2025-12-22");
        assert_eq!(blank.test_name, "Test on 2025-12-22");
    }

    #[test]
    fn names_are_kept_verbatim() {
        let d = date("2025-12-24");

        let entry = TestEntry::assemble(Uuid::new_v4(), d, Some("  P & C <mock> \"final\" "), &sheet());

        assert_eq!(entry.test_name, "P & C <mock> \"final\"");
    }

    #[test]
    fn entry_round_trips_through_interchange_shape() {
        let entry = TestEntry::assemble(Uuid::new_v4(), date("2025-12-24"), Some("DFT 2"), &sheet());

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["testName"], "DFT 2");
        assert_eq!(json["date"], "2025-12-24");
        assert_eq!(json["total"]["marks"], 261);

        let back: TestEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn request_rejects_long_names() {
        let req = EntryRequest {
            date: None,
            test_name: Some("x".repeat(101)),
            physics: input(0, 0),
            chemistry: input(0, 0),
            maths: input(0, 0),
        };

        let err = req.into_entry(Uuid::new_v4(), date("2026-01-01"));

        assert!(matches!(err, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn request_defaults_date_to_today() {
        let req = EntryRequest {
            date: None,
            test_name: None,
            physics: input(90, 0),
            chemistry: input(80, 0),
            maths: input(91, 1),
        };

        let entry = req.into_entry(Uuid::new_v4(), date("2026-01-01")).unwrap();

        assert_eq!(entry.date, date("2026-01-01"));
        assert_eq!(entry.test_name, "Test on 2026-01-01");
    }

    #[test]
    fn imported_entry_ignores_stored_totals() {
        let raw = json!({
            "date": "2025-12-22",
            "testName": "DFT 1",
            "physics": { "marks": 85, "unattempted": 0, "incorrect": 99, "accuracy": 1, "calcError": 3 },
            "chemistry": { "marks": 85, "unattempted": 0 },
            "maths": { "marks": 96, "unattempted": 1, "extraThinking": 1 },
            "total": { "marks": 0, "unattempted": 0, "incorrect": 0, "accuracy": 0 }
        });

        let entry = serde_json::from_value::<ImportedEntry>(raw).unwrap().into_entry();

        assert_eq!(entry.physics.incorrect, 3.0);
        assert_eq!(entry.physics.accuracy, 88.0);
        assert_eq!(entry.total.marks, 266);
        assert_eq!(entry.total.incorrect, 6.0);
        assert_eq!(entry.total.accuracy, 91.89);
        assert_eq!(entry.total.errors.calc_error, 3);
        assert_eq!(entry.total.errors.extra_thinking, 1);
    }

    #[test]
    fn subject_lookup() {
        let entry = TestEntry::assemble(Uuid::new_v4(), date("2025-12-24"), None, &sheet());

        let marks: Vec<i32> = Subject::ALL.iter().map(|s| entry.subject(*s).marks).collect();

        assert_eq!(marks, vec![90, 80, 91]);
        assert_eq!(Subject::Chemistry.label(), "Chemistry");
    }

    #[test]
    fn rejects_non_array_payloads() {
        for payload in [json!({ "entries": [] }), json!("[]"), json!(null), json!(42)] {
            assert!(matches!(parse_history(payload), Err(AppError::BadRequest(_))));
        }
    }

    #[test]
    fn rejects_malformed_elements() {
        let payload = json!([
            { "date": "2025-12-24", "physics": { "marks": 90, "unattempted": 0 },
              "chemistry": { "marks": 80, "unattempted": 0 },
              "maths": { "marks": 91, "unattempted": 1 } },
            { "date": "2025-12-22", "physics": { "marks": "ninety" } }
        ]);

        match parse_history(payload) {
            Err(AppError::BadRequest(msg)) => assert!(msg.contains("index 1")),
            other => panic!("expected bad request, got {:?}", other),
        }
    }

    #[test]
    fn imported_names_survive_unescaped() {
        let payload = json!([
            { "date": "2025-12-24", "testName": "P & C <mock>",
              "physics": { "marks": 90, "unattempted": 0 },
              "chemistry": { "marks": 80, "unattempted": 0 },
              "maths": { "marks": 91, "unattempted": 1 } }
        ]);

        let first = parse_history(payload).unwrap();
        assert_eq!(first[0].test_name, "P & C <mock>");

        let again = parse_history(serde_json::to_value(&first).unwrap()).unwrap();
        assert_eq!(again, first);
    }

    #[test]
    fn empty_array_is_an_empty_history() {
        assert!(parse_history(json!([])).unwrap().is_empty());
    }

    #[test]
    fn assigns_ids_and_defaults_names() {
        let payload = json!([
            { "date": "2025-12-24",
              "physics": { "marks": 90, "unattempted": 0 },
              "chemistry": { "marks": 80, "unattempted": 0 },
              "maths": { "marks": 91, "unattempted": 1 } }
        ]);

        let entries = parse_history(payload).unwrap();

        assert_eq!(entries[0].test_name, "Test on 2025-12-24");
        assert!(!entries[0].id.is_nil());
        assert_eq!(entries[0].total.accuracy, 90.54);
    }
}
