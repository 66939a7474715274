// src/handlers/score.rs

use axum::{Json, response::IntoResponse};

use crate::{
    error::AppError,
    models::{performance::SubjectInput, test_entry::ScoreSheet},
    scoring::score_subject,
};

/// Scores a single subject without storing anything.
///
/// Entry forms call this whenever `marks` or `unattempted` changes so the
/// derived fields shown to the user are always current.
pub async fn preview_subject(
    Json(input): Json<SubjectInput>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(score_subject(&input)))
}

/// Scores a whole sitting (three subjects plus total) without storing anything.
pub async fn preview_sheet(Json(sheet): Json<ScoreSheet>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(sheet.score()))
}
