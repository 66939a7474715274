// src/handlers/stats.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::stats::ErrorAnalysisParams,
    reporting::{dashboard, error_analysis},
    store::EntryStore,
};

/// Dashboard headline numbers and trend series. `null` when nothing is recorded.
pub async fn get_dashboard(
    State(store): State<Arc<dyn EntryStore>>,
) -> Result<impl IntoResponse, AppError> {
    let entries = store.list().await?;

    Ok(Json(dashboard(&entries)))
}

/// Mistake categories for `?view=total|physics|chemistry|maths` (default `total`).
pub async fn get_error_analysis(
    State(store): State<Arc<dyn EntryStore>>,
    Query(params): Query<ErrorAnalysisParams>,
) -> Result<impl IntoResponse, AppError> {
    let entries = store.list().await?;

    Ok(Json(error_analysis(&entries, params.view)))
}
