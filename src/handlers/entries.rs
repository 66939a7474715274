// src/handlers/entries.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Local;
use uuid::Uuid;

use crate::{error::AppError, models::test_entry::EntryRequest, store::EntryStore};

/// Lists every recorded sitting, newest first.
pub async fn list_entries(
    State(store): State<Arc<dyn EntryStore>>,
) -> Result<impl IntoResponse, AppError> {
    let entries = store.list().await?;

    Ok(Json(entries))
}

/// Fetches one sitting by id.
pub async fn get_entry(
    State(store): State<Arc<dyn EntryStore>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let entry = store
        .get(id)
        .await?
        .ok_or(AppError::NotFound("Test entry not found".to_string()))?;

    Ok(Json(entry))
}

/// Records a new sitting.
///
/// * Assigns a fresh id.
/// * Scores all three subjects and the total before anything is stored.
pub async fn create_entry(
    State(store): State<Arc<dyn EntryStore>>,
    Json(payload): Json<EntryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let entry = payload.into_entry(Uuid::new_v4(), Local::now().date_naive())?;

    store.insert(&entry).await?;
    tracing::info!(
        "Recorded test entry {} ({}): {} marks, {}% accuracy",
        entry.id,
        entry.test_name,
        entry.total.marks,
        entry.total.accuracy
    );

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Replaces a sitting wholesale, keeping its id.
/// Every subject must be resupplied; all derived fields are recomputed.
pub async fn update_entry(
    State(store): State<Arc<dyn EntryStore>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EntryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let entry = payload.into_entry(id, Local::now().date_naive())?;

    if !store.replace(&entry).await? {
        return Err(AppError::NotFound("Test entry not found".to_string()));
    }
    tracing::info!("Updated test entry {}", entry.id);

    Ok(Json(entry))
}

/// Deletes one sitting.
pub async fn delete_entry(
    State(store): State<Arc<dyn EntryStore>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !store.delete(id).await? {
        return Err(AppError::NotFound("Test entry not found".to_string()));
    }
    tracing::info!("Deleted test entry {}", id);

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes every sitting.
pub async fn clear_entries(
    State(store): State<Arc<dyn EntryStore>>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = store.clear().await?;
    tracing::warn!("Cleared all test entries ({} removed)", deleted);

    Ok(Json(serde_json::json!({ "deleted": deleted })))
}
