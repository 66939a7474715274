// src/handlers/transfer.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};
use chrono::Local;
use serde_json::Value;

use crate::{error::AppError, models::test_entry::parse_history, store::EntryStore};

/// Downloads the full history as a JSON array.
pub async fn export_entries(
    State(store): State<Arc<dyn EntryStore>>,
) -> Result<impl IntoResponse, AppError> {
    let entries = store.list().await?;
    let filename = format!("test_history_{}.json", Local::now().format("%Y-%m-%d"));

    Ok((
        [(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )],
        Json(entries),
    ))
}

/// Replaces the full history with an uploaded file.
pub async fn import_entries(
    State(store): State<Arc<dyn EntryStore>>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let entries = parse_history(payload)?;

    let imported = store.replace_all(&entries).await?;
    tracing::info!("Imported {} test entries", imported);

    Ok(Json(serde_json::json!({ "imported": imported })))
}
