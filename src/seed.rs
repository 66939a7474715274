// src/seed.rs

use crate::{error::AppError, models::test_entry::parse_history, store::EntryStore};

const SAMPLE_ENTRIES: &str = include_str!("../data/sample_entries.json");

/// Loads the bundled sample sittings into an empty store.
///
/// Returns how many entries were written; a store that already holds data is
/// left untouched.
pub async fn seed_sample_entries(store: &dyn EntryStore) -> Result<usize, AppError> {
    if store.count().await? > 0 {
        return Ok(0);
    }

    let payload: serde_json::Value = serde_json::from_str(SAMPLE_ENTRIES)?;
    let entries = parse_history(payload)?;

    tracing::info!("Seeding {} sample test entries", entries.len());
    store.replace_all(&entries).await
}
