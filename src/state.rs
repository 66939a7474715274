use std::sync::Arc;

use axum::extract::FromRef;

use crate::store::{EntryStore, SqliteEntryStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntryStore>,
}

impl AppState {
    pub fn new(store: SqliteEntryStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl FromRef<AppState> for Arc<dyn EntryStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
