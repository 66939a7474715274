// src/store.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool, types::Json};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::test_entry::{TestEntry, TestEntryRow},
};

const SELECT_ENTRIES: &str = r#"
    SELECT id, date, test_name, physics, chemistry, maths, total, created_at, updated_at
    FROM test_entries
"#;

/// Storage for recorded sittings.
///
/// Implementations only persist what they are given: every entry passed in has
/// already been fully derived, and nothing here recomputes scores.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// All entries, newest sitting first.
    async fn list(&self) -> Result<Vec<TestEntry>, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<TestEntry>, AppError>;

    async fn insert(&self, entry: &TestEntry) -> Result<(), AppError>;

    /// Overwrites an existing entry with the same id. Returns `false` if none exists.
    async fn replace(&self, entry: &TestEntry) -> Result<bool, AppError>;

    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Removes every entry, returning how many were deleted.
    async fn clear(&self) -> Result<u64, AppError>;

    /// Swaps the whole collection in one transaction.
    async fn replace_all(&self, entries: &[TestEntry]) -> Result<usize, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}

/// SQLite-backed store using the `test_entries` table.
#[derive(Debug, Clone)]
pub struct SqliteEntryStore {
    pool: SqlitePool,
}

impl SqliteEntryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

async fn insert_with(
    conn: &mut SqliteConnection,
    entry: &TestEntry,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO test_entries
            (id, date, test_name, physics, chemistry, maths, total, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(entry.id.to_string())
    .bind(entry.date)
    .bind(&entry.test_name)
    .bind(Json(entry.physics))
    .bind(Json(entry.chemistry))
    .bind(Json(entry.maths))
    .bind(Json(entry.total))
    .bind(now)
    .bind(now)
    .execute(conn)
    .await?;

    Ok(())
}

#[async_trait]
impl EntryStore for SqliteEntryStore {
    async fn list(&self) -> Result<Vec<TestEntry>, AppError> {
        let rows: Vec<TestEntryRow> = sqlx::query_as(&format!(
            "{SELECT_ENTRIES} ORDER BY date DESC, created_at DESC, rowid DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list test entries: {:?}", e);
            AppError::from(e)
        })?;

        rows.into_iter().map(TestEntry::try_from).collect()
    }

    async fn get(&self, id: Uuid) -> Result<Option<TestEntry>, AppError> {
        let row: Option<TestEntryRow> = sqlx::query_as(&format!("{SELECT_ENTRIES} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(TestEntry::try_from).transpose()
    }

    async fn insert(&self, entry: &TestEntry) -> Result<(), AppError> {
        let mut conn = self.pool.acquire().await?;
        insert_with(&mut conn, entry, Utc::now()).await
    }

    async fn replace(&self, entry: &TestEntry) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE test_entries
            SET date = ?, test_name = ?, physics = ?, chemistry = ?, maths = ?, total = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(entry.date)
        .bind(&entry.test_name)
        .bind(Json(entry.physics))
        .bind(Json(entry.chemistry))
        .bind(Json(entry.maths))
        .bind(Json(entry.total))
        .bind(Utc::now())
        .bind(entry.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM test_entries WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn clear(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM test_entries")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn replace_all(&self, entries: &[TestEntry]) -> Result<usize, AppError> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        sqlx::query("DELETE FROM test_entries")
            .execute(&mut *tx)
            .await?;

        // Reverse so that, among same-day entries, earlier array positions list first.
        for entry in entries.iter().rev() {
            insert_with(&mut tx, entry, now).await?;
        }

        tx.commit().await?;

        Ok(entries.len())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM test_entries")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
