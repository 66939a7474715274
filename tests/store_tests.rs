// tests/store_tests.rs

use chrono::NaiveDate;
use sqlx::sqlite::SqlitePoolOptions;
use testtrack::{
    models::{
        performance::SubjectInput,
        test_entry::{ScoreSheet, TestEntry},
    },
    seed::seed_sample_entries,
    store::{EntryStore, SqliteEntryStore},
};
use uuid::Uuid;

async fn store() -> SqliteEntryStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    SqliteEntryStore::new(pool)
}

fn entry(date: &str, name: &str, physics_marks: i32) -> TestEntry {
    let input = |marks| SubjectInput {
        marks,
        unattempted: 0,
        ..Default::default()
    };
    let sheet = ScoreSheet {
        physics: input(physics_marks),
        chemistry: input(80),
        maths: input(75),
    };
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();

    TestEntry::assemble(Uuid::new_v4(), date, Some(name), &sheet)
}

#[tokio::test]
async fn insert_get_and_list_newest_first() {
    let store = store().await;
    let older = entry("2025-11-01", "Older", 60);
    let newer = entry("2025-12-01", "Newer", 70);

    store.insert(&older).await.unwrap();
    store.insert(&newer).await.unwrap();

    assert_eq!(store.get(older.id).await.unwrap(), Some(older.clone()));
    assert_eq!(store.list().await.unwrap(), vec![newer, older]);
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn same_day_entries_list_most_recent_first() {
    let store = store().await;
    let morning = entry("2025-12-01", "Morning", 60);
    let evening = entry("2025-12-01", "Evening", 70);

    store.insert(&morning).await.unwrap();
    store.insert(&evening).await.unwrap();

    let names: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.test_name)
        .collect();
    assert_eq!(names, vec!["Evening", "Morning"]);
}

#[tokio::test]
async fn duplicate_ids_conflict() {
    let store = store().await;
    let e = entry("2025-12-01", "Once", 60);

    store.insert(&e).await.unwrap();
    let again = store.insert(&e).await;

    assert!(matches!(
        again,
        Err(testtrack::error::AppError::Conflict(_))
    ));
}

#[tokio::test]
async fn replace_and_delete_report_missing_rows() {
    let store = store().await;
    let e = entry("2025-12-01", "Original", 60);

    assert!(!store.replace(&e).await.unwrap());
    assert!(!store.delete(e.id).await.unwrap());

    store.insert(&e).await.unwrap();
    let mut edited = e.clone();
    edited.test_name = "Edited".to_string();
    assert!(store.replace(&edited).await.unwrap());
    assert_eq!(store.get(e.id).await.unwrap().unwrap().test_name, "Edited");

    assert!(store.delete(e.id).await.unwrap());
    assert_eq!(store.get(e.id).await.unwrap(), None);
}

#[tokio::test]
async fn replace_all_swaps_the_collection() {
    let store = store().await;
    store.insert(&entry("2025-10-01", "Old", 10)).await.unwrap();

    let fresh = vec![
        entry("2025-12-02", "B", 50),
        entry("2025-12-02", "A", 40),
        entry("2025-12-01", "C", 30),
    ];
    let written = store.replace_all(&fresh).await.unwrap();

    assert_eq!(written, 3);
    assert_eq!(store.list().await.unwrap(), fresh);
    assert_eq!(store.clear().await.unwrap(), 3);
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn seeding_only_fills_an_empty_store() {
    let store = store().await;

    assert_eq!(seed_sample_entries(&store).await.unwrap(), 2);
    assert_eq!(seed_sample_entries(&store).await.unwrap(), 0);

    let entries = store.list().await.unwrap();
    assert_eq!(entries[0].test_name, "DFT 2");
    assert_eq!(entries[0].total.accuracy, 90.54);
    assert_eq!(entries[1].total.accuracy, 91.89);
}
