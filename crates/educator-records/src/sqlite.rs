//! SQLite-backed [`RecordStore`].
//!
//! A single `students` table; scores are stored as a JSON column. IDs are
//! `stu_` + UUIDv7, assigned on insert, so insertion order and id order
//! agree.

use async_trait::async_trait;
use rusqlite::{Connection, Row, params};
use tracing::debug;
use uuid::Uuid;

use educator_core::records::{NewStudentRecord, Scores, StudentRecord};

use crate::connection::ConnectionPool;
use crate::errors::{Result, StoreError};
use crate::store::RecordStore;

/// Schema for the students table.
const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS students (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    grade INTEGER NOT NULL,
    period TEXT NOT NULL,
    scores TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
)";

/// Run schema migrations on a connection.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)
        .map_err(|e| StoreError::Migration {
            message: format!("students table: {e}"),
        })?;
    Ok(())
}

/// Map a row (`id, name, grade, period, scores`) to a [`StudentRecord`].
fn row_to_record(row: &Row<'_>) -> rusqlite::Result<StudentRecord> {
    let scores_json: String = row.get(4)?;
    let scores: Scores = serde_json::from_str(&scores_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(StudentRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        grade: row.get(2)?,
        period: row.get(3)?,
        scores,
    })
}

/// r2d2-pooled SQLite record store.
pub struct SqliteRecordStore {
    pool: ConnectionPool,
}

impl SqliteRecordStore {
    /// Wrap an existing pool. [`run_migrations`] must have been applied.
    #[must_use]
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    /// Create a migrated in-memory store (for testing).
    pub fn new_in_memory() -> Result<Self> {
        let pool = crate::connection::new_in_memory(&crate::connection::ConnectionConfig::default())?;
        let conn = pool.get()?;
        run_migrations(&conn)?;
        Ok(Self::new(pool))
    }

    fn list_sync(&self) -> Result<Vec<StudentRecord>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, grade, period, scores FROM students ORDER BY created_at, id",
        )?;
        let rows = stmt.query_map([], row_to_record)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    fn create_sync(&self, record: NewStudentRecord) -> Result<StudentRecord> {
        let id = format!("stu_{}", Uuid::now_v7());
        let scores_json = serde_json::to_string(&record.scores)?;
        let conn = self.pool.get()?;
        let _ = conn.execute(
            "INSERT INTO students (id, name, grade, period, scores) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id, record.name, record.grade, record.period, scores_json],
        )?;
        debug!(%id, name = %record.name, "student record created");
        Ok(record.with_id(id))
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn list(&self) -> Result<Vec<StudentRecord>> {
        self.list_sync()
    }

    async fn create(&self, record: NewStudentRecord) -> Result<StudentRecord> {
        self.create_sync(record)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn new_record(name: &str, math: f64) -> NewStudentRecord {
        NewStudentRecord {
            name: name.into(),
            grade: 3,
            period: "2026-I".into(),
            scores: Scores {
                math,
                language: 12.0,
                science: 13.0,
            },
        }
    }

    #[tokio::test]
    async fn list_empty_store() {
        let store = SqliteRecordStore::new_in_memory().unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_assigns_prefixed_id() {
        let store = SqliteRecordStore::new_in_memory().unwrap();
        let record = store.create(new_record("Ana", 14.0)).await.unwrap();
        assert!(record.id.starts_with("stu_"));
        assert_eq!(record.name, "Ana");
    }

    #[tokio::test]
    async fn list_returns_insertion_order() {
        let store = SqliteRecordStore::new_in_memory().unwrap();
        let _ = store.create(new_record("Ana", 14.0)).await.unwrap();
        let _ = store.create(new_record("Luis", 9.0)).await.unwrap();
        let _ = store.create(new_record("Eva", 17.0)).await.unwrap();

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Ana", "Luis", "Eva"]);
    }

    #[tokio::test]
    async fn scores_roundtrip_through_json_column() {
        let store = SqliteRecordStore::new_in_memory().unwrap();
        let created = store.create(new_record("Ana", 14.5)).await.unwrap();
        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].scores, created.scores);
        assert!((listed[0].scores.math - 14.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn file_backed_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.db");
        let pool = crate::connection::new_file(
            path.to_str().unwrap(),
            &crate::connection::ConnectionConfig::default(),
        )
        .unwrap();
        run_migrations(&pool.get().unwrap()).unwrap();

        let store = SqliteRecordStore::new(pool.clone());
        let _ = store.create(new_record("Ana", 14.0)).await.unwrap();

        let reopened = SqliteRecordStore::new(pool);
        assert_eq!(reopened.list().await.unwrap().len(), 1);
    }
}
