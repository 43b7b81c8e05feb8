//! In-memory [`RecordStore`] for tests.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use educator_core::records::{NewStudentRecord, StudentRecord};

use crate::errors::Result;
use crate::store::RecordStore;

/// Vec-backed store; insertion order is iteration order.
#[derive(Default)]
pub struct MemoryRecordStore {
    records: RwLock<Vec<StudentRecord>>,
    next_id: AtomicU64,
}

impl MemoryRecordStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with records.
    #[must_use]
    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        Self {
            next_id: AtomicU64::new(records.len() as u64),
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn list(&self) -> Result<Vec<StudentRecord>> {
        Ok(self.records.read().expect("store lock poisoned").clone())
    }

    async fn create(&self, record: NewStudentRecord) -> Result<StudentRecord> {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = record.with_id(format!("stu_{n}"));
        self.records
            .write()
            .expect("store lock poisoned")
            .push(record.clone());
        Ok(record)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
