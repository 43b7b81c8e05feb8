//! The [`RecordStore`] trait consumed by the chat pipeline and the students
//! endpoints.

use async_trait::async_trait;

use educator_core::records::{NewStudentRecord, StudentRecord};

use crate::errors::Result;

/// Read/write access to stored student records.
///
/// Implementors must be `Send + Sync`; the store is shared across concurrent
/// request handlers behind an `Arc`. Records have no update or delete path —
/// they are created once and read-only afterward.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All stored records in insertion order.
    async fn list(&self) -> Result<Vec<StudentRecord>>;

    /// Persist a new record, returning it with its system-assigned id.
    async fn create(&self, record: NewStudentRecord) -> Result<StudentRecord>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_store_is_object_safe() {
        fn assert_object_safe(_: &dyn RecordStore) {}
        let _ = assert_object_safe;
    }

    #[test]
    fn record_store_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn RecordStore>();
    }
}
