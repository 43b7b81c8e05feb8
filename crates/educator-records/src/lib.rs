//! # educator-records
//!
//! The record store gateway. Exposes the [`RecordStore`] trait the chat
//! pipeline consumes (`list`), plus the create path used by the students
//! endpoint, with two implementations:
//!
//! - [`SqliteRecordStore`]: r2d2-pooled rusqlite repository
//! - [`MemoryRecordStore`]: in-memory store for tests

#![deny(unsafe_code)]

pub mod connection;
pub mod errors;
pub mod memory;
pub mod sqlite;
pub mod store;

pub use connection::{ConnectionConfig, ConnectionPool, new_file, new_in_memory};
pub use errors::{Result, StoreError};
pub use memory::MemoryRecordStore;
pub use sqlite::SqliteRecordStore;
pub use store::RecordStore;
