//! # educator-core
//!
//! Shared vocabulary for the Educator backend:
//!
//! - **Records**: `StudentRecord` and its score block, as stored and served
//! - **Chat**: `ChatMessage` / `ChatRequest` / `ChatResponse` wire types
//! - **Constants**: the pass threshold and request defaults

#![deny(unsafe_code)]

pub mod chat;
pub mod constants;
pub mod records;
