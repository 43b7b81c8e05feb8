//! # educator-llm
//!
//! The chat-proxy pipeline:
//!
//! 1. [`summary::build_summary`] — deterministic text block from stored
//!    student records
//! 2. [`inject::inject_context`] — merges the summary into the leading
//!    system message
//! 3. [`proxy::CompletionProxy`] — builds the outbound request, calls the
//!    completion provider, and normalizes its response
//!
//! The pipeline is linear and fail-fast: no retries, no streaming, each
//! step terminal on failure.

#![deny(unsafe_code)]

pub mod inject;
pub mod proxy;
pub mod summary;

pub use proxy::{CompletionProxy, ProxyConfig, ProxyError, ProxyResult};
