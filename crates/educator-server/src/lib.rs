//! # educator-server
//!
//! Axum HTTP surface for the Educator backend:
//!
//! - `POST /api/chat` — record summary + context injection + completion proxy
//! - `GET /api/students` / `POST /api/students` — record CRUD
//! - `GET /health` — liveness
//! - `GET /` — banner
//!
//! All pipeline failures are mapped to HTTP status + JSON error bodies at
//! this boundary; none crash the process.

#![deny(unsafe_code)]

pub mod config;
pub mod errors;
pub mod health;
pub mod server;

pub use config::ServerConfig;
pub use errors::ApiError;
pub use server::{AppState, EducatorServer};
