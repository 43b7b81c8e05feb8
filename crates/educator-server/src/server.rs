//! `EducatorServer` — Axum HTTP server wiring the chat pipeline.
//!
//! Request flow for `/api/chat`: read records → build summary → proxy the
//! completion (which injects the summary into the leading system message)
//! → normalized envelope. Each request is an independent, stateless unit
//! of work; the store and the proxy's HTTP client are shared read-only.

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use educator_core::chat::{ChatRequest, ChatResponse};
use educator_core::records::{NewStudentRecord, StudentRecord};
use educator_llm::CompletionProxy;
use educator_llm::summary::build_summary;
use educator_records::RecordStore;

use crate::config::ServerConfig;
use crate::errors::ApiError;
use crate::health::{self, HealthResponse};

/// Root banner.
const BANNER: &str = "Educator backend is running";

/// Shared state accessible from Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Student record store.
    pub store: Arc<dyn RecordStore>,
    /// Completion proxy.
    pub proxy: Arc<CompletionProxy>,
    /// When the server started.
    pub start_time: Instant,
}

/// The main Educator server.
pub struct EducatorServer {
    config: ServerConfig,
    state: AppState,
}

impl EducatorServer {
    /// Create a new server.
    pub fn new(config: ServerConfig, store: Arc<dyn RecordStore>, proxy: CompletionProxy) -> Self {
        Self {
            config,
            state: AppState {
                store,
                proxy: Arc::new(proxy),
                start_time: Instant::now(),
            },
        }
    }

    /// Build the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_handler))
            .route("/api/students", get(list_students).post(create_student))
            .route("/api/chat", post(chat_handler))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Get the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Bind and serve until the process is stopped.
    pub async fn serve(self) -> std::io::Result<()> {
        let listener =
            tokio::net::TcpListener::bind((self.config.host.clone(), self.config.port)).await?;
        let addr = listener.local_addr()?;
        info!(%addr, "server listening");
        axum::serve(listener, self.router()).await
    }
}

/// GET /
async fn root_handler() -> &'static str {
    BANNER
}

/// GET /health
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(health::health_check(state.start_time))
}

/// GET /api/students
async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentRecord>>, ApiError> {
    let records = state.store.list().await?;
    Ok(Json(records))
}

/// POST /api/students
async fn create_student(
    State(state): State<AppState>,
    Json(record): Json<NewStudentRecord>,
) -> Result<(StatusCode, Json<StudentRecord>), ApiError> {
    let created = state.store.create(record).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /api/chat
///
/// The body is decoded from a raw JSON value so a missing or malformed
/// `messages` field maps to `400 {error}` rather than an extractor
/// rejection.
async fn chat_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ChatResponse>, ApiError> {
    let request: ChatRequest =
        serde_json::from_value(body).map_err(|e| educator_llm::ProxyError::InvalidInput {
            message: format!("invalid chat request: {e}"),
        })?;

    let records = state.store.list().await?;
    let summary = build_summary(&records);
    let response = state.proxy.complete(&request, &summary).await?;
    Ok(Json(response))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
