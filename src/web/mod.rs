//! Web API module for Darkup.
//!
//! This module exposes theme state over HTTP so a page or widget can read
//! the palettes, change the active selection and fetch the generated
//! stylesheet.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/snapshot` - Client bootstrap snapshot
//! - `GET /api/selection` - Current selection with palette name and colors
//! - `PUT /api/selection` - Save the active selection
//! - `GET /api/palettes` - List built-in and custom palettes
//! - `POST /api/palettes` - Create a custom palette
//! - `PUT /api/palettes/{id}` - Update a custom palette
//! - `DELETE /api/palettes/{id}` - Delete a custom palette
//! - `GET /theme.css` - Stylesheet for the active theme
//!
//! Mutations answer with an envelope `{success, message, palette?}`.
//! Validation failures are 400, unknown palettes 404, storage failures 500.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::catalog::PaletteCatalog;
use crate::error::PaletteError;
use crate::handlers::{Envelope, PaletteRequest, SelectionRequest, ThemeRequests};
use crate::models::Palette;
use crate::render::{ClientSnapshot, ThemeRenderer};
use crate::services::{activate, CurrentThemeInfo, PaletteStore, ThemeResolver};
use crate::storage::OptionStore;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Option store shared by every request
    storage: Arc<dyn OptionStore>,
    /// Built-in palettes (immutable)
    catalog: Arc<PaletteCatalog>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(storage: Arc<dyn OptionStore>, catalog: Arc<PaletteCatalog>) -> Self {
        Self { storage, catalog }
    }

    fn requests(&self) -> ThemeRequests {
        ThemeRequests::new(self.storage.clone(), self.catalog.clone())
    }

    fn renderer(&self) -> ThemeRenderer {
        ThemeRenderer::new(self.storage.clone(), self.catalog.clone())
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Palette list response.
#[derive(Debug, Serialize)]
pub struct PaletteListResponse {
    /// Built-in palettes in catalog order.
    pub builtin: Vec<Palette>,
    /// Custom palettes ordered by id.
    pub custom: Vec<Palette>,
}

type ApiResult<T> = Result<T, (StatusCode, Json<Envelope>)>;

/// Maps a palette error to its status code and envelope body.
fn error_response(e: &PaletteError) -> (StatusCode, Json<Envelope>) {
    let status = match e {
        PaletteError::Validation(_) => StatusCode::BAD_REQUEST,
        PaletteError::NotFound { .. } => StatusCode::NOT_FOUND,
        PaletteError::Storage(inner) => {
            error!("Storage failure while handling request: {inner}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(Envelope::failure(e)))
}

/// Unwraps a JSON body, answering undecodable bodies with a 400 envelope.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        error_response(&PaletteError::validation(format!(
            "Invalid request body: {}",
            rejection.body_text()
        )))
    })
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/snapshot - Client bootstrap snapshot.
async fn get_snapshot(State(state): State<AppState>) -> Json<ClientSnapshot> {
    Json(state.renderer().snapshot())
}

/// GET /api/selection - Current selection.
async fn get_selection(State(state): State<AppState>) -> Json<CurrentThemeInfo> {
    let resolver = ThemeResolver::new(state.storage.clone(), state.catalog.clone());
    Json(resolver.current_info())
}

/// PUT /api/selection - Save the active selection.
async fn save_selection(
    State(state): State<AppState>,
    payload: Result<Json<SelectionRequest>, JsonRejection>,
) -> ApiResult<Json<Envelope>> {
    let request = json_body(payload)?;
    state
        .requests()
        .save_selection(&request)
        .map(Json)
        .map_err(|e| error_response(&e))
}

/// GET /api/palettes - List palettes.
async fn list_palettes(State(state): State<AppState>) -> ApiResult<Json<PaletteListResponse>> {
    let custom = PaletteStore::new(state.storage.clone(), state.catalog.clone())
        .list()
        .map_err(|e| error_response(&PaletteError::from(e)))?;

    Ok(Json(PaletteListResponse {
        builtin: state.catalog.all().to_vec(),
        custom,
    }))
}

/// POST /api/palettes - Create a custom palette.
async fn create_palette(
    State(state): State<AppState>,
    payload: Result<Json<PaletteRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Envelope>)> {
    let request = json_body(payload)?;
    let envelope = state
        .requests()
        .save_custom_palette(&request)
        .map_err(|e| error_response(&e))?;
    Ok((StatusCode::CREATED, Json(envelope)))
}

/// PUT /api/palettes/{id} - Update a custom palette.
async fn update_palette(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PaletteRequest>, JsonRejection>,
) -> ApiResult<Json<Envelope>> {
    let request = json_body(payload)?;
    state
        .requests()
        .update_custom_palette(&id, &request)
        .map(Json)
        .map_err(|e| error_response(&e))
}

/// DELETE /api/palettes/{id} - Delete a custom palette.
async fn delete_palette(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope>> {
    state
        .requests()
        .delete_custom_palette(&id)
        .map(Json)
        .map_err(|e| error_response(&e))
}

/// GET /theme.css - Stylesheet for the active theme; empty when none resolves.
async fn theme_css(State(state): State<AppState>) -> impl IntoResponse {
    let css = state.renderer().stylesheet().unwrap_or_default();
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css)
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // Any origin: the widget may be served from a different host than the API.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Client state
        .route("/api/snapshot", get(get_snapshot))
        .route("/api/selection", get(get_selection).put(save_selection))
        // Palette endpoints
        .route("/api/palettes", get(list_palettes).post(create_palette))
        .route(
            "/api/palettes/{id}",
            axum::routing::put(update_palette).delete(delete_palette),
        )
        // Stylesheet
        .route("/theme.css", get(theme_css))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// Writes default theme options first if the store is empty.
///
/// # Errors
///
/// Returns an error if activation fails or the server fails to start.
pub async fn run_server(
    storage: Arc<dyn OptionStore>,
    catalog: Arc<PaletteCatalog>,
    addr: SocketAddr,
) -> anyhow::Result<()> {
    activate(storage.clone(), catalog.clone())?;

    let app = create_router(AppState::new(storage, catalog));

    info!("Starting Darkup web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
