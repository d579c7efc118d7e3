//! # Holiday Calendar Backend
//!
//! REST backend that owns the list of holidays for the holiday calendar.
//!
//! ## Architecture
//!
//! ```text
//! REST layer (axum handlers)
//!     ↓
//! Domain layer (HolidayService: validation, upsert rules)
//!     ↓
//! Storage layer (HolidayStorage trait, CSV file implementation)
//! ```
//!
//! The surface is deliberately tiny: list, create (upsert by date) and delete
//! by date key. The egui frontend talks to it over HTTP only.

pub mod config;
pub mod domain;
pub mod rest;
pub mod storage;

use std::sync::Arc;

use axum::{
    http::Method,
    routing::{delete, get},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub use config::BackendConfig;
pub use domain::{HolidayError, HolidayService};
pub use storage::{CsvHolidayRepository, HolidayStorage};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub holiday_service: HolidayService,
}

impl AppState {
    pub fn new(storage: Arc<dyn HolidayStorage>) -> Self {
        Self {
            holiday_service: HolidayService::new(storage),
        }
    }
}

/// Initialize the backend with CSV storage in the configured data directory
pub fn initialize_backend(config: &BackendConfig) -> anyhow::Result<AppState> {
    info!("Setting up holiday storage in {}", config.data_directory.display());
    let repository = CsvHolidayRepository::new(&config.data_directory)?;
    Ok(AppState::new(Arc::new(repository)))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // The UI may be served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .route("/holidays", get(rest::list_holidays).post(rest::create_holiday))
        .route("/holidays/:date", delete(rest::delete_holiday))
        .layer(cors)
        .with_state(app_state)
}

/// Serve the REST API on an already bound listener until the task is dropped
pub async fn serve(listener: TcpListener, app_state: AppState) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    info!("Listening on {}", addr);
    axum::serve(listener, create_router(app_state)).await?;
    Ok(())
}
