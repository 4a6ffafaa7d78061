//! Stock View API Library
//!
//! Inventory stock browsing: a product list with text filtering and column
//! sorting, and a per-product ledger of classified stock movements. The
//! screen logic lives in [`screen`]; the HTTP surface in [`handlers`].
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod notifications;
pub mod openapi;
pub mod screen;
pub mod services;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use serde_json::json;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub services: services::StockServices,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>, config: config::AppConfig) -> Self {
        let services = services::StockServices::new(db.clone());
        Self {
            db,
            config,
            services,
        }
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health::health_check))
        .route(
            "/openapi.json",
            get(|| async {
                use utoipa::OpenApi;
                Json(openapi::ApiDoc::openapi())
            }),
        )
        .nest("/api/v1", handlers::api_router())
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
