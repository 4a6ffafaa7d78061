pub mod health;
pub mod movements;
pub mod products;

use axum::{routing::get, Router};

use crate::AppState;

/// Assemble the API routes.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list_products))
        .route("/products/:id/movements", get(movements::list_movements))
}
