use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::FetchError;
use crate::services::MovementView;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct MovementListResponse {
    pub product_id: Uuid,
    pub movements: Vec<MovementView>,
    pub total: usize,
}

/// The classified movement ledger for one product, most recent first.
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}/movements",
    params(
        ("id" = Uuid, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Classified movement ledger", body = MovementListResponse),
        (status = 502, description = "Data store unavailable", body = crate::errors::ErrorResponse)
    ),
    tag = "movements"
)]
pub async fn list_movements(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> Result<impl IntoResponse, FetchError> {
    let movements = state.services.ledger.load_for_product(product_id).await?;

    Ok(Json(MovementListResponse {
        product_id,
        total: movements.len(),
        movements,
    }))
}
