use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entities::product;
use crate::errors::FetchError;
use crate::screen::transform::{self, SortDirection, SortKey};
use crate::AppState;

/// Query parameters for the product list.
///
/// Unrecognized `sort_by`/`sort_order` values fall back to the defaults
/// (name, ascending) rather than rejecting the request.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ProductListQuery {
    /// Case-insensitive substring matched against name, code, and category
    pub search: Option<String>,
    /// Column to sort by (name, code, category, image_url, stock,
    /// promo_price, regular_price, cost_usd, cost_mxn)
    pub sort_by: Option<String>,
    /// asc or desc
    pub sort_order: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductRow {
    pub id: Uuid,
    pub name: Option<String>,
    pub code: Option<String>,
    pub category: Option<String>,
    pub stock: Option<Decimal>,
    pub promo_price: Option<Decimal>,
    pub regular_price: Option<Decimal>,
    pub cost_usd: Option<Decimal>,
    pub cost_mxn: Option<Decimal>,
    pub image_url: Option<String>,
}

impl From<product::Model> for ProductRow {
    fn from(model: product::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            code: model.code,
            category: model.category,
            stock: model.stock,
            promo_price: model.promo_price,
            regular_price: model.regular_price,
            cost_usd: model.cost_usd,
            cost_mxn: model.cost_mxn,
            image_url: model.image_url,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListResponse {
    pub products: Vec<ProductRow>,
    pub total: usize,
}

/// List products, filtered and sorted server-side with the same transform
/// the screen applies.
#[utoipa::path(
    get,
    path = "/api/v1/products",
    params(ProductListQuery),
    responses(
        (status = 200, description = "Filtered, sorted product list", body = ProductListResponse),
        (status = 502, description = "Data store unavailable", body = crate::errors::ErrorResponse)
    ),
    tag = "products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<impl IntoResponse, FetchError> {
    let products = state.services.catalog.load_all().await?;

    let sort_key = query
        .sort_by
        .as_deref()
        .and_then(|s| s.parse::<SortKey>().ok())
        .unwrap_or_default();
    let sort_direction = query
        .sort_order
        .as_deref()
        .and_then(|s| s.parse::<SortDirection>().ok())
        .unwrap_or_default();
    let search = query.search.as_deref().unwrap_or("");

    let view = transform::apply(&products, search, sort_key, sort_direction);
    let products: Vec<ProductRow> = view.into_iter().map(ProductRow::from).collect();

    Ok(Json(ProductListResponse {
        total: products.len(),
        products,
    }))
}
