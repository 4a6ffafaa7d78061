use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stock View API",
        version = "0.1.0",
        description = r#"
Inventory stock browsing API.

- **Product list**: the full product set, filtered by a free-text search over
  name, code, and category and sorted by any column (nulls always last).
- **Movement ledger**: a per-product history of stock movements with derived
  human-readable descriptions and safely parsed dates.

All endpoints are read-only; products and movements are created and mutated
by external systems.
"#,
        license(name = "MIT")
    ),
    paths(
        crate::handlers::health::health_check,
        crate::handlers::products::list_products,
        crate::handlers::movements::list_movements,
    ),
    components(schemas(
        crate::errors::ErrorResponse,
        crate::handlers::products::ProductRow,
        crate::handlers::products::ProductListResponse,
        crate::handlers::movements::MovementListResponse,
        crate::services::MovementView,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "products", description = "Product list"),
        (name = "movements", description = "Per-product movement ledger"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn openapi_document_builds() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/products"));
        assert!(doc
            .paths
            .paths
            .contains_key("/api/v1/products/{id}/movements"));
    }
}
