use std::sync::Arc;

use sea_orm::EntityTrait;
use tracing::{error, info, instrument};

use crate::db::DbPool;
use crate::entities::product::{self, Entity as Product};
use crate::errors::FetchError;

/// Product list provider: fetches the full product set in one read.
///
/// There is no pagination and no incremental merge; a successful load
/// replaces whatever the caller held before.
#[derive(Clone)]
pub struct ProductCatalogService {
    db_pool: Arc<DbPool>,
}

impl ProductCatalogService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn load_all(&self) -> Result<Vec<product::Model>, FetchError> {
        let db = &*self.db_pool;

        let products = Product::find().all(db).await.map_err(|e| {
            error!(error = %e, "Database error when fetching products");
            FetchError::from(e)
        })?;

        info!(count = products.len(), "Product set loaded");
        Ok(products)
    }
}
