pub mod catalog;
pub mod ledger;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::product;
use crate::errors::FetchError;
use crate::screen::StockStore;

pub use catalog::ProductCatalogService;
pub use ledger::{classify, MovementDate, MovementKind, MovementLedgerService, MovementView};

/// The two read services behind the stock screen, bundled so application
/// state and the screen share one handle.
#[derive(Clone)]
pub struct StockServices {
    pub catalog: ProductCatalogService,
    pub ledger: MovementLedgerService,
}

impl StockServices {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            catalog: ProductCatalogService::new(db_pool.clone()),
            ledger: MovementLedgerService::new(db_pool),
        }
    }
}

#[async_trait]
impl StockStore for StockServices {
    async fn fetch_products(&self) -> Result<Vec<product::Model>, FetchError> {
        self.catalog.load_all().await
    }

    async fn fetch_movements(&self, product_id: Uuid) -> Result<Vec<MovementView>, FetchError> {
        self.ledger.load_for_product(product_id).await
    }
}
