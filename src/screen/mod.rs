//! The stock-browsing screen: its explicit state record, the pure
//! filter/sort transform it recomputes, and the data-store seam it fetches
//! through.

pub mod state;
pub mod transform;

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::product;
use crate::errors::FetchError;
use crate::services::MovementView;

pub use state::{SelectionTicket, StockScreen};
pub use transform::{SortDirection, SortKey};

/// Read interface the screen fetches through. The production implementation
/// is the sea-orm-backed [`crate::services::StockServices`]; tests substitute
/// doubles to drive failure and race scenarios.
#[async_trait]
pub trait StockStore: Send + Sync {
    /// Fetch the full product set.
    async fn fetch_products(&self) -> Result<Vec<product::Model>, FetchError>;

    /// Fetch one product's classified movements, most recent first.
    async fn fetch_movements(&self, product_id: Uuid) -> Result<Vec<MovementView>, FetchError>;
}
