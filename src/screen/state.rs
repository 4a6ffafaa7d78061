//! The screen's state record and its update rules.
//!
//! One struct holds everything the screen knows — no hidden globals. All
//! mutation happens through the methods below, which are the event handlers
//! of the original screen made explicit: load, search, sort toggle, row
//! selection, modal close.

use std::sync::Arc;

use tracing::{debug, instrument};
use uuid::Uuid;

use crate::entities::product;
use crate::errors::FetchError;
use crate::notifications::ErrorNotifier;
use crate::screen::transform::{self, SortDirection, SortKey};
use crate::screen::StockStore;
use crate::services::MovementView;

const PRODUCTS_LOAD_FAILED: &str = "Failed to load products.";
const MOVEMENTS_LOAD_FAILED: &str = "Failed to load movements.";

/// Key for an in-flight movement fetch.
///
/// Completions are only applied while their ticket is still current; a
/// selection change invalidates every earlier ticket, so an out-of-order
/// completion for a previous selection is discarded instead of overwriting
/// the ledger of the product now on screen. The underlying fetch cannot be
/// cancelled, and does not need to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket {
    product_id: Uuid,
    seq: u64,
}

impl SelectionTicket {
    pub fn product_id(&self) -> Uuid {
        self.product_id
    }
}

/// State of the stock-browsing screen.
pub struct StockScreen {
    store: Arc<dyn StockStore>,
    notifier: Arc<dyn ErrorNotifier>,
    products: Vec<product::Model>,
    search: String,
    sort_key: SortKey,
    sort_direction: SortDirection,
    selected: Option<product::Model>,
    movements: Vec<MovementView>,
    modal_open: bool,
    loading: bool,
    selection_seq: u64,
}

impl StockScreen {
    pub fn new(store: Arc<dyn StockStore>, notifier: Arc<dyn ErrorNotifier>) -> Self {
        Self {
            store,
            notifier,
            products: Vec::new(),
            search: String::new(),
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            selected: None,
            movements: Vec::new(),
            modal_open: false,
            loading: false,
            selection_seq: 0,
        }
    }

    /// Load (or reload) the full product set.
    ///
    /// On failure the held set degrades to empty and the notifier fires; the
    /// screen stays interactive and a later call retries. The loading flag
    /// drops on both exit paths.
    #[instrument(skip(self))]
    pub async fn load_products(&mut self) {
        self.loading = true;
        match self.store.fetch_products().await {
            Ok(products) => {
                self.products = products;
            }
            Err(err) => {
                debug!(error = %err, "product fetch failed");
                self.products.clear();
                self.notifier.notify_error(PRODUCTS_LOAD_FAILED);
            }
        }
        self.loading = false;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Column-header click: same key flips the direction, a new key sorts
    /// ascending.
    pub fn sort_by(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Asc;
        }
    }

    /// The presented view list: always a permutation/subset of the last
    /// successful fetch.
    pub fn visible_products(&self) -> Vec<product::Model> {
        transform::apply(&self.products, &self.search, self.sort_key, self.sort_direction)
    }

    /// Row click, first half: record the selection and clear the previous
    /// product's ledger before any fetch resolves, so stale rows never flash
    /// under the new title.
    pub fn begin_selection(&mut self, product: product::Model) -> SelectionTicket {
        self.selection_seq += 1;
        self.movements.clear();
        self.modal_open = false;
        let ticket = SelectionTicket {
            product_id: product.id,
            seq: self.selection_seq,
        };
        self.selected = Some(product);
        ticket
    }

    /// Row click, second half: apply a completed movement fetch.
    ///
    /// A ticket from a superseded selection is dropped outright. On success
    /// the ledger fills and the modal opens; on failure the notifier fires
    /// and the modal stays closed with no partial data.
    pub fn complete_selection(
        &mut self,
        ticket: SelectionTicket,
        result: Result<Vec<MovementView>, FetchError>,
    ) {
        if ticket.seq != self.selection_seq {
            debug!(product_id = %ticket.product_id, "discarding stale movement fetch");
            return;
        }
        match result {
            Ok(movements) => {
                self.movements = movements;
                self.modal_open = true;
            }
            Err(err) => {
                debug!(product_id = %ticket.product_id, error = %err, "movement fetch failed");
                self.movements.clear();
                self.notifier.notify_error(MOVEMENTS_LOAD_FAILED);
            }
        }
    }

    /// Row click, composed: select a product and await its ledger.
    pub async fn select_product(&mut self, product: product::Model) {
        let ticket = self.begin_selection(product);
        let result = self.store.fetch_movements(ticket.product_id).await;
        self.complete_selection(ticket, result);
    }

    /// Close the detail view and drop its ledger; nothing accumulates across
    /// selections.
    pub fn close_movements(&mut self) {
        self.modal_open = false;
        self.movements.clear();
        self.selected = None;
    }

    pub fn products(&self) -> &[product::Model] {
        &self.products
    }

    pub fn movements(&self) -> &[MovementView] {
        &self.movements
    }

    pub fn selected(&self) -> Option<&product::Model> {
        self.selected.as_ref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }
}
