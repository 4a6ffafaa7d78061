//! Movement loader and classifier.
//!
//! Fetches one product's stock movements (most recent first) and derives the
//! display form of each: a human-readable description, the quantity
//! magnitude, a reference placeholder, and a safely parsed date.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Serialize, Serializer};
use tracing::{error, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::stock_movement::{self, Column as MovementColumn, Entity as StockMovement};
use crate::errors::FetchError;

/// Recognized movement types. The upstream vocabulary is a closed, hardcoded
/// list this system does not control; anything else classifies as `Unknown`
/// rather than failing the fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Out,
    In,
    SaleReturn,
    Unknown,
}

impl MovementKind {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "SALIDA" => MovementKind::Out,
            "ENTRADA" => MovementKind::In,
            "DEVOLUCIÓN VENTA" => MovementKind::SaleReturn,
            _ => MovementKind::Unknown,
        }
    }
}

/// A movement timestamp that is safe to display.
///
/// The upstream store delivers timestamps as raw text that may be absent or
/// malformed; instead of propagating a parse failure, unusable values become
/// the explicit `Invalid` sentinel and render as a literal indicator.
#[derive(Debug, Clone, PartialEq)]
pub enum MovementDate {
    At(DateTime<Utc>),
    Invalid,
}

impl MovementDate {
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return MovementDate::Invalid;
        };
        let raw = raw.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return MovementDate::At(dt.with_timezone(&Utc));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return MovementDate::At(naive.and_utc());
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            if let Some(naive) = date.and_hms_opt(0, 0, 0) {
                return MovementDate::At(naive.and_utc());
            }
        }
        MovementDate::Invalid
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, MovementDate::At(_))
    }
}

impl fmt::Display for MovementDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovementDate::At(dt) => write!(f, "{}", dt.to_rfc3339()),
            MovementDate::Invalid => write!(f, "Invalid Date"),
        }
    }
}

impl Serialize for MovementDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Display form of one stock movement.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MovementView {
    pub id: Uuid,
    /// When the movement happened, or the literal `Invalid Date` indicator.
    #[schema(value_type = String, example = "2025-02-14T09:30:00+00:00")]
    pub occurred_at: MovementDate,
    /// Derived human-readable description, e.g. `Sales Out: -5`.
    #[schema(example = "Sales Out: -5")]
    pub description: String,
    /// Quantity magnitude; the sign lives in the description.
    pub quantity: i64,
    /// Reference note, `-` when the movement carries none.
    #[schema(example = "PO-100")]
    pub reference: String,
}

/// Classify a single raw movement, independent of any other.
pub fn classify(movement: &stock_movement::Model) -> MovementView {
    let magnitude = movement.quantity.unwrap_or(0).abs();
    let kind = MovementKind::from_raw(&movement.movement_type);

    let description = match kind {
        MovementKind::Out => format!("Sales Out: -{magnitude}"),
        MovementKind::In if is_sale_cancellation(movement.reference.as_deref()) => {
            format!("Sales Return: {magnitude}")
        }
        MovementKind::In => format!("Purchases In: {magnitude}"),
        MovementKind::SaleReturn => format!("Return In: {magnitude}"),
        MovementKind::Unknown => "Unknown movement".to_string(),
    };

    MovementView {
        id: movement.id,
        occurred_at: MovementDate::parse(movement.occurred_at.as_deref()),
        description,
        quantity: magnitude,
        reference: movement
            .reference
            .clone()
            .unwrap_or_else(|| "-".to_string()),
    }
}

/// An inbound movement whose reference marks it as a cancelled sale.
fn is_sale_cancellation(reference: Option<&str>) -> bool {
    reference
        .map(|r| {
            let lowered = r.to_lowercase();
            lowered.contains("cancelación") || lowered.contains("cancellation")
        })
        .unwrap_or(false)
}

/// Service exposing the per-product movement ledger.
#[derive(Clone)]
pub struct MovementLedgerService {
    db_pool: Arc<DbPool>,
}

impl MovementLedgerService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Fetch and classify one product's movements, most recent first.
    #[instrument(skip(self))]
    pub async fn load_for_product(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<MovementView>, FetchError> {
        let db = &*self.db_pool;

        let movements = StockMovement::find()
            .filter(MovementColumn::ProductId.eq(product_id))
            .order_by_desc(MovementColumn::OccurredAt)
            .all(db)
            .await
            .map_err(|e| {
                error!(product_id = %product_id, error = %e, "Database error when fetching movements");
                FetchError::from(e)
            })?;

        Ok(movements.iter().map(classify).collect())
    }
}
