//! Pure filter/sort pipeline for the product list.
//!
//! Recomputed on every state change, so everything here is side-effect free
//! and never mutates its input. Comparator selection is driven by an explicit
//! per-key value kind instead of coercing at comparison time.

use std::cmp::Ordering;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::entities::product;

/// Column a product list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Code,
    Category,
    ImageUrl,
    Stock,
    PromoPrice,
    RegularPrice,
    CostUsd,
    CostMxn,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Name
    }
}

/// How values under a sort key compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Numeric,
}

impl SortKey {
    pub fn kind(self) -> ValueKind {
        match self {
            SortKey::Stock
            | SortKey::PromoPrice
            | SortKey::RegularPrice
            | SortKey::CostUsd
            | SortKey::CostMxn => ValueKind::Numeric,
            SortKey::Name | SortKey::Code | SortKey::Category | SortKey::ImageUrl => {
                ValueKind::Text
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Asc
    }
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Filter and sort the product set into the presented view list.
///
/// Returns a new list; the input is never mutated. The sort is stable, so
/// rows that compare equal keep their fetch order.
pub fn apply(
    products: &[product::Model],
    search: &str,
    key: SortKey,
    direction: SortDirection,
) -> Vec<product::Model> {
    let mut rows: Vec<product::Model> = products
        .iter()
        .filter(|p| matches_search(p, search))
        .cloned()
        .collect();
    rows.sort_by(|a, b| compare(a, b, key, direction));
    rows
}

/// Case-insensitive substring match against name, code, and category (OR
/// across fields, missing fields compare as empty). The search string is
/// matched literally — no trimming — matching the observed upstream behavior.
pub fn matches_search(product: &product::Model, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    [&product.name, &product.code, &product.category]
        .into_iter()
        .any(|field| {
            field
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&needle)
        })
}

/// Compare two products under a sort key.
///
/// Null values rank last in both directions: the null check happens before
/// the direction is applied, so flipping the direction reverses only the
/// non-null ordering.
pub fn compare(
    a: &product::Model,
    b: &product::Model,
    key: SortKey,
    direction: SortDirection,
) -> Ordering {
    let ordering = match key.kind() {
        ValueKind::Numeric => {
            let a_value = numeric_value(a, key);
            let b_value = numeric_value(b, key);
            match (a_value, b_value) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Greater,
                (Some(_), None) => return Ordering::Less,
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            }
        }
        ValueKind::Text => {
            let a_value = text_value(a, key);
            let b_value = text_value(b, key);
            match (a_value, b_value) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Greater,
                (Some(_), None) => return Ordering::Less,
                (Some(x), Some(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
            }
        }
    };
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

fn text_value(product: &product::Model, key: SortKey) -> Option<&str> {
    match key {
        SortKey::Name => product.name.as_deref(),
        SortKey::Code => product.code.as_deref(),
        SortKey::Category => product.category.as_deref(),
        SortKey::ImageUrl => product.image_url.as_deref(),
        _ => None,
    }
}

fn numeric_value(product: &product::Model, key: SortKey) -> Option<f64> {
    let value = match key {
        SortKey::Stock => product.stock.as_ref(),
        SortKey::PromoPrice => product.promo_price.as_ref(),
        SortKey::RegularPrice => product.regular_price.as_ref(),
        SortKey::CostUsd => product.cost_usd.as_ref(),
        SortKey::CostMxn => product.cost_mxn.as_ref(),
        _ => None,
    };
    value.map(numeric_rank)
}

/// Rank a stored numeric value for comparison. Values the comparator cannot
/// represent coerce to zero rather than poisoning the order.
pub fn numeric_rank(value: &Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
