use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Product entity
///
/// Every descriptive column is nullable: rows are created and mutated by an
/// external system and arrive here read-only, so absence is defaulted at
/// display time rather than rejected at the fetch boundary.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Primary key
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Product name
    #[validate(length(max = 255, message = "Product name cannot exceed 255 characters"))]
    pub name: Option<String>,

    /// Internal product code
    #[validate(length(max = 100, message = "Product code cannot exceed 100 characters"))]
    pub code: Option<String>,

    /// Category label
    pub category: Option<String>,

    /// Units on hand
    pub stock: Option<Decimal>,

    /// Promotional price
    pub promo_price: Option<Decimal>,

    /// Regular list price
    pub regular_price: Option<Decimal>,

    /// Landed cost in USD
    pub cost_usd: Option<Decimal>,

    /// Landed cost in MXN
    pub cost_mxn: Option<Decimal>,

    /// URL to the product image
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    /// Creation timestamp
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::stock_movement::Entity")]
    StockMovements,
}

impl Related<super::stock_movement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StockMovements.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
