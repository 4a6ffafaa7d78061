use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stock movement entity: one recorded change to a product's stock quantity.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stock_movements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Owning product
    pub product_id: Uuid,

    /// Raw movement type as recorded upstream (e.g. SALIDA, ENTRADA,
    /// DEVOLUCIÓN VENTA). The set is not controlled by this system, so it is
    /// kept as text and interpreted permissively by the classifier.
    pub movement_type: String,

    /// Signed quantity; the display layer shows the magnitude.
    pub quantity: Option<i64>,

    /// Free-text reference or note
    pub reference: Option<String>,

    /// Raw timestamp text; may be absent or malformed, parsed at
    /// classification time with an explicit invalid-date sentinel.
    pub occurred_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
