pub mod product;
pub mod stock_movement;
