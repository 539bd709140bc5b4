use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub subcategory: String,
    pub target: String,
    pub brand: String,
    pub image_url: String,
    pub stock: i32,
    /// Comma-separated size list, split into an array at the response layer.
    pub sizes: String,
    pub rating: Decimal,
    pub is_featured: bool,
    pub is_new: bool,
}
