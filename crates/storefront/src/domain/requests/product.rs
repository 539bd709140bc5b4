use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct FindProducts {
    /// Audience filter: `Men`, `Women` or `Children`. Absent or `All`
    /// returns the whole catalog.
    pub target: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub price: Decimal,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub subcategory: String,

    #[serde(default)]
    pub target: String,

    #[serde(default)]
    pub brand: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub stock: i32,

    #[serde(default)]
    pub sizes: String,

    #[serde(default)]
    pub rating: Decimal,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub is_new: bool,
}
