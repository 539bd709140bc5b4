use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Favorite {
    pub id: i32,
    pub title: String,
    pub image_url: String,
    pub category: String,
    pub tags: String,
}
