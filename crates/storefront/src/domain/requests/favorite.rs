use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFavoriteRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub tags: String,
}
