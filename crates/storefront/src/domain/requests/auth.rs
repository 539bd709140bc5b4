use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterUserRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "a@b.com")]
    pub email: String,

    #[serde(default)]
    pub name: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "a@b.com")]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
