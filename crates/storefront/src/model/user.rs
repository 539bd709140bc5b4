use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    /// Bcrypt hash, never a plain-text password.
    pub password: String,
    pub last_login: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}
