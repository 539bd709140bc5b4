use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i32,
    pub user_email: String,
    pub total_amount: Decimal,
    pub shipping_address: String,
    pub payment_method: String,
    pub card_holder: String,
    pub card_number: String,
    pub expiry_date: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}
