use crate::model::{Order, OrderItem};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope for `POST /api/orders`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderResponse {
    pub success: bool,
    pub order_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderDetailResponse {
    pub success: bool,
    pub order: OrderResponse,
}

/// Read-back view of a committed order. Card details are write-only and
/// never echoed back.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub user_email: String,
    pub total_amount: Decimal,
    pub shipping_address: String,
    pub payment_method: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub items: Vec<OrderItemResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderItemResponse {
    pub id: i32,
    pub outfit_title: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl OrderResponse {
    pub fn from_parts(order: Order, items: Vec<OrderItem>) -> Self {
        Self {
            id: order.id,
            user_email: order.user_email,
            total_amount: order.total_amount,
            shipping_address: order.shipping_address,
            payment_method: order.payment_method,
            status: order.status,
            created_at: order.created_at,
            items: items.into_iter().map(OrderItemResponse::from).collect(),
        }
    }
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id,
            outfit_title: item.outfit_title,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_order_response_matches_wire_contract() {
        let response = CreateOrderResponse {
            success: true,
            order_id: 42,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({ "success": true, "order_id": 42 }));
    }

    #[test]
    fn order_response_never_exposes_card_fields() {
        let order = Order {
            id: 1,
            user_email: "a@b.com".into(),
            total_amount: "45.50".parse().unwrap(),
            shipping_address: "1 Main St".into(),
            payment_method: "card".into(),
            card_holder: "A B".into(),
            card_number: "4111111111111111".into(),
            expiry_date: "12/27".into(),
            status: "pending".into(),
            created_at: chrono::NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        };

        let value = serde_json::to_value(OrderResponse::from_parts(order, vec![])).unwrap();
        let body = value.to_string();
        assert!(!body.contains("card_number"));
        assert!(!body.contains("4111111111111111"));
    }
}
