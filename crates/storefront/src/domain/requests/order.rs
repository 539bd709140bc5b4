use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Checkout payload: one header plus the line items bought with it.
///
/// Everything here is checked before a transaction is opened, so a malformed
/// request never costs a storage round-trip. An order with zero items is
/// rejected outright.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PlaceOrderRequest {
    #[validate(nested)]
    pub order: OrderHeaderRequest,

    #[validate(
        length(min = 1, message = "Order must contain at least one item"),
        nested
    )]
    pub items: Vec<OrderItemRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderHeaderRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "a@b.com")]
    pub user_email: String,

    #[validate(custom(function = validate_money))]
    #[schema(example = "45.50")]
    pub total_amount: Decimal,

    #[serde(default)]
    pub shipping_address: String,

    #[serde(default)]
    pub payment_method: String,

    #[serde(default)]
    pub card_holder: String,

    #[serde(default)]
    pub card_number: String,

    #[serde(default)]
    pub expiry_date: String,

    #[serde(default = "default_status")]
    #[schema(example = "pending")]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderItemRequest {
    #[validate(length(min = 1, message = "Item title is required"))]
    #[schema(example = "Denim Jacket")]
    pub outfit_title: String,

    #[validate(custom(function = validate_money))]
    #[schema(example = "30.00")]
    pub price: Decimal,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 1)]
    pub quantity: i32,
}

fn default_status() -> String {
    "pending".to_string()
}

/// Amounts are currency values: non-negative, at most two decimal places.
fn validate_money(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(
            ValidationError::new("money").with_message("Amount must not be negative".into())
        );
    }

    if value.normalize().scale() > 2 {
        return Err(ValidationError::new("money")
            .with_message("Amount supports at most two decimal places".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_request() -> PlaceOrderRequest {
        serde_json::from_value(json!({
            "order": {
                "user_email": "a@b.com",
                "total_amount": 45.50,
                "shipping_address": "1 Main St",
                "payment_method": "card",
                "status": "pending"
            },
            "items": [
                { "outfit_title": "Denim Jacket", "price": 30.00, "quantity": 1 },
                { "outfit_title": "Tee", "price": 15.50, "quantity": 1 }
            ]
        }))
        .expect("request should deserialize")
    }

    #[test]
    fn valid_request_passes_validation() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn empty_items_are_rejected() {
        let mut req = valid_request();
        req.items.clear();
        assert!(req.validate().is_err());
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut req = valid_request();
        req.items[1].quantity = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut req = valid_request();
        req.items[0].price = Decimal::new(-3000, 2);
        assert!(req.validate().is_err());
    }

    #[test]
    fn sub_cent_precision_is_rejected() {
        let mut req = valid_request();
        req.order.total_amount = "19.999".parse().unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut req = valid_request();
        req.order.user_email = "not-an-email".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn missing_status_defaults_to_pending() {
        let req: PlaceOrderRequest = serde_json::from_value(json!({
            "order": { "user_email": "a@b.com", "total_amount": 10.00 },
            "items": [ { "outfit_title": "Tee", "price": 10.00, "quantity": 1 } ]
        }))
        .unwrap();
        assert_eq!(req.order.status, "pending");
        assert!(req.order.shipping_address.is_empty());
    }

    #[test]
    fn malformed_amount_fails_deserialization() {
        let result: Result<PlaceOrderRequest, _> = serde_json::from_value(json!({
            "order": { "user_email": "a@b.com", "total_amount": "not-a-number" },
            "items": [ { "outfit_title": "Tee", "price": 10.00, "quantity": 1 } ]
        }));
        assert!(result.is_err());
    }
}
