use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use shared::errors::ErrorResponse;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// JSON extractor that deserializes and validates in one step. Handlers only
/// ever see requests that passed both, and every rejection goes out in the
/// standard `{"success": false, "error": ...}` envelope.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<ErrorResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                (
                    rejection.status(),
                    axum::Json(ErrorResponse::new(format!(
                        "Invalid JSON: {}",
                        rejection.body_text()
                    ))),
                )
            })?;

        value.validate().map_err(|errors| {
            (
                StatusCode::BAD_REQUEST,
                axum::Json(ErrorResponse::new(format_validation_errors(&errors))),
            )
        })?;

        Ok(Self(value))
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    collect_messages(errors, "", &mut messages);

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}

// ValidationErrors nests per struct and per list element, so walk the tree
// and keep a dotted path for each leaf message.
fn collect_messages(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid {path}"));
                    out.push(format!("{path}: {message}"));
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_messages(nested, &path, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_messages(nested, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::PlaceOrderRequest;
    use serde_json::json;

    #[test]
    fn nested_item_errors_carry_their_path() {
        let req: PlaceOrderRequest = serde_json::from_value(json!({
            "order": { "user_email": "a@b.com", "total_amount": 10.00 },
            "items": [ { "outfit_title": "", "price": 10.00, "quantity": 1 } ]
        }))
        .unwrap();

        let errors = req.validate().unwrap_err();
        let message = format_validation_errors(&errors);
        assert!(message.contains("items[0].outfit_title"), "got: {message}");
    }

    #[test]
    fn empty_items_message_is_reported() {
        let req: PlaceOrderRequest = serde_json::from_value(json!({
            "order": { "user_email": "a@b.com", "total_amount": 10.00 },
            "items": []
        }))
        .unwrap();

        let errors = req.validate().unwrap_err();
        let message = format_validation_errors(&errors);
        assert!(
            message.contains("Order must contain at least one item"),
            "got: {message}"
        );
    }
}
