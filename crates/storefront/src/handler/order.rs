use crate::{
    abstract_trait::DynOrderService,
    domain::{
        requests::PlaceOrderRequest,
        responses::{CreateOrderResponse, OrderDetailResponse},
    },
    middleware::ValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Order",
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order committed with all its items", body = CreateOrderResponse),
        (status = 400, description = "Malformed or invalid order payload", body = ErrorResponse),
        (status = 409, description = "Order conflicts with a storage constraint", body = ErrorResponse),
        (status = 503, description = "Storage unavailable, nothing persisted", body = ErrorResponse)
    )
)]
pub async fn create_order_handler(
    Extension(service): Extension<DynOrderService>,
    ValidatedJson(body): ValidatedJson<PlaceOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.place_order(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Order",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order header with its items", body = OrderDetailResponse),
        (status = 404, description = "No order with this id", body = ErrorResponse)
    )
)]
pub async fn get_order_handler(
    Extension(service): Extension<DynOrderService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_order(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders", post(create_order_handler))
        .route("/api/orders/{id}", get(get_order_handler))
        .layer(Extension(app_state.di_container.order_service.clone()))
}
