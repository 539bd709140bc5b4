use crate::{
    abstract_trait::DynProductService,
    domain::{requests::FindProducts, responses::ProductsResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    params(FindProducts),
    responses(
        (status = 200, description = "Catalog, optionally filtered by audience", body = ProductsResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse)
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductService>,
    Query(params): Query<FindProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_products(params.target.as_deref()).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .layer(Extension(app_state.di_container.product_service.clone()))
}
