use crate::{
    abstract_trait::DynFavoriteService,
    domain::{requests::CreateFavoriteRequest, responses::CreateFavoriteResponse},
    middleware::ValidatedJson,
    state::AppState,
};
use axum::{
    Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::post,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/favorites",
    tag = "Favorite",
    request_body = CreateFavoriteRequest,
    responses(
        (status = 201, description = "Favorite saved", body = CreateFavoriteResponse),
        (status = 400, description = "Invalid favorite payload", body = ErrorResponse)
    )
)]
pub async fn create_favorite_handler(
    Extension(service): Extension<DynFavoriteService>,
    ValidatedJson(body): ValidatedJson<CreateFavoriteRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.add_favorite(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub fn favorite_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/favorites", post(create_favorite_handler))
        .layer(Extension(app_state.di_container.favorite_service.clone()))
}
