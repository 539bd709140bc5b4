use crate::{
    abstract_trait::DynAuthService,
    domain::{
        requests::{LoginRequest, RegisterUserRequest},
        responses::{LoginResponse, RegisterResponse},
    },
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
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Invalid registration payload", body = ErrorResponse)
    )
)]
pub async fn register_user_handler(
    Extension(service): Extension<DynAuthService>,
    ValidatedJson(body): ValidatedJson<RegisterUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.register(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated, token issued", body = LoginResponse),
        (status = 401, description = "Unknown email or wrong password", body = ErrorResponse)
    )
)]
pub async fn login_user_handler(
    Extension(service): Extension<DynAuthService>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/auth/register", post(register_user_handler))
        .route("/api/auth/login", post(login_user_handler))
        .layer(Extension(app_state.di_container.auth_service.clone()))
}
