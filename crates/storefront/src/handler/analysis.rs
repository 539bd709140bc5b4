use crate::{
    abstract_trait::DynOutfitAnalysisService, domain::responses::StylingSuggestion,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Multipart},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "Analysis",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Styling suggestion for the uploaded image", body = StylingSuggestion),
        (status = 400, description = "No valid image uploaded", body = ErrorResponse),
        (status = 503, description = "Vision model unreachable or unparseable", body = ErrorResponse)
    )
)]
pub async fn analyze_outfit_handler(
    Extension(service): Extension<DynOutfitAnalysisService>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::BadRequest(format!("Malformed multipart body: {err}")))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|err| HttpError::BadRequest(format!("Failed to read image: {err}")))?;

        if bytes.is_empty() {
            break;
        }

        let suggestion = service.analyze(&mime_type, &bytes).await?;
        return Ok((StatusCode::OK, Json(suggestion)));
    }

    Err(HttpError::BadRequest("No valid image uploaded".to_string()))
}

pub fn analysis_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/analyze", post(analyze_outfit_handler))
        .layer(Extension(app_state.di_container.analysis_service.clone()))
}
