mod analysis;
mod auth;
mod favorite;
mod order;
mod product;

use crate::state::AppState;
use anyhow::Result;
use axum::{Json, extract::DefaultBodyLimit, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::analysis::analysis_routes;
pub use self::auth::auth_routes;
pub use self::favorite::favorite_routes;
pub use self::order::order_routes;
pub use self::product::product_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register_user_handler,
        auth::login_user_handler,

        product::get_products,

        favorite::create_favorite_handler,

        order::create_order_handler,
        order::get_order_handler,

        analysis::analyze_outfit_handler,
    ),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Product", description = "Catalog endpoints"),
        (name = "Favorite", description = "Saved outfit ideas"),
        (name = "Order", description = "Checkout and order read-back"),
        (name = "Analysis", description = "Outfit image analysis"),
    )
)]
struct ApiDoc;

pub async fn health_checker_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "success": true })))
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/api/healthchecker", get(health_checker_handler))
            .merge(auth_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(favorite_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(analysis_routes(shared_state.clone()));

        // 10 MiB cap, sized for one outfit photo.
        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(10 * 1024 * 1024))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
