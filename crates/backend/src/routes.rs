use axum::{
    http::{header, HeaderName, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::shared::llm::LlmProvider;

/// Состояние приложения: только то, что нужно обработчикам, и только на чтение
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn LlmProvider>,
}

/// CORS: любой origin; OPTIONS отвечает сам слой, без тела
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/ai-insights",
            post(handlers::u508_ai_insights::generate),
        )
        .layer(cors_layer())
        .with_state(state)
}
