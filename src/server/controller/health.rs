use axum::Json;
use utoipa::OpenApi;

use crate::server::router::ApiDoc;

/// Liveness probe.
pub async fn root() -> &'static str {
    "Backend API running"
}

/// Serves the generated OpenAPI document.
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
