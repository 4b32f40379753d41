//! Common routes: landing page, health, readiness, version, API description.

use crate::doc::ApiDoc;
use crate::response::{HealthBody, ReadyBody};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use utoipa::OpenApi;

pub const SERVICE_NAME: &str = "kubsu-api";

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>KubSU User API</title>
</head>
<body>
    <h1>Welcome to KubSU User API!</h1>
    <p>The API is described by its <a href="/openapi.json" target="_blank">OpenAPI document</a>.</p>
</body>
</html>
"#;

#[utoipa::path(get, path = "/", tag = "meta", responses((status = 200, description = "Landing page", body = String, content_type = "text/html")))]
pub async fn root() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Liveness. Never touches the database.
#[utoipa::path(get, path = "/health", tag = "meta", responses((status = 200, body = HealthBody)))]
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "healthy".into(),
        service: SERVICE_NAME.into(),
        version: env!("CARGO_PKG_VERSION").into(),
        message: "All systems operational!".into(),
    })
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "meta",
    responses((status = 200, body = ReadyBody), (status = 503, body = ReadyBody))
)]
pub async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    if let Err(e) = sqlx::query("SELECT 1").fetch_optional(&state.pool).await {
        tracing::warn!(error = %e, "readiness check failed");
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded".into(),
                database: "unavailable".into(),
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok".into(),
        database: "ok".into(),
    }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Common routes: GET /, /health, /ready, /version, /openapi.json.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/openapi.json", get(openapi))
        .with_state(state)
}
