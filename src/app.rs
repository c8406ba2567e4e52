use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use crate::{domains::email::rest::email_routes, openapi, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/", get(health_handler))
    .route("/health", get(health_handler))
    .route("/openapi.json", get(openapi_handler))
    .merge(email_routes())
    .layer(CorsLayer::permissive())
    .with_state(state)
}

pub async fn health_handler() -> Json<Value> {
  Json(json!({"status": "healthy", "message": "Email service is running"}))
}

pub async fn openapi_handler() -> Json<Value> {
  Json(openapi::document())
}
