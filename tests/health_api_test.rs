use axum::{
  body::Body,
  http::{self, Request, StatusCode},
  Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use email_relay_api::app::create_app;
use email_relay_api::config::MailerConfig;
use email_relay_api::state::SharedAppState;

fn app() -> Router {
  let config = MailerConfig {
    api_key: Some("test-key".to_string()),
    mandrill: Default::default(),
    port: 0,
  };
  create_app(SharedAppState::new(config))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
  let response = app
    .oneshot(
      Request::builder()
        .method(http::Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  let status = response.status();
  let body = response.into_body().collect().await.unwrap().to_bytes();
  (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn root_reports_healthy() {
  let (status, body) = get_json(app(), "/").await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["status"], "healthy");
  assert_eq!(body["message"], "Email service is running");
}

#[tokio::test]
async fn health_reports_healthy() {
  let (status, body) = get_json(app(), "/health").await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["status"], "healthy");
  assert_eq!(body["message"], "Email service is running");
}

#[tokio::test]
async fn openapi_document_is_served() {
  let (status, body) = get_json(app(), "/openapi.json").await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["openapi"], "3.0.0");
  assert_eq!(body["info"]["title"], "Email Service API");
  assert!(body["paths"]["/send-email"]["post"]["requestBody"]["required"].as_bool().unwrap());
}
