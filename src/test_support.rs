use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{app::create_app, config::MailerConfig, mandrill::MandrillConfig, state::SharedAppState};

pub fn app_with_mailer(send_url: &str, api_key: Option<&str>) -> Router {
  let config = MailerConfig {
    api_key: api_key.map(String::from),
    mandrill: MandrillConfig {
      send_url: send_url.to_string(),
      ..MandrillConfig::default()
    },
    port: 0,
  };
  create_app(SharedAppState::new(config))
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  send(app, request).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder().uri(uri).body(Body::empty()).expect("build request");

  send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
