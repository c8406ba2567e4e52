use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};

use crate::domains::email::model::SendEmailResponse;
use crate::domains::email::service::EmailServiceError;
use crate::mandrill::ProviderResponse;

#[derive(Debug)]
pub struct ApiError {
  pub status_code: StatusCode,
  pub error: String,
  pub result: Option<ProviderResponse>,
}

impl ApiError {
  pub fn new(status_code: StatusCode, error: impl Into<String>) -> Self {
    Self {
      status_code,
      error: error.into(),
      result: None,
    }
  }

  pub fn bad_request(error: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, error)
  }

  pub fn internal_server_error(error: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, error)
  }

  pub fn with_result(mut self, result: ProviderResponse) -> Self {
    self.result = Some(result);
    self
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let body = Json(SendEmailResponse::failed(self.error, self.result));
    (self.status_code, body).into_response()
  }
}

impl From<EmailServiceError> for ApiError {
  fn from(error: EmailServiceError) -> Self {
    let message = error.to_string();
    match error {
      EmailServiceError::MissingFields(_) => ApiError::bad_request(message),
      EmailServiceError::MissingApiKey => ApiError::internal_server_error(message),
      EmailServiceError::ProviderRejected { result, .. } => ApiError::bad_request(message).with_result(result),
      EmailServiceError::UnexpectedResponse { result } => {
        ApiError::internal_server_error(message).with_result(result)
      }
      EmailServiceError::Transport(_) => {
        tracing::error!("Error sending email: {}", message);
        ApiError::internal_server_error(message)
      }
    }
  }
}
