use axum::{
  extract::{Json, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::{SendEmailRequest, SendEmailResponse};
use crate::error::ApiError;
use crate::state::{AppState, SharedAppState};

pub fn email_routes() -> Router<SharedAppState> {
  Router::new().route("/send-email", post(send_email_handler))
}

pub async fn send_email_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<SendEmailRequest>,
) -> Result<JsonResponse<SendEmailResponse>, ApiError> {
  let result = state.send_email(payload).await?;
  Ok(JsonResponse(SendEmailResponse::sent(result)))
}
