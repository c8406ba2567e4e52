use std::error::Error;

use async_trait::async_trait;

use super::model::{EmailRequest, SendEmailRequest};
use crate::mandrill::{MandrillApi, MandrillError, ProviderResponse};

#[derive(Debug)]
pub enum EmailServiceError {
  MissingFields(Vec<&'static str>),
  MissingApiKey,
  ProviderRejected { reason: String, result: ProviderResponse },
  UnexpectedResponse { result: ProviderResponse },
  Transport(String),
}

impl Error for EmailServiceError {}

impl std::fmt::Display for EmailServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      EmailServiceError::MissingFields(fields) => write!(f, "Missing required fields: {}", fields.join(", ")),
      EmailServiceError::MissingApiKey => write!(f, "API key not found in environment variables"),
      EmailServiceError::ProviderRejected { reason, .. } => write!(f, "Email failed to send: {}", reason),
      EmailServiceError::UnexpectedResponse { .. } => write!(f, "Unexpected response from email service"),
      EmailServiceError::Transport(cause) => write!(f, "Internal server error: {}", cause),
    }
  }
}

impl From<MandrillError> for EmailServiceError {
  fn from(err: MandrillError) -> Self {
    let MandrillError::Transport(cause) = err;
    EmailServiceError::Transport(cause)
  }
}

#[async_trait]
pub trait EmailService: Send + Sync {
  async fn send_email(&self, req: SendEmailRequest) -> Result<ProviderResponse, EmailServiceError>;
}

pub struct EmailServiceImpl<C> {
  client: C,
  api_key: Option<String>,
}

impl<C> EmailServiceImpl<C>
where
  C: MandrillApi,
{
  pub fn new(client: C, api_key: Option<String>) -> Self {
    Self { client, api_key }
  }
}

#[async_trait]
impl<C> EmailService for EmailServiceImpl<C>
where
  C: MandrillApi,
{
  async fn send_email(&self, req: SendEmailRequest) -> Result<ProviderResponse, EmailServiceError> {
    let EmailRequest { subject, message_text } = req.validate().map_err(EmailServiceError::MissingFields)?;

    // The credential check happens before any outbound call.
    let api_key = self.api_key.as_deref().ok_or(EmailServiceError::MissingApiKey)?;

    let response = self.client.send_message(api_key, &subject, &message_text).await?;
    classify(response)
  }
}

/// Maps the provider's response onto the caller-facing outcome: delivery is a
/// success only when the first recipient record reports `sent`.
fn classify(response: ProviderResponse) -> Result<ProviderResponse, EmailServiceError> {
  match response {
    ProviderResponse::Accepted(ref results) if !results.is_empty() => {
      let first = &results[0];
      if first.status == "sent" {
        Ok(response)
      } else {
        let reason = first
          .reject_reason
          .clone()
          .unwrap_or_else(|| "Unknown error".to_string());
        Err(EmailServiceError::ProviderRejected { reason, result: response })
      }
    }
    other => Err(EmailServiceError::UnexpectedResponse { result: other }),
  }
}

#[cfg(test)]
mod tests {
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::sync::Arc;

  use serde_json::json;

  use super::*;
  use crate::mandrill::RecipientResult;

  #[derive(Clone)]
  struct MockMandrill {
    calls: Arc<AtomicUsize>,
    response: Result<ProviderResponse, MandrillError>,
  }

  impl MockMandrill {
    fn returning(response: Result<ProviderResponse, MandrillError>) -> Self {
      MockMandrill {
        calls: Arc::new(AtomicUsize::new(0)),
        response,
      }
    }
  }

  #[async_trait]
  impl MandrillApi for MockMandrill {
    async fn send_message(
      &self,
      _api_key: &str,
      _subject: &str,
      _text: &str,
    ) -> Result<ProviderResponse, MandrillError> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      self.response.clone()
    }
  }

  fn request() -> SendEmailRequest {
    SendEmailRequest {
      subject: Some("Subject".to_string()),
      message_text: Some("Body".to_string()),
    }
  }

  fn sent_record() -> ProviderResponse {
    ProviderResponse::Accepted(vec![RecipientResult {
      email: Some("cory@wfpcc.com".to_string()),
      status: "sent".to_string(),
      reject_reason: None,
      id: Some("abc123".to_string()),
    }])
  }

  fn rejected_record(reason: Option<&str>) -> ProviderResponse {
    ProviderResponse::Accepted(vec![RecipientResult {
      email: Some("cory@wfpcc.com".to_string()),
      status: "rejected".to_string(),
      reject_reason: reason.map(String::from),
      id: None,
    }])
  }

  #[tokio::test]
  async fn sent_status_is_a_success() {
    let service = EmailServiceImpl::new(MockMandrill::returning(Ok(sent_record())), Some("key".to_string()));

    let response = service.send_email(request()).await.expect("dispatch succeeds");
    assert!(matches!(response, ProviderResponse::Accepted(ref results) if results[0].status == "sent"));
  }

  #[tokio::test]
  async fn rejection_reports_the_provider_reason() {
    let service = EmailServiceImpl::new(
      MockMandrill::returning(Ok(rejected_record(Some("invalid")))),
      Some("key".to_string()),
    );

    let err = service.send_email(request()).await.expect_err("dispatch fails");
    assert_eq!(err.to_string(), "Email failed to send: invalid");
  }

  #[tokio::test]
  async fn rejection_without_reason_falls_back_to_unknown_error() {
    let service = EmailServiceImpl::new(MockMandrill::returning(Ok(rejected_record(None))), Some("key".to_string()));

    let err = service.send_email(request()).await.expect_err("dispatch fails");
    assert_eq!(err.to_string(), "Email failed to send: Unknown error");
  }

  #[tokio::test]
  async fn empty_record_list_is_unexpected() {
    let service = EmailServiceImpl::new(
      MockMandrill::returning(Ok(ProviderResponse::Accepted(Vec::new()))),
      Some("key".to_string()),
    );

    let err = service.send_email(request()).await.expect_err("dispatch fails");
    assert_eq!(err.to_string(), "Unexpected response from email service");
  }

  #[tokio::test]
  async fn non_list_response_is_unexpected() {
    let service = EmailServiceImpl::new(
      MockMandrill::returning(Ok(ProviderResponse::Other(json!({"status": "error"})))),
      Some("key".to_string()),
    );

    let err = service.send_email(request()).await.expect_err("dispatch fails");
    assert_eq!(err.to_string(), "Unexpected response from email service");
  }

  #[tokio::test]
  async fn transport_failure_surfaces_the_cause() {
    let service = EmailServiceImpl::new(
      MockMandrill::returning(Err(MandrillError::Transport("connection refused".to_string()))),
      Some("key".to_string()),
    );

    let err = service.send_email(request()).await.expect_err("dispatch fails");
    assert_eq!(err.to_string(), "Internal server error: connection refused");
  }

  #[tokio::test]
  async fn missing_api_key_short_circuits_without_calling_the_provider() {
    let mock = MockMandrill::returning(Ok(sent_record()));
    let calls = mock.calls.clone();
    let service = EmailServiceImpl::new(mock, None);

    let err = service.send_email(request()).await.expect_err("dispatch fails");
    assert_eq!(err.to_string(), "API key not found in environment variables");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn invalid_request_never_reaches_the_provider() {
    let mock = MockMandrill::returning(Ok(sent_record()));
    let calls = mock.calls.clone();
    let service = EmailServiceImpl::new(mock, Some("key".to_string()));

    let err = service
      .send_email(SendEmailRequest {
        subject: None,
        message_text: None,
      })
      .await
      .expect_err("validation fails");
    assert_eq!(err.to_string(), "Missing required fields: subject, message_text");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn repeated_requests_each_reach_the_provider() {
    let mock = MockMandrill::returning(Ok(sent_record()));
    let calls = mock.calls.clone();
    let service = EmailServiceImpl::new(mock, Some("key".to_string()));

    service.send_email(request()).await.expect("first dispatch");
    service.send_email(request()).await.expect("second dispatch");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
  }
}
