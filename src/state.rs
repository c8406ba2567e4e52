use std::sync::Arc;

use crate::config::MailerConfig;
use crate::domains::email::{
  model::SendEmailRequest,
  service::{EmailService, EmailServiceError, EmailServiceImpl},
};
use crate::mandrill::{MandrillClient, ProviderResponse};

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_email(
    &self,
    req: SendEmailRequest,
  ) -> impl std::future::Future<Output = Result<ProviderResponse, EmailServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub email_service: Arc<EmailServiceImpl<MandrillClient>>,
}

impl SharedAppState {
  pub fn new(config: MailerConfig) -> Self {
    let client = MandrillClient::new(config.mandrill);
    let email_service = Arc::new(EmailServiceImpl::new(client, config.api_key));

    Self { email_service }
  }
}

impl AppState for SharedAppState {
  async fn send_email(&self, req: SendEmailRequest) -> Result<ProviderResponse, EmailServiceError> {
    self.email_service.send_email(req).await
  }
}
