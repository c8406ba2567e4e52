use std::time::Duration;

use async_trait::async_trait;

use super::types::{MandrillConfig, MandrillError, OutboundMessage, ProviderResponse, Recipient, SendMessageRequest};

/// Outbound boundary to the Mandrill messages API.
#[async_trait]
pub trait MandrillApi: Send + Sync {
  async fn send_message(&self, api_key: &str, subject: &str, text: &str) -> Result<ProviderResponse, MandrillError>;
}

pub struct MandrillClient {
  config: MandrillConfig,
  http_client: reqwest::Client,
}

impl MandrillClient {
  pub fn new(config: MandrillConfig) -> Self {
    let http_client = reqwest::Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()
      .unwrap_or_default();

    MandrillClient { config, http_client }
  }
}

#[async_trait]
impl MandrillApi for MandrillClient {
  async fn send_message(&self, api_key: &str, subject: &str, text: &str) -> Result<ProviderResponse, MandrillError> {
    // Exactly one recipient, taken from configuration rather than the request.
    let to_list = vec![Recipient {
      email: &self.config.to_email,
      kind: "to",
    }];

    let payload = SendMessageRequest {
      key: api_key,
      message: OutboundMessage {
        from_email: &self.config.from_email,
        to: to_list,
        subject,
        text,
      },
    };

    let response = self
      .http_client
      .post(&self.config.send_url)
      .json(&payload)
      .send()
      .await?
      .json::<ProviderResponse>()
      .await?;

    tracing::info!("Email response: {:?}", response);

    Ok(response)
  }
}
