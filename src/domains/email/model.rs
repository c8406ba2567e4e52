use serde::{Deserialize, Serialize};

use crate::mandrill::ProviderResponse;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SendEmailRequest {
  pub subject: Option<String>,
  pub message_text: Option<String>,
}

/// A request whose required fields are known to be present and non-empty.
#[derive(Debug, Clone)]
pub struct EmailRequest {
  pub subject: String,
  pub message_text: String,
}

impl SendEmailRequest {
  /// Checks the required fields and reports the missing ones by name, in the
  /// fixed order `subject, message_text`. An empty string counts as missing.
  pub fn validate(self) -> Result<EmailRequest, Vec<&'static str>> {
    let fields = [("subject", &self.subject), ("message_text", &self.message_text)];
    let missing: Vec<&'static str> = fields
      .iter()
      .filter(|(_, value)| value.as_deref().map_or(true, |v| v.is_empty()))
      .map(|(name, _)| *name)
      .collect();

    if !missing.is_empty() {
      return Err(missing);
    }

    Ok(EmailRequest {
      subject: self.subject.unwrap_or_default(),
      message_text: self.message_text.unwrap_or_default(),
    })
  }
}

#[derive(Debug, Serialize)]
pub struct SendEmailResponse {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub result: Option<ProviderResponse>,
}

impl SendEmailResponse {
  pub fn sent(result: ProviderResponse) -> Self {
    SendEmailResponse {
      success: true,
      message: Some("Email sent successfully".to_string()),
      error: None,
      result: Some(result),
    }
  }

  pub fn failed(error: String, result: Option<ProviderResponse>) -> Self {
    SendEmailResponse {
      success: false,
      message: None,
      error: Some(error),
      result,
    }
  }
}
