use serde::{Deserialize, Serialize};

use crate::config::{FROM_EMAIL, TO_EMAIL};

pub const MANDRILL_SEND_URL: &str = "https://mandrillapp.com/api/1.0/messages/send.json";

#[derive(Debug, Clone)]
pub struct MandrillConfig {
  pub send_url: String,
  pub from_email: String,
  pub to_email: String,
  pub timeout_secs: u64,
}

impl Default for MandrillConfig {
  fn default() -> Self {
    MandrillConfig {
      send_url: MANDRILL_SEND_URL.to_string(),
      from_email: FROM_EMAIL.to_string(),
      to_email: TO_EMAIL.to_string(),
      timeout_secs: 10,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
  pub key: &'a str,
  pub message: OutboundMessage<'a>,
}

#[derive(Debug, Serialize)]
pub struct OutboundMessage<'a> {
  pub from_email: &'a str,
  pub to: Vec<Recipient<'a>>,
  pub subject: &'a str,
  pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Recipient<'a> {
  pub email: &'a str,
  #[serde(rename = "type")]
  pub kind: &'a str,
}

/// Per-recipient delivery record returned by Mandrill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipientResult {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  pub status: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reject_reason: Option<String>,
  #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
}

/// Mandrill normally answers with an array of per-recipient records, but the
/// shape is provider-controlled. Anything else is kept verbatim so it can be
/// echoed back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProviderResponse {
  Accepted(Vec<RecipientResult>),
  Other(serde_json::Value),
}

#[derive(Debug, Clone)]
pub enum MandrillError {
  Transport(String),
}

impl std::error::Error for MandrillError {}

impl std::fmt::Display for MandrillError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MandrillError::Transport(cause) => write!(f, "{}", cause),
    }
  }
}

impl From<reqwest::Error> for MandrillError {
  fn from(err: reqwest::Error) -> Self {
    MandrillError::Transport(err.to_string())
  }
}
