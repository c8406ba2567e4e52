use crate::mandrill::MandrillConfig;

/// Fixed sender address stamped on every outbound message; not caller-configurable.
pub const FROM_EMAIL: &str = "customgpt@wfpcc.com";

/// Fixed recipient; every message goes here regardless of request content.
pub const TO_EMAIL: &str = "cory@wfpcc.com";

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct MailerConfig {
  pub api_key: Option<String>,
  pub mandrill: MandrillConfig,
  pub port: u16,
}

impl MailerConfig {
  /// Reads the process environment once at startup. A missing API key is not
  /// fatal here; it surfaces as a configuration error on each send attempt.
  pub fn from_env() -> Self {
    let api_key = std::env::var("MAILCHIMP_API_KEY").ok().filter(|key| !key.is_empty());
    let port = std::env::var("PORT")
      .unwrap_or_else(|_| DEFAULT_PORT.to_string())
      .parse()
      .unwrap_or(DEFAULT_PORT);

    MailerConfig {
      api_key,
      mandrill: MandrillConfig::default(),
      port,
    }
  }
}
