//! Mandrill messages API integration
//!
//! This module owns the outbound HTTP call to the transactional-email
//! provider and the decoding of its loosely specified response shape.

mod client;
mod types;

pub use client::{MandrillApi, MandrillClient};
pub use types::{MandrillConfig, MandrillError, ProviderResponse, RecipientResult};
