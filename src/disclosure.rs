//! Cookie disclosure retrieval.
//!
//! One GET against the disclosure-listing endpoint, parameterized by a
//! customer id, a configuration id and a language code. Records are passed
//! through verbatim: a field that drifted upstream comes back empty rather
//! than failing the whole listing.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::model::CookieDisclosure;

/// Errors surfaced by the disclosure fetch.
#[derive(Debug, thiserror::Error)]
pub enum DisclosureError {
    /// Non-success status or transport failure. The display text is fixed;
    /// `detail` only goes to the log.
    #[error("Failed to fetch cookie disclosures")]
    RemoteUnavailable { detail: String },

    /// The body was not a JSON array of records.
    #[error("Unexpected cookie disclosure response: {message}")]
    MalformedResponse { message: String },
}

impl DisclosureError {
    fn remote(detail: impl Into<String>) -> Self {
        Self::RemoteUnavailable {
            detail: detail.into(),
        }
    }
}

/// Anything that can produce the disclosure listing.
pub trait DisclosureSource: Send + Sync {
    fn fetch_disclosures(
        &self,
        customer_id: &str,
        config_id: &str,
        language: &str,
    ) -> Result<Vec<CookieDisclosure>, DisclosureError>;
}

/// Identifiers that parameterize the endpoint template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureRequest {
    pub customer_id: String,
    pub config_id: String,
    pub language: String,
}

pub struct HttpDisclosureFetcher {
    client: Client,
    api_base: String,
}

impl HttpDisclosureFetcher {
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("trusthub/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            api_base: api_base.into(),
        })
    }

    pub fn endpoint_url(&self, customer_id: &str, config_id: &str) -> String {
        format!(
            "{}/customer/{customer_id}/config/{config_id}",
            self.api_base.trim_end_matches('/')
        )
    }
}

impl DisclosureSource for HttpDisclosureFetcher {
    fn fetch_disclosures(
        &self,
        customer_id: &str,
        config_id: &str,
        language: &str,
    ) -> Result<Vec<CookieDisclosure>, DisclosureError> {
        let url = self.endpoint_url(customer_id, config_id);
        log::info!("fetching cookie disclosures from {url} (language={language})");

        let response = self
            .client
            .get(&url)
            .query(&[("language", language)])
            .send()
            .map_err(|err| {
                log::warn!("disclosure request failed: {err}");
                DisclosureError::remote(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("disclosure endpoint answered {status}");
            return Err(DisclosureError::remote(format!("HTTP {status}")));
        }

        let body = response.text().map_err(|err| {
            log::warn!("failed to read disclosure body: {err}");
            DisclosureError::remote(err.to_string())
        })?;

        let disclosures = parse_disclosures(&body)?;
        log::info!("received {} cookie disclosures", disclosures.len());
        Ok(disclosures)
    }
}

pub fn parse_disclosures(body: &str) -> Result<Vec<CookieDisclosure>, DisclosureError> {
    let value: Value =
        serde_json::from_str(body).map_err(|err| DisclosureError::MalformedResponse {
            message: err.to_string(),
        })?;

    let Value::Array(records) = value else {
        return Err(DisclosureError::MalformedResponse {
            message: format!("expected a JSON array, got {}", value_kind(&value)),
        });
    };

    Ok(records.iter().map(disclosure_from_record).collect())
}

fn disclosure_from_record(record: &Value) -> CookieDisclosure {
    CookieDisclosure {
        name: field_text(record, "name"),
        classification: field_text(record, "classification"),
        purpose: field_text(record, "purpose"),
        expiry: field_text(record, "expiry"),
        provider: field_text(record, "provider"),
    }
}

// Missing or null fields render empty; other scalars keep their JSON text.
fn field_text(record: &Value, key: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
