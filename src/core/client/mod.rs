//! Chat endpoint client: one JSON POST per message, one JSON reply.

mod error;

use reqwest::Url;
use serde::Serialize;
use serde_json::Value;

use crate::core::config::Config;
use crate::core::format;

pub use error::ChatError;

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

pub struct ChatClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ChatClient {
    pub fn new(config: &Config) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send one message and return the text to display. HTTP error statuses are
    /// not errors: their JSON body is shown like any other reply.
    pub async fn send(&self, message: &str) -> Result<String, ChatError> {
        log::info!("POST {} ({} chars)", self.endpoint, message.chars().count());
        let response = self
            .http
            .post(self.endpoint.clone())
            .header("X-Requested-With", "XMLHttpRequest")
            .json(&ChatRequest { message })
            .send()
            .await
            .inspect_err(|e| log::warn!("Chat request failed: {}", e))?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("Chat endpoint answered with status {}", status);
        }
        let body = response.text().await?;
        log::debug!("Reply body: {} bytes", body.len());
        reply_text(&body)
    }
}

/// Extract the display text from a reply body: the `response` string when
/// present, otherwise the whole payload as pretty JSON.
pub fn reply_text(body: &str) -> Result<String, ChatError> {
    let data: Value = serde_json::from_str(body).map_err(|e| {
        log::warn!("Reply is not JSON: {}", e);
        ChatError::InvalidResponse
    })?;
    match data.get("response").and_then(Value::as_str) {
        Some(text) => Ok(text.to_string()),
        None => Ok(format::content_text(&data)?.into_owned()),
    }
}

#[cfg(test)]
mod tests;
