//! The reply port and its Web API implementation.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Failure while dispatching a reply.
#[derive(Debug, Error)]
pub enum ReplyError {
    /// The platform could not be reached.
    #[error("network error: {0}")]
    Network(String),
    /// The platform refused the message (HTTP failure or an `ok: false`
    /// envelope).
    #[error("message API error: {0}")]
    Api(String),
}

/// Send-message capability, authenticated as the bot.
///
/// The conversation binding travels with each call: a reply always goes to
/// the channel the triggering command came from, and the handler has no
/// other addressing state.
#[async_trait]
pub trait Replier: Send + Sync {
    async fn send_message(&self, channel_id: &str, text: &str) -> Result<(), ReplyError>;
}

const API_BASE: &str = "https://slack.com/api";

/// Web API client for posting messages as the bot.
#[derive(Debug, Clone)]
pub struct SlackClient {
    http: reqwest::Client,
    bot_token: String,
    base_url: String,
}

/// The Web API's response envelope; failures arrive as `ok: false` with an
/// error code, usually under HTTP 200.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

impl SlackClient {
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self::with_base_url(bot_token, API_BASE)
    }

    /// Point the client at a non-default API host (proxies, local stubs).
    pub fn with_base_url(bot_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            bot_token: bot_token.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Replier for SlackClient {
    async fn send_message(&self, channel_id: &str, text: &str) -> Result<(), ReplyError> {
        let response = self
            .http
            .post(format!("{}/chat.postMessage", self.base_url))
            .bearer_auth(&self.bot_token)
            .json(&serde_json::json!({
                "channel": channel_id,
                "text": text,
            }))
            .send()
            .await
            .map_err(|e| ReplyError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ReplyError::Api(format!("HTTP {status}: {body}")));
        }

        let envelope: ApiEnvelope = response
            .json()
            .await
            .map_err(|e| ReplyError::Api(format!("malformed response: {e}")))?;
        if !envelope.ok {
            return Err(ReplyError::Api(
                envelope.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        tracing::debug!(channel = %channel_id, bytes = text.len(), "reply dispatched");
        Ok(())
    }
}
