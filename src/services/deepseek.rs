use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{
    message::Message,
    rules::{MODEL, TEMPERATURE},
};

#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub temperature: f32,
    pub messages: &'a [Message],
}

#[derive(Debug, Default, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// `choices[0].message.content`, if present and non-empty.
    pub fn into_first_content(self) -> Option<String> {
        self.choices?
            .into_iter()
            .next()?
            .message?
            .content
            .filter(|c| !c.is_empty())
    }
}

/// Known error body shapes, tried in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamErrorShape {
    /// `{"error": {"message": "..."}}`
    Nested(String),
    /// `{"message": "..."}`
    Flat(String),
    /// Anything else, serialized as-is.
    Raw(String),
}

impl UpstreamErrorShape {
    pub fn from_body(body: &Value) -> Self {
        if let Some(message) = present(body.pointer("/error/message")) {
            return Self::Nested(message);
        }
        if let Some(message) = present(body.get("message")) {
            return Self::Flat(message);
        }
        Self::Raw(body.to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Nested(m) | Self::Flat(m) | Self::Raw(m) => m,
        }
    }
}

// Null, false and empty strings count as absent.
fn present(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[derive(Debug, PartialEq)]
pub enum Completion {
    /// Upstream status < 400. `None` when the body carried no usable content.
    Success(Option<String>),
    Rejected { status: StatusCode, error: UpstreamErrorShape },
}

impl Completion {
    pub fn from_response(status: StatusCode, body: Value) -> Self {
        if status.as_u16() >= 400 {
            return Completion::Rejected { status, error: UpstreamErrorShape::from_body(&body) };
        }
        let content = serde_json::from_value::<CompletionResponse>(body)
            .ok()
            .and_then(CompletionResponse::into_first_content);
        Completion::Success(content)
    }
}

/// Thin client for the chat-completion endpoint. Cheap to clone; the
/// underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct DeepSeekClient {
    http: Client,
    api_url: String,
}

impl DeepSeekClient {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, api_url: api_url.into() })
    }

    /// One request, one fully buffered response. Any failure before a JSON
    /// body is decoded comes back as `Err`.
    pub async fn complete(&self, api_key: &str, messages: &[Message]) -> Result<Completion, reqwest::Error> {
        let payload = CompletionRequest { model: MODEL, temperature: TEMPERATURE, messages };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;
        debug!(%status, "upstream responded");

        Ok(Completion::from_response(status, body))
    }
}
