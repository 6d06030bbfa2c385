//! Hosted multimodal chat-completion client.

use std::future::Future;

use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ModelError;

/// One chat turn: a system instruction, a user instruction and an optional
/// attached image as a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub system: String,
    pub user_text: String,
    pub image_data_url: Option<String>,
}

/// Anything that turns a [`ChatRequest`] into the model's reply text.
pub trait ChatModel: Send + Sync + 'static {
    fn complete(
        &self,
        request: ChatRequest,
    ) -> impl Future<Output = Result<String, ModelError>> + Send;
}

/// OpenAI-compatible `/chat/completions` client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            endpoint: format!("{}/chat/completions", config.api_base),
            model: config.model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn payload(&self, request: &ChatRequest) -> Value {
        let user_content = match &request.image_data_url {
            Some(url) => json!([
                { "type": "text", "text": request.user_text },
                { "type": "image_url", "image_url": { "url": url } }
            ]),
            None => json!(request.user_text),
        };

        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": request.system },
                { "role": "user", "content": user_content }
            ]
        })
    }
}

impl ChatModel for OpenAiClient {
    async fn complete(&self, request: ChatRequest) -> Result<String, ModelError> {
        debug!(model = %self.model, image = request.image_data_url.is_some(), "sending chat completion");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.payload(&request))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%status, body = %truncate(&body, 500), "chat completion response");

        if !status.is_success() {
            warn!(%status, "chat completion rejected");
            return Err(ModelError::Api {
                status: status.as_u16(),
                body,
            });
        }

        parse_reply(&body)
    }
}

/// Pulls `choices[0].message.content` out of a completion body.
pub fn parse_reply(body: &str) -> Result<String, ModelError> {
    let result: Value = serde_json::from_str(body)?;
    result["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or(ModelError::MissingContent)
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
