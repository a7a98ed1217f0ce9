use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::config::CompletionConfig;
use crate::services::completion::CompletionService;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Debug, Deserialize)]
struct MessageContent {
    content: Option<String>,
}

impl ChatResponse {
    fn into_reply(self) -> Result<String> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("completion response contained no choices"))?;

        choice
            .message
            .content
            .ok_or_else(|| anyhow::anyhow!("completion response had no message content"))
    }
}

pub struct OpenAiService {
    api_key: String,
    model: String,
    endpoint: String,
    client: reqwest::Client,
}

impl OpenAiService {
    pub fn new(config: &CompletionConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: format!("{}/chat/completions", config.base_url),
            client: reqwest::Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl CompletionService for OpenAiService {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: user },
            ],
        };

        log::info!("🤖 Sending request to completion service with model: {}", self.model);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        log::debug!("📥 Completion response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await?;
            log::error!("❌ Completion API error ({}): {}", status, error_text);
            anyhow::bail!("completion API error ({}): {}", status, error_text);
        }

        let chat_response: ChatResponse = response.json().await?;
        let reply = chat_response.into_reply()?;
        log::info!("💬 Completion reply: {}", reply);

        Ok(reply)
    }
}
