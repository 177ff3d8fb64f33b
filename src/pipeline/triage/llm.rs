use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::types::LlmClient;
use super::TriageError;

/// HTTP client for an OpenAI-compatible `/chat/completions` endpoint (Groq by default).
pub struct ChatCompletionsClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl ChatCompletionsClient {
    /// Create a client. Without an API key every call is rejected by the provider,
    /// which the triage stages treat like any other model failure.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        model: &str,
        timeout_secs: u64,
    ) -> Result<Self, TriageError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| TriageError::ModelUnavailable(format!("HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model: model.to_string(),
            client,
            timeout_secs,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Request body for `/chat/completions`
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response body from `/chat/completions`
#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl LlmClient for ChatCompletionsClient {
    fn complete(&self, prompt: &str, temperature: f32) -> Result<String, TriageError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature,
        };

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().map_err(|e| {
            if e.is_timeout() {
                TriageError::ModelTimeout {
                    secs: self.timeout_secs,
                }
            } else if e.is_connect() {
                TriageError::ModelUnavailable(format!("cannot reach {}", self.base_url))
            } else {
                TriageError::ModelUnavailable(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(TriageError::ModelUnavailable(format!(
                "provider returned status {}: {body}",
                status.as_u16()
            )));
        }

        let parsed: ChatCompletionResponse = response.json().map_err(|e| {
            if e.is_timeout() {
                TriageError::ModelTimeout {
                    secs: self.timeout_secs,
                }
            } else {
                TriageError::MalformedModelOutput(e.to_string())
            }
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| TriageError::MalformedModelOutput("response has no message".into()))
    }
}

/// Scripted reply for `MockLlmClient`.
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    Unavailable,
    Timeout,
}

/// Mock LLM client for testing: replays scripted replies in order and
/// records every prompt it receives.
pub struct MockLlmClient {
    replies: Mutex<VecDeque<MockReply>>,
    calls: Mutex<Vec<(String, f32)>>,
}

impl MockLlmClient {
    pub fn new(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Client whose every call succeeds with the given texts, in order.
    pub fn with_texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| MockReply::Text(t.to_string())).collect())
    }

    /// Client whose every call fails.
    pub fn unavailable() -> Self {
        Self::new(Vec::new())
    }

    /// Prompts received so far, with the temperature of each call.
    pub fn calls(&self) -> Vec<(String, f32)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl LlmClient for MockLlmClient {
    fn complete(&self, prompt: &str, temperature: f32) -> Result<String, TriageError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((prompt.to_string(), temperature));
        }

        let reply = self
            .replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.pop_front());

        match reply {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::Timeout) => Err(TriageError::ModelTimeout { secs: 60 }),
            Some(MockReply::Unavailable) | None => {
                Err(TriageError::ModelUnavailable("mock: no scripted reply".into()))
            }
        }
    }
}
