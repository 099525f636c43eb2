use std::fmt;
use std::time::Duration;
use async_trait::async_trait;
use log::error;
use reqwest::{Client, header};
use serde::{Deserialize, Serialize};

use crate::errors::OracleError;
use crate::providers::TranslationOracle;

/// Delimiter used to pack multiple texts into one request and unpack the reply
pub const DEFAULT_DELIMITER: &str = "\n\n";

/// OpenAI client for interacting with the chat-completions API
pub struct OpenAI {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to public API)
    endpoint: String,
    /// Model name
    model: String,
    /// Join/split delimiter for the batch protocol
    delimiter: String,
}

/// Chat-completions request
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    /// The model to use
    model: String,

    /// The messages for the conversation
    messages: Vec<ChatMessage>,

    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,

    /// Maximum number of tokens to generate
    max_tokens: u32,

    /// Top probability mass to consider (nucleus sampling)
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
}

/// Chat message format
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

/// Chat-completions response
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    /// The completion choices
    pub choices: Vec<ChatChoice>,
}

/// Individual choice in a chat-completions response
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    /// The generated message
    pub message: ChatResponseMessage,
}

/// Message payload of a completion choice
#[derive(Debug, Deserialize)]
pub struct ChatResponseMessage {
    /// The actual text content
    pub content: String,
}

impl ChatRequest {
    /// Create a new chat request
    pub fn new(model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature: None,
            max_tokens,
            top_p: None,
        }
    }

    /// Add a message to the request
    pub fn add_message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage {
            role: role.into(),
            content: content.into(),
        });
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the top_p (nucleus sampling)
    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }
}

impl OpenAI {
    /// Create a new OpenAI client
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Override the batch join/split delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Complete a chat request
    pub async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, OracleError> {
        let api_url = if self.endpoint.is_empty() {
            "https://api.openai.com/v1/chat/completions".to_string()
        } else {
            format!(
                "{}/v1/chat/completions",
                self.endpoint.trim_end_matches('/')
            )
        };

        let response = self
            .client
            .post(&api_url)
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                OracleError::Unavailable(format!("failed to send request to OpenAI API: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to get error response text".to_string());
            error!("OpenAI API error ({}): {}", status, error_text);
            return Err(OracleError::Unavailable(format!(
                "OpenAI API error ({status}): {error_text}"
            )));
        }

        response.json::<ChatResponse>().await.map_err(|e| {
            OracleError::MalformedResponse(format!("failed to parse OpenAI API response: {e}"))
        })
    }

    /// Extract text from a chat-completions response
    pub fn extract_text_from_response(response: &ChatResponse) -> Result<String, OracleError> {
        response
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| {
                OracleError::MalformedResponse("response contains no choices".to_string())
            })
    }

    /// Join batch texts into one combined request body
    ///
    /// A delimiter occurrence inside a text would desynchronize the split on
    /// the way back, so embedded occurrences are collapsed to a single
    /// newline first.
    pub fn join_batch(texts: &[String], delimiter: &str) -> String {
        texts
            .iter()
            .map(|text| {
                let mut sanitized = text.clone();
                while sanitized.contains(delimiter) {
                    sanitized = sanitized.replace(delimiter, "\n");
                }
                sanitized
            })
            .collect::<Vec<_>>()
            .join(delimiter)
    }

    /// Split a combined response back into per-text translations
    ///
    /// The delimiter-split count is not guaranteed to equal the request
    /// count; a disagreement is reported as a malformed response, never
    /// returned as a shifted sequence.
    pub fn split_response(
        content: &str,
        delimiter: &str,
        expected: usize,
    ) -> Result<Vec<String>, OracleError> {
        let translations: Vec<String> = content
            .trim()
            .split(delimiter)
            .map(|part| part.trim().to_string())
            .collect();

        if translations.len() != expected {
            return Err(OracleError::MalformedResponse(format!(
                "expected {} translated blocks, got {}",
                expected,
                translations.len()
            )));
        }

        Ok(translations)
    }
}

impl fmt::Debug for OpenAI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAI")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TranslationOracle for OpenAI {
    async fn translate_batch(
        &self,
        texts: &[String],
        target_language: &str,
    ) -> Result<Vec<String>, OracleError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let joined = Self::join_batch(texts, &self.delimiter);
        let request = ChatRequest::new(&self.model, 2000)
            .add_message(
                "system",
                format!(
                    "You are a {target_language} AI that translates English text into {target_language}."
                ),
            )
            .add_message(
                "user",
                format!("Translate the following texts to {target_language}:\n\n{joined}"),
            )
            .temperature(1.0)
            .top_p(1.0);

        let response = self.complete(request).await?;
        let content = Self::extract_text_from_response(&response)?;
        Self::split_response(&content, &self.delimiter, texts.len())
    }
}
