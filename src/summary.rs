//! Marketing summaries of a laptop's raw specification text.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

use crate::config::AiConfig;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("AI summaries are not configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("model returned no text")]
    EmptyResponse,
}

/// Text-in, text-out summary service.
#[async_trait]
pub trait SpecSummarizer: Send + Sync {
    async fn summarize(&self, specs: &str) -> Result<String, SummaryError>;
}

/// Used when no API key is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledSummarizer;

#[async_trait]
impl SpecSummarizer for DisabledSummarizer {
    async fn summarize(&self, _specs: &str) -> Result<String, SummaryError> {
        Err(SummaryError::NotConfigured)
    }
}

pub fn summary_prompt(specs: &str) -> String {
    format!(
        "You are an AI expert in creating concise, human-readable summaries of laptop specifications.\n\n\
         Please create a summary of the specifications provided, highlighting the key features and \
         benefits for a potential buyer.\n\n\
         Specifications: {specs}"
    )
}

/// Google Generative Language `generateContent` client.
pub struct GeminiSummarizer {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: SecretString,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiSummarizer {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: SecretString,
    ) -> Result<Self, SummaryError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
        })
    }
}

#[async_trait]
impl SpecSummarizer for GeminiSummarizer {
    async fn summarize(&self, specs: &str) -> Result<String, SummaryError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": summary_prompt(specs) }] }]
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SummaryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");
        let text = text.trim();
        if text.is_empty() {
            return Err(SummaryError::EmptyResponse);
        }
        Ok(text.to_string())
    }
}

pub fn summarizer_from_config(
    config: &AiConfig,
) -> Result<std::sync::Arc<dyn SpecSummarizer>, SummaryError> {
    match &config.api_key {
        Some(key) => Ok(std::sync::Arc::new(GeminiSummarizer::new(
            config.base_url.clone(),
            config.model.clone(),
            SecretString::from(key.expose_secret().to_string()),
        )?)),
        None => {
            tracing::info!("AI_API_KEY not set, spec summaries disabled");
            Ok(std::sync::Arc::new(DisabledSummarizer))
        }
    }
}
