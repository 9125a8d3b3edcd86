//! Sentiment scoring backends

use crate::domain::emotion::{EmotionLabel, RawSentiment};
use crate::domain::keywords::classify_by_keywords;
use crate::error::{JieleweError, Result};
use crate::infrastructure::config::{BackendKind, Config};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

/// Anything that can turn text into labeled scores
#[async_trait::async_trait]
pub trait SentimentBackend: Send + Sync {
    /// Score `text`. The first pair returned is taken as authoritative.
    async fn score(&self, text: &str) -> Result<Vec<RawSentiment>>;
}

/// Build the backend selected in `config`
pub fn backend_from_config(config: &Config) -> Arc<dyn SentimentBackend> {
    match config.backend {
        BackendKind::Huggingface => Arc::new(HttpBackend::from_config(config)),
        BackendKind::Keyword => Arc::new(KeywordBackend),
    }
}

/// The keyword heuristic behind the backend interface.
///
/// Emits raw pairs in the same convention as a model: a negative result's
/// score is reported against the negative label and normalizes back to the
/// heuristic's own confidence.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordBackend;

#[async_trait::async_trait]
impl SentimentBackend for KeywordBackend {
    async fn score(&self, text: &str) -> Result<Vec<RawSentiment>> {
        let result = classify_by_keywords(text);
        let raw = match result.label() {
            EmotionLabel::Positive => RawSentiment::new("POSITIVE", result.score()),
            EmotionLabel::Negative => RawSentiment::new("NEGATIVE", 1.0 - result.score()),
            EmotionLabel::Neutral => RawSentiment::new("NEUTRAL", result.score()),
        };
        Ok(vec![raw])
    }
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// Inference endpoints answer either `[{..}]` or `[[{..}]]`
#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Nested(Vec<Vec<RawSentiment>>),
    Flat(Vec<RawSentiment>),
    Single(RawSentiment),
}

impl InferenceResponse {
    fn into_pairs(self) -> Vec<RawSentiment> {
        match self {
            InferenceResponse::Nested(outer) => outer.into_iter().next().unwrap_or_default(),
            InferenceResponse::Flat(pairs) => pairs,
            InferenceResponse::Single(pair) => vec![pair],
        }
    }
}

/// Parse an inference response body into label/score pairs
pub fn parse_inference_response(body: &str) -> Result<Vec<RawSentiment>> {
    let response: InferenceResponse = serde_json::from_str(body).map_err(|e| {
        JieleweError::Backend(format!("Unexpected response from sentiment model: {}", e))
    })?;
    Ok(response.into_pairs())
}

/// Hosted text-classification model reached over HTTP.
///
/// The HTTP client is built on first use and reused afterwards.
pub struct HttpBackend {
    url: String,
    token: Option<String>,
    timeout: Duration,
    client: OnceCell<reqwest::Client>,
}

impl HttpBackend {
    pub fn new(url: impl Into<String>, token: Option<String>, timeout: Duration) -> Self {
        HttpBackend {
            url: url.into(),
            token,
            timeout,
            client: OnceCell::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        HttpBackend::new(config.model_url(), config.api_token(), config.timeout())
    }

    async fn client(&self) -> Result<&reqwest::Client> {
        self.client
            .get_or_try_init(|| async {
                log::info!("Loading sentiment backend at {}", self.url);
                reqwest::Client::builder()
                    .timeout(self.timeout)
                    .build()
                    .map_err(JieleweError::Http)
            })
            .await
    }
}

#[async_trait::async_trait]
impl SentimentBackend for HttpBackend {
    async fn score(&self, text: &str) -> Result<Vec<RawSentiment>> {
        let client = self.client().await?;

        let mut request = client
            .post(&self.url)
            .json(&InferenceRequest { inputs: text });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(JieleweError::Backend(format!(
                "Sentiment model returned {}: {}",
                status,
                body.trim()
            )));
        }

        parse_inference_response(&body)
    }
}
