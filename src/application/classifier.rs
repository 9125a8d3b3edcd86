//! Classify journal text into an emotion

use crate::domain::emotion::{normalize, EmotionResult};
use crate::domain::keywords::classify_by_keywords;
use crate::error::{JieleweError, Result};
use crate::infrastructure::backend::{backend_from_config, SentimentBackend};
use crate::infrastructure::config::{Config, MAX_RETRIES};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Turns free text into an `EmotionResult`.
///
/// Backend failures never reach the caller: after the configured retries the
/// keyword heuristic answers instead.
pub struct EmotionClassifier {
    backend: Option<Arc<dyn SentimentBackend>>,
    retries: u32,
    retry_delay: Duration,
    loading: AtomicBool,
}

impl EmotionClassifier {
    /// Classifier using `backend`, with no retries
    pub fn new(backend: Arc<dyn SentimentBackend>) -> Self {
        EmotionClassifier {
            backend: Some(backend),
            retries: 0,
            retry_delay: Duration::ZERO,
            loading: AtomicBool::new(false),
        }
    }

    /// Classifier with no backend at all; every call uses the keyword heuristic
    pub fn offline() -> Self {
        EmotionClassifier {
            backend: None,
            retries: 0,
            retry_delay: Duration::ZERO,
            loading: AtomicBool::new(false),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        EmotionClassifier::new(backend_from_config(config))
            .with_retries(config.retries, config.retry_delay())
    }

    /// Retry a failing backend `retries` more times before falling back.
    /// Anything above `MAX_RETRIES` is capped.
    pub fn with_retries(mut self, retries: u32, delay: Duration) -> Self {
        if retries > MAX_RETRIES {
            log::warn!("Capping backend retries at {} (asked for {})", MAX_RETRIES, retries);
        }
        self.retries = retries.min(MAX_RETRIES);
        self.retry_delay = delay;
        self
    }

    /// True while a classification is running
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Classify `text`. Returns `None` for empty or whitespace-only input.
    pub async fn classify(&self, text: &str) -> Option<EmotionResult> {
        if text.trim().is_empty() {
            return None;
        }

        let _loading = LoadingGuard::start(&self.loading);
        log::info!(
            "Starting sentiment analysis ({} characters)",
            text.chars().count()
        );

        let emotion = match self.classify_with_backend(text).await {
            Ok(emotion) => emotion,
            Err(e) => {
                log::warn!("Sentiment analysis failed: {}", e);
                log::info!("Falling back to keyword analysis");
                classify_by_keywords(text)
            }
        };

        log::info!(
            "Mapped emotion: {} ({:.2})",
            emotion.label(),
            emotion.score()
        );
        Some(emotion)
    }

    async fn classify_with_backend(&self, text: &str) -> Result<EmotionResult> {
        let backend = self
            .backend
            .as_ref()
            .ok_or_else(|| JieleweError::Backend("No sentiment backend available".to_string()))?;

        // `attempt` counts failures so far and never exceeds MAX_RETRIES
        let mut attempt = 0;
        loop {
            match score_once(backend.as_ref(), text).await {
                Ok(emotion) => return Ok(emotion),
                Err(e) if attempt < self.retries => {
                    attempt += 1;
                    log::warn!(
                        "Sentiment backend attempt {} of {} failed: {}",
                        attempt,
                        self.retries.saturating_add(1),
                        e
                    );
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

async fn score_once(backend: &dyn SentimentBackend, text: &str) -> Result<EmotionResult> {
    let pairs = backend.score(text).await?;
    log::debug!("Analysis result: {:?}", pairs);

    let top = pairs
        .into_iter()
        .next()
        .ok_or_else(|| JieleweError::Backend("Sentiment backend returned no scores".to_string()))?;

    if !top.score.is_finite() {
        return Err(JieleweError::Backend(format!(
            "Sentiment backend returned an invalid score for '{}'",
            top.label
        )));
    }

    Ok(normalize(&top))
}

/// Holds the loading flag up for as long as it lives
struct LoadingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> LoadingGuard<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        LoadingGuard { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
