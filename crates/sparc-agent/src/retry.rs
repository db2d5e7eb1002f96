use std::time::Duration;

use serde::Serialize;
use sparc_core::config::RetryConfig;
use sparc_core::types::AiProvider;

use crate::error::ProviderError;
use crate::provider::ContentGenerator;

// ─── RetryPolicy ──────────────────────────────────────────────────────────

/// Bounded retry with a delay that doubles after every failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(cfg: &RetryConfig) -> Self {
        Self {
            max_attempts: cfg.max_attempts.max(1),
            base_delay: Duration::from_millis(cfg.base_delay_ms),
        }
    }
}

impl RetryPolicy {
    /// Delay after the 1-based `attempt` failed: `base * 2^(attempt - 1)`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.base_delay.saturating_mul(factor)
    }
}

// ─── GenerationResult ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub success: bool,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResult {
    fn ok(content: String) -> Self {
        Self {
            success: true,
            content,
            error: None,
        }
    }

    fn failed(err: &ProviderError) -> Self {
        Self {
            success: false,
            content: String::new(),
            error: Some(err.to_string()),
        }
    }
}

// ─── Public API ───────────────────────────────────────────────────────────

/// Ask `generator` for text using the default [`RetryPolicy`].
pub async fn generate_content(
    generator: &dyn ContentGenerator,
    prompt: &str,
    provider: AiProvider,
) -> GenerationResult {
    generate_content_with(generator, prompt, provider, &RetryPolicy::default()).await
}

/// Ask `generator` for text, retrying transient failures per `policy`.
///
/// Authentication, rate-limit and generic failures are returned after the
/// first attempt. The result never carries a Rust error; failures are
/// reported through `success: false` and the error message.
pub async fn generate_content_with(
    generator: &dyn ContentGenerator,
    prompt: &str,
    provider: AiProvider,
    policy: &RetryPolicy,
) -> GenerationResult {
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match generator.generate(prompt, provider).await {
            Ok(content) => return GenerationResult::ok(content),
            Err(err) if err.is_retryable() && attempt < max_attempts => {
                let delay = policy.delay_for(attempt);
                tracing::warn!(
                    %provider,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "content generation failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => {
                tracing::warn!(%provider, attempt, error = %err, "content generation failed");
                return GenerationResult::failed(&err);
            }
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Replays a fixed sequence of outcomes and counts calls.
    struct Scripted {
        outcomes: Mutex<VecDeque<Result<String, ProviderError>>>,
        calls: AtomicUsize,
    }

    impl Scripted {
        fn new(outcomes: Vec<Result<String, ProviderError>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into()),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ContentGenerator for Scripted {
        async fn generate(
            &self,
            _prompt: &str,
            _provider: AiProvider,
        ) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ProviderError::Failed("script exhausted".into())))
        }
    }

    fn fast() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(1),
        }
    }

    fn transient() -> ProviderError {
        ProviderError::from_status(503, "upstream unavailable")
    }

    #[test]
    fn delay_doubles() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(1), Duration::from_millis(1000));
        assert_eq!(policy.delay_for(2), Duration::from_millis(2000));
        assert_eq!(policy.delay_for(3), Duration::from_millis(4000));
    }

    #[test]
    fn policy_from_config_clamps_attempts() {
        let cfg = RetryConfig {
            max_attempts: 0,
            base_delay_ms: 250,
        };
        let policy = RetryPolicy::from(&cfg);
        assert_eq!(policy.max_attempts, 1);
        assert_eq!(policy.base_delay, Duration::from_millis(250));
    }

    #[tokio::test]
    async fn success_first_try() {
        let generator = Scripted::new(vec![Ok("notes".into())]);
        let result = generate_content_with(&generator, "p", AiProvider::Mock, &fast()).await;
        assert_eq!(result, GenerationResult::ok("notes".into()));
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn transient_failures_are_retried() {
        let generator = Scripted::new(vec![Err(transient()), Err(transient()), Ok("late".into())]);
        let result = generate_content_with(&generator, "p", AiProvider::Mock, &fast()).await;
        assert!(result.success);
        assert_eq!(result.content, "late");
        assert_eq!(generator.calls(), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let generator = Scripted::new(vec![
            Err(transient()),
            Err(transient()),
            Err(transient()),
            Ok("never".into()),
        ]);
        let result = generate_content_with(&generator, "p", AiProvider::Mock, &fast()).await;
        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("Provider unavailable (503): upstream unavailable")
        );
        assert_eq!(generator.calls(), 3);
    }

    #[tokio::test]
    async fn authentication_is_not_retried() {
        let generator = Scripted::new(vec![
            Err(ProviderError::from_status(401, "invalid key")),
            Ok("never".into()),
        ]);
        let result = generate_content_with(&generator, "p", AiProvider::OpenAi, &fast()).await;
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Authentication failed: invalid key"));
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn rate_limit_is_surfaced_without_retry() {
        let generator = Scripted::new(vec![Err(ProviderError::from_status(429, "quota"))]);
        let result = generate_content_with(&generator, "p", AiProvider::Anthropic, &fast()).await;
        assert_eq!(result.error.as_deref(), Some("Rate limit exceeded: quota"));
        assert_eq!(generator.calls(), 1);
    }

    #[test]
    fn result_serializes_without_error_on_success() {
        let json = serde_json::to_value(GenerationResult::ok("x".into())).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "content": "x"}));
    }
}
