use async_trait::async_trait;
use sparc_core::config::ProvidersConfig;
use sparc_core::types::AiProvider;

use crate::error::{ConfigError, ProviderError};

// ─── ContentGenerator ─────────────────────────────────────────────────────

/// Something that turns a prompt into text on behalf of a provider.
///
/// Implementations must be shareable across request handlers, so the trait
/// is object-safe and `Send + Sync`.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, provider: AiProvider) -> Result<String, ProviderError>;
}

// ─── ProviderConfig ───────────────────────────────────────────────────────

/// Credentials handed to a generator at construction time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderConfig {
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
}

impl ProviderConfig {
    pub fn api_key(&self, provider: AiProvider) -> Option<&str> {
        let key = match provider {
            AiProvider::OpenAi => self.openai_api_key.as_deref(),
            AiProvider::Anthropic => self.anthropic_api_key.as_deref(),
            AiProvider::Mock => None,
        };
        key.filter(|k| !k.trim().is_empty())
    }

    pub fn is_configured(&self, provider: AiProvider) -> bool {
        !provider.requires_credentials() || self.api_key(provider).is_some()
    }

    /// Providers this config can serve, in listing order.
    pub fn configured(&self) -> Vec<AiProvider> {
        AiProvider::all()
            .iter()
            .copied()
            .filter(|p| self.is_configured(*p))
            .collect()
    }
}

impl From<&ProvidersConfig> for ProviderConfig {
    fn from(cfg: &ProvidersConfig) -> Self {
        Self {
            openai_api_key: cfg.api_key(AiProvider::OpenAi).map(str::to_owned),
            anthropic_api_key: cfg.api_key(AiProvider::Anthropic).map(str::to_owned),
        }
    }
}

// ─── CannedGenerator ──────────────────────────────────────────────────────

/// Returns fixed text for every prompt. Providers without credentials are
/// answered with an authentication failure, the way a real backend would
/// answer a missing key.
#[derive(Debug, Clone)]
pub struct CannedGenerator {
    config: ProviderConfig,
}

impl CannedGenerator {
    /// Build a generator whose default provider is `provider`; fails fast
    /// when that provider has no credentials.
    pub fn new(provider: AiProvider, config: ProviderConfig) -> Result<Self, ConfigError> {
        if !config.is_configured(provider) {
            return Err(ConfigError::MissingCredentials(provider));
        }
        Ok(Self { config })
    }

    /// A generator that only serves [`AiProvider::Mock`] until given keys.
    pub fn mock() -> Self {
        Self {
            config: ProviderConfig::default(),
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

#[async_trait]
impl ContentGenerator for CannedGenerator {
    async fn generate(&self, prompt: &str, provider: AiProvider) -> Result<String, ProviderError> {
        if !self.config.is_configured(provider) {
            return Err(ProviderError::from_status(
                401,
                format!("no API key configured for {}", provider.display_name()),
            ));
        }
        let topic = prompt.lines().next().unwrap_or_default().trim();
        tracing::debug!(%provider, prompt_chars = prompt.chars().count(), "canned generation");
        Ok(format!(
            "- Review \"{topic}\" with the team before implementation starts\n\
             - Record open decisions in the project log\n\
             - Revisit this document after the first milestone\n"
        ))
    }
}
