use std::sync::Arc;

use sparc_agent::{CannedGenerator, ConfigError, ContentGenerator, ProviderConfig, RetryPolicy};
use sparc_core::config::Config;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub providers: ProviderConfig,
    pub retry: RetryPolicy,
    pub generator: Arc<dyn ContentGenerator>,
}

impl AppState {
    /// Build state around the canned generator. Fails when the configured
    /// default provider has no credentials.
    pub fn new(config: Config, providers: ProviderConfig) -> Result<Self, ConfigError> {
        let generator = CannedGenerator::new(config.generation.ai_provider, providers.clone())?;
        Ok(Self::with_generator(config, providers, Arc::new(generator)))
    }

    pub fn with_generator(
        config: Config,
        providers: ProviderConfig,
        generator: Arc<dyn ContentGenerator>,
    ) -> Self {
        let retry = RetryPolicy::from(&config.providers.retry);
        Self {
            config: Arc::new(config),
            providers,
            retry,
            generator,
        }
    }
}
