use sparc_core::types::AiProvider;
use thiserror::Error;

/// A failed call to a content generator, classified by its status code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Provider unavailable ({status}): {message}")]
    Transient { status: u16, message: String },

    #[error("{0}")]
    Failed(String),
}

impl ProviderError {
    /// Map an HTTP-like status code onto an error class.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => ProviderError::Authentication(message),
            429 => ProviderError::RateLimited(message),
            500..=599 => ProviderError::Transient { status, message },
            _ => ProviderError::Failed(message),
        }
    }

    /// Only transient server-side failures are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProviderError::Transient { .. })
    }
}

/// Raised when a generator is built for a provider it cannot serve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing API key for provider '{0}'")]
    MissingCredentials(AiProvider),
}
