//! `sparc-agent`: the content-generation capability behind SPARC documents.
//!
//! The core pipeline is fully template-driven. This crate supplies the one
//! asynchronous collaborator it may consult: something that turns a prompt
//! into text for a named provider.
//!
//! # Architecture
//!
//! ```text
//! ProviderConfig  ← credentials, validated when a generator is built
//!     │
//!     ▼
//! ContentGenerator (trait)
//!     │   CannedGenerator: fixed text, no network
//!     ▼
//! generate_content ← bounded retry, doubling delay, no retry on 401/403/429
//!     │
//!     ▼
//! elaborate        ← appends "## Additional Notes" to each phase document
//! ```
//!
//! # Quick start
//!
//! ```rust,ignore
//! use sparc_agent::{generate_content, CannedGenerator};
//! use sparc_core::types::AiProvider;
//!
//! let generator = CannedGenerator::mock();
//! let result = generate_content(&generator, "Architecture notes", AiProvider::Mock).await;
//! assert!(result.success);
//! ```

pub mod elaborate;
pub mod error;
pub mod provider;
pub mod retry;

pub use elaborate::elaborate;
pub use error::{ConfigError, ProviderError};
pub use provider::{CannedGenerator, ContentGenerator, ProviderConfig};
pub use retry::{generate_content, generate_content_with, GenerationResult, RetryPolicy};
