use thiserror::Error;

#[derive(Debug, Error)]
pub enum SparcError {
    /// The description failed validation. Carries the user-facing messages.
    #[error("invalid input: {}", .0.join("; "))]
    InvalidInput(Vec<String>),

    #[error("Invalid phase name: {0}")]
    InvalidPhase(String),

    #[error("unknown framework: {0}")]
    InvalidFramework(String),

    #[error("unknown complexity: {0}")]
    InvalidComplexity(String),

    #[error("unknown AI provider: {0}")]
    InvalidProvider(String),

    #[error("invalid output file name '{0}': must stay inside the output directory")]
    InvalidFileName(String),

    /// Spec building failed. The external message is fixed; the cause is kept.
    #[error("Failed to process input")]
    Processing {
        #[source]
        source: Box<SparcError>,
    },

    /// Phase synthesis failed for at least one phase. No partial output exists.
    #[error("Failed to generate SPARC documentation")]
    Generation {
        #[source]
        source: Box<SparcError>,
    },

    #[error("template rendering failed")]
    Render(#[from] std::fmt::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SparcError {
    pub fn processing(source: SparcError) -> Self {
        SparcError::Processing {
            source: Box::new(source),
        }
    }

    pub fn generation(source: SparcError) -> Self {
        SparcError::Generation {
            source: Box::new(source),
        }
    }

    /// The innermost error in a `Processing`/`Generation` wrapper chain.
    pub fn root_cause(&self) -> &SparcError {
        match self {
            SparcError::Processing { source } | SparcError::Generation { source } => {
                source.root_cause()
            }
            other => other,
        }
    }

    /// True for errors a caller can fix by changing the request.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self.root_cause(),
            SparcError::InvalidInput(_)
                | SparcError::InvalidPhase(_)
                | SparcError::InvalidFramework(_)
                | SparcError::InvalidComplexity(_)
                | SparcError::InvalidProvider(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SparcError>;
