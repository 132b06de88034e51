/// Top-level error type for the petition evidence engine.
#[derive(Debug, thiserror::Error)]
pub enum PetitionError {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid {category} source pattern `{pattern}`: {reason}")]
    InvalidPattern {
        category: String,
        pattern: String,
        reason: String,
    },

    #[error("invalid evidence record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("checkpoint {step} failed: {reason}")]
    Checkpoint { step: String, reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias.
pub type PetitionResult<T> = Result<T, PetitionError>;
