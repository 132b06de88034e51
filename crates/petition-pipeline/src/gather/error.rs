/// Failure reported by an external evidence collaborator.
#[derive(Debug, thiserror::Error)]
pub enum GatherError {
    #[error("{provider} request failed: {reason}")]
    Provider { provider: String, reason: String },

    #[error("collaborator unavailable: {0}")]
    Unavailable(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
