use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid traceparent: {0}")]
    InvalidTraceparent(String),

    #[error("Response carries a payload where none is expected")]
    UnexpectedPayload,

    #[error("Response payload is missing")]
    MissingPayload,

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("Tracing setup error: {0}")]
    Tracing(anyhow::Error),
}

impl From<config::ConfigError> for ContractError {
    fn from(err: config::ConfigError) -> Self {
        ContractError::ConfigError(anyhow::Error::new(err))
    }
}

impl ContractError {
    /// True when the failure came from the declarative field rules rather than from parsing.
    pub fn is_validation(&self) -> bool {
        matches!(self, ContractError::Validation(_))
    }
}
