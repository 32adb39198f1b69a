use thiserror::Error;
use twofa_core::error::ContractError;

/// Failures a reset service reports alongside the contract. None of these
/// change the shape of a response.
#[derive(Error, Debug)]
pub enum ResetServiceError {
    #[error("Unknown 2FA owner")]
    UnknownOwner,

    #[error("Unsupported 2FA type: {0}")]
    UnsupportedType(String),

    #[error("A reset is already in progress")]
    ResetInProgress,

    #[error("Invalid reset uid")]
    InvalidResetUid,

    #[error("Reset expired")]
    ResetExpired,

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Contract error: {0}")]
    Contract(#[from] ContractError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ResetServiceError {
    /// True for failures caused by the request rather than by the service.
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            ResetServiceError::Internal(_) | ResetServiceError::Contract(_)
        )
    }
}
