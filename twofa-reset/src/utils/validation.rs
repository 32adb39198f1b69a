//! Field rules applied when a consumer validates a reset DTO.
//!
//! Identifiers, tokens and the 2FA type tag are opaque to this crate and are
//! passed through unmodified. The only rule is presence: a value that is empty
//! or whitespace-only is treated as missing.

use std::borrow::Cow;

use twofa_core::observability::TraceId;
use validator::ValidationError;

use crate::models::{ResetUid, TwoFaOwnerUid, TwoFaType};

fn require_present(value: &str, label: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Owned(format!("{} is required", label)));
        return Err(err);
    }
    Ok(())
}

pub fn validate_trace_id(value: &TraceId) -> Result<(), ValidationError> {
    require_present(value.as_str(), "Trace id")
}

pub fn validate_owner_uid(value: &TwoFaOwnerUid) -> Result<(), ValidationError> {
    require_present(value.as_str(), "Owner uid")
}

pub fn validate_reset_uid(value: &ResetUid) -> Result<(), ValidationError> {
    require_present(value.as_str(), "Reset uid")
}

pub fn validate_twofa_type(value: &TwoFaType) -> Result<(), ValidationError> {
    require_present(value.as_str(), "2FA type")
}
