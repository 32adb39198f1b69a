use serde::{Deserialize, Serialize};
use twofa_core::observability::{TraceId, Traceable};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::ResetUid;
use crate::utils::codec::DtoResponse;
use crate::utils::validation::{validate_reset_uid, validate_trace_id};

/// Completes a reset using the token returned by the start step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TwoFaResetFinishRequest {
    #[validate(custom(function = "validate_trace_id"))]
    #[schema(value_type = String, example = "abc-2")]
    pub trace_id: TraceId,

    #[validate(custom(function = "validate_reset_uid"))]
    #[schema(value_type = String, example = "token-xyz")]
    pub reset_uid: ResetUid,
}

impl TwoFaResetFinishRequest {
    pub fn new(trace_id: impl Into<TraceId>, reset_uid: impl Into<ResetUid>) -> Self {
        Self {
            trace_id: trace_id.into(),
            reset_uid: reset_uid.into(),
        }
    }
}

impl Traceable for TwoFaResetFinishRequest {
    fn trace_id(&self) -> &TraceId {
        &self.trace_id
    }
}

/// Confirmation value owned by the reset service. Serialized as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct TwoFaResetFinishResponse(pub String);

impl TwoFaResetFinishResponse {
    pub fn new(confirmation: impl Into<String>) -> Self {
        Self(confirmation.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl DtoResponse for TwoFaResetFinishResponse {
    fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}
