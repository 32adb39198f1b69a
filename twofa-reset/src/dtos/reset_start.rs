use serde::{Deserialize, Serialize};
use twofa_core::observability::{TraceId, Traceable};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{OwnerScoped, ResetUid, TwoFaDto, TwoFaOwnerUid, TwoFaType};
use crate::utils::codec::DtoResponse;
use crate::utils::validation::{validate_owner_uid, validate_trace_id, validate_twofa_type};

/// Begins a two-phase reset of one owner's 2FA mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TwoFaResetStartRequest {
    #[validate(custom(function = "validate_trace_id"))]
    #[schema(value_type = String, example = "abc-1")]
    pub trace_id: TraceId,

    #[validate(custom(function = "validate_owner_uid"))]
    #[schema(value_type = String, example = "user-42")]
    pub owner_uid: TwoFaOwnerUid,

    #[serde(rename = "type")]
    #[validate(custom(function = "validate_twofa_type"))]
    #[schema(value_type = String, example = "totp")]
    pub twofa_type: TwoFaType,
}

impl TwoFaResetStartRequest {
    pub fn new(
        trace_id: impl Into<TraceId>,
        owner_uid: impl Into<TwoFaOwnerUid>,
        twofa_type: impl Into<TwoFaType>,
    ) -> Self {
        Self {
            trace_id: trace_id.into(),
            owner_uid: owner_uid.into(),
            twofa_type: twofa_type.into(),
        }
    }
}

impl Traceable for TwoFaResetStartRequest {
    fn trace_id(&self) -> &TraceId {
        &self.trace_id
    }
}

impl TwoFaDto for TwoFaResetStartRequest {
    fn twofa_type(&self) -> &TwoFaType {
        &self.twofa_type
    }
}

impl OwnerScoped for TwoFaResetStartRequest {
    fn owner_uid(&self) -> &TwoFaOwnerUid {
        &self.owner_uid
    }
}

/// Continuation token of the started reset. Serialized as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct TwoFaResetStartResponse(pub ResetUid);

impl TwoFaResetStartResponse {
    pub fn reset_uid(&self) -> &ResetUid {
        &self.0
    }

    pub fn into_reset_uid(self) -> ResetUid {
        self.0
    }
}

impl From<ResetUid> for TwoFaResetStartResponse {
    fn from(reset_uid: ResetUid) -> Self {
        Self(reset_uid)
    }
}

impl DtoResponse for TwoFaResetStartResponse {
    fn is_blank(&self) -> bool {
        self.0.as_str().trim().is_empty()
    }
}
