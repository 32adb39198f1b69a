//! Single-step reset. Two request shapes exist for the same operation: the
//! flat one carries every field itself, the composed one builds on
//! [`TwoFaDtoBase`]. Both share the empty acknowledgement.

use serde::{Deserialize, Serialize};
use twofa_core::observability::{TraceId, Traceable};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{OwnerScoped, TwoFaDto, TwoFaDtoBase, TwoFaOwnerUid, TwoFaType};
use crate::utils::codec::DtoResponse;
use crate::utils::validation::{validate_owner_uid, validate_trace_id, validate_twofa_type};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TwoFaResetRequest {
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

impl TwoFaResetRequest {
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

impl Traceable for TwoFaResetRequest {
    fn trace_id(&self) -> &TraceId {
        &self.trace_id
    }
}

impl TwoFaDto for TwoFaResetRequest {
    fn twofa_type(&self) -> &TwoFaType {
        &self.twofa_type
    }
}

impl OwnerScoped for TwoFaResetRequest {
    fn owner_uid(&self) -> &TwoFaOwnerUid {
        &self.owner_uid
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TwoFaResetComposedRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub base: TwoFaDtoBase,

    #[validate(custom(function = "validate_owner_uid"))]
    #[schema(value_type = String, example = "user-42")]
    pub owner_uid: TwoFaOwnerUid,
}

impl TwoFaResetComposedRequest {
    pub fn new(base: TwoFaDtoBase, owner_uid: impl Into<TwoFaOwnerUid>) -> Self {
        Self {
            base,
            owner_uid: owner_uid.into(),
        }
    }
}

impl Traceable for TwoFaResetComposedRequest {
    fn trace_id(&self) -> &TraceId {
        self.base.trace_id()
    }
}

impl TwoFaDto for TwoFaResetComposedRequest {
    fn twofa_type(&self) -> &TwoFaType {
        self.base.twofa_type()
    }
}

impl OwnerScoped for TwoFaResetComposedRequest {
    fn owner_uid(&self) -> &TwoFaOwnerUid {
        &self.owner_uid
    }
}

impl From<TwoFaResetRequest> for TwoFaResetComposedRequest {
    fn from(request: TwoFaResetRequest) -> Self {
        Self {
            base: TwoFaDtoBase {
                trace_id: request.trace_id,
                twofa_type: request.twofa_type,
            },
            owner_uid: request.owner_uid,
        }
    }
}

impl From<TwoFaResetComposedRequest> for TwoFaResetRequest {
    fn from(request: TwoFaResetComposedRequest) -> Self {
        Self {
            trace_id: request.base.trace_id,
            owner_uid: request.owner_uid,
            twofa_type: request.base.twofa_type,
        }
    }
}

/// Acknowledgement without payload. Success is signalled by its presence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoFaResetResponse;

impl DtoResponse for TwoFaResetResponse {
    const HAS_PAYLOAD: bool = false;
}
