use std::fmt;

use serde::{Deserialize, Serialize};
use twofa_core::observability::{TraceId, Traceable};
use utoipa::ToSchema;
use validator::Validate;

use crate::utils::validation::{validate_trace_id, validate_twofa_type};

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

opaque_id!(
    /// Account or entity whose 2FA configuration is being reset.
    TwoFaOwnerUid
);

opaque_id!(
    /// Open tag naming the 2FA mechanism, e.g. "totp" or "sms".
    TwoFaType
);

opaque_id!(
    /// Continuation token linking a reset finish to the start that issued it.
    ResetUid
);

/// Message scoped to a single 2FA mechanism.
pub trait TwoFaDto: Traceable {
    fn twofa_type(&self) -> &TwoFaType;
}

/// Message addressed to a single 2FA owner.
pub trait OwnerScoped {
    fn owner_uid(&self) -> &TwoFaOwnerUid;
}

/// Fields shared by every generic 2FA message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TwoFaDtoBase {
    #[validate(custom(function = "validate_trace_id"))]
    #[schema(value_type = String, example = "abc-1")]
    pub trace_id: TraceId,

    #[serde(rename = "type")]
    #[validate(custom(function = "validate_twofa_type"))]
    #[schema(value_type = String, example = "totp")]
    pub twofa_type: TwoFaType,
}

impl TwoFaDtoBase {
    pub fn new(trace_id: impl Into<TraceId>, twofa_type: impl Into<TwoFaType>) -> Self {
        Self {
            trace_id: trace_id.into(),
            twofa_type: twofa_type.into(),
        }
    }
}

impl Traceable for TwoFaDtoBase {
    fn trace_id(&self) -> &TraceId {
        &self.trace_id
    }
}

impl TwoFaDto for TwoFaDtoBase {
    fn twofa_type(&self) -> &TwoFaType {
        &self.twofa_type
    }
}
