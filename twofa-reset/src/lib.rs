//! Message contract for the two-factor authentication reset workflow.
//!
//! Three operations are described: a two-phase reset (start, then finish
//! with the returned token) and a single-step reset, the latter in both a
//! flat and a composed request shape.

pub mod dtos;
pub mod models;
pub mod services;
pub mod utils;

pub use twofa_core;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(
            dtos::TwoFaResetStartRequest,
            dtos::TwoFaResetStartResponse,
            dtos::TwoFaResetFinishRequest,
            dtos::TwoFaResetFinishResponse,
            dtos::TwoFaResetRequest,
            dtos::TwoFaResetComposedRequest,
            models::TwoFaDtoBase,
            models::TwoFaOwnerUid,
            models::TwoFaType,
            models::ResetUid,
        )
    ),
    tags(
        (name = "2fa-reset", description = "Two-factor authentication reset messages")
    )
)]
pub struct TwoFaResetApiDoc;
