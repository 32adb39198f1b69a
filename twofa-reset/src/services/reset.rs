use async_trait::async_trait;
use tracing::Instrument;
use twofa_core::error::ContractError;
use twofa_core::observability::Traceable;
use validator::Validate;

use crate::dtos::{
    TwoFaResetComposedRequest, TwoFaResetFinishRequest, TwoFaResetFinishResponse,
    TwoFaResetRequest, TwoFaResetResponse, TwoFaResetStartRequest, TwoFaResetStartResponse,
};
use crate::models::{OwnerScoped, TwoFaDto};
use crate::services::ResetServiceError;
use crate::utils::codec::DtoResponse;

/// Operations of the external 2FA reset service.
///
/// The flat and composed reset requests are separate operations. Neither is
/// treated as superseding the other.
#[async_trait]
pub trait TwoFaResetService: Send + Sync {
    async fn reset_start(
        &self,
        request: TwoFaResetStartRequest,
    ) -> Result<TwoFaResetStartResponse, ResetServiceError>;

    async fn reset_finish(
        &self,
        request: TwoFaResetFinishRequest,
    ) -> Result<TwoFaResetFinishResponse, ResetServiceError>;

    async fn reset(&self, request: TwoFaResetRequest)
        -> Result<TwoFaResetResponse, ResetServiceError>;

    async fn reset_composed(
        &self,
        request: TwoFaResetComposedRequest,
    ) -> Result<TwoFaResetResponse, ResetServiceError>;
}

/// Validates requests and responses around another [`TwoFaResetService`] and
/// records every call in a span keyed by the request's trace id.
pub struct InstrumentedResetService<S> {
    inner: S,
}

impl<S> InstrumentedResetService<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

fn record_failure(err: &ResetServiceError) {
    if err.is_rejection() {
        tracing::warn!(error = %err, "2FA reset rejected");
    } else {
        tracing::error!(error = %err, "2FA reset failed");
    }
}

fn validate_request<T: Validate>(request: &T) -> Result<(), ResetServiceError> {
    request
        .validate()
        .map_err(ResetServiceError::from)
        .inspect_err(record_failure)
}

fn ensure_payload<R: DtoResponse>(response: R) -> Result<R, ResetServiceError> {
    if response.is_blank() {
        let err = ResetServiceError::from(ContractError::MissingPayload);
        record_failure(&err);
        return Err(err);
    }
    Ok(response)
}

#[async_trait]
impl<S: TwoFaResetService> TwoFaResetService for InstrumentedResetService<S> {
    async fn reset_start(
        &self,
        request: TwoFaResetStartRequest,
    ) -> Result<TwoFaResetStartResponse, ResetServiceError> {
        let span = tracing::info_span!(
            "twofa_reset_start",
            trace_id = %request.trace_id(),
            owner_uid = %request.owner_uid(),
            twofa_type = %request.twofa_type()
        );

        async move {
            validate_request(&request)?;
            let response = self
                .inner
                .reset_start(request)
                .await
                .inspect_err(record_failure)?;
            let response = ensure_payload(response)?;
            tracing::info!("2FA reset started");
            Ok::<_, ResetServiceError>(response)
        }
        .instrument(span)
        .await
    }

    async fn reset_finish(
        &self,
        request: TwoFaResetFinishRequest,
    ) -> Result<TwoFaResetFinishResponse, ResetServiceError> {
        // The reset uid is a live credential and stays out of the span.
        let span = tracing::info_span!("twofa_reset_finish", trace_id = %request.trace_id());

        async move {
            validate_request(&request)?;
            let response = self
                .inner
                .reset_finish(request)
                .await
                .inspect_err(record_failure)?;
            let response = ensure_payload(response)?;
            tracing::info!("2FA reset finished");
            Ok::<_, ResetServiceError>(response)
        }
        .instrument(span)
        .await
    }

    async fn reset(
        &self,
        request: TwoFaResetRequest,
    ) -> Result<TwoFaResetResponse, ResetServiceError> {
        let span = tracing::info_span!(
            "twofa_reset",
            trace_id = %request.trace_id(),
            owner_uid = %request.owner_uid(),
            twofa_type = %request.twofa_type()
        );

        async move {
            validate_request(&request)?;
            let response = self
                .inner
                .reset(request)
                .await
                .inspect_err(record_failure)?;
            tracing::info!("2FA reset");
            Ok::<_, ResetServiceError>(response)
        }
        .instrument(span)
        .await
    }

    async fn reset_composed(
        &self,
        request: TwoFaResetComposedRequest,
    ) -> Result<TwoFaResetResponse, ResetServiceError> {
        let span = tracing::info_span!(
            "twofa_reset_composed",
            trace_id = %request.trace_id(),
            owner_uid = %request.owner_uid(),
            twofa_type = %request.twofa_type()
        );

        async move {
            validate_request(&request)?;
            let response = self
                .inner
                .reset_composed(request)
                .await
                .inspect_err(record_failure)?;
            tracing::info!("2FA reset");
            Ok::<_, ResetServiceError>(response)
        }
        .instrument(span)
        .await
    }
}
