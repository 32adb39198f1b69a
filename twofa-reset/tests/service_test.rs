mod common;

use common::{init_test_tracing, BlankTokenService, InMemoryResetService};
use twofa_reset::dtos::{
    TwoFaResetComposedRequest, TwoFaResetFinishRequest, TwoFaResetRequest, TwoFaResetResponse,
    TwoFaResetStartRequest,
};
use twofa_reset::models::{ResetUid, TwoFaDtoBase, TwoFaOwnerUid, TwoFaType};
use twofa_reset::services::{InstrumentedResetService, ResetServiceError, TwoFaResetService};
use twofa_reset::twofa_core::error::ContractError;
use twofa_reset::utils::decode_request;

#[tokio::test]
async fn test_two_phase_reset_flow() {
    init_test_tracing();
    let service = InstrumentedResetService::new(InMemoryResetService::new());

    let started = service
        .reset_start(TwoFaResetStartRequest::new("abc-1", "user-42", "totp"))
        .await
        .expect("start should succeed");

    let finish = TwoFaResetFinishRequest::new("abc-2", started.reset_uid().clone());
    let confirmation = service
        .reset_finish(finish.clone())
        .await
        .expect("finish should succeed");
    assert_eq!(confirmation.as_str(), "confirmed");
    assert_eq!(
        service.inner().completed(),
        vec![(TwoFaOwnerUid::from("user-42"), TwoFaType::from("totp"))]
    );

    // A consumed token cannot be replayed.
    let replay = service.reset_finish(finish).await;
    assert!(matches!(replay, Err(ResetServiceError::InvalidResetUid)));
}

#[tokio::test]
async fn test_second_start_while_pending_is_rejected() {
    init_test_tracing();
    let service = InstrumentedResetService::new(InMemoryResetService::new());

    service
        .reset_start(TwoFaResetStartRequest::new("abc-1", "user-42", "totp"))
        .await
        .unwrap();
    let second = service
        .reset_start(TwoFaResetStartRequest::new("abc-3", "user-42", "totp"))
        .await;
    assert!(matches!(second, Err(ResetServiceError::ResetInProgress)));

    // A different mechanism for the same owner is independent.
    service
        .reset_start(TwoFaResetStartRequest::new("abc-4", "user-42", "sms"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_invalid_requests_never_reach_the_service() {
    init_test_tracing();
    let service = InstrumentedResetService::new(InMemoryResetService::new());

    let result = service
        .reset_start(TwoFaResetStartRequest::new("abc-1", "user-42", ""))
        .await;
    assert!(matches!(result, Err(ResetServiceError::Validation(_))));

    let result = service
        .reset_finish(TwoFaResetFinishRequest::new("", "token-xyz"))
        .await;
    assert!(matches!(result, Err(ResetServiceError::Validation(_))));

    let result = service
        .reset_composed(TwoFaResetComposedRequest::new(
            TwoFaDtoBase::new("abc-1", "totp"),
            "",
        ))
        .await;
    assert!(matches!(result, Err(ResetServiceError::Validation(_))));

    assert_eq!(service.inner().calls(), 0);
}

#[tokio::test]
async fn test_collaborator_errors_pass_through() {
    init_test_tracing();
    let service = InstrumentedResetService::new(InMemoryResetService::new());

    let unknown = service
        .reset(TwoFaResetRequest::new("abc-1", "user-999", "totp"))
        .await;
    assert!(matches!(unknown, Err(ResetServiceError::UnknownOwner)));

    let unsupported = service
        .reset_start(TwoFaResetStartRequest::new("abc-1", "user-42", "voice"))
        .await;
    match unsupported {
        Err(ResetServiceError::UnsupportedType(kind)) => assert_eq!(kind, "voice"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_both_reset_variants_acknowledge() {
    init_test_tracing();
    let service = InstrumentedResetService::new(InMemoryResetService::new());

    let flat = TwoFaResetRequest::new("abc-1", "user-42", "totp");
    let ack = service.reset(flat.clone()).await.unwrap();
    assert_eq!(ack, TwoFaResetResponse);

    let ack = service
        .reset_composed(TwoFaResetComposedRequest::from(flat))
        .await
        .unwrap();
    assert_eq!(ack, TwoFaResetResponse);

    assert_eq!(service.inner().completed().len(), 2);
}

#[tokio::test]
async fn test_blank_tokens_from_collaborator_are_rejected() {
    init_test_tracing();
    let service = InstrumentedResetService::new(BlankTokenService);

    let start = service
        .reset_start(TwoFaResetStartRequest::new("abc-1", "user-42", "totp"))
        .await;
    assert!(matches!(
        start,
        Err(ResetServiceError::Contract(ContractError::MissingPayload))
    ));

    let finish = service
        .reset_finish(TwoFaResetFinishRequest::new("abc-2", "token-xyz"))
        .await;
    assert!(matches!(
        finish,
        Err(ResetServiceError::Contract(ContractError::MissingPayload))
    ));
}

#[tokio::test]
async fn test_long_reset_uid_reaches_the_service() {
    init_test_tracing();
    let service = InstrumentedResetService::new(InMemoryResetService::new());

    let reset_uid = ResetUid::from("t".repeat(1024));
    service.inner().seed_pending(
        reset_uid.clone(),
        TwoFaOwnerUid::from("user-42"),
        TwoFaType::from("totp"),
    );

    let body = serde_json::to_vec(&serde_json::json!({
        "traceId": "abc-2",
        "resetUid": reset_uid.as_str(),
    }))
    .unwrap();
    let finish: TwoFaResetFinishRequest = decode_request(&body).unwrap();

    let confirmation = service.reset_finish(finish).await.unwrap();
    assert_eq!(confirmation.as_str(), "confirmed");
    assert_eq!(service.inner().calls(), 1);
}
