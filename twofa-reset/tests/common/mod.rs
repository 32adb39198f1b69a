#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use twofa_reset::dtos::{
    TwoFaResetComposedRequest, TwoFaResetFinishRequest, TwoFaResetFinishResponse,
    TwoFaResetRequest, TwoFaResetResponse, TwoFaResetStartRequest, TwoFaResetStartResponse,
};
use twofa_reset::models::{ResetUid, TwoFaOwnerUid, TwoFaType};
use twofa_reset::services::{ResetServiceError, TwoFaResetService};
use uuid::Uuid;

pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

/// Stand-in for the external reset service: one pending token per owner and
/// type, tokens are single use.
pub struct InMemoryResetService {
    known_owners: Vec<TwoFaOwnerUid>,
    supported_types: Vec<TwoFaType>,
    pending: Mutex<HashMap<ResetUid, (TwoFaOwnerUid, TwoFaType)>>,
    completed: Mutex<Vec<(TwoFaOwnerUid, TwoFaType)>>,
    calls: AtomicUsize,
}

impl InMemoryResetService {
    pub fn new() -> Self {
        Self {
            known_owners: vec!["user-42".into(), "user-7".into()],
            supported_types: vec!["totp".into(), "sms".into()],
            pending: Mutex::new(HashMap::new()),
            completed: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Registers a pending reset under a caller-chosen token.
    pub fn seed_pending(&self, reset_uid: ResetUid, owner: TwoFaOwnerUid, twofa_type: TwoFaType) {
        self.pending
            .lock()
            .unwrap()
            .insert(reset_uid, (owner, twofa_type));
    }

    pub fn completed(&self) -> Vec<(TwoFaOwnerUid, TwoFaType)> {
        self.completed.lock().unwrap().clone()
    }

    fn check(&self, owner: &TwoFaOwnerUid, twofa_type: &TwoFaType) -> Result<(), ResetServiceError> {
        if !self.known_owners.contains(owner) {
            return Err(ResetServiceError::UnknownOwner);
        }
        if !self.supported_types.contains(twofa_type) {
            return Err(ResetServiceError::UnsupportedType(twofa_type.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TwoFaResetService for InMemoryResetService {
    async fn reset_start(
        &self,
        request: TwoFaResetStartRequest,
    ) -> Result<TwoFaResetStartResponse, ResetServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.check(&request.owner_uid, &request.twofa_type)?;

        let mut pending = self.pending.lock().unwrap();
        let in_progress = pending
            .values()
            .any(|(owner, kind)| *owner == request.owner_uid && *kind == request.twofa_type);
        if in_progress {
            return Err(ResetServiceError::ResetInProgress);
        }

        let reset_uid = ResetUid::from(format!("token-{}", Uuid::new_v4()));
        pending.insert(reset_uid.clone(), (request.owner_uid, request.twofa_type));
        Ok(TwoFaResetStartResponse::from(reset_uid))
    }

    async fn reset_finish(
        &self,
        request: TwoFaResetFinishRequest,
    ) -> Result<TwoFaResetFinishResponse, ResetServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let entry = self
            .pending
            .lock()
            .unwrap()
            .remove(&request.reset_uid)
            .ok_or(ResetServiceError::InvalidResetUid)?;

        self.completed.lock().unwrap().push(entry);
        Ok(TwoFaResetFinishResponse::new("confirmed"))
    }

    async fn reset(
        &self,
        request: TwoFaResetRequest,
    ) -> Result<TwoFaResetResponse, ResetServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.check(&request.owner_uid, &request.twofa_type)?;
        self.completed
            .lock()
            .unwrap()
            .push((request.owner_uid, request.twofa_type));
        Ok(TwoFaResetResponse)
    }

    async fn reset_composed(
        &self,
        request: TwoFaResetComposedRequest,
    ) -> Result<TwoFaResetResponse, ResetServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.check(&request.owner_uid, &request.base.twofa_type)?;
        self.completed
            .lock()
            .unwrap()
            .push((request.owner_uid, request.base.twofa_type));
        Ok(TwoFaResetResponse)
    }
}

/// Collaborator that breaks the contract by answering with blank strings.
pub struct BlankTokenService;

#[async_trait]
impl TwoFaResetService for BlankTokenService {
    async fn reset_start(
        &self,
        _request: TwoFaResetStartRequest,
    ) -> Result<TwoFaResetStartResponse, ResetServiceError> {
        Ok(TwoFaResetStartResponse::from(ResetUid::from("")))
    }

    async fn reset_finish(
        &self,
        _request: TwoFaResetFinishRequest,
    ) -> Result<TwoFaResetFinishResponse, ResetServiceError> {
        Ok(TwoFaResetFinishResponse::new(" "))
    }

    async fn reset(
        &self,
        _request: TwoFaResetRequest,
    ) -> Result<TwoFaResetResponse, ResetServiceError> {
        Ok(TwoFaResetResponse)
    }

    async fn reset_composed(
        &self,
        _request: TwoFaResetComposedRequest,
    ) -> Result<TwoFaResetResponse, ResetServiceError> {
        Ok(TwoFaResetResponse)
    }
}
