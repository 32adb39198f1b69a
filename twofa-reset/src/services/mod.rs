//! Seam to the external service that performs 2FA resets.
//!
//! This crate only fixes the messages. Implementations of
//! [`TwoFaResetService`] own eligibility checks, token issuance and storage.

pub mod error;
mod reset;

pub use error::ResetServiceError;
pub use reset::{InstrumentedResetService, TwoFaResetService};
