//! JSON wire codec for reset messages.
//!
//! Requests are parsed then validated, mirroring what a consuming service
//! does at its edge. Responses follow [`DtoResponse`]: a payload-less
//! acknowledgement travels as an empty body, every other response as a
//! non-blank JSON string.

use serde::{de::DeserializeOwned, Serialize};
use twofa_core::error::ContractError;
use validator::Validate;

/// Response side of the contract.
pub trait DtoResponse: Serialize + DeserializeOwned {
    /// False for acknowledgement-only responses.
    const HAS_PAYLOAD: bool = true;

    /// A payload that is present but carries nothing.
    fn is_blank(&self) -> bool {
        false
    }
}

pub fn decode_request<T>(body: &[u8]) -> Result<T, ContractError>
where
    T: DeserializeOwned + Validate,
{
    let request: T = serde_json::from_slice(body)?;
    request.validate()?;
    Ok(request)
}

pub fn encode_request<T>(request: &T) -> Result<Vec<u8>, ContractError>
where
    T: Serialize + Validate,
{
    request.validate()?;
    Ok(serde_json::to_vec(request)?)
}

pub fn encode_response<R: DtoResponse>(response: &R) -> Result<Vec<u8>, ContractError> {
    if !R::HAS_PAYLOAD {
        return Ok(Vec::new());
    }
    if response.is_blank() {
        return Err(ContractError::MissingPayload);
    }
    Ok(serde_json::to_vec(response)?)
}

pub fn decode_response<R: DtoResponse>(body: &[u8]) -> Result<R, ContractError> {
    let body = body.trim_ascii();

    if !R::HAS_PAYLOAD {
        // Some transports render "no body" as a JSON null.
        if body.is_empty() || body == b"null" {
            return Ok(serde_json::from_slice(b"null")?);
        }
        return Err(ContractError::UnexpectedPayload);
    }

    if body.is_empty() {
        return Err(ContractError::MissingPayload);
    }
    let response: R = serde_json::from_slice(body)?;
    if response.is_blank() {
        return Err(ContractError::MissingPayload);
    }
    Ok(response)
}
