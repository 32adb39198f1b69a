//! Trace context carried by every 2FA reset request.
//!
//! A [`TraceId`] is the correlation identifier a request travels with. It can
//! be taken from W3C trace context headers (traceparent and tracestate), from
//! a plain `x-request-id`, from the active OpenTelemetry span, or generated.
//!
//! See: https://www.w3.org/TR/trace-context/

use std::fmt;

use http::HeaderMap;
use opentelemetry::trace::TraceContextExt;
use serde::{Deserialize, Serialize};
use tracing::Span;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use uuid::Uuid;

use crate::error::ContractError;

/// Header name for W3C traceparent
pub const TRACEPARENT_HEADER: &str = "traceparent";

/// Header name for W3C tracestate
pub const TRACESTATE_HEADER: &str = "tracestate";

/// Header name for request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Opaque correlation identifier. Serialized as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraceId(String);

impl TraceId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Fresh random identifier for requests that arrive without one.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Trace id of the active OpenTelemetry span, if there is one.
    pub fn from_current_span() -> Option<Self> {
        let span = Span::current();
        let context = span.context();
        let otel_span = context.span();
        let span_context = otel_span.span_context();

        if span_context.is_valid() {
            Some(Self(span_context.trace_id().to_string()))
        } else {
            None
        }
    }

    /// Parses a W3C `traceparent` value (`version-traceid-parentid-flags`) and
    /// keeps the trace-id segment.
    pub fn from_traceparent(value: &str) -> Result<Self, ContractError> {
        let fields: Vec<&str> = value.trim().split('-').collect();
        let [version, trace_id, parent_id, flags] = fields.as_slice() else {
            return Err(ContractError::InvalidTraceparent(format!(
                "expected 4 fields, found {}",
                fields.len()
            )));
        };

        if !is_lower_hex(version, 2) || *version == "ff" {
            return Err(ContractError::InvalidTraceparent(format!(
                "unsupported version '{}'",
                version
            )));
        }
        if !is_lower_hex(trace_id, 32) || is_all_zero(trace_id) {
            return Err(ContractError::InvalidTraceparent(
                "trace-id must be 32 lowercase hex digits and not all zero".to_string(),
            ));
        }
        if !is_lower_hex(parent_id, 16) || is_all_zero(parent_id) {
            return Err(ContractError::InvalidTraceparent(
                "parent-id must be 16 lowercase hex digits and not all zero".to_string(),
            ));
        }
        if !is_lower_hex(flags, 2) {
            return Err(ContractError::InvalidTraceparent(format!(
                "invalid trace-flags '{}'",
                flags
            )));
        }

        Ok(Self(trace_id.to_string()))
    }

    /// Prefers a valid `traceparent`, then falls back to `x-request-id`.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        if let Some(traceparent) = extract_traceparent(headers) {
            match Self::from_traceparent(&traceparent) {
                Ok(trace_id) => return Some(trace_id),
                Err(err) => tracing::debug!(error = %err, "Ignoring malformed traceparent"),
            }
        }

        extract_request_id(headers)
            .filter(|id| !id.trim().is_empty())
            .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TraceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for TraceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TraceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Capability of carrying a correlation identifier across service boundaries.
pub trait Traceable {
    fn trace_id(&self) -> &TraceId;
}

impl Traceable for TraceId {
    fn trace_id(&self) -> &TraceId {
        self
    }
}

fn is_lower_hex(value: &str, len: usize) -> bool {
    value.len() == len
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

fn is_all_zero(value: &str) -> bool {
    value.bytes().all(|b| b == b'0')
}

/// Write the message's trace id as `x-request-id`, plus W3C headers for the
/// current span when one is active.
pub fn inject_trace_headers<T: Traceable + ?Sized>(headers: &mut HeaderMap, message: &T) {
    if let Ok(value) = message.trace_id().as_str().parse() {
        headers.insert(REQUEST_ID_HEADER, value);
    }

    inject_trace_context(headers);
}

fn inject_trace_context(headers: &mut HeaderMap) {
    let span = Span::current();
    let context = span.context();
    let otel_span = context.span();
    let span_context = otel_span.span_context();

    if !span_context.is_valid() {
        return;
    }

    // version is always "00" for the current spec
    let traceparent = format!(
        "00-{}-{}-{:02x}",
        span_context.trace_id(),
        span_context.span_id(),
        span_context.trace_flags().to_u8()
    );
    if let Ok(value) = traceparent.parse() {
        headers.insert(TRACEPARENT_HEADER, value);
    }

    let tracestate = span_context.trace_state().header();
    if !tracestate.is_empty()
        && let Ok(value) = tracestate.parse()
    {
        headers.insert(TRACESTATE_HEADER, value);
    }
}

/// Raw `traceparent` header value, unparsed.
pub fn extract_traceparent(headers: &HeaderMap) -> Option<String> {
    headers
        .get(TRACEPARENT_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}

/// Raw `tracestate` header value.
pub fn extract_tracestate(headers: &HeaderMap) -> Option<String> {
    headers
        .get(TRACESTATE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}

/// Caller-supplied correlation id.
pub fn extract_request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}
