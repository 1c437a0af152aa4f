//! # Validation Gate
//!
//! The single mandatory checkpoint before an envelope crosses the
//! dispatch boundary, outbound or inbound. `check_valid` is a pure
//! predicate with passthrough: on success it returns the envelope
//! unchanged, so it chains at any call site; on failure it rejects the
//! whole envelope.
//!
//! Validation dispatches on the message kind with an exhaustive `match`.
//! A kind added to [`MessageKind`] without a rule arm fails to compile.

use conduit_types::{Attributes, Envelope, MessageKind, ValidationError};
use tracing::debug;

/// Validate an envelope for its declared kind.
///
/// Returns the envelope unchanged on success. Rejection is total: an
/// envelope that fails any rule must never reach the dispatch bus.
pub fn check_valid(message: Envelope) -> Result<Envelope, ValidationError> {
    match validate_attributes(&message.attributes) {
        Ok(()) => Ok(message),
        Err(error) => {
            debug!(
                id = %message.attributes.id,
                kind = %message.attributes.kind,
                %error,
                "Envelope rejected at the gate"
            );
            Err(error)
        }
    }
}

/// Validate a bare attribute set.
pub fn validate_attributes(attributes: &Attributes) -> Result<(), ValidationError> {
    validate_common(attributes)?;
    match attributes.kind {
        MessageKind::Publish => validate_publish(attributes),
        MessageKind::Notification => validate_notification(attributes),
        MessageKind::Request => validate_request(attributes),
        MessageKind::Response => validate_response(attributes),
    }
}

/// Rules shared by every kind: a well-formed id, a named origin, and a
/// positive ttl whenever one is present.
fn validate_common(attributes: &Attributes) -> Result<(), ValidationError> {
    if !attributes.id.is_well_formed() {
        return Err(ValidationError::MalformedId {
            id: attributes.id.to_string(),
        });
    }
    if attributes.source.is_empty() {
        return Err(ValidationError::MissingSource);
    }
    if attributes.ttl == Some(0) {
        return Err(ValidationError::InvalidTtl);
    }
    Ok(())
}

fn validate_publish(attributes: &Attributes) -> Result<(), ValidationError> {
    if attributes.sink.as_ref().is_some_and(|sink| !sink.is_empty()) {
        return Err(ValidationError::UnexpectedSink {
            kind: attributes.kind,
        });
    }
    validate_not_correlated(attributes)
}

fn validate_notification(attributes: &Attributes) -> Result<(), ValidationError> {
    require_sink(attributes)?;
    validate_not_correlated(attributes)
}

fn validate_request(attributes: &Attributes) -> Result<(), ValidationError> {
    let sink = require_sink(attributes)?;
    if !sink.is_rpc_method() {
        return Err(ValidationError::SinkNotRpcMethod {
            sink: sink.to_string(),
        });
    }
    if attributes.ttl.is_none() {
        return Err(ValidationError::MissingTtl);
    }
    validate_not_correlated(attributes)
}

fn validate_response(attributes: &Attributes) -> Result<(), ValidationError> {
    require_sink(attributes)?;
    match attributes.correlation_id {
        None => Err(ValidationError::MissingCorrelationId),
        Some(correlation_id) if !correlation_id.is_well_formed() => {
            Err(ValidationError::MalformedCorrelationId {
                id: correlation_id.to_string(),
            })
        }
        Some(_) => Ok(()),
    }
}

/// Correlation id and comm status are response-only fields.
fn validate_not_correlated(attributes: &Attributes) -> Result<(), ValidationError> {
    if attributes.correlation_id.is_some() {
        return Err(ValidationError::UnexpectedCorrelationId {
            kind: attributes.kind,
        });
    }
    if attributes.comm_status.is_some() {
        return Err(ValidationError::UnexpectedCommStatus {
            kind: attributes.kind,
        });
    }
    Ok(())
}

fn require_sink(attributes: &Attributes) -> Result<&conduit_types::EndpointAddress, ValidationError> {
    match attributes.sink.as_ref() {
        Some(sink) if !sink.is_empty() => Ok(sink),
        _ => Err(ValidationError::MissingSink {
            kind: attributes.kind,
        }),
    }
}
