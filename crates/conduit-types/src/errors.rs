//! # Validation Errors
//!
//! The single error kind raised by the validation gate. Every variant
//! names one violated structural rule and maps to `INVALID_ARGUMENT`;
//! errors are raised synchronously and propagated to the caller, never
//! queued or retried.

use crate::attributes::MessageKind;
use crate::status::StatusCode;
use thiserror::Error;

/// A structural or semantic rule violated by an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Every message must name its origin.
    #[error("Missing source address")]
    MissingSource,

    /// The id was not produced by the identifier generator.
    #[error("Malformed message id: {id}")]
    MalformedId { id: String },

    /// Request, notification, and response messages must name a
    /// destination.
    #[error("Missing sink address for {kind} message")]
    MissingSink { kind: MessageKind },

    /// Publish messages are destination-free.
    #[error("Sink must be empty for {kind} message")]
    UnexpectedSink { kind: MessageKind },

    /// A request must address a callable method.
    #[error("Sink {sink} is not an rpc method address")]
    SinkNotRpcMethod { sink: String },

    /// Requests must carry an expiry.
    #[error("Missing ttl for request message")]
    MissingTtl,

    /// A ttl of zero would expire the message before dispatch.
    #[error("Invalid ttl: 0")]
    InvalidTtl,

    /// A response must name the request it answers.
    #[error("Missing correlation id for response message")]
    MissingCorrelationId,

    /// The correlation id must be a real request id.
    #[error("Malformed correlation id: {id}")]
    MalformedCorrelationId { id: String },

    /// Only responses correlate to a request.
    #[error("Correlation id must be empty for {kind} message")]
    UnexpectedCorrelationId { kind: MessageKind },

    /// Only responses report a delivery status.
    #[error("Comm status must be empty for {kind} message")]
    UnexpectedCommStatus { kind: MessageKind },
}

impl ValidationError {
    /// The status code a gateway reports for this rejection.
    #[must_use]
    pub fn code(&self) -> StatusCode {
        StatusCode::InvalidArgument
    }
}
