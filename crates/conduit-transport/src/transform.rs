//! # Envelope Transform Operations
//!
//! Pure rewrite and synthesis operations used by routing hops and RPC
//! stubs. Every function is copy-on-write: the input envelope is never
//! touched, a new value is returned.
//!
//! Destination rewriting is two explicit operations, [`set_sink`] and
//! [`clear_sink`]; [`replace_sink`] is a thin convenience wrapper that
//! treats an empty address as "clear".

use crate::builder::AttributesBuilder;
use conduit_types::{EndpointAddress, Envelope, Payload, StatusCode};

/// Overwrite the message's source address.
#[must_use]
pub fn replace_source(message: &Envelope, source: EndpointAddress) -> Envelope {
    let mut attributes = message.attributes.clone();
    attributes.source = source;
    Envelope::new(attributes, message.payload.clone())
}

/// Overwrite the message's sink address.
#[must_use]
pub fn set_sink(message: &Envelope, sink: EndpointAddress) -> Envelope {
    let mut attributes = message.attributes.clone();
    attributes.sink = Some(sink);
    Envelope::new(attributes, message.payload.clone())
}

/// Clear the message's sink address.
#[must_use]
pub fn clear_sink(message: &Envelope) -> Envelope {
    let mut attributes = message.attributes.clone();
    attributes.sink = None;
    Envelope::new(attributes, message.payload.clone())
}

/// Overwrite the sink, treating an empty address as [`clear_sink`].
#[must_use]
pub fn replace_sink(message: &Envelope, sink: EndpointAddress) -> Envelope {
    if sink.is_empty() {
        clear_sink(message)
    } else {
        set_sink(message, sink)
    }
}

/// Set the sink only if it is currently absent or empty. Idempotent.
#[must_use]
pub fn add_sink_if_empty(message: &Envelope, sink: EndpointAddress) -> Envelope {
    let current = message.attributes.sink.as_ref();
    if current.is_none_or(EndpointAddress::is_empty) {
        replace_sink(message, sink)
    } else {
        message.clone()
    }
}

/// Synthesize the response to `request`, carrying `payload`.
///
/// The response's attributes derive entirely from the request: delivered
/// to the request's source, correlated to the request's id, at the
/// request's priority.
///
/// Precondition, not re-checked here: `request` is a Request envelope
/// that passed the gate.
#[must_use]
pub fn build_response_message(request: &Envelope, payload: Payload) -> Envelope {
    Envelope::new(
        AttributesBuilder::response(&request.attributes).build(),
        Some(payload),
    )
}

/// Synthesize a failed response to `request`: no payload, `comm_status`
/// set to `code`.
///
/// To be used only by dispatchers and gateways. This terminates the
/// caller's pending call without a real reply, so handing it to anything
/// else breaks the one-terminal-outcome rule.
#[must_use]
pub fn build_failed_response_message(request: &Envelope, code: StatusCode) -> Envelope {
    Envelope::from_attributes(
        AttributesBuilder::response(&request.attributes)
            .with_comm_status(code)
            .build(),
    )
}
