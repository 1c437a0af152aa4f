//! # Message Attributes
//!
//! The metadata describing a message's kind, routing, QoS, and
//! correlation. An `Attributes` value is immutable once constructed:
//! there are no mutating methods, and every rewrite goes through the
//! transform operations, which clone.

use crate::address::EndpointAddress;
use crate::ident::MessageId;
use crate::status::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of message kinds.
///
/// Validation dispatches on this enum with an exhaustive `match`, so a
/// new kind cannot be added without also adding its rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    /// Fan-out to subscribers of the source topic. No destination.
    Publish,
    /// Directed one-way message.
    Notification,
    /// RPC call expecting exactly one terminal response.
    Request,
    /// The answer to a request, correlated by id.
    Response,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Publish => "PUBLISH",
            Self::Notification => "NOTIFICATION",
            Self::Request => "REQUEST",
            Self::Response => "RESPONSE",
        };
        write!(f, "{name}")
    }
}

/// QoS class, ordered lowest to highest urgency.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Critical,
}

/// The attribute set of a message.
///
/// Request/response flows use `correlation_id`: a response carries the id
/// of the request it answers, and nothing else links the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    /// Assigned exactly once, at construction, by the id generator.
    pub id: MessageId,
    pub kind: MessageKind,
    /// Origin of the message. For requests this is the address the
    /// response must be delivered to.
    pub source: EndpointAddress,
    /// Destination. Absent for publish messages.
    pub sink: Option<EndpointAddress>,
    pub priority: Priority,
    /// Time-to-live in milliseconds, measured from id creation time.
    /// Absent means the message never expires.
    pub ttl: Option<u32>,
    /// Opaque access token forwarded to permission enforcement.
    pub token: Option<String>,
    /// Response only: the id of the request being answered.
    pub correlation_id: Option<MessageId>,
    /// Response only: delivery failure reported by a dispatcher.
    pub comm_status: Option<StatusCode>,
}

impl Attributes {
    /// True iff the message's ttl has elapsed at `now_unix_millis`.
    ///
    /// Expiry is measured from the creation time embedded in the id; a
    /// message without a ttl never expires.
    #[must_use]
    pub fn is_expired(&self, now_unix_millis: u64) -> bool {
        match self.ttl {
            Some(ttl) => now_unix_millis > self.id.unix_ts_millis() + u64::from(ttl),
            None => false,
        }
    }
}
