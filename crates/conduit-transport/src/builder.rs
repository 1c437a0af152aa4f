//! # Attribute Factory
//!
//! One constructor per message kind, each producing a fully-populated
//! attribute set with a fresh id from the generator. Optional fields are
//! set through `with_*` modifiers; the builder is consumed on every step,
//! so a half-built value can never leak.

use conduit_types::{
    Attributes, EndpointAddress, MessageId, MessageKind, Priority, StatusCode,
};

/// Builder for [`Attributes`], kind fixed at construction.
#[derive(Debug, Clone)]
pub struct AttributesBuilder {
    attributes: Attributes,
}

impl AttributesBuilder {
    /// Attributes for a publish message. `source` is the topic being
    /// published to; publish messages carry no destination.
    #[must_use]
    pub fn publish(source: EndpointAddress, priority: Priority) -> Self {
        Self {
            attributes: Attributes {
                id: MessageId::generate(),
                kind: MessageKind::Publish,
                source,
                sink: None,
                priority,
                ttl: None,
                token: None,
                correlation_id: None,
                comm_status: None,
            },
        }
    }

    /// Attributes for a directed notification.
    #[must_use]
    pub fn notification(
        source: EndpointAddress,
        sink: EndpointAddress,
        priority: Priority,
    ) -> Self {
        Self {
            attributes: Attributes {
                id: MessageId::generate(),
                kind: MessageKind::Notification,
                source,
                sink: Some(sink),
                priority,
                ttl: None,
                token: None,
                correlation_id: None,
                comm_status: None,
            },
        }
    }

    /// Attributes for an RPC request.
    ///
    /// `response_address` is where the eventual response must land, so it
    /// becomes the request's source; `method_address` is the method being
    /// invoked. The ttl is mandatory: every request expires.
    #[must_use]
    pub fn request(
        response_address: EndpointAddress,
        method_address: EndpointAddress,
        priority: Priority,
        ttl: u32,
    ) -> Self {
        Self {
            attributes: Attributes {
                id: MessageId::generate(),
                kind: MessageKind::Request,
                source: response_address,
                sink: Some(method_address),
                priority,
                ttl: Some(ttl),
                token: None,
                correlation_id: None,
                comm_status: None,
            },
        }
    }

    /// Attributes for the response to `request`.
    ///
    /// The request's attributes are the sole source of truth: the response
    /// is delivered to the request's source, correlates to the request's
    /// id, and inherits its priority. There is no other way to construct
    /// response attributes.
    #[must_use]
    pub fn response(request: &Attributes) -> Self {
        Self {
            attributes: Attributes {
                id: MessageId::generate(),
                kind: MessageKind::Response,
                source: request
                    .sink
                    .clone()
                    .unwrap_or_else(EndpointAddress::empty),
                sink: Some(request.source.clone()),
                priority: request.priority,
                ttl: None,
                token: None,
                correlation_id: Some(request.id),
                comm_status: None,
            },
        }
    }

    /// Set the time-to-live in milliseconds.
    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.attributes.ttl = Some(ttl);
        self
    }

    /// Attach an access token for permission enforcement.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.attributes.token = Some(token.into());
        self
    }

    /// Report a delivery failure. Responses only.
    #[must_use]
    pub fn with_comm_status(mut self, code: StatusCode) -> Self {
        self.attributes.comm_status = Some(code);
        self
    }

    /// Finish the attribute set.
    #[must_use]
    pub fn build(self) -> Attributes {
        self.attributes
    }
}
