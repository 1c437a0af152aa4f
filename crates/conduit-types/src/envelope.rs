//! # Message Envelope
//!
//! An attribute set plus an optional opaque payload: the unit exchanged
//! between endpoints. The payload's encoding is the business of the two
//! endpoints; this layer never inspects it.

use crate::attributes::Attributes;
use serde::{Deserialize, Serialize};

/// Opaque payload bytes.
pub type Payload = Vec<u8>;

/// The unit exchanged between endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub attributes: Attributes,
    pub payload: Option<Payload>,
}

impl Envelope {
    #[must_use]
    pub fn new(attributes: Attributes, payload: Option<Payload>) -> Self {
        Self {
            attributes,
            payload,
        }
    }

    /// An envelope with no payload.
    #[must_use]
    pub fn from_attributes(attributes: Attributes) -> Self {
        Self {
            attributes,
            payload: None,
        }
    }
}
