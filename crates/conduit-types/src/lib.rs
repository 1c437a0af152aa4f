//! # Conduit Types Crate
//!
//! This crate contains the endpoint address model, message identifiers,
//! attribute sets, and the `Envelope` exchanged between components.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate types are defined here.
//! - **Immutable Values**: An `Attributes` set is never mutated after
//!   construction; every rewrite produces a new value.
//! - **Envelope Integrity**: The envelope's `correlation_id` is the sole
//!   link between a response and the request it answers.

pub mod address;
pub mod attributes;
pub mod envelope;
pub mod errors;
pub mod ident;
pub mod status;

pub use address::{Authority, EndpointAddress, Entity, Resource};
pub use attributes::{Attributes, MessageKind, Priority};
pub use envelope::{Envelope, Payload};
pub use errors::ValidationError;
pub use ident::{IdGenerator, MessageId};
pub use status::StatusCode;
