//! # Conduit Transport - Envelope Factory, Gate, and Transforms
//!
//! The behavior layer over `conduit-types`.
//!
//! ## Message Flow
//!
//! ```text
//! ┌──────────────┐  build    ┌──────────────┐  check_valid   ┌──────────┐
//! │    Caller    │ ────────> │   Envelope   │ ─────────────> │ Dispatch │
//! │  (factory)   │           │              │    (gate)      │   bus    │
//! └──────────────┘           └──────────────┘                └──────────┘
//!                                                                  │
//!                   transforms (rewrite / synthesize)              │
//!                 ┌────────────────────────────────────────────────┘
//!                 ▼
//!          routing hops, RPC stubs, dispatchers
//! ```
//!
//! ## Rules
//!
//! - **Gate is mandatory**: every envelope passes `check_valid` before it
//!   crosses the dispatch boundary, outbound or inbound. Rejection is
//!   total, never partial.
//! - **Copy-on-write**: every transform returns a new envelope; the input
//!   is never touched.
//! - **One terminal outcome per request**: see [`correlation`].

pub mod builder;
pub mod correlation;
pub mod transform;
pub mod validate;

// Re-export main types
pub use builder::AttributesBuilder;
pub use correlation::CallState;
pub use transform::{
    add_sink_if_empty, build_failed_response_message, build_response_message, clear_sink,
    replace_sink, replace_source, set_sink,
};
pub use validate::check_valid;
