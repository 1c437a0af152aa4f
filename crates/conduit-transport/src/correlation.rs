//! # Correlation Contract
//!
//! The request/response correlation state machine is owned by the
//! dispatcher, which keeps the pending table and the ttl timers. The
//! contract it must honor is fixed here:
//!
//! - A request starts `Pending`.
//! - `Pending -> Completed` when a response with a matching
//!   `correlation_id` arrives before the ttl elapses.
//! - `Pending -> Expired` when the ttl elapses first. The dispatcher must
//!   then synthesize
//!   [`build_failed_response_message`](crate::build_failed_response_message)
//!   with [`StatusCode::DeadlineExceeded`](conduit_types::StatusCode),
//!   so the caller observes exactly one terminal outcome.
//! - A response arriving after a terminal state is discarded, never
//!   delivered twice.
//!
//! The guarantees of this layer — never-reused ids, immutable attribute
//! sets, copy-on-write transforms — are what allow the dispatcher's
//! table to be read and written concurrently without stale data.

use serde::{Deserialize, Serialize};

/// Lifecycle of a pending RPC call, as tracked by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallState {
    /// Waiting for a response, ttl timer running.
    Pending,
    /// A correlated response arrived in time.
    Completed,
    /// The ttl elapsed; a deadline-exceeded failure was synthesized.
    Expired,
}

impl CallState {
    /// Terminal states admit no further transitions; any response
    /// arriving afterwards is dropped.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}
