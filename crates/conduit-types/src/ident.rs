//! # Message Identifiers
//!
//! Time-ordered, globally unique identifiers assigned exactly once, at
//! attribute construction.
//!
//! ## Identifier Layout (UUID version 7)
//!
//! - 48 bits: unix-epoch milliseconds
//! - 4 bits:  version (`0b0111`)
//! - 12 bits: monotonic in-process counter
//! - 2 bits:  variant (`0b10`)
//! - 62 bits: random tail
//!
//! Timestamp and counter occupy the most significant bytes, so the byte
//! order of an identifier is its creation order. The generator state only
//! moves forward: identifiers stay strictly monotonic per process even
//! when the wall clock stalls or steps backwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Bits reserved for the per-millisecond counter.
const COUNTER_BITS: u32 = 12;

/// A unique, time-ordered message identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Obtain a fresh identifier from the process-wide generator.
    #[must_use]
    pub fn generate() -> Self {
        GENERATOR.next_id()
    }

    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// True iff the identifier could have been produced by the generator:
    /// version 7, RFC variant, nonzero timestamp.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.0.get_version_num() == 7
            && self.0.get_variant() == uuid::Variant::RFC4122
            && self.unix_ts_millis() > 0
    }

    /// Unix-epoch milliseconds embedded at creation time.
    ///
    /// The dispatcher derives request expiry from this plus the ttl.
    #[must_use]
    pub fn unix_ts_millis(&self) -> u64 {
        let bytes = self.0.as_bytes();
        let mut millis = [0u8; 8];
        millis[2..8].copy_from_slice(&bytes[0..6]);
        u64::from_be_bytes(millis)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MessageId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Lock-free identifier generator.
///
/// State packs `millis << 12 | counter` into a single atomic. Each draw
/// advances to `max(now << 12, previous + 1)`; a counter overflow within
/// one millisecond borrows from the next one.
pub struct IdGenerator {
    state: AtomicU64,
}

impl IdGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: AtomicU64::new(0),
        }
    }

    /// Produce the next identifier, strictly greater than all previous
    /// identifiers from this generator.
    pub fn next_id(&self) -> MessageId {
        let mut previous = self.state.load(Ordering::Acquire);
        let state = loop {
            let next = (Self::current_millis() << COUNTER_BITS).max(previous + 1);
            match self.state.compare_exchange_weak(
                previous,
                next,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => break next,
                Err(actual) => previous = actual,
            }
        };

        let millis = state >> COUNTER_BITS;
        let counter = (state & ((1 << COUNTER_BITS) - 1)) as u16;
        let tail: u64 = rand::random();

        let mut bytes = [0u8; 16];
        bytes[0..6].copy_from_slice(&millis.to_be_bytes()[2..8]);
        bytes[6] = 0x70 | (counter >> 8) as u8;
        bytes[7] = (counter & 0xFF) as u8;
        bytes[8] = 0x80 | ((tail >> 56) as u8 & 0x3F);
        bytes[9..16].copy_from_slice(&tail.to_be_bytes()[1..8]);

        MessageId(Uuid::from_bytes(bytes))
    }

    fn current_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide generator backing [`MessageId::generate`].
static GENERATOR: IdGenerator = IdGenerator::new();
