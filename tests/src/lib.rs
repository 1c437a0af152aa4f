//! # Conduit Test Suite
//!
//! Unified test crate containing:
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-crate flows
//!     ├── rpc_flows.rs  # Request/response correlation end to end
//!     └── gate_boundary.rs  # The gate at the dispatch boundary
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p conduit-tests
//!
//! # Benchmarks
//! cargo bench -p conduit-tests
//! ```

pub mod integration;

/// Shared fixtures for integration tests and benchmarks.
pub mod fixtures {
    use conduit_types::{Authority, EndpointAddress, Entity, Resource};

    pub const TTL: u32 = 1_000;

    /// The local node's identity.
    pub fn local_authority() -> Authority {
        Authority::new("vin.veh.example.org")
    }

    pub fn remote_authority() -> Authority {
        Authority::new("bo.example.org")
    }

    /// `/test.app/1/rpc.response` - where the client receives responses.
    pub fn client_response_address() -> EndpointAddress {
        EndpointAddress::local(Entity::new("test.app", 1), Some(Resource::rpc_response()))
    }

    /// `/test.srv/1/rpc.UpdateDoor` - the method being invoked.
    pub fn method_address() -> EndpointAddress {
        EndpointAddress::local(
            Entity::new("test.srv", 1),
            Some(Resource::rpc_request("UpdateDoor")),
        )
    }

    /// `/vehicle.door/1/door.front_left#Door` - a publish topic.
    pub fn topic_address() -> EndpointAddress {
        EndpointAddress::local(
            Entity::new("vehicle.door", 1),
            Some(Resource::new(
                "door",
                Some("front_left".into()),
                Some("Door".into()),
            )),
        )
    }

    pub fn payload() -> Vec<u8> {
        vec![0x10, 0x65]
    }
}
