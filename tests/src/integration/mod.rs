//! Cross-crate integration flows.

pub mod rpc_flows;
