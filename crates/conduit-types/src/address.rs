//! # Endpoint Address Model
//!
//! Hierarchical addresses identifying communicating components:
//! `authority` (remote host) / `entity` (software component + major
//! version) / `resource` (topic, method, or other addressable surface).
//!
//! A fully-absent address is the "empty" sentinel meaning "no
//! destination". An address with an authority different from the local
//! node's identity is remote.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resource name reserved for RPC addressing.
pub const RPC_RESOURCE_NAME: &str = "rpc";

/// Resource instance reserved for RPC response delivery.
pub const RPC_RESPONSE_INSTANCE: &str = "response";

/// Identifier of the host a remote endpoint lives on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Authority {
    /// Host name, e.g. `"telemetry.east.example.org"`.
    pub name: String,
}

impl Authority {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A software component reachable at an address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    /// Component name, e.g. `"vehicle.door"`.
    pub name: String,
    /// Major version of the component's interface.
    pub version_major: Option<u32>,
}

impl Entity {
    pub fn new(name: impl Into<String>, version_major: u32) -> Self {
        Self {
            name: name.into(),
            version_major: Some(version_major),
        }
    }

    /// An entity addressed without a version constraint.
    pub fn unversioned(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version_major: None,
        }
    }
}

/// The addressable surface within an entity: a topic, a method, or a
/// response slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub instance: Option<String>,
    /// Discriminates payload schemas published on the same resource.
    pub discriminator: Option<String>,
}

impl Resource {
    pub fn new(
        name: impl Into<String>,
        instance: Option<String>,
        discriminator: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            instance,
            discriminator,
        }
    }

    /// The resource addressing an RPC method, e.g. `rpc.UpdateDoor`.
    pub fn rpc_request(method: impl Into<String>) -> Self {
        Self {
            name: RPC_RESOURCE_NAME.to_string(),
            instance: Some(method.into()),
            discriminator: None,
        }
    }

    /// The resource an RPC response is delivered to.
    pub fn rpc_response() -> Self {
        Self {
            name: RPC_RESOURCE_NAME.to_string(),
            instance: Some(RPC_RESPONSE_INSTANCE.to_string()),
            discriminator: None,
        }
    }

    /// True iff this resource names a callable RPC method.
    #[must_use]
    pub fn is_rpc_method(&self) -> bool {
        self.name == RPC_RESOURCE_NAME
            && self
                .instance
                .as_deref()
                .is_some_and(|instance| instance != RPC_RESPONSE_INSTANCE)
    }

    /// True iff this resource is an RPC response slot.
    #[must_use]
    pub fn is_rpc_response(&self) -> bool {
        self.name == RPC_RESOURCE_NAME
            && self.instance.as_deref() == Some(RPC_RESPONSE_INSTANCE)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(instance) = &self.instance {
            write!(f, ".{instance}")?;
        }
        if let Some(discriminator) = &self.discriminator {
            write!(f, "#{discriminator}")?;
        }
        Ok(())
    }
}

/// Hierarchical endpoint address.
///
/// All fields absent is the empty address, used as the "no destination"
/// sentinel. Structural equality is derived; two addresses are equal iff
/// every present part matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EndpointAddress {
    pub authority: Option<Authority>,
    pub entity: Option<Entity>,
    pub resource: Option<Resource>,
}

impl EndpointAddress {
    /// The empty address.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assemble an address from optional parts.
    #[must_use]
    pub fn new(
        authority: Option<Authority>,
        entity: Option<Entity>,
        resource: Option<Resource>,
    ) -> Self {
        Self {
            authority,
            entity,
            resource,
        }
    }

    /// An address on the local node.
    #[must_use]
    pub fn local(entity: Entity, resource: Option<Resource>) -> Self {
        Self {
            authority: None,
            entity: Some(entity),
            resource,
        }
    }

    /// An address on a remote host.
    #[must_use]
    pub fn remote(authority: Authority, entity: Entity, resource: Option<Resource>) -> Self {
        Self {
            authority: Some(authority),
            entity: Some(entity),
            resource,
        }
    }

    /// True iff authority, entity, and resource are all absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.authority.is_none() && self.entity.is_none() && self.resource.is_none()
    }

    /// True iff the address names a host other than `local`.
    ///
    /// An address with no authority is local by definition.
    #[must_use]
    pub fn is_remote(&self, local: &Authority) -> bool {
        self.authority
            .as_ref()
            .is_some_and(|authority| authority != local)
    }

    /// True iff the address terminates in a callable RPC method.
    #[must_use]
    pub fn is_rpc_method(&self) -> bool {
        self.resource
            .as_ref()
            .is_some_and(Resource::is_rpc_method)
    }

    /// True iff the address terminates in an RPC response slot.
    #[must_use]
    pub fn is_rpc_response(&self) -> bool {
        self.resource
            .as_ref()
            .is_some_and(Resource::is_rpc_response)
    }
}

impl fmt::Display for EndpointAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "<empty>");
        }
        if let Some(authority) = &self.authority {
            write!(f, "//{}", authority.name)?;
        }
        if let Some(entity) = &self.entity {
            write!(f, "/{}", entity.name)?;
            if let Some(version) = entity.version_major {
                write!(f, "/{version}")?;
            }
        }
        if let Some(resource) = &self.resource {
            write!(f, "/{resource}")?;
        }
        Ok(())
    }
}
