//! Controller object addressing for property commands.
//!
//! A selector carries exactly the identifiers its object kind needs, so the
//! transport layer can derive the request path without positional guesswork.

use std::fmt;

/// Kinds of controller objects that carry a property container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Node,
    StoragePool,
    StoragePoolDefinition,
    ResourceDefinition,
    VolumeDefinition,
    Resource,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ObjectKind::Node => "node",
            ObjectKind::StoragePool => "storage pool",
            ObjectKind::StoragePoolDefinition => "storage pool definition",
            ObjectKind::ResourceDefinition => "resource definition",
            ObjectKind::VolumeDefinition => "volume definition",
            ObjectKind::Resource => "resource",
        };
        write!(f, "{}", label)
    }
}

/// Fully-addressed controller object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectSelector {
    Node {
        node: String,
    },
    StoragePool {
        node: String,
        pool: String,
    },
    StoragePoolDefinition {
        pool: String,
    },
    ResourceDefinition {
        resource: String,
    },
    VolumeDefinition {
        resource: String,
        volume_number: u32,
    },
    Resource {
        node: String,
        resource: String,
    },
}

impl ObjectSelector {
    pub fn kind(&self) -> ObjectKind {
        match self {
            ObjectSelector::Node { .. } => ObjectKind::Node,
            ObjectSelector::StoragePool { .. } => ObjectKind::StoragePool,
            ObjectSelector::StoragePoolDefinition { .. } => ObjectKind::StoragePoolDefinition,
            ObjectSelector::ResourceDefinition { .. } => ObjectKind::ResourceDefinition,
            ObjectSelector::VolumeDefinition { .. } => ObjectKind::VolumeDefinition,
            ObjectSelector::Resource { .. } => ObjectKind::Resource,
        }
    }
}

impl fmt::Display for ObjectSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectSelector::Node { node } => write!(f, "node '{}'", node),
            ObjectSelector::StoragePool { node, pool } => {
                write!(f, "storage pool '{}' on node '{}'", pool, node)
            }
            ObjectSelector::StoragePoolDefinition { pool } => {
                write!(f, "storage pool definition '{}'", pool)
            }
            ObjectSelector::ResourceDefinition { resource } => {
                write!(f, "resource definition '{}'", resource)
            }
            ObjectSelector::VolumeDefinition { resource, volume_number } => {
                write!(f, "volume definition {} of '{}'", volume_number, resource)
            }
            ObjectSelector::Resource { node, resource } => {
                write!(f, "resource '{}' on node '{}'", resource, node)
            }
        }
    }
}
