//! Property key namespaces and write-path validation.
//!
//! Keys are resolved client-side before any call is issued. Three namespaces
//! exist: free-form auxiliary keys under `Aux/`, driver-owned keys under
//! `StorDriver/`, and a small registry of unqualified well-known keys. The
//! write rules follow from ownership: auxiliary keys are always writable,
//! driver keys never are, and unqualified keys must be well known.

pub mod commands;

use crate::error::ClientError;

/// Separator between a namespace prefix and the local name.
pub const NAMESPACE_SEPARATOR: char = '/';

/// Prefix of the auxiliary namespace.
pub const NAMESPC_AUXILIARY: &str = "Aux";

/// Prefix of the storage-driver namespace.
pub const NAMESPC_STORAGE_DRIVER: &str = "StorDriver";

/// Well-known key selecting the storage pool a resource deploys into.
pub const KEY_STOR_POOL_NAME: &str = "StorPoolName";

/// Well-known key selecting the preferred network interface of a node.
pub const KEY_PREF_NIC: &str = "PrefNic";

/// Unqualified keys the controller interprets directly.
const WELL_KNOWN_KEYS: &[&str] = &[KEY_STOR_POOL_NAME, KEY_PREF_NIC];

/// Namespace a property key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropNamespace {
    /// Free-form user keys under `Aux/`.
    Auxiliary,
    /// Driver-owned keys under `StorDriver/`; read-only from the client.
    StorageDriver,
    /// No recognized prefix.
    Unqualified,
}

impl PropNamespace {
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            PropNamespace::Auxiliary => Some(NAMESPC_AUXILIARY),
            PropNamespace::StorageDriver => Some(NAMESPC_STORAGE_DRIVER),
            PropNamespace::Unqualified => None,
        }
    }
}

/// Split a key into its namespace and local name.
///
/// Only the first separator is significant; the local name may itself
/// contain separators. A key whose prefix is not a recognized namespace
/// resolves as unqualified with the whole key as the local name.
pub fn resolve(key: &str) -> (PropNamespace, &str) {
    if let Some((prefix, local)) = key.split_once(NAMESPACE_SEPARATOR) {
        match prefix {
            NAMESPC_AUXILIARY => return (PropNamespace::Auxiliary, local),
            NAMESPC_STORAGE_DRIVER => return (PropNamespace::StorageDriver, local),
            _ => {}
        }
    }
    (PropNamespace::Unqualified, key)
}

/// Inverse of [`resolve`]: build the full key for a local name.
pub fn qualify(namespace: PropNamespace, local: &str) -> String {
    match namespace.prefix() {
        Some(prefix) => format!("{}{}{}", prefix, NAMESPACE_SEPARATOR, local),
        None => local.to_string(),
    }
}

/// Whether `name` is an unqualified key the controller interprets directly.
pub fn is_well_known(name: &str) -> bool {
    WELL_KNOWN_KEYS.contains(&name)
}

/// Validate a local name given on the auxiliary write path and return the
/// qualified wire key.
///
/// Callers pass the bare name; qualification happens here so the same name
/// round-trips through listings. Names colliding with a well-known key are
/// rejected before any call is issued.
pub fn validate_aux_name(local: &str) -> Result<String, ClientError> {
    if local.is_empty() {
        return Err(ClientError::Validation(
            "auxiliary property name must not be empty".to_string(),
        ));
    }
    if local.contains(NAMESPACE_SEPARATOR) {
        return Err(ClientError::Validation(format!(
            "auxiliary property name '{}' must not contain '{}'",
            local, NAMESPACE_SEPARATOR
        )));
    }
    if is_well_known(local) {
        return Err(ClientError::Validation(format!(
            "'{}' is a well-known key; set it without --aux",
            local
        )));
    }
    Ok(qualify(PropNamespace::Auxiliary, local))
}

/// Validate a full key given on the plain write path and return the wire key.
pub fn validate_write_key(key: &str) -> Result<String, ClientError> {
    match resolve(key) {
        (PropNamespace::Auxiliary, local) => {
            if local.is_empty() {
                return Err(ClientError::Validation(
                    "auxiliary property name must not be empty".to_string(),
                ));
            }
            Ok(key.to_string())
        }
        (PropNamespace::StorageDriver, _) => Err(ClientError::Validation(format!(
            "'{}' is in the driver-owned '{}' namespace and cannot be set",
            key, NAMESPC_STORAGE_DRIVER
        ))),
        (PropNamespace::Unqualified, local) => {
            if is_well_known(local) {
                Ok(key.to_string())
            } else {
                Err(ClientError::Validation(format!(
                    "'{}' is not a well-known key; use --aux to store it under '{}{}'",
                    key, NAMESPC_AUXILIARY, NAMESPACE_SEPARATOR
                )))
            }
        }
    }
}
