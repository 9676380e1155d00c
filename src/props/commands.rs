//! Property command orchestration.
//!
//! Write-path key validation happens here, before any controller call, so a
//! rejected key costs no round trip. Listings pass controller keys through
//! untouched.

use crate::aggregate::CommandOutcome;
use crate::error::ClientError;
use crate::object::ObjectSelector;
use crate::props;
use crate::transport::Connection;
use std::collections::BTreeMap;
use tracing::debug;

pub struct PropertyCommandService;

/// Result of the list-properties command.
#[derive(Debug, Clone)]
pub struct PropertyListResult {
    pub object: ObjectSelector,
    pub properties: BTreeMap<String, String>,
}

impl PropertyCommandService {
    /// Set one property on a controller object.
    ///
    /// With `aux` the key is a bare local name and is qualified into the
    /// auxiliary namespace; otherwise it must already be a writable key.
    pub fn run_set(
        connection: &Connection,
        object: &ObjectSelector,
        key: &str,
        value: &str,
        aux: bool,
    ) -> Result<CommandOutcome, ClientError> {
        let wire_key = if aux {
            props::validate_aux_name(key)?
        } else {
            props::validate_write_key(key)?
        };
        debug!(object = %object, key = %wire_key, "setting property");
        let replies = connection.set_property(object, &wire_key, value)?;
        CommandOutcome::from_replies(replies)
    }

    pub fn run_list(
        connection: &Connection,
        object: &ObjectSelector,
    ) -> Result<PropertyListResult, ClientError> {
        let properties = connection.list_properties(object)?;
        Ok(PropertyListResult {
            object: object.clone(),
            properties,
        })
    }
}
