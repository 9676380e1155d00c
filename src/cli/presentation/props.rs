//! Property presentation: key/value table and machine JSON.
//!
//! Listings are key-sorted and keys stay exactly as the controller reported
//! them, unknown namespaces included.

use crate::cli::presentation::shared::TableStyle;
use crate::error::ClientError;
use crate::props::commands::PropertyListResult;

pub fn format_property_list_text(result: &PropertyListResult, style: &TableStyle) -> String {
    let mut table = style.build_table(&["Key", "Value"]);
    for (key, value) in &result.properties {
        table.add_row(vec![key, value]);
    }
    table.to_string()
}

pub fn format_property_list_json(result: &PropertyListResult) -> Result<String, ClientError> {
    serde_json::to_string_pretty(&result.properties)
        .map_err(|e| ClientError::Internal(format!("failed to encode property list: {}", e)))
}
