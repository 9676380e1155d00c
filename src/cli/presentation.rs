//! CLI presentation: text and json formatters per command family.

mod props;
mod reply;
mod shared;
mod snapshot;

pub use props::{format_property_list_json, format_property_list_text};
pub use reply::{format_replies_json, format_replies_text};
pub use shared::TableStyle;
pub use snapshot::{format_snapshot_list_json, format_snapshot_list_text};
