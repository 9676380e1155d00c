//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::{error_exit_code, map_error};
pub use parse::{
    Cli, Commands, NodeCommands, ResourceCommands, ResourceDefinitionCommands, SnapshotCommands,
    SnapshotResourceCommands, SnapshotVolumeDefinitionCommands, StoragePoolCommands,
    StoragePoolDefinitionCommands, VolumeDefinitionCommands,
};
pub use presentation::{
    format_property_list_json, format_property_list_text, format_replies_json,
    format_replies_text, format_snapshot_list_json, format_snapshot_list_text, TableStyle,
};
pub use route::{CommandOutput, OutputOptions, RunContext};
